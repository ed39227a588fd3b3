use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::contract::{Cost, Informed, Space, Weighted};

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("malformed graph definition: {info}")]
    Malformed { info: String },
    #[error("node `{node}` is not declared")]
    UnknownNode { node: String },
}

impl From<serde_json::Error> for GraphError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed {
            info: value.to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Directed weighted edge between two named nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub cost: Cost,
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ---> {} (cost {})", self.from, self.to, self.cost)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Serializable description of an explicit graph space.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphDef {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
    pub start: String,
    pub goals: Vec<String>,

    /// Heuristic estimates per node; nodes without an entry estimate zero.
    #[serde(default)]
    pub estimates: HashMap<String, Cost>,
}

////////////////////////////////////////////////////////////////////////////////

/// Explicit weighted digraph exposed as an [`Informed`] search space:
/// node names are the states, edges the actions.
#[derive(Debug)]
pub struct GraphSpace {
    start: String,
    goals: HashSet<String>,
    adj: HashMap<String, Vec<Edge>>,
    estimates: HashMap<String, Cost>,
}

impl GraphSpace {
    /// Builds the space from the definition, checking that the start node,
    /// every goal, every edge endpoint and every estimate key are declared.
    pub fn new(def: GraphDef) -> Result<Self, GraphError> {
        let nodes: HashSet<&str> = def.nodes.iter().map(String::as_str).collect();

        declared(&nodes, &def.start)?;
        for goal in def.goals.iter() {
            declared(&nodes, goal)?;
        }
        for edge in def.edges.iter() {
            declared(&nodes, &edge.from)?;
            declared(&nodes, &edge.to)?;
        }
        for node in def.estimates.keys() {
            declared(&nodes, node)?;
        }

        let mut adj: HashMap<String, Vec<Edge>> = HashMap::new();
        for edge in def.edges {
            adj.entry(edge.from.clone()).or_default().push(edge);
        }

        Ok(Self {
            start: def.start,
            goals: def.goals.into_iter().collect(),
            adj,
            estimates: def.estimates,
        })
    }

    /// Loads the space from the JSON form of [`GraphDef`].
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let def: GraphDef = serde_json::from_str(json)?;
        Self::new(def)
    }
}

fn declared(nodes: &HashSet<&str>, node: &str) -> Result<(), GraphError> {
    if nodes.contains(node) {
        Ok(())
    } else {
        Err(GraphError::UnknownNode {
            node: node.to_string(),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////

impl Space for GraphSpace {
    type State = String;
    type Action = Edge;

    fn init(&self) -> String {
        self.start.clone()
    }

    fn goal(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn actions(&self, state: &String) -> Vec<Edge> {
        self.adj.get(state).cloned().unwrap_or_default()
    }

    fn apply(&self, _state: &String, action: &Edge) -> String {
        action.to.clone()
    }
}

impl Weighted for GraphSpace {
    fn cost(&self, action: &Edge) -> Cost {
        action.cost
    }
}

impl Informed for GraphSpace {
    fn heuristic(&self, state: &String) -> Cost {
        self.estimates.get(state).copied().unwrap_or(0)
    }
}

////////////////////////////////////////////////////////////////////////////////
