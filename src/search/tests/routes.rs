use crate::{
    search::{AstarSolver, BfsSolver, DijkstraSolver, SearchConfig, SearchConfigBuilder, Solver},
    space::{Edge, GraphDef, GraphSpace},
};

use super::common::replay;

////////////////////////////////////////////////////////////////////////////////

fn edge(from: &str, to: &str, cost: u64) -> Edge {
    Edge {
        from: from.into(),
        to: to.into(),
        cost,
    }
}

// expensive direct edge against a cheap two-hop route
fn detour_map() -> GraphSpace {
    let def = GraphDef {
        nodes: vec!["a".into(), "b".into(), "goal".into()],
        edges: vec![edge("a", "goal", 10), edge("a", "b", 1), edge("b", "goal", 2)],
        start: "a".into(),
        goals: vec!["goal".into()],
        estimates: Default::default(),
    };
    GraphSpace::new(def).unwrap()
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn weighted_detour_beats_direct_edge() {
    let map = detour_map();

    let mut dijkstra = DijkstraSolver::new(SearchConfig::unlimited());
    let plan = dijkstra.solve(&map).unwrap();
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.cost_by(|e| e.cost), 3);
    replay(&map, &plan);

    // breadth-first never consults the weights and takes the direct edge
    let mut bfs = BfsSolver::new(SearchConfig::unlimited());
    let plan = bfs.solve(&map).unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.cost_by(|e| e.cost), 10);
    replay(&map, &plan);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn exhausts_when_goal_unreachable() {
    let def = GraphDef {
        nodes: vec![
            "a".into(),
            "b".into(),
            "c".into(),
            "sink".into(),
            "island".into(),
        ],
        edges: vec![
            edge("a", "b", 1),
            edge("b", "c", 1),
            edge("c", "sink", 1),
            edge("a", "sink", 5),
        ],
        start: "a".into(),
        goals: vec!["island".into()],
        estimates: Default::default(),
    };
    let map = GraphSpace::new(def).unwrap();

    let mut bfs = BfsSolver::new(SearchConfig::unlimited());
    assert!(bfs.solve(&map).is_none());

    let mut dijkstra = DijkstraSolver::new(SearchConfig::unlimited());
    assert!(dijkstra.solve(&map).is_none());
    assert_eq!(dijkstra.log().expanded, 4);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn exhausted_budget_still_drains_frontier() {
    let map = detour_map();

    // a single expansion puts the goal into the frontier, the drain finds it
    let cfg = SearchConfigBuilder::new().max_expanded(1).build();
    let mut astar = AstarSolver::new(cfg);
    let plan = astar.solve(&map).unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(astar.log().expanded, 1);

    let cfg = SearchConfigBuilder::new().max_expanded(0).build();
    let mut astar = AstarSolver::new(cfg);
    assert!(astar.solve(&map).is_none());
    assert_eq!(astar.log().expanded, 0);
}
