use campus_paths_lib::{Edge, Error, Graph, Node};

fn key(value: &str) -> String {
    value.to_string()
}

fn fixture_graph() -> Graph<String, String> {
    let mut graph = Graph::from_nodes(["a", "b", "c"].map(|k| Node::new(key(k))));
    graph.add_edge(&key("a"), key("b"), key("ab")).unwrap();
    graph.add_edge(&key("a"), key("c"), key("ac")).unwrap();
    graph.add_edge(&key("b"), key("c"), key("bc")).unwrap();
    graph
}

#[test]
fn same_key_replaces_registration() {
    let mut graph: Graph<String, String> = Graph::new();
    let mut first = Node::new(key("a"));
    first.add_edge(Edge::new(key("x"), key("a"))).unwrap();
    graph.add_node(first);

    let replaced = graph.add_node(Node::new(key("a")));
    assert!(replaced.is_some());
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.node(&key("a")).unwrap().edge_count(), 0);
}

#[test]
fn add_edge_registers_missing_target() {
    let mut graph: Graph<String, u32> = Graph::from_nodes([Node::new(key("a"))]);
    graph.add_edge(&key("a"), key("new"), 4).expect("start registered");

    assert!(graph.contains(&key("new")));
    assert_eq!(graph.len(), 2);
}

#[test]
fn add_edge_requires_registered_start() {
    let mut graph: Graph<String, u32> = Graph::new();
    let error = graph
        .add_edge(&key("ghost"), key("b"), 1)
        .expect_err("unknown start");
    assert!(matches!(error, Error::UnknownNode { node } if node == "ghost"));
    assert!(graph.is_empty(), "failed add must not register the target");
}

#[test]
fn duplicate_edge_bubbles_up_from_node() {
    let mut graph = fixture_graph();
    let error = graph
        .add_edge(&key("a"), key("b"), key("ab"))
        .expect_err("identical edge");
    assert!(matches!(error, Error::DuplicateEdge { .. }));

    graph
        .add_edge(&key("a"), key("b"), key("ab2"))
        .expect("parallel edge with a different label");
    let edges = graph.node(&key("a")).unwrap().edges_to(&key("b")).unwrap();
    assert_eq!(edges.len(), 2);
}

#[test]
fn children_track_outgoing_targets() {
    let graph = fixture_graph();
    for node in graph.nodes() {
        let mut targets: Vec<&String> = node.edges().map(|edge| edge.target()).collect();
        targets.sort();
        targets.dedup();
        let children: Vec<&String> = node.children().collect();
        assert_eq!(children, targets, "children of {}", node.key());
    }
}

#[test]
fn insert_reuses_existing_weight() {
    let mut graph: Graph<String, u32> =
        Graph::from_nodes(["a", "b"].map(|k| Node::new(key(k))));
    graph.add_edge(&key("a"), key("b"), 9).unwrap();
    graph.add_edge(&key("a"), key("b"), 3).unwrap();

    graph.insert(&key("a"), &key("b"), key("m")).expect("splice");

    let a = graph.node(&key("a")).unwrap();
    let remaining: Vec<u32> = a
        .edges_to(&key("b"))
        .unwrap()
        .iter()
        .map(|edge| *edge.weight())
        .collect();
    assert_eq!(remaining, vec![9], "lightest edge consumed");
    assert_eq!(
        a.edges_to(&key("m")).unwrap()[0].weight(),
        &3,
        "start -> mid reuses weight"
    );
    let m = graph.node(&key("m")).expect("mid registered");
    assert_eq!(m.edges_to(&key("b")).unwrap()[0].weight(), &3);
}

#[test]
fn insert_without_edge_uses_blank_label() {
    let mut graph: Graph<String, String> =
        Graph::from_nodes(["a", "b"].map(|k| Node::new(key(k))));
    graph.insert(&key("a"), &key("b"), key("m")).expect("splice");

    assert_eq!(graph.to_string(), "(a, , m), (b, , b), (m, , b)");
}

#[test]
fn insert_requires_registered_endpoints() {
    let mut graph: Graph<String, u32> = Graph::from_nodes([Node::new(key("a"))]);
    let error = graph
        .insert(&key("a"), &key("missing"), key("m"))
        .expect_err("end unknown");
    assert!(matches!(error, Error::UnknownNode { node } if node == "missing"));
}

#[test]
fn failed_insert_keeps_original_edge() {
    let mut graph: Graph<String, u32> =
        Graph::from_nodes(["a", "b"].map(|k| Node::new(key(k))));
    graph.add_edge(&key("a"), key("b"), 5).unwrap();
    graph.add_edge(&key("a"), key("m"), 5).unwrap();
    let before = graph.to_string();

    let error = graph
        .insert(&key("a"), &key("b"), key("m"))
        .expect_err("a -> m already carries the reused weight");
    assert!(matches!(error, Error::DuplicateEdge { from, to, .. } if from == "a" && to == "m"));
    assert_eq!(graph.to_string(), before);
    assert_eq!(before, "(a, 5, b), (a, 5, m), (b, , b), (m, , m)");
}

#[test]
fn failed_insert_on_mid_edge_rolls_back_start() {
    let mut graph: Graph<String, u32> =
        Graph::from_nodes(["a", "b", "m"].map(|k| Node::new(key(k))));
    graph.add_edge(&key("a"), key("b"), 5).unwrap();
    graph.add_edge(&key("m"), key("b"), 5).unwrap();
    let before = graph.to_string();

    let error = graph
        .insert(&key("a"), &key("b"), key("m"))
        .expect_err("m -> b already exists");
    assert!(matches!(error, Error::DuplicateEdge { from, .. } if from == "m"));
    assert_eq!(graph.to_string(), before);
    assert!(!graph.node(&key("a")).unwrap().is_child(&key("m")));
}

#[test]
fn failed_self_splice_leaves_graph_unchanged() {
    let mut graph: Graph<String, u32> =
        Graph::from_nodes(["a", "b"].map(|k| Node::new(key(k))));
    graph.add_edge(&key("b"), key("b"), 0).unwrap();
    let before = graph.to_string();

    // No b -> a edge, so the blank weight 0 is used and b -> b collides.
    let error = graph
        .insert(&key("b"), &key("a"), key("b"))
        .expect_err("b -> b already exists");
    assert!(matches!(error, Error::DuplicateEdge { .. }));
    assert_eq!(graph.to_string(), before);
    assert_eq!(graph.len(), 2);
}

#[test]
fn removed_nodes_leave_dangling_edges_unresolvable() {
    let mut graph = fixture_graph();
    let removed = graph.remove_node(&key("c")).expect("registered");
    assert_eq!(removed.key(), "c");
    assert_eq!(graph.len(), 2);

    let a = graph.node(&key("a")).unwrap();
    assert!(a.is_child(&key("c")), "edges elsewhere are left untouched");
    let path = [Edge::new(key("ac"), key("c"))];
    assert!(graph.traverse(&key("a"), &path).is_none());
}

#[test]
fn traverse_follows_valid_edges() {
    let graph = fixture_graph();
    let path = [Edge::new(key("ab"), key("b")), Edge::new(key("bc"), key("c"))];
    let end = graph.traverse(&key("a"), &path).expect("valid walk");
    assert_eq!(end.key(), "c");

    assert_eq!(graph.traverse(&key("b"), &[]).map(Node::key), Some(&key("b")));
}

#[test]
fn traverse_rejects_foreign_edges() {
    let graph = fixture_graph();
    let path = [Edge::new(key("bc"), key("c"))];
    assert!(graph.traverse(&key("a"), &path).is_none());
    assert!(graph.traverse(&key("zzz"), &[]).is_none());
}

#[test]
fn rendering_is_sorted_by_key() {
    let graph = fixture_graph();
    assert_eq!(
        graph.to_string(),
        "(a, ab, b), (a, ac, c), (b, bc, c), (c, , c)"
    );
    let keys: Vec<&String> = graph.sorted_nodes().iter().map(|node| node.key()).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[test]
fn empty_graph_renders_empty() {
    let graph: Graph<String, u32> = Graph::new();
    assert_eq!(graph.to_string(), "");
    assert_eq!(graph.len(), 0);
}
