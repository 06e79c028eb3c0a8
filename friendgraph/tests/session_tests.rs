use std::thread;

use friendgraph::{
    GraphConfig, GraphSession, GraphStore, LoadedGraph, load_store_from_reader, traverse::bfs,
};

fn loaded(text: &str, cfg: &GraphConfig) -> LoadedGraph {
    LoadedGraph::new(load_store_from_reader(text.as_bytes(), cfg).expect("load"))
}

#[test]
fn test_session_starts_empty() {
    let session = GraphSession::new();
    assert!(!session.is_loaded());
    assert!(session.current().is_none());
}

#[test]
fn test_install_and_query() {
    let session = GraphSession::new();
    session.install(loaded("3 2\n0 1\n1 2\n", &GraphConfig::list()));
    assert!(session.is_loaded());

    let graph = session.current().expect("loaded graph");
    assert_eq!(graph.store().vertex_count(), 3);
    assert_eq!(bfs(graph.store(), 0, 2).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_install_fully_replaces_previous_graph() {
    let session = GraphSession::new();
    session.install(loaded("2 1\n0 1\n", &GraphConfig::list()));
    let before = session.current().expect("first graph");

    session.install(loaded("5 1\n0 4\n", &GraphConfig::matrix()));
    let after = session.current().expect("second graph");

    // A reader that grabbed the graph before the swap keeps seeing it.
    assert_eq!(before.store().vertex_count(), 2);
    assert_eq!(after.store().vertex_count(), 5);
    assert!(after.store().has_edge(0, 4));
}

#[test]
fn test_clear_unloads() {
    let session = GraphSession::new();
    session.install(loaded("2 1\n0 1\n", &GraphConfig::list()));
    session.clear();
    assert!(!session.is_loaded());
}

#[test]
fn test_concurrent_readers_share_one_store() {
    let session = GraphSession::new();
    session.install(loaded("6 5\n0 1\n1 2\n2 3\n3 4\n4 5\n", &GraphConfig::list()));
    let graph = session.current().expect("loaded graph");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = graph.clone();
            thread::spawn(move || bfs(graph.store(), 0, 5).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![0, 1, 2, 3, 4, 5]);
    }
}
