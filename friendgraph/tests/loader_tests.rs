use std::fs;

use friendgraph::{
    FriendGraphError, GraphConfig, GraphStore, dump_store_to_writer, load_store_from_path,
    load_store_from_reader, read_edge_list,
};

const CHAIN: &str = "4 3\n0 1\n1 2\n2 3\n";

#[test]
fn test_read_edge_list_parses_header_and_edges() {
    let file = read_edge_list(CHAIN.as_bytes()).expect("parse");
    assert_eq!(file.vertex_count, 4);
    assert_eq!(file.declared_edge_count, 3);
    assert_eq!(file.edges, vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn test_read_edge_list_ignores_trailing_blank_lines() {
    let text = "4 3\n0 1\n1 2\n2 3\n\n\n";
    let file = read_edge_list(text.as_bytes()).expect("parse");
    assert_eq!(file.edges.len(), 3);
}

#[test]
fn test_read_edge_list_ignores_extra_tokens_on_edge_lines() {
    let text = "3 2\n0 1 99\n1 2 extra\n";
    let file = read_edge_list(text.as_bytes()).expect("parse");
    assert_eq!(file.edges, vec![(0, 1), (1, 2)]);
}

#[test]
fn test_empty_input_is_a_format_error() {
    let err = read_edge_list("".as_bytes()).unwrap_err();
    assert!(matches!(err, FriendGraphError::FormatError(_)));
}

#[test]
fn test_malformed_header_is_a_format_error() {
    let err = read_edge_list("x y\n0 1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, FriendGraphError::FormatError(_)));
}

#[test]
fn test_one_token_header_is_a_format_error() {
    let err = read_edge_list("5\n0 1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, FriendGraphError::FormatError(_)));
}

#[test]
fn test_unparseable_edge_line_names_the_line() {
    let err = read_edge_list("3 2\n0 1\n1 z\n".as_bytes()).unwrap_err();
    match err {
        FriendGraphError::FormatError(msg) => assert!(msg.contains("line 3"), "got {msg}"),
        other => panic!("expected format error, got {other}"),
    }
}

#[test]
fn test_out_of_range_edge_is_a_format_error() {
    let err = read_edge_list("3 1\n0 7\n".as_bytes()).unwrap_err();
    assert!(matches!(err, FriendGraphError::FormatError(_)));
}

#[test]
fn test_negative_id_edge_is_a_format_error() {
    let err = read_edge_list("3 1\n0 -1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, FriendGraphError::FormatError(_)));
}

#[test]
fn test_load_store_from_reader_builds_working_store() {
    let store = load_store_from_reader(CHAIN.as_bytes(), &GraphConfig::matrix()).expect("load");
    assert!(store.has_edge(0, 1));
    assert!(store.has_edge(1, 0));
    assert!(!store.has_edge(0, 3));
    assert_eq!(store.friends(1), vec![0, 2]);
}

#[test]
fn test_load_store_from_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("network.txt");
    fs::write(&path, CHAIN).expect("write fixture");

    let store = load_store_from_path(&path, &GraphConfig::list()).expect("load");
    assert_eq!(store.vertex_count(), 4);
    assert_eq!(store.recorded_edge_count(), 3);
}

#[test]
fn test_load_store_from_missing_path_is_an_io_error() {
    let err = load_store_from_path("/nonexistent/network.txt", &GraphConfig::list())
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err, FriendGraphError::IoError(_)));
}

#[test]
fn test_declared_count_skew_is_informational() {
    let text = "3 9\n0 1\n";
    let store = load_store_from_reader(text.as_bytes(), &GraphConfig::list()).expect("load");
    assert_eq!(store.declared_edge_count(), 9);
    assert_eq!(store.recorded_edge_count(), 1);
}

#[test]
fn test_dump_writes_each_edge_once_in_canonical_order() {
    // Source lists both directions; the dump folds them back to one line.
    let text = "3 4\n1 0\n0 1\n2 1\n1 2\n";
    let store = load_store_from_reader(text.as_bytes(), &GraphConfig::list()).expect("load");

    let mut out = Vec::new();
    dump_store_to_writer(store.as_ref(), &mut out).expect("dump");
    let dumped = String::from_utf8(out).expect("utf8");
    assert_eq!(dumped, "3 2\n0 1\n1 2\n");
}

#[test]
fn test_dump_then_load_preserves_adjacency() {
    let text = "5 6\n0 1\n1 2\n2 3\n3 4\n4 0\n1 3\n";
    for cfg in [GraphConfig::list(), GraphConfig::matrix()] {
        let store = load_store_from_reader(text.as_bytes(), &cfg).expect("load");
        let mut out = Vec::new();
        dump_store_to_writer(store.as_ref(), &mut out).expect("dump");
        let reloaded = load_store_from_reader(out.as_slice(), &cfg).expect("reload");
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(store.has_edge(i, j), reloaded.has_edge(i, j));
            }
        }
    }
}
