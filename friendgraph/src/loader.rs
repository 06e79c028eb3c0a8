//! Edge-list text format: parsing, store loading, and dumping.
//!
//! The grammar is one header line `vertex_count edge_count` followed by one
//! edge per line as a whitespace-separated id pair. Blank lines are skipped
//! and tokens past the first two on an edge line are ignored. The header
//! edge count is carried through as informational only; the loader records
//! whatever edges the file actually contains.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use ahash::AHashSet;

use crate::{
    config::GraphConfig,
    errors::FriendGraphError,
    store::{GraphStore, VertexId},
};

/// Parsed edge-list source, not yet bound to a representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeListFile {
    pub vertex_count: usize,
    pub declared_edge_count: usize,
    pub edges: Vec<(VertexId, VertexId)>,
}

/// Parse the edge-list grammar from a reader.
///
/// Pure grammar pass: edges are range-checked against the header vertex
/// count so errors can name the offending line, but no store is built.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<EdgeListFile, FriendGraphError> {
    let mut lines = reader.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line.map_err(|e| FriendGraphError::io(e.to_string()))?,
        None => return Err(FriendGraphError::format("missing header line")),
    };
    let (vertex_count, declared_edge_count) = parse_header(&header)?;

    let mut edges = Vec::new();
    for (index, line) in lines {
        let line = line.map_err(|e| FriendGraphError::io(e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        let (i, j) = parse_edge_line(&line, index + 1)?;
        if i < 0 || i >= vertex_count as VertexId || j < 0 || j >= vertex_count as VertexId {
            return Err(FriendGraphError::format(format!(
                "line {}: edge ({i}, {j}) references a vertex outside 0..{vertex_count}",
                index + 1
            )));
        }
        edges.push((i, j));
    }

    Ok(EdgeListFile {
        vertex_count,
        declared_edge_count,
        edges,
    })
}

/// Parse an edge list and build a store of the configured kind.
pub fn load_store_from_reader<R: BufRead>(
    reader: R,
    cfg: &GraphConfig,
) -> Result<Box<dyn GraphStore + Send + Sync>, FriendGraphError> {
    let file = read_edge_list(reader)?;

    #[cfg(feature = "logging")]
    log::info!(
        "edge list parsed: {} vertices, {} edges recorded",
        file.vertex_count,
        file.edges.len()
    );
    #[cfg(feature = "logging")]
    if file.declared_edge_count != file.edges.len() {
        log::warn!(
            "header declares {} edges but {} were recorded",
            file.declared_edge_count,
            file.edges.len()
        );
    }

    crate::config::build_store(cfg, file.vertex_count, file.declared_edge_count, file.edges)
}

pub fn load_store_from_path<P: AsRef<Path>>(
    path: P,
    cfg: &GraphConfig,
) -> Result<Box<dyn GraphStore + Send + Sync>, FriendGraphError> {
    let file = File::open(path.as_ref()).map_err(|e| FriendGraphError::io(e.to_string()))?;
    load_store_from_reader(BufReader::new(file), cfg)
}

/// Write a loadable edge-list text for the store's topology.
///
/// Each undirected edge appears once as `i j` with `i <= j`, rows in
/// ascending vertex order, and the header carries the count of lines
/// actually written rather than the source's declared count.
pub fn dump_store_to_writer<S, W>(store: &S, mut writer: W) -> Result<(), FriendGraphError>
where
    S: GraphStore + ?Sized,
    W: Write,
{
    let mut pairs = Vec::new();
    for i in 0..store.vertex_count() as VertexId {
        let mut written = AHashSet::new();
        for j in store.neighbors(i) {
            if j >= i && written.insert(j) {
                pairs.push((i, j));
            }
        }
    }

    writeln!(writer, "{} {}", store.vertex_count(), pairs.len())
        .map_err(|e| FriendGraphError::io(e.to_string()))?;
    for (i, j) in pairs {
        writeln!(writer, "{i} {j}").map_err(|e| FriendGraphError::io(e.to_string()))?;
    }
    Ok(())
}

pub fn dump_store_to_path<S, P>(store: &S, path: P) -> Result<(), FriendGraphError>
where
    S: GraphStore + ?Sized,
    P: AsRef<Path>,
{
    let file = File::create(path.as_ref()).map_err(|e| FriendGraphError::io(e.to_string()))?;
    dump_store_to_writer(store, BufWriter::new(file))
}

fn parse_header(line: &str) -> Result<(usize, usize), FriendGraphError> {
    let mut tokens = line.split_whitespace();
    let vertex_count = parse_count(tokens.next(), line)?;
    let edge_count = parse_count(tokens.next(), line)?;
    Ok((vertex_count, edge_count))
}

fn parse_count(token: Option<&str>, line: &str) -> Result<usize, FriendGraphError> {
    token
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(|| FriendGraphError::format(format!("invalid header line: {line:?}")))
}

fn parse_edge_line(line: &str, number: usize) -> Result<(VertexId, VertexId), FriendGraphError> {
    let mut tokens = line.split_whitespace();
    let i = parse_id(tokens.next(), line, number)?;
    let j = parse_id(tokens.next(), line, number)?;
    Ok((i, j))
}

fn parse_id(token: Option<&str>, line: &str, number: usize) -> Result<VertexId, FriendGraphError> {
    token
        .and_then(|t| t.parse::<VertexId>().ok())
        .ok_or_else(|| {
            FriendGraphError::format(format!("line {number}: invalid edge line: {line:?}"))
        })
}
