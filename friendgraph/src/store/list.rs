//! Adjacency-list representation.

use crate::{
    config::StoreKind,
    errors::FriendGraphError,
    store::{GraphStore, VertexId, check_edge, row_index},
};

/// Graph store backed by one neighbor row per vertex.
///
/// Rows keep insertion order and permit duplicate entries; a source that
/// lists an edge in both directions simply records it twice. Loading
/// inserts every edge in both directions, so row `i` containing `j`
/// implies row `j` contains `i`.
pub struct AdjacencyListStore {
    rows: Vec<Vec<VertexId>>,
    declared_edges: usize,
    recorded_edges: usize,
}

impl AdjacencyListStore {
    /// Builds the store from an edge stream. Fails with a format error on
    /// the first edge referencing a vertex outside `[0, vertex_count)`.
    pub fn load<I>(
        vertex_count: usize,
        declared_edge_count: usize,
        edges: I,
    ) -> Result<Self, FriendGraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut rows = vec![Vec::new(); vertex_count];
        let mut recorded = 0usize;
        for (i, j) in edges {
            let (a, b) = check_edge(vertex_count, i, j)?;
            rows[a].push(j);
            if a != b {
                rows[b].push(i);
            }
            recorded += 1;
        }
        Ok(Self {
            rows,
            declared_edges: declared_edge_count,
            recorded_edges: recorded,
        })
    }
}

impl GraphStore for AdjacencyListStore {
    fn kind(&self) -> StoreKind {
        StoreKind::List
    }

    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn declared_edge_count(&self) -> usize {
        self.declared_edges
    }

    fn recorded_edge_count(&self) -> usize {
        self.recorded_edges
    }

    fn has_edge(&self, i: VertexId, j: VertexId) -> bool {
        match (row_index(self.rows.len(), i), row_index(self.rows.len(), j)) {
            (Some(a), Some(_)) => self.rows[a].contains(&j),
            _ => false,
        }
    }

    fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        match row_index(self.rows.len(), v) {
            Some(row) => self.rows[row].clone(),
            None => Vec::new(),
        }
    }
}
