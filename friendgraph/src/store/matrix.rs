//! Adjacency-matrix representation.

use crate::{
    cache::{CacheStats, NeighborCache},
    config::StoreKind,
    errors::FriendGraphError,
    store::{GraphStore, VertexId, check_edge, row_index},
};

/// Graph store backed by a square boolean table.
///
/// `neighbors` materializes a row by scanning its cells in ascending id
/// order; materialized rows are memoized in a [`NeighborCache`] since the
/// table never changes after load. The ascending order is what gives
/// matrix-backed traversal its deterministic expansion order.
pub struct AdjacencyMatrixStore {
    cells: Vec<Vec<bool>>,
    declared_edges: usize,
    recorded_edges: usize,
    row_cache: NeighborCache,
}

impl AdjacencyMatrixStore {
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
        let mut cells = vec![vec![false; vertex_count]; vertex_count];
        let mut recorded = 0usize;
        for (i, j) in edges {
            let (a, b) = check_edge(vertex_count, i, j)?;
            cells[a][b] = true;
            cells[b][a] = true;
            recorded += 1;
        }
        Ok(Self {
            cells,
            declared_edges: declared_edge_count,
            recorded_edges: recorded,
            row_cache: NeighborCache::new(),
        })
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.row_cache.stats()
    }
}

impl GraphStore for AdjacencyMatrixStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Matrix
    }

    fn vertex_count(&self) -> usize {
        self.cells.len()
    }

    fn declared_edge_count(&self) -> usize {
        self.declared_edges
    }

    fn recorded_edge_count(&self) -> usize {
        self.recorded_edges
    }

    fn has_edge(&self, i: VertexId, j: VertexId) -> bool {
        match (
            row_index(self.cells.len(), i),
            row_index(self.cells.len(), j),
        ) {
            (Some(a), Some(b)) => self.cells[a][b],
            _ => false,
        }
    }

    fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        let Some(row) = row_index(self.cells.len(), v) else {
            return Vec::new();
        };
        if let Some(cached) = self.row_cache.get(v) {
            return cached;
        }
        let result: Vec<VertexId> = self.cells[row]
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(|(id, _)| id as VertexId)
            .collect();
        self.row_cache.insert(v, result.clone());
        result
    }
}
