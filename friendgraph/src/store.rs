//! Store trait bridging the two adjacency representations with graph consumers.
//!
//! This module contains the core GraphStore trait and redirects to the
//! representation-specific implementations in the list and matrix submodules.

pub mod list;
pub mod matrix;

pub use list::AdjacencyListStore;
pub use matrix::AdjacencyMatrixStore;

use ahash::AHashSet;
use serde::Serialize;

use crate::{config::StoreKind, errors::FriendGraphError};

/// Vertex identifier. Ids are dense integers in `[0, vertex_count)`.
pub type VertexId = i64;

/// Machine-readable description of a loaded store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub kind: StoreKind,
    pub vertex_count: usize,
    pub declared_edge_count: usize,
    pub recorded_edge_count: usize,
}

/// Store trait defining the interface for graph representations.
///
/// Each trait method answers queries against a topology that is fixed at
/// load time; there are no mutating methods. Both representations insert
/// every recorded edge in both directions, so `has_edge` is symmetric on
/// any store that finished loading. Implementations must only ever return
/// neighbor ids inside `[0, vertex_count)`.
pub trait GraphStore {
    fn kind(&self) -> StoreKind;
    fn vertex_count(&self) -> usize;
    /// Edge count claimed by the source header. Informational only; the
    /// number of edges actually inserted is `recorded_edge_count`.
    fn declared_edge_count(&self) -> usize;
    fn recorded_edge_count(&self) -> usize;
    /// Returns false for any id outside `[0, vertex_count)`, never panics.
    fn has_edge(&self, i: VertexId, j: VertexId) -> bool;
    /// The neighbor row of `v` in the representation's natural order:
    /// insertion order for the list store, ascending for the matrix store.
    /// Duplicate entries are preserved; out-of-range ids yield an empty row.
    fn neighbors(&self, v: VertexId) -> Vec<VertexId>;

    /// Display view of the neighbor row: duplicates stripped, first
    /// occurrence wins. Traversal must consume `neighbors` instead.
    fn friends(&self, v: VertexId) -> Vec<VertexId> {
        let mut seen = AHashSet::new();
        self.neighbors(v)
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect()
    }

    fn degree(&self, v: VertexId) -> usize {
        self.friends(v).len()
    }

    fn summary(&self) -> GraphSummary {
        GraphSummary {
            kind: self.kind(),
            vertex_count: self.vertex_count(),
            declared_edge_count: self.declared_edge_count(),
            recorded_edge_count: self.recorded_edge_count(),
        }
    }
}

/// Reference implementation for GraphStore trait that works with references.
impl<S> GraphStore for &S
where
    S: GraphStore + ?Sized,
{
    fn kind(&self) -> StoreKind {
        (*self).kind()
    }

    fn vertex_count(&self) -> usize {
        (*self).vertex_count()
    }

    fn declared_edge_count(&self) -> usize {
        (*self).declared_edge_count()
    }

    fn recorded_edge_count(&self) -> usize {
        (*self).recorded_edge_count()
    }

    fn has_edge(&self, i: VertexId, j: VertexId) -> bool {
        (*self).has_edge(i, j)
    }

    fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        (*self).neighbors(v)
    }
}

/// Maps an id to its dense row index, or None when out of range.
pub(crate) fn row_index(vertex_count: usize, id: VertexId) -> Option<usize> {
    if id < 0 || id >= vertex_count as VertexId {
        None
    } else {
        Some(id as usize)
    }
}

/// Validates both endpoints of a recorded edge against the vertex range.
pub(crate) fn check_edge(
    vertex_count: usize,
    i: VertexId,
    j: VertexId,
) -> Result<(usize, usize), FriendGraphError> {
    match (row_index(vertex_count, i), row_index(vertex_count, j)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(FriendGraphError::format(format!(
            "edge ({i}, {j}) references a vertex outside 0..{vertex_count}"
        ))),
    }
}
