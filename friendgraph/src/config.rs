//! Configuration for store selection and the store construction factory.
//!
//! This module provides runtime selection between the adjacency-list and
//! adjacency-matrix representations without compile-time dependencies on a
//! specific one.

use serde::Serialize;

use crate::{
    errors::FriendGraphError,
    store::{AdjacencyListStore, AdjacencyMatrixStore, GraphStore, VertexId},
};

/// Store selection enum for choosing between adjacency representations.
///
/// Both representations answer the same [`GraphStore`] contract and agree
/// on `has_edge` for every input; they differ in memory footprint and in
/// the natural order of `neighbors` (insertion order for [`StoreKind::List`],
/// ascending id for [`StoreKind::Matrix`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// One neighbor row per vertex. Memory proportional to the edge count;
    /// the usual choice for sparse social graphs.
    #[default]
    List,
    /// Square boolean table. Memory proportional to the square of the
    /// vertex count; constant-time `has_edge`.
    Matrix,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::List => "list",
            StoreKind::Matrix => "matrix",
        }
    }
}

/// Complete configuration for store construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Which representation to build at load time.
    pub kind: StoreKind,
}

impl GraphConfig {
    pub fn new(kind: StoreKind) -> Self {
        Self { kind }
    }

    /// Create a configuration for the adjacency-list store.
    pub fn list() -> Self {
        Self::new(StoreKind::List)
    }

    /// Create a configuration for the adjacency-matrix store.
    pub fn matrix() -> Self {
        Self::new(StoreKind::Matrix)
    }
}

/// Build a store of the configured kind from an already-parsed edge stream.
///
/// This is the unified factory behind [`crate::loader::load_store_from_path`];
/// callers holding edges from another source can invoke it directly. No
/// partial store is exposed on failure.
pub fn build_store<I>(
    cfg: &GraphConfig,
    vertex_count: usize,
    declared_edge_count: usize,
    edges: I,
) -> Result<Box<dyn GraphStore + Send + Sync>, FriendGraphError>
where
    I: IntoIterator<Item = (VertexId, VertexId)>,
{
    match cfg.kind {
        StoreKind::List => {
            let store = AdjacencyListStore::load(vertex_count, declared_edge_count, edges)?;
            Ok(Box::new(store))
        }
        StoreKind::Matrix => {
            let store = AdjacencyMatrixStore::load(vertex_count, declared_edge_count, edges)?;
            Ok(Box::new(store))
        }
    }
}
