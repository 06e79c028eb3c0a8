//! In-memory social graph with dual adjacency representations.
//!
//! friendgraph models an undirected, unweighted social graph loaded from an
//! edge-list text description and answers two queries: the friend list of a
//! vertex and a connecting path between two vertices.
//!
//! # Features
//!
//! - **Dual Representation Support**: Choose between adjacency-list (sparse,
//!   memory-proportional-to-edges) and adjacency-matrix (constant-time edge
//!   test) stores through a unified API
//! - **Path Search**: Breadth-first search with a deterministic lowest-id
//!   expansion order, and stack-based depth-first search
//! - **Edge-List Loading**: Header-plus-edges text format with strict
//!   format validation and loadable dumps
//! - **Atomic Replacement**: A session slot that swaps in a freshly loaded
//!   graph without disturbing in-flight readers
//!
//! # Quick Start
//!
//! ```rust
//! use friendgraph::{GraphConfig, GraphStore, load_store_from_reader, traverse};
//!
//! let text = "4 3\n0 1\n1 2\n2 3\n";
//!
//! // Use the adjacency-list store (default)
//! let store = load_store_from_reader(text.as_bytes(), &GraphConfig::list())?;
//!
//! // Or the adjacency-matrix store; both answer the same contract
//! let matrix = load_store_from_reader(text.as_bytes(), &GraphConfig::matrix())?;
//!
//! assert_eq!(store.friends(1), vec![0, 2]);
//! assert_eq!(traverse::bfs(&*store, 0, 3)?, vec![0, 1, 2, 3]);
//! assert!(!matrix.has_edge(0, 3));
//! # Ok::<(), friendgraph::FriendGraphError>(())
//! ```
//!
//! # Representation Selection
//!
//! ## List Store (Default)
//! - Memory proportional to the edge count
//! - Neighbor rows in insertion order, duplicates preserved
//! - The usual choice for sparse social graphs
//!
//! ## Matrix Store
//! - Constant-time edge test
//! - Neighbor rows in ascending id order, memoized after first scan
//! - Memory proportional to the square of the vertex count

// Core public modules
pub mod cache;
pub mod config;
pub mod errors;
pub mod loader;
pub mod session;
pub mod store;
pub mod traverse;

// Re-export store implementations and core types
pub use store::{AdjacencyListStore, AdjacencyMatrixStore, GraphStore, GraphSummary, VertexId};

// Re-export configuration and factory
pub use config::{GraphConfig, StoreKind, build_store};

// Re-export error types
pub use errors::FriendGraphError;

// Re-export loading and dumping
pub use loader::{
    EdgeListFile, dump_store_to_path, dump_store_to_writer, load_store_from_path,
    load_store_from_reader, read_edge_list,
};

// Re-export the session holder
pub use session::{GraphSession, LoadedGraph};

// Re-export cache statistics
pub use cache::{CacheStats, NeighborCache};
