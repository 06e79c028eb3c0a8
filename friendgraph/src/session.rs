//! Atomic holder for the currently loaded graph.
//!
//! A load fully replaces the previous graph; it is never patched in place.
//! Readers take an `Arc` to the loaded value and keep querying it even if a
//! replacement lands mid-flight, so no locking is needed on the query path.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::store::GraphStore;

/// An immutable loaded graph, shareable across threads.
pub struct LoadedGraph {
    store: Box<dyn GraphStore + Send + Sync>,
}

impl LoadedGraph {
    pub fn new(store: Box<dyn GraphStore + Send + Sync>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &(dyn GraphStore + Send + Sync) {
        self.store.as_ref()
    }
}

/// Session-level slot for the graph being queried.
#[derive(Default)]
pub struct GraphSession {
    current: ArcSwapOption<LoadedGraph>,
}

impl GraphSession {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Atomically replace the loaded graph. Readers holding an `Arc` from
    /// [`GraphSession::current`] continue against the graph they took.
    pub fn install(&self, graph: LoadedGraph) {
        self.current.store(Some(Arc::new(graph)));
        #[cfg(feature = "logging")]
        log::debug!("loaded graph replaced");
    }

    pub fn current(&self) -> Option<Arc<LoadedGraph>> {
        self.current.load_full()
    }

    pub fn clear(&self) {
        self.current.store(None);
    }

    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }
}
