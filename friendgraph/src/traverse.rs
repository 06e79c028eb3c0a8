//! Path search between two vertices.
//!
//! Both searches share the endpoint validation and the parent-pointer walk;
//! they differ only in frontier discipline. Each call allocates its own
//! visited and parent state, so concurrent searches against one store do
//! not interfere.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{
    errors::FriendGraphError,
    store::{GraphStore, VertexId},
};

const NO_PARENT: VertexId = -1;

/// Breadth-first search from `source` to `destination`.
///
/// The frontier is a min-heap on vertex id: among everything currently
/// enqueued, the lowest-valued vertex is expanded first, so same-depth
/// candidates are visited in ascending order. The search stops when the
/// destination is popped, which makes the returned path a shortest path
/// under that tie-break. An empty path means the endpoints are valid but
/// not connected.
pub fn bfs<S>(
    store: &S,
    source: VertexId,
    destination: VertexId,
) -> Result<Vec<VertexId>, FriendGraphError>
where
    S: GraphStore + ?Sized,
{
    check_endpoints(store, source, destination)?;
    let mut visited = vec![false; store.vertex_count()];
    let mut parent = vec![NO_PARENT; store.vertex_count()];
    let mut frontier = BinaryHeap::new();

    visited[source as usize] = true;
    frontier.push(Reverse(source));

    let mut found = false;
    while let Some(Reverse(current)) = frontier.pop() {
        if current == destination {
            found = true;
            break;
        }
        for next in store.neighbors(current) {
            let slot = next as usize;
            if !visited[slot] {
                visited[slot] = true;
                parent[slot] = current;
                frontier.push(Reverse(next));
            }
        }
    }

    if !found {
        return Ok(Vec::new());
    }
    Ok(rebuild_path(&parent, destination))
}

/// Depth-first search from `source` to `destination`.
///
/// A popped vertex's neighbors are pushed onto the stack in the store's
/// natural enumeration order; the stack reverses that order on expansion,
/// so the returned path is some valid path, not necessarily shortest.
/// An empty path means the endpoints are valid but not connected.
pub fn dfs<S>(
    store: &S,
    source: VertexId,
    destination: VertexId,
) -> Result<Vec<VertexId>, FriendGraphError>
where
    S: GraphStore + ?Sized,
{
    check_endpoints(store, source, destination)?;
    let mut visited = vec![false; store.vertex_count()];
    let mut parent = vec![NO_PARENT; store.vertex_count()];
    let mut stack = Vec::new();

    visited[source as usize] = true;
    stack.push(source);

    let mut found = false;
    while let Some(current) = stack.pop() {
        if current == destination {
            found = true;
            break;
        }
        for next in store.neighbors(current) {
            let slot = next as usize;
            if !visited[slot] {
                visited[slot] = true;
                parent[slot] = current;
                stack.push(next);
            }
        }
    }

    if !found {
        return Ok(Vec::new());
    }
    Ok(rebuild_path(&parent, destination))
}

/// Rejects out-of-range or equal endpoints before any traversal work.
fn check_endpoints<S>(
    store: &S,
    source: VertexId,
    destination: VertexId,
) -> Result<(), FriendGraphError>
where
    S: GraphStore + ?Sized,
{
    let limit = store.vertex_count() as VertexId;
    for id in [source, destination] {
        if id < 0 || id >= limit {
            return Err(FriendGraphError::invalid_endpoint(format!(
                "id {id} is outside 0..{limit}"
            )));
        }
    }
    if source == destination {
        return Err(FriendGraphError::invalid_endpoint(format!(
            "source and destination are both {source}"
        )));
    }
    Ok(())
}

/// Walks parent pointers from the destination back to the sentinel and
/// reverses, yielding the source-to-destination sequence.
fn rebuild_path(parent: &[VertexId], destination: VertexId) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = destination;
    while current != NO_PARENT {
        path.push(current);
        current = parent[current as usize];
    }
    path.reverse();
    path
}
