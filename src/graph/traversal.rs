//! Depth-first walks with visited tracking (vertex graphs and map graphs).
//!
//! Every walk follows the same discipline:
//! - an absent start (or a start that is not a vertex) yields the neutral result;
//! - a vertex is marked visited before its neighbors are pushed, so cycles
//!   terminate and each vertex is folded at most once;
//! - neighbors are pushed in reverse so that pops follow the graph's order,
//!   which reproduces the pre-order of a recursive walk on an explicit stack.

use std::collections::HashSet;

use log::{debug, trace};

use crate::types::VertexId;

use super::reduction::Reduction;
use super::{MapGraph, VertexGraph};

/// Walk every vertex reachable from `start`, folding each into `reduction`.
pub fn walk<T, R>(graph: &VertexGraph<T>, start: Option<VertexId>, mut reduction: R) -> R::Output
where
    R: Reduction<VertexId, T>,
{
    let start = match start {
        Some(id) if graph.contains(id) => id,
        _ => return reduction.finish(),
    };

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut stack: Vec<VertexId> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        let Some(vertex) = graph.get(current) else {
            continue;
        };
        trace!("visit {}", current);

        if reduction.visit(current, &vertex.data).is_break() {
            debug!("walk from {} stopped early at {}", start, current);
            break;
        }

        stack.extend(
            vertex
                .neighbors
                .iter()
                .rev()
                .filter(|n| !visited.contains(*n)),
        );
    }

    debug!("walk from {} visited {} vertices", start, visited.len());
    reduction.finish()
}

/// Walk every id reachable from `start` in a map graph.
///
/// Ids that are not keys of the graph are skipped, including `start`.
pub fn walk_ids<R>(graph: &MapGraph, start: i32, reduction: R) -> R::Output
where
    R: Reduction<i32, i32>,
{
    walk_ids_where(graph, start, |_| true, reduction)
}

/// Like [`walk_ids`], but only enters ids for which `admit` holds.
///
/// A rejected id prunes the branch that reached it and nothing else: its
/// siblings, and other paths to the rest of the graph, are still explored.
/// Rejected ids are never marked visited.
pub fn walk_ids_where<R, F>(graph: &MapGraph, start: i32, admit: F, mut reduction: R) -> R::Output
where
    R: Reduction<i32, i32>,
    F: Fn(i32) -> bool,
{
    let mut visited: HashSet<i32> = HashSet::new();
    let mut stack: Vec<i32> = vec![start];

    while let Some(current) = stack.pop() {
        if !admit(current) {
            trace!("id {} rejected", current);
            continue;
        }
        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };
        if !visited.insert(current) {
            continue;
        }
        trace!("visit id {}", current);

        if reduction.visit(current, &current).is_break() {
            debug!("walk from id {} stopped early at {}", start, current);
            break;
        }

        stack.extend(neighbors.iter().copied().filter(|n| !visited.contains(n)));
    }

    debug!("walk from id {} visited {} ids", start, visited.len());
    reduction.finish()
}
