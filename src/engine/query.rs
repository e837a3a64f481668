//! Query executor: every reachability query, built on the shared walks.

use crate::graph::traversal::{walk, walk_ids, walk_ids_where};
use crate::graph::{
    Collect, Contains, CountAbove, EvenSum, MapGraph, OddCount, SortedCollect, VertexGraph,
};
use crate::types::{Professional, ProfessionalNetwork, VertexId};

/// Runs reachability queries against vertex graphs, map graphs and
/// professional networks.
///
/// No query fails. An absent or unknown start produces the same neutral
/// answer (0, `false`, or an empty list) as a start from which nothing
/// matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Number of odd-valued vertices reachable from `start`, `start` included.
    pub fn odd_vertices(&self, graph: &VertexGraph<i32>, start: Option<VertexId>) -> usize {
        walk(graph, start, OddCount::new())
    }

    /// Sum of the even values reachable from `start`, `start` included.
    pub fn sum_even_vertices(&self, graph: &VertexGraph<i32>, start: Option<VertexId>) -> i64 {
        walk(graph, start, EvenSum::new())
    }

    /// Number of reachable vertices whose value is strictly above `threshold`.
    pub fn count_above(
        &self,
        graph: &VertexGraph<i32>,
        start: Option<VertexId>,
        threshold: i32,
    ) -> usize {
        walk(graph, start, CountAbove::new(threshold))
    }

    /// Whether some vertex reachable from `start` holds `target`.
    pub fn contains_value<T: PartialEq>(
        &self,
        graph: &VertexGraph<T>,
        start: Option<VertexId>,
        target: &T,
    ) -> bool {
        walk(
            graph,
            start,
            Contains::new(|_: VertexId, value: &T| value == target),
        )
    }

    /// Every value reachable from `start` in depth-first pre-order, duplicates kept.
    pub fn collect_values<T: Clone>(
        &self,
        graph: &VertexGraph<T>,
        start: Option<VertexId>,
    ) -> Vec<T> {
        walk(graph, start, Collect::new())
    }

    /// Every value reachable from `start`, ascending, duplicates kept.
    pub fn sorted_reachable<T: Clone + Ord>(
        &self,
        graph: &VertexGraph<T>,
        start: Option<VertexId>,
    ) -> Vec<T> {
        walk(graph, start, SortedCollect::new())
    }

    /// Every id reachable from `start` in a map graph, ascending.
    ///
    /// Empty when `start` is not a key.
    pub fn sorted_reachable_ids(&self, graph: &MapGraph, start: i32) -> Vec<i32> {
        walk_ids(graph, start, SortedCollect::new())
    }

    /// Whether `to` can be reached from `from`. A vertex reaches itself.
    pub fn reaches<T>(
        &self,
        graph: &VertexGraph<T>,
        from: Option<VertexId>,
        to: Option<VertexId>,
    ) -> bool {
        let Some(to) = to.filter(|&id| graph.contains(id)) else {
            return false;
        };
        walk(graph, from, Contains::new(|id: VertexId, _: &T| id == to))
    }

    /// Whether `a` reaches `b` and `b` reaches `a`.
    ///
    /// The two directions are searched independently. False if either side is absent.
    pub fn two_way<T>(
        &self,
        graph: &VertexGraph<T>,
        a: Option<VertexId>,
        b: Option<VertexId>,
    ) -> bool {
        self.reaches(graph, a, b) && self.reaches(graph, b, a)
    }

    /// Whether `end` is reachable from `start` along vertices that are all
    /// non-negative keys of the graph.
    ///
    /// A negative or unknown id only closes the branch that reached it.
    /// `start == end` holds without traversing any edge when `start` is valid.
    pub fn positive_path_exists(&self, graph: &MapGraph, start: i32, end: i32) -> bool {
        if end < 0 || !graph.contains(end) {
            return false;
        }
        walk_ids_where(
            graph,
            start,
            |id| id >= 0,
            Contains::new(|id: i32, _: &i32| id == end),
        )
    }

    /// Whether `person`, or anyone in their extended network, works at `company`.
    pub fn has_extended_connection_at_company(
        &self,
        network: &ProfessionalNetwork,
        person: Option<VertexId>,
        company: &str,
    ) -> bool {
        walk(
            network,
            person,
            Contains::new(|_: VertexId, professional: &Professional| {
                professional.works_at(company)
            }),
        )
    }
}
