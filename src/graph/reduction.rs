//! Reduction policies folded over the vertices a traversal reaches.
//!
//! A traversal hands every reachable vertex to a [`Reduction`] exactly once,
//! in depth-first pre-order. A reduction that has never been fed a vertex
//! finishes with its neutral value (0, `false`, or an empty list), which is
//! also what an absent start yields.

use std::ops::ControlFlow;

/// Per-vertex contribution plus the combine step of one traversal query.
///
/// `K` is the vertex identity (a [`VertexId`](crate::types::VertexId) or a
/// map-graph id) and `T` the payload seen at that vertex.
pub trait Reduction<K, T: ?Sized> {
    /// The aggregate produced once the walk ends.
    type Output;

    /// Fold one vertex into the aggregate. `Break` ends the walk.
    fn visit(&mut self, key: K, data: &T) -> ControlFlow<()>;

    /// Consume the reduction and return the aggregate.
    fn finish(self) -> Self::Output;
}

/// Counts odd-valued vertices.
#[derive(Debug, Default, Clone)]
pub struct OddCount {
    count: usize,
}

impl OddCount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K> Reduction<K, i32> for OddCount {
    type Output = usize;

    fn visit(&mut self, _key: K, data: &i32) -> ControlFlow<()> {
        if data % 2 != 0 {
            self.count += 1;
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> usize {
        self.count
    }
}

/// Sums even-valued vertices. Accumulates in `i64` so large graphs cannot overflow.
#[derive(Debug, Default, Clone)]
pub struct EvenSum {
    sum: i64,
}

impl EvenSum {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K> Reduction<K, i32> for EvenSum {
    type Output = i64;

    fn visit(&mut self, _key: K, data: &i32) -> ControlFlow<()> {
        if data % 2 == 0 {
            self.sum += i64::from(*data);
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> i64 {
        self.sum
    }
}

/// Counts vertices whose value is strictly greater than a threshold.
#[derive(Debug, Clone)]
pub struct CountAbove {
    threshold: i32,
    count: usize,
}

impl CountAbove {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            count: 0,
        }
    }
}

impl<K> Reduction<K, i32> for CountAbove {
    type Output = usize;

    fn visit(&mut self, _key: K, data: &i32) -> ControlFlow<()> {
        if *data > self.threshold {
            self.count += 1;
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> usize {
        self.count
    }
}

/// Existence test: stops at the first vertex matching the predicate.
///
/// A non-matching vertex lets the walk continue into all of its neighbors.
pub struct Contains<F> {
    predicate: F,
    found: bool,
}

impl<F> Contains<F> {
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            found: false,
        }
    }
}

impl<K, T: ?Sized, F> Reduction<K, T> for Contains<F>
where
    F: FnMut(K, &T) -> bool,
{
    type Output = bool;

    fn visit(&mut self, key: K, data: &T) -> ControlFlow<()> {
        if (self.predicate)(key, data) {
            self.found = true;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn finish(self) -> bool {
        self.found
    }
}

/// Collects every reachable value in visit order, duplicates kept.
#[derive(Debug, Clone)]
pub struct Collect<T> {
    values: Vec<T>,
}

impl<T> Collect<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T> Default for Collect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T: Clone> Reduction<K, T> for Collect<T> {
    type Output = Vec<T>;

    fn visit(&mut self, _key: K, data: &T) -> ControlFlow<()> {
        self.values.push(data.clone());
        ControlFlow::Continue(())
    }

    fn finish(self) -> Vec<T> {
        self.values
    }
}

/// Collects every reachable value in ascending order, duplicates kept.
#[derive(Debug, Clone)]
pub struct SortedCollect<T> {
    inner: Collect<T>,
}

impl<T> SortedCollect<T> {
    pub fn new() -> Self {
        Self {
            inner: Collect::new(),
        }
    }
}

impl<T> Default for SortedCollect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T: Clone + Ord> Reduction<K, T> for SortedCollect<T> {
    type Output = Vec<T>;

    fn visit(&mut self, key: K, data: &T) -> ControlFlow<()> {
        self.inner.visit(key, data)
    }

    fn finish(self) -> Vec<T> {
        let mut values = self.inner.values;
        values.sort();
        values
    }
}

/// A reduction assembled from an initial accumulator and a step closure.
///
/// For one-off queries that do not warrant a named policy.
pub struct Fold<A, F> {
    acc: A,
    step: F,
}

impl<A, F> Fold<A, F> {
    /// `init` is the neutral value; `step` folds one vertex into it.
    pub fn new(init: A, step: F) -> Self {
        Self { acc: init, step }
    }
}

impl<K, T: ?Sized, A, F> Reduction<K, T> for Fold<A, F>
where
    F: FnMut(&mut A, K, &T),
{
    type Output = A;

    fn visit(&mut self, key: K, data: &T) -> ControlFlow<()> {
        (self.step)(&mut self.acc, key, data);
        ControlFlow::Continue(())
    }

    fn finish(self) -> A {
        self.acc
    }
}
