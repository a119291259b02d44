//! Exact and metaheuristic Traveling-Salesman-Problem search algorithms.
//!
//! Seven algorithms share the same contract: given a [`CostMatrix`] and
//! [`GraphInfo`], produce an [`AlgorithmResult`]. Three are exact (brute
//! force, and two branch & bound families), one is a randomized baseline,
//! and two are metaheuristics (tabu search, genetic). Every algorithm owns
//! its working state exclusively for the duration of a single call: no
//! globals, no state surviving a call, no shared mutable resources.

pub mod bb;
pub mod bf;
pub mod gen;
pub mod nn;
pub mod reduce;
pub mod rnd;
pub mod ts;

pub use tsp_common::{AlgorithmError, AlgorithmResult, CostMatrix, GraphInfo, Solution};

/// An opaque progress callback invoked once per outer iteration (a B&B node
/// pop, a TS iteration, a GEN generation). It carries no solution data by
/// design - §1's non-goals rule out interactive progress reporting beyond
/// this single heartbeat hook.
pub type Tick<'a> = Option<&'a dyn Fn()>;

#[inline]
pub(crate) fn tick(cb: Tick<'_>) {
    if let Some(f) = cb {
        f();
    }
}
