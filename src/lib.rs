// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # ITEMSET-COVER
//! This crate implements the inference step of a probabilistic frequent-itemset
//! miner. Given one transaction (a set of observed items) and a pool of
//! candidate itemsets -- each weighted with its estimated probability of being
//! active -- it selects a *covering*: a subset of the candidates explaining the
//! items of the transaction. The quality of an explanation is measured by its
//! negative log-likelihood under a noisy-OR model: every candidate itemset that
//! is a subset of the transaction contributes either `-ln(p)` when it belongs
//! to the covering or `-ln(1 - p)` when it does not.
//!
//! Finding the cheapest covering is a weighted set-cover problem. This crate
//! solves it three different ways, all behind the single [`Inference`] trait so
//! that the surrounding mining loop can pick an implementation by
//! configuration:
//!
//! * [`GreedyCover`] -- the classical cost-effectiveness greedy, an
//!   O(log n)-approximation,
//! * [`PrimalDualCover`] -- a randomized primal-dual scheme, an
//!   f-approximation where f is the largest number of candidates sharing one
//!   item,
//! * [`ExactCover`] -- the exact solution obtained by delegating a binary
//!   covering program to a MILP solver (see [`MipSolver`]).
//!
//! Everything else of the mining system (reading transactions, generating
//! candidates, the outer expectation-maximization loop fitting the
//! probabilities) lives outside of this crate: one call to `infer` handles
//! exactly one transaction and keeps no state around.
//!
//! ## Quick Example
//! ```
//! use itemset_cover::*;
//!
//! // The candidate pool is an insertion-ordered map from itemset to the
//! // probability of that itemset being active. The fitting loop guarantees
//! // every probability lies strictly between zero and one.
//! let mut pool = ItemsetPool::new();
//! pool.insert(Itemset::new([Item(1), Item(2)]), 0.9);
//! pool.insert(Itemset::new([Item(3)]), 0.8);
//! pool.insert(Itemset::new([Item(1), Item(2), Item(3)]), 0.5);
//!
//! let transaction = Transaction::new([Item(1), Item(2), Item(3)]);
//!
//! let mut greedy = GreedyCover;
//! let coverage   = greedy.infer(&pool, &transaction);
//!
//! // {1, 2} and {3} together are a cheaper explanation than {1, 2, 3} alone
//! assert!(coverage.covers(&transaction));
//! assert!(coverage.contains(&Itemset::new([Item(1), Item(2)])));
//! assert!(coverage.cost.is_finite());
//! ```
//!
//! ## Note
//! The two approximate algorithms are allowed to return *incomplete* coverings
//! (when no candidate can explain some item, they simply stop); the exact
//! algorithm is not, and signals an inexplicable transaction with a cost of
//! positive infinity. The `demos` folder of the repository contains a small
//! driver showing how the three algorithms are wired to actual data.

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
