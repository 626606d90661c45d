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

//! This module provides the implementation of the three covering algorithms,
//! along with the candidate filter they all share.

mod exact;
mod greedy;
mod primal_dual;

pub use exact::*;
pub use greedy::*;
pub use primal_dual::*;

use std::sync::Arc;

use fxhash::FxHashSet;

use crate::{off_cost, Itemset, ItemsetPool, Transaction};

/// Restricts the pool to the candidates every algorithm may actually use:
/// itemsets that are subsets of the transaction and carry a probability
/// greater than zero. Insertion order is preserved.
pub(crate) fn filter_pool(
    pool: &ItemsetPool,
    transaction: &Transaction,
) -> Vec<(Arc<Itemset>, f64)> {
    pool.iter()
        .filter(|(itemset, probability)| *probability > 0.0 && itemset.is_subset_of(transaction))
        .map(|(itemset, probability)| (Arc::clone(itemset), probability))
        .collect()
}

/// Sums the off-costs of every filtered candidate that was not selected, so
/// that each filtered candidate ends up contributing exactly one of its two
/// costs to the total.
pub(crate) fn off_costs_of_unselected(
    filtered: &[(Arc<Itemset>, f64)],
    selected: &FxHashSet<usize>,
) -> f64 {
    filtered
        .iter()
        .enumerate()
        .filter(|(at, _)| !selected.contains(at))
        .map(|(_, (_, probability))| off_cost(*probability))
        .sum()
}
