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

//! This module provides the greedy covering algorithm.

use std::sync::Arc;

use fxhash::FxHashSet;

use crate::{on_cost, Coverage, Inference, Item, Itemset, ItemsetPool, Transaction};

use super::{filter_pool, off_costs_of_unselected};

/// The cost-effectiveness greedy for weighted set cover, applied to the
/// noisy-OR on-cost. As long as some transaction item remains uncovered, the
/// candidate minimizing `on_cost / #(its still-uncovered items)` is selected;
/// on ties the candidate coming first in pool insertion order wins. This is
/// the classical O(log n)-approximation where n is the number of items in the
/// transaction.
///
/// When no candidate can cover a remaining item anymore, the loop stops and
/// the covering is returned incomplete; no penalty is charged for the gap.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyCover;

impl Inference for GreedyCover {
    fn infer(&mut self, pool: &ItemsetPool, transaction: &Transaction) -> Coverage {
        let filtered = filter_pool(pool, transaction);

        let mut covering: Vec<Arc<Itemset>> = vec![];
        let mut selected: FxHashSet<usize> = FxHashSet::default();
        let mut covered: FxHashSet<Item> = FxHashSet::default();
        let mut cost = 0.0;

        // covered only ever holds items of selected candidates, which are all
        // subsets of the transaction
        while covered.len() < transaction.len() {
            let mut min_cost_per_item = f64::INFINITY;
            let mut best = None;

            for (at, (itemset, probability)) in filtered.iter().enumerate() {
                let not_covered = itemset
                    .items()
                    .iter()
                    .filter(|item| !covered.contains(*item))
                    .count();

                // a candidate bringing no new item has cost-per-item +inf and
                // can never win the strict comparison below
                let cost_per_item = on_cost(*probability) / not_covered as f64;
                if cost_per_item < min_cost_per_item {
                    min_cost_per_item = cost_per_item;
                    best = Some(at);
                }
            }

            match best {
                Some(at) => {
                    let (itemset, probability) = &filtered[at];
                    covering.push(Arc::clone(itemset));
                    selected.insert(at);
                    covered.extend(itemset.items().iter().copied());
                    cost += on_cost(*probability);
                }
                // incomplete coverings are allowed
                None => break,
            }
        }

        cost += off_costs_of_unselected(&filtered, &selected);
        Coverage { covering, cost }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::{off_cost, on_cost, GreedyCover, Inference, Item, Itemset, ItemsetPool, Transaction};

    fn iset(items: &[usize]) -> Itemset {
        Itemset::new(items.iter().copied().map(Item))
    }
    fn pool(weighted: Vec<(Vec<usize>, f64)>) -> ItemsetPool {
        let mut pool = ItemsetPool::new();
        for (items, probability) in weighted {
            pool.insert(iset(&items), probability);
        }
        pool
    }
    fn transaction(items: &[usize]) -> Transaction {
        Transaction::new(items.iter().copied().map(Item))
    }
    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn splits_when_splitting_is_more_cost_effective() {
        let pool = pool(vec![(vec![1, 2], 0.9), (vec![3], 0.8), (vec![1, 2, 3], 0.5)]);
        let transaction = transaction(&[1, 2, 3]);

        // on(0.9)/2 < on(0.5)/3, then on(0.8)/1 < on(0.5)/1
        let coverage = GreedyCover.infer(&pool, &transaction);
        assert_eq!(2, coverage.covering.len());
        assert_eq!(iset(&[1, 2]), *coverage.covering[0]);
        assert_eq!(iset(&[3]), *coverage.covering[1]);
        assert!(close(coverage.cost, on_cost(0.9) + on_cost(0.8) + off_cost(0.5)));
    }

    #[test]
    fn bundles_when_the_bundle_is_more_cost_effective() {
        let pool = pool(vec![(vec![1, 2], 0.5), (vec![3], 0.5), (vec![1, 2, 3], 0.9)]);
        let transaction = transaction(&[1, 2, 3]);

        let coverage = GreedyCover.infer(&pool, &transaction);
        assert_eq!(1, coverage.covering.len());
        assert_eq!(iset(&[1, 2, 3]), *coverage.covering[0]);
        assert!(close(coverage.cost, on_cost(0.9) + off_cost(0.5) + off_cost(0.5)));
    }

    #[test]
    fn first_candidate_wins_ties() {
        let pool = pool(vec![(vec![1], 0.5), (vec![2], 0.5)]);
        let transaction = transaction(&[1, 2]);

        let coverage = GreedyCover.infer(&pool, &transaction);
        assert_eq!(iset(&[1]), *coverage.covering[0]);
        assert_eq!(iset(&[2]), *coverage.covering[1]);
    }

    #[test]
    fn stops_early_on_unexplainable_items() {
        let pool = pool(vec![(vec![1], 0.9)]);
        let transaction = transaction(&[1, 2]);

        let coverage = GreedyCover.infer(&pool, &transaction);
        assert_eq!(1, coverage.covering.len());
        assert!(!coverage.covers(&transaction));
        // no penalty is charged for the uncovered item
        assert!(close(coverage.cost, on_cost(0.9)));
    }

    #[test]
    fn non_subset_candidates_neither_cover_nor_cost() {
        let pool = pool(vec![(vec![4], 0.9), (vec![2, 3, 4], 0.9), (vec![1, 2, 3], 0.5)]);
        let transaction = transaction(&[1, 2, 3]);

        let coverage = GreedyCover.infer(&pool, &transaction);
        assert_eq!(1, coverage.covering.len());
        assert_eq!(iset(&[1, 2, 3]), *coverage.covering[0]);
        assert!(close(coverage.cost, on_cost(0.5)));
    }

    #[test]
    fn zero_probability_candidates_are_ignored() {
        let pool = pool(vec![(vec![1], 0.0), (vec![1, 2], 0.5)]);
        let transaction = transaction(&[1, 2]);

        let coverage = GreedyCover.infer(&pool, &transaction);
        assert_eq!(1, coverage.covering.len());
        assert_eq!(iset(&[1, 2]), *coverage.covering[0]);
        assert!(close(coverage.cost, on_cost(0.5)));
    }

    #[test]
    fn empty_transaction_costs_nothing() {
        let pool = pool(vec![(vec![1, 2], 0.9), (vec![3], 0.8)]);
        let transaction = transaction(&[]);

        let coverage = GreedyCover.infer(&pool, &transaction);
        assert!(coverage.covering.is_empty());
        assert_eq!(0.0, coverage.cost);
    }

    #[test]
    fn empty_pool_yields_empty_covering() {
        let coverage = GreedyCover.infer(&ItemsetPool::new(), &transaction(&[1, 2]));
        assert!(coverage.covering.is_empty());
        assert_eq!(0.0, coverage.cost);
    }
}
