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

//! This module provides the randomized primal-dual covering algorithm.

use std::sync::Arc;

use fxhash::FxHashSet;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::{on_cost, Coverage, Inference, Item, Itemset, ItemsetPool, Transaction};

use super::{filter_pool, off_costs_of_unselected};

/// The randomized primal-dual scheme for weighted set cover, applied to the
/// noisy-OR on-cost. Every filtered candidate starts with a residual cost of
/// `on_cost`; while some transaction item remains unexplained, one of them is
/// picked at random and its dual is raised as much as possible: among the
/// candidates containing the picked item, the one with the least residual cost
/// is selected (first in pool insertion order on ties), its residual -- the
/// raise, `delta` -- is charged to the total, every item it contains leaves
/// the unexplained list, and the residual of every candidate containing the
/// picked item shrinks by `delta`. The selected constraint thereby becomes
/// tight, which is what certifies the f-approximation ratio (f being the
/// largest number of filtered candidates sharing one item).
///
/// The picked order only decides how ties are broken, not the guarantee.
/// When no candidate contains the picked item the loop stops and the covering
/// is returned incomplete, same policy as the greedy.
///
/// The algorithm owns its source of randomness so that concurrent inference
/// calls never share generator state; seed it (or inject a generator) to make
/// runs reproducible.
#[derive(Debug, Clone)]
pub struct PrimalDualCover<R = XorShiftRng> {
    rng: R,
}
impl PrimalDualCover {
    /// Creates an instance drawing its random picks from a generator seeded
    /// with `seed`. Two instances created with the same seed infer identical
    /// coverages from identical inputs.
    pub fn new(seed: u64) -> Self {
        PrimalDualCover { rng: XorShiftRng::seed_from_u64(seed) }
    }
}
impl<R: Rng> PrimalDualCover<R> {
    /// Creates an instance drawing its random picks from the given generator.
    pub fn with_rng(rng: R) -> Self {
        PrimalDualCover { rng }
    }
}

impl<R: Rng> Inference for PrimalDualCover<R> {
    fn infer(&mut self, pool: &ItemsetPool, transaction: &Transaction) -> Coverage {
        let filtered = filter_pool(pool, transaction);

        let mut not_covered: Vec<Item> = transaction.items().to_vec();
        let mut residual: Vec<f64> =
            filtered.iter().map(|(_, probability)| on_cost(*probability)).collect();

        let mut covering: Vec<Arc<Itemset>> = vec![];
        let mut selected: FxHashSet<usize> = FxHashSet::default();
        let mut cost = 0.0;

        while !not_covered.is_empty() {
            let element = not_covered[self.rng.random_range(0..not_covered.len())];

            // raise the dual of that element as much as possible
            let mut delta = f64::INFINITY;
            let mut best = None;
            for (at, (itemset, _)) in filtered.iter().enumerate() {
                if itemset.contains(element) && residual[at] < delta {
                    delta = residual[at];
                    best = Some(at);
                }
            }

            match best {
                Some(at) => {
                    let (itemset, _) = &filtered[at];
                    covering.push(Arc::clone(itemset));
                    selected.insert(at);
                    cost += delta;
                    // the whole itemset is covered for free, not just the
                    // picked element
                    not_covered.retain(|item| !itemset.contains(*item));
                }
                // incomplete coverings are allowed
                None => break,
            }

            // make the dual of the element binding: the selected candidate's
            // residual drops to exactly zero
            for (at, (itemset, _)) in filtered.iter().enumerate() {
                if itemset.contains(element) {
                    residual[at] -= delta;
                }
            }
        }

        cost += off_costs_of_unselected(&filtered, &selected);
        Coverage { covering, cost }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
