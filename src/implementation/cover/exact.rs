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

//! This module provides the exact covering algorithm, which delegates its
//! work to a mixed-integer program solver.

use std::sync::Arc;

use crate::{
    off_cost, on_cost, Coverage, CoveringProgram, DefaultMipSolver, GoodLpSolver, Inference,
    ItemsetPool, MipSolver, Transaction,
};

use super::filter_pool;

/// The exact covering algorithm. It formulates the selection problem as a
/// binary integer program over the filtered candidates -- one decision
/// variable per candidate, objective coefficient `ln((1 - p) / p)` (the
/// difference between selecting and not selecting a candidate; the off-costs
/// are a constant shift of the objective, so minimizing this linear form
/// minimizes the noisy-OR negative log-likelihood exactly) -- and delegates it
/// to a [`MipSolver`]. One `>= 1` constraint per transaction item forces a
/// complete covering: unlike the two approximations, this algorithm never
/// returns a partial explanation. When those constraints are infeasible, or
/// when the solver fails, the outcome is [`Coverage::unexplainable`].
///
/// Solving an integer program is NP-hard in general; this is by far the
/// slowest of the three algorithms.
///
/// The algorithm is generic in its solver so that tests can script one and
/// deployments can plug a different backend; [`ExactCover::new`] picks the
/// default adapter.
#[derive(Debug, Clone)]
pub struct ExactCover<S = DefaultMipSolver> {
    solver: S,
}
impl ExactCover {
    /// Creates an instance delegating to the default MILP adapter.
    pub fn new() -> Self {
        ExactCover { solver: GoodLpSolver }
    }
}
impl Default for ExactCover {
    fn default() -> Self {
        Self::new()
    }
}
impl<S: MipSolver> ExactCover<S> {
    /// Creates an instance delegating to the given solver.
    pub fn with_solver(solver: S) -> Self {
        ExactCover { solver }
    }
}

impl<S: MipSolver> Inference for ExactCover<S> {
    fn infer(&mut self, pool: &ItemsetPool, transaction: &Transaction) -> Coverage {
        let filtered = filter_pool(pool, transaction);

        // without variables there is no program to solve: either there is
        // nothing to explain, or the covering constraints cannot hold
        if filtered.is_empty() {
            return if transaction.is_empty() {
                Coverage { covering: vec![], cost: 0.0 }
            } else {
                Coverage::unexplainable()
            };
        }

        let objective = filtered
            .iter()
            .map(|(_, probability)| ((1.0 - probability) / probability).ln())
            .collect();
        // every transaction item must be covered by at least one selected
        // candidate
        let covers = transaction
            .items()
            .iter()
            .map(|item| {
                filtered
                    .iter()
                    .map(|(itemset, _)| if itemset.contains(*item) { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect();
        let program = CoveringProgram { objective, covers };

        match self.solver.solve(&program) {
            // no solution is bad: the transaction cannot be explained by the
            // current pool
            None => Coverage::unexplainable(),
            Some(solution) => {
                let mut covering: Vec<Arc<_>> = vec![];
                let mut cost = 0.0;
                for (at, (itemset, probability)) in filtered.iter().enumerate() {
                    if solution[at].round() as i64 == 1 {
                        covering.push(Arc::clone(itemset));
                        cost += on_cost(*probability);
                    } else {
                        cost += off_cost(*probability);
                    }
                }
                Coverage { covering, cost }
            }
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::{
        off_cost, on_cost, CoveringProgram, ExactCover, Inference, Item, Itemset, ItemsetPool,
        MipSolver, Transaction,
    };

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

    /// A solver double that records the program it was given and answers with
    /// a preset solution.
    struct Scripted {
        answer: Option<Vec<f64>>,
        seen: RefCell<Option<CoveringProgram>>,
    }
    impl Scripted {
        fn answering(answer: Option<Vec<f64>>) -> Self {
            Scripted { answer, seen: RefCell::new(None) }
        }
    }
    impl MipSolver for &Scripted {
        fn solve(&self, program: &CoveringProgram) -> Option<Vec<f64>> {
            *self.seen.borrow_mut() = Some(program.clone());
            self.answer.clone()
        }
    }

    #[test]
    fn the_program_is_built_over_the_filtered_pool() {
        let pool = pool(vec![
            (vec![1, 2], 0.9),
            (vec![4], 0.9), // not a subset, must not appear in the program
            (vec![3], 0.8),
        ]);
        let transaction = transaction(&[1, 2, 3]);

        let solver = Scripted::answering(Some(vec![1.0, 1.0]));
        ExactCover::with_solver(&solver).infer(&pool, &transaction);

        let program = solver.seen.borrow().clone().unwrap();
        assert_eq!(2, program.nb_variables());
        assert!(close(program.objective[0], (0.1f64 / 0.9).ln()));
        assert!(close(program.objective[1], (0.2f64 / 0.8).ln()));
        // one covering row per transaction item, over {1,2} and {3}
        assert_eq!(
            vec![vec![1.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]],
            program.covers
        );
    }

    #[test]
    fn solved_values_are_rounded_to_selections() {
        let pool = pool(vec![(vec![1, 2], 0.9), (vec![3], 0.8), (vec![1], 0.4)]);
        let transaction = transaction(&[1, 2, 3]);

        let solver = Scripted::answering(Some(vec![0.9999, 1.0, 0.0001]));
        let coverage = ExactCover::with_solver(&solver).infer(&pool, &transaction);

        assert_eq!(2, coverage.covering.len());
        assert!(coverage.contains(&iset(&[1, 2])));
        assert!(coverage.contains(&iset(&[3])));
        assert!(close(coverage.cost, on_cost(0.9) + on_cost(0.8) + off_cost(0.4)));
    }

    #[test]
    fn no_solution_is_unexplainable() {
        let pool = pool(vec![(vec![1, 2], 0.9)]);
        let transaction = transaction(&[1, 2]);

        let solver = Scripted::answering(None);
        let coverage = ExactCover::with_solver(&solver).infer(&pool, &transaction);
        assert!(coverage.is_unexplainable());
        assert!(coverage.covering.is_empty());
    }

    #[test]
    fn an_empty_filtered_pool_never_reaches_the_solver() {
        let pool = pool(vec![(vec![4, 5], 0.9)]);
        let transaction = transaction(&[1, 2]);

        let solver = Scripted::answering(Some(vec![]));
        let coverage = ExactCover::with_solver(&solver).infer(&pool, &transaction);
        assert!(coverage.is_unexplainable());
        assert!(solver.seen.borrow().is_none());
    }

    #[test]
    fn an_empty_transaction_is_explained_for_free() {
        let pool = pool(vec![(vec![1, 2], 0.9)]);
        let transaction = transaction(&[]);

        let solver = Scripted::answering(None);
        let coverage = ExactCover::with_solver(&solver).infer(&pool, &transaction);
        assert_eq!(0.0, coverage.cost);
        assert!(coverage.covering.is_empty());
        assert!(solver.seen.borrow().is_none());
    }
}
