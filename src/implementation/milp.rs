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

//! This module provides the default MILP adapter, implemented on top of the
//! `good_lp` modeling crate.

use good_lp::{default_solver, variable, Expression, ProblemVariables, Solution, SolverModel};

use crate::{CoveringProgram, MipSolver};

/// An adapter solving covering programs with whatever backend `good_lp` was
/// compiled against (the manifest selects the pure-Rust `microlp` solver, so
/// no system library is required). Every resolution failure -- infeasibility
/// included -- maps to `None`, which the exact covering algorithm turns into
/// its infinite-cost outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoodLpSolver;

/// A type alias to emphasize that this is the solver adapter which the exact
/// covering algorithm uses unless told otherwise.
pub type DefaultMipSolver = GoodLpSolver;

impl MipSolver for GoodLpSolver {
    fn solve(&self, program: &CoveringProgram) -> Option<Vec<f64>> {
        // a covering row without any nonzero coefficient can never reach 1;
        // every other row is satisfiable, so this is the one infeasible case
        // and it need not travel to the backend
        if program.covers.iter().any(|row| row.iter().all(|c| *c == 0.0)) {
            return None;
        }

        let mut model = ProblemVariables::new();
        let z = (0..program.nb_variables())
            .map(|_| model.add(variable().binary()))
            .collect::<Vec<_>>();

        let mut objective = Expression::with_capacity(z.len());
        for (coefficient, var) in program.objective.iter().zip(z.iter()) {
            objective.add_mul(*coefficient, *var);
        }

        let mut problem = model.minimise(objective).using(default_solver);
        for row in program.covers.iter() {
            let mut covered = Expression::with_capacity(row.len());
            for (coefficient, var) in row.iter().zip(z.iter()) {
                if *coefficient != 0.0 {
                    covered.add_mul(*coefficient, *var);
                }
            }
            problem.add_constraint(covered.geq(1));
        }

        match problem.solve() {
            Ok(solution) => Some(z.iter().map(|var| solution.value(*var)).collect()),
            Err(_) => None,
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod tests {
    use crate::{CoveringProgram, GoodLpSolver, MipSolver};

    fn rounded(solution: Vec<f64>) -> Vec<i64> {
        solution.iter().map(|value| value.round() as i64).collect()
    }

    #[test]
    fn covering_constraints_force_selection() {
        // selecting the only candidate costs 2.0 but is mandatory
        let program = CoveringProgram {
            objective: vec![2.0],
            covers: vec![vec![1.0]],
        };
        let solution = GoodLpSolver.solve(&program).unwrap();
        assert_eq!(vec![1], rounded(solution));
    }

    #[test]
    fn negative_coefficients_are_selected_even_unconstrained() {
        let program = CoveringProgram {
            objective: vec![2.0, -3.0],
            covers: vec![vec![1.0, 0.0]],
        };
        let solution = GoodLpSolver.solve(&program).unwrap();
        assert_eq!(vec![1, 1], rounded(solution));
    }

    #[test]
    fn costly_unconstrained_variables_stay_off() {
        let program = CoveringProgram {
            objective: vec![-1.0, 0.5],
            covers: vec![],
        };
        let solution = GoodLpSolver.solve(&program).unwrap();
        assert_eq!(vec![1, 0], rounded(solution));
    }

    #[test]
    fn an_uncoverable_row_is_infeasible() {
        let program = CoveringProgram {
            objective: vec![1.0],
            covers: vec![vec![1.0], vec![0.0]],
        };
        assert!(GoodLpSolver.solve(&program).is_none());
    }

    #[test]
    fn the_cheapest_of_two_covers_wins() {
        // both variables cover the single row; the cheaper one is picked
        let program = CoveringProgram {
            objective: vec![5.0, 1.0],
            covers: vec![vec![1.0, 1.0]],
        };
        let solution = GoodLpSolver.solve(&program).unwrap();
        assert_eq!(vec![0, 1], rounded(solution));
    }
}
