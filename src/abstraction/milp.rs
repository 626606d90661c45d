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

//! This module defines the boundary towards an external mixed-integer program
//! solver: the abstract description of a binary covering program, and the
//! `MipSolver` trait implemented by adapters around whatever MILP library is
//! available.

/// The abstract description of a binary covering program, as built by the
/// exact covering algorithm. There is one binary decision variable per
/// filtered candidate itemset (meaning "this itemset is selected"), and the
/// program reads:
///
/// * minimize `objective · z`,
/// * subject to `row · z >= 1` for every row of `covers`,
/// * with every `z` variable binary.
///
/// Rows carry one coefficient per variable; in a covering constraint the
/// coefficient is 1.0 for every candidate containing the constrained item and
/// 0.0 everywhere else.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoveringProgram {
    /// objective coefficients, one per decision variable
    pub objective: Vec<f64>,
    /// the covering constraints; each row is a coefficient vector over the
    /// decision variables and requires `row · z >= 1`
    pub covers: Vec<Vec<f64>>,
}
impl CoveringProgram {
    /// Returns the number of decision variables of the program.
    pub fn nb_variables(&self) -> usize {
        self.objective.len()
    }
}

/// This is the solver abstraction consumed by the exact covering algorithm.
/// An implementation is an adapter around some MILP library; the core never
/// assumes any specific solver API beyond this trait.
///
/// Solving is a synchronous, potentially slow call with no cancellation or
/// timeout contract at this layer: callers wanting bounded latency must
/// impose a timeout around the whole inference invocation.
pub trait MipSolver {
    /// Attempts to solve the given program to optimality. Returns one solved
    /// value per decision variable (in variable order, to be rounded to 0/1
    /// by the caller), or `None` when the program is infeasible or the
    /// underlying solver fails. No retry is ever attempted: `None` is
    /// terminal for the call.
    fn solve(&self, program: &CoveringProgram) -> Option<Vec<f64>>;
}
