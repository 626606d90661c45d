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

//! This module defines the `Inference` trait.

use crate::{Coverage, ItemsetPool, Transaction};

/// This is the inference abstraction: the one capability shared by the three
/// covering algorithms. An implementation selects, out of the candidate pool,
/// a covering explaining the items of the given transaction and returns it
/// together with the total negative log-likelihood of that explanation.
///
/// Whatever the implementation, only candidates that are subsets of the
/// transaction and carry a probability greater than zero ever take part: each
/// such *filtered* candidate contributes [`on_cost`](crate::on_cost) to the
/// returned total when it is selected and [`off_cost`](crate::off_cost) when
/// it is not. Candidates eliminated by the filter contribute nothing and are
/// never selected.
///
/// Three cases are to be distinguished about the outcome:
///
/// * The covering covers every item of the transaction: the usual, complete
///   explanation.
/// * The covering leaves some items unexplained: the approximate algorithms
///   stop early when no filtered candidate can cover a remaining item. No
///   penalty is charged for the gap; callers that care must check with
///   [`Coverage::covers`].
/// * The cost is positive infinity: the exact algorithm found its covering
///   constraints infeasible (or its solver failed). This is the sole error
///   signal of the inference, and it travels as an ordinary value.
///
/// One call handles exactly one transaction, and implementations keep no
/// state between calls beyond their source of randomness (which is why the
/// receiver is mutable). Calls for different transactions are independent:
/// to parallelize, give each worker its own algorithm value and share the
/// pool.
pub trait Inference {
    /// Infers a covering explaining `transaction` from the candidates in
    /// `pool`, and returns it along with its cost.
    fn infer(&mut self, pool: &ItemsetPool, transaction: &Transaction) -> Coverage;
}
