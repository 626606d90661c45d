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

//! This demo infers coverings for a file of transactions given a file of
//! weighted candidate itemsets, with the covering algorithm picked on the
//! command line. It is meant as a minimal show case of how the inference is
//! wired to actual data; the fitting loop producing real candidate weights
//! belongs to the surrounding mining system.

use clap::Parser;
use itemset_cover::{ExactCover, GreedyCover, Inference, PrimalDualCover};

use crate::io_utils::{read_pool, read_transactions};

mod io_utils;

/// This structure uses `clap-derive` annotations and define the arguments that
/// can be passed on to the executable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the weighted candidate itemsets file (one candidate per
    /// line: the probability followed by the items)
    pool: String,
    /// The path to the transactions file (one transaction per line)
    transactions: String,
    /// The covering algorithm to use: greedy, primal-dual or exact
    #[clap(short, long, default_value = "greedy")]
    algorithm: String,
    /// The seed of the primal-dual algorithm's random source
    #[clap(short, long, default_value = "0")]
    seed: u64,
}

/// An utility function to instanciate the covering algorithm requested on the
/// command line.
fn algorithm(name: &str, seed: u64) -> Box<dyn Inference> {
    match name {
        "primal-dual" => Box::new(PrimalDualCover::new(seed)),
        "exact" => Box::new(ExactCover::new()),
        _ => Box::new(GreedyCover),
    }
}

fn main() {
    let args = Args::parse();
    let pool = read_pool(&args.pool).expect("cannot read the candidate pool");
    let transactions =
        read_transactions(&args.transactions).expect("cannot read the transactions");

    let mut algorithm = algorithm(&args.algorithm, args.seed);
    for (tid, transaction) in transactions.iter().enumerate() {
        let coverage = algorithm.infer(&pool, transaction);
        let covering = coverage
            .covering
            .iter()
            .map(|itemset| itemset.items().iter().map(|item| item.id()).collect())
            .collect::<Vec<Vec<usize>>>();

        if coverage.is_unexplainable() {
            println!("{:>6} | unexplainable", tid);
        } else {
            println!("{:>6} | cost {:<12.6} covering {:?}", tid, coverage.cost, covering);
        }
    }
}
