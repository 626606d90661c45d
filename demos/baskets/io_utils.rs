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

//! This module contains everything that is necessary to parse the demo's two
//! input files. Chances are high that this module will be of little to no
//! interest to you.
//!
//! Both files hold whitespace separated integers, one record per line, and
//! `#` starts a comment line. In the pool file every line additionally starts
//! with the probability of the candidate itemset.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    num::{ParseFloatError, ParseIntError},
    path::Path,
};

use itemset_cover::{Item, Itemset, ItemsetPool, Transaction};

/// This enumeration simply groups the kind of errors that might occur when
/// parsing the demo inputs. There can be io errors (file unavailable ?),
/// parse errors (the parser expected a number but got ... something else),
/// or a probability lying outside of the open interval (0, 1) -- which the
/// inference requires and does not check on its own.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read an integer item id but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The parser expected to read a probability but got some garbage
    #[error("parse float {0}")]
    ParseFloat(#[from] ParseFloatError),
    /// The probability read from file cannot be used by the cost model
    #[error("probability {0} lies outside of the open interval (0, 1)")]
    Probability(f64),
}

/// This function is used to read the weighted candidate pool from file. It
/// returns either the pool if everything went on well or an error describing
/// the problem.
pub fn read_pool<P: AsRef<Path>>(fname: P) -> Result<ItemsetPool, Error> {
    let f = BufReader::new(File::open(fname)?);

    let mut pool = ItemsetPool::new();
    for line in f.lines() {
        let line = line?;
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let probability = tokens.next().unwrap().parse::<f64>()?;
        if probability <= 0.0 || probability >= 1.0 {
            return Err(Error::Probability(probability));
        }

        let mut items = vec![];
        for token in tokens {
            items.push(Item(token.parse::<usize>()?));
        }
        pool.insert(Itemset::new(items), probability);
    }
    Ok(pool)
}

/// This function is used to read the transactions from file. It returns
/// either the transactions if everything went on well or an error describing
/// the problem.
pub fn read_transactions<P: AsRef<Path>>(fname: P) -> Result<Vec<Transaction>, Error> {
    let f = BufReader::new(File::open(fname)?);

    let mut transactions = vec![];
    for line in f.lines() {
        let line = line?;
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        let mut items = vec![];
        for token in line.split_whitespace() {
            items.push(Item(token.parse::<usize>()?));
        }
        transactions.push(Transaction::new(items));
    }
    Ok(transactions)
}
