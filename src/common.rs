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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::sync::Arc;

use fxhash::{FxHashMap, FxHashSet};

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes one item from the universe of observable items. Items are
/// opaque identifiers: each one is assumed to be identified with an integer and
/// carries no further structure.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Item(pub usize);
impl Item {
    #[inline]
    /// This function returns the id (numeric value) of the item.
    ///
    /// # Examples:
    /// ```
    /// # use itemset_cover::Item;
    /// assert_eq!(0, Item(0).id());
    /// assert_eq!(1, Item(1).id());
    /// assert_eq!(2, Item(2).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}

// ----------------------------------------------------------------------------
// --- ITEMSET ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An itemset is an immutable set of unique items standing for one candidate
/// explanatory pattern. Equality and hashing are set-based: the order in which
/// the items were supplied at construction is irrelevant. Itemsets are shared
/// read-only values (typically behind an `Arc`): they are referenced both by
/// the candidate pool and by the coverings built from it, and nothing ever
/// mutates an itemset after it has been created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Itemset {
    /// the member items, kept sorted and deduplicated so that equality and
    /// hashing do not depend on construction order
    items: Vec<Item>,
}
impl Itemset {
    /// Creates an itemset from any sequence of items. Duplicates are dropped.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut items = items.into_iter().collect::<Vec<Item>>();
        items.sort_unstable();
        items.dedup();
        Itemset { items }
    }
    /// Returns the member items in increasing id order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    /// Returns the number of items in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }
    /// Returns true iff this set contains no item at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// Returns true iff the given item belongs to this set.
    pub fn contains(&self, item: Item) -> bool {
        self.items.binary_search(&item).is_ok()
    }
    /// Returns true iff every item of this set occurs in the given transaction.
    pub fn is_subset_of(&self, transaction: &Transaction) -> bool {
        self.items.iter().all(|item| transaction.contains(*item))
    }
}

// ----------------------------------------------------------------------------
// --- TRANSACTION ------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A transaction is one observed record: the sequence of unique items whose
/// presence the inference must explain. It is a read-only input; should the
/// same item occur more than once in the input sequence, only its first
/// occurrence is retained.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// the observed items, in their original order
    items: Vec<Item>,
    /// membership index over the very same items
    index: FxHashSet<Item>,
}
impl Transaction {
    /// Creates a transaction from any sequence of items, dropping duplicates
    /// while preserving first-occurrence order.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut index = FxHashSet::default();
        let mut uniq = vec![];
        for item in items {
            if index.insert(item) {
                uniq.push(item);
            }
        }
        Transaction { items: uniq, index }
    }
    /// Returns the observed items in their original order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    /// Returns the number of unique items in this transaction.
    pub fn len(&self) -> usize {
        self.items.len()
    }
    /// Returns true iff this transaction holds no item at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// Returns true iff the given item was observed in this transaction.
    pub fn contains(&self, item: Item) -> bool {
        self.index.contains(&item)
    }
}

// ----------------------------------------------------------------------------
// --- ITEMSET POOL -----------------------------------------------------------
// ----------------------------------------------------------------------------
/// The pool of weighted candidate itemsets: an insertion-ordered mapping from
/// itemset to the probability of that itemset being active. The pool is
/// produced by the (out-of-scope) model-fitting loop and is immutable for the
/// duration of one inference call; it may safely be shared across concurrent
/// calls.
///
/// # Note:
/// The fitting loop must uphold the invariant that every probability lies
/// strictly between 0 and 1: the cost model takes `-ln(p)` and `-ln(1 - p)`,
/// both of which are undefined at the boundary. The pool does not police this
/// invariant itself.
#[derive(Debug, Clone, Default)]
pub struct ItemsetPool {
    /// the (itemset, probability) pairs in insertion order
    entries: Vec<(Arc<Itemset>, f64)>,
    /// position of each itemset within `entries`
    index: FxHashMap<Arc<Itemset>, usize>,
}
impl ItemsetPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Default::default()
    }
    /// Associates the given probability to the given itemset. When the itemset
    /// is already known to the pool, its probability is updated in place and
    /// its position in the iteration order is left untouched.
    pub fn insert(&mut self, itemset: Itemset, probability: f64) {
        if let Some(at) = self.index.get(&itemset).copied() {
            self.entries[at].1 = probability;
        } else {
            let itemset = Arc::new(itemset);
            self.index.insert(Arc::clone(&itemset), self.entries.len());
            self.entries.push((itemset, probability));
        }
    }
    /// Returns the probability currently associated to the given itemset, if
    /// that itemset belongs to the pool.
    pub fn probability_of(&self, itemset: &Itemset) -> Option<f64> {
        self.index.get(itemset).map(|at| self.entries[*at].1)
    }
    /// Visits the (itemset, probability) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<Itemset>, f64)> + '_ {
        self.entries.iter().map(|(itemset, probability)| (itemset, *probability))
    }
    /// Returns the number of candidate itemsets in the pool.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// Returns true iff the pool holds no candidate at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ----------------------------------------------------------------------------
// --- COST MODEL -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The cost of *selecting* a candidate itemset with probability `probability`
/// into a covering. This is the negative log-likelihood of the itemset being
/// active under the noisy-OR model.
#[inline]
pub fn on_cost(probability: f64) -> f64 {
    -probability.ln()
}
/// The cost of leaving a candidate itemset with probability `probability`
/// *out* of a covering. This is the negative log-likelihood of the itemset
/// being inactive under the noisy-OR model.
///
/// Every candidate that survives the subset filter contributes exactly one of
/// [`on_cost`] or [`off_cost`] to the total cost of a coverage, whichever
/// algorithm computed it.
#[inline]
pub fn off_cost(probability: f64) -> f64 {
    -(1.0 - probability).ln()
}

// ----------------------------------------------------------------------------
// --- COVERAGE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of one inference call: the covering that was selected to
/// explain the transaction, along with the total negative log-likelihood of
/// that explanation. Lower costs are better; a cost of positive infinity means
/// the transaction admits no usable explanation at all (this only ever arises
/// from the exact algorithm, whose covering constraints may be infeasible).
#[derive(Debug, Clone)]
pub struct Coverage {
    /// the selected itemsets, in selection order
    pub covering: Vec<Arc<Itemset>>,
    /// total negative log-likelihood of the explanation
    pub cost: f64,
}
impl Coverage {
    /// The distinguished failure outcome: an empty covering at infinite cost.
    pub fn unexplainable() -> Self {
        Coverage { covering: vec![], cost: f64::INFINITY }
    }
    /// Returns true iff this outcome is the distinguished failure value.
    /// Callers must branch on this rather than expect any error type: solver
    /// infeasibility propagates as an ordinary return value.
    pub fn is_unexplainable(&self) -> bool {
        self.cost.is_infinite()
    }
    /// Returns true iff the given itemset belongs to the covering.
    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.covering.iter().any(|selected| selected.as_ref() == itemset)
    }
    /// Returns true iff every item of the given transaction occurs in at least
    /// one selected itemset. The approximate algorithms may return coverages
    /// for which this is false: an incomplete covering is policy, not a fault.
    pub fn covers(&self, transaction: &Transaction) -> bool {
        transaction
            .items()
            .iter()
            .all(|item| self.covering.iter().any(|selected| selected.contains(*item)))
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################


#[cfg(test)]
mod test_itemset {
    use std::collections::HashSet;

    use crate::{Item, Itemset, Transaction};

    #[test]
    fn equality_is_set_based() {
        let a = Itemset::new([Item(3), Item(1), Item(2)]);
        let b = Itemset::new([Item(1), Item(2), Item(3)]);
        assert_eq!(a, b);

        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
    }
    #[test]
    fn duplicates_are_dropped() {
        let a = Itemset::new([Item(1), Item(1), Item(2)]);
        assert_eq!(2, a.len());
        assert_eq!(&[Item(1), Item(2)], a.items());
    }
    #[test]
    fn membership() {
        let a = Itemset::new([Item(4), Item(8)]);
        assert!(a.contains(Item(4)));
        assert!(a.contains(Item(8)));
        assert!(!a.contains(Item(6)));
    }
    #[test]
    fn subset_of_transaction() {
        let transaction = Transaction::new([Item(1), Item(2), Item(3)]);
        assert!(Itemset::new([Item(1), Item(3)]).is_subset_of(&transaction));
        assert!(Itemset::new([]).is_subset_of(&transaction));
        assert!(!Itemset::new([Item(3), Item(4)]).is_subset_of(&transaction));
    }
}

#[cfg(test)]
mod test_transaction {
    use crate::{Item, Transaction};

    #[test]
    fn first_occurrence_order_is_kept() {
        let transaction = Transaction::new([Item(5), Item(1), Item(5), Item(3)]);
        assert_eq!(&[Item(5), Item(1), Item(3)], transaction.items());
        assert_eq!(3, transaction.len());
    }
    #[test]
    fn membership() {
        let transaction = Transaction::new([Item(5), Item(1)]);
        assert!(transaction.contains(Item(5)));
        assert!(!transaction.contains(Item(2)));
    }
    #[test]
    fn empty_transaction() {
        let transaction = Transaction::new([]);
        assert!(transaction.is_empty());
        assert_eq!(0, transaction.len());
    }
}

#[cfg(test)]
mod test_pool {
    use crate::{Item, Itemset, ItemsetPool};

    #[test]
    fn iteration_follows_insertion_order() {
        let mut pool = ItemsetPool::new();
        pool.insert(Itemset::new([Item(2)]), 0.2);
        pool.insert(Itemset::new([Item(1)]), 0.1);
        pool.insert(Itemset::new([Item(3)]), 0.3);

        let order = pool.iter().map(|(s, _)| s.items()[0].id()).collect::<Vec<usize>>();
        assert_eq!(vec![2, 1, 3], order);
    }
    #[test]
    fn reinsertion_updates_in_place() {
        let mut pool = ItemsetPool::new();
        pool.insert(Itemset::new([Item(2)]), 0.2);
        pool.insert(Itemset::new([Item(1)]), 0.1);
        pool.insert(Itemset::new([Item(2)]), 0.9);

        assert_eq!(2, pool.len());
        assert_eq!(Some(0.9), pool.probability_of(&Itemset::new([Item(2)])));

        let order = pool.iter().map(|(s, _)| s.items()[0].id()).collect::<Vec<usize>>();
        assert_eq!(vec![2, 1], order);
    }
    #[test]
    fn unknown_itemsets_have_no_probability() {
        let pool = ItemsetPool::new();
        assert!(pool.is_empty());
        assert_eq!(None, pool.probability_of(&Itemset::new([Item(2)])));
    }
}

#[cfg(test)]
mod test_cost_model {
    use crate::{off_cost, on_cost};

    #[test]
    fn on_cost_is_neg_log_likelihood() {
        assert!((on_cost(0.5) - std::f64::consts::LN_2).abs() < 1e-12);
        assert!(on_cost(0.9) < on_cost(0.1));
    }
    #[test]
    fn off_cost_mirrors_on_cost() {
        assert!((off_cost(0.3) - on_cost(0.7)).abs() < 1e-12);
        assert!((off_cost(0.5) - on_cost(0.5)).abs() < 1e-12);
    }
}
