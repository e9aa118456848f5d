// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Insertion-ordered set with set algebra and functional combinators.
//!
//! An `EnhancedSet` owns an `IndexSet` and never exposes it mutably except through the usual `insert`, `remove` and `clear`. Every other operation leaves `self` and its arguments untouched and returns a fresh set, so chains such as `a.union(&b).filter(p).map(f)` never alias.
//!
//! The arguments of the algebraic operations only need to implement [`SetLike`](../like/trait.SetLike.html): standard sets, `IndexSet`, `BitSet` (for `usize` elements) and `EnhancedSet` itself are all accepted.
//!
//! Results of `union`, `intersection`, `subtract` and `filter` follow the iteration order of `self`, elements only found in the argument of `union` are appended afterwards in the argument's order.
//!
//! # Examples
//!
//! ```rust
//! use enhanced::EnhancedSet;
//!
//! let a = EnhancedSet::from([1, 2, 3]);
//! let b = EnhancedSet::from([3, 4, 5]);
//! assert_eq!(a.union(&b).to_vec(), vec![1, 2, 3, 4, 5]);
//! assert_eq!((&a & &b).to_vec(), vec![3]);
//! assert_eq!(a.map(|x| x % 2).to_vec(), vec![1, 0]);
//! assert_eq!(a.reduce(|acc, x| acc + x, 0), 6);
//! ```

use std::collections::HashSet;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Sub};
use indexmap::IndexSet;
use indexmap::set::{IntoIter, Iter};
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use crate::MAX_PREALLOCATION;
use crate::like::SetLike;

#[derive(Clone)]
pub struct EnhancedSet<T, S = RandomState>
{
  set: IndexSet<T, S>
}

impl<T> EnhancedSet<T>
{
  pub fn new() -> EnhancedSet<T> {
    EnhancedSet::wrap(IndexSet::new())
  }
}

impl<T, S> EnhancedSet<T, S>
{
  pub fn wrap(set: IndexSet<T, S>) -> EnhancedSet<T, S> {
    EnhancedSet { set: set }
  }

  pub fn into_inner(self) -> IndexSet<T, S> {
    self.set
  }

  pub fn with_hasher(hasher: S) -> EnhancedSet<T, S> {
    EnhancedSet::wrap(IndexSet::with_hasher(hasher))
  }

  pub fn len(&self) -> usize {
    self.set.len()
  }

  pub fn is_empty(&self) -> bool {
    self.set.is_empty()
  }

  /// Iterates over the elements in insertion order.
  pub fn iter(&self) -> Iter<'_, T> {
    self.set.iter()
  }

  pub fn clear(&mut self) {
    self.set.clear();
  }

  /// `true` if at least one element satisfies `predicate`, `false` on an empty set.
  pub fn some<F>(&self, mut predicate: F) -> bool where
   F: FnMut(&T) -> bool
  {
    self.set.iter().any(|x| predicate(x))
  }

  /// `true` if every element satisfies `predicate`, vacuously `true` on an empty set.
  pub fn every<F>(&self, mut predicate: F) -> bool where
   F: FnMut(&T) -> bool
  {
    self.set.iter().all(|x| predicate(x))
  }

  /// Left fold over the elements in insertion order.
  pub fn reduce<U, F>(&self, reducer: F, initial: U) -> U where
   F: FnMut(U, &T) -> U
  {
    self.set.iter().fold(initial, reducer)
  }
}

impl<T, S> EnhancedSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  pub fn contains(&self, value: &T) -> bool {
    self.set.contains(value)
  }

  /// Adds `value` at the end of the iteration order. Returns `false` if it was already present, in which case its position is unchanged.
  pub fn insert(&mut self, value: T) -> bool {
    self.set.insert(value)
  }

  /// Removes `value` and shifts the following elements, so the relative order of the remaining ones is preserved.
  pub fn remove(&mut self, value: &T) -> bool {
    self.set.shift_remove(value)
  }

  /// Every element of `self` is in `other`. An empty set is a subset of anything.
  pub fn is_subset<O>(&self, other: &O) -> bool where
   O: SetLike<T> + ?Sized
  {
    self.set.iter().all(|x| other.has(x))
  }

  pub fn is_superset<O>(&self, other: &O) -> bool where
   O: SetLike<T> + ?Sized
  {
    other.every_element(|x| self.set.contains(x))
  }

  /// No element of `self` is in `other`. An empty set is disjoint from anything.
  pub fn is_disjoint<O>(&self, other: &O) -> bool where
   O: SetLike<T> + ?Sized
  {
    self.set.iter().all(|x| !other.has(x))
  }

  fn same_elements<S2>(&self, other: &EnhancedSet<T, S2>) -> bool where
   S2: BuildHasher
  {
    self.len() == other.len() && self.set.iter().all(|x| other.set.contains(x))
  }
}

impl<T, S> EnhancedSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher + Default
{
  /// Applies `mapper` to every element. Elements mapped to the same value collapse into one, so the result may be smaller than `self`.
  pub fn map<U, F>(&self, mapper: F) -> EnhancedSet<U, S> where
   U: Eq + Hash,
   F: FnMut(&T) -> U
  {
    EnhancedSet::wrap(self.set.iter().map(mapper).collect())
  }
}

impl<T, S> EnhancedSet<T, S> where
  T: Eq + Hash + Clone,
  S: BuildHasher + Default
{
  /// Copies any set-like collection, preserving its iteration order.
  pub fn from_source<O>(source: &O) -> EnhancedSet<T, S> where
   O: SetLike<T> + ?Sized
  {
    let mut set = IndexSet::with_hasher(S::default());
    source.every_element(|x| {
      set.insert(x.clone());
      true
    });
    EnhancedSet::wrap(set)
  }

  pub fn union<O>(&self, other: &O) -> EnhancedSet<T, S> where
   O: SetLike<T> + ?Sized
  {
    let mut set: IndexSet<T, S> = self.set.iter().cloned().collect();
    other.every_element(|x| {
      if !set.contains(x) {
        set.insert(x.clone());
      }
      true
    });
    EnhancedSet::wrap(set)
  }

  pub fn intersection<O>(&self, other: &O) -> EnhancedSet<T, S> where
   O: SetLike<T> + ?Sized
  {
    self.filter(|x| other.has(x))
  }

  pub fn subtract<O>(&self, other: &O) -> EnhancedSet<T, S> where
   O: SetLike<T> + ?Sized
  {
    self.filter(|x| !other.has(x))
  }

  pub fn filter<F>(&self, mut predicate: F) -> EnhancedSet<T, S> where
   F: FnMut(&T) -> bool
  {
    EnhancedSet::wrap(self.set.iter().filter(|x| predicate(*x)).cloned().collect())
  }

  /// `self` is equal to `self ∩ sets[0] ∩ ... ∩ sets[n-1]`, in other words every element of `self` is in each of `sets`.
  /// The accumulator starts from `self`, not from the first argument.
  pub fn is_intersection_of<'a, I, O>(&self, sets: I) -> bool where
   I: IntoIterator<Item = &'a O>,
   O: SetLike<T> + ?Sized + 'a
  {
    let intersection = sets.into_iter()
      .fold(EnhancedSet::from_source(self), |acc: EnhancedSet<T, S>, set| acc.intersection(set));
    self.same_elements(&intersection)
  }

  /// `self` is equal to `sets[0] ∪ ... ∪ sets[n-1]`, the accumulator starts empty.
  pub fn is_union_of<'a, I, O>(&self, sets: I) -> bool where
   I: IntoIterator<Item = &'a O>,
   O: SetLike<T> + ?Sized + 'a
  {
    let union = sets.into_iter()
      .fold(EnhancedSet::with_hasher(S::default()), |acc: EnhancedSet<T, S>, set| acc.union(set));
    self.same_elements(&union)
  }

  pub fn to_vec(&self) -> Vec<T> {
    self.set.iter().cloned().collect()
  }

  pub fn to_set(&self) -> HashSet<T, S> {
    self.set.iter().cloned().collect()
  }
}

impl<T, S> SetLike<T> for EnhancedSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn has(&self, value: &T) -> bool {
    self.set.contains(value)
  }

  fn every_element<F>(&self, f: F) -> bool where
   F: FnMut(&T) -> bool
  {
    self.set.iter().all(f)
  }
}

impl<T, S> Collection for EnhancedSet<T, S>
{
  type Item = T;
}

impl<T, S> Cardinality for EnhancedSet<T, S>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.set.len()
  }
}

impl<T, S: Default> Empty for EnhancedSet<T, S>
{
  fn empty() -> EnhancedSet<T, S> {
    EnhancedSet::with_hasher(S::default())
  }
}

impl<T, S> Contains for EnhancedSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn contains(&self, value: &T) -> bool {
    self.set.contains(value)
  }
}

impl<T, S> Subset for EnhancedSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn is_subset(&self, rhs: &EnhancedSet<T, S>) -> bool {
    EnhancedSet::is_subset(self, rhs)
  }
}

impl<T, S> Disjoint for EnhancedSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn is_disjoint(&self, rhs: &EnhancedSet<T, S>) -> bool {
    EnhancedSet::is_disjoint(self, rhs)
  }
}

macro_rules! set_op_impl
{
  ( $( $t: ident, $m:ident, $v:ident );* ) =>
  {$(
    impl<T, S> $t for EnhancedSet<T, S> where
      T: Eq + Hash + Clone,
      S: BuildHasher + Default
    {
      type Output = EnhancedSet<T, S>;

      fn $m(&self, rhs: &EnhancedSet<T, S>) -> EnhancedSet<T, S> {
        EnhancedSet::$v(self, rhs)
      }
    }
  )*}
}

set_op_impl! {
  Union, union, union;
  Intersection, intersection, intersection;
  Difference, difference, subtract
}

collection_binop!(impl<T: +Eq +Hash +Clone, S: +BuildHasher +Default> BitOr for EnhancedSet<T, S>, bitor => union);
collection_binop!(impl<T: +Eq +Hash +Clone, S: +BuildHasher +Default> BitAnd for EnhancedSet<T, S>, bitand => intersection);
collection_binop!(impl<T: +Eq +Hash +Clone, S: +BuildHasher +Default> Sub for EnhancedSet<T, S>, sub => subtract);

impl<T, S> fmt::Debug for EnhancedSet<T, S> where
  T: fmt::Debug
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.debug_set().entries(self.set.iter()).finish()
  }
}

impl<T, S: Default> Default for EnhancedSet<T, S>
{
  fn default() -> EnhancedSet<T, S> {
    EnhancedSet::wrap(IndexSet::default())
  }
}

/// Set equality: same elements, regardless of their order.
impl<T, S1, S2> PartialEq<EnhancedSet<T, S2>> for EnhancedSet<T, S1> where
  T: Eq + Hash,
  S1: BuildHasher,
  S2: BuildHasher
{
  fn eq(&self, other: &EnhancedSet<T, S2>) -> bool {
    self.same_elements(other)
  }
}

impl<T, S> Eq for EnhancedSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{}

impl<T, S> FromIterator<T> for EnhancedSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher + Default
{
  fn from_iter<I>(iterable: I) -> EnhancedSet<T, S> where
   I: IntoIterator<Item = T>
  {
    EnhancedSet::wrap(IndexSet::from_iter(iterable))
  }
}

impl<T, S> Extend<T> for EnhancedSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item = T>
  {
    self.set.extend(iterable);
  }
}

impl<T, const N: usize> From<[T; N]> for EnhancedSet<T, RandomState> where
  T: Eq + Hash
{
  fn from(elements: [T; N]) -> EnhancedSet<T, RandomState> {
    EnhancedSet::from_iter(IntoIterator::into_iter(elements))
  }
}

impl<T> From<Vec<T>> for EnhancedSet<T, RandomState> where
  T: Eq + Hash
{
  fn from(elements: Vec<T>) -> EnhancedSet<T, RandomState> {
    EnhancedSet::from_iter(elements)
  }
}

impl<T, S> From<IndexSet<T, S>> for EnhancedSet<T, S>
{
  fn from(set: IndexSet<T, S>) -> EnhancedSet<T, S> {
    EnhancedSet::wrap(set)
  }
}

impl<T, S> From<HashSet<T, S>> for EnhancedSet<T, S> where
  T: Eq + Hash,
  S: BuildHasher + Default
{
  fn from(set: HashSet<T, S>) -> EnhancedSet<T, S> {
    EnhancedSet::from_iter(set)
  }
}

impl<T, S> IntoIterator for EnhancedSet<T, S>
{
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> IntoIter<T> {
    self.set.into_iter()
  }
}

impl<'a, T, S> IntoIterator for &'a EnhancedSet<T, S>
{
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.set.iter()
  }
}

impl<T, S> Serialize for EnhancedSet<T, S> where
  T: Serialize
{
  fn serialize<R>(&self, serializer: R) -> Result<R::Ok, R::Error> where
   R: Serializer
  {
    serializer.collect_seq(self.set.iter())
  }
}

impl<'de, T, S> Deserialize<'de> for EnhancedSet<T, S> where
  T: Deserialize<'de> + Eq + Hash,
  S: BuildHasher + Default
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where
   D: Deserializer<'de>
  {
    deserializer.deserialize_seq(SetVisitor { marker: PhantomData })
  }
}

struct SetVisitor<T, S>
{
  marker: PhantomData<fn() -> EnhancedSet<T, S>>
}

impl<'de, T, S> Visitor<'de> for SetVisitor<T, S> where
  T: Deserialize<'de> + Eq + Hash,
  S: BuildHasher + Default
{
  type Value = EnhancedSet<T, S>;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a sequence")
  }

  // Duplicates collapse on their first occurrence, like `insert`.
  fn visit_seq<A>(self, mut seq: A) -> Result<EnhancedSet<T, S>, A::Error> where
   A: SeqAccess<'de>
  {
    let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATION);
    let mut set = IndexSet::with_capacity_and_hasher(capacity, S::default());
    while let Some(value) = seq.next_element()? {
      set.insert(value);
    }
    Ok(EnhancedSet::wrap(set))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::BTreeSet;
  use bit_set::BitSet;
  use serde_test::{assert_tokens, assert_de_tokens, Token};

  fn empty() -> EnhancedSet<i32> {
    EnhancedSet::new()
  }

  fn make(elements: Vec<i32>) -> EnhancedSet<i32> {
    EnhancedSet::from(elements)
  }

  #[test]
  fn from_native_set() {
    let plain: IndexSet<i32> = [1, 2, 3].iter().cloned().collect();
    let set: EnhancedSet<i32> = EnhancedSet::from_source(&plain);
    assert_eq!(set.to_vec(), vec![1, 2, 3]);
  }

  #[test]
  fn from_enhanced_set() {
    let a = make(vec![1, 2, 3]);
    let b: EnhancedSet<i32> = EnhancedSet::from_source(&a);
    assert_eq!(b.to_vec(), vec![1, 2, 3]);
  }

  #[test]
  fn duplicates_collapse_on_construction() {
    assert_eq!(make(vec![3, 1, 3, 2, 1]).to_vec(), vec![3, 1, 2]);
  }

  #[test]
  fn is_empty() {
    assert!(empty().is_empty());
    assert!(!make(vec![1, 2, 3]).is_empty());
  }

  #[test]
  fn union() {
    let cases = vec![
      (1, vec![1, 2, 3], vec![3, 4, 5], vec![1, 2, 3, 4, 5]),
      (2, vec![], vec![1, 2], vec![1, 2]),
      (3, vec![1, 2], vec![], vec![1, 2]),
      (4, vec![3, 1], vec![1, 2, 3], vec![3, 1, 2]),
      (5, vec![], vec![], vec![])
    ];
    for (id, a, b, expected) in cases {
      let result = make(a).union(&make(b));
      assert!(result.to_vec() == expected,
        "test #{} of union: {:?} instead of {:?}.", id, result, expected);
    }
  }

  #[test]
  fn union_with_native_set() {
    let plain: HashSet<i32> = [3, 4, 5].iter().cloned().collect();
    let result = make(vec![1, 2, 3]).union(&plain);
    assert_eq!(&result.to_vec()[..3], &[1, 2, 3]);
    assert_eq!(result.len(), 5);
    assert!(result.is_superset(&plain));
  }

  #[test]
  fn intersection() {
    let cases = vec![
      (1, vec![1, 2, 3], vec![2, 3, 4], vec![2, 3]),
      (2, vec![1, 2, 3], vec![4, 5, 6], vec![]),
      (3, vec![3, 2, 1], vec![1, 2], vec![2, 1]),
      (4, vec![], vec![1], vec![])
    ];
    for (id, a, b, expected) in cases {
      let result = make(a).intersection(&make(b));
      assert!(result.to_vec() == expected,
        "test #{} of intersection: {:?} instead of {:?}.", id, result, expected);
    }
  }

  #[test]
  fn subtract() {
    assert_eq!(make(vec![1, 2, 3, 4]).subtract(&make(vec![2, 4])).to_vec(), vec![1, 3]);
    assert_eq!(make(vec![1, 2]).subtract(&empty()).to_vec(), vec![1, 2]);
    assert!(make(vec![1, 2]).subtract(&make(vec![1, 2, 3])).is_empty());
  }

  #[test]
  fn operations_leave_operands_untouched() {
    let a = make(vec![1, 2, 3]);
    let b = make(vec![3, 4]);
    let _ = a.union(&b);
    let _ = a.intersection(&b);
    let _ = a.subtract(&b);
    let _ = a.map(|x| x * 10);
    assert_eq!(a.to_vec(), vec![1, 2, 3]);
    assert_eq!(b.to_vec(), vec![3, 4]);
  }

  #[test]
  fn is_intersection_of() {
    let b = make(vec![1, 2, 3]);
    let c = make(vec![2, 3, 4]);
    assert!(make(vec![2, 3]).is_intersection_of(vec![&b, &c]));
    assert!(!make(vec![2, 3, 5]).is_intersection_of(vec![&b, &c]));
    // The accumulator starts from `self`: a subset of the true intersection still qualifies.
    assert!(make(vec![2]).is_intersection_of(vec![&b, &c]));
    assert!(make(vec![7]).is_intersection_of(Vec::<&EnhancedSet<i32>>::new()));
    assert!(empty().is_intersection_of(vec![&b]));
  }

  #[test]
  fn is_union_of() {
    let b = make(vec![1, 2]);
    let c = make(vec![3, 4]);
    assert!(make(vec![1, 2, 3, 4]).is_union_of(vec![&b, &c]));
    assert!(make(vec![4, 3, 2, 1]).is_union_of(vec![&b, &c]));
    assert!(!make(vec![1, 2, 3, 4, 5]).is_union_of(vec![&b, &c]));
    assert!(!make(vec![1, 2, 3]).is_union_of(vec![&b, &c]));
    assert!(empty().is_union_of(Vec::<&EnhancedSet<i32>>::new()));
  }

  #[test]
  fn subset_superset_disjoint() {
    let small = make(vec![1, 2]);
    let big = make(vec![1, 2, 3, 4]);
    assert!(small.is_subset(&big));
    assert!(!make(vec![1, 2, 5]).is_subset(&big));
    assert!(big.is_superset(&small));
    assert!(!make(vec![1, 2, 3]).is_superset(&make(vec![1, 2, 4])));
    assert!(make(vec![1, 2, 3]).is_disjoint(&make(vec![4, 5, 6])));
    assert!(!make(vec![1, 2, 3]).is_disjoint(&make(vec![3, 4, 5])));
  }

  #[test]
  fn vacuous_truths() {
    let any = make(vec![1, 2]);
    assert!(empty().is_subset(&any));
    assert!(empty().is_disjoint(&any));
    assert!(any.is_superset(&empty()));
    assert!(empty().every(|_| false));
    assert!(!empty().some(|_| true));
  }

  #[test]
  fn some_and_every() {
    let set = make(vec![1, 2, 3, 4]);
    assert!(set.some(|x| *x > 3));
    assert!(!set.some(|x| *x > 4));
    assert!(make(vec![2, 4, 6]).every(|x| x % 2 == 0));
    assert!(!make(vec![2, 4, 5]).every(|x| x % 2 == 0));
  }

  #[test]
  fn map() {
    assert_eq!(make(vec![1, 2, 3]).map(|x| x * 2).to_vec(), vec![2, 4, 6]);
    assert_eq!(make(vec![1, 2]).map(|_| 0).to_vec(), vec![0]);
    assert_eq!(make(vec![1, 2, 3]).map(|x| x.to_string()).to_vec(),
      vec!["1".to_string(), "2".to_string(), "3".to_string()]);
  }

  #[test]
  fn filter() {
    assert_eq!(make(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0).to_vec(), vec![2, 4]);
    assert!(make(vec![1, 3]).filter(|x| x % 2 == 0).is_empty());
  }

  #[test]
  fn reduce() {
    assert_eq!(make(vec![1, 2, 3, 4]).reduce(|acc, x| acc + x, 0), 10);
    assert_eq!(empty().reduce(|acc, x| acc + x, 42), 42);
    let digits = make(vec![3, 1, 2]).reduce(|mut acc: String, x| { acc.push_str(&x.to_string()); acc }, String::new());
    assert_eq!(digits, "312");
  }

  #[test]
  fn snapshots() {
    let set = make(vec![1, 2, 3]);
    let mut array = set.to_vec();
    array.push(4);
    assert_eq!(set.len(), 3);

    let plain = set.to_set();
    let expected: HashSet<i32> = [1, 2, 3].iter().cloned().collect();
    assert_eq!(plain, expected);
  }

  #[test]
  fn remove_keeps_order() {
    let mut set = make(vec![1, 2, 3, 4]);
    assert!(set.remove(&2));
    assert!(!set.remove(&2));
    assert_eq!(set.to_vec(), vec![1, 3, 4]);
    assert!(!set.insert(3));
    assert!(set.insert(2));
    assert_eq!(set.to_vec(), vec![1, 3, 4, 2]);
    set.clear();
    assert!(set.is_empty());
  }

  #[test]
  fn foreign_arguments() {
    let tree: BTreeSet<i32> = [2, 3].iter().cloned().collect();
    assert!(make(vec![1, 2, 3]).is_superset(&tree));
    assert_eq!(make(vec![3, 2, 1]).intersection(&tree).to_vec(), vec![3, 2]);

    let mut bits = BitSet::new();
    bits.insert(1);
    bits.insert(5);
    let indices: EnhancedSet<usize> = EnhancedSet::from([5, 4, 1]);
    assert_eq!(indices.subtract(&bits).to_vec(), vec![4]);
    assert_eq!(indices.union(&bits).to_vec(), vec![5, 4, 1]);

    let mut four = BitSet::new();
    four.insert(4);
    assert!(indices.is_union_of(vec![&bits, &four]));
    assert!(!indices.is_union_of(vec![&bits]));
    assert!(EnhancedSet::<usize>::from([5, 1]).is_intersection_of(vec![&bits]));
    assert!(!indices.is_intersection_of(vec![&bits, &four]));
  }

  #[test]
  fn operators() {
    let a = make(vec![1, 2, 3]);
    let b = make(vec![3, 4]);
    assert_eq!((&a | &b).to_vec(), a.union(&b).to_vec());
    assert_eq!((&a & &b).to_vec(), a.intersection(&b).to_vec());
    assert_eq!((&a - &b).to_vec(), a.subtract(&b).to_vec());
    assert_eq!((a.clone() | &b).to_vec(), vec![1, 2, 3, 4]);
    assert_eq!((&a & b.clone()).to_vec(), vec![3]);
    assert_eq!((a - b).to_vec(), vec![1, 2]);
  }

  fn symmetric_difference<A>(a: &A, b: &A) -> A where
    A: Intersection<Output = A> + Union<Output = A> + Difference<Output = A>
  {
    let union = a.union(b);
    let intersect = a.intersection(b);
    union.difference(&intersect)
  }

  #[test]
  fn generic_operations() {
    let a = make(vec![1, 2, 3, 4]);
    let b = make(vec![3, 4, 5, 6]);
    assert_eq!(symmetric_difference(&a, &b).to_vec(), vec![1, 2, 5, 6]);
    assert_eq!(Cardinality::size(&a), 4);
    assert!(IsEmpty::is_empty(&<EnhancedSet<i32> as Empty>::empty()));
    assert!(!IsEmpty::is_empty(&a));
    assert!(Contains::contains(&a, &2));
    assert!(Subset::is_subset(&make(vec![3]), &a));
    assert!(Disjoint::is_disjoint(&make(vec![9]), &a));
  }

  #[test]
  fn equality_ignores_order() {
    assert_eq!(make(vec![1, 2, 3]), make(vec![3, 2, 1]));
    assert!(make(vec![1, 2]) != make(vec![1, 2, 3]));
    assert_eq!(format!("{:?}", make(vec![2, 1])), "{2, 1}");
  }

  #[test]
  fn serde_tokens() {
    assert_tokens(&make(vec![3, 1, 2]), &[
      Token::Seq { len: Some(3) },
      Token::I32(3),
      Token::I32(1),
      Token::I32(2),
      Token::SeqEnd,
    ]);
    assert_tokens(&empty(), &[
      Token::Seq { len: Some(0) },
      Token::SeqEnd,
    ]);
  }

  #[test]
  fn deserialization_collapses_duplicates() {
    assert_de_tokens(&make(vec![2, 1]), &[
      Token::Seq { len: Some(4) },
      Token::I32(2),
      Token::I32(1),
      Token::I32(2),
      Token::I32(1),
      Token::SeqEnd,
    ]);
  }
}
