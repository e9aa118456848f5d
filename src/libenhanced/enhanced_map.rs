// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Insertion-ordered map with key algebra and functional combinators.
//!
//! The algebra of `EnhancedMap` is an algebra on keys: `is_subset`, `is_superset` and `is_disjoint` never look at values. When two maps are combined, the values are chosen by fixed precedence rules:
//!
//! * `union`: the value of the argument wins on a shared key (the key keeps the position it had in `self`).
//! * `intersection`: the value of `self` is retained, the one of the argument is discarded.
//! * `map_keys`: when two keys are mapped to the same new key, the entry visited last wins.
//!
//! These rules may silently drop values, this is the expected behavior and not an error.
//!
//! Keys, values and entries can be projected into an [`EnhancedSet`](../enhanced_set/struct.EnhancedSet.html), the projection is a copy sharing nothing with the map.
//!
//! # Examples
//!
//! ```rust
//! use enhanced::EnhancedMap;
//!
//! let a = EnhancedMap::from([("a", 1), ("b", 2)]);
//! let b = EnhancedMap::from([("b", 3), ("c", 4)]);
//! let union = a.union(&b);
//! assert_eq!(union.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), vec![("a", 1), ("b", 3), ("c", 4)]);
//! assert_eq!(union.reduce(|acc, v, _| acc + v, 0), 8);
//! assert!(a.intersection(&b).includes_value(&2));
//! ```

use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, Sub};
use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, Keys, Values};
use gcollections::ops::*;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use crate::enhanced_set::EnhancedSet;
use crate::MAX_PREALLOCATION;
use crate::like::MapLike;

#[derive(Clone)]
pub struct EnhancedMap<K, V, S = RandomState>
{
  map: IndexMap<K, V, S>
}

impl<K, V> EnhancedMap<K, V>
{
  pub fn new() -> EnhancedMap<K, V> {
    EnhancedMap::wrap(IndexMap::new())
  }
}

impl<K, V, S> EnhancedMap<K, V, S>
{
  pub fn wrap(map: IndexMap<K, V, S>) -> EnhancedMap<K, V, S> {
    EnhancedMap { map: map }
  }

  pub fn into_inner(self) -> IndexMap<K, V, S> {
    self.map
  }

  pub fn with_hasher(hasher: S) -> EnhancedMap<K, V, S> {
    EnhancedMap::wrap(IndexMap::with_hasher(hasher))
  }

  pub fn len(&self) -> usize {
    self.map.len()
  }

  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }

  pub fn iter(&self) -> Iter<'_, K, V> {
    self.map.iter()
  }

  pub fn keys(&self) -> Keys<'_, K, V> {
    self.map.keys()
  }

  pub fn values(&self) -> Values<'_, K, V> {
    self.map.values()
  }

  pub fn clear(&mut self) {
    self.map.clear();
  }

  /// `true` if at least one entry satisfies `predicate(value, key)`.
  pub fn some<F>(&self, mut predicate: F) -> bool where
   F: FnMut(&V, &K) -> bool
  {
    self.map.iter().any(|(k, v)| predicate(v, k))
  }

  /// `true` if every entry satisfies `predicate(value, key)`, vacuously `true` on an empty map.
  pub fn every<F>(&self, mut predicate: F) -> bool where
   F: FnMut(&V, &K) -> bool
  {
    self.map.iter().all(|(k, v)| predicate(v, k))
  }

  /// Left fold over the entries in insertion order, the reducer receives `(accumulator, value, key)`.
  pub fn reduce<U, F>(&self, mut reducer: F, initial: U) -> U where
   F: FnMut(U, &V, &K) -> U
  {
    self.map.iter().fold(initial, |acc, (k, v)| reducer(acc, v, k))
  }
}

impl<K, V, S> EnhancedMap<K, V, S> where
  K: Eq + Hash,
  S: BuildHasher
{
  pub fn get(&self, key: &K) -> Option<&V> {
    self.map.get(key)
  }

  pub fn contains_key(&self, key: &K) -> bool {
    self.map.contains_key(key)
  }

  /// Inserts or replaces the value of `key`. A replaced key keeps its position in the iteration order.
  pub fn insert(&mut self, key: K, value: V) -> Option<V> {
    self.map.insert(key, value)
  }

  /// Removes `key` and shifts the following entries, so the relative order of the remaining ones is preserved.
  pub fn remove(&mut self, key: &K) -> Option<V> {
    self.map.shift_remove(key)
  }

  /// Every key of `self` is a key of `other`, values are ignored.
  pub fn is_subset<O>(&self, other: &O) -> bool where
   O: MapLike<K, V> + ?Sized
  {
    self.map.keys().all(|k| other.has_key(k))
  }

  /// Every key of `other` is a key of `self`, values are ignored.
  pub fn is_superset<O>(&self, other: &O) -> bool where
   O: MapLike<K, V> + ?Sized
  {
    other.every_entry(|k, _| self.map.contains_key(k))
  }

  pub fn is_disjoint<O>(&self, other: &O) -> bool where
   O: MapLike<K, V> + ?Sized
  {
    self.map.keys().all(|k| !other.has_key(k))
  }

  pub fn includes_key(&self, key: &K) -> bool {
    self.map.contains_key(key)
  }

  /// Linear scan comparing each value with `value`.
  pub fn includes_value(&self, value: &V) -> bool where
   V: PartialEq
  {
    self.map.values().any(|v| v == value)
  }

  pub fn keys_to_vec(&self) -> Vec<K> where
   K: Clone
  {
    self.map.keys().cloned().collect()
  }

  pub fn values_to_vec(&self) -> Vec<V> where
   V: Clone
  {
    self.map.values().cloned().collect()
  }

  // Entry-set equality: same size and, for every key of `self`, an equal value in `other`.
  fn same_entries<S2>(&self, other: &EnhancedMap<K, V, S2>) -> bool where
   V: PartialEq,
   S2: BuildHasher
  {
    self.len() == other.len()
      && self.map.iter().all(|(k, v)| other.map.get(k) == Some(v))
  }
}

impl<K, V, S> EnhancedMap<K, V, S> where
  K: Eq + Hash + Clone,
  S: BuildHasher + Default
{
  /// Replaces every value by `mapper(value, key)`. Keys and their order are unchanged.
  pub fn map_values<U, F>(&self, mut mapper: F) -> EnhancedMap<K, U, S> where
   F: FnMut(&V, &K) -> U
  {
    EnhancedMap::wrap(self.map.iter()
      .map(|(k, v)| (k.clone(), mapper(v, k)))
      .collect())
  }

  pub fn keys_to_set(&self) -> EnhancedSet<K, S> {
    self.map.keys().cloned().collect()
  }
}

impl<K, V, S> EnhancedMap<K, V, S> where
  K: Eq + Hash,
  V: Clone,
  S: BuildHasher + Default
{
  /// Replaces every key by `mapper(key, value)`.
  /// When several entries are mapped to the same key, the last visited value is kept at the position of the first one.
  pub fn map_keys<U, F>(&self, mut mapper: F) -> EnhancedMap<U, V, S> where
   U: Eq + Hash,
   F: FnMut(&K, &V) -> U
  {
    let mut map = IndexMap::with_capacity_and_hasher(self.len(), S::default());
    for (k, v) in &self.map {
      map.insert(mapper(k, v), v.clone());
    }
    EnhancedMap::wrap(map)
  }

  /// Snapshot of the values, equal values collapse.
  pub fn values_to_set(&self) -> EnhancedSet<V, S> where
   V: Eq + Hash
  {
    self.map.values().cloned().collect()
  }
}

impl<K, V, S> EnhancedMap<K, V, S> where
  K: Eq + Hash + Clone,
  V: Clone,
  S: BuildHasher + Default
{
  /// Copies any map-like collection, preserving its iteration order.
  pub fn from_source<O>(source: &O) -> EnhancedMap<K, V, S> where
   O: MapLike<K, V> + ?Sized
  {
    let mut map = IndexMap::with_hasher(S::default());
    source.every_entry(|k, v| {
      map.insert(k.clone(), v.clone());
      true
    });
    EnhancedMap::wrap(map)
  }

  /// Entries of `self` overlaid by the entries of `other`: on a shared key the value of `other` wins.
  pub fn union<O>(&self, other: &O) -> EnhancedMap<K, V, S> where
   O: MapLike<K, V> + ?Sized
  {
    let mut map: IndexMap<K, V, S> = self.map.iter()
      .map(|(k, v)| (k.clone(), v.clone()))
      .collect();
    other.every_entry(|k, v| {
      map.insert(k.clone(), v.clone());
      true
    });
    EnhancedMap::wrap(map)
  }

  /// Entries of `self` whose key is in `other`, with the values of `self`.
  pub fn intersection<O>(&self, other: &O) -> EnhancedMap<K, V, S> where
   O: MapLike<K, V> + ?Sized
  {
    self.filter(|_, k| other.has_key(k))
  }

  pub fn subtract<O>(&self, other: &O) -> EnhancedMap<K, V, S> where
   O: MapLike<K, V> + ?Sized
  {
    self.filter(|_, k| !other.has_key(k))
  }

  pub fn filter<F>(&self, mut predicate: F) -> EnhancedMap<K, V, S> where
   F: FnMut(&V, &K) -> bool
  {
    EnhancedMap::wrap(self.map.iter()
      .filter(|&(k, v)| predicate(v, k))
      .map(|(k, v)| (k.clone(), v.clone()))
      .collect())
  }

  /// The accumulator starts from `self` and is narrowed by the keys of each map in turn, keeping its own values.
  /// Since values are never overwritten, this holds exactly when every key of `self` is in each of `maps`.
  pub fn is_intersection_of<'a, I, O>(&self, maps: I) -> bool where
   I: IntoIterator<Item = &'a O>,
   O: MapLike<K, V> + ?Sized + 'a,
   V: PartialEq
  {
    let intersection = maps.into_iter()
      .fold(EnhancedMap::from_source(self), |acc: EnhancedMap<K, V, S>, map| acc.intersection(map));
    self.same_entries(&intersection)
  }

  /// The accumulator starts empty and each map is overlaid in argument order, later values winning.
  /// The result must match `self` entry for entry.
  pub fn is_union_of<'a, I, O>(&self, maps: I) -> bool where
   I: IntoIterator<Item = &'a O>,
   O: MapLike<K, V> + ?Sized + 'a,
   V: PartialEq
  {
    let union = maps.into_iter()
      .fold(EnhancedMap::with_hasher(S::default()), |acc: EnhancedMap<K, V, S>, map| acc.union(map));
    self.same_entries(&union)
  }

  pub fn entries_to_set(&self) -> EnhancedSet<(K, V), S> where
   V: Eq + Hash
  {
    self.map.iter()
      .map(|(k, v)| (k.clone(), v.clone()))
      .collect()
  }

  pub fn to_map(&self) -> HashMap<K, V, S> {
    self.map.iter()
      .map(|(k, v)| (k.clone(), v.clone()))
      .collect()
  }
}

impl<K, V, S> MapLike<K, V> for EnhancedMap<K, V, S> where
  K: Eq + Hash,
  S: BuildHasher
{
  fn has_key(&self, key: &K) -> bool {
    self.map.contains_key(key)
  }

  fn every_entry<F>(&self, mut f: F) -> bool where
   F: FnMut(&K, &V) -> bool
  {
    self.map.iter().all(|(k, v)| f(k, v))
  }
}

impl<K, V, S> Cardinality for EnhancedMap<K, V, S>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.map.len()
  }
}

impl<K, V, S: Default> Empty for EnhancedMap<K, V, S>
{
  fn empty() -> EnhancedMap<K, V, S> {
    EnhancedMap::with_hasher(S::default())
  }
}

impl<K, V, S> Subset for EnhancedMap<K, V, S> where
  K: Eq + Hash,
  S: BuildHasher
{
  fn is_subset(&self, rhs: &EnhancedMap<K, V, S>) -> bool {
    EnhancedMap::is_subset(self, rhs)
  }
}

impl<K, V, S> Disjoint for EnhancedMap<K, V, S> where
  K: Eq + Hash,
  S: BuildHasher
{
  fn is_disjoint(&self, rhs: &EnhancedMap<K, V, S>) -> bool {
    EnhancedMap::is_disjoint(self, rhs)
  }
}

macro_rules! map_op_impl
{
  ( $( $t: ident, $m:ident, $v:ident );* ) =>
  {$(
    impl<K, V, S> $t for EnhancedMap<K, V, S> where
      K: Eq + Hash + Clone,
      V: Clone,
      S: BuildHasher + Default
    {
      type Output = EnhancedMap<K, V, S>;

      fn $m(&self, rhs: &EnhancedMap<K, V, S>) -> EnhancedMap<K, V, S> {
        EnhancedMap::$v(self, rhs)
      }
    }
  )*}
}

map_op_impl! {
  Union, union, union;
  Intersection, intersection, intersection;
  Difference, difference, subtract
}

collection_binop!(impl<K: +Eq +Hash +Clone, V: +Clone, S: +BuildHasher +Default> BitOr for EnhancedMap<K, V, S>, bitor => union);
collection_binop!(impl<K: +Eq +Hash +Clone, V: +Clone, S: +BuildHasher +Default> BitAnd for EnhancedMap<K, V, S>, bitand => intersection);
collection_binop!(impl<K: +Eq +Hash +Clone, V: +Clone, S: +BuildHasher +Default> Sub for EnhancedMap<K, V, S>, sub => subtract);

impl<K, V, S> fmt::Debug for EnhancedMap<K, V, S> where
  K: fmt::Debug,
  V: fmt::Debug
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.debug_map().entries(self.map.iter()).finish()
  }
}

impl<K, V, S: Default> Default for EnhancedMap<K, V, S>
{
  fn default() -> EnhancedMap<K, V, S> {
    EnhancedMap::wrap(IndexMap::default())
  }
}

/// Entry-set equality, the iteration order is not compared.
impl<K, V, S1, S2> PartialEq<EnhancedMap<K, V, S2>> for EnhancedMap<K, V, S1> where
  K: Eq + Hash,
  V: PartialEq,
  S1: BuildHasher,
  S2: BuildHasher
{
  fn eq(&self, other: &EnhancedMap<K, V, S2>) -> bool {
    self.same_entries(other)
  }
}

impl<K, V, S> Eq for EnhancedMap<K, V, S> where
  K: Eq + Hash,
  V: Eq,
  S: BuildHasher
{}

impl<K, V, S> FromIterator<(K, V)> for EnhancedMap<K, V, S> where
  K: Eq + Hash,
  S: BuildHasher + Default
{
  fn from_iter<I>(iterable: I) -> EnhancedMap<K, V, S> where
   I: IntoIterator<Item = (K, V)>
  {
    EnhancedMap::wrap(IndexMap::from_iter(iterable))
  }
}

impl<K, V, S> Extend<(K, V)> for EnhancedMap<K, V, S> where
  K: Eq + Hash,
  S: BuildHasher
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item = (K, V)>
  {
    self.map.extend(iterable);
  }
}

impl<K, V, const N: usize> From<[(K, V); N]> for EnhancedMap<K, V, RandomState> where
  K: Eq + Hash
{
  fn from(entries: [(K, V); N]) -> EnhancedMap<K, V, RandomState> {
    EnhancedMap::from_iter(IntoIterator::into_iter(entries))
  }
}

impl<K, V> From<Vec<(K, V)>> for EnhancedMap<K, V, RandomState> where
  K: Eq + Hash
{
  fn from(entries: Vec<(K, V)>) -> EnhancedMap<K, V, RandomState> {
    EnhancedMap::from_iter(entries)
  }
}

impl<K, V, S> From<IndexMap<K, V, S>> for EnhancedMap<K, V, S>
{
  fn from(map: IndexMap<K, V, S>) -> EnhancedMap<K, V, S> {
    EnhancedMap::wrap(map)
  }
}

impl<K, V, S> From<HashMap<K, V, S>> for EnhancedMap<K, V, S> where
  K: Eq + Hash,
  S: BuildHasher + Default
{
  fn from(map: HashMap<K, V, S>) -> EnhancedMap<K, V, S> {
    EnhancedMap::from_iter(map)
  }
}

impl<K, V, S> IntoIterator for EnhancedMap<K, V, S>
{
  type Item = (K, V);
  type IntoIter = IntoIter<K, V>;

  fn into_iter(self) -> IntoIter<K, V> {
    self.map.into_iter()
  }
}

impl<'a, K, V, S> IntoIterator for &'a EnhancedMap<K, V, S>
{
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  fn into_iter(self) -> Iter<'a, K, V> {
    self.map.iter()
  }
}

impl<K, V, S> Serialize for EnhancedMap<K, V, S> where
  K: Serialize,
  V: Serialize
{
  fn serialize<R>(&self, serializer: R) -> Result<R::Ok, R::Error> where
   R: Serializer
  {
    serializer.collect_map(self.map.iter())
  }
}

impl<'de, K, V, S> Deserialize<'de> for EnhancedMap<K, V, S> where
  K: Deserialize<'de> + Eq + Hash,
  V: Deserialize<'de>,
  S: BuildHasher + Default
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where
   D: Deserializer<'de>
  {
    deserializer.deserialize_map(MapVisitor { marker: PhantomData })
  }
}

struct MapVisitor<K, V, S>
{
  marker: PhantomData<fn() -> EnhancedMap<K, V, S>>
}

impl<'de, K, V, S> Visitor<'de> for MapVisitor<K, V, S> where
  K: Deserialize<'de> + Eq + Hash,
  V: Deserialize<'de>,
  S: BuildHasher + Default
{
  type Value = EnhancedMap<K, V, S>;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a map")
  }

  // A duplicated key keeps its first position and its last value, like `insert`.
  fn visit_map<A>(self, mut access: A) -> Result<EnhancedMap<K, V, S>, A::Error> where
   A: MapAccess<'de>
  {
    let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATION);
    let mut map = IndexMap::with_capacity_and_hasher(capacity, S::default());
    while let Some((key, value)) = access.next_entry()? {
      map.insert(key, value);
    }
    Ok(EnhancedMap::wrap(map))
  }
}
