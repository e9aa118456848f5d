// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Minimal views on foreign collections.
//!
//! Every operation of [`EnhancedSet`](../enhanced_set/struct.EnhancedSet.html) and [`EnhancedMap`](../enhanced_map/struct.EnhancedMap.html) taking another collection as argument only asks it to be iterable and to answer membership queries. These two requirements are captured by [`SetLike`] and [`MapLike`], implemented here for the standard collections, `indexmap` and `bit-set`.
//!
//! Iteration is exposed as an internal "visit until `false`" loop rather than an iterator type. This lets collections yielding elements by value (such as `BitSet`) take part as well.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use enhanced::EnhancedSet;
//!
//! let a: EnhancedSet<i32> = EnhancedSet::from([1, 2, 3]);
//! let b: BTreeSet<i32> = [2, 3].iter().cloned().collect();
//! assert!(a.is_superset(&b));
//! assert_eq!(a.subtract(&b).to_vec(), vec![1]);
//! ```

use std::collections::{HashSet, BTreeSet, HashMap, BTreeMap};
use std::hash::{BuildHasher, Hash};
use indexmap::{IndexSet, IndexMap};
use bit_set::BitSet;

/// A collection of unique elements that can be visited and queried for membership.
pub trait SetLike<T> {
  fn has(&self, value: &T) -> bool;

  /// Visits the elements in iteration order until `f` returns `false`.
  /// Returns `true` if every visit returned `true` (hence `true` on an empty collection).
  fn every_element<F>(&self, f: F) -> bool where
   F: FnMut(&T) -> bool;
}

/// A collection of unique keys, each associated with a value.
pub trait MapLike<K, V> {
  fn has_key(&self, key: &K) -> bool;

  /// Visits the entries in iteration order until `f` returns `false`, see `SetLike::every_element`.
  fn every_entry<F>(&self, f: F) -> bool where
   F: FnMut(&K, &V) -> bool;
}

impl<'a, T, C> SetLike<T> for &'a C where
  C: SetLike<T> + ?Sized
{
  fn has(&self, value: &T) -> bool {
    (**self).has(value)
  }

  fn every_element<F>(&self, f: F) -> bool where
   F: FnMut(&T) -> bool
  {
    (**self).every_element(f)
  }
}

impl<'a, K, V, C> MapLike<K, V> for &'a C where
  C: MapLike<K, V> + ?Sized
{
  fn has_key(&self, key: &K) -> bool {
    (**self).has_key(key)
  }

  fn every_entry<F>(&self, f: F) -> bool where
   F: FnMut(&K, &V) -> bool
  {
    (**self).every_entry(f)
  }
}

macro_rules! hashed_set_like_impl
{
  ( $( $t: ident ),* ) =>
  {$(
    impl<T, S> SetLike<T> for $t<T, S> where
      T: Eq + Hash,
      S: BuildHasher
    {
      fn has(&self, value: &T) -> bool {
        self.contains(value)
      }

      fn every_element<F>(&self, f: F) -> bool where
       F: FnMut(&T) -> bool
      {
        self.iter().all(f)
      }
    }
  )*}
}

hashed_set_like_impl!(HashSet, IndexSet);

impl<T: Ord> SetLike<T> for BTreeSet<T>
{
  fn has(&self, value: &T) -> bool {
    self.contains(value)
  }

  fn every_element<F>(&self, f: F) -> bool where
   F: FnMut(&T) -> bool
  {
    self.iter().all(f)
  }
}

impl SetLike<usize> for BitSet
{
  fn has(&self, value: &usize) -> bool {
    self.contains(*value)
  }

  fn every_element<F>(&self, mut f: F) -> bool where
   F: FnMut(&usize) -> bool
  {
    self.iter().all(|x| f(&x))
  }
}

macro_rules! hashed_map_like_impl
{
  ( $( $t: ident ),* ) =>
  {$(
    impl<K, V, S> MapLike<K, V> for $t<K, V, S> where
      K: Eq + Hash,
      S: BuildHasher
    {
      fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
      }

      fn every_entry<F>(&self, mut f: F) -> bool where
       F: FnMut(&K, &V) -> bool
      {
        self.iter().all(|(k, v)| f(k, v))
      }
    }
  )*}
}

hashed_map_like_impl!(HashMap, IndexMap);

impl<K: Ord, V> MapLike<K, V> for BTreeMap<K, V>
{
  fn has_key(&self, key: &K) -> bool {
    self.contains_key(key)
  }

  fn every_entry<F>(&self, mut f: F) -> bool where
   F: FnMut(&K, &V) -> bool
  {
    self.iter().all(|(k, v)| f(k, v))
  }
}
