// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This library proposes two insertion-ordered collections, [`EnhancedSet`] and [`EnhancedMap`], extending the usual hash set and hash map with set algebra (union, intersection, difference, subset, superset and disjoint tests) and functional combinators (map, filter, reduce, some, every).
//!
//! Both collections own their storage and every operation, except the explicit mutators `insert`, `remove` and `clear`, returns a new collection. Operations taking another collection as argument accept anything implementing the minimal views of the [like module](like/index.html), including the standard collections. They also implement the operation traits of `gcollections`, so they can be used by generic algorithms written against these traits, and the `|`, `&` and `-` operators.
//!
//! # Examples
//!
//! ```rust
//! use enhanced::{EnhancedMap, EnhancedSet};
//!
//! let scores = EnhancedMap::from([("ann", 7), ("bob", 4), ("eve", 9)]);
//! let passed: EnhancedSet<&str> = scores.filter(|score, _| *score > 5).keys_to_set();
//! assert_eq!(passed.to_vec(), vec!["ann", "eve"]);
//!
//! let staff = EnhancedSet::from(["bob", "eve"]);
//! assert_eq!((&passed - &staff).to_vec(), vec!["ann"]);
//! assert!(passed.intersection(&staff).is_subset(&staff));
//! ```

extern crate gcollections;
extern crate indexmap;
extern crate bit_set;
extern crate serde;

mod macros;
pub mod like;
pub mod enhanced_set;
pub mod enhanced_map;

/// Upper bound on the capacity reserved from an untrusted size hint while deserializing.
pub(crate) const MAX_PREALLOCATION: usize = 4096;

pub use crate::enhanced_set::EnhancedSet;
pub use crate::enhanced_map::EnhancedMap;
pub use crate::like::{SetLike, MapLike};
