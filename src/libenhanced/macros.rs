// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Inspired by the macros from the BigUint impl. (doc.rust-lang.org/num/src/num/bigint.rs.html#235-280)
// The borrowed/borrowed form is the only one doing work, it calls the named method of the collection.
macro_rules! ref_ref_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident => $named:ident) => {
    impl<'a, 'b, $($bn: $($bs+)*),*> $imp<&'b $res> for &'a $res {
      type Output = $res;

      fn $method(self, other: &'b $res) -> $res {
        self.$named(other)
      }
    }
  }
}

macro_rules! forward_val_val_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident) => {
    impl<$($bn: $($bs+)*),*> $imp<$res> for $res {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        (&self).$method(&other)
      }
    }
  }
}

macro_rules! forward_ref_val_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident) => {
    impl<'a, $($bn: $($bs+)*),*> $imp<$res> for &'a $res {
      type Output = $res;

      fn $method(self, other: $res) -> $res {
        self.$method(&other)
      }
    }
  }
}

macro_rules! forward_val_ref_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident) => {
    impl<'b, $($bn: $($bs+)*),*> $imp<&'b $res> for $res {
      type Output = $res;

      fn $method(self, other: &$res) -> $res {
        (&self).$method(other)
      }
    }
  }
}

/// `collection_binop!(impl<T: +Eq +Hash> BitOr for Set<T>, bitor => union)` implements `BitOr` for
/// every owned/borrowed combination of operands, all of them ending in `Set::union`.
macro_rules! collection_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident => $named:ident) => {
    ref_ref_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method => $named);
    forward_val_val_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method);
    forward_ref_val_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method);
    forward_val_ref_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method);
  };
}
