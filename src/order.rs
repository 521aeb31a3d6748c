// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The two stock orderings of a `BinaryHeap`.

use std::cmp::Ordering;

use compare::Compare;

/// A comparator under which smaller items have higher priority.
///
/// A heap using it behaves as a min-heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MinFirst;

impl<T: Ord> Compare<T> for MinFirst {
    fn compare(&self, l: &T, r: &T) -> Ordering { l.cmp(r) }
}

/// A comparator under which greater items have higher priority.
///
/// A heap using it behaves as a max-heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaxFirst;

impl<T: Ord> Compare<T> for MaxFirst {
    fn compare(&self, l: &T, r: &T) -> Ordering { r.cmp(l) }
}
