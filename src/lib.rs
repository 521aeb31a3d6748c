// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A priority queue implemented with an array-backed binary heap.
//!
//! A `BinaryHeap` keeps its highest-priority item at the root, where it can be
//! read in `O(1)` time. Insertion and removal of the root are `O(log n)`.
//!
//! Which item has the highest priority is decided by a comparator, an
//! implementation of [`Compare`][cmp]. An item `a` outranks an item `b` when
//! the comparator reports `a < b`. Two comparators are provided:
//!
//! * [`MinFirst`](struct.MinFirst.html) pops the smallest item first. It is the default.
//! * [`MaxFirst`](struct.MaxFirst.html) pops the greatest item first.
//!
//! ```
//! use binary_heap::{MaxHeap, MinHeap};
//!
//! let mut min = MinHeap::new();
//! let mut max = MaxHeap::default();
//! for &x in &[5, 3, 8, 1] {
//!     min.push(x);
//!     max.push(x);
//! }
//!
//! assert_eq!(min.peek(), Some(&1));
//! assert_eq!(max.pop(), Some(8));
//! ```
//!
//! [cmp]: https://docs.rs/compare/0.0.6/compare/trait.Compare.html

extern crate compare;
#[macro_use] extern crate log;
#[cfg(test)] extern crate env_logger;
#[cfg(test)] extern crate rand;

use std::fmt::{self, Debug};
use std::iter;
use std::slice;
use std::vec;

use compare::Compare;

pub use order::{MaxFirst, MinFirst};

mod order;

// The heap is a complete binary tree stored level by level in a Vec.
// Here's the layout of a tree with 10 items, where the numbers are
// *offsets* into the array:
//
//              0
//          /       \
//        1           2
//      /   \       /   \
//     3     4     5     6
//    / \   /
//   7   8 9
//
// The children of the item at `i` live at `2i + 1` and `2i + 2`, its
// parent at `(i - 1) / 2`. No item outranks its parent.

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

fn left(x: usize) -> usize { 2 * x + 1 }

fn right(x: usize) -> usize { 2 * x + 2 }

/// The first `v.len() - 1` items are a valid heap and the last item has
/// just been appended. Moves it up until its parent is not outranked by it.
fn sift_up<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    debug_assert!(v.len() > 0);
    let mut pos = v.len() - 1;
    // The root has no parent, so `pos == 0` ends the walk.
    while pos > 0 {
        let par = parent(pos);
        if !cmp.compares_lt(&v[pos], &v[par]) {
            break; // parent ranks equal or higher
        }
        v.swap(par, pos);
        pos = par;
    }
    trace!("sift_up: item settled at {} of {}", pos, v.len());
}

/// Both subtrees below `pos` are valid heaps, but the item at `pos` may be
/// outranked by one of its children. Moves it down until it is not.
fn sift_down<T, C: Compare<T>>(v: &mut [T], mut pos: usize, cmp: &C) {
    let len = v.len();
    while left(pos) < len {
        // Pick the higher-ranked child; ties go left.
        let l = left(pos);
        let r = right(pos);
        let child = if r < len && cmp.compares_lt(&v[r], &v[l]) { r } else { l };
        if !cmp.compares_lt(&v[child], &v[pos]) {
            break;
        }
        v.swap(pos, child);
        pos = child;
    }
    trace!("sift_down: item settled at {} of {}", pos, len);
}

/// A priority queue implemented with a binary heap.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
#[derive(Clone)]
pub struct BinaryHeap<T, C: Compare<T> = MinFirst> {
    data: Vec<T>,
    cmp: C,
}

/// A heap that pops its smallest item first.
pub type MinHeap<T> = BinaryHeap<T, MinFirst>;

/// A heap that pops its greatest item first.
pub type MaxHeap<T> = BinaryHeap<T, MaxFirst>;

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    #[inline]
    fn default() -> BinaryHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Returns an empty heap that pops its smallest item first.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::new();
    /// heap.push(3);
    /// heap.push(1);
    /// assert_eq!(heap.pop(), Some(1));
    /// ```
    pub fn new() -> BinaryHeap<T> { Self::with_comparator(MinFirst) }

    /// Returns an empty heap with the given capacity that pops its smallest
    /// item first.
    ///
    /// The heap will be able to hold exactly `capacity` items without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_heap::BinaryHeap;
    ///
    /// let heap = BinaryHeap::<u32>::with_capacity(5);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> BinaryHeap<T> {
        Self::with_capacity_and_comparator(capacity, MinFirst)
    }
}

impl<T: Ord> BinaryHeap<T, MaxFirst> {
    /// Returns an empty heap that pops its greatest item first.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_heap::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::new_max();
    /// heap.push(3);
    /// heap.push(1);
    /// assert_eq!(heap.pop(), Some(3));
    /// ```
    pub fn new_max() -> BinaryHeap<T, MaxFirst> { Self::with_comparator(MaxFirst) }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    /// Returns a heap containing all the items of the given vector that pops
    /// its smallest item first.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_heap::BinaryHeap;
    ///
    /// let heap = BinaryHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    fn from(vec: Vec<T>) -> BinaryHeap<T> {
        Self::from_vec_and_comparator(vec, MinFirst)
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_heap::BinaryHeap;
    ///
    /// // Shortest string first.
    /// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    /// let mut heap = BinaryHeap::with_comparator(by_len);
    /// heap.push("three");
    /// heap.push("one");
    /// heap.push("eleven");
    /// assert_eq!(heap.pop(), Some("one"));
    /// ```
    pub fn with_comparator(cmp: C) -> BinaryHeap<T, C> {
        BinaryHeap { data: vec![], cmp: cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> BinaryHeap<T, C> {
        BinaryHeap { data: Vec::with_capacity(capacity), cmp: cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    ///
    /// This takes `O(n)` time.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> BinaryHeap<T, C> {
        // Leaves are trivially valid heaps; fix up every internal node
        // from the bottom of the tree to the root.
        let len = vec.len();
        for pos in (0..len / 2).rev() {
            sift_down(&mut vec, pos, &cmp);
        }
        debug!("from_vec: built heap of {} items", len);
        let heap = BinaryHeap { data: vec, cmp: cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns an iterator visiting all items in the heap in arbitrary order.
    pub fn iter(&self) -> Iter<T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns a reference to the highest-priority item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns a reference to the heap's comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for exactly `additional` more items to be inserted into the
    /// heap.
    ///
    /// Does nothing if the capacity is already sufficient.
    ///
    /// Note that the allocator may give the heap more space than it
    /// requests. Therefore capacity can not be relied upon to be precisely
    /// minimal. Prefer `reserve` if future insertions are expected.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    ///
    /// The heap may reserve more space to avoid frequent reallocations.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity from the heap as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit()
    }

    /// Removes the highest-priority item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty, leaving it untouched.
    pub fn pop(&mut self) -> Option<T> {
        debug_assert!(self.is_valid());
        let top = match self.data.len() {
            0 => None,
            // `swap_remove` takes the root out before the last item fills its
            // slot, so a single item leaves the heap empty.
            1 | 2 => Some(self.data.swap_remove(0)),
            _ => {
                let res = self.data.swap_remove(0);
                sift_down(&mut self.data, 0, &self.cmp);
                Some(res)
            }
        };
        debug_assert!(self.is_valid());
        top
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        self.data.push(item);
        sift_up(&mut self.data, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Consumes the heap and returns its items as a vector in arbitrary order.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Consumes the heap and returns its items as a vector in the order
    /// successive calls to `pop` would have returned them.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = self.data;
        // Each pass moves the current root behind the shrinking heap, which
        // leaves the lowest-ranked item in front.
        for end in (1..vec.len()).rev() {
            vec.swap(0, end);
            sift_down(&mut vec[..end], 0, &self.cmp);
        }
        vec.reverse();
        debug!("into_sorted_vec: sorted {} items", vec.len());
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clears the heap, returning an iterator over the removed items in arbitrary order.
    pub fn drain(&mut self) -> Drain<T> {
        Drain(self.data.drain(..))
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if no item outranks its parent.
    fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            !self.cmp.compares_lt(&self.data[i], &self.data[parent(i)])
        })
    }
}

impl<T: Debug, C: Compare<T>> Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, C: Compare<T> + Default> iter::FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BinaryHeap<T, C> {
        BinaryHeap::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|&item| item));
    }
}

/// An iterator over a `BinaryHeap` in arbitrary order.
///
/// Acquire through [`BinaryHeap::iter`](struct.BinaryHeap.html#method.iter).
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `BinaryHeap` in arbitrary order.
///
/// Acquire through [`IntoIterator::into_iter`](
/// https://doc.rust-lang.org/stable/std/iter/trait.IntoIterator.html#tymethod.into_iter).
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator that drains a `BinaryHeap` in arbitrary order.
///
/// Acquire through [`BinaryHeap::drain`](struct.BinaryHeap.html#method.drain).
pub struct Drain<'a, T: 'a>(vec::Drain<'a, T>);

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}

impl<T, C: Compare<T>> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.data.into_iter()) }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

#[cfg(test)]
mod test {
    use rand::{thread_rng, Rng};
    use super::{BinaryHeap, MaxFirst, MaxHeap, MinFirst, MinHeap};

    fn init_test() {
        drop(::env_logger::try_init());
    }

    fn drain_pops<C: ::compare::Compare<u32>>(heap: &mut BinaryHeap<u32, C>) -> Vec<u32> {
        let mut out = Vec::with_capacity(heap.len());
        while let Some(x) = heap.pop() {
            out.push(x);
        }
        out
    }

    #[test]
    fn fuzz_pop_min() {
        init_test();
        let mut rng = thread_rng();
        for _ in 0..100 {
            let mut heap = MinHeap::new();
            for _ in 0..100 {
                heap.push(rng.gen::<u32>());
            }
            let popped = drain_pops(&mut heap);
            assert_eq!(popped.len(), 100);
            for pair in popped.windows(2) {
                assert!(pair[0] <= pair[1]);
            }
        }
    }

    #[test]
    fn fuzz_pop_max() {
        init_test();
        let mut rng = thread_rng();
        for _ in 0..100 {
            let mut heap = MaxHeap::default();
            for _ in 0..100 {
                heap.push(rng.gen::<u32>());
            }
            let popped = drain_pops(&mut heap);
            assert_eq!(popped.len(), 100);
            for pair in popped.windows(2) {
                assert!(pair[0] >= pair[1]);
            }
        }
    }

    #[test]
    fn fuzz_interleaved_with_duplicates() {
        init_test();
        let mut rng = thread_rng();
        for _ in 0..50 {
            let mut heap = MinHeap::new();
            let mut model: Vec<u32> = Vec::new();
            for _ in 0..200 {
                if rng.gen_range(0..3) == 0 {
                    model.sort();
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    assert_eq!(heap.pop(), expected);
                } else {
                    let x = rng.gen_range(0..10);
                    heap.push(x);
                    model.push(x);
                }
                assert!(heap.is_valid());
                assert_eq!(heap.len(), model.len());
            }
        }
    }

    #[test]
    fn fuzz_into_sorted_vec() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let items: Vec<u32> = (0..100).map(|_| rng.gen_range(0..1000)).collect();
            let mut expected = items.clone();
            expected.sort();

            let min = BinaryHeap::from_vec_and_comparator(items.clone(), MinFirst);
            assert_eq!(min.into_sorted_vec(), expected);

            expected.reverse();
            let max = BinaryHeap::from_vec_and_comparator(items, MaxFirst);
            assert_eq!(max.into_sorted_vec(), expected);
        }
    }

    #[test]
    fn test_from_vec() {
        let heap = BinaryHeap::<i32>::from(vec![]);
        assert_eq!(heap.peek(), None);

        let heap = BinaryHeap::from(vec![2]);
        assert_eq!(heap.peek(), Some(&2));

        let heap = BinaryHeap::from(vec![2, 1]);
        assert_eq!(heap.peek(), Some(&1));

        let heap = BinaryHeap::from(vec![9, 7, 5, 3, 1, 8, 6, 4, 2]);
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Some(&1));
    }

    #[test]
    fn test_is_valid() {
        fn min(data: Vec<i32>) -> MinHeap<i32> {
            BinaryHeap { data: data, cmp: MinFirst }
        }
        fn max(data: Vec<i32>) -> MaxHeap<i32> {
            BinaryHeap { data: data, cmp: MaxFirst }
        }

        assert!(min(vec![]).is_valid());
        assert!(min(vec![1]).is_valid());
        assert!(min(vec![1, 1]).is_valid());
        assert!(min(vec![1, 5, 2]).is_valid());
        assert!(min(vec![1, 5, 2, 6, 5]).is_valid());
        assert!(min(vec![1, 2, 1]).is_valid());   // siblings are unordered

        assert!(!min(vec![2, 1]).is_valid());
        assert!(!min(vec![1, 5, 2, 4]).is_valid()); // 4 under 5

        assert!(max(vec![5, 1, 3]).is_valid());
        assert!(max(vec![5, 5, 5, 5]).is_valid());
        assert!(!max(vec![1, 5]).is_valid());
        assert!(!max(vec![5, 3, 4, 6]).is_valid()); // 6 under 3
    }

    #[test]
    fn test_push_onto_single_item() {
        // The root has no parent to compare against.
        let mut heap = MinHeap::new();
        heap.push(7);
        assert_eq!(heap.data, vec![7]);
        heap.push(3);
        assert_eq!(heap.data, vec![3, 7]);
        heap.push(9);
        assert_eq!(heap.data, vec![3, 7, 9]);
    }

    #[test]
    fn test_equal_items_are_not_swapped() {
        // Compare only the first field so the tags tell items apart.
        let mut heap = BinaryHeap::with_comparator(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        heap.push((4, 'a'));
        heap.push((4, 'b'));
        heap.push((4, 'c'));
        assert_eq!(heap.data, vec![(4, 'a'), (4, 'b'), (4, 'c')]);

        // The moved-up last item ties with both children and stays put.
        assert_eq!(heap.pop(), Some((4, 'a')));
        assert_eq!(heap.data, vec![(4, 'c'), (4, 'b')]);
    }

    #[test]
    fn test_sift_down_prefers_left_on_tie() {
        let mut heap = BinaryHeap::with_comparator(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        heap.push((1, 'r'));
        heap.push((2, 'x'));
        heap.push((2, 'y'));
        heap.push((9, 'z'));
        // After the pop, 9 sits at the root over two equal children.
        assert_eq!(heap.pop(), Some((1, 'r')));
        assert_eq!(heap.data, vec![(2, 'x'), (9, 'z'), (2, 'y')]);
    }

    #[test]
    fn test_pop_empty_leaves_heap_untouched() {
        let mut heap = MaxHeap::<u8>::with_capacity_and_comparator(4, MaxFirst);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.peek(), None);
        assert!(heap.is_empty());
        assert!(heap.capacity() >= 4);
        assert_eq!(*heap.comparator(), MaxFirst);
    }

    #[test]
    fn test_drain_and_clear() {
        let mut heap: MinHeap<i32> = vec![3, 1, 2].into_iter().collect();
        let mut drained: Vec<i32> = heap.drain().collect();
        drained.sort();
        assert_eq!(drained, vec![1, 2, 3]);
        assert!(heap.is_empty());

        heap.extend(&[4, 5]);
        assert_eq!(heap.len(), 2);
        heap.clear();
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_debug() {
        let heap = BinaryHeap::from(vec![2, 1]);
        assert_eq!(format!("{:?}", heap), "[1, 2]");
    }
}
