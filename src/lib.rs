#![allow(missing_docs)]
//! A binary heap that remembers where every element lives.
//!
//! Besides the usual root extraction, [`IndexedHeap`] keeps a reverse index
//! from each element's identity to its slot in the backing array, so the
//! parent and children of *any* live element can be looked up in *O*(1).
//!
//! # Examples
//!
//! ```
//! use indexed_heap::{HeapNode, IndexedHeap};
//!
//! let mut heap = IndexedHeap::min_heap([
//!     HeapNode::new("f", 6),
//!     HeapNode::new("c", 3),
//!     HeapNode::new("e", 5),
//!     HeapNode::new("d", 4),
//!     HeapNode::new("g", 7),
//! ])
//! .unwrap();
//!
//! // The root is the smallest value and has no parent.
//! assert_eq!(heap.peek().map(|n| n.value), Some(3));
//! assert_eq!(heap.parent(&"c"), Ok(None));
//!
//! // Every live element can be navigated by identity.
//! let left = heap.left(&"c").unwrap().map(|n| n.value);
//! assert_eq!(left, Some(4));
//!
//! let order: Vec<_> = heap.into_iter_sorted().map(|n| n.value).collect();
//! assert_eq!(order, [3, 4, 5, 6, 7]);
//! ```

use core::fmt;
use core::iter::FusedIterator;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::slice;

mod error;
mod order;

pub use error::HeapError;
pub use order::{HeapOrder, MaxOrder, MinOrder};

/// An element that can be stored in an [`IndexedHeap`].
///
/// `Id` is the identity the heap indexes by. Two elements with equal values
/// but different ids are distinct entries; two elements with the same id cannot
/// share a heap.
pub trait HeapItem {
    type Id: Hash + Eq + Clone;
    type Value: ?Sized;

    fn id(&self) -> &Self::Id;

    /// The projection the ordering policy compares.
    fn value(&self) -> &Self::Value;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeapNode<I, V> {
    pub id: I,
    pub value: V,
}

impl<I, V> HeapNode<I, V> {
    pub fn new(id: I, value: V) -> Self {
        HeapNode { id, value }
    }
}

impl<I: Copy, V: Copy> Copy for HeapNode<I, V> {}

impl<I: Hash + Eq + Clone, V> HeapItem for HeapNode<I, V> {
    type Id = I;
    type Value = V;

    fn id(&self) -> &I {
        &self.id
    }

    fn value(&self) -> &V {
        &self.value
    }
}

/// A binary heap over a fixed set of elements with identity-indexed
/// navigation.
///
/// Slots are 1-based: the root sits in slot 1, the parent of slot `i` is
/// `i / 2` and its children are `2i` and `2i + 1`. The heap only shrinks,
/// through [`extract_root`].
///
/// It is a logic error for an element's value to be modified in such a way
/// that its ordering relative to any other element changes while it is in the
/// heap.
///
/// # Time complexity
///
/// | [new]   | [extract_root] | [parent]/[left]/[right] |
/// |---------|----------------|-------------------------|
/// | *O*(n)  | *O*(log(*n*))  | *O*(1)~                 |
///
/// [new]: IndexedHeap::new
/// [extract_root]: IndexedHeap::extract_root
/// [parent]: IndexedHeap::parent
/// [left]: IndexedHeap::left
/// [right]: IndexedHeap::right
pub struct IndexedHeap<T: HeapItem, O> {
    // slot `i` is stored at `data[i - 1]`
    data: Vec<T>,
    positions: HashMap<T::Id, usize>,
    order: O,
}

impl<T: HeapItem + Clone, O: Clone> Clone for IndexedHeap<T, O> {
    fn clone(&self) -> Self {
        IndexedHeap {
            data: self.data.clone(),
            positions: self.positions.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T: HeapItem + fmt::Debug, O> fmt::Debug for IndexedHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[inline(always)]
fn parent_slot(slot: usize) -> usize {
    slot / 2
}

#[inline(always)]
fn left_slot(slot: usize) -> usize {
    2 * slot
}

#[inline(always)]
fn right_slot(slot: usize) -> usize {
    2 * slot + 1
}

impl<T: HeapItem, O: HeapOrder<T>> IndexedHeap<T, O> {
    /// Builds a heap from `items` in linear time.
    ///
    /// An empty input gives an empty heap. Two items with the same identity
    /// are rejected with [`HeapError::DuplicateIdentity`], carrying the
    /// 1-based input positions of both occurrences.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_heap::{HeapError, HeapNode, IndexedHeap, MaxOrder};
    ///
    /// let heap = IndexedHeap::new([HeapNode::new(1, 'a'), HeapNode::new(2, 'b')], MaxOrder).unwrap();
    /// assert_eq!(heap.peek().map(|n| n.value), Some('b'));
    ///
    /// let duplicate = IndexedHeap::new([HeapNode::new(1, 'a'), HeapNode::new(1, 'b')], MaxOrder);
    /// assert_eq!(duplicate.unwrap_err(), HeapError::DuplicateIdentity { first: 1, second: 2 });
    /// ```
    pub fn new<I>(items: I, order: O) -> Result<IndexedHeap<T, O>, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<T> = items.into_iter().collect();
        let mut positions = HashMap::with_capacity(data.len());
        for (index, item) in data.iter().enumerate() {
            let slot = index + 1;
            if let Some(first) = positions.insert(item.id().clone(), slot) {
                return Err(HeapError::DuplicateIdentity {
                    first,
                    second: slot,
                });
            }
        }

        let mut heap = IndexedHeap {
            data,
            positions,
            order,
        };
        heap.rebuild();
        Ok(heap)
    }

    /// Removes the root and returns it, or [`HeapError::EmptyHeap`] once
    /// every element has been extracted.
    ///
    /// The returned element is no longer live: navigating from its id
    /// afterwards reports [`HeapError::UnknownElement`].
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_heap::{HeapError, HeapNode, IndexedHeap};
    ///
    /// let mut heap = IndexedHeap::max_heap([HeapNode::new(0, 1), HeapNode::new(1, 3)]).unwrap();
    ///
    /// assert_eq!(heap.extract_root().map(|n| n.value), Ok(3));
    /// assert_eq!(heap.extract_root().map(|n| n.value), Ok(1));
    /// assert_eq!(heap.extract_root(), Err(HeapError::EmptyHeap));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `extract_root` on a heap containing *n* elements
    /// is *O*(log(*n*)).
    pub fn extract_root(&mut self) -> Result<T, HeapError> {
        let last = self.len();
        if last == 0 {
            return Err(HeapError::EmptyHeap);
        }
        self.swap_slots(1, last);
        let root = self.detach_last().ok_or(HeapError::EmptyHeap)?;
        self.sift_down(1);
        Ok(root)
    }

    /// Whether `a` may sit above `b` under this heap's ordering policy.
    pub fn ordering_holds(&self, a: &T, b: &T) -> bool {
        self.order.holds(a, b)
    }

    /// Checks heap order and index consistency over every live slot.
    pub fn check_integrity(&self) -> bool {
        if self.positions.len() != self.data.len() {
            return false;
        }
        let indexed = self
            .data
            .iter()
            .enumerate()
            .all(|(index, item)| self.positions.get(item.id()) == Some(&(index + 1)));
        let ordered = (2..=self.len()).all(|slot| {
            self.order
                .holds(self.slot(parent_slot(slot)), self.slot(slot))
        });
        indexed && ordered
    }

    /// Consumes the heap, yielding its elements in extraction order.
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, O> {
        IntoIterSorted { inner: self }
    }

    /// Consumes the heap and returns its elements in extraction order,
    /// most preferred first.
    ///
    /// ```
    /// use indexed_heap::{HeapNode, IndexedHeap};
    ///
    /// let heap = IndexedHeap::min_heap((0..5).map(|i| HeapNode::new(i, 10 - i))).unwrap();
    /// let values: Vec<_> = heap.into_sorted_vec().into_iter().map(|n| n.value).collect();
    /// assert_eq!(values, [6, 7, 8, 9, 10]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Restores heap order for the subtree rooted at `slot`, assuming both of
    /// its subtrees are already ordered.
    ///
    /// The left child is tested against the element at `slot`, then the right
    /// child against whichever of the two won; this decides ties.
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.len();
        loop {
            let mut best = slot;

            let left = left_slot(slot);
            if left <= len && self.order.holds(self.slot(left), self.slot(slot)) {
                best = left;
            }

            let right = right_slot(slot);
            if right <= len && self.order.holds(self.slot(right), self.slot(best)) {
                best = right;
            }

            if best == slot {
                return;
            }
            self.swap_slots(slot, best);
            slot = best;
        }
    }

    fn rebuild(&mut self) {
        let mut slot = self.len() / 2;
        while slot > 0 {
            self.sift_down(slot);
            slot -= 1;
        }
    }
}

impl<T: HeapItem> IndexedHeap<T, MinOrder>
where
    T::Value: PartialOrd,
{
    /// Builds a heap with the smallest value at the root.
    pub fn min_heap<I>(items: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        IndexedHeap::new(items, MinOrder)
    }
}

impl<T: HeapItem> IndexedHeap<T, MaxOrder>
where
    T::Value: PartialOrd,
{
    /// Builds a heap with the greatest value at the root.
    pub fn max_heap<I>(items: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        IndexedHeap::new(items, MaxOrder)
    }
}

impl<T: HeapItem, O> IndexedHeap<T, O> {
    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The root, if any.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The live elements in internal array order, root first. This is not
    /// sorted order.
    pub fn items(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator visiting the live elements in internal array order.
    ///
    /// ```
    /// use indexed_heap::{HeapNode, IndexedHeap};
    ///
    /// let heap = IndexedHeap::min_heap([HeapNode::new(0, 1), HeapNode::new(1, 2)]).unwrap();
    /// let values: Vec<_> = heap.iter().map(|n| n.value).collect();
    /// assert_eq!(values, [1, 2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.data.iter(),
        }
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    /// The slot currently holding the element with this identity.
    pub fn position_of<Q>(&self, id: &Q) -> Option<usize>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(id).copied()
    }

    /// The element in `slot`, which must lie in `1..=self.len()`.
    pub fn at(&self, slot: usize) -> Result<&T, HeapError> {
        self.get(slot).ok_or(HeapError::SlotOutOfRange {
            slot,
            len: self.len(),
        })
    }

    /// The parent of a live element; `None` for the root.
    pub fn parent<Q>(&self, id: &Q) -> Result<Option<&T>, HeapError>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.live_slot(id)?;
        Ok(self.get(parent_slot(slot)))
    }

    /// The left child of a live element, if it has one.
    pub fn left<Q>(&self, id: &Q) -> Result<Option<&T>, HeapError>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.live_slot(id)?;
        Ok(self.get(left_slot(slot)))
    }

    /// The right child of a live element, if it has one.
    pub fn right<Q>(&self, id: &Q) -> Result<Option<&T>, HeapError>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.live_slot(id)?;
        Ok(self.get(right_slot(slot)))
    }

    pub fn is_root<Q>(&self, id: &Q) -> Result<bool, HeapError>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.live_slot(id).map(|slot| slot == 1)
    }

    /// Consumes the heap and returns its elements in internal array order.
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    fn live_slot<Q>(&self, id: &Q) -> Result<usize, HeapError>
    where
        T::Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position_of(id).ok_or(HeapError::UnknownElement)
    }

    fn get(&self, slot: usize) -> Option<&T> {
        slot.checked_sub(1).and_then(|index| self.data.get(index))
    }

    /// Caller guarantees `1 <= slot <= self.len()`.
    fn slot(&self, slot: usize) -> &T {
        &self.data[slot - 1]
    }

    // The only place elements change slots. Both moved elements get their
    // index entries rewritten before returning.
    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.data.swap(a - 1, b - 1);
        for slot in [a, b] {
            if let Some(position) = self.positions.get_mut(self.data[slot - 1].id()) {
                *position = slot;
            }
        }
    }

    /// Drops the last slot from the live range together with its index entry.
    fn detach_last(&mut self) -> Option<T> {
        let item = self.data.pop()?;
        self.positions.remove(item.id());
        Some(item)
    }
}

/// An iterator over the live elements of an `IndexedHeap`, in internal
/// array order.
///
/// This `struct` is created by [`IndexedHeap::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator that extracts the root of an `IndexedHeap` on every
/// step.
///
/// This `struct` is created by [`IndexedHeap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T: HeapItem, O> {
    inner: IndexedHeap<T, O>,
}

impl<T: HeapItem, O: HeapOrder<T>> Iterator for IntoIterSorted<T, O> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.extract_root().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T: HeapItem, O: HeapOrder<T>> ExactSizeIterator for IntoIterSorted<T, O> {}

impl<T: HeapItem, O: HeapOrder<T>> FusedIterator for IntoIterSorted<T, O> {}

impl<T: HeapItem, O> From<IndexedHeap<T, O>> for Vec<T> {
    /// Converts an `IndexedHeap<T, O>` into a `Vec<T>` in internal array
    /// order.
    fn from(heap: IndexedHeap<T, O>) -> Vec<T> {
        heap.data
    }
}

impl<'a, T: HeapItem, O> IntoIterator for &'a IndexedHeap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
