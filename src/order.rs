use crate::HeapItem;

/// The relation a heap maintains between every parent and its children.
///
/// `holds(a, b)` means `a` may sit above `b`. Any closure of the shape
/// `Fn(&T, &T) -> bool` is a `HeapOrder<T>`.
///
/// ```
/// use indexed_heap::{HeapNode, IndexedHeap};
///
/// let heap = IndexedHeap::new(
///     [HeapNode::new(1, 2), HeapNode::new(2, 1)],
///     |x: &HeapNode<u32, i32>, y: &HeapNode<u32, i32>| x.value <= y.value,
/// )
/// .unwrap();
/// assert_eq!(heap.peek().map(|n| n.id), Some(2));
/// ```
pub trait HeapOrder<T: ?Sized> {
    fn holds(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> HeapOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn holds(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest value at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T> HeapOrder<T> for MinOrder
where
    T: HeapItem,
    T::Value: PartialOrd,
{
    #[inline]
    fn holds(&self, a: &T, b: &T) -> bool {
        a.value() <= b.value()
    }
}

/// Greatest value at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T> HeapOrder<T> for MaxOrder
where
    T: HeapItem,
    T::Value: PartialOrd,
{
    #[inline]
    fn holds(&self, a: &T, b: &T) -> bool {
        a.value() >= b.value()
    }
}
