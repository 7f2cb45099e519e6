use thiserror::Error;

/// Failures reported by [`IndexedHeap`](crate::IndexedHeap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap has no root left to extract.
    #[error("cannot extract from an empty heap")]
    EmptyHeap,
    /// The identity was never inserted or has already been extracted.
    #[error("element is not live in this heap")]
    UnknownElement,
    /// Two input elements share one identity.
    #[error("duplicate element identity at slots {first} and {second}")]
    DuplicateIdentity { first: usize, second: usize },
    #[error("slot {slot} is outside the live range 1..={len}")]
    SlotOutOfRange { slot: usize, len: usize },
}
