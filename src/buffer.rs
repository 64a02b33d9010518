//! Debug-only bounds-checked buffer access.
//!
//! Views borrow externally-owned storage and promise that every offset an
//! indexer produces lands inside it. These helpers are the last line of that
//! promise: debug builds assert the computed offset against the buffer's
//! known extent with a message naming both, release builds fall through to
//! plain slice indexing. The truly unchecked path is the views' `unsafe`
//! `get_unchecked` accessors, which bypass this module entirely.

#[inline]
pub(crate) fn load<T>(data: &[T], offset: usize) -> &T {
    #[cfg(debug_assertions)]
    assert!(
        offset < data.len(),
        "offset {offset} out of bounds for buffer of {} elements",
        data.len()
    );
    &data[offset]
}

#[inline]
pub(crate) fn load_mut<T>(data: &mut [T], offset: usize) -> &mut T {
    #[cfg(debug_assertions)]
    assert!(
        offset < data.len(),
        "offset {offset} out of bounds for buffer of {} elements",
        data.len()
    );
    &mut data[offset]
}
