//! Zero-copy strided views over multidimensional data.
//!
//! This crate provides addressing for externally-owned buffers interpreted as
//! multidimensional arrays. A view pairs a borrowed buffer with a size per
//! dimension and an affine coordinate map; deriving a new view (slice,
//! transpose, permutation) transforms the map and never touches element data.
//!
//! # Core Types
//!
//! - [`Indexer`]: An affine map from coordinate tuples to flat buffer offsets
//!   (a coefficient per dimension plus a constant shift)
//! - [`MdView`] / [`MdViewMut`]: Zero-copy views over existing data, built on
//!   an [`Indexer`] for all address computation
//!
//! # Example
//!
//! ```rust
//! use mdview::MdView;
//!
//! // Interpret a flat buffer as a 3x4 array, dimension 0 fastest-varying.
//! let data: Vec<i32> = (0..12).collect();
//! let view: MdView<'_, i32, 2> = MdView::new(&data, [3, 4]).unwrap();
//!
//! assert_eq!(view[[2, 1]], 5); // offset 2*1 + 1*3
//!
//! // Fix dimension 1 at position 2: a 1D view over the same buffer.
//! let row: MdView<'_, i32, 1> = view.slice(1, 2);
//! assert_eq!(row[[2]], view[[2, 2]]);
//!
//! // Transpose is a coefficient swap; no element moves.
//! let t = view.transpose();
//! assert_eq!(t[[1, 2]], view[[2, 1]]);
//! ```
//!
//! # Ownership
//!
//! Views never own their buffer. Any number of views (an original and all of
//! its slices, transposes, and permutations) may alias the same buffer; view
//! metadata is immutable after construction, so shared reads are safe by
//! construction. Serializing writes through [`MdViewMut`] is the caller's
//! business, as is keeping the buffer alive.
//!
//! # Checking
//!
//! Construction validates eagerly: zero sizes and mappings that reach outside
//! the buffer are rejected with [`MdViewError`]. Per-element coordinate checks
//! are debug-only (`debug_assert!`); release builds skip them, and the
//! `unsafe` `get_unchecked` accessors skip every check for hot loops.

mod buffer;
mod fmt;
pub mod indexer;
pub mod view;

pub use indexer::Indexer;
pub use view::{MdView, MdViewMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors rejected at view construction.
#[derive(Debug, thiserror::Error)]
pub enum MdViewError {
    /// A dimension was declared with extent zero.
    #[error("size 0 for dim {dim}")]
    ZeroSize { dim: usize },

    /// The mapping can reach an offset outside the buffer.
    #[error("view reaches offset {offset} outside buffer of {len} elements")]
    OutOfBuffer { offset: isize, len: usize },
}

/// Result type for view construction.
pub type Result<T> = std::result::Result<T, MdViewError>;
