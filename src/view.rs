//! Strided multidimensional views over externally-owned buffers.
//!
//! [`MdView`] and [`MdViewMut`] pair a borrowed buffer with a size per
//! dimension and an [`Indexer`]; every element access delegates to the
//! indexer for address computation. Derived views (slices, transposes,
//! permutations) share the parent's buffer with a transformed indexer and
//! transformed sizes; constructing or using one never mutates the parent.

use std::ops;

use crate::buffer;
use crate::indexer::Indexer;
use crate::{MdViewError, Result};

/// An immutable view of an externally-owned buffer as a `D`-dimensional array.
///
/// # Type Parameters
/// - `'a`: Lifetime of the underlying buffer
/// - `T`: Element type
/// - `D`: Number of dimensions (const generic)
///
/// A view never owns its buffer; the buffer may be absent (an *unbound*
/// placeholder carrying only sizes), and once constructed a view is never
/// rebound. Views are plain values: copying one copies three words of
/// metadata, never element data.
#[derive(Debug)]
pub struct MdView<'a, T, const D: usize> {
    data: Option<&'a [T]>,
    sizes: [usize; D],
    indexer: Indexer<D>,
}

/// A mutable view of an externally-owned buffer as a `D`-dimensional array.
///
/// Same addressing model as [`MdView`], but holds the buffer exclusively and
/// allows element mutation. Always bound: a placeholder that can never be
/// written is only useful immutably. Reborrow with
/// [`as_view`](MdViewMut::as_view) to hand out read-only aliases.
#[derive(Debug)]
pub struct MdViewMut<'a, T, const D: usize> {
    data: &'a mut [T],
    sizes: [usize; D],
    indexer: Indexer<D>,
}

// Derived Clone would demand T: Clone; the view only holds a reference.
impl<T, const D: usize> Clone for MdView<'_, T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const D: usize> Copy for MdView<'_, T, D> {}

impl<'a, T, const D: usize> MdView<'a, T, D> {
    /// Create an unbound placeholder: sizes and the canonical indexer, no
    /// buffer.
    ///
    /// Element access on an unbound view is a contract violation and panics
    /// in every build mode. `volume()` reports 0 until a bound view exists;
    /// there is no way to bind a buffer after the fact.
    pub fn unbound(sizes: [usize; D]) -> Self {
        Self {
            data: None,
            sizes,
            indexer: Indexer::from_sizes(sizes),
        }
    }

    /// Create a view over `data` with the canonical contiguous mapping
    /// (dimension 0 fastest-varying).
    ///
    /// # Errors
    /// Rejects a zero size or a buffer with fewer than `volume()` elements.
    pub fn new(data: &'a [T], sizes: [usize; D]) -> Result<Self> {
        check_sizes(&sizes)?;
        let indexer = Indexer::from_sizes(sizes);
        check_extent(data.len(), &sizes, &indexer)?;
        Ok(Self {
            data: Some(data),
            sizes,
            indexer,
        })
    }

    /// Create a view over `data` with an explicit, possibly non-canonical
    /// mapping.
    ///
    /// This is the constructor the transform operations use internally; it is
    /// public for callers that already know their layout (column-major,
    /// negative steps, pre-shifted windows).
    ///
    /// # Errors
    /// Rejects a zero size and any mapping whose reachable offsets leave the
    /// buffer (checked by sweeping the extreme offset in each dimension).
    pub fn with_indexer(data: &'a [T], sizes: [usize; D], indexer: Indexer<D>) -> Result<Self> {
        check_sizes(&sizes)?;
        check_extent(data.len(), &sizes, &indexer)?;
        Ok(Self {
            data: Some(data),
            sizes,
            indexer,
        })
    }

    /// Returns the size of each dimension.
    #[inline]
    pub fn sizes(&self) -> &[usize; D] {
        &self.sizes
    }

    /// Returns the size of dimension `dim`.
    #[inline]
    pub fn dim(&self, dim: usize) -> usize {
        self.sizes[dim]
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        D
    }

    /// Returns the coordinate-to-offset map.
    #[inline]
    pub fn indexer(&self) -> &Indexer<D> {
        &self.indexer
    }

    /// Returns the underlying buffer, or `None` for an unbound view.
    #[inline]
    pub fn data(&self) -> Option<&'a [T]> {
        self.data
    }

    /// Whether a buffer is bound.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    /// The number of distinct coordinate tuples: the product of all sizes,
    /// or 0 for an unbound view.
    ///
    /// Always computed, never cached.
    pub fn volume(&self) -> usize {
        match self.data {
            Some(_) => self.sizes.iter().product(),
            None => 0,
        }
    }

    /// Get a reference to the element at the given coordinates.
    ///
    /// Debug builds assert every coordinate against its dimension's size and
    /// the computed offset against the buffer extent; release builds perform
    /// neither check and an out-of-range tuple addresses whatever offset
    /// results. That asymmetry is the library's performance contract, not an
    /// oversight.
    ///
    /// # Panics
    /// Panics on an unbound view in every build mode.
    #[inline]
    pub fn get(&self, coords: [usize; D]) -> &T {
        let Some(data) = self.data else {
            panic!("element access on unbound view");
        };
        for i in 0..D {
            debug_assert!(
                coords[i] < self.sizes[i],
                "coordinate {} out of range for dim {i} of size {}",
                coords[i],
                self.sizes[i]
            );
        }
        let offset = self.indexer.index(coords);
        debug_assert!(offset >= 0, "negative offset {offset}");
        buffer::load(data, offset as usize)
    }

    /// Get a reference to the element at the given coordinates with no
    /// checks at all.
    ///
    /// # Safety
    /// The view must be bound and the coordinates in range; the indexer's
    /// offset for them must lie inside the buffer.
    #[inline]
    pub unsafe fn get_unchecked(&self, coords: [usize; D]) -> &T {
        let offset = self.indexer.index(coords) as usize;
        unsafe { self.data.unwrap_unchecked().get_unchecked(offset) }
    }

    /// Fix coordinate `dim` at `pos`: a `(D-1)`-dimensional view sharing this
    /// view's buffer.
    ///
    /// The returned view addresses exactly the elements reachable by holding
    /// that coordinate fixed in the parent: for every valid remaining tuple,
    /// `v.slice(dim, pos).get(rest) == v.get(rest with pos inserted at dim)`.
    /// Slicing an unbound view yields an unbound slice.
    ///
    /// # Panics
    /// Panics if `M + 1 != D`, `dim >= D`, or `pos >= sizes[dim]`.
    pub fn slice<const M: usize>(&self, dim: usize, pos: usize) -> MdView<'a, T, M> {
        assert!(dim < D, "invalid dim {dim} for rank {D}");
        assert!(
            pos < self.sizes[dim],
            "position {pos} out of range for dim {dim} of size {}",
            self.sizes[dim]
        );
        let indexer = self.indexer.slice::<M>(dim, pos);
        MdView {
            data: self.data,
            sizes: drop_dim(&self.sizes, dim),
            indexer,
        }
    }

    /// Reorder dimensions under a permutation.
    ///
    /// Sizes and coefficients move together: `sizes'[i] = sizes[perm[i]]`
    /// and `coeffs'[i] = coeffs[perm[i]]`, so the size/coefficient pairing
    /// stays consistent. The buffer is shared; no element moves.
    ///
    /// # Panics
    /// Panics if `perm` is not a bijection on `0..D`.
    pub fn permute(&self, perm: [usize; D]) -> MdView<'a, T, D> {
        let indexer = self.indexer.permute(perm);
        let mut sizes = [0usize; D];
        for i in 0..D {
            sizes[i] = self.sizes[perm[i]];
        }
        MdView {
            data: self.data,
            sizes,
            indexer,
        }
    }
}

// 2D-specific operations
impl<'a, T> MdView<'a, T, 2> {
    /// Transpose: sizes and coefficients swapped, buffer shared.
    ///
    /// Equivalent to `permute([1, 0])`, specialized because the 2D case is
    /// the common one. Self-inverse.
    #[inline]
    pub fn transpose(&self) -> MdView<'a, T, 2> {
        MdView {
            data: self.data,
            sizes: [self.sizes[1], self.sizes[0]],
            indexer: self.indexer.transposed(),
        }
    }
}

impl<T, const D: usize> ops::Index<[usize; D]> for MdView<'_, T, D> {
    type Output = T;

    #[inline]
    fn index(&self, coords: [usize; D]) -> &T {
        self.get(coords)
    }
}

impl<'a, T, const D: usize> MdViewMut<'a, T, D> {
    /// Create a mutable view over `data` with the canonical contiguous
    /// mapping (dimension 0 fastest-varying).
    ///
    /// # Errors
    /// Rejects a zero size or a buffer with fewer than `volume()` elements.
    pub fn new(data: &'a mut [T], sizes: [usize; D]) -> Result<Self> {
        check_sizes(&sizes)?;
        let indexer = Indexer::from_sizes(sizes);
        check_extent(data.len(), &sizes, &indexer)?;
        Ok(Self {
            data,
            sizes,
            indexer,
        })
    }

    /// Create a mutable view over `data` with an explicit mapping.
    ///
    /// # Errors
    /// Rejects a zero size and any mapping whose reachable offsets leave the
    /// buffer.
    pub fn with_indexer(data: &'a mut [T], sizes: [usize; D], indexer: Indexer<D>) -> Result<Self> {
        check_sizes(&sizes)?;
        check_extent(data.len(), &sizes, &indexer)?;
        Ok(Self {
            data,
            sizes,
            indexer,
        })
    }

    /// Returns the size of each dimension.
    #[inline]
    pub fn sizes(&self) -> &[usize; D] {
        &self.sizes
    }

    /// Returns the size of dimension `dim`.
    #[inline]
    pub fn dim(&self, dim: usize) -> usize {
        self.sizes[dim]
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        D
    }

    /// Returns the coordinate-to-offset map.
    #[inline]
    pub fn indexer(&self) -> &Indexer<D> {
        &self.indexer
    }

    /// The number of distinct coordinate tuples: the product of all sizes.
    pub fn volume(&self) -> usize {
        self.sizes.iter().product()
    }

    /// Reborrow as an immutable view of the same buffer, sizes, and indexer.
    #[inline]
    pub fn as_view(&self) -> MdView<'_, T, D> {
        MdView {
            data: Some(self.data),
            sizes: self.sizes,
            indexer: self.indexer,
        }
    }

    /// Get a reference to the element at the given coordinates.
    ///
    /// Checking mirrors [`MdView::get`]: debug-only coordinate and extent
    /// asserts, nothing in release.
    #[inline]
    pub fn get(&self, coords: [usize; D]) -> &T {
        self.check_coords(&coords);
        let offset = self.offset_of(coords);
        buffer::load(self.data, offset)
    }

    /// Get a mutable reference to the element at the given coordinates.
    #[inline]
    pub fn get_mut(&mut self, coords: [usize; D]) -> &mut T {
        self.check_coords(&coords);
        let offset = self.offset_of(coords);
        buffer::load_mut(self.data, offset)
    }

    /// Store `value` at the given coordinates.
    #[inline]
    pub fn set(&mut self, coords: [usize; D], value: T) {
        *self.get_mut(coords) = value;
    }

    /// Get a mutable reference with no checks at all.
    ///
    /// # Safety
    /// The coordinates must be in range and the indexer's offset for them
    /// inside the buffer.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, coords: [usize; D]) -> &mut T {
        let offset = self.indexer.index(coords) as usize;
        unsafe { self.data.get_unchecked_mut(offset) }
    }

    /// Fix coordinate `dim` at `pos`, consuming this view (the buffer is held
    /// exclusively, so a derived mutable view supersedes its parent).
    ///
    /// # Panics
    /// Panics if `M + 1 != D`, `dim >= D`, or `pos >= sizes[dim]`.
    pub fn slice<const M: usize>(self, dim: usize, pos: usize) -> MdViewMut<'a, T, M> {
        assert!(dim < D, "invalid dim {dim} for rank {D}");
        assert!(
            pos < self.sizes[dim],
            "position {pos} out of range for dim {dim} of size {}",
            self.sizes[dim]
        );
        let indexer = self.indexer.slice::<M>(dim, pos);
        MdViewMut {
            data: self.data,
            sizes: drop_dim(&self.sizes, dim),
            indexer,
        }
    }

    /// Reorder dimensions under a permutation, consuming this view.
    ///
    /// # Panics
    /// Panics if `perm` is not a bijection on `0..D`.
    pub fn permute(self, perm: [usize; D]) -> MdViewMut<'a, T, D> {
        let indexer = self.indexer.permute(perm);
        let mut sizes = [0usize; D];
        for i in 0..D {
            sizes[i] = self.sizes[perm[i]];
        }
        MdViewMut {
            data: self.data,
            sizes,
            indexer,
        }
    }

    #[inline]
    fn check_coords(&self, coords: &[usize; D]) {
        for i in 0..D {
            debug_assert!(
                coords[i] < self.sizes[i],
                "coordinate {} out of range for dim {i} of size {}",
                coords[i],
                self.sizes[i]
            );
        }
    }

    #[inline]
    fn offset_of(&self, coords: [usize; D]) -> usize {
        let offset = self.indexer.index(coords);
        debug_assert!(offset >= 0, "negative offset {offset}");
        offset as usize
    }
}

// 2D-specific operations
impl<'a, T> MdViewMut<'a, T, 2> {
    /// Transpose, consuming this view: sizes and coefficients swapped.
    #[inline]
    pub fn transpose(self) -> MdViewMut<'a, T, 2> {
        MdViewMut {
            data: self.data,
            sizes: [self.sizes[1], self.sizes[0]],
            indexer: self.indexer.transposed(),
        }
    }
}

impl<T, const D: usize> ops::Index<[usize; D]> for MdViewMut<'_, T, D> {
    type Output = T;

    #[inline]
    fn index(&self, coords: [usize; D]) -> &T {
        self.get(coords)
    }
}

impl<T, const D: usize> ops::IndexMut<[usize; D]> for MdViewMut<'_, T, D> {
    #[inline]
    fn index_mut(&mut self, coords: [usize; D]) -> &mut T {
        self.get_mut(coords)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn check_sizes<const D: usize>(sizes: &[usize; D]) -> Result<()> {
    for (dim, &s) in sizes.iter().enumerate() {
        if s == 0 {
            return Err(MdViewError::ZeroSize { dim });
        }
    }
    Ok(())
}

/// Sweep the extreme offset reachable in each dimension and reject mappings
/// that can leave the buffer. Sizes are already known positive.
fn check_extent<const D: usize>(
    data_len: usize,
    sizes: &[usize; D],
    indexer: &Indexer<D>,
) -> Result<()> {
    let mut min_offset = indexer.shift();
    let mut max_offset = indexer.shift();
    for i in 0..D {
        let coeff = indexer.coeffs()[i];
        let last = (sizes[i] - 1) as isize;
        if coeff >= 0 {
            max_offset += coeff * last;
        } else {
            min_offset += coeff * last;
        }
    }
    if min_offset < 0 {
        return Err(MdViewError::OutOfBuffer {
            offset: min_offset,
            len: data_len,
        });
    }
    if max_offset as usize >= data_len {
        return Err(MdViewError::OutOfBuffer {
            offset: max_offset,
            len: data_len,
        });
    }
    Ok(())
}

fn drop_dim<const D: usize, const M: usize>(sizes: &[usize; D], dim: usize) -> [usize; M] {
    let mut out = [0usize; M];
    for i in 0..M {
        out[i] = if i < dim { sizes[i] } else { sizes[i + 1] };
    }
    out
}
