//! Affine coordinate-to-offset maps.
//!
//! An [`Indexer`] is the addressing half of a view: a coefficient per logical
//! dimension plus a constant shift, mapping a coordinate tuple to a flat
//! buffer offset as `shift + sum(coeffs[i] * idx[i])`. All derived-view
//! operations (slicing, transposition, permutation) are transforms of this
//! map; element data is never consulted.

/// An affine map from `D`-dimensional coordinate tuples to flat offsets.
///
/// # Type Parameters
/// - `D`: Number of logical dimensions (const generic)
///
/// Indexers are plain values: cheap to copy, immutable after construction.
/// Every transform returns a fresh `Indexer`; the one in-place exception is
/// [`transpose_in_place`](Indexer::transpose_in_place), kept for parity with
/// the value-returning form.
///
/// # Example
/// ```rust
/// use mdview::Indexer;
///
/// let ix: Indexer<2> = Indexer::from_sizes([3, 4]);
/// assert_eq!(ix.coeffs(), &[1, 3]);
/// assert_eq!(ix.index([2, 1]), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indexer<const D: usize> {
    coeffs: [isize; D],
    shift: isize,
}

impl<const D: usize> Default for Indexer<D> {
    /// The undefined mapping: shift 0, every coefficient 0.
    ///
    /// A default indexer maps every coordinate tuple to offset 0 and must not
    /// be used for addressing; it exists so containers of indexers can be
    /// zero-initialized before being filled in.
    fn default() -> Self {
        Self {
            coeffs: [0; D],
            shift: 0,
        }
    }
}

impl<const D: usize> Indexer<D> {
    /// Create an indexer from explicit coefficients and shift.
    ///
    /// No relationship between the coefficients is required; this is the
    /// escape hatch for non-canonical layouts (column-major, broadcast-style
    /// repeated coefficients, negative steps).
    #[inline]
    pub fn new(coeffs: [isize; D], shift: isize) -> Self {
        Self { coeffs, shift }
    }

    /// Build the canonical contiguous mapping for the given sizes.
    ///
    /// Dimension 0 varies fastest: `coeffs[0] = 1`, `coeffs[i + 1] =
    /// coeffs[i] * sizes[i]`, `shift = 0`. Every size must be positive;
    /// violations are debug-asserted.
    pub fn from_sizes(sizes: [usize; D]) -> Self {
        for (dim, &s) in sizes.iter().enumerate() {
            debug_assert!(s > 0, "size 0 for dim {dim}");
        }
        let mut coeffs = [0isize; D];
        if D > 0 {
            coeffs[0] = 1;
            for i in 1..D {
                coeffs[i] = coeffs[i - 1] * sizes[i - 1] as isize;
            }
        }
        Self { coeffs, shift: 0 }
    }

    /// The flat-offset delta per unit increment of each coordinate.
    #[inline]
    pub fn coeffs(&self) -> &[isize; D] {
        &self.coeffs
    }

    /// The constant offset added to every computed address.
    ///
    /// Starts at 0 for canonical mappings and accumulates as slices fix
    /// coordinates.
    #[inline]
    pub fn shift(&self) -> isize {
        self.shift
    }

    /// Compute the flat offset for a coordinate tuple.
    ///
    /// No bounds validation happens here; the view owning this indexer is
    /// responsible for checking coordinates against its sizes.
    #[inline]
    pub fn index(&self, coords: [usize; D]) -> isize {
        let mut offset = self.shift;
        for i in 0..D {
            offset += self.coeffs[i] * coords[i] as isize;
        }
        offset
    }

    /// Fix coordinate `dim` at `pos` and drop it from the tuple.
    ///
    /// The fixed coordinate's contribution folds into the shift
    /// (`shift' = shift + coeffs[dim] * pos`); the remaining coefficients
    /// keep their order. This is the primitive every "take a sub-array"
    /// operation builds on.
    ///
    /// The result's dimensionality `M` must equal `D - 1`; stable Rust cannot
    /// express that in the signature, so it is asserted at runtime.
    ///
    /// # Panics
    /// Panics if `M + 1 != D` or `dim >= D`.
    pub fn slice<const M: usize>(&self, dim: usize, pos: usize) -> Indexer<M> {
        assert!(M + 1 == D, "sliced indexer must drop exactly one dimension");
        assert!(dim < D, "invalid dim {dim} for rank {D}");
        let mut coeffs = [0isize; M];
        for i in 0..M {
            coeffs[i] = if i < dim {
                self.coeffs[i]
            } else {
                self.coeffs[i + 1]
            };
        }
        Indexer {
            coeffs,
            shift: self.shift + self.coeffs[dim] * pos as isize,
        }
    }

    /// Reconstruct the coordinate tuple addressing a flat offset.
    ///
    /// Inverse of [`index`](Indexer::index), valid **only** for a canonical
    /// mapping (built by [`from_sizes`](Indexer::from_sizes) and not yet
    /// permuted), where coefficients grow strictly from dimension 0 upward.
    /// The reconstruction divides out dimensions from the largest coefficient
    /// down; for an arbitrary permuted or sliced indexer the result is
    /// meaningless. That precondition is the caller's to uphold.
    pub fn coords(&self, flat: isize) -> [usize; D] {
        let mut rem = flat - self.shift;
        let mut out = [0usize; D];
        for i in (0..D).rev() {
            debug_assert!(self.coeffs[i] != 0, "coords on an undefined mapping");
            let step = rem / self.coeffs[i];
            out[i] = step as usize;
            rem -= self.coeffs[i] * step;
        }
        out
    }

    /// Reorder coefficients under a permutation: `coeffs'[i] = coeffs[perm[i]]`.
    ///
    /// The shift is unchanged. A view permuting its indexer must reorder its
    /// sizes under the same permutation to keep the size/coefficient pairing
    /// consistent; [`MdView::permute`](crate::MdView::permute) does exactly
    /// that.
    ///
    /// # Panics
    /// Panics if `perm` is not a bijection on `0..D`.
    pub fn permute(&self, perm: [usize; D]) -> Indexer<D> {
        assert!(is_permutation(&perm), "invalid permutation {perm:?}");
        let mut coeffs = [0isize; D];
        for i in 0..D {
            coeffs[i] = self.coeffs[perm[i]];
        }
        Indexer {
            coeffs,
            shift: self.shift,
        }
    }
}

// 2D-specific operations
impl Indexer<2> {
    /// Transpose: the two coefficients swapped, shift unchanged.
    #[inline]
    pub fn transposed(&self) -> Indexer<2> {
        Indexer {
            coeffs: [self.coeffs[1], self.coeffs[0]],
            shift: self.shift,
        }
    }

    /// Swap the two coefficients of this value in place.
    #[inline]
    pub fn transpose_in_place(&mut self) {
        self.coeffs.swap(0, 1);
    }
}

pub(crate) fn is_permutation<const N: usize>(perm: &[usize; N]) -> bool {
    let mut seen = [false; N];
    for &p in perm {
        if p >= N || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}
