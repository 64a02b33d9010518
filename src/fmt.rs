//! Textual rendering of views. Presentation only; no addressing semantics.
//!
//! A 1D view prints as one row of field-width-formatted elements, a 2D view
//! as a line per row, and higher ranks as the sequence of their `(D-1)`-rank
//! renderings along the last dimension. The formatter's width (`{:4}`) is
//! applied to every element; unbound views print `<unbound>`.

use std::fmt;

use crate::view::MdView;

impl<T: fmt::Display> fmt::Display for MdView<'_, T, 1> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_bound() {
            return f.write_str("<unbound>\n");
        }
        let w = f.width().unwrap_or(0);
        for i in 0..self.dim(0) {
            write!(f, "{:>w$}", self.get([i]))?;
        }
        f.write_str("\n")
    }
}

impl<T: fmt::Display> fmt::Display for MdView<'_, T, 2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_bound() {
            return f.write_str("<unbound>\n");
        }
        let w = f.width().unwrap_or(0);
        for i in 0..self.dim(0) {
            for j in 0..self.dim(1) {
                write!(f, "{:>w$}", self.get([i, j]))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

// Rank >= 3 renders each slice along the last dimension, separated by a
// blank line. Per-rank impls because a blanket one would overlap the 1D/2D
// cases; arity tracks the original convenience surface (up to 4).
macro_rules! impl_display_sliced {
    ($($d:literal => $m:literal),* $(,)?) => {$(
        impl<T: fmt::Display> fmt::Display for MdView<'_, T, $d> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if !self.is_bound() {
                    return f.write_str("<unbound>\n");
                }
                let w = f.width().unwrap_or(0);
                for i in 0..self.dim($d - 1) {
                    let sl: MdView<'_, T, $m> = self.slice($d - 1, i);
                    write!(f, "{sl:>w$}")?;
                    f.write_str("\n")?;
                }
                Ok(())
            }
        }
    )*};
}

impl_display_sliced!(3 => 2, 4 => 3);

#[cfg(test)]
mod tests {
    use crate::view::MdView;

    #[test]
    fn test_display_1d() {
        let data = [1, 2, 3];
        let view: MdView<'_, i32, 1> = MdView::new(&data, [3]).unwrap();
        assert_eq!(format!("{view:3}"), "  1  2  3\n");
    }

    #[test]
    fn test_display_2d() {
        let data: Vec<i32> = (0..6).collect();
        let view: MdView<'_, i32, 2> = MdView::new(&data, [2, 3]).unwrap();
        // Dimension 0 fastest-varying: row i holds offsets i, i+2, i+4.
        assert_eq!(format!("{view:3}"), "  0  2  4\n  1  3  5\n");
    }

    #[test]
    fn test_display_3d_slices_last_dim() {
        let data: Vec<i32> = (0..8).collect();
        let view: MdView<'_, i32, 3> = MdView::new(&data, [2, 2, 2]).unwrap();
        assert_eq!(
            format!("{view:2}"),
            " 0 2\n 1 3\n\n 4 6\n 5 7\n\n"
        );
    }

    #[test]
    fn test_display_unbound() {
        let view: MdView<'_, i32, 2> = MdView::unbound([2, 3]);
        assert_eq!(format!("{view}"), "<unbound>\n");
    }
}
