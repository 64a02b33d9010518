use approx::assert_relative_eq;
use mdview::{Indexer, MdView, MdViewMut};

fn fill_linear(len: usize) -> Vec<f64> {
    (0..len).map(|x| x as f64).collect()
}

#[test]
fn test_origin_always_offset_zero() {
    let ix1: Indexer<1> = Indexer::from_sizes([7]);
    let ix2: Indexer<2> = Indexer::from_sizes([3, 4]);
    let ix4: Indexer<4> = Indexer::from_sizes([2, 3, 4, 5]);
    assert_eq!(ix1.index([0]), 0);
    assert_eq!(ix2.index([0, 0]), 0);
    assert_eq!(ix4.index([0, 0, 0, 0]), 0);
}

#[test]
fn test_canonical_coords_inverts_index() {
    let ix: Indexer<4> = Indexer::from_sizes([2, 3, 4, 5]);
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..4 {
                for l in 0..5 {
                    let c = [i, j, k, l];
                    assert_eq!(ix.coords(ix.index(c)), c);
                }
            }
        }
    }
}

#[test]
fn test_volume_counts_reachable_tuples() {
    let data = fill_linear(24);
    let view: MdView<'_, f64, 3> = MdView::new(&data, [2, 3, 4]).unwrap();
    let mut reached = 0;
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..4 {
                let _ = view.get([i, j, k]);
                reached += 1;
            }
        }
    }
    assert_eq!(view.volume(), reached);
}

#[test]
fn test_volume_zero_when_unbound() {
    let view: MdView<'_, f64, 3> = MdView::unbound([2, 3, 4]);
    assert_eq!(view.volume(), 0);
}

#[test]
fn test_slice_chain_to_scalar_rank() {
    // Slicing all the way down: 3D -> 2D -> 1D, each step sharing the buffer.
    let data = fill_linear(24);
    let view: MdView<'_, f64, 3> = MdView::new(&data, [2, 3, 4]).unwrap();
    let plane: MdView<'_, f64, 2> = view.slice(2, 3);
    let line: MdView<'_, f64, 1> = plane.slice(0, 1);

    for j in 0..3 {
        assert_relative_eq!(*line.get([j]), *view.get([1, j, 3]), epsilon = 1e-12);
    }
}

#[test]
fn test_permute_then_inverse_is_identity() {
    let data = fill_linear(24);
    let view: MdView<'_, f64, 3> = MdView::new(&data, [2, 3, 4]).unwrap();
    let back = view.permute([1, 2, 0]).permute([2, 0, 1]);
    assert_eq!(back.sizes(), view.sizes());
    assert_eq!(back.indexer(), view.indexer());
}

#[test]
fn test_permuted_view_addresses_parent_elements() {
    let data = fill_linear(60);
    let view: MdView<'_, f64, 3> = MdView::new(&data, [3, 4, 5]).unwrap();
    let p = view.permute([2, 0, 1]);
    for i in 0..3 {
        for j in 0..4 {
            for k in 0..5 {
                assert_relative_eq!(*p.get([k, i, j]), *view.get([i, j, k]), epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn test_transpose_of_slice() {
    // Derivations compose: slice a 3D view, then transpose the result.
    let data = fill_linear(24);
    let view: MdView<'_, f64, 3> = MdView::new(&data, [2, 3, 4]).unwrap();
    let plane: MdView<'_, f64, 2> = view.slice(0, 1);
    let t = plane.transpose();
    for j in 0..3 {
        for k in 0..4 {
            assert_relative_eq!(*t.get([k, j]), *view.get([1, j, k]), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_aliasing_views_observe_writes() {
    let mut data = vec![0.0f64; 12];
    {
        let mut view: MdViewMut<'_, f64, 2> = MdViewMut::new(&mut data, [3, 4]).unwrap();
        for i in 0..3 {
            for j in 0..4 {
                view.set([i, j], (10 * i + j) as f64);
            }
        }
    }
    // A fresh immutable view and its derivations all read the same buffer.
    let view: MdView<'_, f64, 2> = MdView::new(&data, [3, 4]).unwrap();
    let t = view.transpose();
    let col: MdView<'_, f64, 1> = view.slice(0, 2);
    assert_relative_eq!(*view.get([2, 1]), 21.0, epsilon = 1e-12);
    assert_relative_eq!(*t.get([1, 2]), 21.0, epsilon = 1e-12);
    assert_relative_eq!(*col.get([1]), 21.0, epsilon = 1e-12);
}

#[test]
fn test_mut_permute_writes_through() {
    let mut data = vec![0i64; 24];
    let view: MdViewMut<'_, i64, 3> = MdViewMut::new(&mut data, [2, 3, 4]).unwrap();
    let mut p = view.permute([2, 0, 1]);
    p.set([3, 1, 2], 7);
    // (1, 2, 3) under the canonical [2, 3, 4] layout: 1 + 2*2 + 3*6 = 23.
    assert_eq!(data[23], 7);
}

#[test]
fn test_explicit_indexer_window() {
    // A 2x2 window into a 4x4 canonical layout, starting at (1, 1).
    let data: Vec<i64> = (0..16).collect();
    let base: Indexer<2> = Indexer::from_sizes([4, 4]);
    let window = Indexer::new(*base.coeffs(), base.index([1, 1]));
    let view = MdView::with_indexer(&data, [2, 2], window).unwrap();
    for i in 0..2 {
        for j in 0..2 {
            assert_eq!(*view.get([i, j]), ((i + 1) + 4 * (j + 1)) as i64);
        }
    }
}

#[test]
fn test_display_golden_2d() {
    let data: Vec<i32> = (0..6).collect();
    let view: MdView<'_, i32, 2> = MdView::new(&data, [3, 2]).unwrap();
    assert_eq!(format!("{view:4}"), "   0   3\n   1   4\n   2   5\n");
}

#[test]
fn test_construction_errors_are_descriptive() {
    let data = [0i32; 6];
    let err = MdView::<'_, i32, 2>::new(&data, [0, 3]).unwrap_err();
    assert_eq!(err.to_string(), "size 0 for dim 0");

    let err = MdView::<'_, i32, 2>::new(&data, [3, 4]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "view reaches offset 11 outside buffer of 6 elements"
    );
}
