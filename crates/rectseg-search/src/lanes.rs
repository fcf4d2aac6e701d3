//! Horizontal-offset lane kernel for single-channel scores
//!
//! For a fixed shape and top row, the scores of consecutive left columns
//! `x0, x0 + 1, ...` only read consecutive cells of two integral image rows.
//! [`row_max`] evaluates [`LANES`] offsets per step as plain fixed-size array
//! arithmetic, which the compiler turns into packed vector instructions, and
//! finishes the leftover offsets one at a time.
//!
//! Every lane performs exactly the arithmetic of the scalar scorer, so the
//! maximum is the same bit pattern whatever the lane width.

use crate::channels::Channels;
use multiversion::multiversion;

/// Number of horizontal offsets scored per step
pub const LANES: usize = 4;

/// Best single-channel separation score of a `width`-wide window over every
/// horizontal offset between two integral image rows
///
/// `top` and `bottom` are table rows `y0` and `y0 + height` (each `nx + 1`
/// cells long). `total` is the image sum and `inv_inner` / `inv_outer` the
/// reciprocal areas of the shape.
///
/// # Panics
///
/// Panics if the rows differ in length or `width` is not smaller than the
/// row length.
#[multiversion(targets = "simd")]
pub fn row_max(
    top: &[f64],
    bottom: &[f64],
    width: usize,
    total: f64,
    inv_inner: f64,
    inv_outer: f64,
) -> f64 {
    assert_eq!(top.len(), bottom.len());
    assert!(width < top.len());

    let positions = top.len() - width;
    let bottom_right = &bottom[width..];
    let bottom_left = &bottom[..positions];
    let top_right = &top[width..];
    let top_left = &top[..positions];

    let mut lanes = [f64::NEG_INFINITY; LANES];
    let packed = bottom_right
        .chunks_exact(LANES)
        .zip(bottom_left.chunks_exact(LANES))
        .zip(top_right.chunks_exact(LANES))
        .zip(top_left.chunks_exact(LANES));
    for (((br, bl), tr), tl) in packed {
        for i in 0..LANES {
            let inner = br[i].sub(bl[i]).sub(tr[i]).add(tl[i]);
            let outer = total.sub(inner);
            lanes[i] = lanes[i].max(f64::separation(inner, outer, inv_inner, inv_outer));
        }
    }

    let mut best = lanes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    for x0 in positions - positions % LANES..positions {
        let inner = bottom_right[x0]
            .sub(bottom_left[x0])
            .sub(top_right[x0])
            .add(top_left[x0]);
        let outer = total.sub(inner);
        best = best.max(f64::separation(inner, outer, inv_inner, inv_outer));
    }
    best
}
