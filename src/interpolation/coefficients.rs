//! Inverse of the bicubic Hermite system on the unit square.
//!
//! The surface `g(t, u) = sum a[4i + j] * t^i * u^j` over `[0, 1] x [0, 1]` is
//! fully determined by its value, its two first partials and its mixed
//! partial at the four corners. [`INV_BICUBIC_COEFF`] maps those sixteen
//! numbers, ordered
//!
//! ```text
//!  0..4   f   at (0,0) (0,1) (1,0) (1,1)
//!  4..8   f_t at (0,0) (0,1) (1,0) (1,1)
//!  8..12  f_u at (0,0) (0,1) (1,0) (1,1)
//! 12..16  f_tu at (0,0) (0,1) (1,0) (1,1)
//! ```
//!
//! to the sixteen coefficients.

/// Corner data to bicubic coefficients.
#[rustfmt::skip]
pub const INV_BICUBIC_COEFF: [[f64; 16]; 16] = [
    [ 1.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,   1.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0],
    [-3.0,  3.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,  -2.0, -1.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0],
    [ 2.0, -2.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,   1.0,  1.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,   1.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,   1.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,  -3.0,  3.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,  -2.0, -1.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,   2.0, -2.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,   1.0,  1.0,  0.0,  0.0],
    [-3.0,  0.0,  3.0,  0.0,  -2.0,  0.0, -1.0,  0.0,   0.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,  -3.0,  0.0,  3.0,  0.0,  -2.0,  0.0, -1.0,  0.0],
    [ 9.0, -9.0, -9.0,  9.0,   6.0, -6.0,  3.0, -3.0,   6.0,  3.0, -6.0, -3.0,   4.0,  2.0,  2.0,  1.0],
    [-6.0,  6.0,  6.0, -6.0,  -4.0,  4.0, -2.0,  2.0,  -3.0, -3.0,  3.0,  3.0,  -2.0, -2.0, -1.0, -1.0],
    [ 2.0,  0.0, -2.0,  0.0,   1.0,  0.0,  1.0,  0.0,   0.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0],
    [ 0.0,  0.0,  0.0,  0.0,   0.0,  0.0,  0.0,  0.0,   2.0,  0.0, -2.0,  0.0,   1.0,  0.0,  1.0,  0.0],
    [-6.0,  6.0,  6.0, -6.0,  -3.0,  3.0, -3.0,  3.0,  -4.0, -2.0,  4.0,  2.0,  -2.0, -1.0, -2.0, -1.0],
    [ 4.0, -4.0, -4.0,  4.0,   2.0, -2.0,  2.0, -2.0,   2.0,  2.0, -2.0, -2.0,   1.0,  1.0,  1.0,  1.0],
];

/// Multiply the corner data vector by [`INV_BICUBIC_COEFF`].
#[inline]
pub fn bicubic_coefficients(field: &[f64; 16]) -> [f64; 16] {
    let mut coeff = [0.0; 16];
    for (c, row) in coeff.iter_mut().zip(INV_BICUBIC_COEFF.iter()) {
        *c = row.iter().zip(field.iter()).map(|(m, f)| m * f).sum();
    }
    coeff
}
