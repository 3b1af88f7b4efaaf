//! Free quaternion-algebra functions over `[w, x, y, z]` arrays.
//!
//! Component convention: `q = w + xi + yj + zk`, with `w` the scalar
//! (real) part and `x, y, z` the vector (imaginary) part. Basis
//! multiplication follows Hamilton's rules (`ij = k`, `ji = -k`, ...).
//!
//! These are the building blocks of [`crate::geometry::Quaternion`]; they
//! operate on plain arrays so the algebra stays testable and reusable
//! without the wrapper type.

use crate::error::{GirumError, Result};
use crate::math::close;

/// Hamilton product `r * q`.
///
/// Not commutative: `multiply(r, q)` and `multiply(q, r)` differ in
/// general. If both inputs are unit-length the product is unit-length and
/// represents the rotation `r` applied to the orientation `q`.
#[must_use]
pub fn multiply(r: [f64; 4], q: [f64; 4]) -> [f64; 4] {
    let [rw, rx, ry, rz] = r;
    let [qw, qx, qy, qz] = q;
    [
        rw * qw - rx * qx - ry * qy - rz * qz,
        rw * qx + rx * qw + ry * qz - rz * qy,
        rw * qy - rx * qz + ry * qw + rz * qx,
        rw * qz + rx * qy - ry * qx + rz * qw,
    ]
}

/// Conjugate: negates the vector part, keeps the scalar part.
#[must_use]
pub fn conjugate(q: [f64; 4]) -> [f64; 4] {
    [q[0], -q[1], -q[2], -q[3]]
}

/// Euclidean norm of the quaternion viewed as a 4-vector.
#[must_use]
pub fn norm(q: [f64; 4]) -> f64 {
    (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt()
}

/// Returns `true` if the norm is 1 within [`crate::math::TOLERANCE`].
#[must_use]
pub fn is_unit(q: [f64; 4]) -> bool {
    close(norm(q), 1.0)
}

/// Scales the quaternion to unit length.
///
/// # Errors
///
/// Returns [`GirumError::InvalidValue`] if the norm is zero within
/// tolerance; the zero quaternion has no direction to preserve.
pub fn unitize(q: [f64; 4]) -> Result<[f64; 4]> {
    let n = norm(q);
    if close(n, 0.0) {
        return Err(GirumError::InvalidValue {
            parameter: "quaternion norm",
            value: n,
            reason: "cannot unitize a zero-norm quaternion",
        });
    }
    Ok([q[0] / n, q[1] / n, q[2] / n, q[3] / n])
}

/// Canonical sign form: negates all four components when the scalar part
/// is negative, so that `q` and `-q` (the same rotation) map to one
/// representative.
#[must_use]
pub fn canonize(q: [f64; 4]) -> [f64; 4] {
    if q[0] < 0.0 {
        [-q[0], -q[1], -q[2], -q[3]]
    } else {
        q
    }
}
