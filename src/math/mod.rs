pub mod quaternion;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 rotation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Shared by every approximate check in the crate (`Arc::is_circle`,
/// `Quaternion::is_unit`, the sweep-angle upper bound in `Arc::verify`)
/// so that "approximately equal" means the same thing everywhere.
pub const TOLERANCE: f64 = 1e-9;

/// Returns `true` if two scalars are equal within [`TOLERANCE`].
#[must_use]
pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn close_within_tolerance() {
        assert!(close(1.0, 1.0 + 1e-12));
        assert!(close(0.0, -1e-10));
    }

    #[test]
    fn close_outside_tolerance() {
        assert!(!close(1.0, 1.0 + 1e-6));
    }
}
