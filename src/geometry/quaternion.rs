use std::fmt;
use std::ops::Mul;

use crate::error::Result;
use crate::geometry::Frame;
use crate::math::quaternion as algebra;

/// A rotation/orientation quaternion `q = w + xi + yj + zk`.
///
/// `w` is the scalar (real) part, `x`, `y`, `z` the vector (imaginary)
/// part. Any four reals are accepted at construction: unit length and
/// canonical sign are properties checked or produced on demand, never
/// maintained invariants, so callers that need a rotation must unitize
/// explicitly.
///
/// All math delegates to the free functions in
/// [`crate::math::quaternion`]; this type is a thin value-semantics
/// wrapper. Operations return new instances except the explicit in-place
/// pair [`Quaternion::unitize`] / [`Quaternion::canonize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Creates a quaternion from its four components.
    #[must_use]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation, `1 + 0i + 0j + 0k`.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Wraps the rotation of a [`Frame`] as a quaternion.
    #[must_use]
    pub fn from_frame(frame: &Frame) -> Self {
        let [w, x, y, z] = frame.quaternion();
        Self::new(w, x, y, z)
    }

    /// Returns the components in `[w, x, y, z]` order.
    #[must_use]
    pub fn wxyz(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Returns the components in `[x, y, z, w]` order.
    #[must_use]
    pub fn xyzw(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns the conjugate: vector part negated, scalar part kept.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::from(algebra::conjugate(self.wxyz()))
    }

    /// Returns the Euclidean norm of the quaternion as a 4-vector.
    #[must_use]
    pub fn norm(&self) -> f64 {
        algebra::norm(self.wxyz())
    }

    /// Returns `true` if the quaternion is unit-length within tolerance.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        algebra::is_unit(self.wxyz())
    }

    /// Returns a unit-length copy of the quaternion.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GirumError::InvalidValue`] if the norm is zero.
    pub fn unitized(&self) -> Result<Self> {
        Ok(Self::from(algebra::unitize(self.wxyz())?))
    }

    /// Scales the quaternion to unit length in place.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GirumError::InvalidValue`] if the norm is zero;
    /// the receiver is left untouched on error.
    pub fn unitize(&mut self) -> Result<()> {
        let [w, x, y, z] = algebra::unitize(self.wxyz())?;
        self.w = w;
        self.x = x;
        self.y = y;
        self.z = z;
        Ok(())
    }

    /// Returns a copy in canonical sign form, so that `q` and `-q`
    /// (the same rotation) map to one representative.
    #[must_use]
    pub fn canonized(&self) -> Self {
        Self::from(algebra::canonize(self.wxyz()))
    }

    /// Applies the canonical sign form in place.
    pub fn canonize(&mut self) {
        let [w, x, y, z] = algebra::canonize(self.wxyz());
        self.w = w;
        self.x = x;
        self.y = y;
        self.z = z;
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(wxyz: [f64; 4]) -> Self {
        Self::new(wxyz[0], wxyz[1], wxyz[2], wxyz[3])
    }
}

/// Hamilton product `r * q`: applying rotation `r` to orientation `q`.
/// Not commutative. Both operands are left untouched.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::from(algebra::multiply(self.wxyz(), other.wxyz()))
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion = [{}, {}, {}, {}]",
            self.w, self.x, self.y, self.z
        )
    }
}
