use nalgebra::{Rotation3, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::error::{GirumError, Result};
use crate::math::{Matrix3, Point3, Vector3, TOLERANCE};

/// A right-handed coordinate frame: an origin point and an orthonormal
/// basis.
///
/// Constructed from an origin and two direction vectors; the first is
/// normalized, the second is re-orthogonalized against it, and the third
/// axis is their cross product. A frame is treated as immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    point: Point3,
    xaxis: Vector3,
    yaxis: Vector3,
    zaxis: Vector3,
}

impl Frame {
    /// Creates a new frame from an origin and two in-plane directions.
    ///
    /// # Errors
    ///
    /// Returns an error if either direction is zero-length or the two
    /// directions are parallel.
    pub fn new(point: Point3, xaxis: Vector3, yaxis: Vector3) -> Result<Self> {
        let x_len = xaxis.norm();
        if x_len < TOLERANCE {
            return Err(GirumError::ZeroVector);
        }
        let xaxis = xaxis / x_len;

        let y_len = yaxis.norm();
        if y_len < TOLERANCE {
            return Err(GirumError::ZeroVector);
        }
        let yaxis = yaxis / y_len;

        // Gram-Schmidt: remove the x component so the basis is orthonormal
        // even for slightly skewed input.
        let yaxis = yaxis - xaxis * xaxis.dot(&yaxis);
        let y_len = yaxis.norm();
        if y_len < TOLERANCE {
            return Err(GirumError::Degenerate(
                "frame axes are parallel".into(),
            ));
        }
        let yaxis = yaxis / y_len;

        let zaxis = xaxis.cross(&yaxis);

        Ok(Self {
            point,
            xaxis,
            yaxis,
            zaxis,
        })
    }

    /// The world XY frame: origin at zero, axes aligned with the world.
    #[must_use]
    pub fn world_xy() -> Self {
        Self {
            point: Point3::origin(),
            xaxis: Vector3::x(),
            yaxis: Vector3::y(),
            zaxis: Vector3::z(),
        }
    }

    /// Creates a frame at `point` oriented by a `[w, x, y, z]` quaternion.
    ///
    /// The quaternion is unitized before conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if the quaternion has zero norm.
    pub fn from_quaternion(point: Point3, wxyz: [f64; 4]) -> Result<Self> {
        let [w, x, y, z] = crate::math::quaternion::unitize(wxyz)?;
        let rotation = UnitQuaternion::new_unchecked(nalgebra::Quaternion::new(w, x, y, z))
            .to_rotation_matrix();
        let m = rotation.matrix();
        Ok(Self {
            point,
            xaxis: m.column(0).into_owned(),
            yaxis: m.column(1).into_owned(),
            zaxis: m.column(2).into_owned(),
        })
    }

    /// Returns the origin of the frame.
    #[must_use]
    pub fn point(&self) -> &Point3 {
        &self.point
    }

    /// Returns the X axis (unit length).
    #[must_use]
    pub fn xaxis(&self) -> &Vector3 {
        &self.xaxis
    }

    /// Returns the Y axis (unit length).
    #[must_use]
    pub fn yaxis(&self) -> &Vector3 {
        &self.yaxis
    }

    /// Returns the Z axis (unit length, `xaxis x yaxis`).
    #[must_use]
    pub fn zaxis(&self) -> &Vector3 {
        &self.zaxis
    }

    /// Returns the normal of the frame's XY plane (alias for [`Self::zaxis`]).
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.zaxis
    }

    /// Returns the frame's rotation as a `[w, x, y, z]` quaternion.
    #[must_use]
    pub fn quaternion(&self) -> [f64; 4] {
        let rotation = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[
            self.xaxis, self.yaxis, self.zaxis,
        ]));
        let q = UnitQuaternion::from_rotation_matrix(&rotation);
        [q.w, q.i, q.j, q.k]
    }
}
