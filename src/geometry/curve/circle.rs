use serde::{Deserialize, Serialize};

use crate::error::{GirumError, Result};
use crate::geometry::Frame;
use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// A full circle in 3D space, defined by a coordinate frame and a radius.
///
/// The circle lies in the frame's XY plane, centered at the frame origin.
/// `P(t) = center + radius * cos(t) * xaxis + radius * sin(t) * yaxis`,
/// with the parameter domain `[0, 2*pi]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    frame: Frame,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::InvalidValue`] if the radius is not strictly
    /// positive.
    pub fn new(frame: Frame, radius: f64) -> Result<Self> {
        if radius <= 0.0 {
            return Err(GirumError::InvalidValue {
                parameter: "radius",
                value: radius,
                reason: "radius must be greater than zero",
            });
        }
        Ok(Self { frame, radius })
    }

    /// Returns the coordinate frame of the circle.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the center of the circle (the frame origin).
    #[must_use]
    pub fn center(&self) -> &Point3 {
        self.frame.point()
    }

    /// Returns the normal of the circle plane (the frame Z axis).
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        self.frame.normal()
    }

    /// Returns the diameter of the circle.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Returns the circumference of the circle.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        self.diameter() * std::f64::consts::PI
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let x = self.radius * t.cos();
        let y = self.radius * t.sin();
        Ok(self.frame.point() + self.frame.xaxis() * x + self.frame.yaxis() * y)
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        Ok(self.frame.xaxis() * -t.sin() + self.frame.yaxis() * t.cos())
    }

    fn domain(&self) -> Result<CurveDomain> {
        Ok(CurveDomain::new(0.0, std::f64::consts::TAU))
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn is_periodic(&self) -> bool {
        true
    }
}
