use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::error::{GirumError, Result};
use crate::geometry::Frame;
use crate::math::{close, Point3, Vector3, TOLERANCE};

use super::{Circle, Curve, CurveDomain};

/// A circular arc: a segment of a circle defined by a coordinate frame,
/// a radius, and start and end angles.
///
/// The center of the underlying circle is at the origin of the frame.
/// Angles are measured in radians from the frame's X axis towards its
/// Y axis, and each must lie in `[0, 2*pi]`. The sweep runs from
/// `start_angle` to `end_angle`.
///
/// The scalar fields are nullable: an arc can be constructed bare via
/// [`Arc::unset`] and filled in through the setters, each of which
/// validates its domain on every assignment. Reading an unassigned
/// `radius` or `end_angle` is a [`GirumError::NotSet`] error, while an
/// unassigned `start_angle` silently reads as `0.0`. The asymmetry is
/// inherited behavior that callers rely on; do not regularize it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ArcData", into = "ArcData")]
pub struct Arc {
    frame: Frame,
    radius: Option<f64>,
    start_angle: Option<f64>,
    end_angle: Option<f64>,
}

/// One positional component of an [`Arc`].
///
/// Index 0 holds the frame; indices 1 (radius), 2 (start angle) and
/// 3 (end angle) hold numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum ArcComponent {
    Frame(Frame),
    Number(f64),
}

/// Serialization record for [`Arc`]: the four named fields, with unset
/// scalars emitted as null. Deserialization routes every number through
/// the validating setters.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArcData {
    frame: Frame,
    radius: Option<f64>,
    start_angle: Option<f64>,
    end_angle: Option<f64>,
}

impl Arc {
    /// Creates a new arc, validating every scalar.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::InvalidValue`] if the radius is not strictly
    /// positive or either angle lies outside `[0, 2*pi]`.
    pub fn new(frame: Frame, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        let mut arc = Self::unset(frame);
        arc.set_radius(radius)?;
        arc.set_start_angle(start_angle)?;
        arc.set_end_angle(end_angle)?;
        Ok(arc)
    }

    /// Creates an arc with the default angle span: a half circle from
    /// `0` to `pi`.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::InvalidValue`] if the radius is not strictly
    /// positive.
    pub fn with_defaults(frame: Frame, radius: f64) -> Result<Self> {
        Self::new(frame, radius, 0.0, PI)
    }

    /// Creates an arc with no radius or angles assigned.
    ///
    /// Reading `radius` or `end_angle` before assigning them is a
    /// [`GirumError::NotSet`] error; `start_angle` reads as `0.0`.
    #[must_use]
    pub fn unset(frame: Frame) -> Self {
        Self {
            frame,
            radius: None,
            start_angle: None,
            end_angle: None,
        }
    }

    /// Creates an arc from a circle and start and end angles.
    ///
    /// The circle's frame and radius are copied; mutating the arc
    /// afterwards leaves the source circle untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::InvalidValue`] if either angle lies outside
    /// `[0, 2*pi]`.
    pub fn from_circle(circle: &Circle, start_angle: f64, end_angle: f64) -> Result<Self> {
        Self::new(
            circle.frame().clone(),
            circle.radius(),
            start_angle,
            end_angle,
        )
    }

    /// Returns the coordinate frame of the arc.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Replaces the coordinate frame of the arc.
    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    /// Returns the radius of the arc's circle.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] if the radius was never assigned.
    pub fn radius(&self) -> Result<f64> {
        self.radius.ok_or(GirumError::NotSet("radius"))
    }

    /// Sets the radius of the arc's circle.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::InvalidValue`] if the value is not strictly
    /// positive.
    pub fn set_radius(&mut self, value: f64) -> Result<()> {
        if value <= 0.0 {
            return Err(GirumError::InvalidValue {
                parameter: "radius",
                value,
                reason: "radius must be greater than zero",
            });
        }
        self.radius = Some(value);
        Ok(())
    }

    /// Returns the start angle, defaulting to `0.0` when never assigned.
    ///
    /// Unlike [`Arc::end_angle`] this never fails; the lazy zero default
    /// is a documented quirk of the arc contract.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle.unwrap_or(0.0)
    }

    /// Sets the start angle.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::InvalidValue`] if the value lies outside
    /// `[0, 2*pi]`. The bounds themselves are storable.
    pub fn set_start_angle(&mut self, value: f64) -> Result<()> {
        if !(0.0..=TAU).contains(&value) {
            return Err(GirumError::InvalidValue {
                parameter: "start_angle",
                value,
                reason: "angle must satisfy 0 <= angle <= 2*pi",
            });
        }
        self.start_angle = Some(value);
        Ok(())
    }

    /// Returns the end angle.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] if the end angle was never
    /// assigned.
    pub fn end_angle(&self) -> Result<f64> {
        self.end_angle.ok_or(GirumError::NotSet("end_angle"))
    }

    /// Sets the end angle.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::InvalidValue`] if the value lies outside
    /// `[0, 2*pi]`. The bounds themselves are storable.
    pub fn set_end_angle(&mut self, value: f64) -> Result<()> {
        if !(0.0..=TAU).contains(&value) {
            return Err(GirumError::InvalidValue {
                parameter: "end_angle",
                value,
                reason: "angle must satisfy 0 <= angle <= 2*pi",
            });
        }
        self.end_angle = Some(value);
        Ok(())
    }

    /// Returns the underlying circle (frame + radius).
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] if the radius was never assigned.
    pub fn circle(&self) -> Result<Circle> {
        Circle::new(self.frame.clone(), self.radius()?)
    }

    /// Returns the center of the arc's circle (the frame origin).
    #[must_use]
    pub fn center(&self) -> &Point3 {
        self.frame.point()
    }

    /// Returns the diameter of the arc's circle.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] if the radius was never assigned.
    pub fn diameter(&self) -> Result<f64> {
        Ok(2.0 * self.radius()?)
    }

    /// Returns the circumference of the arc's circle.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] if the radius was never assigned.
    pub fn circumference(&self) -> Result<f64> {
        Ok(self.diameter()? * PI)
    }

    /// Returns the sweep angle, `end_angle - start_angle`.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] if the end angle was never
    /// assigned.
    pub fn angle(&self) -> Result<f64> {
        Ok(self.end_angle()? - self.start_angle())
    }

    /// Returns the arc length, `radius * angle`.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] if the radius or end angle was
    /// never assigned.
    pub fn length(&self) -> Result<f64> {
        Ok(self.radius()? * self.angle()?)
    }

    /// Returns `true` if the sweep covers the full circle within
    /// tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] if the end angle was never
    /// assigned.
    pub fn is_circle(&self) -> Result<bool> {
        Ok(close((self.angle()?.abs() - TAU).abs(), 0.0))
    }

    /// Returns the start point of the arc.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] if the radius was never assigned.
    pub fn start(&self) -> Result<Point3> {
        self.evaluate(self.start_angle())
    }

    /// Returns the end point of the arc.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] if the radius or end angle was
    /// never assigned.
    pub fn end(&self) -> Result<Point3> {
        self.evaluate(self.end_angle()?)
    }

    /// Checks that the sweep angle describes a geometrically valid arc.
    ///
    /// The setters bound each angle to `[0, 2*pi]` individually, so this
    /// only trips when `end_angle < start_angle`, when the sweep is
    /// degenerate (zero), or when rounding pushes the sweep past `2*pi`
    /// by more than [`TOLERANCE`].
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::InvalidGeometry`] when the sweep lies
    /// outside `(0, 2*pi]`, or [`GirumError::NotSet`] if the end angle
    /// was never assigned.
    pub fn verify(&self) -> Result<()> {
        let angle = self.angle()?;
        if angle <= 0.0 || angle > TAU + TOLERANCE {
            return Err(GirumError::InvalidGeometry(format!(
                "sweep angle must satisfy 0 < angle <= 2*pi, currently: {angle}"
            )));
        }
        Ok(())
    }

    /// Returns the component at `index` (0 = frame, 1 = radius,
    /// 2 = start angle, 3 = end angle).
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::IndexOutOfRange`] for an index outside
    /// `0..=3`, or [`GirumError::NotSet`] when the addressed field was
    /// never assigned.
    pub fn component(&self, index: usize) -> Result<ArcComponent> {
        match index {
            0 => Ok(ArcComponent::Frame(self.frame.clone())),
            1 => Ok(ArcComponent::Number(self.radius()?)),
            2 => Ok(ArcComponent::Number(self.start_angle())),
            3 => Ok(ArcComponent::Number(self.end_angle()?)),
            _ => Err(GirumError::IndexOutOfRange(index)),
        }
    }

    /// Assigns the component at `index`, re-validating through the
    /// corresponding setter.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::IndexOutOfRange`] for an index outside
    /// `0..=3`, or [`GirumError::InvalidValue`] when the value kind does
    /// not match the slot or fails the slot's validation.
    pub fn set_component(&mut self, index: usize, value: ArcComponent) -> Result<()> {
        match (index, value) {
            (0, ArcComponent::Frame(frame)) => {
                self.set_frame(frame);
                Ok(())
            }
            (1, ArcComponent::Number(v)) => self.set_radius(v),
            (2, ArcComponent::Number(v)) => self.set_start_angle(v),
            (3, ArcComponent::Number(v)) => self.set_end_angle(v),
            (0, ArcComponent::Number(v)) => Err(GirumError::InvalidValue {
                parameter: "frame",
                value: v,
                reason: "component 0 expects a frame",
            }),
            (1..=3, ArcComponent::Frame(_)) => Err(GirumError::InvalidValue {
                parameter: "component",
                value: f64::NAN,
                reason: "components 1..=3 expect a number",
            }),
            (index, _) => Err(GirumError::IndexOutOfRange(index)),
        }
    }

    /// Returns the four components in positional order.
    ///
    /// # Errors
    ///
    /// Returns [`GirumError::NotSet`] when the radius or end angle was
    /// never assigned.
    pub fn components(&self) -> Result<[ArcComponent; 4]> {
        Ok([
            ArcComponent::Frame(self.frame.clone()),
            ArcComponent::Number(self.radius()?),
            ArcComponent::Number(self.start_angle()),
            ArcComponent::Number(self.end_angle()?),
        ])
    }
}

/// Structural equality against the same concrete type only, componentwise.
/// The start angle is compared by its effective value so an unset start
/// and an explicit `0.0` compare equal.
impl PartialEq for Arc {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.frame == other.frame
            && self.radius == other.radius
            && self.start_angle() == other.start_angle()
            && self.end_angle == other.end_angle
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let radius = self.radius()?;
        let x = radius * t.cos();
        let y = radius * t.sin();
        Ok(self.frame.point() + self.frame.xaxis() * x + self.frame.yaxis() * y)
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        self.radius()?;
        Ok(self.frame.xaxis() * -t.sin() + self.frame.yaxis() * t.cos())
    }

    fn domain(&self) -> Result<CurveDomain> {
        Ok(CurveDomain::new(self.start_angle(), self.end_angle()?))
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn is_periodic(&self) -> bool {
        false
    }
}

impl TryFrom<ArcData> for Arc {
    type Error = GirumError;

    fn try_from(data: ArcData) -> Result<Self> {
        let mut arc = Self::unset(data.frame);
        if let Some(radius) = data.radius {
            arc.set_radius(radius)?;
        }
        if let Some(start_angle) = data.start_angle {
            arc.set_start_angle(start_angle)?;
        }
        if let Some(end_angle) = data.end_angle {
            arc.set_end_angle(end_angle)?;
        }
        Ok(arc)
    }
}

impl From<Arc> for ArcData {
    fn from(arc: Arc) -> Self {
        Self {
            frame: arc.frame,
            radius: arc.radius,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn half_arc(radius: f64) -> Arc {
        Arc::with_defaults(Frame::world_xy(), radius).unwrap()
    }

    #[test]
    fn defaults_span_half_circle() {
        let a = half_arc(1.0);
        assert!((a.start_angle() - 0.0).abs() < TOLERANCE);
        assert!((a.end_angle().unwrap() - PI).abs() < TOLERANCE);
        assert!((a.angle().unwrap() - PI).abs() < TOLERANCE);
    }

    #[test]
    fn derived_circle_measures() {
        let a = Arc::new(Frame::world_xy(), 3.0, 0.5, 2.5).unwrap();
        assert!((a.circle().unwrap().radius() - 3.0).abs() < TOLERANCE);
        assert!((a.diameter().unwrap() - 6.0).abs() < TOLERANCE);
        assert!((a.circumference().unwrap() - 6.0 * PI).abs() < TOLERANCE);
    }

    #[test]
    fn angle_and_length() {
        let a = Arc::new(Frame::world_xy(), 2.0, 0.5, 1.5).unwrap();
        assert_abs_diff_eq!(a.angle().unwrap(), 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(a.length().unwrap(), 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn half_circle_scenario() {
        let a = Arc::new(Frame::world_xy(), 2.0, 0.0, PI).unwrap();
        assert!((a.length().unwrap() - 2.0 * PI).abs() < TOLERANCE);
        assert!(!a.is_circle().unwrap());
        assert!((a.center() - Point3::origin()).norm() < TOLERANCE);
        assert!(!a.is_closed());
        assert!(!a.is_periodic());
    }

    #[test]
    fn full_sweep_is_circle() {
        let a = Arc::new(Frame::world_xy(), 1.0, 0.0, TAU).unwrap();
        assert!(a.is_circle().unwrap());
        a.verify().unwrap();
    }

    #[test]
    fn invalid_radius_is_rejected() {
        let mut a = half_arc(1.0);
        assert!(a.set_radius(0.0).is_err());
        assert!(a.set_radius(-1.0).is_err());
        // failed assignment leaves the previous value in place
        assert!((a.radius().unwrap() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn out_of_domain_angles_are_rejected() {
        let mut a = half_arc(1.0);
        assert!(a.set_start_angle(7.0).is_err());
        assert!(a.set_start_angle(-0.1).is_err());
        assert!(a.set_end_angle(TAU + 0.1).is_err());
        // bounds themselves are storable
        a.set_start_angle(0.0).unwrap();
        a.set_end_angle(TAU).unwrap();
    }

    #[test]
    fn unset_fields_asymmetry() {
        let a = Arc::unset(Frame::world_xy());
        assert!(matches!(a.radius(), Err(GirumError::NotSet("radius"))));
        assert!(matches!(
            a.end_angle(),
            Err(GirumError::NotSet("end_angle"))
        ));
        // start_angle silently defaults instead
        assert!((a.start_angle() - 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn from_circle_preserves_frame_and_radius() {
        let circle = Circle::new(Frame::world_xy(), 2.5).unwrap();
        let a = Arc::from_circle(&circle, 0.25, 1.75).unwrap();
        assert_eq!(a.circle().unwrap(), circle);
        assert!((a.start_angle() - 0.25).abs() < TOLERANCE);
        assert!((a.end_angle().unwrap() - 1.75).abs() < TOLERANCE);
    }

    #[test]
    fn mutating_arc_frame_leaves_source_circle_alone() {
        let circle = Circle::new(Frame::world_xy(), 1.0).unwrap();
        let mut a = Arc::from_circle(&circle, 0.0, PI).unwrap();
        let moved = Frame::new(Point3::new(5.0, 0.0, 0.0), Vector3::x(), Vector3::y()).unwrap();
        a.set_frame(moved);
        assert_eq!(circle.frame(), &Frame::world_xy());
    }

    #[test]
    fn verify_rejects_reversed_and_degenerate_sweeps() {
        let reversed = Arc::new(Frame::world_xy(), 1.0, 2.0, 1.0).unwrap();
        assert!(matches!(
            reversed.verify(),
            Err(GirumError::InvalidGeometry(_))
        ));

        let degenerate = Arc::new(Frame::world_xy(), 1.0, 1.0, 1.0).unwrap();
        assert!(degenerate.verify().is_err());

        let valid = Arc::new(Frame::world_xy(), 1.0, 0.0, FRAC_PI_2).unwrap();
        valid.verify().unwrap();
    }

    #[test]
    fn component_access() {
        let a = Arc::new(Frame::world_xy(), 2.0, 0.5, 1.5).unwrap();
        assert_eq!(
            a.component(0).unwrap(),
            ArcComponent::Frame(Frame::world_xy())
        );
        assert_eq!(a.component(1).unwrap(), ArcComponent::Number(2.0));
        assert_eq!(a.component(2).unwrap(), ArcComponent::Number(0.5));
        assert_eq!(a.component(3).unwrap(), ArcComponent::Number(1.5));
        assert!(matches!(
            a.component(4),
            Err(GirumError::IndexOutOfRange(4))
        ));
    }

    #[test]
    fn component_assignment() {
        let mut a = half_arc(1.0);
        a.set_component(1, ArcComponent::Number(4.0)).unwrap();
        assert!((a.radius().unwrap() - 4.0).abs() < TOLERANCE);
        assert!(a.set_component(1, ArcComponent::Number(-1.0)).is_err());
        assert!(a
            .set_component(0, ArcComponent::Number(1.0))
            .is_err());
        assert!(a
            .set_component(2, ArcComponent::Frame(Frame::world_xy()))
            .is_err());
        assert!(matches!(
            a.set_component(9, ArcComponent::Number(1.0)),
            Err(GirumError::IndexOutOfRange(9))
        ));
    }

    #[test]
    fn components_iterate_in_positional_order() {
        let a = Arc::new(Frame::world_xy(), 2.0, 0.5, 1.5).unwrap();
        let components = a.components().unwrap();
        assert_eq!(components.len(), 4);
        assert_eq!(components[1], ArcComponent::Number(2.0));
        assert!(Arc::unset(Frame::world_xy()).components().is_err());
    }

    #[test]
    fn equality_is_componentwise() {
        let a = Arc::new(Frame::world_xy(), 1.0, 0.0, PI).unwrap();
        let b = Arc::new(Frame::world_xy(), 1.0, 0.0, PI).unwrap();
        let c = Arc::new(Frame::world_xy(), 2.0, 0.0, PI).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn unset_start_angle_compares_equal_to_explicit_zero() {
        let mut a = Arc::unset(Frame::world_xy());
        a.set_radius(1.0).unwrap();
        a.set_end_angle(PI).unwrap();
        let b = Arc::new(Frame::world_xy(), 1.0, 0.0, PI).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn evaluate_endpoints() {
        let a = Arc::new(Frame::world_xy(), 2.0, 0.0, FRAC_PI_2).unwrap();
        let start = a.start().unwrap();
        let end = a.end().unwrap();
        assert!((start - Point3::new(2.0, 0.0, 0.0)).norm() < 1e-9);
        assert!((end - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn domain_follows_angles() {
        let a = Arc::new(Frame::world_xy(), 1.0, 0.5, 1.5).unwrap();
        let d = a.domain().unwrap();
        assert!((d.t_min - 0.5).abs() < TOLERANCE);
        assert!((d.t_max - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn serde_round_trip() {
        let a = Arc::new(Frame::world_xy(), 2.0, 0.5, 1.5).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        let back: Arc = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn serde_round_trip_with_unset_fields() {
        let a = Arc::unset(Frame::world_xy());
        let json = serde_json::to_string(&a).unwrap();
        let back: Arc = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
        assert!(back.radius().is_err());
    }

    #[test]
    fn serde_rejects_out_of_domain_records() {
        let json = format!(
            r#"{{"frame":{},"radius":-1.0,"start_angle":0.0,"end_angle":1.0}}"#,
            serde_json::to_string(&Frame::world_xy()).unwrap()
        );
        assert!(serde_json::from_str::<Arc>(&json).is_err());

        let json = format!(
            r#"{{"frame":{},"radius":1.0,"start_angle":7.0,"end_angle":1.0}}"#,
            serde_json::to_string(&Frame::world_xy()).unwrap()
        );
        assert!(serde_json::from_str::<Arc>(&json).is_err());
    }
}
