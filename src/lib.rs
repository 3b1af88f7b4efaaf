pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GirumError, Result};
pub use geometry::{Arc, ArcComponent, Circle, Curve, CurveDomain, Frame, Quaternion};
