pub mod curve;
mod frame;
mod quaternion;

pub use curve::{Arc, ArcComponent, Circle, Curve, CurveDomain};
pub use frame::Frame;
pub use quaternion::Quaternion;
