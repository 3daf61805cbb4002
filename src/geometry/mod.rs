pub mod arc_length;
pub mod curve;
pub mod knot_curve;
pub mod polyline;

pub use arc_length::ArcLengthTable;
pub use curve::{Curve, CurveDomain, TorusKnot};
pub use knot_curve::{CurveParameters, KnotCurve};
pub use polyline::Polyline;
