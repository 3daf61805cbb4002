mod generate_curve;

pub use generate_curve::GenerateCurve;
