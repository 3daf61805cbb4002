use crate::math::TOLERANCE;

use super::Curve;

/// Default number of chord segments used to approximate arc length.
pub const DEFAULT_ARC_LENGTH_DIVISIONS: usize = 200;

/// Fewest chord segments that can trace a closed curve without collapsing.
pub const MIN_ARC_LENGTH_DIVISIONS: usize = 3;

/// Cumulative chord-length table mapping arc-length distance to curve
/// parameter.
///
/// The curve is sampled at `divisions + 1` evenly spaced parameters across
/// its domain; `lengths[i]` is the polyline length up to sample `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    lengths: Vec<f64>,
    t_min: f64,
    t_max: f64,
}

impl ArcLengthTable {
    /// Builds the table for `curve` using `divisions` chord segments.
    ///
    /// Values below [`MIN_ARC_LENGTH_DIVISIONS`] are raised to it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build<C: Curve + ?Sized>(curve: &C, divisions: usize) -> Self {
        let divisions = divisions.max(MIN_ARC_LENGTH_DIVISIONS);
        let domain = curve.domain();

        let mut lengths = Vec::with_capacity(divisions + 1);
        lengths.push(0.0);
        let mut prev = curve.evaluate(domain.t_min);
        let mut sum = 0.0;
        for i in 1..=divisions {
            let point = curve.evaluate(domain.lerp(i as f64 / divisions as f64));
            sum += (point - prev).norm();
            lengths.push(sum);
            prev = point;
        }

        Self {
            lengths,
            t_min: domain.t_min,
            t_max: domain.t_max,
        }
    }

    /// Returns the total approximated length.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Returns the number of chord segments in the table.
    #[must_use]
    pub fn divisions(&self) -> usize {
        self.lengths.len() - 1
    }

    /// Maps a distance in `[0, total_length]` to a curve parameter.
    ///
    /// Distances outside that range are clamped to the domain ends.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn parameter_at(&self, distance: f64) -> f64 {
        let divisions = self.divisions();
        let upper = self.lengths.partition_point(|&l| l <= distance);
        let i = upper.saturating_sub(1).min(divisions - 1);

        let start = self.lengths[i];
        let segment = self.lengths[i + 1] - start;
        let frac = if segment > TOLERANCE {
            ((distance - start) / segment).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let u = (i as f64 + frac) / divisions as f64;
        self.t_min + (self.t_max - self.t_min) * u
    }
}
