use crate::math::Point3;

/// An ordered sequence of 3D points joined by straight segments.
///
/// For closed polylines the last point connects back to the first, as in a
/// line loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Creates a polyline from points.
    #[must_use]
    pub fn new(points: Vec<Point3>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Returns the number of line segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Iterates over the segments as `(start, end)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Point3, &Point3)> + '_ {
        let n = self.points.len();
        (0..self.segment_count()).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
    }

    /// Returns the summed segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| (b - a).norm()).sum()
    }
}
