use serde::{Deserialize, Serialize};

/// Affine map from a data domain onto a pixel range.
///
/// A degenerate domain (`start == end`) maps every value to the midpoint of
/// the range and inverts every pixel to `domain_start`. The range may be
/// descending, which is how the value axis gets its inverted orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let span = self.domain_end - self.domain_start;
        span == 0.0 || !span.is_finite()
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return (self.range_start + self.range_end) / 2.0;
        }
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if self.is_degenerate() || range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// `count` evenly spaced domain values from start to end inclusive.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        if count == 1 || self.is_degenerate() {
            return vec![self.domain_start];
        }

        let span = self.domain_end - self.domain_start;
        let denominator = (count - 1) as f64;
        (0..count)
            .map(|index| self.domain_start + span * (index as f64) / denominator)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn round_trip_within_tolerance() {
        let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0));
        let px = scale.domain_to_pixel(42.5);
        assert!((scale.pixel_to_domain(px) - 42.5).abs() <= 1e-9);
    }

    #[test]
    fn descending_range_inverts_orientation() {
        let scale = LinearScale::new((0.0, 12.0), (140.0, 0.0));
        assert_eq!(scale.domain_to_pixel(0.0), 140.0);
        assert_eq!(scale.domain_to_pixel(12.0), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 540.0));
        assert!(scale.is_degenerate());
        assert_eq!(scale.domain_to_pixel(5.0), 270.0);
        assert_eq!(scale.domain_to_pixel(99.0), 270.0);
        assert_eq!(scale.pixel_to_domain(12.0), 5.0);
        assert_eq!(scale.ticks(4), vec![5.0]);
    }

    #[test]
    fn ticks_cover_domain_inclusive() {
        let scale = LinearScale::new((0.0, 12.0), (140.0, 0.0));
        assert_eq!(scale.ticks(4), vec![0.0, 4.0, 8.0, 12.0]);
        assert!(scale.ticks(0).is_empty());
    }
}
