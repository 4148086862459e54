use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Sample};

/// Horizontal scale from sample instants (unix ms) to plot x.
///
/// The domain is the sample extent. When every sample shares one instant the
/// scale is degenerate and places that instant at the middle of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    #[must_use]
    pub fn new(time_start_ms: i64, time_end_ms: i64, inner_width: f64) -> Self {
        Self {
            linear: LinearScale::new(
                (time_start_ms as f64, time_end_ms as f64),
                (0.0, inner_width),
            ),
        }
    }

    /// Fits the domain to `[first, last]` of an ascending sample slice.
    ///
    /// Returns `None` for an empty slice: there is no domain to fit.
    #[must_use]
    pub fn from_samples(samples: &[Sample], inner_width: f64) -> Option<Self> {
        let first = samples.first()?;
        let last = samples.last()?;
        Some(Self::new(first.time_ms, last.time_ms, inner_width))
    }

    #[must_use]
    pub fn domain(self) -> (i64, i64) {
        let (start, end) = self.linear.domain();
        (start as i64, end as i64)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.linear.is_degenerate()
    }

    #[must_use]
    pub fn time_to_x(self, time_ms: i64) -> f64 {
        self.linear.domain_to_pixel(time_ms as f64)
    }

    /// Inverse of [`Self::time_to_x`], in fractional milliseconds.
    #[must_use]
    pub fn x_to_time(self, x: f64) -> f64 {
        self.linear.pixel_to_domain(x)
    }

    /// `count` evenly spaced instants across the domain, rounded to the
    /// millisecond.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<i64> {
        self.linear
            .ticks(count)
            .into_iter()
            .map(|time| time.round() as i64)
            .collect()
    }
}
