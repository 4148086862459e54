use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{LinearScale, Sample};

/// Headroom multiplier applied above the observed peak.
pub const VALUE_HEADROOM_RATIO: f64 = 1.2;

/// Upper bound used when the scaled peak is zero.
pub const VALUE_DOMAIN_FLOOR: f64 = 1.0;

/// Vertical scale from counts to plot y.
///
/// Domain is `[0, peak * 1.2]` (or `[0, 1]` for an all-zero series), range is
/// `[inner_height, 0]` so larger values sit higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    #[must_use]
    pub fn new(upper: f64, inner_height: f64) -> Self {
        Self {
            linear: LinearScale::new((0.0, upper), (inner_height, 0.0)),
        }
    }

    #[must_use]
    pub fn from_samples(samples: &[Sample], inner_height: f64) -> Self {
        Self::new(value_domain_upper(samples), inner_height)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.linear.domain().1
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        self.linear.domain_to_pixel(value)
    }

    #[must_use]
    pub fn y_to_value(self, y: f64) -> f64 {
        self.linear.pixel_to_domain(y)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        self.linear.ticks(count)
    }
}

/// Upper bound of the value domain for `samples`.
///
/// Negative values never pull the lower bound below zero; they are ignored
/// when computing the peak.
#[must_use]
pub fn value_domain_upper(samples: &[Sample]) -> f64 {
    let peak = samples
        .iter()
        .map(|sample| OrderedFloat(sample.value))
        .max()
        .map_or(0.0, |peak| peak.0);
    if peak < 0.0 {
        warn!(peak, "all sample values are negative; value domain stays at zero");
    }

    let upper = peak.max(0.0) * VALUE_HEADROOM_RATIO;
    if upper > 0.0 && upper.is_finite() {
        upper
    } else {
        VALUE_DOMAIN_FLOOR
    }
}
