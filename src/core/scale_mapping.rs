use serde::{Deserialize, Serialize};

use crate::core::{Sample, TimeScale, ValueScale};

/// Both coordinate mappings for one render pass, in plot-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleMapping {
    pub time: TimeScale,
    pub value: ValueScale,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl ScaleMapping {
    #[must_use]
    pub fn time_to_x(&self, time_ms: i64) -> f64 {
        self.time.time_to_x(time_ms)
    }

    #[must_use]
    pub fn x_to_time(&self, x: f64) -> f64 {
        self.time.x_to_time(x)
    }

    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        self.value.value_to_y(value)
    }

    #[must_use]
    pub fn y_to_value(&self, y: f64) -> f64 {
        self.value.y_to_value(y)
    }

    #[must_use]
    pub fn sample_to_point(&self, sample: Sample) -> (f64, f64) {
        (self.time_to_x(sample.time_ms), self.value_to_y(sample.value))
    }

    /// Plot y of the zero baseline the area closes against.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.value_to_y(0.0)
    }
}

/// Builds the time and value scales for an ascending sample slice.
///
/// Returns `None` for an empty slice. Callers decide the placeholder state
/// before reaching here; the `None` keeps an undefined domain from ever
/// being constructed.
#[must_use]
pub fn build_scales(samples: &[Sample], inner_width: f64, inner_height: f64) -> Option<ScaleMapping> {
    let time = TimeScale::from_samples(samples, inner_width)?;
    Some(ScaleMapping {
        time,
        value: ValueScale::from_samples(samples, inner_height),
        inner_width,
        inner_height,
    })
}
