use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, unix_millis_to_datetime};
use crate::error::{ChartError, ChartResult};

/// Outer width/height below which the chart renders its placeholder.
pub const MIN_VIEWPORT_PX: f64 = 10.0;

/// One plotted observation: a UTC instant (unix milliseconds) and a count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time_ms: i64,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub const fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }

    #[must_use]
    pub fn at(time: DateTime<Utc>, value: f64) -> Self {
        Self {
            time_ms: datetime_to_unix_millis(time),
            value,
        }
    }

    #[must_use]
    pub fn time(self) -> Option<DateTime<Utc>> {
        unix_millis_to_datetime(self.time_ms)
    }
}

/// Identity of one sample set handed to the chart.
///
/// Every successfully built [`SampleSeries`] gets a fresh id; clones share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(u64);

impl SeriesId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Samples ordered by ascending timestamp.
///
/// Ordering is checked here, once, at the boundary. Nothing downstream
/// re-sorts. Equal timestamps are kept in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    id: SeriesId,
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new(samples: Vec<Sample>) -> ChartResult<Self> {
        for (index, sample) in samples.iter().enumerate() {
            if !sample.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "sample value at index {index} must be finite"
                )));
            }
            if index > 0 && sample.time_ms < samples[index - 1].time_ms {
                return Err(ChartError::UnorderedSamples {
                    index,
                    time_ms: sample.time_ms,
                    previous_ms: samples[index - 1].time_ms,
                });
            }
        }

        Ok(Self {
            id: SeriesId::next(),
            samples,
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: SeriesId::next(),
            samples: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SeriesId {
        self.id
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl TryFrom<Vec<Sample>> for SampleSeries {
    type Error = ChartError;

    fn try_from(samples: Vec<Sample>) -> ChartResult<Self> {
        Self::new(samples)
    }
}

/// Pixel insets between the outer viewport and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 20.0, 40.0, 40.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margin: Margin,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// `true` when the outer box clears the minimum size and the plot area
    /// left after margins is positive.
    #[must_use]
    pub fn is_renderable(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width >= MIN_VIEWPORT_PX
            && self.height >= MIN_VIEWPORT_PX
            && self.inner_width() > 0.0
            && self.inner_height() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Margin, Sample, SampleSeries, Viewport};
    use crate::error::ChartError;

    #[test]
    fn series_rejects_descending_timestamps() {
        let err = SampleSeries::new(vec![Sample::new(10, 1.0), Sample::new(5, 2.0)])
            .expect_err("unordered");
        assert!(matches!(
            err,
            ChartError::UnorderedSamples {
                index: 1,
                time_ms: 5,
                previous_ms: 10
            }
        ));
    }

    #[test]
    fn sample_converts_between_datetime_and_millis() {
        let time = chrono::DateTime::parse_from_rfc3339("2024-03-05T12:00:00Z")
            .expect("rfc3339")
            .with_timezone(&chrono::Utc);
        let sample = Sample::at(time, 3.0);
        assert_eq!(sample, Sample::new(1_709_640_000_000, 3.0));
        assert_eq!(sample.time(), Some(time));
    }

    #[test]
    fn series_keeps_duplicate_timestamps_in_order() {
        let series =
            SampleSeries::new(vec![Sample::new(5, 1.0), Sample::new(5, 2.0)]).expect("series");
        assert_eq!(series.samples()[0].value, 1.0);
        assert_eq!(series.samples()[1].value, 2.0);
    }

    #[test]
    fn fresh_series_get_distinct_ids_and_clones_share_them() {
        let a = SampleSeries::new(vec![Sample::new(1, 1.0)]).expect("a");
        let b = SampleSeries::new(vec![Sample::new(1, 1.0)]).expect("b");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn viewport_inner_area_subtracts_margins() {
        let viewport = Viewport::new(600.0, 200.0);
        assert_eq!(viewport.inner_width(), 540.0);
        assert_eq!(viewport.inner_height(), 140.0);
        assert!(viewport.is_renderable());

        let squeezed = viewport.with_margin(Margin::new(100.0, 0.0, 100.0, 0.0));
        assert!(!squeezed.is_renderable());
        assert!(!Viewport::new(9.0, 200.0).is_renderable());
    }
}
