use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::core::Margin;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_CHART_HEIGHT_PX: f64 = 200.0;
pub const DEFAULT_SERIES_LABEL: &str = "Clicks";

/// Public chart bootstrap configuration.
///
/// This is the whole input surface besides the samples: a fixed height, an
/// optional explicit width (otherwise the container observes its parent), an
/// optional margin override, and label presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub margin: Option<Margin>,
    /// Minutes east of UTC used when formatting time labels.
    #[serde(default)]
    pub time_label_offset_minutes: i32,
    #[serde(default = "default_series_label")]
    pub series_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_HEIGHT_PX)
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(height: f64) -> Self {
        Self {
            height,
            width: None,
            margin: None,
            time_label_offset_minutes: 0,
            series_label: default_series_label(),
        }
    }

    /// Pins the width instead of observing the parent container.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    #[must_use]
    pub fn with_time_label_offset_minutes(mut self, minutes: i32) -> Self {
        self.time_label_offset_minutes = minutes;
        self
    }

    #[must_use]
    pub fn with_series_label(mut self, label: impl Into<String>) -> Self {
        self.series_label = label.into();
        self
    }

    #[must_use]
    pub fn resolved_margin(&self) -> Margin {
        self.margin.unwrap_or_default()
    }

    pub fn time_label_offset(&self) -> ChartResult<FixedOffset> {
        self.time_label_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ChartError::Config(format!(
                    "time label offset {} min is outside +/-24h",
                    self.time_label_offset_minutes
                ))
            })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.height.is_finite() {
            return Err(ChartError::Config("height must be finite".to_owned()));
        }
        if let Some(width) = self.width {
            if !width.is_finite() {
                return Err(ChartError::Config("width must be finite".to_owned()));
            }
        }
        if let Some(margin) = self.margin {
            if ![margin.top, margin.right, margin.bottom, margin.left]
                .iter()
                .all(|value| value.is_finite())
            {
                return Err(ChartError::Config("margin must be finite".to_owned()));
            }
        }
        if self.series_label.trim().is_empty() {
            return Err(ChartError::Config(
                "series label must not be empty".to_owned(),
            ));
        }
        self.time_label_offset()?;
        Ok(())
    }
}

fn default_height() -> f64 {
    DEFAULT_CHART_HEIGHT_PX
}

fn default_series_label() -> String {
    DEFAULT_SERIES_LABEL.to_owned()
}
