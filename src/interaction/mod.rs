use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Sample, ScaleMapping, SeriesId, locate};

/// Pointer and touch input delivered to the chart, in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    TouchStart { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    Leave,
    TouchEnd,
}

impl PointerEvent {
    /// Position for events that track the pointer.
    #[must_use]
    pub fn tracking_position(self) -> Option<(f64, f64)> {
        match self {
            Self::Down { x, y }
            | Self::Move { x, y }
            | Self::TouchStart { x, y }
            | Self::TouchMove { x, y } => Some((x, y)),
            Self::Leave | Self::TouchEnd => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipPhase {
    Hidden,
    Shown,
}

/// Public tooltip state. Anchors are in plot-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub active: bool,
    pub sample: Option<Sample>,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            active: false,
            sample: None,
            anchor_x: 0.0,
            anchor_y: 0.0,
        }
    }
}

/// Two-state tooltip machine: `Hidden` until a tracking event lands on a
/// sample, `Shown` until leave, touch end, a new sample set or a resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TooltipController {
    state: TooltipState,
    series: Option<SeriesId>,
}

impl TooltipController {
    #[must_use]
    pub fn phase(&self) -> TooltipPhase {
        if self.state.active {
            TooltipPhase::Shown
        } else {
            TooltipPhase::Hidden
        }
    }

    #[must_use]
    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Moves to `Shown` on the sample nearest to `plot_x`.
    ///
    /// Runs on every tracking event, without batching. Returns `false` and
    /// stays `Hidden` when there is nothing to locate.
    pub fn track(&mut self, plot_x: f64, samples: &[Sample], scales: &ScaleMapping) -> bool {
        let Some(sample) = locate(samples, plot_x, scales).copied() else {
            return false;
        };
        let (anchor_x, anchor_y) = scales.sample_to_point(sample);
        trace!(plot_x, time_ms = sample.time_ms, value = sample.value, "tooltip track");
        self.state = TooltipState {
            active: true,
            sample: Some(sample),
            anchor_x,
            anchor_y,
        };
        true
    }

    /// Moves to `Hidden`. Returns whether the tooltip was shown.
    pub fn hide(&mut self) -> bool {
        let was_shown = self.state.active;
        self.state = TooltipState::default();
        was_shown
    }

    /// Records the sample set the tooltip points into and hides the tooltip
    /// when the identity differs from the previous one.
    pub fn sync_series(&mut self, series: SeriesId) -> bool {
        if self.series == Some(series) {
            return false;
        }
        self.series = Some(series);
        self.hide()
    }
}
