use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::axis_ticks::{time_axis_ticks, value_axis_ticks};
use super::{ChartEngine, ChartSnapshot};

impl<R: Renderer> ChartEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let viewport = self.viewport();
        let (time_ticks, value_ticks) = match (&self.scales, viewport) {
            (Some(scales), Some(viewport)) => (
                time_axis_ticks(scales, viewport.width, self.time_label_offset),
                value_axis_ticks(scales),
            ),
            _ => (Vec::new(), Vec::new()),
        };
        ChartSnapshot {
            viewport,
            placeholder: viewport.is_some() && self.scales.is_none(),
            samples: self.series.samples().to_vec(),
            time_domain: self.scales.map(|scales| scales.time.domain()),
            value_domain: self.scales.map(|scales| scales.value.domain()),
            time_ticks,
            value_ticks,
            tooltip: self.tooltip.state(),
            scales_generation: self.scales_generation,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
