use serde::{Deserialize, Serialize};

use crate::core::{Sample, Viewport};
use crate::interaction::TooltipState;

use super::AxisTick;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    /// `None` until the container has a width.
    pub viewport: Option<Viewport>,
    /// `true` when a viewport exists and it renders the placeholder frame.
    pub placeholder: bool,
    pub samples: Vec<Sample>,
    pub time_domain: Option<(i64, i64)>,
    pub value_domain: Option<(f64, f64)>,
    #[serde(default)]
    pub time_ticks: Vec<AxisTick>,
    #[serde(default)]
    pub value_ticks: Vec<AxisTick>,
    pub tooltip: TooltipState,
    pub scales_generation: u64,
}
