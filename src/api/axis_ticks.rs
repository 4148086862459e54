use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::core::ScaleMapping;

use super::axis_label_format::{format_time_label, format_value_label};

pub const GRID_TICK_COUNT: usize = 4;
pub const VALUE_AXIS_TICK_COUNT: usize = 4;
pub const TIME_AXIS_WIDE_TICK_COUNT: usize = 6;
pub const TIME_AXIS_NARROW_TICK_COUNT: usize = 4;
/// Outer widths strictly above this get the wide time-axis tick count.
pub const TIME_AXIS_WIDE_THRESHOLD_PX: f64 = 500.0;

/// One labelled axis tick. `pixel` is along the axis in plot-area pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub pixel: f64,
    pub label: String,
}

#[must_use]
pub fn time_axis_tick_count(outer_width: f64) -> usize {
    if outer_width > TIME_AXIS_WIDE_THRESHOLD_PX {
        TIME_AXIS_WIDE_TICK_COUNT
    } else {
        TIME_AXIS_NARROW_TICK_COUNT
    }
}

#[must_use]
pub fn time_axis_ticks(scales: &ScaleMapping, outer_width: f64, offset: FixedOffset) -> Vec<AxisTick> {
    scales
        .time
        .ticks(time_axis_tick_count(outer_width))
        .into_iter()
        .map(|time_ms| AxisTick {
            value: time_ms as f64,
            pixel: scales.time_to_x(time_ms),
            label: format_time_label(time_ms, offset),
        })
        .collect()
}

#[must_use]
pub fn value_axis_ticks(scales: &ScaleMapping) -> Vec<AxisTick> {
    scales
        .value
        .ticks(VALUE_AXIS_TICK_COUNT)
        .into_iter()
        .map(|value| AxisTick {
            value,
            pixel: scales.value_to_y(value),
            label: format_value_label(value),
        })
        .collect()
}

/// Plot-area y of each horizontal gridline.
#[must_use]
pub fn grid_line_positions(scales: &ScaleMapping) -> Vec<f64> {
    scales
        .value
        .ticks(GRID_TICK_COUNT)
        .into_iter()
        .map(|value| scales.value_to_y(value))
        .collect()
}
