mod axis_label_format;
mod axis_ticks;
mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod invalidation;
mod json_contract;
mod render_frame_builder;
mod render_style;
mod responsive_container;
mod snapshot_controller;
mod tooltip_overlay;

pub use axis_ticks::{
    AxisTick, GRID_TICK_COUNT, TIME_AXIS_NARROW_TICK_COUNT, TIME_AXIS_WIDE_THRESHOLD_PX,
    TIME_AXIS_WIDE_TICK_COUNT, VALUE_AXIS_TICK_COUNT, grid_line_positions, time_axis_tick_count,
    time_axis_ticks, value_axis_ticks,
};
pub use engine::ChartEngine;
pub use engine_config::{ChartConfig, DEFAULT_CHART_HEIGHT_PX, DEFAULT_SERIES_LABEL};
pub use engine_snapshot::ChartSnapshot;
pub use invalidation::{InvalidationTopic, InvalidationTopics};
pub use json_contract::{
    CHART_CONFIG_JSON_SCHEMA_V1, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartConfigJsonContractV1,
    ChartSnapshotJsonContractV1,
};
pub use render_frame_builder::{
    FrameLabels, build_render_frame, build_render_frame_with_scales, placeholder_frame,
};
pub use render_style::RenderStyle;
pub use responsive_container::ResponsiveContainer;
pub use tooltip_overlay::{TOOLTIP_ANCHOR_LIFT_PX, TooltipOverlay, layout_tooltip_overlay};
