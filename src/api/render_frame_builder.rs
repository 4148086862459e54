use chrono::FixedOffset;
use tracing::trace;

use crate::core::{
    PathCommand, Sample, ScaleMapping, Viewport, build_scales, project_area_geometry,
};
use crate::interaction::TooltipState;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Fill, FrameKind, HitSurfacePrimitive, LinePrimitive,
    LineStrokeStyle, PathPrimitive, Primitive, RenderFrame, Renderer, Stroke, TextHAlign,
    TextPrimitive, TextVAlign,
};

use super::axis_ticks::{grid_line_positions, time_axis_ticks, value_axis_ticks};
use super::tooltip_overlay::layout_tooltip_overlay;
use super::{ChartEngine, RenderStyle};

/// Label presentation shared by the axes and the tooltip overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLabels<'a> {
    pub time_offset: FixedOffset,
    pub series_label: &'a str,
}

/// Builds one frame from scratch.
///
/// The placeholder decision comes first: an empty sample slice or a viewport
/// below the renderable minimum yields the "no data" frame and no scales are
/// ever built for it.
#[must_use]
pub fn build_render_frame(
    samples: &[Sample],
    viewport: Viewport,
    style: &RenderStyle,
    tooltip: &TooltipState,
    labels: FrameLabels<'_>,
) -> RenderFrame {
    if samples.is_empty() || !viewport.is_renderable() {
        return placeholder_frame(viewport, style);
    }
    match build_scales(samples, viewport.inner_width(), viewport.inner_height()) {
        Some(scales) => {
            build_render_frame_with_scales(samples, viewport, &scales, style, tooltip, labels)
        }
        None => placeholder_frame(viewport, style),
    }
}

/// Empty-state frame: a single centered message and nothing else.
#[must_use]
pub fn placeholder_frame(viewport: Viewport, style: &RenderStyle) -> RenderFrame {
    let text = TextPrimitive::new(
        style.placeholder_text,
        viewport.width / 2.0,
        viewport.height / 2.0,
        style.placeholder_font_size_px,
        style.placeholder_text_color,
        TextHAlign::Center,
    )
    .with_v_align(TextVAlign::Middle);
    RenderFrame::new(viewport, FrameKind::Placeholder)
        .with(CanvasLayerKind::Placeholder, Primitive::Text(text))
}

/// Builds the chart frame against scales the caller already holds.
///
/// Layers are pushed back to front: gridlines, area fill, curve, hit
/// surface, tooltip indicator, axes, tooltip box. Everything is emitted in
/// outer-viewport pixels, so plot coordinates are shifted by the margin.
#[must_use]
pub fn build_render_frame_with_scales(
    samples: &[Sample],
    viewport: Viewport,
    scales: &ScaleMapping,
    style: &RenderStyle,
    tooltip: &TooltipState,
    labels: FrameLabels<'_>,
) -> RenderFrame {
    let left = viewport.margin.left;
    let top = viewport.margin.top;
    let inner_width = scales.inner_width;
    let inner_height = scales.inner_height;
    let mut frame = RenderFrame::new(viewport, FrameKind::Chart);

    for y in grid_line_positions(scales) {
        frame.push(
            CanvasLayerKind::Grid,
            Primitive::Line(
                LinePrimitive::new(
                    left,
                    top + y,
                    left + inner_width,
                    top + y,
                    style.grid_line_width,
                    style.grid_line_color,
                )
                .with_stroke_style(style.grid_line_style),
            ),
        );
    }

    let geometry = project_area_geometry(samples, scales);
    frame.push(
        CanvasLayerKind::Area,
        Primitive::Path(PathPrimitive {
            commands: shift(&geometry.fill, left, top),
            fill: Some(Fill::VerticalGradient {
                top_y: top + geometry.peak_y(),
                bottom_y: top + geometry.baseline_y,
                top_color: style.area_top_color,
                bottom_color: style.area_bottom_color,
            }),
            stroke: None,
        }),
    );
    frame.push(
        CanvasLayerKind::Line,
        Primitive::Path(PathPrimitive {
            commands: shift(&geometry.line, left, top),
            fill: None,
            stroke: Some(Stroke {
                color: style.series_line_color,
                width: style.series_line_width,
                style: LineStrokeStyle::Solid,
            }),
        }),
    );

    frame.push(
        CanvasLayerKind::HitSurface,
        Primitive::HitSurface(HitSurfacePrimitive::for_viewport(viewport)),
    );

    if tooltip.active && tooltip.sample.is_some() {
        let anchor_x = left + tooltip.anchor_x;
        frame.push(
            CanvasLayerKind::Tooltip,
            Primitive::Line(
                LinePrimitive::new(
                    anchor_x,
                    top,
                    anchor_x,
                    top + inner_height,
                    style.guide_line_width,
                    style.guide_line_color,
                )
                .with_stroke_style(style.guide_line_style),
            ),
        );
        frame.push(
            CanvasLayerKind::Tooltip,
            Primitive::Circle(CirclePrimitive {
                cx: anchor_x,
                cy: top + tooltip.anchor_y,
                radius: style.marker_radius_px,
                fill_color: style.marker_fill_color,
                border_width: style.marker_border_width,
                border_color: style.marker_border_color,
            }),
        );
    }

    let time_label_y = top + inner_height + style.time_axis_label_padding_px;
    for tick in time_axis_ticks(scales, viewport.width, labels.time_offset) {
        frame.push(
            CanvasLayerKind::Axis,
            Primitive::Text(TextPrimitive::new(
                tick.label,
                left + tick.pixel,
                time_label_y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            )),
        );
    }
    let value_label_x = left - style.value_axis_label_padding_px;
    for tick in value_axis_ticks(scales) {
        frame.push(
            CanvasLayerKind::Axis,
            Primitive::Text(
                TextPrimitive::new(
                    tick.label,
                    value_label_x,
                    top + tick.pixel,
                    style.axis_label_font_size_px,
                    style.axis_label_color,
                    TextHAlign::Right,
                )
                .with_v_align(TextVAlign::Middle),
            ),
        );
    }

    if let Some(overlay) =
        layout_tooltip_overlay(tooltip, viewport, style, labels.series_label, labels.time_offset)
    {
        for primitive in overlay.primitives(style) {
            frame.push(CanvasLayerKind::Overlay, primitive);
        }
    }

    trace!(
        samples = samples.len(),
        commands = frame.commands.len(),
        tooltip = tooltip.active,
        "built chart frame"
    );
    frame
}

fn shift(commands: &[PathCommand], dx: f64, dy: f64) -> Vec<PathCommand> {
    commands
        .iter()
        .map(|command| command.translated(dx, dy))
        .collect()
}

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current frame, or `None` while the container has not
    /// reported a width yet.
    ///
    /// Reuses the cached scales; tooltip changes never rebuild them.
    pub fn build_frame(&self) -> Option<RenderFrame> {
        let viewport = self.viewport()?;
        let labels = FrameLabels {
            time_offset: self.time_label_offset,
            series_label: &self.config.series_label,
        };
        let samples = self.series.samples();
        let tooltip = self.tooltip.state();
        let frame = match &self.scales {
            Some(scales) if !samples.is_empty() && viewport.is_renderable() => {
                build_render_frame_with_scales(
                    samples,
                    viewport,
                    scales,
                    &self.style,
                    &tooltip,
                    labels,
                )
            }
            _ => placeholder_frame(viewport, &self.style),
        };
        Some(frame)
    }
}
