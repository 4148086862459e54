use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::TooltipState;
use crate::render::{CirclePrimitive, Primitive, RectPrimitive, TextHAlign, TextPrimitive};

use super::RenderStyle;
use super::axis_label_format::{
    estimate_label_text_width_px, format_time_label, format_value_label,
};

/// Vertical lift applied to the anchor before placing the overlay box.
pub const TOOLTIP_ANCHOR_LIFT_PX: f64 = 12.0;

const TOOLTIP_LINE_HEIGHT_RATIO: f64 = 1.4;
const TOOLTIP_SWATCH_PX: f64 = 8.0;
const TOOLTIP_COLUMN_GAP_PX: f64 = 8.0;

/// Overlay box for the active sample, in container pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOverlay {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub time_label: String,
    pub series_label: String,
    pub value_label: String,
    /// The box sits left of the anchor because the right side had no room.
    pub flipped_x: bool,
    /// The box sits above the anchor because the bottom had no room.
    pub flipped_y: bool,
}

/// Lays out the overlay for a shown tooltip, keeping it inside the
/// container.
///
/// The box goes right of and below the anchor, flips to the other side on
/// an axis where it would cross the container edge, and is finally clamped
/// to the container. Returns `None` while the tooltip is hidden.
#[must_use]
pub fn layout_tooltip_overlay(
    state: &TooltipState,
    viewport: Viewport,
    style: &RenderStyle,
    series_label: &str,
    offset: FixedOffset,
) -> Option<TooltipOverlay> {
    let sample = state.sample.filter(|_| state.active)?;

    let time_label = format_time_label(sample.time_ms, offset);
    let value_label = format_value_label(sample.value);
    let font = style.tooltip_font_size_px;
    let first_row = estimate_label_text_width_px(&time_label, font);
    let second_row = TOOLTIP_SWATCH_PX
        + TOOLTIP_COLUMN_GAP_PX
        + estimate_label_text_width_px(series_label, font)
        + TOOLTIP_COLUMN_GAP_PX
        + estimate_label_text_width_px(&value_label, font);
    let width = first_row.max(second_row) + 2.0 * style.tooltip_padding_x_px;
    let height = 2.0 * font * TOOLTIP_LINE_HEIGHT_RATIO + 2.0 * style.tooltip_padding_y_px;

    let anchor_left = state.anchor_x + viewport.margin.left;
    let anchor_top = state.anchor_y + viewport.margin.top - TOOLTIP_ANCHOR_LIFT_PX;
    let gap = style.tooltip_offset_px;

    let (left, flipped_x) = place_along(anchor_left, width, gap, viewport.width);
    let (top, flipped_y) = place_along(anchor_top, height, gap, viewport.height);

    Some(TooltipOverlay {
        left,
        top,
        width,
        height,
        time_label,
        series_label: series_label.to_owned(),
        value_label,
        flipped_x,
        flipped_y,
    })
}

impl TooltipOverlay {
    /// Box, time row, then swatch, caption and value on the second row.
    #[must_use]
    pub fn primitives(&self, style: &RenderStyle) -> Vec<Primitive> {
        let font = style.tooltip_font_size_px;
        let row_height = font * TOOLTIP_LINE_HEIGHT_RATIO;
        let content_left = self.left + style.tooltip_padding_x_px;
        let first_row_y = self.top + style.tooltip_padding_y_px;
        let second_row_y = first_row_y + row_height;
        let swatch_radius = TOOLTIP_SWATCH_PX / 2.0;

        vec![
            Primitive::Rect(
                RectPrimitive::new(
                    self.left,
                    self.top,
                    self.width,
                    self.height,
                    style.tooltip_background_color,
                )
                .with_border(1.0, style.tooltip_border_color)
                .with_corner_radius(style.tooltip_corner_radius_px),
            ),
            Primitive::Text(TextPrimitive::new(
                self.time_label.clone(),
                content_left,
                first_row_y,
                font,
                style.tooltip_secondary_text_color,
                TextHAlign::Left,
            )),
            Primitive::Circle(CirclePrimitive {
                cx: content_left + swatch_radius,
                cy: second_row_y + row_height / 2.0,
                radius: swatch_radius,
                fill_color: style.series_line_color,
                border_width: 0.0,
                border_color: style.series_line_color,
            }),
            Primitive::Text(TextPrimitive::new(
                self.series_label.clone(),
                content_left + TOOLTIP_SWATCH_PX + TOOLTIP_COLUMN_GAP_PX,
                second_row_y,
                font,
                style.tooltip_secondary_text_color,
                TextHAlign::Left,
            )),
            Primitive::Text(TextPrimitive::new(
                self.value_label.clone(),
                self.left + self.width - style.tooltip_padding_x_px,
                second_row_y,
                font,
                style.tooltip_primary_text_color,
                TextHAlign::Right,
            )),
        ]
    }
}

fn place_along(anchor: f64, size: f64, gap: f64, bound: f64) -> (f64, bool) {
    let forward = anchor + gap;
    let (position, flipped) = if forward + size > bound {
        (anchor - gap - size, true)
    } else {
        (forward, false)
    };
    (position.min(bound - size).max(0.0), flipped)
}
