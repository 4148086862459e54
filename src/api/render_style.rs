use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

const BLUE_600: Color = Color::rgb8(37, 99, 235);
const GRAY_200: Color = Color::rgb8(229, 231, 235);
const GRAY_400: Color = Color::rgb8(156, 163, 175);
const GRAY_500: Color = Color::rgb8(107, 114, 128);
const GRAY_900: Color = Color::rgb8(17, 24, 39);
const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// Style contract for one render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub series_line_color: Color,
    pub series_line_width: f64,
    pub area_top_color: Color,
    pub area_bottom_color: Color,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub grid_line_style: LineStrokeStyle,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Gap between the value-axis labels and the plot's left edge.
    pub value_axis_label_padding_px: f64,
    /// Gap between the plot's bottom edge and the time-axis labels.
    pub time_axis_label_padding_px: f64,
    pub guide_line_color: Color,
    pub guide_line_width: f64,
    pub guide_line_style: LineStrokeStyle,
    pub marker_radius_px: f64,
    pub marker_fill_color: Color,
    pub marker_border_color: Color,
    pub marker_border_width: f64,
    pub tooltip_background_color: Color,
    pub tooltip_border_color: Color,
    pub tooltip_corner_radius_px: f64,
    pub tooltip_padding_x_px: f64,
    pub tooltip_padding_y_px: f64,
    pub tooltip_font_size_px: f64,
    pub tooltip_secondary_text_color: Color,
    pub tooltip_primary_text_color: Color,
    /// Gap between the anchor and the overlay box.
    pub tooltip_offset_px: f64,
    pub placeholder_text: &'static str,
    pub placeholder_text_color: Color,
    pub placeholder_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_line_color: BLUE_600,
            series_line_width: 2.0,
            area_top_color: BLUE_600.with_alpha(0.3),
            area_bottom_color: BLUE_600.with_alpha(0.0),
            grid_line_color: GRAY_200.with_alpha(0.8),
            grid_line_width: 1.0,
            grid_line_style: LineStrokeStyle::Dashed {
                dash_px: 4.0,
                gap_px: 4.0,
            },
            axis_label_color: GRAY_400,
            axis_label_font_size_px: 11.0,
            value_axis_label_padding_px: 4.0,
            time_axis_label_padding_px: 8.0,
            guide_line_color: BLUE_600,
            guide_line_width: 1.0,
            guide_line_style: LineStrokeStyle::Dashed {
                dash_px: 4.0,
                gap_px: 4.0,
            },
            marker_radius_px: 6.0,
            marker_fill_color: BLUE_600,
            marker_border_color: WHITE,
            marker_border_width: 2.0,
            tooltip_background_color: WHITE,
            tooltip_border_color: GRAY_200,
            tooltip_corner_radius_px: 8.0,
            tooltip_padding_x_px: 12.0,
            tooltip_padding_y_px: 8.0,
            tooltip_font_size_px: 12.0,
            tooltip_secondary_text_color: GRAY_500,
            tooltip_primary_text_color: GRAY_900,
            tooltip_offset_px: 10.0,
            placeholder_text: "No data available",
            placeholder_text_color: GRAY_400,
            placeholder_font_size_px: 14.0,
        }
    }
}

pub(crate) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    for color in [
        style.series_line_color,
        style.area_top_color,
        style.area_bottom_color,
        style.grid_line_color,
        style.axis_label_color,
        style.guide_line_color,
        style.marker_fill_color,
        style.marker_border_color,
        style.tooltip_background_color,
        style.tooltip_border_color,
        style.tooltip_secondary_text_color,
        style.tooltip_primary_text_color,
        style.placeholder_text_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("series_line_width", style.series_line_width),
        ("grid_line_width", style.grid_line_width),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("guide_line_width", style.guide_line_width),
        ("marker_radius_px", style.marker_radius_px),
        ("tooltip_font_size_px", style.tooltip_font_size_px),
        ("placeholder_font_size_px", style.placeholder_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("value_axis_label_padding_px", style.value_axis_label_padding_px),
        ("time_axis_label_padding_px", style.time_axis_label_padding_px),
        ("marker_border_width", style.marker_border_width),
        ("tooltip_corner_radius_px", style.tooltip_corner_radius_px),
        ("tooltip_padding_x_px", style.tooltip_padding_x_px),
        ("tooltip_padding_y_px", style.tooltip_padding_y_px),
        ("tooltip_offset_px", style.tooltip_offset_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }

    if style.placeholder_text.is_empty() {
        return Err(ChartError::InvalidData(
            "render style placeholder text must not be empty".to_owned(),
        ));
    }
    Ok(())
}
