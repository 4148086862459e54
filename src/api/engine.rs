use chrono::FixedOffset;
use tracing::{debug, trace};

use crate::core::{SampleSeries, ScaleMapping, Viewport, build_scales};
use crate::error::ChartResult;
use crate::interaction::TooltipController;
use crate::render::Renderer;

use super::invalidation::{InvalidationTopic, InvalidationTopics};
use super::render_style::validate_render_style;
use super::{ChartConfig, RenderStyle, ResponsiveContainer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the sample series, the responsive container, the
/// cached scales and the tooltip, and hands finished frames to the
/// renderer. Scales are rebuilt only when the samples or the viewport
/// change; pointer input reuses them.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) style: RenderStyle,
    pub(super) time_label_offset: FixedOffset,
    pub(super) container: ResponsiveContainer,
    pub(super) series: SampleSeries,
    pub(super) scales: Option<ScaleMapping>,
    pub(super) scales_generation: u64,
    pub(super) tooltip: TooltipController,
    pub(super) invalidation: InvalidationTopics,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with no samples. Nothing renders until the
    /// container knows its width, either from `config.width` or from
    /// `observe_width`.
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let time_label_offset = config.time_label_offset()?;
        let mut container = ResponsiveContainer::new(config.height, config.resolved_margin());
        if let Some(width) = config.width {
            container = container.with_explicit_width(width);
        }
        let series = SampleSeries::empty();
        let mut tooltip = TooltipController::default();
        tooltip.sync_series(series.id());

        debug!(
            height = config.height,
            explicit_width = ?config.width,
            "chart engine created"
        );
        let mut engine = Self {
            renderer,
            config,
            style: RenderStyle::default(),
            time_label_offset,
            container,
            series,
            scales: None,
            scales_generation: 0,
            tooltip,
            invalidation: InvalidationTopics::all(),
        };
        engine.rebuild_scales();
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(style)?;
        self.style = style;
        self.invalidation.insert(InvalidationTopic::Style);
        Ok(())
    }

    /// Current outer viewport, or `None` before the first width is known.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.container.viewport()
    }

    #[must_use]
    pub fn container(&self) -> &ResponsiveContainer {
        &self.container
    }

    /// Scales of the current data and viewport. `None` while the frame would
    /// be a placeholder.
    #[must_use]
    pub fn scales(&self) -> Option<&ScaleMapping> {
        self.scales.as_ref()
    }

    /// Bumped every time the scales are rebuilt.
    #[must_use]
    pub fn scales_generation(&self) -> u64 {
        self.scales_generation
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.invalidation
    }

    /// Builds and draws the current frame.
    ///
    /// Returns `Ok(false)` without touching the renderer while the container
    /// is not ready.
    pub fn render(&mut self) -> ChartResult<bool> {
        let Some(frame) = self.build_frame() else {
            trace!("render skipped until the container has a width");
            return Ok(false);
        };
        self.renderer.render(&frame)?;
        let drained = self.invalidation.take();
        trace!(
            placeholder = frame.is_placeholder(),
            commands = frame.commands.len(),
            drained = ?drained,
            "chart rendered"
        );
        Ok(true)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<bool>
    where
        R: CairoContextRenderer,
    {
        let Some(frame) = self.build_frame() else {
            return Ok(false);
        };
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.invalidation.take();
        Ok(true)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn rebuild_scales(&mut self) {
        self.scales = self
            .viewport()
            .filter(|viewport| viewport.is_renderable())
            .and_then(|viewport| {
                build_scales(
                    self.series.samples(),
                    viewport.inner_width(),
                    viewport.inner_height(),
                )
            });
        self.scales_generation += 1;
        trace!(
            generation = self.scales_generation,
            has_scales = self.scales.is_some(),
            "scales rebuilt"
        );
    }
}
