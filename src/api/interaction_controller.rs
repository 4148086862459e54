use tracing::{debug, trace};

use crate::interaction::{PointerEvent, TooltipPhase, TooltipState};
use crate::render::{HitSurfacePrimitive, Renderer};

use super::ChartEngine;
use super::invalidation::InvalidationTopic;
use super::tooltip_overlay::{TooltipOverlay, layout_tooltip_overlay};

impl<R: Renderer> ChartEngine<R> {
    /// Reports the parent's width. Returns `true` when the viewport changed.
    ///
    /// A resize rebuilds the scales and hides the tooltip.
    pub fn observe_width(&mut self, width: f64) -> bool {
        if !self.container.observe_width(width) {
            return false;
        }
        if self.tooltip.hide() {
            debug!("tooltip hidden on resize");
            self.invalidation.insert(InvalidationTopic::Tooltip);
        }
        self.rebuild_scales();
        self.invalidation.insert(InvalidationTopic::Viewport);
        true
    }

    /// Feeds one pointer or touch event, in container pixels.
    ///
    /// Returns `true` when the tooltip state changed. Events are ignored
    /// while the frame is a placeholder or the container has no width.
    /// Tracking events outside the plot rectangle act as a leave.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let changed = match event.tracking_position() {
            Some((x, y)) => self.track_pointer(x, y),
            None => self.tooltip.hide(),
        };
        if changed {
            self.invalidation.insert(InvalidationTopic::Tooltip);
        }
        trace!(?event, changed, "pointer event");
        changed
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.handle_pointer(PointerEvent::Move { x, y })
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.handle_pointer(PointerEvent::Down { x, y })
    }

    pub fn touch_start(&mut self, x: f64, y: f64) -> bool {
        self.handle_pointer(PointerEvent::TouchStart { x, y })
    }

    pub fn touch_move(&mut self, x: f64, y: f64) -> bool {
        self.handle_pointer(PointerEvent::TouchMove { x, y })
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.handle_pointer(PointerEvent::Leave)
    }

    pub fn touch_end(&mut self) -> bool {
        self.handle_pointer(PointerEvent::TouchEnd)
    }

    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        self.tooltip.state()
    }

    #[must_use]
    pub fn tooltip_phase(&self) -> TooltipPhase {
        self.tooltip.phase()
    }

    /// Overlay box for the shown tooltip, laid out in the current viewport.
    #[must_use]
    pub fn tooltip_overlay(&self) -> Option<TooltipOverlay> {
        let viewport = self.viewport()?;
        layout_tooltip_overlay(
            &self.tooltip.state(),
            viewport,
            &self.style,
            &self.config.series_label,
            self.time_label_offset,
        )
    }

    fn track_pointer(&mut self, container_x: f64, container_y: f64) -> bool {
        let Some(viewport) = self.viewport() else {
            return false;
        };
        let Some(scales) = self.scales else {
            return false;
        };
        if !HitSurfacePrimitive::for_viewport(viewport).contains(container_x, container_y) {
            return self.tooltip.hide();
        }
        let previous = self.tooltip.state();
        let plot_x = container_x - viewport.margin.left;
        self.tooltip.track(plot_x, self.series.samples(), &scales);
        self.tooltip.state() != previous
    }
}
