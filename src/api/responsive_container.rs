use tracing::debug;

use crate::core::{Margin, Viewport};

/// Tracks the parent's available width and turns it into a viewport.
///
/// Height and margin are fixed by the caller. Until a first positive width
/// arrives the container is not ready and the chart draws nothing at all.
/// An explicit width pins the container and makes observation a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveContainer {
    height: f64,
    margin: Margin,
    explicit_width: Option<f64>,
    observed_width: Option<f64>,
}

impl ResponsiveContainer {
    #[must_use]
    pub fn new(height: f64, margin: Margin) -> Self {
        Self {
            height,
            margin,
            explicit_width: None,
            observed_width: None,
        }
    }

    #[must_use]
    pub fn with_explicit_width(mut self, width: f64) -> Self {
        self.explicit_width = Some(width);
        self
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.width().is_some()
    }

    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.explicit_width.or(self.observed_width)
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn margin(&self) -> Margin {
        self.margin
    }

    /// Feeds one width observation. Returns `true` when the effective width
    /// changed.
    ///
    /// Non-finite and negative widths are ignored, as is zero before the
    /// first valid observation. After that, zero is a real size and renders
    /// the placeholder.
    pub fn observe_width(&mut self, width: f64) -> bool {
        if self.explicit_width.is_some() {
            return false;
        }
        if !width.is_finite() || width < 0.0 {
            debug!(width, "ignoring invalid container width");
            return false;
        }
        if width == 0.0 && self.observed_width.is_none() {
            debug!("container width not known yet");
            return false;
        }
        if self.observed_width == Some(width) {
            return false;
        }

        debug!(previous = ?self.observed_width, width, "container width changed");
        self.observed_width = Some(width);
        true
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.width()
            .map(|width| Viewport::new(width, self.height).with_margin(self.margin))
    }
}

#[cfg(test)]
mod tests {
    use super::ResponsiveContainer;
    use crate::core::Margin;

    #[test]
    fn waits_for_first_positive_width() {
        let mut container = ResponsiveContainer::new(200.0, Margin::default());
        assert!(!container.is_ready());
        assert!(!container.observe_width(0.0));
        assert!(!container.observe_width(f64::NAN));
        assert!(container.viewport().is_none());

        assert!(container.observe_width(600.0));
        assert!(!container.observe_width(600.0));
        assert_eq!(container.viewport().map(|v| v.width), Some(600.0));

        assert!(container.observe_width(0.0));
        assert!(container.is_ready());
    }

    #[test]
    fn explicit_width_pins_the_viewport() {
        let mut container =
            ResponsiveContainer::new(200.0, Margin::default()).with_explicit_width(480.0);
        assert!(container.is_ready());
        assert!(!container.observe_width(900.0));
        assert_eq!(container.width(), Some(480.0));
    }
}
