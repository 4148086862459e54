use serde::{Deserialize, Serialize};

/// Paint layers of one chart frame, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Placeholder,
    Grid,
    Area,
    Line,
    HitSurface,
    Tooltip,
    Axis,
    Overlay,
}

impl CanvasLayerKind {
    /// Paint order. A frame's commands never step backwards in this list.
    pub const CANONICAL_ORDER: [Self; 8] = [
        Self::Placeholder,
        Self::Grid,
        Self::Area,
        Self::Line,
        Self::HitSurface,
        Self::Tooltip,
        Self::Axis,
        Self::Overlay,
    ];

    #[must_use]
    pub fn rank(self) -> usize {
        Self::CANONICAL_ORDER
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(Self::CANONICAL_ORDER.len())
    }
}
