use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CanvasLayerKind, HitSurfacePrimitive, Primitive};

/// Whether a frame carries the chart or the empty-state placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameKind {
    Placeholder,
    Chart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub layer: CanvasLayerKind,
    pub primitive: Primitive,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Commands are stored in paint order, in outer-viewport pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub kind: FrameKind,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, kind: FrameKind) -> Self {
        Self {
            viewport,
            kind,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: CanvasLayerKind, primitive: Primitive) {
        self.commands.push(DrawCommand { layer, primitive });
    }

    #[must_use]
    pub fn with(mut self, layer: CanvasLayerKind, primitive: Primitive) -> Self {
        self.push(layer, primitive);
        self
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.kind == FrameKind::Placeholder
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn primitives_in(&self, layer: CanvasLayerKind) -> impl Iterator<Item = &Primitive> {
        self.commands
            .iter()
            .filter(move |command| command.layer == layer)
            .map(|command| &command.primitive)
    }

    /// Layers in the order they first appear.
    #[must_use]
    pub fn layer_sequence(&self) -> Vec<CanvasLayerKind> {
        let mut sequence: Vec<CanvasLayerKind> = Vec::new();
        for command in &self.commands {
            if sequence.last() != Some(&command.layer) {
                sequence.push(command.layer);
            }
        }
        sequence
    }

    #[must_use]
    pub fn hit_surface(&self) -> Option<HitSurfacePrimitive> {
        self.commands.iter().find_map(|command| match command.primitive {
            Primitive::HitSurface(surface) => Some(surface),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.width.is_finite()
            || !self.viewport.height.is_finite()
            || self.viewport.width < 0.0
            || self.viewport.height < 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let mut previous_rank = 0;
        for command in &self.commands {
            let rank = command.layer.rank();
            if rank < previous_rank {
                return Err(ChartError::InvalidData(format!(
                    "layer {:?} painted after a layer above it",
                    command.layer
                )));
            }
            previous_rank = rank;
            command.primitive.validate()?;
        }

        Ok(())
    }
}
