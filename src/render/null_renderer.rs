use crate::error::ChartResult;
use crate::render::{FrameKind, Primitive, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_kind: Option<FrameKind>,
    pub last_path_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_kind = Some(frame.kind);
        self.last_path_count = count(frame, |p| matches!(p, Primitive::Path(_)));
        self.last_line_count = count(frame, |p| matches!(p, Primitive::Line(_)));
        self.last_text_count = count(frame, |p| matches!(p, Primitive::Text(_)));
        Ok(())
    }
}

fn count(frame: &RenderFrame, predicate: impl Fn(&Primitive) -> bool) -> usize {
    frame
        .commands
        .iter()
        .filter(|command| predicate(&command.primitive))
        .count()
}
