use draft_core::EditorState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Boundary to the external rendering layer: converts the current caret
/// location into screen coordinates for the suggestion list.
pub trait PositionProbe {
    fn caret_rect(&self, state: &EditorState) -> Option<CaretRect>;
}

/// After-commit measurement contract. Mutations call `invalidate`; the host
/// calls `run` strictly after the mutation has been committed and rendered.
/// Measurement never precedes the triggering mutation, and a run without a
/// pending invalidation leaves the last measurement untouched.
#[derive(Debug, Default)]
pub struct DeferredMeasure {
    pending: bool,
    rect: Option<CaretRect>,
}

impl DeferredMeasure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn run(&mut self, probe: &dyn PositionProbe, state: &EditorState) {
        if !std::mem::take(&mut self.pending) {
            return;
        }
        self.rect = probe.caret_rect(state);
    }

    pub fn rect(&self) -> Option<CaretRect> {
        self.rect
    }
}
