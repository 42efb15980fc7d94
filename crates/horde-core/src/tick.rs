/// Per-frame timing handed to every system step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    /// Wall time covered by this frame, in milliseconds.
    pub elapsed_ms: f32,
}

impl TickContext {
    pub fn new(tick: u64, elapsed_ms: f32) -> Self {
        Self { tick, elapsed_ms }
    }
}
