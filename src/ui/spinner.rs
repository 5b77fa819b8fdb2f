/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animated loading indicator. Advanced once per UI tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spinner {
    tick: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick = (self.tick + 1) % SPINNER_FRAMES.len();
    }

    pub fn frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick]
    }
}
