/// Discrete request from an input source (keyboard, pointer, remote)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Previous,
    Next,
    /// Jump to a slide; any integer is accepted and wrapped into range
    GoTo(i64),
    Pause,
    Resume,
}

impl Intent {
    /// Whether the intent asks for a slide change
    pub fn is_navigation(&self) -> bool {
        matches!(self, Intent::Previous | Intent::Next | Intent::GoTo(_))
    }
}
