//! Screen reader announcements through a polite live region.

use std::time::Duration;

/// How long an announcement stays in the region before it is cleared.
pub const ANNOUNCEMENT_TTL: Duration = Duration::from_millis(1000);

/// Content of an `aria-live="polite"` region.
///
/// Each announcement bumps a generation counter; a delayed clear only
/// applies if no newer announcement replaced the text in the meantime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Announcer {
    message: String,
    generation: u64,
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the region text. Returns the generation to clear later.
    pub fn announce(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = message.into();
        self.generation
    }

    /// Clear the region if `generation` is still the latest announcement.
    pub fn clear(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_empty() {
            return false;
        }
        self.message.clear();
        true
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
