//! Lazy video loading and playback policy.

/// What the page should do with a `<video>` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoAction {
    None,
    /// Call `load()`
    Load,
    /// Call `load()` then `play()`
    LoadAndPlay,
    Play,
    Pause,
}

/// Per-video state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyVideo {
    pub src: String,
    /// Defer loading until the video scrolls into view
    pub lazy: bool,
    pub autoplay: bool,
    loaded: bool,
    failed: bool,
}

impl LazyVideo {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            lazy: true,
            autoplay: false,
            loaded: false,
            failed: false,
        }
    }

    pub fn eager(mut self) -> Self {
        self.lazy = false;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The video failed and its fallback should be shown instead.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Whether the `src` should be attached to the element now.
    pub fn should_attach_source(&self) -> bool {
        !self.lazy || self.loaded
    }

    /// The video entered the viewport. Loads once; autoplays only when
    /// requested and reduced motion is not preferred.
    pub fn on_visible(&mut self, prefers_reduced_motion: bool) -> VideoAction {
        if self.loaded || self.failed {
            return VideoAction::None;
        }
        self.loaded = true;
        if self.autoplay && !prefers_reduced_motion {
            VideoAction::LoadAndPlay
        } else {
            VideoAction::Load
        }
    }

    /// The page became hidden or visible again.
    pub fn on_page_visibility(&self, hidden: bool) -> VideoAction {
        if self.failed {
            VideoAction::None
        } else if hidden {
            VideoAction::Pause
        } else if self.autoplay {
            VideoAction::Play
        } else {
            VideoAction::None
        }
    }

    pub fn on_error(&mut self) {
        if !self.failed {
            tracing::warn!(src = %self.src, "video failed to load");
        }
        self.failed = true;
    }
}
