pub const DEFAULT_PREVIEW_ALT: &str = "Project preview";
pub const FALLBACK_TITLE: &str = "Preview";
pub const FALLBACK_CAPTION: &str = "Click to view";

pub const DEFAULT_FALLBACK_GRADIENT: Gradient = Gradient::new("#5DE7D4", "#8B5CF6");

/// Two-stop diagonal gradient painted in place of a preview image that failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    pub fn css(&self) -> String {
        format!("linear-gradient(to bottom right, {}, {})", self.from, self.to)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        DEFAULT_FALLBACK_GRADIENT
    }
}

/// Display state of a preview. `Fallback` is terminal: there is no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Image,
    Fallback,
}

impl PreviewState {
    pub fn on_load_error(self) -> Self {
        PreviewState::Fallback
    }

    pub fn shows_image(self) -> bool {
        matches!(self, PreviewState::Image)
    }
}

/// A preview image reference from the content catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub fallback: Gradient,
}
