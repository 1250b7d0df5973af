pub mod catalog;
pub mod glow;
pub mod preview;
pub mod section;
pub mod tracker;
pub mod visibility;

pub use glow::{GlowStyle, PointerPosition, DEFAULT_GLOW};
pub use preview::{Gradient, PreviewImage, PreviewState, DEFAULT_FALLBACK_GRADIENT, DEFAULT_PREVIEW_ALT};
pub use section::{SectionId, SectionIdError, SECTIONS};
pub use tracker::{ActiveSection, ScrollTarget};
pub use visibility::{measure, most_visible, ObserverConfig, Rect, SectionVisibility, Viewport};
