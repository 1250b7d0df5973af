use crate::section::SectionId;

pub const BOTTOM_MARGIN_RATIO_DEFAULT: f64 = 0.4;
pub const VISIBILITY_THRESHOLD_DEFAULT: f64 = 0.1;

/// Observation parameters shared by the browser observer and the geometric fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the viewport height, measured from the bottom, that does not count as visible.
    pub bottom_margin_ratio: f64,
    pub threshold: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            bottom_margin_ratio: BOTTOM_MARGIN_RATIO_DEFAULT,
            threshold: VISIBILITY_THRESHOLD_DEFAULT,
        }
    }
}

impl ObserverConfig {
    /// Bottom margin as the whole percent handed to the browser.
    pub fn bottom_margin_percent(&self) -> u32 {
        if !self.bottom_margin_ratio.is_finite() {
            return 0;
        }
        (self.bottom_margin_ratio.clamp(0.0, 1.0) * 100.0).round() as u32
    }

    /// CSS margin string in `IntersectionObserverInit.rootMargin` form.
    pub fn root_margin(&self) -> String {
        let percent = self.bottom_margin_percent();
        if percent == 0 {
            return "0px 0px 0px 0px".to_string();
        }
        format!("0px 0px -{percent}% 0px")
    }

    pub fn threshold(&self) -> f64 {
        self.threshold.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());
        if bottom <= top || right <= left {
            return None;
        }
        Some(Rect::new(top, left, right - left, bottom - top))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The part of the viewport that counts as visible once the bottom margin is cut off.
    pub fn visible_band(&self, config: &ObserverConfig) -> Rect {
        let keep = 1.0 - f64::from(config.bottom_margin_percent()) / 100.0;
        Rect::new(0.0, 0.0, self.width.max(0.0), self.height.max(0.0) * keep)
    }
}

/// One visibility report for a section, as delivered by an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionVisibility {
    pub id: SectionId,
    pub ratio: f64,
    pub intersecting: bool,
}

impl SectionVisibility {
    pub fn new(id: SectionId, ratio: f64, intersecting: bool) -> Self {
        Self {
            id,
            ratio,
            intersecting,
        }
    }

    fn effective_ratio(&self) -> f64 {
        if self.ratio.is_finite() {
            self.ratio
        } else {
            0.0
        }
    }
}

/// Measures a section's layout rect (viewport coordinates) against the visible band.
pub fn measure(
    id: SectionId,
    rect: Rect,
    viewport: Viewport,
    config: &ObserverConfig,
) -> SectionVisibility {
    let area = rect.area();
    if area <= 0.0 {
        return SectionVisibility::new(id, 0.0, false);
    }
    let band = viewport.visible_band(config);
    match rect.intersection(&band) {
        Some(visible) => {
            let ratio = (visible.area() / area).clamp(0.0, 1.0);
            SectionVisibility::new(id, ratio, visible.area() > 0.0)
        }
        None => SectionVisibility::new(id, 0.0, false),
    }
}

/// Picks the intersecting section with the highest ratio.
///
/// Returns `None` when nothing intersects. On an exact tie the entry that
/// appears first in `entries` wins.
pub fn most_visible(entries: &[SectionVisibility]) -> Option<SectionId> {
    let mut best: Option<(SectionId, f64)> = None;
    for entry in entries.iter().filter(|entry| entry.intersecting) {
        let ratio = entry.effective_ratio();
        match best {
            Some((_, best_ratio)) if ratio <= best_ratio => {}
            _ => best = Some((entry.id, ratio)),
        }
    }
    best.map(|(id, _)| id)
}
