/// Latest pointer location in client (viewport) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowStyle {
    pub radius_px: u32,
    pub color: &'static str,
    pub fade_percent: u32,
    pub transition: &'static str,
}

pub const DEFAULT_GLOW: GlowStyle = GlowStyle {
    radius_px: 600,
    color: "rgba(80, 120, 255, 0.10)",
    fade_percent: 80,
    transition: "background 0.1s",
};

impl Default for GlowStyle {
    fn default() -> Self {
        DEFAULT_GLOW
    }
}

impl GlowStyle {
    pub fn background(&self, pos: PointerPosition) -> String {
        format!(
            "radial-gradient({}px at {}px {}px, {}, transparent {}%)",
            self.radius_px,
            css_px(pos.x),
            css_px(pos.y),
            self.color,
            self.fade_percent
        )
    }

    /// Inline `style` attribute for the glow layer.
    pub fn style(&self, pos: PointerPosition) -> String {
        format!(
            "background: {}; transition: {};",
            self.background(pos),
            self.transition
        )
    }
}

// Pointer coordinates are whole pixels in practice; keep fractional ones short.
fn css_px(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
