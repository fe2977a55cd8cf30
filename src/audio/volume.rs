/// Normalized output volume, always within `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Clamp `level` into range. NaN is treated as silence.
    pub fn new(level: f32) -> Self {
        if level.is_nan() {
            Self(0.0)
        } else {
            Self(level.clamp(0.0, 1.0))
        }
    }

    pub fn level(self) -> f32 {
        self.0
    }

    /// A new volume moved by `delta`, clamped.
    pub fn nudged(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Whole percent, for display.
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(0.3)
    }
}
