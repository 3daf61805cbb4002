use std::fmt;
use std::str::FromStr;

use crate::error::SceneError;

/// Image-based lighting presets understood by the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnvironmentPreset {
    Sunset,
    Dawn,
    Night,
    #[default]
    Warehouse,
    Forest,
    Apartment,
    Studio,
    City,
    Park,
    Lobby,
}

impl EnvironmentPreset {
    /// All presets.
    pub const ALL: [Self; 10] = [
        Self::Sunset,
        Self::Dawn,
        Self::Night,
        Self::Warehouse,
        Self::Forest,
        Self::Apartment,
        Self::Studio,
        Self::City,
        Self::Park,
        Self::Lobby,
    ];

    /// Returns the preset name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunset => "sunset",
            Self::Dawn => "dawn",
            Self::Night => "night",
            Self::Warehouse => "warehouse",
            Self::Forest => "forest",
            Self::Apartment => "apartment",
            Self::Studio => "studio",
            Self::City => "city",
            Self::Park => "park",
            Self::Lobby => "lobby",
        }
    }

    /// Returns the HDR environment map the preset resolves to.
    #[must_use]
    pub fn hdri_file(self) -> &'static str {
        match self {
            Self::Sunset => "venice_sunset_1k.hdr",
            Self::Dawn => "kiara_1_dawn_1k.hdr",
            Self::Night => "dikhololo_night_1k.hdr",
            Self::Warehouse => "empty_warehouse_01_1k.hdr",
            Self::Forest => "forest_slope_1k.hdr",
            Self::Apartment => "lebombo_1k.hdr",
            Self::Studio => "studio_small_03_1k.hdr",
            Self::City => "potsdamer_platz_1k.hdr",
            Self::Park => "rooitou_park_1k.hdr",
            Self::Lobby => "st_fagans_interior_1k.hdr",
        }
    }
}

impl fmt::Display for EnvironmentPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvironmentPreset {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SceneError::InvalidConfig(format!("unknown environment preset: {s}")))
    }
}

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GOLD: Self = Self(255, 215, 0);
    pub const ORANGE: Self = Self(255, 165, 0);

    /// Linearly blends toward `other` by `t` in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Radial gradient painted behind the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    /// Color at the center of the viewport.
    pub inner: Rgb,
    /// Color at the farthest corner.
    pub outer: Rgb,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            inner: Rgb::GOLD,
            outer: Rgb::ORANGE,
        }
    }
}

impl Backdrop {
    /// Color at normalized viewport coordinates (`[0, 1]` on both axes).
    ///
    /// The gradient reaches `outer` at the corners.
    #[must_use]
    pub fn color_at(&self, u: f64, v: f64) -> Rgb {
        let (dx, dy) = (u - 0.5, v - 0.5);
        let t = (dx * dx + dy * dy).sqrt() / 0.5_f64.hypot(0.5);
        self.inner.lerp(self.outer, t)
    }
}
