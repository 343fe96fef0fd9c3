//! Color harmonies: related-color sets derived from one base color.
//!
//! Every harmony is a pure rotation (or lightness ladder) in HSL space. The
//! base color itself is returned verbatim in its slot, never re-derived
//! through HSL, so callers always get back exactly the color they passed in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tinct_color::Color;
use tracing::debug;

use crate::error::ThemeError;

/// Lightness bounds for the monochromatic ladder.
const MONO_MIN_L: f64 = 10.0;
const MONO_MAX_L: f64 = 90.0;

/// The kind of harmony used to derive a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    /// Base + its 180° opposite (2 colors).
    Complementary,
    /// -30°, base, +30° (3 colors).
    #[default]
    Analogous,
    /// 120° spacing (3 colors).
    Triadic,
    /// 90° spacing (4 colors).
    Tetradic,
    /// Same hue, lightness ladder (5 colors).
    Monochromatic,
}

impl Harmony {
    /// Generate this harmony's palette from `base`.
    #[must_use]
    pub fn generate(self, base: Color) -> Vec<Color> {
        match self {
            Self::Complementary => vec![base, complementary(base)],
            Self::Analogous => analogous(base).to_vec(),
            Self::Triadic => triadic(base).to_vec(),
            Self::Tetradic => tetradic(base).to_vec(),
            Self::Monochromatic => monochromatic(base).to_vec(),
        }
    }

    /// Lowercase name of this harmony.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Parse a harmony from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|h| h.name() == lower).copied()
    }

    /// All harmony kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Analogous,
            Self::Triadic,
            Self::Tetradic,
            Self::Monochromatic,
        ]
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ThemeError::UnknownHarmony(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Palette dispatch
// ---------------------------------------------------------------------------

/// Derive a palette from `base` with the given harmony.
#[must_use]
pub fn palette_from_color(base: Color, harmony: Harmony) -> Vec<Color> {
    harmony.generate(base)
}

/// Derive a palette from a harmony name.
///
/// An unknown name is not an error: the palette is just `[base]`.
#[must_use]
pub fn palette_from_name(base: Color, harmony: &str) -> Vec<Color> {
    Harmony::from_name(harmony).map_or_else(
        || {
            debug!(harmony, "unknown harmony, returning base color only");
            vec![base]
        },
        |h| h.generate(base),
    )
}

// ---------------------------------------------------------------------------
// Individual harmonies
// ---------------------------------------------------------------------------

/// Hue rotated 180°.
#[must_use]
pub fn complementary(base: Color) -> Color {
    base.complement()
}

/// `[hue - 30°, base, hue + 30°]`.
#[must_use]
pub fn analogous(base: Color) -> [Color; 3] {
    [base.shift_hue(-30.0), base, base.shift_hue(30.0)]
}

/// `[base, hue + 120°, hue + 240°]`.
#[must_use]
pub fn triadic(base: Color) -> [Color; 3] {
    [base, base.shift_hue(120.0), base.shift_hue(240.0)]
}

/// `[base, hue + 90°, hue + 180°, hue + 270°]`.
#[must_use]
pub fn tetradic(base: Color) -> [Color; 4] {
    [
        base,
        base.shift_hue(90.0),
        base.shift_hue(180.0),
        base.shift_hue(270.0),
    ]
}

/// `[l - 30, l - 15, base, l + 15, l + 30]`, each derived lightness
/// clamped to [10, 90]. Hue and saturation are unchanged.
#[must_use]
pub fn monochromatic(base: Color) -> [Color; 5] {
    let l = base.to_hsl().l;
    let step = |delta: f64| base.with_lightness((l + delta).clamp(MONO_MIN_L, MONO_MAX_L));
    [step(-30.0), step(-15.0), base, step(15.0), step(30.0)]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    fn hues(colors: &[Color]) -> Vec<f64> {
        colors.iter().map(|c| c.to_hsl().h).collect()
    }

    #[test]
    fn complementary_of_red() {
        let red = hex("#ff0000");
        assert_eq!(Harmony::Complementary.generate(red), vec![red, hex("#00ffff")]);
    }

    #[test]
    fn analogous_order_is_minus_base_plus() {
        let base = Color::hsl(120.0, 100.0, 50.0);
        let palette = analogous(base);
        assert_eq!(hues(&palette), vec![90.0, 120.0, 150.0]);
        assert_eq!(palette[1], base);
    }

    #[test]
    fn analogous_wraps_below_zero() {
        let palette = analogous(hex("#ff0000"));
        assert_eq!(hues(&palette), vec![330.0, 0.0, 30.0]);
    }

    #[test]
    fn triadic_spacing() {
        let palette = triadic(hex("#ff0000"));
        assert_eq!(palette, [hex("#ff0000"), hex("#00ff00"), hex("#0000ff")]);
    }

    #[test]
    fn tetradic_spacing() {
        let palette = tetradic(hex("#ff0000"));
        assert_eq!(hues(&palette), vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn monochromatic_ladder() {
        let base = Color::hsl(200.0, 60.0, 50.0);
        let palette = monochromatic(base);
        let ls: Vec<f64> = palette.iter().map(|c| c.to_hsl().l).collect();
        assert_eq!(ls, vec![20.0, 35.0, 50.0, 65.0, 80.0]);
        assert_eq!(palette[2], base);
    }

    #[test]
    fn monochromatic_clamps_to_10_and_90() {
        let dark = Color::hsl(200.0, 60.0, 15.0);
        let ls: Vec<f64> = monochromatic(dark).iter().map(|c| c.to_hsl().l).collect();
        assert_eq!(ls[0], 10.0);
        assert_eq!(ls[1], 10.0);

        let light = Color::hsl(200.0, 60.0, 85.0);
        let ls: Vec<f64> = monochromatic(light).iter().map(|c| c.to_hsl().l).collect();
        assert_eq!(ls[3], 90.0);
        assert_eq!(ls[4], 90.0);
    }

    #[test]
    fn palette_sizes() {
        let base = hex("#4a90e2");
        let sizes: Vec<usize> =
            Harmony::all().iter().map(|h| palette_from_color(base, *h).len()).collect();
        assert_eq!(sizes, vec![2, 3, 3, 4, 5]);
    }

    #[test]
    fn unknown_harmony_fails_soft() {
        let base = hex("#4a90e2");
        assert_eq!(palette_from_name(base, "split-complementary"), vec![base]);
        assert_eq!(palette_from_name(base, "TRIADIC"), triadic(base).to_vec());
    }

    #[test]
    fn names_roundtrip() {
        for h in Harmony::all() {
            assert_eq!(Harmony::from_name(h.name()), Some(*h));
            assert_eq!(h.name().parse::<Harmony>().unwrap(), *h);
        }
        assert!(matches!("nope".parse::<Harmony>(), Err(ThemeError::UnknownHarmony(_))));
    }

    #[test]
    fn default_is_analogous() {
        assert_eq!(Harmony::default(), Harmony::Analogous);
    }
}
