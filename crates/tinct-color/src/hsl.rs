// SPDX-License-Identifier: MIT
//
// HSL ↔ sRGB conversion.
//
// Hue is in degrees and wraps modulo 360. Saturation and lightness are
// percentages in [0, 100]. `Color → Hsl` rounds all three components to the
// nearest integer; `Hsl → Color` accepts fractional components so gradients
// can interpolate between two integer HSL endpoints.
//
// The reverse direction is the classic six-sextant piecewise formula:
//
//   C = (1 - |2L - 1|) * S          chroma
//   X = C * (1 - |(H / 60) mod 2 - 1|)
//   m = L - C / 2
//
//   H ∈ [  0,  60)  →  (C, X, 0)
//   H ∈ [ 60, 120)  →  (X, C, 0)
//   H ∈ [120, 180)  →  (0, C, X)
//   H ∈ [180, 240)  →  (0, X, C)
//   H ∈ [240, 300)  →  (X, 0, C)
//   H ∈ [300, 360)  →  (C, 0, X)
//
// then each channel is (component + m) * 255, rounded.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Hue / saturation / lightness.
///
/// Produced by [`Color::to_hsl`] with integer-valued components; may carry
/// fractional values when constructed directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue angle in degrees, [0, 360).
    pub h: f64,
    /// Saturation percentage, [0, 100].
    pub s: f64,
    /// Lightness percentage, [0, 100].
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert an sRGB color to integer-rounded HSL.
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let r = f64::from(color.r) / 255.0;
        let g = f64::from(color.g) / 255.0;
        let b = f64::from(color.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if color.r == color.g && color.g == color.b {
            return Self::new(0.0, 0.0, (l * 100.0).round());
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        // Ties resolve in r, g, b order.
        let sector = if color.r >= color.g && color.r >= color.b {
            (g - b) / d + if color.g < color.b { 6.0 } else { 0.0 }
        } else if color.g >= color.b {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(
            normalize_hue((sector / 6.0 * 360.0).round()),
            (s * 100.0).round(),
            (l * 100.0).round(),
        )
    }

    /// Convert to an sRGB color.
    ///
    /// Hue is normalized into [0, 360) first; saturation and lightness are
    /// clamped to [0, 100].
    #[must_use]
    pub fn to_color(self) -> Color {
        let h = normalize_hue(self.h);
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color::rgb(to_u8(r + m), to_u8(g + m), to_u8(b + m))
    }

    /// Rotate hue by `degrees`, keeping saturation and lightness.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self { h: normalize_hue(self.h + degrees), ..self }
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}

/// Normalize a hue angle to [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Scale a 0.0–1.0 component to a byte, rounding half up.
#[inline]
fn to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
