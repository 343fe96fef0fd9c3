// SPDX-License-Identifier: MIT
//
// tinct color values: exact 24-bit sRGB with HSL tone operations.
//
// A `Color` is three bytes. It cannot hold an out-of-range channel, so the
// only failure mode in this module is parsing. Every tone operation
// (lighten, darken, saturate, desaturate, hue rotation) round-trips through
// integer-rounded HSL, which matches how theme colors are authored.
//
// Canonical text form is lowercase `#rrggbb`. Input is case-insensitive,
// the leading `#` is optional, and nothing but exactly six hex digits is
// accepted; no `#rgb` shorthand, no alpha.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::hsl::Hsl;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque 24-bit sRGB color.
///
/// # Examples
///
/// ```
/// use tinct_color::Color;
///
/// let blue = Color::hex("#3B82F6").unwrap();
/// assert_eq!(blue.to_hex(), "#3b82f6");
///
/// let lighter = blue.lighten(10.0);
/// let complement = blue.complement();
/// assert_ne!(lighter, complement);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value. The top byte is ignored.
    #[inline]
    #[must_use]
    pub const fn from_u32(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Create a color from wider integers, clamping each channel to 0–255.
    ///
    /// This is the defined behavior for out-of-range channel input: values
    /// below zero become 0 and values above 255 become 255.
    #[must_use]
    pub fn from_rgb_clamped(r: i32, g: i32, b: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        Self::rgb(clamp(r), clamp(g), clamp(b))
    }

    /// Parse a `#RRGGBB` / `RRGGBB` hex string (case-insensitive).
    ///
    /// Returns `None` for anything that is not exactly six hex digits after
    /// an optional leading `#`.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Build a color from HSL components (see [`Hsl::to_color`]).
    #[must_use]
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Hsl::new(h, s, l).to_color()
    }

    /// A uniformly random color drawn from `rng`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_u32(rng.random_range(0..=0x00FF_FFFF))
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Output ──────────────────────────────────────────────────────────

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an `(r, g, b)` tuple.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert to HSL with hue, saturation and lightness rounded to integers.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_color(self)
    }

    // ─── Luminance ───────────────────────────────────────────────────────

    /// WCAG 2.x relative luminance in [0.0, 1.0].
    ///
    ///   L = 0.2126 * R + 0.7152 * G + 0.0722 * B
    ///
    /// where each channel is linearized with the 0.03928 threshold and the
    /// 2.4 exponent.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let r = srgb_to_linear(f64::from(self.r) / 255.0);
        let g = srgb_to_linear(f64::from(self.g) / 255.0);
        let b = srgb_to_linear(f64::from(self.b) / 255.0);
        0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
    }

    /// Luminance above 0.5.
    #[must_use]
    pub fn is_light(self) -> bool {
        self.relative_luminance() > 0.5
    }

    /// Luminance at or below 0.5. Exactly 0.5 counts as dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.relative_luminance() <= 0.5
    }

    // ─── Tone Operations ─────────────────────────────────────────────────
    //
    // All of these go through integer HSL and clamp to [0, 100].

    /// Add `percent` points of lightness (clamped to 100).
    #[must_use]
    pub fn lighten(self, percent: f64) -> Self {
        let hsl = self.to_hsl();
        Hsl { l: (hsl.l + percent).min(100.0), ..hsl }.to_color()
    }

    /// Remove `percent` points of lightness (clamped to 0).
    #[must_use]
    pub fn darken(self, percent: f64) -> Self {
        let hsl = self.to_hsl();
        Hsl { l: (hsl.l - percent).max(0.0), ..hsl }.to_color()
    }

    /// Add `percent` points of saturation (clamped to 100).
    #[must_use]
    pub fn saturate(self, percent: f64) -> Self {
        let hsl = self.to_hsl();
        Hsl { s: (hsl.s + percent).min(100.0), ..hsl }.to_color()
    }

    /// Remove `percent` points of saturation (clamped to 0).
    #[must_use]
    pub fn desaturate(self, percent: f64) -> Self {
        let hsl = self.to_hsl();
        Hsl { s: (hsl.s - percent).max(0.0), ..hsl }.to_color()
    }

    /// Replace lightness with an absolute value (clamped to 0–100).
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Hsl { l: l.clamp(0.0, 100.0), ..self.to_hsl() }.to_color()
    }

    /// Rotate the hue by `degrees` (wraps around 360°).
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        self.to_hsl().rotate(degrees).to_color()
    }

    /// The complementary color (hue rotated 180°).
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// A string that is not a six-digit hex color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color format: {input:?} (expected #RRGGBB)")]
pub struct ParseColorError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).ok_or_else(|| ParseColorError { input: s.to_owned() })
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some(Color::rgb(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Serde ───────────────────────────────────────────────────────────────────
//
// Colors travel as their canonical hex string.

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ─── String-level helpers ────────────────────────────────────────────────────
//
// Thin wrappers for callers that hold raw hex strings. Parse failure maps to
// `None` (or to 0 luminance), never to a panic.

/// Parse a hex string into RGB channels.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    Color::hex(hex).map(Color::to_rgb8)
}

/// Format channels as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Color::rgb(r, g, b).to_hex()
}

/// Parse a hex string into integer-rounded HSL.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    Color::hex(hex).map(Color::to_hsl)
}

/// Convert HSL components to lowercase `#rrggbb`.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Color::hsl(h, s, l).to_hex()
}

/// Relative luminance of a hex string, or 0.0 if it does not parse.
#[must_use]
pub fn luminance_of(hex: &str) -> f64 {
    Color::hex(hex).map_or(0.0, Color::relative_luminance)
}

// ─── Gamma ───────────────────────────────────────────────────────────────────

/// Linearize one sRGB component (0.0–1.0) using the WCAG constants.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
