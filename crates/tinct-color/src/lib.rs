// SPDX-License-Identifier: MIT
//
// tinct-color: the color space layer for tinct.
//
// Everything above this crate (contrast repair, harmonies, theme synthesis,
// gradients) works on two representations:
//
//   Color  : an exact 24-bit sRGB value, written as `#rrggbb`
//   Hsl    : hue / saturation / lightness in degrees and percentages
//
// Conversion pipeline:
//
//   "#RRGGBB" ↔ Color ↔ Hsl
//                 │
//                 └─→ WCAG relative luminance
//
// Parsing never panics. A malformed string yields `None` (or a
// `ParseColorError` through `FromStr`), and the caller decides what to do.

// Single-char names (r, g, b, h, s, l, c, x, m) are the color-science convention.
#![allow(clippy::many_single_char_names)]
// Channel math goes through f64 and back to u8 after an explicit clamp.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod color;
pub mod hsl;

pub use color::{Color, ParseColorError};
pub use hsl::Hsl;
