//! # tinct-theme: color themes with readable contrast
//!
//! Derives five-color themes (background, text, primary, secondary, accent)
//! from a mood, a free-text description, a single base color, or a handful
//! of extracted colors, and keeps them readable against WCAG contrast
//! thresholds.
//!
//! # Architecture
//!
//! ```text
//! mood / description / base color / extracted colors
//!     │
//!     ▼
//! presets.rs:  static mood palettes and starter themes
//! harmony.rs:  related colors by hue rotation or lightness ladder
//!     │
//!     ▼
//! synth.rs:    assemble a Theme (theme.rs)
//!     │
//!     ▼
//! contrast.rs: WCAG ratio, AA/AAA grading, lightness-walk repair
//!     │
//!     ▼
//! gradient.rs, naming.rs: presentation helpers over finished colors
//! ```
//!
//! # Color Space
//!
//! All color math goes through integer-rounded HSL from `tinct-color`.
//! Every function is pure and synchronous; the only randomness is the mood
//! palette pick, which takes an injectable [`synth::PaletteChooser`].

// Ratios and stop positions come from small integer-to-float casts.
#![allow(clippy::cast_precision_loss)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod contrast;
pub mod error;
pub mod gradient;
pub mod harmony;
pub mod naming;
pub mod options;
pub mod presets;
pub mod synth;
pub mod theme;

pub use contrast::{
    AccessibilityReport, ContrastReport, Verdict, WcagLevel, analyze_accessibility,
    auto_fix_contrast, check_wcag, contrast_ratio, ensure_accessibility,
};
pub use error::ThemeError;
pub use gradient::{Gradient, GradientStop, gradient, smart_gradient};
pub use harmony::{Harmony, palette_from_color, palette_from_name};
pub use naming::{color_name, color_name_of};
pub use options::{Options, OptionsError};
pub use presets::{mood_names, preset_ids, preset_theme};
pub use synth::{
    PaletteChooser, suggest_variations, theme_from_color, theme_from_color_named,
    theme_from_description, theme_from_extracted, theme_from_mood, theme_from_mood_with,
};
pub use theme::Theme;
pub use tinct_color::{Color, Hsl, ParseColorError};
