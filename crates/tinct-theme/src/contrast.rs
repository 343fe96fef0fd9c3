//! WCAG contrast ratio checks and best-effort repair.
//!
//! Thresholds (WCAG 2.x):
//!
//! - AA normal text: >= 4.5:1
//! - AA large text: >= 3.0:1
//! - AAA normal text: >= 7.0:1
//! - AAA large text: >= 4.5:1
//!
//! Measurement happens on relative luminance; repair happens on HSL
//! lightness with hue and saturation held fixed. Repair is a coarse
//! 5-point step search, not a solver: it returns the first lightness that
//! meets the target, or the last one it tried. Callers must re-check the
//! result if they need a guarantee.

use serde::{Deserialize, Serialize};
use tinct_color::{Color, Hsl};
use tracing::debug;

use crate::theme::Theme;

/// Default target for body text (WCAG AA, normal size).
pub const DEFAULT_TARGET_RATIO: f64 = 4.5;

/// Threshold for large text and UI components (WCAG AA, large size).
/// Primary and accent are always repaired against this value.
pub const LARGE_TEXT_RATIO: f64 = 3.0;

/// WCAG AAA, normal size.
pub const AAA_RATIO: f64 = 7.0;

/// Lightness step of the repair search, in percentage points.
const FIX_STEP: u8 = 5;

/// Largest lightness offset the repair search tries.
const FIX_MAX_OFFSET: u8 = 90;

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex strings. Unparsable input counts as
/// luminance 0 (black).
#[must_use]
pub fn contrast_ratio_hex(a: &str, b: &str) -> f64 {
    let color = |s: &str| Color::hex(s).unwrap_or(Color::BLACK);
    contrast_ratio(color(a), color(b))
}

// ---------------------------------------------------------------------------
// ContrastReport
// ---------------------------------------------------------------------------

/// Summary compliance level for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WcagLevel {
    Fail,
    Aa,
    Aaa,
}

impl WcagLevel {
    /// Classify a ratio: AAA at 7.0, AA at 4.5, otherwise FAIL.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_RATIO {
            Self::Aaa
        } else if ratio >= DEFAULT_TARGET_RATIO {
            Self::Aa
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WCAG compliance for one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    /// Contrast ratio rounded to two decimals.
    pub ratio: f64,
    /// AA, normal text (>= 4.5).
    pub aa: bool,
    /// AA, large text (>= 3.0).
    pub aa_large: bool,
    /// AAA, normal text (>= 7.0).
    pub aaa: bool,
    /// AAA, large text (>= 4.5).
    pub aaa_large: bool,
    pub level: WcagLevel,
}

impl ContrastReport {
    /// Build a report from an exact ratio. The pass flags use the exact
    /// value; only the stored `ratio` is rounded.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio: (ratio * 100.0).round() / 100.0,
            aa: ratio >= DEFAULT_TARGET_RATIO,
            aa_large: ratio >= LARGE_TEXT_RATIO,
            aaa: ratio >= AAA_RATIO,
            aaa_large: ratio >= DEFAULT_TARGET_RATIO,
            level: WcagLevel::from_ratio(ratio),
        }
    }
}

/// Check a foreground/background pair against the WCAG thresholds.
#[must_use]
pub fn check_wcag(fg: Color, bg: Color) -> ContrastReport {
    ContrastReport::from_ratio(contrast_ratio(fg, bg))
}

// ---------------------------------------------------------------------------
// Repair
// ---------------------------------------------------------------------------

/// Push `fg`'s lightness away from `bg` until the pair reaches
/// `target_ratio`.
///
/// Returns `fg` untouched when it already passes. Otherwise tries
/// lightness offsets 5, 10, ..., 90 from the original (darkening when `bg`
/// is the lighter of the two, lightening otherwise), clamped to [0, 100],
/// and returns the first candidate that passes.
///
/// Best-effort: if no step passes, the last candidate (offset 90) is
/// returned and the target is **not** met.
#[must_use]
pub fn auto_fix_contrast(fg: Color, bg: Color, target_ratio: f64) -> Color {
    if contrast_ratio(fg, bg) >= target_ratio {
        return fg;
    }

    let hsl = fg.to_hsl();
    let darken = bg.relative_luminance() > fg.relative_luminance();

    let mut candidate = fg;
    for offset in (FIX_STEP..=FIX_MAX_OFFSET).step_by(usize::from(FIX_STEP)) {
        let offset = f64::from(offset);
        let l = if darken {
            (hsl.l - offset).max(0.0)
        } else {
            (hsl.l + offset).min(100.0)
        };
        candidate = Hsl { l, ..hsl }.to_color();
        if contrast_ratio(candidate, bg) >= target_ratio {
            debug!(%fg, %bg, fixed = %candidate, target_ratio, "contrast repaired");
            return candidate;
        }
    }

    debug!(
        %fg, %bg, last = %candidate, target_ratio,
        ratio = contrast_ratio(candidate, bg),
        "contrast target not reached"
    );
    candidate
}

/// Repair a theme's readability against its background.
///
/// - text: repaired to `target_ratio` if below it
/// - primary: repaired to 3.0 if below 3.0
/// - accent: repaired to 3.0 if below 3.0
///
/// Primary and accent always use the large-text threshold regardless of
/// `target_ratio`. Background and secondary are never touched. Returns a
/// new theme; the result is best-effort (see [`auto_fix_contrast`]).
#[must_use]
pub fn ensure_accessibility(theme: &Theme, target_ratio: f64) -> Theme {
    let bg = theme.background;
    let fix = |color: Color, target: f64| {
        if contrast_ratio(color, bg) < target {
            auto_fix_contrast(color, bg, target)
        } else {
            color
        }
    };

    Theme {
        text: fix(theme.text, target_ratio),
        primary: fix(theme.primary, LARGE_TEXT_RATIO),
        accent: fix(theme.accent, LARGE_TEXT_RATIO),
        ..theme.clone()
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Pass/fail verdict for a whole theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        })
    }
}

/// Contrast of text, primary and accent against the background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub text: ContrastReport,
    pub primary: ContrastReport,
    pub accent: ContrastReport,
    /// PASS iff text meets AA and primary and accent meet AA-large.
    pub overall: Verdict,
}

/// Analyze a theme's readability.
#[must_use]
pub fn analyze_accessibility(theme: &Theme) -> AccessibilityReport {
    let text = check_wcag(theme.text, theme.background);
    let primary = check_wcag(theme.primary, theme.background);
    let accent = check_wcag(theme.accent, theme.background);
    let overall = if text.aa && primary.aa_large && accent.aa_large {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    AccessibilityReport { text, primary, accent, overall }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
