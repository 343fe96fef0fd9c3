//! Theme synthesis: whole themes from a mood, a free-text description, a
//! single base color, or a handful of extracted colors.
//!
//! Everything here is deterministic except mood selection, which draws from
//! a [`PaletteChooser`]. The process RNG is the default chooser; tests and
//! callers that need reproducible output pass their own.

use rand::Rng;
use tinct_color::Color;
use tracing::{debug, trace};

use crate::contrast::{DEFAULT_TARGET_RATIO, contrast_ratio, ensure_accessibility};
use crate::harmony::Harmony;
use crate::presets::mood_preset;
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Picks one of `len` candidate palettes.
///
/// Any [`rand::Rng`] is a chooser. An index `>= len` wraps around.
pub trait PaletteChooser {
    fn choose(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> PaletteChooser for R {
    fn choose(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Theme for a named mood, with the palette picked by the thread-local RNG.
///
/// Returns `None` for an unknown mood. Lookup is exact: mood keys are
/// lowercase.
#[must_use]
pub fn theme_from_mood(mood: &str) -> Option<Theme> {
    theme_from_mood_with(mood, &mut rand::rng())
}

/// Theme for a named mood, with the palette picked by `chooser`.
#[must_use]
pub fn theme_from_mood_with<C: PaletteChooser + ?Sized>(
    mood: &str,
    chooser: &mut C,
) -> Option<Theme> {
    let Some(preset) = mood_preset(mood) else {
        debug!(mood, "unknown mood");
        return None;
    };
    let len = preset.palettes.len();
    let index = chooser.choose(len) % len;
    trace!(mood, index, "mood palette chosen");
    Some(preset.palettes[index].to_theme(format!("{} AI", capitalize(mood))))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

// ---------------------------------------------------------------------------
// Description
// ---------------------------------------------------------------------------

const DARK_WORDS: &[&str] = &["dark", "night", "black", "midnight"];
const LIGHT_WORDS: &[&str] = &["light", "bright", "white", "clean"];

/// Keyword families that set primary and accent. First match wins.
const COLOR_FAMILIES: &[(&[&str], u32, u32)] = &[
    (&["blue", "ocean", "sky", "water"], 0x3b_82_f6, 0x06_b6_d4),
    (&["green", "nature", "forest", "earth"], 0x10_b9_81, 0x05_96_69),
    (&["purple", "violet", "lavender"], 0x8b_5c_f6, 0xa7_8b_fa),
    (&["red", "fire", "passion", "warm"], 0xef_44_44, 0xf8_71_71),
    (&["orange", "sunset", "autumn"], 0xf5_9e_0b, 0xfb_92_3c),
    (&["pink", "rose", "romantic"], 0xec_48_99, 0xf4_72_b6),
];

/// The theme returned when a description matches nothing.
#[must_use]
pub fn default_theme() -> Theme {
    Theme::new(
        "AI Generated",
        Color::WHITE,
        Color::from_u32(0x33_33_33),
        Color::from_u32(0x3b_82_f6),
        Color::from_u32(0xf3_f4_f6),
        Color::from_u32(0x10_b9_81),
    )
}

/// Derive a theme from free text by substring keyword matching.
///
/// Never fails. Tone (dark or light) and color family are independent;
/// dark wins when both tones match. Mentioning "contrast" picks black or
/// white text, whichever reads better on the background, and then runs
/// [`ensure_accessibility`] at 4.5.
#[must_use]
pub fn theme_from_description(description: &str) -> Theme {
    let text = description.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| text.contains(w));

    let mut theme = default_theme();

    if mentions(DARK_WORDS) {
        theme.background = Color::from_u32(0x1a_1a_1a);
        theme.text = Color::WHITE;
        theme.secondary = Color::from_u32(0x2d_2d_2d);
    } else if mentions(LIGHT_WORDS) {
        theme.background = Color::WHITE;
        theme.text = Color::from_u32(0x33_33_33);
        theme.secondary = Color::from_u32(0xf3_f4_f6);
    }

    if let Some((_, primary, accent)) =
        COLOR_FAMILIES.iter().find(|(words, _, _)| mentions(words))
    {
        theme.primary = Color::from_u32(*primary);
        theme.accent = Color::from_u32(*accent);
    }

    if text.contains("contrast") {
        let bg = theme.background;
        theme.text = if contrast_ratio(Color::WHITE, bg) >= contrast_ratio(Color::BLACK, bg) {
            Color::WHITE
        } else {
            Color::BLACK
        };
        theme = ensure_accessibility(&theme, DEFAULT_TARGET_RATIO);
    }

    theme
}

// ---------------------------------------------------------------------------
// Base color
// ---------------------------------------------------------------------------

/// Build a theme around `base` using a harmony palette.
///
/// A light base gets a light theme, anything else a dark one. Primary is
/// the palette's first color and accent its second (or the complement).
#[must_use]
pub fn theme_from_color(base: Color, harmony: Harmony) -> Theme {
    let palette = harmony.generate(base);
    let primary = palette.first().copied().unwrap_or(base);
    let accent = palette.get(1).copied().unwrap_or_else(|| base.complement());

    let (background, text, secondary) = if base.is_light() {
        (Color::WHITE, Color::from_u32(0x33_33_33), Color::from_u32(0xf5_f5_f5))
    } else {
        (Color::from_u32(0x1a_1a_1a), Color::WHITE, Color::from_u32(0x2d_2d_2d))
    };

    Theme::new(
        format!("{} Theme", capitalize(harmony.name())),
        background,
        text,
        primary,
        secondary,
        accent,
    )
}

/// Same as [`theme_from_color`] with the harmony given by name.
///
/// An unknown harmony yields a one-color palette, so the accent falls back
/// to the complement. The theme name keeps the name as given.
#[must_use]
pub fn theme_from_color_named(base: Color, harmony: &str) -> Theme {
    if let Some(h) = Harmony::from_name(harmony) {
        return theme_from_color(base, h);
    }
    debug!(harmony, "unknown harmony, using base and complement");
    let theme = theme_from_color(base, Harmony::Complementary);
    theme.with_name(format!("{} Theme", capitalize(harmony)))
}

// ---------------------------------------------------------------------------
// Variations
// ---------------------------------------------------------------------------

/// Four fixed variations of `theme`, always in this order: Light, Dark,
/// Vibrant, Muted.
#[must_use]
pub fn suggest_variations(theme: &Theme) -> [Theme; 4] {
    [
        Theme::new(
            "Light Variation",
            theme.background.lighten(5.0),
            theme.text,
            theme.primary.lighten(10.0),
            theme.secondary.lighten(5.0),
            theme.accent.lighten(10.0),
        ),
        Theme::new(
            "Dark Variation",
            theme.background.darken(5.0),
            theme.text,
            theme.primary.darken(10.0),
            theme.secondary.darken(5.0),
            theme.accent.darken(10.0),
        ),
        Theme::new(
            "Vibrant Variation",
            theme.background,
            theme.text,
            theme.primary.saturate(20.0),
            theme.secondary,
            theme.accent.saturate(20.0),
        ),
        Theme::new(
            "Muted Variation",
            theme.background,
            theme.text,
            theme.primary.desaturate(20.0),
            theme.secondary,
            theme.accent.desaturate(20.0),
        ),
    ]
}

// ---------------------------------------------------------------------------
// Extracted colors
// ---------------------------------------------------------------------------

/// Build a readable theme from dominant colors, most frequent first.
///
/// Needs at least three colors: background, primary, secondary. A fourth
/// becomes the accent, otherwise the primary doubles as accent.
#[must_use]
pub fn theme_from_extracted(colors: &[Color]) -> Option<Theme> {
    let [background, primary, secondary, rest @ ..] = colors else {
        debug!(count = colors.len(), "too few colors to build a theme");
        return None;
    };
    let accent = rest.first().unwrap_or(primary);
    let text = if background.is_dark() {
        Color::WHITE
    } else {
        Color::from_u32(0x33_33_33)
    };
    let theme = Theme::new("Extracted", *background, text, *primary, *secondary, *accent);
    Some(ensure_accessibility(&theme, DEFAULT_TARGET_RATIO))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::MOOD_PRESETS;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hex(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    struct Fixed(usize);

    impl PaletteChooser for Fixed {
        fn choose(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    // -- mood --

    #[test]
    fn mood_with_fixed_chooser() {
        let theme = theme_from_mood_with("calm", &mut Fixed(1)).unwrap();
        assert_eq!(theme.name, "Calm AI");
        assert_eq!(theme.background, hex("#ecfdf5"));
        assert_eq!(theme.primary, hex("#059669"));
    }

    #[test]
    fn mood_chooser_index_wraps() {
        let a = theme_from_mood_with("bold", &mut Fixed(4)).unwrap();
        let b = theme_from_mood_with("bold", &mut Fixed(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_mood_is_one_of_the_candidates() {
        let mut rng = StdRng::seed_from_u64(7);
        for mood in MOOD_PRESETS {
            for _ in 0..10 {
                let theme = theme_from_mood_with(mood.name, &mut rng).unwrap();
                let candidates: Vec<Theme> =
                    mood.palettes.iter().map(|p| p.to_theme(theme.name.clone())).collect();
                assert!(candidates.contains(&theme), "{}: {theme:?}", mood.name);
            }
        }
    }

    #[test]
    fn thread_rng_mood() {
        let theme = theme_from_mood("professional").unwrap();
        assert_eq!(theme.name, "Professional AI");
    }

    #[test]
    fn unknown_mood_is_none() {
        assert!(theme_from_mood("grumpy").is_none());
        assert!(theme_from_mood("Calm").is_none());
    }

    // -- description --

    #[test]
    fn empty_description_is_default() {
        assert_eq!(theme_from_description(""), default_theme());
    }

    #[test]
    fn dark_ocean() {
        let theme = theme_from_description("A dark ocean vibe");
        assert_eq!(theme.name, "AI Generated");
        assert_eq!(theme.background, hex("#1a1a1a"));
        assert_eq!(theme.text, hex("#ffffff"));
        assert_eq!(theme.secondary, hex("#2d2d2d"));
        assert_eq!(theme.primary, hex("#3b82f6"));
        assert_eq!(theme.accent, hex("#06b6d4"));
    }

    #[test]
    fn dark_blue_professional_site() {
        let theme = theme_from_description("a dark blue professional site");
        assert_eq!(theme.name, "AI Generated");
        assert_eq!(theme.background, hex("#1a1a1a"));
        assert_eq!(theme.text, hex("#ffffff"));
        assert_eq!(theme.secondary, hex("#2d2d2d"));
        assert_eq!(theme.primary, hex("#3b82f6"));
        assert_eq!(theme.accent, hex("#06b6d4"));
    }

    #[test]
    fn dark_wins_over_light() {
        let theme = theme_from_description("bright colors at midnight");
        assert_eq!(theme.background, hex("#1a1a1a"));
    }

    #[test]
    fn first_color_family_wins() {
        // "forest" (green) and "sunset" (orange): green comes first.
        let theme = theme_from_description("sunset over the forest");
        assert_eq!(theme.primary, hex("#10b981"));
        assert_eq!(theme.accent, hex("#059669"));
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let theme = theme_from_description("LAVENDERISH");
        assert_eq!(theme.primary, hex("#8b5cf6"));
    }

    #[test]
    fn style_words_do_not_change_colors() {
        assert_eq!(theme_from_description("professional modern elegant"), default_theme());
    }

    #[test]
    fn high_contrast_light() {
        let theme = theme_from_description("high contrast");
        assert_eq!(theme.text, Color::BLACK);
        assert_eq!(theme.primary, hex("#3b82f6"));
        // #10b981 is ~2.5:1 on white and gets darkened to reach 3:1.
        assert_eq!(theme.accent, hex("#0ea06f"));
    }

    #[test]
    fn high_contrast_dark() {
        let theme = theme_from_description("dark with strong contrast");
        assert_eq!(theme.text, Color::WHITE);
        assert_eq!(theme.accent, hex("#10b981"));
    }

    // -- base color --

    #[test]
    fn dark_base_gets_dark_theme() {
        let theme = theme_from_color(hex("#4a90e2"), Harmony::Analogous);
        assert_eq!(theme.name, "Analogous Theme");
        assert_eq!(theme.background, hex("#1a1a1a"));
        assert_eq!(theme.text, hex("#ffffff"));
        assert_eq!(theme.secondary, hex("#2d2d2d"));
        assert_eq!(theme.primary, hex("#4bdde2"));
        assert_eq!(theme.accent, hex("#4a90e2"));
    }

    #[test]
    fn light_base_gets_light_theme() {
        let theme = theme_from_color(hex("#ffd700"), Harmony::Complementary);
        assert_eq!(theme.name, "Complementary Theme");
        assert_eq!(theme.background, hex("#ffffff"));
        assert_eq!(theme.text, hex("#333333"));
        assert_eq!(theme.secondary, hex("#f5f5f5"));
        assert_eq!(theme.primary, hex("#ffd700"));
        assert_eq!(theme.accent, hex("#0026ff"));
    }

    #[test]
    fn unknown_harmony_name_uses_complement() {
        let theme = theme_from_color_named(hex("#ff0000"), "split");
        assert_eq!(theme.name, "Split Theme");
        assert_eq!(theme.primary, hex("#ff0000"));
        assert_eq!(theme.accent, hex("#00ffff"));
    }

    // -- variations --

    #[test]
    fn variations_are_four_in_fixed_order() {
        let base = crate::presets::preset_theme("light").unwrap();
        let names: Vec<String> = suggest_variations(&base).iter().map(|t| t.name.clone()).collect();
        assert_eq!(
            names,
            ["Light Variation", "Dark Variation", "Vibrant Variation", "Muted Variation"]
        );
    }

    #[test]
    fn variation_values() {
        let base = crate::presets::preset_theme("light").unwrap();
        let [light, dark, vibrant, muted] = suggest_variations(&base);

        assert_eq!(light.background, hex("#ffffff"));
        assert_eq!(light.primary, hex("#77ace9"));
        assert_eq!(light.accent, hex("#ff9e9e"));
        assert_eq!(light.text, base.text);

        assert_eq!(dark.background, hex("#f2f2f2"));
        assert_eq!(dark.primary, hex("#2377d7"));
        assert_eq!(dark.secondary, hex("#e8e8e8"));
        assert_eq!(dark.accent, hex("#ff3838"));

        assert_eq!(vibrant.primary, hex("#3690f7"));
        assert_eq!(vibrant.background, base.background);
        assert_eq!(vibrant.secondary, base.secondary);

        assert_eq!(muted.primary, hex("#6093cd"));
        assert_eq!(muted.accent, hex("#f07a7a"));
    }

    // -- extracted --

    #[test]
    fn extracted_needs_three_colors() {
        assert!(theme_from_extracted(&[Color::BLACK, Color::WHITE]).is_none());
    }

    #[test]
    fn extracted_theme_is_repaired() {
        let colors = [hex("#202020"), hex("#404040"), hex("#303030"), hex("#606060")];
        let theme = theme_from_extracted(&colors).unwrap();
        assert_eq!(theme.name, "Extracted");
        assert_eq!(theme.text, Color::WHITE);
        assert_eq!(theme.secondary, hex("#303030"));
        assert_eq!(theme.primary, hex("#737373"));
        assert_eq!(theme.accent, hex("#6e6e6e"));
    }

    #[test]
    fn extracted_accent_falls_back_to_primary() {
        let colors = [Color::WHITE, hex("#1d4ed8"), hex("#f3f4f6")];
        let theme = theme_from_extracted(&colors).unwrap();
        assert_eq!(theme.text, hex("#333333"));
        assert_eq!(theme.accent, theme.primary);
    }
}
