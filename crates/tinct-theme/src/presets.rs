//! Preset tables: mood palettes and named starter themes.
//!
//! Both tables are `static` data built at compile time and never mutated.

use tinct_color::Color;

use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Mood palettes
// ---------------------------------------------------------------------------

/// One candidate palette for a mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodPalette {
    pub background: Color,
    pub text: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

impl MoodPalette {
    const fn new(background: u32, text: u32, primary: u32, secondary: u32, accent: u32) -> Self {
        Self {
            background: Color::from_u32(background),
            text: Color::from_u32(text),
            primary: Color::from_u32(primary),
            secondary: Color::from_u32(secondary),
            accent: Color::from_u32(accent),
        }
    }

    /// Build a named theme from this palette.
    #[must_use]
    pub fn to_theme(self, name: impl Into<String>) -> Theme {
        Theme::new(name, self.background, self.text, self.primary, self.secondary, self.accent)
    }
}

/// A named mood and its candidate palettes.
#[derive(Debug, Clone, Copy)]
pub struct MoodPreset {
    pub name: &'static str,
    pub palettes: &'static [MoodPalette],
}

/// Every mood the synthesizer knows, with three palettes each.
pub static MOOD_PRESETS: &[MoodPreset] = &[
    MoodPreset {
        name: "professional",
        palettes: &[
            MoodPalette::new(0xFF_FF_FF, 0x1F_29_37, 0x3B_82_F6, 0xF3_F4_F6, 0x10_B9_81),
            MoodPalette::new(0xF9_FA_FB, 0x11_18_27, 0x63_66_F1, 0xE5_E7_EB, 0x8B_5C_F6),
            MoodPalette::new(0xFF_FF_FF, 0x37_41_51, 0x0E_A5_E9, 0xF1_F5_F9, 0x06_B6_D4),
        ],
    },
    MoodPreset {
        name: "energetic",
        palettes: &[
            MoodPalette::new(0xFE_F3_C7, 0x92_40_0E, 0xF5_9E_0B, 0xFD_E6_8A, 0xEF_44_44),
            MoodPalette::new(0xFF_F7_ED, 0x9A_34_12, 0xF9_73_16, 0xFF_ED_D5, 0xDC_26_26),
            MoodPalette::new(0xFF_ED_D5, 0x7C_2D_12, 0xEA_58_0C, 0xFE_D7_AA, 0xF9_73_16),
        ],
    },
    MoodPreset {
        name: "calm",
        palettes: &[
            MoodPalette::new(0xF0_F9_FF, 0x0C_4A_6E, 0x02_84_C7, 0xE0_F2_FE, 0x06_B6_D4),
            MoodPalette::new(0xEC_FD_F5, 0x06_5F_46, 0x05_96_69, 0xD1_FA_E5, 0x10_B9_81),
            MoodPalette::new(0xF5_F3_FF, 0x5B_21_B6, 0x7C_3A_ED, 0xED_E9_FE, 0xA7_8B_FA),
        ],
    },
    MoodPreset {
        name: "playful",
        palettes: &[
            MoodPalette::new(0xFD_F4_FF, 0x86_19_8F, 0xD9_46_EF, 0xFA_E8_FF, 0xF0_AB_FC),
            MoodPalette::new(0xFF_F1_F2, 0x9F_12_39, 0xF4_3F_5E, 0xFF_E4_E6, 0xFB_71_85),
            MoodPalette::new(0xFE_F2_F2, 0x99_1B_1B, 0xEF_44_44, 0xFE_E2_E2, 0xF8_71_71),
        ],
    },
    MoodPreset {
        name: "elegant",
        palettes: &[
            MoodPalette::new(0xFA_FA_F9, 0x1C_19_17, 0x78_71_6C, 0xF5_F5_F4, 0xA8_A2_9E),
            MoodPalette::new(0xFA_FA_FA, 0x17_17_17, 0x73_73_73, 0xF5_F5_F5, 0xA3_A3_A3),
            MoodPalette::new(0xF8_FA_FC, 0x0F_17_2A, 0x47_55_69, 0xF1_F5_F9, 0x64_74_8B),
        ],
    },
    MoodPreset {
        name: "bold",
        palettes: &[
            MoodPalette::new(0x18_18_1B, 0xFA_FA_FA, 0xA8_55_F7, 0x27_27_2A, 0xC0_26_D3),
            MoodPalette::new(0x0F_17_2A, 0xF8_FA_FC, 0x3B_82_F6, 0x1E_29_3B, 0x06_B6_D4),
            MoodPalette::new(0x1E_1B_4B, 0xE0_E7_FF, 0x81_8C_F8, 0x31_2E_81, 0xA7_8B_FA),
        ],
    },
];

/// Look up a mood preset by exact (lowercase) name.
#[must_use]
pub fn mood_preset(name: &str) -> Option<&'static MoodPreset> {
    MOOD_PRESETS.iter().find(|m| m.name == name)
}

/// All mood names, in table order.
#[must_use]
pub fn mood_names() -> Vec<&'static str> {
    MOOD_PRESETS.iter().map(|m| m.name).collect()
}

// ---------------------------------------------------------------------------
// Starter themes
// ---------------------------------------------------------------------------

struct StarterTheme {
    id: &'static str,
    name: &'static str,
    palette: MoodPalette,
}

static STARTER_THEMES: &[StarterTheme] = &[
    StarterTheme {
        id: "light",
        name: "Light & Fresh",
        palette: MoodPalette::new(0xFF_FF_FF, 0x33_33_33, 0x4A_90_E2, 0xF5_F5_F5, 0xFF_6B_6B),
    },
    StarterTheme {
        id: "dark",
        name: "Dark & Modern",
        palette: MoodPalette::new(0x1A_1A_1A, 0xFF_FF_FF, 0xBB_86_FC, 0x33_33_33, 0x03_DA_C6),
    },
    StarterTheme {
        id: "pastel",
        name: "Pastel Dream",
        palette: MoodPalette::new(0xFE_F7_FF, 0x4A_4A_4A, 0xFF_B3_BA, 0xBA_E1_FF, 0xFF_FF_BA),
    },
    StarterTheme {
        id: "modern",
        name: "Modern Minimal",
        palette: MoodPalette::new(0xF8_F9_FA, 0x21_25_29, 0x00_7B_FF, 0x6C_75_7D, 0x28_A7_45),
    },
    StarterTheme {
        id: "vibrant",
        name: "Vibrant Energy",
        palette: MoodPalette::new(0xFF_F3_CD, 0x49_50_57, 0xFD_7E_14, 0xE8_3E_8C, 0x20_C9_97),
    },
];

/// Look up a starter theme by id (`light`, `dark`, `pastel`, `modern`,
/// `vibrant`).
#[must_use]
pub fn preset_theme(id: &str) -> Option<Theme> {
    STARTER_THEMES
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.palette.to_theme(t.name))
}

/// All starter theme ids, in table order.
#[must_use]
pub fn preset_ids() -> Vec<&'static str> {
    STARTER_THEMES.iter().map(|t| t.id).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_mood_has_three_palettes() {
        for mood in MOOD_PRESETS {
            assert_eq!(mood.palettes.len(), 3, "{}", mood.name);
        }
    }

    #[test]
    fn mood_names_in_order() {
        assert_eq!(
            mood_names(),
            vec!["professional", "energetic", "calm", "playful", "elegant", "bold"]
        );
    }

    #[test]
    fn mood_lookup_is_exact() {
        assert!(mood_preset("calm").is_some());
        assert!(mood_preset("Calm").is_none());
        assert!(mood_preset("nonexistent").is_none());
    }

    #[test]
    fn all_presets_resolve() {
        for id in preset_ids() {
            assert!(preset_theme(id).is_some(), "preset '{id}' failed to resolve");
        }
    }

    #[test]
    fn unknown_preset_returns_none() {
        assert!(preset_theme("solarized").is_none());
    }

    #[test]
    fn dark_preset_values() {
        let t = preset_theme("dark").unwrap();
        assert_eq!(t.name, "Dark & Modern");
        assert_eq!(t.background.to_hex(), "#1a1a1a");
        assert_eq!(t.accent.to_hex(), "#03dac6");
    }
}
