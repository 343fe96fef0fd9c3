//! Human-readable color names ("Vibrant Red", "Muted Dark Blue").

use tinct_color::Color;

/// Hue families by upper bound (exclusive). Hue 330..360 wraps to red.
const HUE_FAMILIES: &[(f64, &str)] = &[
    (15.0, "Red"),
    (45.0, "Orange"),
    (70.0, "Yellow"),
    (150.0, "Green"),
    (200.0, "Cyan"),
    (260.0, "Blue"),
    (290.0, "Purple"),
    (330.0, "Magenta"),
];

/// Name a color by hue family plus lightness and saturation modifiers.
///
/// Near-gray colors (saturation below 10) are White, Black or Gray.
/// Otherwise a lightness prefix ("Dark " below 30, "Light " above 70) is
/// applied first, then a saturation prefix ("Muted " below 30, "Vibrant "
/// above 70) goes in front of that, e.g. "Vibrant Dark Red".
#[must_use]
pub fn color_name(color: Color) -> String {
    let hsl = color.to_hsl();

    if hsl.s < 10.0 {
        return if hsl.l > 90.0 {
            "White"
        } else if hsl.l < 10.0 {
            "Black"
        } else {
            "Gray"
        }
        .to_owned();
    }

    let family = HUE_FAMILIES
        .iter()
        .find(|(upper, _)| hsl.h < *upper)
        .map_or("Red", |&(_, name)| name);

    let tone = if hsl.l < 30.0 {
        "Dark "
    } else if hsl.l > 70.0 {
        "Light "
    } else {
        ""
    };

    let intensity = if hsl.s < 30.0 {
        "Muted "
    } else if hsl.s > 70.0 {
        "Vibrant "
    } else {
        ""
    };

    format!("{intensity}{tone}{family}")
}

/// [`color_name`] for a hex string; `"Unknown"` if it does not parse.
#[must_use]
pub fn color_name_of(hex: &str) -> String {
    Color::hex(hex).map_or_else(|| "Unknown".to_owned(), color_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pure_red_is_vibrant_red() {
        assert_eq!(color_name_of("#FF0000"), "Vibrant Red");
    }

    #[test]
    fn achromatic() {
        assert_eq!(color_name_of("#fafafa"), "White");
        assert_eq!(color_name_of("#050505"), "Black");
        assert_eq!(color_name_of("#808080"), "Gray");
    }

    #[test]
    fn both_prefixes() {
        assert_eq!(color_name_of("#800000"), "Vibrant Dark Red");
        assert_eq!(color_name_of("#ffcccc"), "Vibrant Light Red");
        assert_eq!(color_name_of("#996666"), "Muted Red");
    }

    #[test]
    fn hue_families() {
        assert_eq!(color_name_of("#ffff00"), "Vibrant Yellow");
        assert_eq!(color_name_of("#00ffff"), "Vibrant Cyan");
        assert_eq!(color_name_of("#4a90e2"), "Vibrant Blue");
        assert_eq!(color_name_of("#9966cc"), "Purple");
        assert_eq!(color_name_of("#ff00ff"), "Vibrant Magenta");
        assert_eq!(color_name(Color::hsl(340.0, 50.0, 50.0)), "Red");
        assert_eq!(color_name(Color::hsl(100.0, 50.0, 50.0)), "Green");
        assert_eq!(color_name(Color::hsl(30.0, 50.0, 50.0)), "Orange");
    }

    #[test]
    fn unparsable_is_unknown() {
        assert_eq!(color_name_of("red"), "Unknown");
        assert_eq!(color_name_of(""), "Unknown");
    }
}
