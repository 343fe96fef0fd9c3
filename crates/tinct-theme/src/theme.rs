//! The five-slot theme record and its JSON form.
//!
//! A `Theme` is a plain value: a name plus background, text, primary,
//! secondary and accent colors. Nothing about it is enforced at
//! construction; a theme may be unreadable. Accessibility is checked and
//! repaired separately by [`crate::contrast`].
//!
//! The JSON shape is flat, every color a hex string:
//!
//! ```json
//! {
//!   "name": "Dark & Modern",
//!   "background": "#1a1a1a",
//!   "text": "#ffffff",
//!   "primary": "#bb86fc",
//!   "secondary": "#333333",
//!   "accent": "#03dac6"
//! }
//! ```

use serde::{Deserialize, Serialize};
use tinct_color::Color;
use tracing::debug;

use crate::error::ThemeError;

/// A named set of five theme colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Page background.
    pub background: Color,
    /// Body text.
    pub text: Color,
    /// Links, buttons, primary actions.
    pub primary: Color,
    /// Cards, panels, subtle surfaces.
    pub secondary: Color,
    /// Highlights and secondary actions.
    pub accent: Color,
}

impl Theme {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        background: Color,
        text: Color,
        primary: Color,
        secondary: Color,
        accent: Color,
    ) -> Self {
        Self {
            name: name.into(),
            background,
            text,
            primary,
            secondary,
            accent,
        }
    }

    /// Return a copy with a different name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self }
    }

    /// The five colors paired with their slot names, in canonical order.
    #[must_use]
    pub const fn slots(&self) -> [(&'static str, Color); 5] {
        [
            ("background", self.background),
            ("text", self.text),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
        ]
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Only fails if `serde_json` cannot write, which does not happen for
    /// this shape in practice.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import a theme from a JSON object.
    ///
    /// `background`, `text` and `primary` are required. A missing
    /// `secondary` falls back to the background, a missing `accent` to the
    /// primary, and a missing `name` to `"Imported"`. Unknown fields are
    /// ignored. The import is all-or-nothing.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Json`] for malformed JSON, and
    /// [`ThemeError::InvalidThemeFormat`] for a missing required field or
    /// any color that is not `#RRGGBB`.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let raw: RawTheme = serde_json::from_str(json)?;
        raw.validate()
    }
}

// ---------------------------------------------------------------------------
// Import validation
// ---------------------------------------------------------------------------

/// The permissive shape accepted on import, before validation.
#[derive(Debug, Default, Deserialize)]
struct RawTheme {
    name: Option<String>,
    background: Option<String>,
    text: Option<String>,
    primary: Option<String>,
    secondary: Option<String>,
    accent: Option<String>,
}

impl RawTheme {
    fn validate(self) -> Result<Theme, ThemeError> {
        let background = required("background", self.background.as_deref())?;
        let text = required("text", self.text.as_deref())?;
        let primary = required("primary", self.primary.as_deref())?;
        let secondary = optional("secondary", self.secondary.as_deref())?.unwrap_or(background);
        let accent = optional("accent", self.accent.as_deref())?.unwrap_or(primary);
        let name = self.name.unwrap_or_else(|| "Imported".to_owned());

        debug!(theme = %name, "imported theme");
        Ok(Theme { name, background, text, primary, secondary, accent })
    }
}

fn required(field: &str, value: Option<&str>) -> Result<Color, ThemeError> {
    match value {
        Some(s) if !s.is_empty() => parse_field(field, s),
        _ => Err(ThemeError::InvalidThemeFormat(format!("missing `{field}`"))),
    }
}

fn optional(field: &str, value: Option<&str>) -> Result<Option<Color>, ThemeError> {
    match value {
        Some(s) if !s.is_empty() => parse_field(field, s).map(Some),
        _ => Ok(None),
    }
}

fn parse_field(field: &str, value: &str) -> Result<Color, ThemeError> {
    Color::hex(value).ok_or_else(|| {
        ThemeError::InvalidThemeFormat(format!("`{field}` is not a hex color: {value:?}"))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
