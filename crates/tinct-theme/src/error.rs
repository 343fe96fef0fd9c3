//! Error types for theme operations.
//!
//! Most engine functions fail soft (`Option`, fallback values). These errors
//! cover the cases a caller has to surface: rejected imports, unknown names
//! typed by a user, and malformed color strings.

use tinct_color::ParseColorError;

/// Errors produced while looking up, parsing, or importing themes.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A color string was not `#RRGGBB`.
    #[error(transparent)]
    InvalidFormat(#[from] ParseColorError),

    /// No mood preset with this name.
    #[error("unknown mood: {0}")]
    UnknownMood(String),

    /// No harmony with this name.
    #[error("unknown harmony: {0}")]
    UnknownHarmony(String),

    /// An imported theme object is missing required fields or holds an
    /// unusable color.
    #[error("invalid theme format: {0}")]
    InvalidThemeFormat(String),

    /// The import payload is not valid JSON.
    #[error("malformed theme JSON: {0}")]
    Json(#[from] serde_json::Error),
}
