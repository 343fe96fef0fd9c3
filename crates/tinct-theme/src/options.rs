//! Engine options and the `key=value` directives that set them.
//!
//! Options can come from a JSON object (every field optional) or from
//! directives on a command line, applied on top of the defaults.
//!
//! # Option names
//!
//! | Full name   | Abbrev   | Type    | Default    |
//! |-------------|----------|---------|------------|
//! | `target`    | `ratio`  | float   | `4.5`      |
//! | `direction` | `dir`    | string  | `135deg`   |
//! | `steps`     | `n`      | integer | `5`        |
//! | `harmony`   | `h`      | name    | `analogous`|
//!
//! `target` must lie in [1, 21], the range of possible contrast ratios.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::contrast::DEFAULT_TARGET_RATIO;
use crate::gradient::{DEFAULT_DIRECTION, DEFAULT_STEPS};
use crate::harmony::Harmony;

/// Errors from parsing option directives or option JSON.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option `{0}` needs a value (`{0}=...`)")]
    MissingValue(String),

    #[error("invalid value for `{option}`: {value:?}")]
    InvalidValue { option: &'static str, value: String },

    #[error("malformed options JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunables shared by the theme operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Contrast ratio that text is repaired to.
    pub target_ratio: f64,
    /// CSS direction for gradients.
    pub gradient_direction: String,
    /// Number of gradient stops.
    pub gradient_steps: usize,
    /// Harmony used when building a theme from one color.
    pub harmony: Harmony,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            target_ratio: DEFAULT_TARGET_RATIO,
            gradient_direction: DEFAULT_DIRECTION.to_owned(),
            gradient_steps: DEFAULT_STEPS,
            harmony: Harmony::default(),
        }
    }
}

/// A parsed `name=value` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Split a directive into name and value.
///
/// # Errors
///
/// [`OptionsError::MissingValue`] when there is no `=`.
pub fn parse_directive(arg: &str) -> Result<Directive<'_>, OptionsError> {
    arg.split_once('=')
        .map(|(name, value)| Directive { name: name.trim(), value: value.trim() })
        .ok_or_else(|| OptionsError::MissingValue(arg.to_owned()))
}

/// Returns `true` if `arg` looks like a directive rather than a positional
/// argument.
#[must_use]
pub fn is_directive(arg: &str) -> bool {
    arg.split_once('=').is_some_and(|(name, _)| canonical_name(name.trim()).is_some())
}

/// Map a full name or abbreviation to the full name.
fn canonical_name(name: &str) -> Option<&'static str> {
    match name {
        "target" | "ratio" => Some("target"),
        "direction" | "dir" => Some("direction"),
        "steps" | "n" => Some("steps"),
        "harmony" | "h" => Some("harmony"),
        _ => None,
    }
}

impl Options {
    /// Parse options from a JSON object. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// [`OptionsError::Json`] for malformed JSON or wrongly typed fields,
    /// [`OptionsError::InvalidValue`] for an out-of-range target ratio.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        check_ratio(options.target_ratio, &options.target_ratio.to_string())?;
        Ok(options)
    }

    /// Apply one `name=value` directive.
    ///
    /// # Errors
    ///
    /// Unknown names, missing values, and values that do not parse.
    pub fn apply(&mut self, arg: &str) -> Result<(), OptionsError> {
        let Directive { name, value } = parse_directive(arg)?;
        let option =
            canonical_name(name).ok_or_else(|| OptionsError::UnknownOption(name.to_owned()))?;
        let invalid = || OptionsError::InvalidValue { option, value: value.to_owned() };

        match option {
            "target" => {
                let ratio: f64 = value.parse().map_err(|_| invalid())?;
                self.target_ratio = check_ratio(ratio, value)?;
            }
            "direction" => {
                if value.is_empty() {
                    return Err(invalid());
                }
                value.clone_into(&mut self.gradient_direction);
            }
            "steps" => self.gradient_steps = value.parse().map_err(|_| invalid())?,
            "harmony" => self.harmony = Harmony::from_name(value).ok_or_else(invalid)?,
            _ => return Err(OptionsError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }

    /// Apply several directives in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// The first directive that fails; earlier ones stay applied.
    pub fn apply_all<'a>(
        &mut self,
        args: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), OptionsError> {
        args.into_iter().try_for_each(|arg| self.apply(arg))
    }
}

fn check_ratio(ratio: f64, raw: &str) -> Result<f64, OptionsError> {
    if (1.0..=21.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(OptionsError::InvalidValue { option: "target", value: raw.to_owned() })
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "target={} direction={} steps={} harmony={}",
            self.target_ratio, self.gradient_direction, self.gradient_steps, self.harmony
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let o = Options::default();
        assert_eq!(o.target_ratio, 4.5);
        assert_eq!(o.gradient_direction, "135deg");
        assert_eq!(o.gradient_steps, 5);
        assert_eq!(o.harmony, Harmony::Analogous);
    }

    #[test]
    fn parse_directive_splits_on_first_equals() {
        assert_eq!(
            parse_directive("dir=to right").unwrap(),
            Directive { name: "dir", value: "to right" }
        );
        assert_eq!(
            parse_directive("a=b=c").unwrap(),
            Directive { name: "a", value: "b=c" }
        );
        assert!(matches!(parse_directive("steps"), Err(OptionsError::MissingValue(_))));
    }

    #[test]
    fn apply_full_names_and_abbreviations() {
        let mut o = Options::default();
        o.apply_all(["target=7", "dir=90deg", "n=3", "h=TRIADIC"]).unwrap();
        assert_eq!(o.target_ratio, 7.0);
        assert_eq!(o.gradient_direction, "90deg");
        assert_eq!(o.gradient_steps, 3);
        assert_eq!(o.harmony, Harmony::Triadic);

        o.apply("ratio=3").unwrap();
        o.apply("harmony=monochromatic").unwrap();
        assert_eq!(o.target_ratio, 3.0);
        assert_eq!(o.harmony, Harmony::Monochromatic);
    }

    #[test]
    fn apply_rejects_bad_input() {
        let mut o = Options::default();
        assert!(matches!(o.apply("colour=red"), Err(OptionsError::UnknownOption(_))));
        assert!(matches!(
            o.apply("steps=many"),
            Err(OptionsError::InvalidValue { option: "steps", .. })
        ));
        assert!(matches!(
            o.apply("target=30"),
            Err(OptionsError::InvalidValue { option: "target", .. })
        ));
        assert!(matches!(o.apply("target=0.5"), Err(OptionsError::InvalidValue { .. })));
        assert!(matches!(o.apply("harmony=split"), Err(OptionsError::InvalidValue { .. })));
        assert!(matches!(o.apply("direction="), Err(OptionsError::InvalidValue { .. })));
        assert_eq!(o, Options::default());
    }

    #[test]
    fn apply_all_stops_at_first_error() {
        let mut o = Options::default();
        assert!(o.apply_all(["steps=7", "bogus=1", "target=7"]).is_err());
        assert_eq!(o.gradient_steps, 7);
        assert_eq!(o.target_ratio, 4.5);
    }

    #[test]
    fn directive_detection() {
        assert!(is_directive("steps=3"));
        assert!(is_directive("dir=to right"));
        assert!(!is_directive("#ff0000"));
        assert!(!is_directive("foo=bar"));
    }

    #[test]
    fn from_json_partial() {
        let o = Options::from_json(r#"{"gradient_steps": 9, "harmony": "tetradic"}"#).unwrap();
        assert_eq!(o.gradient_steps, 9);
        assert_eq!(o.harmony, Harmony::Tetradic);
        assert_eq!(o.target_ratio, 4.5);
    }

    #[test]
    fn from_json_rejects_bad_values() {
        assert!(matches!(
            Options::from_json(r#"{"target_ratio": 50}"#),
            Err(OptionsError::InvalidValue { .. })
        ));
        assert!(matches!(
            Options::from_json(r#"{"harmony": "split"}"#),
            Err(OptionsError::Json(_))
        ));
        assert!(matches!(Options::from_json("[1,2]"), Err(OptionsError::Json(_))));
    }

    #[test]
    fn display_lists_every_option() {
        assert_eq!(
            Options::default().to_string(),
            "target=4.5 direction=135deg steps=5 harmony=analogous"
        );
    }
}
