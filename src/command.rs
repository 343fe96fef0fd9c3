// SPDX-License-Identifier: MIT
//
// Command-line parsing for the `tinct` binary.
//
// Arguments are split into positionals and `name=value` option directives
// (see `tinct_theme::options`). Directives may appear anywhere after the
// subcommand; positionals are interpreted per subcommand.
//
// | Command                          | Output                               |
// |----------------------------------|--------------------------------------|
// | `mood <name>`                    | theme JSON for a mood preset         |
// | `describe <words...>`            | theme JSON from a description        |
// | `color <hex>`                    | theme JSON around a base color       |
// | `harmony <hex> [kind]`           | one hex color per line               |
// | `contrast <fg> <bg>`             | WCAG report JSON                     |
// | `fix <fg> <bg>`                  | repaired foreground hex              |
// | `gradient <a> <b>`               | CSS `linear-gradient(...)`           |
// | `smart <theme>`                  | CSS gradient, primary to accent      |
// | `name <hex>`                     | color name                           |
// | `preset [id]`                    | starter theme JSON, or the id list   |
// | `variations <theme>`             | four variation themes as JSON        |
// | `check <theme>`                  | accessibility report JSON            |
// | `accessible <theme>`             | repaired theme JSON                  |
//
// `<theme>` is a starter theme id or a path to a theme JSON file.

use tinct_theme::options::{Options, OptionsError, is_directive};

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Mood(String),
    Describe(String),
    Color(String),
    Harmony { base: String, kind: Option<String> },
    Contrast { fg: String, bg: String },
    Fix { fg: String, bg: String },
    Gradient { from: String, to: String },
    Smart(String),
    Name(String),
    Preset(Option<String>),
    Variations(String),
    Check(String),
    Accessible(String),
    Help,
}

/// Why the arguments could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("unknown command `{0}` (try `tinct help`)")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected}")]
    Arity { command: &'static str, expected: &'static str },

    #[error(transparent)]
    Option(#[from] OptionsError),
}

/// Parse everything after the program name.
///
/// # Errors
///
/// Unknown subcommands, wrong positional counts, and bad directives.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<(Command, Options), UsageError> {
    let Some((name, rest)) = args.split_first() else {
        return Ok((Command::Help, Options::default()));
    };

    let mut options = Options::default();
    let mut positional = Vec::new();
    for arg in rest.iter().map(AsRef::as_ref) {
        if is_directive(arg) {
            options.apply(arg)?;
        } else {
            positional.push(arg.to_owned());
        }
    }

    let command = match name.as_ref() {
        "mood" => Command::Mood(one("mood", "a mood name", positional)?),
        "describe" => {
            if positional.is_empty() {
                return Err(UsageError::Arity { command: "describe", expected: "a description" });
            }
            Command::Describe(positional.join(" "))
        }
        "color" => Command::Color(one("color", "a hex color", positional)?),
        "harmony" => {
            let mut it = positional.into_iter();
            match (it.next(), it.next(), it.next()) {
                (Some(base), kind, None) => Command::Harmony { base, kind },
                _ => {
                    return Err(UsageError::Arity {
                        command: "harmony",
                        expected: "a hex color and an optional harmony",
                    });
                }
            }
        }
        "contrast" => {
            let (fg, bg) = two("contrast", positional)?;
            Command::Contrast { fg, bg }
        }
        "fix" => {
            let (fg, bg) = two("fix", positional)?;
            Command::Fix { fg, bg }
        }
        "gradient" => {
            let (from, to) = two("gradient", positional)?;
            Command::Gradient { from, to }
        }
        "smart" => Command::Smart(one("smart", "a theme", positional)?),
        "name" => Command::Name(one("name", "a hex color", positional)?),
        "preset" => match <[String; 1]>::try_from(positional) {
            Ok([id]) => Command::Preset(Some(id)),
            Err(v) if v.is_empty() => Command::Preset(None),
            Err(_) => {
                return Err(UsageError::Arity { command: "preset", expected: "at most one id" });
            }
        },
        "variations" => Command::Variations(one("variations", "a theme", positional)?),
        "check" => Command::Check(one("check", "a theme", positional)?),
        "accessible" => Command::Accessible(one("accessible", "a theme", positional)?),
        "help" | "-h" | "--help" => Command::Help,
        other => return Err(UsageError::UnknownCommand(other.to_owned())),
    };

    Ok((command, options))
}

fn one(
    command: &'static str,
    expected: &'static str,
    args: Vec<String>,
) -> Result<String, UsageError> {
    <[String; 1]>::try_from(args)
        .map(|[a]| a)
        .map_err(|_| UsageError::Arity { command, expected })
}

fn two(command: &'static str, args: Vec<String>) -> Result<(String, String), UsageError> {
    <[String; 2]>::try_from(args)
        .map(|[a, b]| (a, b))
        .map_err(|_| UsageError::Arity { command, expected: "two hex colors" })
}

pub const USAGE: &str = "\
usage: tinct <command> [args] [name=value ...]

commands:
  mood <name>            theme from a mood preset
  describe <words...>    theme from a description
  color <hex>            theme around a base color (harmony=...)
  harmony <hex> [kind]   harmony palette
  contrast <fg> <bg>     WCAG contrast report
  fix <fg> <bg>          repair fg to reach target=...
  gradient <a> <b>       CSS gradient (direction=..., steps=...)
  smart <theme>          primary to accent gradient
  name <hex>             human-readable color name
  preset [id]            starter theme, or list ids
  variations <theme>     light/dark/vibrant/muted variations
  check <theme>          accessibility report
  accessible <theme>     theme with contrast repaired

<theme> is a preset id or a path to a theme JSON file.
Set TINCT_LOG (e.g. TINCT_LOG=debug) for diagnostics.";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
