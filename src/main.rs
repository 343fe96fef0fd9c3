// SPDX-License-Identifier: MIT
//
// tinct: color themes, contrast checks and gradients from the command line.
//
// This binary is a thin shell over the library crates:
//
//   tinct-color → hex parsing, HSL conversion, luminance
//   tinct-theme → contrast repair, harmonies, theme synthesis, gradients
//
// Each invocation flows through:
//
//   argv → command::parse → (Command, Options) → run → stdout
//
// Errors go to stderr with exit status 1. Diagnostics from the library
// (contrast repairs, soft failures) are emitted through `tracing` and shown
// when TINCT_LOG is set.

mod command;

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result, anyhow, bail};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tinct_theme::options::Options;
use tinct_theme::{
    Color, Theme, ThemeError, analyze_accessibility, auto_fix_contrast, check_wcag,
    color_name_of, ensure_accessibility, gradient, palette_from_name, preset_ids, preset_theme,
    smart_gradient, suggest_variations, theme_from_color, theme_from_description, theme_from_mood,
};

use crate::command::{Command, USAGE};

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = command::parse(args.as_slice())
        .map_err(anyhow::Error::from)
        .and_then(|(command, options)| run(&command, &options));

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("tinct: {e:#}");
            process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TINCT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute one command and return what should be printed.
fn run(command: &Command, options: &Options) -> Result<String> {
    debug!(?command, %options, "running");
    match command {
        Command::Help => Ok(USAGE.to_owned()),
        Command::Mood(mood) => {
            let theme =
                theme_from_mood(mood).ok_or_else(|| ThemeError::UnknownMood(mood.clone()))?;
            Ok(theme.to_json()?)
        }
        Command::Describe(text) => Ok(theme_from_description(text).to_json()?),
        Command::Color(hex) => Ok(theme_from_color(parse_color(hex)?, options.harmony).to_json()?),
        Command::Harmony { base, kind } => {
            let base = parse_color(base)?;
            let kind = kind.as_deref().unwrap_or_else(|| options.harmony.name());
            Ok(lines(palette_from_name(base, kind).into_iter().map(Color::to_hex)))
        }
        Command::Contrast { fg, bg } => {
            let report = check_wcag(parse_color(fg)?, parse_color(bg)?);
            Ok(serde_json::to_string_pretty(&report)?)
        }
        Command::Fix { fg, bg } => {
            let fixed = auto_fix_contrast(parse_color(fg)?, parse_color(bg)?, options.target_ratio);
            Ok(fixed.to_hex())
        }
        Command::Gradient { from, to } => Ok(gradient(
            from,
            to,
            &options.gradient_direction,
            options.gradient_steps,
        )
        .to_string()),
        Command::Smart(source) => {
            Ok(smart_gradient(&load_theme(source)?, &options.gradient_direction).to_string())
        }
        Command::Name(hex) => Ok(color_name_of(hex)),
        Command::Preset(None) => Ok(lines(preset_ids().into_iter().map(str::to_owned))),
        Command::Preset(Some(id)) => {
            let theme = preset_theme(id).ok_or_else(|| anyhow!("unknown preset: {id}"))?;
            Ok(theme.to_json()?)
        }
        Command::Variations(source) => {
            let variations = suggest_variations(&load_theme(source)?);
            Ok(serde_json::to_string_pretty(&variations)?)
        }
        Command::Check(source) => {
            let report = analyze_accessibility(&load_theme(source)?);
            Ok(serde_json::to_string_pretty(&report)?)
        }
        Command::Accessible(source) => {
            let theme = ensure_accessibility(&load_theme(source)?, options.target_ratio);
            Ok(theme.to_json()?)
        }
    }
}

fn parse_color(s: &str) -> Result<Color> {
    Ok(s.parse::<Color>().map_err(ThemeError::from)?)
}

/// A starter theme id, or a path to a theme JSON file.
fn load_theme(source: &str) -> Result<Theme> {
    if let Some(theme) = preset_theme(source) {
        return Ok(theme);
    }
    let path = Path::new(source);
    if !path.exists() {
        bail!("`{source}` is neither a preset ({}) nor a file", preset_ids().join(", "));
    }
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Theme::from_json(&json).with_context(|| format!("importing {}", path.display()))
}

fn lines(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(args: &[&str]) -> Result<String> {
        let (command, options) = command::parse(args)?;
        run(&command, &options)
    }

    #[test]
    fn harmony_prints_one_color_per_line() {
        let out = exec(&["harmony", "#ff0000", "triadic"]).unwrap();
        assert_eq!(out, "#ff0000\n#00ff00\n#0000ff");
    }

    #[test]
    fn harmony_defaults_to_option() {
        let out = exec(&["harmony", "#ff0000", "h=complementary"]).unwrap();
        assert_eq!(out, "#ff0000\n#00ffff");
    }

    #[test]
    fn fix_uses_target_option() {
        assert_eq!(exec(&["fix", "#aaaaaa", "#ffffff"]).unwrap(), "#6b6b6b");
    }

    #[test]
    fn gradient_uses_options() {
        assert_eq!(
            exec(&["gradient", "#000000", "#ffffff", "steps=3", "dir=to right"]).unwrap(),
            "linear-gradient(to right, #000000 0%, #808080 50%, #ffffff 100%)"
        );
    }

    #[test]
    fn name_command() {
        assert_eq!(exec(&["name", "#FF0000"]).unwrap(), "Vibrant Red");
    }

    #[test]
    fn preset_list_and_lookup() {
        assert_eq!(exec(&["preset"]).unwrap(), "light\ndark\npastel\nmodern\nvibrant");
        let json = exec(&["preset", "dark"]).unwrap();
        assert_eq!(Theme::from_json(&json).unwrap(), preset_theme("dark").unwrap());
        assert!(exec(&["preset", "solarized"]).is_err());
    }

    #[test]
    fn unknown_mood_is_an_error() {
        let err = exec(&["mood", "grumpy"]).unwrap_err();
        assert!(err.to_string().contains("grumpy"), "{err}");
    }

    #[test]
    fn bad_color_is_an_error() {
        assert!(exec(&["color", "blue"]).is_err());
        assert!(exec(&["contrast", "#000", "#ffffff"]).is_err());
    }

    #[test]
    fn check_reports_overall_verdict() {
        let out = exec(&["check", "dark"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["overall"], "PASS");
    }

    #[test]
    fn missing_theme_source() {
        let err = exec(&["variations", "/no/such/theme.json"]).unwrap_err();
        assert!(err.to_string().contains("neither a preset"), "{err}");
    }
}
