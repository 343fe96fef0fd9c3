//! Multi-stop linear gradients interpolated in HSL space.

use std::fmt;

use serde::{Deserialize, Serialize};
use tinct_color::{Color, Hsl};
use tracing::debug;

use crate::theme::Theme;

/// CSS direction used when none is given.
pub const DEFAULT_DIRECTION: &str = "135deg";

/// Stop count used by [`smart_gradient`].
pub const DEFAULT_STEPS: usize = 5;

/// One color stop. `position` is a percentage in [0, 100], absent on the
/// fallback two-stop form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

/// A linear gradient. `Display` renders CSS `linear-gradient(...)` text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub direction: String,
    pub stops: Vec<GradientStop>,
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}", self.direction)?;
        for stop in &self.stops {
            match stop.position {
                Some(p) => write!(f, ", {} {p}%", stop.color)?,
                None => write!(f, ", {}", stop.color)?,
            }
        }
        f.write_str(")")
    }
}

/// Interpolate `steps` colors from `from` to `to`.
///
/// Hue, saturation and lightness are interpolated independently and
/// linearly (no shortest-path hue). The first and last stops are the
/// endpoints themselves. `steps` below 2 is raised to 2.
///
/// If either endpoint does not parse, the result is a plain two-stop
/// gradient carrying the raw strings with no positions.
#[must_use]
pub fn gradient(from: &str, to: &str, direction: &str, steps: usize) -> Gradient {
    let direction = direction.to_owned();
    let (Some(a), Some(b)) = (Color::hex(from), Color::hex(to)) else {
        debug!(from, to, "unparsable gradient endpoint, using two plain stops");
        return Gradient {
            direction,
            stops: vec![
                GradientStop { color: from.to_owned(), position: None },
                GradientStop { color: to.to_owned(), position: None },
            ],
        };
    };

    let steps = steps.max(2);
    let last = steps - 1;
    let stops = interpolate(a, b, steps)
        .into_iter()
        .enumerate()
        .map(|(i, color)| GradientStop {
            color: color.to_hex(),
            position: Some(fraction(i, last) * 100.0),
        })
        .collect();

    Gradient { direction, stops }
}

/// Primary to accent, five stops.
#[must_use]
pub fn smart_gradient(theme: &Theme, direction: &str) -> Gradient {
    gradient(
        &theme.primary.to_hex(),
        &theme.accent.to_hex(),
        direction,
        DEFAULT_STEPS,
    )
}

fn interpolate(a: Color, b: Color, steps: usize) -> Vec<Color> {
    if a == b {
        return vec![a; steps];
    }

    let (ha, hb) = (a.to_hsl(), b.to_hsl());

    let last = steps - 1;
    (0..steps)
        .map(|i| match i {
            0 => a,
            i if i == last => b,
            _ => {
                let t = fraction(i, last);
                Hsl::new(
                    (hb.h - ha.h).mul_add(t, ha.h),
                    (hb.s - ha.s).mul_add(t, ha.s),
                    (hb.l - ha.l).mul_add(t, ha.l),
                )
                .to_color()
            }
        })
        .collect()
}

fn fraction(i: usize, last: usize) -> f64 {
    i as f64 / last as f64
}
