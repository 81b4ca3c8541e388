use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Time-to-progress curve used to interpolate animated values.
///
/// `time` is the elapsed fraction of an animation, nominally in `[0, 1]`.
/// Implementations are pure. Inputs outside the nominal range never panic
/// but may produce values outside `[0, 1]`, or NaN.
pub trait EasingFunction {
    fn next(&self, time: f64) -> f64;
}

impl<F> EasingFunction for F
where
    F: Fn(f64) -> f64,
{
    fn next(&self, time: f64) -> f64 {
        self(time)
    }
}

/// Built-in ease-out curves.
///
/// Names parse from and print as kebab-case identifiers (`"quad-out"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    QuadOut,
    CubicOut,
    QuartOut,
    #[default]
    QuintOut,
    SineOut,
    ExpoOut,
    CircOut,
}

impl Easing {
    pub const ALL: [Self; 7] = [
        Self::QuadOut,
        Self::CubicOut,
        Self::QuartOut,
        Self::QuintOut,
        Self::SineOut,
        Self::ExpoOut,
        Self::CircOut,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::QuadOut => "quad-out",
            Self::CubicOut => "cubic-out",
            Self::QuartOut => "quart-out",
            Self::QuintOut => "quint-out",
            Self::SineOut => "sine-out",
            Self::ExpoOut => "expo-out",
            Self::CircOut => "circ-out",
        }
    }

    #[must_use]
    pub fn next(self, time: f64) -> f64 {
        match self {
            Self::QuadOut => -time * (time - 2.0),
            Self::CubicOut => (time - 1.0).powi(3) + 1.0,
            // Even power: this curve starts at 2 and falls to 1.
            Self::QuartOut => (time - 1.0).powi(4) + 1.0,
            Self::QuintOut => (time - 1.0).powi(5) + 1.0,
            Self::SineOut => (time * FRAC_PI_2).sin(),
            Self::ExpoOut => {
                if time == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * time)
                }
            }
            Self::CircOut => {
                let shifted = time - 1.0;
                (1.0 - shifted * shifted).sqrt()
            }
        }
    }
}

impl EasingFunction for Easing {
    fn next(&self, time: f64) -> f64 {
        Easing::next(*self, time)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = ChartError;

    /// Accepts `quad-out`, `quad_out` and `QuadOut` spellings.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|easing| easing.name().replace('-', "") == normalized)
            .ok_or_else(|| ChartError::UnknownEasing(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>(), Ok(easing));
        }
        assert_eq!("CircOut".parse::<Easing>(), Ok(Easing::CircOut));
        assert_eq!("expo_out".parse::<Easing>(), Ok(Easing::ExpoOut));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "bounce-out".parse::<Easing>(),
            Err(ChartError::UnknownEasing("bounce-out".to_owned()))
        );
    }

    #[test]
    fn closures_are_easing_functions() {
        let linear = |t: f64| t;
        assert_eq!(EasingFunction::next(&linear, 0.25), 0.25);
    }
}
