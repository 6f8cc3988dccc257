// extensions/easing.rs
//
// Easing table: 9 curve families x 3 modes, dispatched through a small
// family -> [In, Out, InOut] lookup. Pure functions, no state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::curves::Curve;
use crate::error::ParseEasingError;

/// Curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Sine,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Exponential,
    Circular,
    /// Overshoots the endpoints.
    Back,
    /// Oscillates around the endpoints.
    Elastic,
}

impl Family {
    pub const ALL: [Family; 9] = [
        Family::Sine,
        Family::Quadratic,
        Family::Cubic,
        Family::Quartic,
        Family::Quintic,
        Family::Exponential,
        Family::Circular,
        Family::Back,
        Family::Elastic,
    ];

    /// The In, Out and InOut curves of this family, in that order.
    pub fn curves<F: Curve>(self) -> [fn(F) -> F; 3] {
        match self {
            Family::Sine => [F::ease_sine_in, F::ease_sine_out, F::ease_sine_in_out],
            Family::Quadratic => [
                F::ease_quadratic_in,
                F::ease_quadratic_out,
                F::ease_quadratic_in_out,
            ],
            Family::Cubic => [F::ease_cubic_in, F::ease_cubic_out, F::ease_cubic_in_out],
            Family::Quartic => [
                F::ease_quartic_in,
                F::ease_quartic_out,
                F::ease_quartic_in_out,
            ],
            Family::Quintic => [
                F::ease_quintic_in,
                F::ease_quintic_out,
                F::ease_quintic_in_out,
            ],
            Family::Exponential => [
                F::ease_exponential_in,
                F::ease_exponential_out,
                F::ease_exponential_in_out,
            ],
            Family::Circular => [
                F::ease_circular_in,
                F::ease_circular_out,
                F::ease_circular_in_out,
            ],
            Family::Back => [F::ease_back_in, F::ease_back_out, F::ease_back_in_out],
            Family::Elastic => [
                F::ease_elastic_in,
                F::ease_elastic_out,
                F::ease_elastic_in_out,
            ],
        }
    }

    /// Canonical lowercase name, e.g. `"quadratic"`.
    pub fn name(self) -> &'static str {
        match self {
            Family::Sine => "sine",
            Family::Quadratic => "quadratic",
            Family::Cubic => "cubic",
            Family::Quartic => "quartic",
            Family::Quintic => "quintic",
            Family::Exponential => "exponential",
            Family::Circular => "circular",
            Family::Back => "back",
            Family::Elastic => "elastic",
        }
    }

    /// Canonical name or a common short form (`sin`, `quad`, `expo`, ...).
    fn from_alias(s: &str) -> Option<Family> {
        let family = match s {
            "sine" | "sin" => Family::Sine,
            "quadratic" | "quad" => Family::Quadratic,
            "cubic" => Family::Cubic,
            "quartic" | "quart" => Family::Quartic,
            "quintic" | "quint" => Family::Quintic,
            "exponential" | "expo" | "exp" => Family::Exponential,
            "circular" | "circ" => Family::Circular,
            "back" => Family::Back,
            "elastic" => Family::Elastic,
            _ => return None,
        };
        Some(family)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which end(s) of the curve are eased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Accelerate from rest.
    In,
    /// Decelerate to rest.
    Out,
    /// Both, symmetric about (0.5, 0.5).
    InOut,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::In, Mode::Out, Mode::InOut];

    pub fn name(self) -> &'static str {
        match self {
            Mode::In => "in",
            Mode::Out => "out",
            Mode::InOut => "in_out",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Easing curve selector.
///
/// Variants are declared family-major (`SineIn, SineOut, SineInOut,
/// QuadraticIn, ...`) so the discriminant encodes `(family, mode)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
#[repr(u8)]
pub enum Easing {
    SineIn,
    SineOut,
    #[default]
    SineInOut,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    QuinticIn,
    QuinticOut,
    QuinticInOut,
    ExponentialIn,
    ExponentialOut,
    ExponentialInOut,
    CircularIn,
    CircularOut,
    CircularInOut,
    BackIn,
    BackOut,
    BackInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
}

impl Easing {
    /// Every curve, family-major.
    pub const ALL: [Easing; 27] = [
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuarticIn,
        Easing::QuarticOut,
        Easing::QuarticInOut,
        Easing::QuinticIn,
        Easing::QuinticOut,
        Easing::QuinticInOut,
        Easing::ExponentialIn,
        Easing::ExponentialOut,
        Easing::ExponentialInOut,
        Easing::CircularIn,
        Easing::CircularOut,
        Easing::CircularInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
    ];

    pub fn new(family: Family, mode: Mode) -> Self {
        Self::ALL[family.index() * 3 + mode.index()]
    }

    pub fn family(self) -> Family {
        Family::ALL[self as usize / 3]
    }

    pub fn mode(self) -> Mode {
        Mode::ALL[self as usize % 3]
    }

    /// Whether the curve leaves [0, 1] between its endpoints.
    pub fn overshoots(self) -> bool {
        matches!(self.family(), Family::Back | Family::Elastic)
    }

    /// Evaluate the curve at progress `x`.
    ///
    /// `x` is conventionally in [0, 1] but is not clamped.
    #[inline]
    pub fn apply<F: Curve>(self, x: F) -> F {
        let curve = self.family().curves::<F>()[self.mode().index()];
        curve(x)
    }
}

/// Evaluate `kind` at progress `x`. Same as [`Easing::apply`].
#[inline]
pub fn ease<F: Curve>(kind: Easing, x: F) -> F {
    kind.apply(x)
}

/// Canonical snake_case name, e.g. `elastic_in_out`.
impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.family().name(), self.mode().name())
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    /// Accepts canonical names (`"cubic_in_out"`), any casing or separator
    /// (`"Cubic-InOut"`), short family forms (`"quad_out"`) and the
    /// `Ease<Family><Mode>` method names (`"EaseSinIn"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' ' | '.'))
            .flat_map(char::to_lowercase)
            .collect();
        let body = normalized.strip_prefix("ease").unwrap_or(&normalized);

        let (family, mode) = if let Some(family) = body.strip_suffix("inout") {
            (family, Mode::InOut)
        } else if let Some(family) = body.strip_suffix("out") {
            (family, Mode::Out)
        } else if let Some(family) = body.strip_suffix("in") {
            (family, Mode::In)
        } else {
            return Err(ParseEasingError::new(s));
        };

        Family::from_alias(family)
            .map(|family| Easing::new(family, mode))
            .ok_or_else(|| ParseEasingError::new(s))
    }
}

impl TryFrom<String> for Easing {
    type Error = ParseEasingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;
    const STEPS: u32 = 1000;

    fn samples() -> impl Iterator<Item = f64> {
        (0..=STEPS).map(|i| i as f64 / STEPS as f64)
    }

    #[test]
    fn endpoints_are_zero_and_one() {
        for kind in Easing::ALL {
            let start = kind.apply(0.0_f64);
            let end = kind.apply(1.0_f64);
            assert!(start.abs() < EPS, "{kind} at 0 was {start}");
            assert!((end - 1.0).abs() < EPS, "{kind} at 1 was {end}");

            let start = kind.apply(0.0_f32);
            let end = kind.apply(1.0_f32);
            assert!(start.abs() < 1e-6, "{kind} (f32) at 0 was {start}");
            assert!((end - 1.0).abs() < 1e-6, "{kind} (f32) at 1 was {end}");
        }
    }

    #[test]
    fn in_and_out_are_monotonic_unless_overshooting() {
        for kind in Easing::ALL {
            if kind.overshoots() || kind.mode() == Mode::InOut {
                continue;
            }
            let mut prev = kind.apply(0.0_f64);
            for x in samples().skip(1) {
                let y = kind.apply(x);
                assert!(y >= prev - 1e-12, "{kind} decreased at {x}: {prev} -> {y}");
                prev = y;
            }
        }
    }

    #[test]
    fn overshooting_curves_leave_unit_range() {
        for kind in Easing::ALL.into_iter().filter(|k| k.overshoots()) {
            let leaves = samples().any(|x| {
                let y = kind.apply(x);
                !(0.0..=1.0).contains(&y)
            });
            assert!(leaves, "{kind} never left [0, 1]");
        }
    }

    #[test]
    fn in_out_is_point_symmetric() {
        for kind in Easing::ALL.into_iter().filter(|k| k.mode() == Mode::InOut) {
            for x in samples() {
                let sum = kind.apply(x) + kind.apply(1.0 - x);
                assert!((sum - 1.0).abs() < 1e-6, "{kind} asymmetric at {x}: sum {sum}");
            }
        }
    }

    #[test]
    fn in_out_branches_meet_at_half() {
        for kind in Easing::ALL.into_iter().filter(|k| k.mode() == Mode::InOut) {
            // Circular is vertical at the split, so stay very close to it.
            let left = kind.apply(0.5 - 1e-13_f64);
            let right = kind.apply(0.5_f64);
            assert!((left - right).abs() < 1e-6, "{kind}: {left} vs {right}");
            assert!((right - 0.5).abs() < 1e-6, "{kind} at 0.5 was {right}");
        }
    }

    #[test]
    fn boundary_snap() {
        assert_eq!(ease(Easing::ExponentialIn, 1e-7_f64), 0.0);
        assert_eq!(ease(Easing::ElasticOut, 1.0 - 1e-7_f64), 1.0);
        assert_eq!(ease(Easing::ExponentialIn, 1e-7_f32), 0.0);
        assert_eq!(ease(Easing::ElasticOut, 1.0 - 1e-7_f32), 1.0);
    }

    #[test]
    fn reference_values() {
        assert_eq!(ease(Easing::QuadraticIn, 0.5_f64), 0.25);
        assert_eq!(ease(Easing::QuadraticOut, 0.5_f64), 0.75);
        assert_eq!(ease(Easing::CubicInOut, 0.25_f64), 0.0625);
        assert!((ease(Easing::SineIn, 1.0_f64) - 1.0).abs() < EPS);
        assert_eq!(ease(Easing::BackIn, 0.0_f64), 0.0);
        assert_eq!(ease(Easing::BackOut, 1.0_f64), 1.0);
    }

    #[test]
    fn single_and_double_precision_agree() {
        for kind in Easing::ALL {
            for i in 0..=100 {
                let x = i as f32 / 100.0;
                let single = kind.apply(x) as f64;
                let double = kind.apply(x as f64);
                assert!((single - double).abs() < 1e-4, "{kind} at {x}: {single} vs {double}");
            }
        }
    }

    #[test]
    fn family_and_mode_round_trip() {
        for kind in Easing::ALL {
            assert_eq!(Easing::new(kind.family(), kind.mode()), kind);
        }
        assert_eq!(Easing::new(Family::Circular, Mode::Out), Easing::CircularOut);
        assert_eq!(Easing::ElasticInOut.family(), Family::Elastic);
        assert_eq!(Easing::QuarticIn.mode(), Mode::In);
    }

    #[test]
    fn apply_matches_extension_methods() {
        assert_eq!(Easing::CircularIn.apply(0.3_f64), 0.3_f64.ease_circular_in());
        assert_eq!(Easing::BackInOut.apply(0.8_f32), 0.8_f32.ease_back_in_out());
        assert_eq!(Easing::QuinticOut.apply(0.1_f64), 0.1_f64.ease_quintic_out());
    }

    #[test]
    fn names_parse_back() {
        for kind in Easing::ALL {
            assert_eq!(kind.to_string().parse::<Easing>().unwrap(), kind);
        }
        assert_eq!(Easing::ElasticInOut.to_string(), "elastic_in_out");
    }

    #[test]
    fn parses_loose_spellings() {
        assert_eq!("EaseSinIn".parse::<Easing>().unwrap(), Easing::SineIn);
        assert_eq!("EaseQuadraticInOut".parse::<Easing>().unwrap(), Easing::QuadraticInOut);
        assert_eq!("quad_out".parse::<Easing>().unwrap(), Easing::QuadraticOut);
        assert_eq!("Expo-InOut".parse::<Easing>().unwrap(), Easing::ExponentialInOut);
        assert_eq!("CIRC IN".parse::<Easing>().unwrap(), Easing::CircularIn);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("bounce_out".parse::<Easing>().is_err());
        assert!("linear".parse::<Easing>().is_err());
        assert!("".parse::<Easing>().is_err());
        let err = "wobble_in".parse::<Easing>().unwrap_err();
        assert!(err.to_string().contains("wobble_in"));
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&Easing::BackInOut).unwrap();
        assert_eq!(json, "\"back_in_out\"");
        let kind: Easing = serde_json::from_str("\"EaseElasticOut\"").unwrap();
        assert_eq!(kind, Easing::ElasticOut);
        assert!(serde_json::from_str::<Easing>("\"nope_in\"").is_err());
    }
}
