use std::f64::consts::PI;
use std::str::FromStr;

use super::ParseError;

const DEFAULT_OVERSHOOT: f64 = 1.70158;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    InOut,
}

/// Easing curves, named the way GSAP names them (`"power2.out"`, `"back.out(1.7)"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    /// `power1` through `power4`; the exponent is one more than the level.
    Power(u8, Direction),
    Sine(Direction),
    Back(Direction, f64),
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Power(1, Direction::Out)
    }
}

impl Ease {
    pub const POWER1_IN_OUT: Ease = Ease::Power(1, Direction::InOut);
    pub const POWER2_OUT: Ease = Ease::Power(2, Direction::Out);
    pub const POWER2_IN_OUT: Ease = Ease::Power(2, Direction::InOut);

    pub fn back_out(overshoot: f64) -> Self {
        Ease::Back(Direction::Out, overshoot)
    }

    /// Maps linear progress in `[0, 1]` to eased progress. Inputs outside the range are
    /// clamped and both endpoints are exact.
    pub fn apply(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Ease::Linear => t,
            Ease::Power(level, dir) => {
                let exp = i32::from(level) + 1;
                directed(dir, t, |t| t.powi(exp))
            }
            Ease::Sine(dir) => match dir {
                Direction::In => 1.0 - (t * PI / 2.0).cos(),
                Direction::Out => (t * PI / 2.0).sin(),
                Direction::InOut => -((PI * t).cos() - 1.0) / 2.0,
            },
            Ease::Back(dir, s) => directed(dir, t, |t| t * t * ((s + 1.0) * t - s)),
        }
    }
}

/// Builds out/in-out variants from an ease-in curve.
fn directed(dir: Direction, t: f64, ease_in: impl Fn(f64) -> f64) -> f64 {
    match dir {
        Direction::In => ease_in(t),
        Direction::Out => 1.0 - ease_in(1.0 - t),
        Direction::InOut => {
            if t < 0.5 {
                ease_in(t * 2.0) / 2.0
            } else {
                1.0 - ease_in((1.0 - t) * 2.0) / 2.0
            }
        }
    }
}

impl FromStr for Ease {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, param) = match s.find('(') {
            Some(i) => {
                let inner = s[i + 1..]
                    .strip_suffix(')')
                    .ok_or_else(|| ParseError::EaseParam(s.to_string()))?;
                let value = inner
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ParseError::EaseParam(s.to_string()))?;
                (&s[..i], Some(value))
            }
            None => (s, None),
        };
        let mut parts = name.split('.');
        let family = parts.next().unwrap_or_default();
        let dir = match parts.next() {
            None | Some("out") => Direction::Out,
            Some("in") => Direction::In,
            Some("inOut") => Direction::InOut,
            Some(_) => return Err(ParseError::UnknownEase(s.to_string())),
        };
        if parts.next().is_some() {
            return Err(ParseError::UnknownEase(s.to_string()));
        }
        let ease = match family {
            "none" | "linear" => Ease::Linear,
            "power1" => Ease::Power(1, dir),
            "power2" => Ease::Power(2, dir),
            "power3" => Ease::Power(3, dir),
            "power4" => Ease::Power(4, dir),
            "sine" => Ease::Sine(dir),
            "back" => Ease::Back(dir, param.unwrap_or(DEFAULT_OVERSHOOT)),
            _ => return Err(ParseError::UnknownEase(s.to_string())),
        };
        if param.is_some() && !matches!(ease, Ease::Back(..)) {
            return Err(ParseError::EaseParam(s.to_string()));
        }
        Ok(ease)
    }
}
