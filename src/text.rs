//! Plain-text encoding of the geometric primitives.
//!
//! | Type     | Form                        |
//! |----------|-----------------------------|
//! | `Vector` | `x, y, z`                   |
//! | `Line`   | `<vec> -> <vec>`            |
//! | `Plane`  | `<vec> -> <vec> \| <vec>`   |
//! | `Linear` | `s: <f>\| t: <f>`           |
//!
//! Parsing tolerates surrounding whitespace around every token.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::geometry::{Line, Linear, Plane, Vector};
use crate::math::Real;

const ORIGIN_SEPARATOR: &str = "->";
const SPAN_SEPARATOR: &str = "|";
const S_LABEL: &str = "s:";
const T_LABEL: &str = "t:";

fn parse_number<T: Real>(s: &str) -> Result<T, ParseError> {
    let s = s.trim();
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidNumber(s.to_owned()))
}

fn split<'a>(s: &'a str, separator: &'static str) -> Result<(&'a str, &'a str), ParseError> {
    s.split_once(separator)
        .ok_or(ParseError::MissingSeparator(separator))
}

impl<T: Real> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x(), self.y(), self.z())
    }
}

impl<T: Real> FromStr for Vector<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let [x, y, z] = parts.as_slice() else {
            return Err(ParseError::ComponentCount {
                expected: 3,
                found: parts.len(),
            });
        };
        Ok(Vector::new(
            parse_number(x)?,
            parse_number(y)?,
            parse_number(z)?,
        ))
    }
}

impl<T: Real> fmt::Display for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {ORIGIN_SEPARATOR} {}", self.origin(), self.direction())
    }
}

impl<T: Real> FromStr for Line<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (origin, direction) = split(s, ORIGIN_SEPARATOR)?;
        Ok(Line::new(origin.parse()?, direction.parse()?))
    }
}

impl<T: Real> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {ORIGIN_SEPARATOR} {} {SPAN_SEPARATOR} {}",
            self.origin(),
            self.span_a(),
            self.span_b()
        )
    }
}

impl<T: Real> FromStr for Plane<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (origin, spans) = split(s, ORIGIN_SEPARATOR)?;
        let (span_a, span_b) = split(spans, SPAN_SEPARATOR)?;
        Ok(Plane::new(origin.parse()?, span_a.parse()?, span_b.parse()?))
    }
}

impl<T: Real> fmt::Display for Linear<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{S_LABEL} {}{SPAN_SEPARATOR} {T_LABEL} {}", self.s, self.t)
    }
}

impl<T: Real> FromStr for Linear<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (s_part, t_part) = split(s, SPAN_SEPARATOR)?;
        let s_value = s_part
            .trim()
            .strip_prefix(S_LABEL)
            .ok_or(ParseError::MissingSeparator(S_LABEL))?;
        let t_value = t_part
            .trim()
            .strip_prefix(T_LABEL)
            .ok_or(ParseError::MissingSeparator(T_LABEL))?;
        Ok(Linear::new(parse_number(s_value)?, parse_number(t_value)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const P: f64 = f64::PRECISION;

    #[test]
    fn vector_format() {
        let v = Vector::new(1.5, -2.0, 0.0);
        assert_eq!(v.to_string(), "1.5, -2, 0");

        let parsed: Vector<f64> = "  1.5 ,-2,   0 ".parse().unwrap();
        assert!(parsed.equal(&v, P));
    }

    #[test]
    fn vector_errors() {
        assert_eq!(
            "1, 2".parse::<Vector<f64>>().unwrap_err(),
            ParseError::ComponentCount {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            "1, two, 3".parse::<Vector<f64>>().unwrap_err(),
            ParseError::InvalidNumber("two".to_owned())
        );
    }

    #[test]
    fn line_format() {
        let line = Line::new(Vector::new(0.0, 1.0, 2.0), Vector::new(1.0, 0.0, 0.0));
        let text = line.to_string();
        assert_eq!(text, "0, 1, 2 -> 1, 0, 0");

        let parsed: Line<f64> = text.parse().unwrap();
        assert!(parsed.identical(&line, P));

        assert_eq!(
            "0, 1, 2 1, 0, 0".parse::<Line<f64>>().unwrap_err(),
            ParseError::MissingSeparator("->")
        );
    }

    #[test]
    fn plane_format() {
        let plane = Plane::new(
            Vector::new(0.0, 0.0, 1.0),
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(0.0, 0.25, 0.0),
        );
        let text = plane.to_string();
        assert_eq!(text, "0, 0, 1 -> 1, 0, 0 | 0, 0.25, 0");

        let parsed: Plane<f32> = text.parse().unwrap();
        assert!(parsed.span_b().equal(&Vector::new(0.0, 0.25, 0.0), f32::PRECISION));

        assert_eq!(
            "0, 0, 1 -> 1, 0, 0".parse::<Plane<f64>>().unwrap_err(),
            ParseError::MissingSeparator("|")
        );
    }

    #[test]
    fn linear_format() {
        let lin = Linear::new(0.5, -3.0);
        let text = lin.to_string();
        assert_eq!(text, "s: 0.5| t: -3");
        assert_eq!(text.parse::<Linear<f64>>().unwrap(), lin);

        assert_eq!(
            "0.5| t: -3".parse::<Linear<f64>>().unwrap_err(),
            ParseError::MissingSeparator("s:")
        );
    }
}
