use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A single latitude or longitude component.
///
/// The source digits are kept so that the number is re-emitted with the
/// precision it was entered with (`13.0` stays `13.0`), but in plain decimal
/// form: no `+` prefix, no exponent, no bare leading point.
#[derive(Clone, Debug, PartialEq)]
pub struct Degrees {
    text: String,
}

/// Rewrites a string `f64` accepted into the form a query string expects.
/// `+` would decode to a space on the receiving end.
fn plain(text: &str, value: f64) -> String {
    if text.contains(|c| c == 'e' || c == 'E') {
        // f64 Display never uses exponent notation
        return value.to_string();
    }

    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (digits, ""),
    };

    let integer = match integer.trim_start_matches('0') {
        "" => "0",
        integer => integer,
    };

    if fraction.is_empty() {
        format!("{}{}", sign, integer)
    } else {
        format!("{}{}.{}", sign, integer, fraction)
    }
}

impl FromStr for Degrees {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if text.is_empty() {
            return Err(Error::malformed_coordinates_error());
        }

        let value: f64 = text
            .parse()
            .map_err(|_| Error::malformed_coordinates_error())?;

        // f64 parsing accepts "inf" and "NaN", neither of which is a number here
        if !value.is_finite() {
            return Err(Error::malformed_coordinates_error());
        }

        Ok(Self {
            text: plain(text, value),
        })
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A parsed `"<lat>,<lng>"` pair. No range checks are applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl Coordinates {
    pub fn parse(s: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = s.split(',').collect();

        match parts.as_slice() {
            [lat, lng] => Ok(Self {
                latitude: lat.parse()?,
                longitude: lng.parse()?,
            }),
            _ => Err(Error::malformed_coordinates_error()),
        }
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

pub fn is_valid_coordinates(s: &str) -> bool {
    Coordinates::parse(s).is_ok()
}
