use serde::{Deserialize, Serialize};

use crate::entities::{is_valid_coordinates, Coordinates};
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub name: String,
    pub pickup: String,
    pub dropoff: String,
}

impl Shortcut {
    pub fn new(name: String, pickup: String, dropoff: String) -> Self {
        Self {
            name,
            pickup,
            dropoff,
        }
    }

    /// Names are taken as typed; whitespace-only names count as filled in.
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() || self.pickup.is_empty() || self.dropoff.is_empty() {
            return Err(Error::missing_fields_error());
        }

        if !is_valid_coordinates(&self.pickup) || !is_valid_coordinates(&self.dropoff) {
            return Err(Error::malformed_coordinates_error());
        }

        Ok(())
    }

    pub fn pickup_coordinates(&self) -> Result<Coordinates, Error> {
        Coordinates::parse(&self.pickup)
    }

    pub fn dropoff_coordinates(&self) -> Result<Coordinates, Error> {
        Coordinates::parse(&self.dropoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortcut(name: &str, pickup: &str, dropoff: &str) -> Shortcut {
        Shortcut::new(name.into(), pickup.into(), dropoff.into())
    }

    #[test]
    fn validates_complete_shortcut() {
        assert!(shortcut("Home", "12.9,77.6", "13.0,77.7").validate().is_ok());
        assert!(shortcut("  ", "12.9,77.6", "13.0,77.7").validate().is_ok());
    }

    #[test]
    fn missing_fields_are_reported_first() {
        let err = shortcut("", "abc", "13.0,77.7").validate().unwrap_err();
        assert_eq!(err, Error::missing_fields_error());

        let err = shortcut("Home", "12.9,77.6", "").validate().unwrap_err();
        assert_eq!(err, Error::missing_fields_error());
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        let err = shortcut("Home", "12.9", "13.0,77.7").validate().unwrap_err();
        assert_eq!(err, Error::malformed_coordinates_error());
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let json = serde_json::to_string(&shortcut("Work", "1,2", "3,4")).unwrap();
        assert_eq!(json, r#"{"name":"Work","pickup":"1,2","dropoff":"3,4"}"#);
    }
}
