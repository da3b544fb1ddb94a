use crate::entities::{Coordinates, Degrees};
use crate::error::Error;
use crate::external::nominatim::Place;

#[derive(Clone, Debug, PartialEq)]
pub struct Suggestion {
    pub place_id: String,
    pub label: String,
    pub coordinates: Coordinates,
}

impl TryFrom<Place> for Suggestion {
    type Error = Error;

    fn try_from(place: Place) -> Result<Self, Self::Error> {
        let latitude: Degrees = place.lat.parse()?;
        let longitude: Degrees = place.lon.parse()?;

        // Nominatim sends numeric ids, other deployments send strings
        let place_id = match place.place_id {
            serde_json::Value::String(id) => id,
            other => other.to_string(),
        };

        Ok(Self {
            place_id,
            label: place.display_name,
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_place() {
        let place: Place = serde_json::from_value(json!({
            "place_id": 307447584,
            "display_name": "Koramangala, Bengaluru",
            "lat": "12.9352403",
            "lon": "77.624532",
            "importance": 0.5
        }))
        .unwrap();

        let suggestion = Suggestion::try_from(place).unwrap();
        assert_eq!(suggestion.place_id, "307447584");
        assert_eq!(suggestion.coordinates.to_string(), "12.9352403,77.624532");
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let place = Place {
            place_id: json!("a"),
            display_name: "Nowhere".into(),
            lat: "north".into(),
            lon: "1".into(),
        };

        assert!(Suggestion::try_from(place).is_err());
    }
}
