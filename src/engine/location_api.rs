use super::{Engine, MIN_QUERY_CHARS, SUGGESTION_LIMIT};

use crate::{
    api::LocationAPI,
    entities::{Draft, Field, Suggestion},
    error::Error,
    external::nominatim,
};

/// Result of a debounce timer firing for one field.
#[derive(Debug)]
pub struct Resolution {
    pub field: Field,
    pub seq: u64,
    pub outcome: Outcome,
}

#[derive(Debug)]
pub enum Outcome {
    /// The text was too short to query; suggestions are cleared.
    Cleared,
    Suggestions(Result<Vec<Suggestion>, Error>),
}

#[tracing::instrument(skip(geocoder))]
async fn find_suggestions(geocoder: &nominatim::Client, text: &str) -> Result<Vec<Suggestion>, Error> {
    let places = geocoder.search(text, SUGGESTION_LIMIT).await?;

    let suggestions = places
        .into_iter()
        .filter_map(|place| {
            let name = place.display_name.clone();
            Suggestion::try_from(place)
                .map_err(|_| tracing::warn!("dropping place with malformed coordinates: {}", name))
                .ok()
        })
        .collect();

    Ok(suggestions)
}

impl LocationAPI for Engine {
    fn draft(&self) -> &Draft {
        &self.draft
    }

    fn set_name(&mut self, name: String) {
        self.draft.name = name;
    }

    fn set_coordinates(&mut self, field: Field, coordinates: String) {
        *self.draft.coordinates_mut(field) = coordinates;
    }

    #[tracing::instrument(skip(self))]
    fn change_text(&mut self, field: Field, text: String) {
        self.draft.query_mut(field).text = text.clone();

        let delay = self.debounce;
        let geocoder = self.geocoder.clone();
        let resolutions = self.resolutions.clone();

        let debounce = self.debounce_mut(field);
        let seq = debounce.restart();

        debounce.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let outcome = if text.chars().count() < MIN_QUERY_CHARS {
                Outcome::Cleared
            } else {
                Outcome::Suggestions(find_suggestions(&geocoder, &text).await)
            };

            if resolutions
                .send(Resolution {
                    field,
                    seq,
                    outcome,
                })
                .await
                .is_err()
            {
                tracing::debug!("resolution for {} dropped, receiver closed", field);
            }
        }));
    }

    #[tracing::instrument(skip(self, resolution), fields(field = %resolution.field, seq = resolution.seq))]
    fn apply_resolution(&mut self, resolution: Resolution) -> bool {
        let Resolution {
            field,
            seq,
            outcome,
        } = resolution;

        if seq != self.latest_seq(field) {
            tracing::debug!("discarding stale resolution");
            return false;
        }

        self.debounce_mut(field).task = None;

        let query = self.draft.query_mut(field);

        match outcome {
            Outcome::Cleared => query.suggestions.clear(),
            Outcome::Suggestions(Ok(suggestions)) => query.suggestions = suggestions,
            Outcome::Suggestions(Err(err)) => {
                tracing::warn!("geocoding failed for {}: {}", field, err);
            }
        }

        true
    }

    #[tracing::instrument(skip(self))]
    fn select_suggestion(&mut self, field: Field, index: usize) -> Result<(), Error> {
        let suggestion = self
            .draft
            .query(field)
            .suggestions
            .get(index)
            .cloned()
            .ok_or_else(Error::invalid_input_error)?;

        // anything still in flight belongs to text the user has moved past
        self.debounce_mut(field).restart();

        let query = self.draft.query_mut(field);
        query.text = suggestion.label;
        query.suggestions.clear();

        *self.draft.coordinates_mut(field) = suggestion.coordinates.to_string();

        Ok(())
    }

    fn clear_draft(&mut self) {
        self.pickup.restart();
        self.dropoff.restart();
        self.draft.clear();
    }
}
