use reqwest::header::ACCEPT_LANGUAGE;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_API_BASE: &str = "https://nominatim.openstreetmap.org";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub place_id: serde_json::Value,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

pub type Places = Vec<Place>;

/// Client for the OpenStreetMap Nominatim search endpoint.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    api_base: String,
    language: String,
}

impl Client {
    pub fn new(api_base: &str, user_agent: &str, language: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').into(),
            language: language.into(),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str, limit: usize) -> Result<Places, Error> {
        let url = format!("{}/search", self.api_base);

        let res = self
            .http
            .get(url)
            .header(ACCEPT_LANGUAGE, self.language.as_str())
            .query(&[("format", "json")])
            .query(&[("q", query)])
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if (400..500).contains(&status_code) {
            return Err(Error::invalid_input_error());
        } else if status_code != 200 {
            return Err(Error::upstream_error());
        }

        let mut data: Places = res.json().await.map_err(|err| {
            tracing::debug!("malformed geocoder response: {:?}", err);
            Error::upstream_error()
        })?;

        data.truncate(limit);

        Ok(data)
    }
}
