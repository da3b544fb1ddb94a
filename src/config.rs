use std::env;
use std::time::Duration;

use crate::error::Error;
use crate::external::nominatim::DEFAULT_API_BASE;

const DATABASE_URL: &str = "QUICKROUTES_DATABASE_URL";
const GEOCODER_BASE: &str = "QUICKROUTES_GEOCODER_BASE";
const USER_AGENT: &str = "QUICKROUTES_USER_AGENT";
const DEBOUNCE_MS: &str = "QUICKROUTES_DEBOUNCE_MS";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub geocoder_base: String,
    pub user_agent: String,
    pub debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:quickroutes.db?mode=rwc".into(),
            geocoder_base: DEFAULT_API_BASE.into(),
            user_agent: format!("quickroutes/{}", env!("CARGO_PKG_VERSION")),
            debounce: Duration::from_millis(600),
        }
    }
}

impl Config {
    /// Reads overrides from the environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let mut config = Self::default();

        if let Some(url) = optional(&lookup, DATABASE_URL)? {
            config.database_url = url;
        }

        if let Some(base) = optional(&lookup, GEOCODER_BASE)? {
            config.geocoder_base = base;
        }

        if let Some(user_agent) = optional(&lookup, USER_AGENT)? {
            config.user_agent = user_agent;
        }

        if let Some(ms) = optional(&lookup, DEBOUNCE_MS)? {
            let ms: u64 = ms.parse().map_err(|_| Error::config_error(DEBOUNCE_MS))?;
            config.debounce = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn optional<F>(lookup: &F, key: &str) -> Result<Option<String>, Error>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
