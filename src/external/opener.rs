use std::sync::Mutex;

use crate::error::Error;

/// The OS facility that hands a URL to whichever app registered its scheme.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), Error>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), Error> {
        open::that(url).map_err(|err| {
            tracing::debug!("no handler for {}: {:?}", url, err);
            Error::invalid_state_error()
        })
    }
}

/// Records every URL it is asked to open. Schemes listed in `missing`
/// fail as if no app were installed for them.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    missing: Vec<String>,
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without(schemes: &[&str]) -> Self {
        Self {
            missing: schemes.iter().map(|s| s.to_string()).collect(),
            opened: Mutex::default(),
        }
    }

    /// URLs that were attempted, in order, whether or not they opened.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), Error> {
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.into());
        }

        let scheme = url.split("://").next().unwrap_or_default();

        if self.missing.iter().any(|missing| missing == scheme) {
            return Err(Error::invalid_state_error());
        }

        Ok(())
    }
}
