mod helpers;
mod launch_api;
mod location_api;
mod shortcut_api;

use std::sync::Arc;
use std::time::Duration;

use async_channel::{Receiver, Sender};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    api::API,
    db::KeyValueStore,
    entities::{Draft, Field, ServiceSelection, Shortcut},
    external::{nominatim, opener::UrlOpener},
};

pub use launch_api::LaunchOutcome;
pub use location_api::{Outcome, Resolution};

/// Storage key holding the serialized shortcut list.
pub const STORAGE_KEY: &str = "widgets";

pub const MIN_QUERY_CHARS: usize = 3;
pub const SUGGESTION_LIMIT: usize = 5;
pub const LANGUAGE: &str = "en";

#[derive(Debug)]
struct Mutation {
    id: Uuid,
    staged: Vec<Shortcut>,
}

/// Debounce state for one address field.
#[derive(Debug, Default)]
struct Debounce {
    seq: u64,
    task: Option<JoinHandle<()>>,
}

impl Debounce {
    /// Invalidates whatever is in flight and returns the new sequence number.
    fn restart(&mut self) -> u64 {
        if let Some(task) = self.task.take() {
            task.abort();
        }

        self.seq += 1;
        self.seq
    }
}

pub struct Engine {
    store: Arc<dyn KeyValueStore>,
    shortcuts: Vec<Shortcut>,
    pending: Option<Mutation>,
    draft: Draft,
    geocoder: nominatim::Client,
    debounce: Duration,
    pickup: Debounce,
    dropoff: Debounce,
    resolutions: Sender<Resolution>,
    opener: Arc<dyn UrlOpener>,
    selection: ServiceSelection,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        geocoder: nominatim::Client,
        opener: Arc<dyn UrlOpener>,
        debounce: Duration,
    ) -> (Self, Receiver<Resolution>) {
        let (resolutions, receiver) = async_channel::unbounded();

        let engine = Self {
            store,
            shortcuts: Vec::new(),
            pending: None,
            draft: Draft::default(),
            geocoder,
            debounce,
            pickup: Debounce::default(),
            dropoff: Debounce::default(),
            resolutions,
            opener,
            selection: ServiceSelection::default(),
        };

        (engine, receiver)
    }

    fn debounce_mut(&mut self, field: Field) -> &mut Debounce {
        match field {
            Field::Pickup => &mut self.pickup,
            Field::Dropoff => &mut self.dropoff,
        }
    }

    fn latest_seq(&self, field: Field) -> u64 {
        match field {
            Field::Pickup => self.pickup.seq,
            Field::Dropoff => self.dropoff.seq,
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.pickup.restart();
        self.dropoff.restart();
    }
}

impl API for Engine {}
