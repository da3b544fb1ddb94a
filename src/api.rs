use async_trait::async_trait;
use uuid::Uuid;

use crate::engine::{LaunchOutcome, Resolution};
use crate::entities::{Coordinates, Draft, Field, ServiceSelection, Shortcut};
use crate::error::Error;

/// The ordered, persisted list of shortcuts.
///
/// Mutations are staged (applied optimistically and visible through
/// `shortcuts`) and then committed by writing the whole list. Only one
/// mutation may be pending at a time.
#[async_trait]
pub trait ShortcutAPI {
    async fn load_shortcuts(&mut self) -> Result<(), Error>;
    fn shortcuts(&self) -> &[Shortcut];
    fn is_pending(&self) -> bool;
    fn stage_add(&mut self, candidate: Shortcut) -> Result<Uuid, Error>;
    fn stage_delete(&mut self, index: usize) -> Result<Uuid, Error>;
    async fn commit(&mut self, mutation: Uuid) -> Result<(), Error>;

    /// `stage_add`, `commit`, then `clear_draft` on success, with no chance
    /// to render the staged list in between. The control loop runs the same
    /// steps itself (`app::handlers::shortcuts`); keep the two in step.
    async fn add_shortcut(&mut self, candidate: Shortcut) -> Result<(), Error>;

    /// `stage_delete` then `commit`, returning the removed row.
    async fn delete_shortcut(&mut self, index: usize) -> Result<Shortcut, Error>;
}

/// Draft composition and free-text address lookup.
pub trait LocationAPI {
    fn draft(&self) -> &Draft;
    fn set_name(&mut self, name: String);
    fn set_coordinates(&mut self, field: Field, coordinates: String);
    fn change_text(&mut self, field: Field, text: String);
    fn apply_resolution(&mut self, resolution: Resolution) -> bool;
    fn select_suggestion(&mut self, field: Field, index: usize) -> Result<(), Error>;
    fn clear_draft(&mut self);
}

#[async_trait]
pub trait LaunchAPI {
    fn selected_service(&self) -> ServiceSelection;
    fn select_service(&mut self, selection: ServiceSelection);
    async fn launch(
        &self,
        selection: ServiceSelection,
        pickup: &Coordinates,
        dropoff: &Coordinates,
        label: &str,
    ) -> Vec<LaunchOutcome>;
    async fn launch_shortcut(&self, index: usize) -> Result<Vec<LaunchOutcome>, Error>;
}

pub trait API: ShortcutAPI + LocationAPI + LaunchAPI {}
