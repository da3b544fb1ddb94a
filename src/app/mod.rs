pub mod command;
mod handlers;

use async_channel::{Receiver, Sender};

use crate::{
    api::{LaunchAPI, LocationAPI, ShortcutAPI, API},
    engine::Resolution,
    entities::{Draft, Field, ServiceSelection, Shortcut},
    error::Error,
};

const LOAD_FAILED: &str = "Could not load shortcuts";

/// A user action, as a touch UI would report it.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    SetName(String),
    SetCoordinates(Field, String),
    ChangeText(Field, String),
    SelectSuggestion(Field, usize),
    Add,
    Delete(usize),
    Launch(usize),
    SelectService(ServiceSelection),
    ClearDraft,
    Quit,
}

/// Everything the UI needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub shortcuts: Vec<Shortcut>,
    pub draft: Draft,
    pub selection: ServiceSelection,
    pub pending: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Render(View),
    Alert { title: String, message: String },
}

/// Runs the control loop until `Quit` arrives or the event channel closes.
///
/// User events and debounce resolutions are both applied on this one task,
/// so the engine never sees concurrent mutation.
#[tracing::instrument(skip_all)]
pub async fn serve<T: API + Send>(
    mut api: T,
    resolutions: Receiver<Resolution>,
    events: Receiver<Event>,
    notices: Sender<Notice>,
) {
    if let Err(err) = api.load_shortcuts().await {
        alert_titled(&notices, LOAD_FAILED, &err).await;
    }

    render(&api, &notices).await;

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(Event::Quit) | Err(_) => break,
                Ok(event) => handlers::handle(&mut api, event, &notices).await,
            },
            Ok(resolution) = resolutions.recv() => {
                if api.apply_resolution(resolution) {
                    render(&api, &notices).await;
                }
            }
        }
    }

    tracing::info!("control loop stopped");
}

pub(crate) fn view<T: API>(api: &T) -> View {
    View {
        shortcuts: api.shortcuts().to_vec(),
        draft: api.draft().clone(),
        selection: api.selected_service(),
        pending: api.is_pending(),
    }
}

pub(crate) async fn render<T: API>(api: &T, notices: &Sender<Notice>) {
    notify(notices, Notice::Render(view(api))).await;
}

pub(crate) async fn alert(notices: &Sender<Notice>, err: &Error) {
    alert_titled(notices, err.title(), err).await;
}

async fn alert_titled(notices: &Sender<Notice>, title: &str, err: &Error) {
    notify(
        notices,
        Notice::Alert {
            title: title.into(),
            message: err.message.clone(),
        },
    )
    .await;
}

async fn notify(notices: &Sender<Notice>, notice: Notice) {
    if notices.send(notice).await.is_err() {
        tracing::debug!("notice dropped, ui closed");
    }
}
