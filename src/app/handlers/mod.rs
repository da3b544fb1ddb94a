mod launch;
mod locations;
mod shortcuts;

use async_channel::Sender;

use crate::api::API;

use super::{Event, Notice};

pub async fn handle<T: API + Send>(api: &mut T, event: Event, notices: &Sender<Notice>) {
    match event {
        Event::SetName(name) => locations::set_name(api, name, notices).await,
        Event::SetCoordinates(field, coordinates) => {
            locations::set_coordinates(api, field, coordinates, notices).await
        }
        Event::ChangeText(field, text) => locations::change_text(api, field, text, notices).await,
        Event::SelectSuggestion(field, index) => {
            locations::select(api, field, index, notices).await
        }
        Event::ClearDraft => locations::clear(api, notices).await,
        Event::Add => shortcuts::add(api, notices).await,
        Event::Delete(index) => shortcuts::delete(api, index, notices).await,
        Event::SelectService(selection) => launch::select_service(api, selection, notices).await,
        Event::Launch(index) => launch::launch(api, index, notices).await,
        Event::Quit => {}
    }
}
