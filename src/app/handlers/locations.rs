use async_channel::Sender;

use crate::api::{LocationAPI, API};
use crate::app::{alert, render, Notice};
use crate::entities::Field;

pub async fn set_name<T: API>(api: &mut T, name: String, notices: &Sender<Notice>) {
    api.set_name(name);
    render(api, notices).await;
}

pub async fn set_coordinates<T: API>(
    api: &mut T,
    field: Field,
    coordinates: String,
    notices: &Sender<Notice>,
) {
    api.set_coordinates(field, coordinates);
    render(api, notices).await;
}

pub async fn change_text<T: API>(api: &mut T, field: Field, text: String, notices: &Sender<Notice>) {
    api.change_text(field, text);
    render(api, notices).await;
}

pub async fn select<T: API>(api: &mut T, field: Field, index: usize, notices: &Sender<Notice>) {
    if let Err(err) = api.select_suggestion(field, index) {
        alert(notices, &err).await;
    }

    render(api, notices).await;
}

pub async fn clear<T: API>(api: &mut T, notices: &Sender<Notice>) {
    api.clear_draft();
    render(api, notices).await;
}
