use async_channel::Sender;

use crate::api::{LaunchAPI, API};
use crate::app::{alert, render, Notice};
use crate::entities::ServiceSelection;

pub async fn select_service<T: API>(
    api: &mut T,
    selection: ServiceSelection,
    notices: &Sender<Notice>,
) {
    api.select_service(selection);
    render(api, notices).await;
}

pub async fn launch<T: API>(api: &T, index: usize, notices: &Sender<Notice>) {
    let outcomes = match api.launch_shortcut(index).await {
        Ok(outcomes) => outcomes,
        Err(err) => {
            alert(notices, &err).await;
            return;
        }
    };

    for outcome in outcomes {
        if let Err(err) = outcome.result {
            alert(notices, &err).await;
        }
    }
}
