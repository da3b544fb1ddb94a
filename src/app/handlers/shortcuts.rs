use async_channel::Sender;
use uuid::Uuid;

use crate::api::{LocationAPI, ShortcutAPI, API};
use crate::app::{alert, render, Notice};
use crate::error::Error;

/// Shows the staged list right away, then persists it. A failed write is
/// alerted and the list snaps back to its last saved state.
async fn commit<T: API + Send>(
    api: &mut T,
    staged: Result<Uuid, Error>,
    notices: &Sender<Notice>,
) -> bool {
    let mutation = match staged {
        Ok(mutation) => mutation,
        Err(err) => {
            alert(notices, &err).await;
            return false;
        }
    };

    render(api, notices).await;

    let result = api.commit(mutation).await;

    if let Err(err) = &result {
        alert(notices, err).await;
    }

    result.is_ok()
}

// Same steps as ShortcutAPI::add_shortcut, with the optimistic render between.
pub async fn add<T: API + Send>(api: &mut T, notices: &Sender<Notice>) {
    let candidate = api.draft().candidate();
    let staged = api.stage_add(candidate);

    if commit(api, staged, notices).await {
        api.clear_draft();
    }

    render(api, notices).await;
}

pub async fn delete<T: API + Send>(api: &mut T, index: usize, notices: &Sender<Notice>) {
    let staged = api.stage_delete(index);
    commit(api, staged, notices).await;

    render(api, notices).await;
}
