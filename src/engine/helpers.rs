use crate::{
    db::KeyValueStore,
    entities::Shortcut,
    error::Error,
};

use super::STORAGE_KEY;

#[tracing::instrument(skip(store))]
pub async fn fetch_shortcuts(store: &dyn KeyValueStore) -> Result<Option<Vec<Shortcut>>, Error> {
    let maybe_data = store.get(STORAGE_KEY).await?;

    match maybe_data {
        Some(data) => Ok(Some(serde_json::from_str(&data)?)),
        None => Ok(None),
    }
}

#[tracing::instrument(skip(store, shortcuts), fields(count = shortcuts.len()))]
pub async fn store_shortcuts(store: &dyn KeyValueStore, shortcuts: &[Shortcut]) -> Result<(), Error> {
    let data = serde_json::to_string(shortcuts)?;
    store.set(STORAGE_KEY, &data).await
}
