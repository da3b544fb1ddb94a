use super::helpers::{fetch_shortcuts, store_shortcuts};
use super::{Engine, Mutation};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::{LocationAPI, ShortcutAPI},
    entities::Shortcut,
    error::Error,
};

impl Engine {
    fn stage(&mut self, staged: Vec<Shortcut>) -> Uuid {
        let id = Uuid::new_v4();
        self.pending = Some(Mutation { id, staged });
        id
    }

    fn ensure_idle(&self) -> Result<(), Error> {
        match &self.pending {
            Some(mutation) => {
                tracing::warn!("mutation {} still pending", mutation.id);
                Err(Error::invalid_state_error())
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ShortcutAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn load_shortcuts(&mut self) -> Result<(), Error> {
        self.ensure_idle()?;

        match fetch_shortcuts(self.store.as_ref()).await? {
            Some(shortcuts) => {
                tracing::info!("loaded {} shortcuts", shortcuts.len());
                self.shortcuts = shortcuts;
            }
            None => {
                tracing::info!("no stored shortcuts, starting empty");
                self.shortcuts = Vec::new();
            }
        }

        Ok(())
    }

    fn shortcuts(&self) -> &[Shortcut] {
        match &self.pending {
            Some(mutation) => &mutation.staged,
            None => &self.shortcuts,
        }
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[tracing::instrument(skip(self))]
    fn stage_add(&mut self, candidate: Shortcut) -> Result<Uuid, Error> {
        self.ensure_idle()?;
        candidate.validate()?;

        let mut staged = self.shortcuts.clone();
        staged.push(candidate);

        Ok(self.stage(staged))
    }

    #[tracing::instrument(skip(self))]
    fn stage_delete(&mut self, index: usize) -> Result<Uuid, Error> {
        self.ensure_idle()?;

        if index >= self.shortcuts.len() {
            return Err(Error::invalid_input_error());
        }

        let mut staged = self.shortcuts.clone();
        staged.remove(index);

        Ok(self.stage(staged))
    }

    #[tracing::instrument(skip(self))]
    async fn commit(&mut self, mutation: Uuid) -> Result<(), Error> {
        let staged = match &self.pending {
            Some(pending) if pending.id == mutation => pending.staged.clone(),
            _ => return Err(Error::invalid_state_error()),
        };

        let result = store_shortcuts(self.store.as_ref(), &staged).await;

        // the staged list is dropped either way; on failure the confirmed
        // list is what remains visible
        self.pending = None;

        match result {
            Ok(()) => {
                tracing::info!("committed mutation {}, {} shortcuts", mutation, staged.len());
                self.shortcuts = staged;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("rolled back mutation {}: {}", mutation, err);
                Err(err)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn add_shortcut(&mut self, candidate: Shortcut) -> Result<(), Error> {
        let mutation = self.stage_add(candidate)?;
        self.commit(mutation).await?;
        self.clear_draft();

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_shortcut(&mut self, index: usize) -> Result<Shortcut, Error> {
        let removed = self
            .shortcuts
            .get(index)
            .cloned()
            .ok_or_else(Error::invalid_input_error)?;

        let mutation = self.stage_delete(index)?;
        self.commit(mutation).await?;

        Ok(removed)
    }
}
