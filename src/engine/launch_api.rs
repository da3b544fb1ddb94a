use super::Engine;

use async_trait::async_trait;
use futures::future::join_all;

use crate::{
    api::{LaunchAPI, ShortcutAPI},
    deep_link::build_url,
    entities::{CabService, Coordinates, ServiceSelection},
    error::Error,
};

/// What happened when one service's deep link was handed to the OS.
#[derive(Debug)]
pub struct LaunchOutcome {
    pub service: CabService,
    pub url: String,
    pub result: Result<(), Error>,
}

#[async_trait]
impl LaunchAPI for Engine {
    fn selected_service(&self) -> ServiceSelection {
        self.selection
    }

    fn select_service(&mut self, selection: ServiceSelection) {
        self.selection = selection;
    }

    #[tracing::instrument(skip(self))]
    async fn launch(
        &self,
        selection: ServiceSelection,
        pickup: &Coordinates,
        dropoff: &Coordinates,
        label: &str,
    ) -> Vec<LaunchOutcome> {
        // each service is opened on its own so one failure can't block the other
        let attempts = selection.services().into_iter().map(|service| {
            let url = build_url(service, pickup, dropoff, label);
            let opener = self.opener.clone();

            async move {
                let target = url.clone();
                let result = match tokio::task::spawn_blocking(move || opener.open(&target)).await
                {
                    Ok(Ok(())) => {
                        tracing::info!("opened {}", service);
                        Ok(())
                    }
                    Ok(Err(_)) => {
                        tracing::warn!("{} is not installed", service);
                        Err(Error::app_not_installed_error(service.name()))
                    }
                    Err(err) => {
                        tracing::error!("opener task failed: {:?}", err);
                        Err(Error::unexpected_error())
                    }
                };

                LaunchOutcome {
                    service,
                    url,
                    result,
                }
            }
        });

        join_all(attempts).await
    }

    #[tracing::instrument(skip(self))]
    async fn launch_shortcut(&self, index: usize) -> Result<Vec<LaunchOutcome>, Error> {
        let shortcut = self
            .shortcuts()
            .get(index)
            .cloned()
            .ok_or_else(Error::invalid_input_error)?;

        let pickup = shortcut.pickup_coordinates()?;
        let dropoff = shortcut.dropoff_coordinates()?;

        Ok(self
            .launch(self.selection, &pickup, &dropoff, &shortcut.name)
            .await)
    }
}
