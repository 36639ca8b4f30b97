use std::path::{Path, PathBuf};

use super::{
    client::{DownloadOutcome, GenerateClient},
    errors::ViewerError,
    state::{reduce, Action, Effect, ViewerState},
};

/// Owns the viewer state and runs the effects its transitions ask for.
pub struct Viewer {
    state: ViewerState,
    client: GenerateClient,
    download_dir: PathBuf,
}

impl Viewer {
    pub fn new(client: GenerateClient, download_dir: &Path) -> Self {
        Self {
            state: ViewerState::default(),
            client,
            download_dir: download_dir.to_path_buf(),
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Feeds `action` through the reducer, then keeps running effects until
    /// the state settles. Only a download yields an outcome.
    pub async fn dispatch(&mut self, action: Action) -> Result<Option<DownloadOutcome>, ViewerError> {
        let mut next = reduce(&mut self.state, action);

        while let Some(effect) = next.take() {
            match effect {
                Effect::CallEndpoint(details) => {
                    tracing::debug!("calling {}", self.client.endpoint());

                    let action = match self.client.request_generation(&details).await {
                        Ok(result) => Action::EndpointSucceeded(result),
                        Err(e) => Action::EndpointFailed(e.to_string()),
                    };
                    next = reduce(&mut self.state, action);
                }
                Effect::PreloadImage(url) => {
                    let preload = self.client.preload_image(&url).await;
                    next = reduce(&mut self.state, Action::ImagePreloaded(preload));
                }
                Effect::SaveImage(url) => {
                    let outcome = self.client.save_image(&url, &self.download_dir).await?;
                    return Ok(Some(outcome));
                }
            }
        }

        Ok(None)
    }
}
