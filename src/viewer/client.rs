use std::path::{Path, PathBuf};

use bytes::Bytes;
use reqwest::header::ACCEPT;

use crate::characters::{
    dtos::character_request::CharacterRequest, models::generation_result::GenerationResult,
};

use super::{
    errors::ViewerError,
    state::{ImageDimensions, PreloadOutcome},
};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/generate-image";
pub const DOWNLOAD_FILE_NAME: &str = "pixel-dad.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    /// The bytes could not be fetched; the link itself is the download.
    DirectLink(String),
}

#[derive(Debug, Clone)]
pub struct GenerateClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GenerateClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn request_generation(
        &self,
        details: &CharacterRequest,
    ) -> Result<GenerationResult, ViewerError> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(details)
            .send()
            .await
            .map_err(|source| ViewerError::Request {
                url: self.endpoint.to_string(),
                source,
            })?;

        if !res.status().is_success() {
            return Err(ViewerError::Status {
                url: self.endpoint.to_string(),
                status: res.status(),
            });
        }

        res.json::<GenerationResult>()
            .await
            .map_err(|source| ViewerError::Request {
                url: self.endpoint.to_string(),
                source,
            })
    }

    async fn send_get(&self, url: &str) -> Result<reqwest::Response, ViewerError> {
        self.http
            .get(url)
            .header(ACCEPT, mime::IMAGE_STAR.as_ref())
            .send()
            .await
            .map_err(|source| ViewerError::Request {
                url: url.to_string(),
                source,
            })
    }

    async fn read_bytes(url: &str, res: reqwest::Response) -> Result<Bytes, ViewerError> {
        res.bytes().await.map_err(|source| ViewerError::Request {
            url: url.to_string(),
            source,
        })
    }

    pub async fn get_bytes(&self, url: &str) -> Result<Bytes, ViewerError> {
        let res = self.send_get(url).await?;

        if !res.status().is_success() {
            return Err(ViewerError::Status {
                url: url.to_string(),
                status: res.status(),
            });
        }

        Self::read_bytes(url, res).await
    }

    /// Fetches the image and decodes enough of it to know its size.
    pub async fn preload_image(&self, url: &str) -> PreloadOutcome {
        match self.decode_image(url).await {
            Ok(dimensions) => PreloadOutcome::Decoded(dimensions),
            Err(e) => {
                tracing::warn!(%e, "preload_image");
                PreloadOutcome::Failed
            }
        }
    }

    async fn decode_image(&self, url: &str) -> Result<ImageDimensions, ViewerError> {
        let bytes = self.get_bytes(url).await?;

        match imagesize::blob_size(&bytes) {
            Ok(size) => Ok(ImageDimensions {
                width: size.width,
                height: size.height,
            }),
            Err(e) => Err(ViewerError::Decode(e.to_string())),
        }
    }

    /// Saves whatever body the provider answers with, error statuses
    /// included. Only a transport failure falls back to the direct link.
    pub async fn save_image(&self, url: &str, dir: &Path) -> Result<DownloadOutcome, ViewerError> {
        let fetched = match self.send_get(url).await {
            Ok(res) => {
                if !res.status().is_success() {
                    tracing::warn!("save_image: {} responded with {}", url, res.status());
                }
                Self::read_bytes(url, res).await
            }
            Err(e) => Err(e),
        };

        let bytes = match fetched {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(%e, "save_image falling back to direct link");
                return Ok(DownloadOutcome::DirectLink(url.to_string()));
            }
        };

        let path = dir.join(DOWNLOAD_FILE_NAME);
        tokio::fs::write(&path, &bytes).await?;
        tracing::debug!("saved {} bytes to {}", bytes.len(), path.display());

        Ok(DownloadOutcome::Saved(path))
    }
}
