use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },

    #[error("could not decode image: {0}")]
    Decode(String),

    #[error("could not save image: {0}")]
    Io(#[from] std::io::Error),
}
