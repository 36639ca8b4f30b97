use axum::{async_trait, body::Bytes, extract::FromRequest, http::Request};
use serde::de::DeserializeOwned;

use super::api_error::ApiError;

/// JSON body extractor that parses whatever bytes arrive, regardless of the
/// `Content-Type` header.
pub struct JsonFromRequest<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for JsonFromRequest<T>
where
    T: DeserializeOwned,
    Bytes: FromRequest<S, B>,
    <Bytes as FromRequest<S, B>>::Rejection: std::fmt::Display,
    B: Send + 'static,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("failed to read body: {}", e);
                return Err(ApiError::bad_request(e.to_string()));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(JsonFromRequest(value)),
            Err(e) => {
                tracing::warn!(%e, "rejected json body");
                Err(ApiError::bad_request(e.to_string()))
            }
        }
    }
}
