use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum CharactersApiError {
    GenerationFailed,
}

impl CharactersApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::GenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to generate image".to_string(),
            },
        }
    }
}
