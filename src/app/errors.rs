use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    NotFound,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::NotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Not found.".to_string(),
            },
        }
    }
}
