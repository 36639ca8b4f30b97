use axum::Json;
use serde_json::{json, Value};

use super::{enums::api_status::ApiStatus, errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root() -> Json<Value> {
    Json(json!({
        "status": ApiStatus::Online.value(),
    }))
}

pub async fn fallback() -> ApiError {
    DefaultApiError::NotFound.value()
}
