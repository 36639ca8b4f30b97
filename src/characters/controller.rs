use axum::{extract::State, Json};

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::character_request::CharacterRequest, errors::CharactersApiError,
    models::generation_result::GenerationResult, service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    payload: Result<JsonFromRequest<CharacterRequest>, ApiError>,
) -> Result<Json<GenerationResult>, ApiError> {
    match payload {
        Ok(JsonFromRequest(dto)) => {
            match service::generate_image(&dto, &state.envy.image_provider_url) {
                Ok(result) => Ok(Json(result)),
                Err(e) => Err(e),
            }
        }
        Err(e) => {
            tracing::error!("generate_image: {}", e.message);
            Err(CharactersApiError::GenerationFailed.value())
        }
    }
}
