use axum::Json;

use super::{models::preset::Preset, service};

pub async fn get_presets() -> Json<&'static [Preset]> {
    Json(service::get_presets())
}
