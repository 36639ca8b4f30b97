use rand::Rng;
use reqwest::Url;

use crate::app::models::api_error::ApiError;

use super::{
    config::{
        ImageModel, IMAGE_HEIGHT, IMAGE_WIDTH, PROMPT_PATH, SEED_UPPER_BOUND, STYLE_REINFORCEMENT,
    },
    dtos::character_request::CharacterRequest,
    errors::CharactersApiError,
    models::{character_colors::CharacterColors, generation_result::GenerationResult},
};

pub fn generate_image(
    request: &CharacterRequest,
    provider_url: &str,
) -> Result<GenerationResult, ApiError> {
    let prompt = build_prompt(request);
    tracing::info!("generating with prompt: {}", prompt);

    let image_url = build_image_url(provider_url, &prompt, draw_seed())?;

    Ok(GenerationResult {
        image_url,
        prompt,
        colors: CharacterColors::from(request),
    })
}

pub fn build_prompt(request: &CharacterRequest) -> String {
    let base = format!(
        "pixel art sprite character of a friendly dad, 16-bit retro video game style, \
        wearing {} shirt and {} pants, {} hair, standing pose facing forward, \
        arms slightly out, blocky pixels, flat colors, simple shading, 8-bit aesthetic, \
        game character sprite, clean pixel art style, retro gaming, nintendo style",
        request.shirt_color, request.pants_color, request.hair_color
    );

    match request.details() {
        Some(details) => format!("{}, {}, {}", base, details, STYLE_REINFORCEMENT),
        None => base,
    }
}

pub fn draw_seed() -> u32 {
    rand::thread_rng().gen_range(0..SEED_UPPER_BOUND)
}

/// The prompt travels as a single percent-encoded path segment, so nothing the
/// user typed can reach the host or the query string.
pub fn build_image_url(provider_url: &str, prompt: &str, seed: u32) -> Result<String, ApiError> {
    let image_url = format!(
        "{}{}{}?width={}&height={}&seed={}&model={}&enhance=true&nologo=true",
        provider_url.trim_end_matches('/'),
        PROMPT_PATH,
        urlencoding::encode(prompt),
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
        seed,
        ImageModel::FLUX
    );

    match Url::parse(&image_url) {
        Ok(_) => Ok(image_url),
        Err(e) => {
            tracing::error!("build_image_url: {} ({})", e, provider_url);
            Err(CharactersApiError::GenerationFailed.value())
        }
    }
}
