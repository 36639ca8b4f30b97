use serde::{Deserialize, Serialize};

use super::character_colors::CharacterColors;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub image_url: String,
    pub prompt: String,
    pub colors: CharacterColors,
}
