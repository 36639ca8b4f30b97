use serde::{Deserialize, Serialize};

use crate::characters::dtos::character_request::CharacterRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterColors {
    pub shirt_color: String,
    pub pants_color: String,
    pub hair_color: String,
}

impl From<&CharacterRequest> for CharacterColors {
    fn from(request: &CharacterRequest) -> Self {
        Self {
            shirt_color: request.shirt_color.to_string(),
            pants_color: request.pants_color.to_string(),
            hair_color: request.hair_color.to_string(),
        }
    }
}
