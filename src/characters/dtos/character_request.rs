use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRequest {
    pub shirt_color: String,
    pub pants_color: String,
    pub hair_color: String,
    #[serde(default)]
    pub additional_details: Option<String>,
}

impl CharacterRequest {
    /// Extra details worth putting in the prompt, if any were typed.
    pub fn details(&self) -> Option<&str> {
        match self.additional_details.as_deref() {
            Some(details) if !details.is_empty() => Some(details),
            _ => None,
        }
    }
}

impl Default for CharacterRequest {
    fn default() -> Self {
        Self {
            shirt_color: "blue".to_string(),
            pants_color: "brown".to_string(),
            hair_color: "brown".to_string(),
            additional_details: Some(String::new()),
        }
    }
}
