use serde::Deserialize;

pub const DEFAULT_IMAGE_PROVIDER_URL: &str = "https://image.pollinations.ai";

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    #[serde(default = "default_image_provider_url")]
    pub image_provider_url: String,
}

impl Default for Envy {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            port: None,
            image_provider_url: default_image_provider_url(),
        }
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_image_provider_url() -> String {
    DEFAULT_IMAGE_PROVIDER_URL.to_string()
}
