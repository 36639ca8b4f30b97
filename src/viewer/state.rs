use crate::{
    characters::{
        dtos::character_request::CharacterRequest, models::generation_result::GenerationResult,
    },
    presets::models::preset::Preset,
};

pub const GENERATION_ERROR_MESSAGE: &str = "Failed to generate image. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating(GenerationStage),
    Ready,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    AwaitingEndpoint,
    Preloading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ShirtColor,
    PantsColor,
    HairColor,
    AdditionalDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadOutcome {
    Decoded(ImageDimensions),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedImage {
    pub url: String,
    pub preload: PreloadOutcome,
}

#[derive(Debug, Clone)]
pub enum Action {
    EditField(Field, String),
    SelectPreset(Preset),
    Submit,
    EndpointSucceeded(GenerationResult),
    EndpointFailed(String),
    ImagePreloaded(PreloadOutcome),
    Download,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CallEndpoint(CharacterRequest),
    PreloadImage(String),
    SaveImage(String),
}

#[derive(Debug, Clone)]
pub struct ViewerState {
    pub details: CharacterRequest,
    pub phase: Phase,
    pub result: Option<GenerationResult>,
    pub image: Option<DisplayedImage>,
    pub error: Option<String>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            details: CharacterRequest::default(),
            phase: Phase::Idle,
            result: None,
            image: None,
            error: None,
        }
    }
}

impl ViewerState {
    pub fn is_generating(&self) -> bool {
        matches!(self.phase, Phase::Generating(_))
    }

    pub fn can_download(&self) -> bool {
        self.phase == Phase::Ready && self.image.is_some()
    }
}

/// Applies one action to the state and returns the side effect it asks for.
///
/// Actions that do not fit the current phase (a late endpoint response, a
/// second submit while generating) leave the state untouched.
pub fn reduce(state: &mut ViewerState, action: Action) -> Option<Effect> {
    match action {
        Action::EditField(field, value) => {
            let details = &mut state.details;
            match field {
                Field::ShirtColor => details.shirt_color = value,
                Field::PantsColor => details.pants_color = value,
                Field::HairColor => details.hair_color = value,
                Field::AdditionalDetails => details.additional_details = Some(value),
            }
            None
        }
        Action::SelectPreset(preset) => {
            state.details = CharacterRequest {
                shirt_color: preset.shirt.to_string(),
                pants_color: preset.pants.to_string(),
                hair_color: preset.hair.to_string(),
                additional_details: Some(String::new()),
            };
            None
        }
        Action::Submit => {
            if state.is_generating() {
                return None;
            }

            state.phase = Phase::Generating(GenerationStage::AwaitingEndpoint);
            state.result = None;
            state.image = None;
            state.error = None;

            Some(Effect::CallEndpoint(state.details.clone()))
        }
        Action::EndpointSucceeded(result) => {
            if state.phase != Phase::Generating(GenerationStage::AwaitingEndpoint) {
                return None;
            }

            let image_url = result.image_url.to_string();
            state.phase = Phase::Generating(GenerationStage::Preloading);
            state.result = Some(result);

            Some(Effect::PreloadImage(image_url))
        }
        Action::EndpointFailed(reason) => {
            if state.phase != Phase::Generating(GenerationStage::AwaitingEndpoint) {
                return None;
            }

            tracing::error!("generation failed: {}", reason);
            state.phase = Phase::Errored;
            state.error = Some(GENERATION_ERROR_MESSAGE.to_string());
            None
        }
        Action::ImagePreloaded(preload) => {
            if state.phase != Phase::Generating(GenerationStage::Preloading) {
                return None;
            }

            let Some(result) = &state.result else {
                return None;
            };

            if preload == PreloadOutcome::Failed {
                tracing::warn!("preload failed, showing {} anyway", result.image_url);
            }

            state.image = Some(DisplayedImage {
                url: result.image_url.to_string(),
                preload,
            });
            state.phase = Phase::Ready;
            None
        }
        Action::Download => {
            if !state.can_download() {
                return None;
            }

            state
                .image
                .as_ref()
                .map(|image| Effect::SaveImage(image.url.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        characters::models::character_colors::CharacterColors, presets::service::find_preset,
    };

    use super::*;

    fn result() -> GenerationResult {
        GenerationResult {
            image_url: "https://image.pollinations.ai/prompt/dad?seed=1".to_string(),
            prompt: "dad".to_string(),
            colors: CharacterColors {
                shirt_color: "blue".to_string(),
                pants_color: "brown".to_string(),
                hair_color: "brown".to_string(),
            },
        }
    }

    fn ready_state() -> ViewerState {
        let mut state = ViewerState::default();
        reduce(&mut state, Action::Submit);
        reduce(&mut state, Action::EndpointSucceeded(result()));
        reduce(
            &mut state,
            Action::ImagePreloaded(PreloadOutcome::Decoded(ImageDimensions {
                width: 512,
                height: 512,
            })),
        );
        state
    }

    #[test]
    fn starts_idle_with_form_defaults() {
        let state = ViewerState::default();

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.details.shirt_color, "blue");
        assert_eq!(state.details.pants_color, "brown");
        assert_eq!(state.details.hair_color, "brown");
        assert!(state.image.is_none());
        assert!(!state.can_download());
    }

    #[test]
    fn selecting_preset_overwrites_colors_without_effect() {
        let mut state = ViewerState::default();
        reduce(
            &mut state,
            Action::EditField(Field::AdditionalDetails, "wearing glasses".to_string()),
        );

        let preset = *find_preset("Retro Dad").unwrap();
        let effect = reduce(&mut state, Action::SelectPreset(preset));

        assert_eq!(effect, None);
        assert_eq!(state.details.shirt_color, "green");
        assert_eq!(state.details.pants_color, "orange");
        assert_eq!(state.details.hair_color, "red");
        assert_eq!(state.details.additional_details.as_deref(), Some(""));
        assert_eq!(state.phase, Phase::Idle);
    }

    #[test]
    fn editing_a_field_only_touches_that_field() {
        let mut state = ViewerState::default();
        let effect = reduce(&mut state, Action::EditField(Field::HairColor, "gray".to_string()));

        assert_eq!(effect, None);
        assert_eq!(state.details.hair_color, "gray");
        assert_eq!(state.details.shirt_color, "blue");
    }

    #[test]
    fn submit_calls_endpoint_with_current_details() {
        let mut state = ViewerState::default();
        reduce(&mut state, Action::EditField(Field::ShirtColor, "red".to_string()));

        let effect = reduce(&mut state, Action::Submit);

        assert_eq!(
            state.phase,
            Phase::Generating(GenerationStage::AwaitingEndpoint)
        );
        match effect {
            Some(Effect::CallEndpoint(details)) => assert_eq!(details.shirt_color, "red"),
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn submit_is_ignored_while_generating() {
        let mut state = ViewerState::default();
        reduce(&mut state, Action::Submit);

        assert_eq!(reduce(&mut state, Action::Submit), None);

        reduce(&mut state, Action::EndpointSucceeded(result()));
        assert_eq!(reduce(&mut state, Action::Submit), None);
        assert_eq!(state.phase, Phase::Generating(GenerationStage::Preloading));
    }

    #[test]
    fn endpoint_success_moves_to_preloading() {
        let mut state = ViewerState::default();
        reduce(&mut state, Action::Submit);

        let effect = reduce(&mut state, Action::EndpointSucceeded(result()));

        assert_eq!(effect, Some(Effect::PreloadImage(result().image_url)));
        assert_eq!(state.phase, Phase::Generating(GenerationStage::Preloading));
        assert!(state.image.is_none());
    }

    #[test]
    fn preload_completes_to_ready() {
        let state = ready_state();

        assert_eq!(state.phase, Phase::Ready);
        assert!(state.can_download());
        assert_eq!(
            state.image.unwrap().preload,
            PreloadOutcome::Decoded(ImageDimensions {
                width: 512,
                height: 512
            })
        );
    }

    #[test]
    fn preload_failure_still_shows_image() {
        let mut state = ViewerState::default();
        reduce(&mut state, Action::Submit);
        reduce(&mut state, Action::EndpointSucceeded(result()));
        reduce(&mut state, Action::ImagePreloaded(PreloadOutcome::Failed));

        assert_eq!(state.phase, Phase::Ready);
        assert!(state.error.is_none());
        assert_eq!(state.image.unwrap().url, result().image_url);
    }

    #[test]
    fn endpoint_failure_surfaces_error() {
        let mut state = ViewerState::default();
        reduce(&mut state, Action::Submit);
        reduce(
            &mut state,
            Action::EndpointFailed("status 500".to_string()),
        );

        assert_eq!(state.phase, Phase::Errored);
        assert_eq!(state.error.as_deref(), Some(GENERATION_ERROR_MESSAGE));
        assert!(state.image.is_none());
    }

    #[test]
    fn resubmit_clears_previous_image_and_error() {
        let mut state = ready_state();
        reduce(&mut state, Action::Submit);

        assert!(state.image.is_none());
        assert!(state.result.is_none());

        reduce(&mut state, Action::EndpointFailed("offline".to_string()));
        let effect = reduce(&mut state, Action::Submit);

        assert!(matches!(effect, Some(Effect::CallEndpoint(_))));
        assert!(state.error.is_none());
    }

    #[test]
    fn download_only_when_ready() {
        let mut state = ViewerState::default();
        assert_eq!(reduce(&mut state, Action::Download), None);

        let mut state = ready_state();
        assert_eq!(
            reduce(&mut state, Action::Download),
            Some(Effect::SaveImage(result().image_url))
        );
        assert_eq!(state.phase, Phase::Ready);
    }

    #[test]
    fn late_preload_is_ignored_after_error() {
        let mut state = ViewerState::default();
        reduce(&mut state, Action::Submit);
        reduce(&mut state, Action::EndpointFailed("offline".to_string()));

        let effect = reduce(&mut state, Action::ImagePreloaded(PreloadOutcome::Failed));

        assert_eq!(effect, None);
        assert_eq!(state.phase, Phase::Errored);
    }
}
