pub const PROMPT_PATH: &str = "/prompt/";

pub const IMAGE_WIDTH: u16 = 512;
pub const IMAGE_HEIGHT: u16 = 512;

/// Seeds are drawn from `0..SEED_UPPER_BOUND`.
pub const SEED_UPPER_BOUND: u32 = 1_000_000;

pub const STYLE_REINFORCEMENT: &str = "pixel art style";

#[non_exhaustive]
pub struct ImageModel;

impl ImageModel {
    pub const FLUX: &'static str = "flux";
}
