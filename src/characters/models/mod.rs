pub mod character_colors;
pub mod generation_result;
