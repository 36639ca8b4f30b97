use super::models::preset::{Preset, PRESETS};

pub fn get_presets() -> &'static [Preset] {
    &PRESETS
}

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS.iter().find(|preset| preset.name.eq_ignore_ascii_case(name))
}
