use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub shirt: &'static str,
    pub pants: &'static str,
    pub hair: &'static str,
}

pub static PRESETS: [Preset; 6] = [
    Preset {
        name: "Classic Dad",
        shirt: "blue",
        pants: "brown",
        hair: "brown",
    },
    Preset {
        name: "Cool Dad",
        shirt: "black",
        pants: "dark blue",
        hair: "gray",
    },
    Preset {
        name: "Summer Dad",
        shirt: "yellow",
        pants: "khaki",
        hair: "blonde",
    },
    Preset {
        name: "Retro Dad",
        shirt: "green",
        pants: "orange",
        hair: "red",
    },
    Preset {
        name: "Business Dad",
        shirt: "white",
        pants: "black",
        hair: "black",
    },
    Preset {
        name: "Casual Dad",
        shirt: "red",
        pants: "blue jeans",
        hair: "brown",
    },
];
