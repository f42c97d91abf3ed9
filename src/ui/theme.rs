use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color palette used across every view.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,

    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Toast and alert colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Tokyo Night.
///
impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

impl Theme {
    pub fn tokyo_night() -> Self {
        let blue = rgb(125, 207, 255);
        let comment = rgb(117, 121, 148);
        let background = rgb(26, 27, 38);
        Theme {
            name: "tokyo-night".to_string(),
            primary: blue,
            secondary: rgb(158, 206, 106),
            accent: rgb(255, 159, 196),
            text: rgb(169, 177, 214),
            text_muted: comment,
            background,
            surface: rgb(36, 40, 59),
            success: rgb(158, 206, 106),
            warning: rgb(255, 202, 40),
            error: rgb(247, 118, 142),
            info: blue,
            border_active: blue,
            border_normal: comment,
            highlight_bg: blue,
            highlight_fg: background,
        }
    }

    pub fn dracula() -> Self {
        let purple = rgb(189, 147, 249);
        let cyan = rgb(139, 233, 253);
        let comment = rgb(98, 114, 164);
        let background = rgb(40, 42, 54);
        Theme {
            name: "dracula".to_string(),
            primary: purple,
            secondary: cyan,
            accent: rgb(255, 121, 198),
            text: rgb(248, 248, 242),
            text_muted: comment,
            background,
            surface: rgb(68, 71, 90),
            success: rgb(80, 250, 123),
            warning: rgb(255, 184, 108),
            error: rgb(255, 85, 85),
            info: cyan,
            border_active: purple,
            border_normal: comment,
            highlight_bg: cyan,
            highlight_fg: background,
        }
    }

    pub fn rose_pine_dawn() -> Self {
        let purple = rgb(161, 119, 255);
        let foam = rgb(61, 174, 233);
        let text = rgb(88, 82, 96);
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: purple,
            secondary: rgb(59, 247, 209),
            accent: rgb(255, 109, 146),
            text,
            text_muted: rgb(152, 147, 165),
            background: rgb(250, 244, 237),
            surface: rgb(255, 250, 243),
            success: rgb(59, 247, 209),
            warning: rgb(255, 210, 0),
            error: rgb(235, 111, 146),
            info: foam,
            border_active: purple,
            border_normal: text,
            highlight_bg: foam,
            highlight_fg: rgb(0, 0, 0),
        }
    }

    /// Look up a theme by its config name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Theme::tokyo_night()),
            "dracula" => Some(Theme::dracula()),
            "rose-pine-dawn" => Some(Theme::rose_pine_dawn()),
            _ => None,
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["tokyo-night", "dracula", "rose-pine-dawn"]
    }
}
