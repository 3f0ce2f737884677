use ratatui::style::Color;

/// Colors shared by the slide renderer and the chrome around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Color,
    pub accent: Color,
    pub muted: Color,
    pub surface: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::White,
            accent: Color::Rgb(250, 204, 21),
            muted: Color::DarkGray,
            surface: Color::Rgb(39, 39, 42),
        }
    }
}
