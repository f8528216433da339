use ratatui::style::Color;

/// Color roles used by the renderer
pub struct ThemeColors {
    pub background: Color,
    pub primary: Color,
    pub text: Color,
    pub text_dim: Color,
    pub error: Color,
}

/// Default palette; respects the terminal's own background
pub fn theme() -> ThemeColors {
    ThemeColors {
        background: Color::Reset,
        primary: Color::Cyan,
        text: Color::White,
        text_dim: Color::DarkGray,
        error: Color::Red,
    }
}
