use crate::calculator::ButtonClass;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub pressed_bg: Color, // Flash behind the last pressed button
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(249, 226, 175),        // Yellow for the result line
    border_normal: Color::Rgb(108, 112, 134), // Grey border for buttons
    status_bg: Color::Rgb(50, 50, 70),
    pressed_bg: Color::Rgb(69, 71, 90),
};

impl Theme {
    /// Label colour for a keypad button
    pub fn button_color(&self, class: ButtonClass) -> Color {
        match class {
            ButtonClass::Clear => self.error,
            ButtonClass::Equals => self.success,
            ButtonClass::Operator => self.secondary,
            ButtonClass::Plain => self.fg,
        }
    }
}
