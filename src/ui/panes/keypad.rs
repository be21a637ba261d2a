//! Keypad rendering and hit-testing
//!
//! Buttons follow [`KEYPAD`] order, four columns per row. The first row has
//! only three buttons because `C` takes two columns.

use crate::calculator::{Symbol, KEYPAD};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows of the keypad as index ranges into [`KEYPAD`]
const ROWS: [(usize, usize); 5] = [(0, 3), (3, 7), (7, 11), (11, 15), (15, 19)];

/// Screen rectangle of each button, refreshed on every render
#[derive(Debug, Default)]
pub struct KeypadLayout {
    pub buttons: Vec<(Rect, Symbol)>,
}

impl KeypadLayout {
    /// The button under a mouse position, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<Symbol> {
        let pos = Position::new(column, row);
        self.buttons
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, symbol)| *symbol)
    }
}

/// Split `area` into one rectangle per keypad button.
pub fn layout_keypad(area: Rect) -> Vec<(Rect, Symbol)> {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, ROWS.len() as u32); ROWS.len()])
        .split(area);

    let mut buttons = Vec::with_capacity(KEYPAD.len());
    for (row_area, &(start, end)) in row_areas.iter().zip(ROWS.iter()) {
        let symbols = &KEYPAD[start..end];
        let constraints: Vec<Constraint> = symbols
            .iter()
            .map(|s| match s {
                Symbol::Clear => Constraint::Ratio(2, 4),
                _ => Constraint::Ratio(1, 4),
            })
            .collect();

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(*row_area);

        buttons.extend(cells.iter().copied().zip(symbols.iter().copied()));
    }
    buttons
}

/// Render the keypad and record where each button landed.
pub fn render_keypad_pane(
    frame: &mut Frame,
    area: Rect,
    pressed: Option<Symbol>,
    layout: &mut KeypadLayout,
) {
    layout.buttons = layout_keypad(area);

    for (rect, symbol) in &layout.buttons {
        let mut style = Style::default()
            .fg(DEFAULT_THEME.button_color(symbol.class()))
            .add_modifier(Modifier::BOLD);
        if pressed == Some(*symbol) {
            style = style.bg(DEFAULT_THEME.pressed_bg);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

        // Centre the label vertically inside the border
        let inner_height = rect.height.saturating_sub(2);
        let mut text = "\n".repeat((inner_height / 2) as usize);
        text.push(symbol.label());

        let paragraph = Paragraph::new(text)
            .block(block)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, *rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_every_button() {
        let buttons = layout_keypad(Rect::new(0, 0, 40, 20));
        assert_eq!(buttons.len(), KEYPAD.len());
        let symbols: Vec<Symbol> = buttons.iter().map(|(_, s)| *s).collect();
        assert_eq!(symbols, KEYPAD.to_vec());
    }

    #[test]
    fn test_clear_is_double_width() {
        let buttons = layout_keypad(Rect::new(0, 0, 40, 20));
        let (clear, _) = buttons[0];
        let (percent, _) = buttons[1];
        assert_eq!(clear.width, 2 * percent.width);
    }

    #[test]
    fn test_hit_finds_button() {
        let layout = KeypadLayout {
            buttons: layout_keypad(Rect::new(0, 0, 40, 20)),
        };
        // Top-left corner is C, bottom-right is =
        assert_eq!(layout.hit(1, 1), Some(Symbol::Clear));
        assert_eq!(layout.hit(39, 19), Some(Symbol::Equals));
        assert_eq!(layout.hit(45, 5), None);
    }
}
