//! Display pane: the expression line above the result line

use crate::interpreter::constants::NAN_TEXT;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the calculator display
pub fn render_display_pane(frame: &mut Frame, area: Rect, input: &str, result: &str) {
    let block = Block::default()
        .title(" calctty ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.primary))
        .padding(Padding::horizontal(1));

    let result_color = if result == NAN_TEXT {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.number
    };

    let lines = vec![
        Line::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
        Line::styled(
            result.to_string(),
            Style::default()
                .fg(result_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
