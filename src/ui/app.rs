//! Main TUI application state and logic

use super::keymap::binding_for;
use super::panes::{render_display_pane, render_keypad_pane, render_status_bar, KeypadLayout};
use crate::calculator::{Calculator, RenderSink, Symbol};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use tracing::{debug, info};

/// What the display pane shows; filled in by the calculator after each press
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Screen {
    pub input: String,
    pub result: String,
}

impl RenderSink for Screen {
    fn render(&mut self, input: &str, result: &str) {
        self.input.clear();
        self.input.push_str(input);
        self.result.clear();
        self.result.push_str(result);
    }
}

/// The main application state
pub struct App {
    /// The calculator being driven
    pub calculator: Calculator,

    /// Last display pushed by the calculator
    pub screen: Screen,

    /// Button rectangles from the last render, for mouse hit-testing
    pub keypad: KeypadLayout,

    /// Button highlighted until the next event
    pub pressed: Option<Symbol>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message is a warning
    pub status_is_warning: bool,
}

impl App {
    /// Create a new app around `calculator`
    pub fn new(calculator: Calculator) -> Self {
        let mut screen = Screen::default();
        calculator.render(&mut screen);
        App {
            calculator,
            screen,
            keypad: KeypadLayout::default(),
            pressed: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_warning: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("calculator started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let event = event::read()?;
            self.pressed = None;
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                _ => {}
            }
        }
        info!("calculator closed");

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Display on top, keypad in the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        render_display_pane(frame, chunks[0], &self.screen.input, &self.screen.result);
        render_keypad_pane(frame, chunks[1], self.pressed, &mut self.keypad);
        render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.status_is_warning,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let modified = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        if let Some(binding) = binding_for(key.code) {
            if !modified || binding.suppress_default {
                self.press(binding.symbol);
                return;
            }
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Handle mouse events; a left click presses the button under the cursor
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(symbol) = self.keypad.hit(mouse.column, mouse.row) {
                self.press(symbol);
            }
        }
    }

    /// Press a button and report the outcome in the status bar
    pub fn press(&mut self, symbol: Symbol) {
        self.pressed = Some(symbol);
        match self.calculator.press(symbol, &mut self.screen) {
            Ok(()) => {
                self.status_message = format!("Pressed {}", symbol);
                self.status_is_warning = false;
            }
            Err(e) => {
                debug!(error = %e, "showing warning");
                self.status_message = e.to_string();
                self.status_is_warning = true;
            }
        }
    }
}
