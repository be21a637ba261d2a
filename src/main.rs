// calctty: left-to-right keypad calculator

use std::io;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use calctty::calculator::Calculator;
use calctty::config::Cli;
use calctty::interpreter::evaluate_str;
use calctty::logging;
use calctty::ui::{App, Screen};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(expr) = &cli.eval {
        logging::init_stderr()?;
        match evaluate_str(expr) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    if let Some(labels) = &cli.keys {
        logging::init_stderr()?;
        let mut calculator = Calculator::init(cli.config());
        let mut screen = Screen::default();
        for label in labels.chars() {
            if let Err(e) = calculator.press_label(&label.to_string(), &mut screen) {
                eprintln!("Warning: {}", e);
            }
        }
        println!("{}", screen.input);
        println!("{}", screen.result);
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        logging::init_file(path)?;
    }
    info!(max_input_len = cli.max_input, "starting interactive mode");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Calculator::init(cli.config()));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
