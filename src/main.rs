mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{self, Stdout, stdout};
use std::path::PathBuf;
use std::time::Duration;

use app::App;
use wheelpicker::{Config, log};

const USAGE: &str = "Usage: wheelpicker [--columns N] [--height ROWS] [--config PATH]";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }
    log::install_panic_hook();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut columns_override: Option<usize> = None;
    let mut height_override: Option<u16> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--columns" | "-c", Some(v)) => {
                match v.parse::<usize>() {
                    Ok(n) if (1..=3).contains(&n) => columns_override = Some(n),
                    _ => eprintln!("Warning: --columns expects 1, 2 or 3, got '{}'", v),
                }
                i += 2;
                continue;
            }
            ("--height" | "-H", Some(v)) => {
                match v.parse::<u16>() {
                    Ok(h) => height_override = Some(h),
                    Err(_) => eprintln!("Warning: --height expects a row count, got '{}'", v),
                }
                i += 2;
                continue;
            }
            ("--config", Some(v)) => {
                config_path = Some(PathBuf::from(v));
                i += 2;
                continue;
            }
            ("--help" | "-h", _) => {
                println!("{}", USAGE);
                return Ok(());
            }
            (arg, _) => {
                eprintln!("Warning: ignoring argument '{}'", arg);
            }
        }
        i += 1;
    }

    // CLI > config file > defaults
    let config = Config::resolve(config_path.as_deref())?
        .with_overrides(height_override, columns_override);
    log::log(&format!("Config: {:?}", config));

    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = enter_or_restore(enter_screen, restore_terminal)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("{}", app.selected_text());
    result
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Best-effort undo of raw mode, mouse capture and the alternate screen.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
}

/// Run `enter` once raw mode is on, calling `restore` if it fails.
fn enter_or_restore<T>(
    enter: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> wheelpicker::error::Result<T> {
    enter().map_err(|e| {
        log::log(&format!("Terminal setup failed: {}", e));
        restore();
        e.into()
    })
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    // Periodic redraw so host-side binding writes always show up.
    let mut tick = tokio::time::interval(Duration::from_millis(250));

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        app.handle_event(&event);
                    }
                    Some(Err(e)) => {
                        log::log(&format!("Event stream error: {}", e));
                        return Err(e.into());
                    }
                    None => break,
                }
            }
            _ = tick.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    log::log(&format!("Exit with selection {:?}", app.picker.selection_values()));
    Ok(())
}
