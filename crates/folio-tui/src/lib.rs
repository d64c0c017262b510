//! folio-tui: Terminal UI for the folio portfolio
//!
//! This crate provides the interactive layer:
//! - The arc timeline widget (braille canvas) with hover hit-testing
//! - The detail panel with markdown blurbs and thumbnail previews
//! - Themes, icon sets, and the event loop

mod app;
mod event;
mod layout;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
pub mod timeline;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use folio_core;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{EventRecord, FolioConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Instant;

/// Tick rate for the event loop. Kept comfortably under the hover linger
/// window so pending deactivations fire close to their deadline.
const TICK_RATE_MS: u64 = 50;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(
    config: FolioConfig,
    events: Vec<EventRecord>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, events);
    let mut events = EventHandler::new(TICK_RATE_MS);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    app.handle_action(key_to_action(key));
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        app.pointer_moved(mouse.column, mouse.row, Instant::now());
                    }
                    MouseEventKind::Down(_) => {
                        // A click acts like hover: activate whatever is
                        // under the pointer.
                        app.pointer_moved(mouse.column, mouse.row, Instant::now());
                    }
                    MouseEventKind::ScrollUp => app.handle_action(Action::Left),
                    MouseEventKind::ScrollDown => app.handle_action(Action::Right),
                    _ => {}
                },
                Event::Tick => {
                    app.tick(Instant::now());
                }
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}

/// Full-frame rendering tests through a test terminal.
#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_terminal};

    fn sample_events() -> Vec<EventRecord> {
        vec![
            EventRecord {
                year: Some(2019),
                date: Some("2019".into()),
                blurb: "First *thing*.".into(),
                ..EventRecord::new("B.S. Computer Science")
            },
            EventRecord {
                year: Some(2021),
                date: Some("Summer 2021".into()),
                blurb: "Did an internship.".into(),
                ..EventRecord::new("Summer Internship")
            },
            EventRecord {
                year: Some(2023),
                date: Some("2023".into()),
                blurb: "Shipped a game.".into(),
                ..EventRecord::new("Unity prototype")
            },
        ]
    }

    fn render_to_string(app: &mut App) -> String {
        let mut terminal = create_test_terminal();
        terminal
            .draw(|frame| app.render(frame))
            .expect("draw frame");
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_idle_frame_shows_years_and_hints() {
        let mut app = App::new(FolioConfig::default(), sample_events());
        let out = render_to_string(&mut app);
        assert!(out.contains("2019"));
        assert!(out.contains("2021"));
        assert!(out.contains("2023"));
        assert!(out.contains("q quit"));
        // No panel while idle.
        assert!(!out.contains("Did an internship"));
    }

    #[test]
    fn test_active_frame_shows_panel() {
        let mut app = App::new(FolioConfig::default(), sample_events());
        app.handle_action(Action::Right);
        app.handle_action(Action::Right);
        assert_eq!(app.active(), Some(1));

        let out = render_to_string(&mut app);
        assert!(out.contains("Summer Internship"));
        assert!(out.contains("Did an internship."));
    }

    #[test]
    fn test_empty_frame_renders() {
        let mut app = App::new(FolioConfig::default(), Vec::new());
        let out = render_to_string(&mut app);
        assert!(out.contains("No events yet"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::new(FolioConfig::default(), sample_events());
        app.handle_action(Action::Help);
        let out = render_to_string(&mut app);
        assert!(out.contains("Help"));
        assert!(out.contains("cycle color theme"));
    }

    #[test]
    fn test_mouse_hover_through_rendered_frame() {
        let mut app = App::new(FolioConfig::default(), sample_events());
        // First draw records the canvas area used for hit-testing.
        let _ = render_to_string(&mut app);

        let scene_hit = {
            let layout = app.scene().layout();
            let mid = layout.segments[0].mid_deg;
            folio_core::polar_to_cartesian(layout.center, layout.radius, mid)
        };
        // Invert the scene mapping for the canvas area (80x23 after the
        // footer split).
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let col = (scene_hit.x / 800.0 * 80.0) as u16;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = (scene_hit.y / 440.0 * 23.0) as u16;

        app.pointer_moved(col, row, Instant::now());
        assert_eq!(app.active(), Some(0));
    }
}
