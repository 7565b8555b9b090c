use crate::application::App;
use crate::domain::Store;
use crate::presentation::input::InputHandler;
use crate::presentation::ui::Renderer;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Blocking source of terminal events.
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal through crossterm.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Main dashboard loop.
///
/// Draws a full frame, blocks for the next event, hands key presses to the
/// state machine, and repeats until the app reaches its closing state. A
/// resize forces a full clear before the next frame.
///
/// # Errors
///
/// Returns an IO error if reading events or drawing fails. Restoring the
/// terminal is left to the caller in every case.
pub fn run_app<B, S, E>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    renderer: &Renderer,
    events: &mut E,
) -> io::Result<()>
where
    B: Backend,
    S: Store,
    E: EventSource,
{
    let mut needs_clear = false;
    while !app.is_closing() {
        if needs_clear {
            terminal.clear()?;
            needs_clear = false;
        }
        terminal.draw(|f| renderer.draw(f, app))?;

        match events.next_event()? {
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                needs_clear = true;
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
            _ => {}
        }
    }
    tracing::debug!("event loop finished");
    Ok(())
}
