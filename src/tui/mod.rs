// Module declarations
pub mod components;

// Core modules
pub mod action;
pub mod component;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod types;

#[cfg(test)]
pub mod testing;


pub use action::{Action, CalendarAction, FeedAction};
pub use component::{Component, Effect, Element};
pub use hit_test::{hit_test_overlay, mouse_to_action, overlay_dispatch, OverlayHit};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::View;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use crate::calendar::CalendarMonth;
use crate::config::Config;

/// Main entry point for TUI mode
///
/// `start_route` is resolved like any other route name; an unknown name
/// leaves the feed showing and reports the error in the status bar.
pub async fn run(
    config: Config,
    calendar: CalendarMonth,
    start_route: Option<String>,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runtime = Runtime::new(AppState::new(config, calendar));
    if let Some(route) = start_route {
        runtime.dispatch(Action::NavigateRoute(route));
    }

    let result = run_loop(&mut terminal, &mut runtime, poll_event);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Wait up to 100ms for the next terminal event
fn poll_event() -> Result<Option<Event>, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Draw and dispatch until a quit action; I/O errors are returned to the
/// caller, which owns terminal restoration
fn run_loop<B, F>(terminal: &mut Terminal<B>, runtime: &mut Runtime, mut next_event: F) -> Result<(), io::Error>
where
    B: Backend,
    F: FnMut() -> Result<Option<Event>, io::Error>,
{
    let mut area = Rect::default();

    // Main loop
    loop {
        // Process any follow-up actions queued by effects first
        let actions_processed = runtime.process_actions();

        // Render
        terminal.draw(|f| {
            area = f.area();
            runtime.update_viewport(area);

            // Build virtual tree from current state
            let element = runtime.build();

            // Render virtual tree to ratatui buffer
            let config = &runtime.state().system.config.display;
            let mut renderer = Renderer::new();
            renderer.render(element, area, f.buffer_mut(), config);
        })?;

        if actions_processed > 0 {
            continue;
        }

        // Poll for input events
        let Some(event) = next_event()? else {
            continue;
        };

        let action = match event {
            Event::Key(key) => key_to_action(key, runtime.state()),
            Event::Mouse(mouse) => mouse_to_action(mouse, runtime.state(), area),
            Event::Resize(width, height) => {
                tracing::debug!("LOOP: Resized to {}x{}", width, height);
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            let should_render = action.should_render();
            runtime.dispatch(action);

            if !should_render {
                tracing::debug!("ACTION: Quitting application");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    use crate::tui::testing::{test_state, RENDER_HEIGHT, RENDER_WIDTH};

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn scripted(events: Vec<Result<Option<Event>, io::Error>>) -> impl FnMut() -> Result<Option<Event>, io::Error> {
        let mut events: VecDeque<_> = events.into();
        move || events.pop_front().unwrap_or(Ok(Some(key_event(KeyCode::Char('q')))))
    }

    #[test]
    fn test_run_loop_dispatches_until_quit() {
        let mut terminal = Terminal::new(TestBackend::new(RENDER_WIDTH, RENDER_HEIGHT)).unwrap();
        let mut runtime = Runtime::new(test_state());

        let events = scripted(vec![Ok(None), Ok(Some(key_event(KeyCode::Char('3'))))]);
        run_loop(&mut terminal, &mut runtime, events).unwrap();

        assert_eq!(runtime.state().navigation.active_view, View::Profile);
    }

    #[test]
    fn test_run_loop_returns_event_errors_to_caller() {
        let mut terminal = Terminal::new(TestBackend::new(RENDER_WIDTH, RENDER_HEIGHT)).unwrap();
        let mut runtime = Runtime::new(test_state());

        let events = scripted(vec![
            Ok(Some(key_event(KeyCode::Char('2')))),
            Err(io::Error::other("input closed")),
        ]);
        let result = run_loop(&mut terminal, &mut runtime, events);

        assert_eq!(result.unwrap_err().to_string(), "input closed");
        assert_eq!(runtime.state().navigation.active_view, View::Calendar);
    }
}
