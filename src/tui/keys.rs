/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// It contains all the keyboard navigation logic for the TUI.
use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, trace};

use super::action::{Action, CalendarAction, FeedAction};
use super::reducers::calendar::DAYS_PER_WEEK;
use super::state::AppState;
use super::types::View;

/// Lines moved by PageUp/PageDown
const PAGE_SCROLL: i16 = 10;

/// Handle global keys that work regardless of view or overlay
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Handle direct view switching (1-3 and o for Log Out)
fn handle_view_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('1') => Some(Action::Navigate(View::Feed)),
        KeyCode::Char('2') => Some(Action::Navigate(View::Calendar)),
        KeyCode::Char('3') => Some(Action::Navigate(View::Profile)),
        KeyCode::Char('o') => Some(Action::Navigate(View::LoggedOut)),
        KeyCode::Tab => Some(Action::NavigateNext),
        KeyCode::BackTab => Some(Action::NavigatePrevious),
        _ => None,
    }
}

/// Keys handled by the open day overlay; grid keys never reach the calendar
fn handle_overlay_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Esc | KeyCode::Char('x') => {
            debug!("KEY: Dismissing day overlay");
            Some(Action::DismissDay)
        }
        KeyCode::Char('s') | KeyCode::Enter => Some(Action::ShareDay),
        _ => None,
    }
}

fn handle_feed_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    match key_code {
        KeyCode::Down | KeyCode::Char('j') => Some(Action::FeedAction(FeedAction::FocusNext)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::FeedAction(FeedAction::FocusPrevious)),
        KeyCode::Enter | KeyCode::Char('r') => Some(Action::FeedAction(FeedAction::ToggleReactions(
            state.ui.feed.focused_post,
        ))),
        KeyCode::PageDown => Some(Action::ScrollBy(PAGE_SCROLL)),
        KeyCode::PageUp => Some(Action::ScrollBy(-PAGE_SCROLL)),
        _ => None,
    }
}

fn handle_calendar_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    let move_cursor = |delta: i32| Some(Action::CalendarAction(CalendarAction::MoveCursor(delta)));

    match key_code {
        KeyCode::Left | KeyCode::Char('h') => move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => move_cursor(-DAYS_PER_WEEK),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(DAYS_PER_WEEK),
        KeyCode::Enter => {
            let day = state.data.calendar.day(state.ui.calendar.cursor_day).copied()?;
            if day.has_record() {
                Some(Action::SelectDay(day))
            } else {
                debug!("KEY: Day {} has no record, nothing to open", day.day);
                None
            }
        }
        _ => None,
    }
}

fn handle_profile_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollBy(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollBy(-1)),
        KeyCode::PageDown => Some(Action::ScrollBy(PAGE_SCROLL)),
        KeyCode::PageUp => Some(Action::ScrollBy(-PAGE_SCROLL)),
        _ => None,
    }
}

/// Convert a key event to an action based on current state
///
/// Order of precedence:
/// - Global keys (q)
/// - Day overlay keys when the overlay is open
/// - View switching keys (still live under the overlay)
/// - Keys of the active view, unless the overlay is open
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    let view = state.navigation.active_view;
    let overlay_open = state.navigation.overlay_open();

    trace!("KEY: {:?} (view={:?}, overlay_open={})", key.code, view, overlay_open);

    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }

    if overlay_open {
        if let Some(action) = handle_overlay_keys(key.code) {
            return Some(action);
        }
    }

    if let Some(action) = handle_view_keys(key.code) {
        return Some(action);
    }

    if overlay_open {
        return None;
    }

    match view {
        View::Feed => handle_feed_keys(key.code, state),
        View::Calendar => handle_calendar_keys(key.code, state),
        View::Profile => handle_profile_keys(key.code),
        View::LoggedOut => match key.code {
            KeyCode::Enter => Some(Action::Navigate(View::Feed)),
            _ => None,
        },
    }
}
