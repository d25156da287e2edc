use tracing::trace;

use crate::tui::action::CalendarAction;
use crate::tui::component::Effect;
use crate::tui::state::AppState;

/// Days per calendar row, used for vertical cursor moves
pub const DAYS_PER_WEEK: i32 = 7;

pub fn reduce_calendar(state: AppState, action: CalendarAction) -> (AppState, Effect) {
    match action {
        CalendarAction::MoveCursor(delta) => move_cursor(state, delta),
    }
}

fn move_cursor(state: AppState, delta: i32) -> (AppState, Effect) {
    let len = state.data.calendar.len() as i32;
    if len == 0 {
        return (state, Effect::None);
    }

    let mut new_state = state;
    let current = new_state.ui.calendar.cursor_day as i32;
    let target = (current + delta).clamp(1, len);
    trace!("CALENDAR: cursor {} -> {}", current, target);
    new_state.ui.calendar.cursor_day = target as u32;
    (new_state, Effect::None)
}
