use crate::calendar::CalendarDay;

use super::types::View;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key and mouse events)
/// - Effects returned by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation actions
    Navigate(View),
    /// Navigate by route name; unknown names leave the view unchanged
    NavigateRoute(String),
    NavigateNext,
    NavigatePrevious,

    // Day overlay
    /// Open the overlay for a day; ignored unless the day has a record
    SelectDay(CalendarDay),
    DismissDay,
    /// Share the open day; queues a status message while sharing is offline
    ShareDay,

    // View-specific actions
    CalendarAction(CalendarAction),
    FeedAction(FeedAction),

    // Viewport
    ScrollBy(i16),

    // System actions
    Quit,
    SetStatusMessage { message: String, is_error: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    /// Move the cursor by a number of days, clamped to the month
    MoveCursor(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    FocusNext,
    FocusPrevious,
    /// Open or close the reaction picker of a post (UI only)
    ToggleReactions(usize),
}

impl Action {
    /// Returns true if this action should trigger a re-render
    pub fn should_render(&self) -> bool {
        !matches!(self, Self::Quit)
    }
}
