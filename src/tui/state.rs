use std::collections::HashSet;
use std::sync::Arc;

use crate::calendar::{CalendarDay, CalendarMonth};
use crate::config::Config;

use super::types::View;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Which view is visible and whether the day overlay is open
    pub navigation: NavigationState,

    /// Generated and static data
    pub data: DataState,

    /// UI state per view
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

impl AppState {
    pub fn new(config: Config, calendar: CalendarMonth) -> Self {
        let mut state = Self::default();
        state.system.config = config;
        state.data.calendar = Arc::new(calendar);
        state
    }
}

/// Active view plus the orthogonal selected-day overlay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub active_view: View,
    /// Only ever holds a day with a record
    pub selected_day: Option<CalendarDay>,
}

impl NavigationState {
    pub fn overlay_open(&self) -> bool {
        self.selected_day.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    /// Generated once per session, read-only afterwards
    pub calendar: Arc<CalendarMonth>,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub feed: FeedUiState,
    pub calendar: CalendarUiState,
    pub viewport: ViewportState,
}

#[derive(Debug, Clone, Default)]
pub struct FeedUiState {
    /// Index into the post list
    pub focused_post: usize,
    /// Posts whose reaction picker is open
    pub reacting: HashSet<usize>,
}

impl FeedUiState {
    pub fn is_reacting(&self, post_index: usize) -> bool {
        self.reacting.contains(&post_index)
    }
}

#[derive(Debug, Clone)]
pub struct CalendarUiState {
    /// Day number under the keyboard cursor (1-based)
    pub cursor_day: u32,
}

impl Default for CalendarUiState {
    fn default() -> Self {
        Self { cursor_day: 1 }
    }
}

/// Scroll position of the content area, shared by all views
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportState {
    pub scroll_offset: u16,
    /// Largest useful offset for the active view (updated each frame)
    pub max_scroll: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    /// None = show the key hints for the active view
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarGenerator;

    #[test]
    fn test_default_state_starts_on_feed_without_overlay() {
        let state = AppState::default();
        assert_eq!(state.navigation.active_view, View::Feed);
        assert!(state.navigation.selected_day.is_none());
        assert!(!state.navigation.overlay_open());
    }

    #[test]
    fn test_new_stores_calendar() {
        let month = CalendarGenerator::default().generate_with(2024, 1, |_| 0.9).unwrap();
        let state = AppState::new(Config::default(), month);
        assert_eq!(state.data.calendar.len(), 29);
        assert_eq!(state.ui.calendar.cursor_day, 1);
    }

    #[test]
    fn test_set_status_error_then_normal_clears_flag() {
        let mut state = SystemState::default();

        state.set_status_error_message("Error".to_string());
        assert!(state.status_is_error);

        state.set_status_message("Normal".to_string());
        assert_eq!(state.status_message, Some("Normal".to_string()));
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_reset_status_message() {
        let mut state = SystemState::default();
        state.set_status_error_message("Error".to_string());

        state.reset_status_message();

        assert!(state.status_message.is_none());
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_feed_is_reacting() {
        let mut feed = FeedUiState::default();
        feed.reacting.insert(1);
        assert!(feed.is_reacting(1));
        assert!(!feed.is_reacting(0));
    }
}
