use tracing::debug;

use super::action::Action;
use super::component::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_calendar, reduce_feed, reduce_navigation, reduce_overlay};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// No I/O happens here; side effects are returned as `Effect` for the
/// runtime to execute.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // View navigation
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Selected-day overlay
    let state = match reduce_overlay(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::CalendarAction(calendar_action) => reduce_calendar(state, calendar_action),
        Action::FeedAction(feed_action) => reduce_feed(state, feed_action),

        Action::ScrollBy(delta) => {
            let mut new_state = state;
            let viewport = &mut new_state.ui.viewport;
            let target = (viewport.scroll_offset as i32 + delta as i32)
                .clamp(0, viewport.max_scroll as i32);
            viewport.scroll_offset = target as u16;
            (new_state, Effect::None)
        }

        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Quit => (state, Effect::None),

        other => {
            debug!("REDUCER: Unhandled action {:?}", other);
            (state, Effect::None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarDay;
    use crate::tui::action::{CalendarAction, FeedAction};
    use crate::tui::types::View;

    #[test]
    fn test_navigation_actions_are_handled() {
        let (new_state, effect) = reduce(AppState::default(), Action::Navigate(View::Calendar));

        assert_eq!(new_state.navigation.active_view, View::Calendar);
        assert_eq!(effect, Effect::ScrollToTop);
    }

    #[test]
    fn test_overlay_actions_are_handled() {
        let day = CalendarDay::with_record(12);
        let (state, _) = reduce(AppState::default(), Action::SelectDay(day));
        assert_eq!(state.navigation.selected_day, Some(day));

        let (state, _) = reduce(state, Action::DismissDay);
        assert!(state.navigation.selected_day.is_none());
    }

    #[test]
    fn test_profile_then_calendar_ends_on_calendar() {
        let state = AppState::default();
        assert_eq!(state.navigation.active_view, View::Feed);

        let (state, _) = reduce(state, Action::Navigate(View::Profile));
        let (state, _) = reduce(state, Action::Navigate(View::Calendar));

        assert_eq!(state.navigation.active_view, View::Calendar);
    }

    #[test]
    fn test_feed_and_calendar_actions_are_delegated() {
        let (state, _) = reduce(AppState::default(), Action::FeedAction(FeedAction::FocusNext));
        assert_eq!(state.ui.feed.focused_post, 1);

        // No generated days: cursor stays put
        let (state, _) = reduce(state, Action::CalendarAction(CalendarAction::MoveCursor(1)));
        assert_eq!(state.ui.calendar.cursor_day, 1);
    }

    #[test]
    fn test_scroll_by_clamps_to_viewport() {
        let mut state = AppState::default();
        state.ui.viewport.max_scroll = 5;

        let (state, _) = reduce(state, Action::ScrollBy(3));
        assert_eq!(state.ui.viewport.scroll_offset, 3);

        let (state, _) = reduce(state, Action::ScrollBy(10));
        assert_eq!(state.ui.viewport.scroll_offset, 5);

        let (state, _) = reduce(state, Action::ScrollBy(-20));
        assert_eq!(state.ui.viewport.scroll_offset, 0);
    }

    #[test]
    fn test_set_status_message_with_error() {
        let action = Action::SetStatusMessage {
            message: "Sharing is not available".to_string(),
            is_error: true,
        };

        let (new_state, effect) = reduce(AppState::default(), action);

        assert_eq!(
            new_state.system.status_message.as_deref(),
            Some("Sharing is not available")
        );
        assert!(new_state.system.status_is_error);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_quit_action_does_nothing_to_state() {
        let (new_state, effect) = reduce(AppState::default(), Action::Quit);

        assert_eq!(new_state.navigation.active_view, View::Feed);
        assert_eq!(effect, Effect::None);
    }
}
