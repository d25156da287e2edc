use tracing::debug;

use crate::calendar::CalendarDay;
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;

/// Handle the selected-day overlay
pub fn reduce_overlay(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SelectDay(day) => Ok(select_day(state, *day)),
        Action::DismissDay => Ok(dismiss_day(state)),
        Action::ShareDay => Ok(share_day(state)),
        _ => Err(state),
    }
}

fn select_day(state: AppState, day: CalendarDay) -> (AppState, Effect) {
    if !day.has_record() {
        debug!("OVERLAY: Day {} has no record, ignoring selection", day.day);
        return (state, Effect::None);
    }

    debug!("OVERLAY: Opening day {}", day.day);
    let mut new_state = state;
    new_state.navigation.selected_day = Some(day);
    (new_state, Effect::None)
}

fn dismiss_day(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    if let Some(day) = new_state.navigation.selected_day.take() {
        debug!("OVERLAY: Dismissed day {}", day.day);
    }
    (new_state, Effect::None)
}

fn share_day(state: AppState) -> (AppState, Effect) {
    let Some(day) = state.navigation.selected_day else {
        return (state, Effect::None);
    };

    debug!("OVERLAY: Share requested for day {}", day.day);
    let effect = Effect::Action(Action::SetStatusMessage {
        message: format!("Sharing day {} is not connected in this build", day.day),
        is_error: false,
    });
    (state, effect)
}
