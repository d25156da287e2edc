use tracing::{debug, trace, warn};

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;
use crate::tui::types::View;

/// Handle all view-navigation actions
///
/// Returns Err(state) for actions this reducer does not own.
pub fn reduce_navigation(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Navigate(view) => Ok(navigate(state, *view)),
        Action::NavigateRoute(route) => Ok(navigate_route(state, route)),
        Action::NavigateNext => {
            let target = state.navigation.active_view.next();
            Ok(navigate(state, target))
        }
        Action::NavigatePrevious => {
            let target = state.navigation.active_view.previous();
            Ok(navigate(state, target))
        }
        _ => Err(state),
    }
}

/// Every target is valid; the overlay is left as is
fn navigate(state: AppState, view: View) -> (AppState, Effect) {
    trace!("Navigating to view: {:?}", view);
    let mut new_state = state;
    if new_state.navigation.active_view != view {
        debug!(
            "NAV: {:?} -> {:?}",
            new_state.navigation.active_view, view
        );
    }
    new_state.navigation.active_view = view;
    new_state.system.reset_status_message();
    (new_state, Effect::ScrollToTop)
}

fn navigate_route(state: AppState, route: &str) -> (AppState, Effect) {
    match View::from_route(route) {
        Some(view) => navigate(state, view),
        None => {
            warn!("NAV: Unknown route '{}', keeping {:?}", route, state.navigation.active_view);
            let mut new_state = state;
            new_state
                .system
                .set_status_error_message(format!("Unknown view: {}", route));
            (new_state, Effect::None)
        }
    }
}
