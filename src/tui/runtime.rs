use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::{app_layout, scrollable_height, App};
use super::reducer::reduce;
use super::state::AppState;

/// Component runtime - owns the state and processes actions
///
/// The Runtime is responsible for:
/// - Managing the application state
/// - Dispatching actions through the reducer
/// - Executing the side effects the reducer returns
/// - Building the virtual component tree
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for follow-up actions produced by effects
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl Runtime {
    /// Create a new runtime with initial state
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            action_tx,
            action_rx,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::ScrollToTop => {
                trace!("EFFECT: Resetting scroll offset");
                self.state.ui.viewport.scroll_offset = 0;
            }
            Effect::Action(action) => {
                trace!("EFFECT: Queueing follow-up action {:?}", action);
                if let Err(e) = self.action_tx.send(action) {
                    debug!("EFFECT: Action queue closed, dropping {:?}", e.0);
                }
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        if count > 0 {
            debug!("ACTION: Processed {} queued action(s)", count);
        }
        count
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        App.view(&self.state, &())
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Update the viewport for the current terminal size
    ///
    /// Called from the main render loop before each frame so scrolling stays
    /// bounded by the active view's content.
    pub fn update_viewport(&mut self, area: Rect) {
        let height = app_layout(area).content.height;
        let max_scroll = scrollable_height(&self.state).saturating_sub(height);

        let viewport = &mut self.state.ui.viewport;
        viewport.height = height;
        viewport.max_scroll = max_scroll;
        viewport.scroll_offset = viewport.scroll_offset.min(max_scroll);
    }
}
