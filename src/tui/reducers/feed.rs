use tracing::debug;

use crate::fixtures::POSTS;
use crate::tui::action::FeedAction;
use crate::tui::component::Effect;
use crate::tui::state::AppState;

pub fn reduce_feed(state: AppState, action: FeedAction) -> (AppState, Effect) {
    let mut new_state = state;
    let feed = &mut new_state.ui.feed;

    match action {
        FeedAction::FocusNext => {
            feed.focused_post = (feed.focused_post + 1).min(POSTS.len().saturating_sub(1));
        }
        FeedAction::FocusPrevious => {
            feed.focused_post = feed.focused_post.saturating_sub(1);
        }
        FeedAction::ToggleReactions(index) => {
            if index >= POSTS.len() {
                debug!("FEED: No post at index {}, ignoring reaction toggle", index);
            } else if !feed.reacting.remove(&index) {
                debug!("FEED: Opening reaction picker for {}", POSTS[index].id);
                feed.reacting.insert(index);
            }
        }
    }

    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_moves_within_posts() {
        let (state, _) = reduce_feed(AppState::default(), FeedAction::FocusNext);
        assert_eq!(state.ui.feed.focused_post, 1);

        let (state, _) = reduce_feed(state, FeedAction::FocusNext);
        let (state, _) = reduce_feed(state, FeedAction::FocusNext);
        assert_eq!(state.ui.feed.focused_post, POSTS.len() - 1);

        let (state, _) = reduce_feed(state, FeedAction::FocusPrevious);
        assert_eq!(state.ui.feed.focused_post, POSTS.len() - 2);
    }

    #[test]
    fn test_focus_previous_stops_at_first() {
        let (state, _) = reduce_feed(AppState::default(), FeedAction::FocusPrevious);
        assert_eq!(state.ui.feed.focused_post, 0);
    }

    #[test]
    fn test_toggle_reactions_only_affects_target_post() {
        let (state, _) = reduce_feed(AppState::default(), FeedAction::ToggleReactions(1));
        assert!(state.ui.feed.is_reacting(1));
        assert!(!state.ui.feed.is_reacting(0));
        assert!(!state.ui.feed.is_reacting(2));

        let (state, _) = reduce_feed(state, FeedAction::ToggleReactions(1));
        assert!(!state.ui.feed.is_reacting(1));
    }

    #[test]
    fn test_toggle_reactions_does_not_touch_reaction_data() {
        let before = POSTS[0].reactions.len();
        let _ = reduce_feed(AppState::default(), FeedAction::ToggleReactions(0));
        assert_eq!(POSTS[0].reactions.len(), before);
    }

    #[test]
    fn test_toggle_reactions_out_of_range() {
        let (state, _) = reduce_feed(AppState::default(), FeedAction::ToggleReactions(99));
        assert!(state.ui.feed.reacting.is_empty());
    }
}
