use ratatui::layout::Rect;

use crate::layout_constants::{SIDEBAR_WIDTH, STATUS_BAR_HEIGHT};
use crate::tui::component::{horizontal, vertical, Component, Constraint, ContainerLayout, Element};
use crate::tui::renderer::Renderer;
use crate::tui::state::AppState;
use crate::tui::types::View;

use super::{
    calendar_view::CalendarViewProps, day_overlay::DayOverlayProps, feed_view::feed_height,
    feed_view::FeedViewProps, profile_view::profile_height, profile_view::ProfileViewProps,
    sidebar::SidebarProps, status_bar::StatusBarProps, CalendarView, DayOverlay, FeedView,
    LoggedOutView, ProfileView, Sidebar, StatusBar,
};

/// Screen regions of the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub sidebar: Rect,
    pub content: Rect,
    pub status: Rect,
}

const MAIN_CONSTRAINTS: [Constraint; 2] = [
    Constraint::Min(0),                     // Sidebar + content
    Constraint::Length(STATUS_BAR_HEIGHT), // StatusBar (2 lines: separator + content)
];

const BODY_CONSTRAINTS: [Constraint; 2] = [Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)];

/// Split the terminal the same way [`App`] does, for hit-testing
pub fn app_layout(area: Rect) -> AppLayout {
    let rows = Renderer::calculate_layout(&ContainerLayout::Vertical(MAIN_CONSTRAINTS.to_vec()), area);
    let columns = Renderer::calculate_layout(&ContainerLayout::Horizontal(BODY_CONSTRAINTS.to_vec()), rows[0]);

    AppLayout {
        sidebar: columns[0],
        content: columns[1],
        status: rows[1],
    }
}

/// Lines the active view can scroll through; zero for fixed views
pub fn scrollable_height(state: &AppState) -> u16 {
    match state.navigation.active_view {
        View::Feed => feed_height(),
        View::Profile => profile_height(),
        View::Calendar | View::LoggedOut => 0,
    }
}

/// Root App component
///
/// This is the top-level component that renders the entire application.
/// It uses the global AppState as props and delegates rendering to child components.
pub struct App;

impl Component for App {
    type Props = AppState;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        tracing::trace!(
            "APP: App.view() called with view={:?} overlay_open={}",
            props.navigation.active_view,
            props.navigation.overlay_open()
        );

        let base = vertical(
            MAIN_CONSTRAINTS,
            vec![
                horizontal(
                    BODY_CONSTRAINTS,
                    vec![
                        Sidebar.view(
                            &SidebarProps {
                                active_view: props.navigation.active_view,
                            },
                            &(),
                        ),
                        self.render_content(props),
                    ],
                ),
                self.render_status_bar(props),
            ],
        );

        match props.navigation.selected_day {
            Some(day) => Element::Overlay {
                base: Box::new(base),
                overlay: Box::new(DayOverlay.view(
                    &DayOverlayProps {
                        day,
                        month_label: props.data.calendar.label(),
                    },
                    &(),
                )),
            },
            None => base,
        }
    }
}

impl App {
    /// Render the active view
    fn render_content(&self, state: &AppState) -> Element {
        let scroll_offset = state.ui.viewport.scroll_offset;

        match state.navigation.active_view {
            View::Feed => FeedView.view(
                &FeedViewProps {
                    focused_post: state.ui.feed.focused_post,
                    reacting: state.ui.feed.reacting.clone(),
                    scroll_offset,
                },
                &(),
            ),
            View::Calendar => CalendarView.view(
                &CalendarViewProps {
                    month: state.data.calendar.clone(),
                    cursor_day: state.ui.calendar.cursor_day,
                    selected_day: state.navigation.selected_day.map(|d| d.day),
                },
                &(),
            ),
            View::Profile => ProfileView.view(&ProfileViewProps { scroll_offset }, &()),
            View::LoggedOut => LoggedOutView.view(&(), &()),
        }
    }

    fn render_status_bar(&self, state: &AppState) -> Element {
        StatusBar.view(
            &StatusBarProps {
                active_view: state.navigation.active_view,
                overlay_open: state.navigation.overlay_open(),
                message: state.system.status_message.clone(),
                is_error: state.system.status_is_error,
            },
            &(),
        )
    }
}
