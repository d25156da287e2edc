// Component library exports

pub mod app;
pub mod calendar_view;
pub mod card;
pub mod day_overlay;
pub mod feed_view;
pub mod logged_out_view;
pub mod profile_view;
pub mod sidebar;
pub mod status_bar;

pub use app::{app_layout, scrollable_height, App, AppLayout};
pub use calendar_view::{CalendarView, CalendarViewProps};
pub use day_overlay::{overlay_layout, DayOverlay, DayOverlayProps, OverlayLayout};
pub use feed_view::{FeedView, FeedViewProps};
pub use logged_out_view::LoggedOutView;
pub use profile_view::{ProfileView, ProfileViewProps};
pub use sidebar::{sidebar_items, Sidebar, SidebarProps};
pub use status_bar::{StatusBar, StatusBarProps};
