//! Shared layout constants used across CLI and TUI components.
//!
//! Rendering and mouse hit-testing both read these, so a click lands on
//! exactly the cell or button that was drawn there.

/// Width of the navigation sidebar
pub const SIDEBAR_WIDTH: u16 = 20;

/// First sidebar row holding a navigation item
pub const SIDEBAR_FIRST_ITEM_ROW: u16 = 3;

/// Rows between consecutive sidebar items
pub const SIDEBAR_ITEM_SPACING: u16 = 2;

/// Height of the status bar (separator + message)
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Width of one calendar day cell
pub const CALENDAR_CELL_WIDTH: u16 = 6;

/// Height of one calendar day cell (number line + art line)
pub const CALENDAR_CELL_HEIGHT: u16 = 2;

/// Lines above the grid: title, month label, blank, weekday header
pub const CALENDAR_HEADER_LINES: u16 = 4;

/// Left margin of the calendar grid inside the content area
pub const CALENDAR_LEFT_MARGIN: u16 = 2;

/// Preferred size of the day-detail overlay panel
pub const OVERLAY_WIDTH: u16 = 40;
pub const OVERLAY_HEIGHT: u16 = 15;

/// Lines taken by one post card in the feed
pub const POST_CARD_LINES: u16 = 9;

/// Width of post and profile cards
pub const CARD_WIDTH: u16 = 46;

// CLI-specific formatting constants

/// Width of a CLI calendar cell (e.g. " 8* ")
pub const CLI_CALENDAR_CELL_WIDTH: usize = 5;
