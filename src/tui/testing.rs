//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules:
//! a deterministic application state and buffer assertions.
//!
//! # Usage
//!
//! ```rust
//! #[cfg(test)]
//! mod tests {
//!     use crate::tui::testing::*;
//!
//!     #[test]
//!     fn test_example() {
//!         let state = test_state();
//!         // Every third day of November 2025 is empty...
//!     }
//! }
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::calendar::{CalendarGenerator, CalendarMonth};
use crate::config::Config;
use crate::tui::component::Element;
use crate::tui::renderer::Renderer;
use crate::tui::state::AppState;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Constant for general rendering height
pub const RENDER_HEIGHT: u16 = 30;

/// November 2025: starts on a Saturday, every third day has no record
pub fn test_month() -> CalendarMonth {
    CalendarGenerator::default()
        .generate_with(2025, 10, |day| if day % 3 == 0 { 0.1 } else { 0.9 })
        .expect("November 2025 is a valid month")
}

/// Application state over [`test_month`] with the default config
pub fn test_state() -> AppState {
    AppState::new(Config::default(), test_month())
}

/// Full-screen area used by layout and hit-test tests
pub fn test_area() -> Rect {
    Rect::new(0, 0, RENDER_WIDTH, RENDER_HEIGHT)
}

/// Render an element into a fresh buffer of the given size
pub fn render_element(element: Element, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    Renderer::new().render(element, area, &mut buf, &Config::default().display);
    buf
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// True when any line of the buffer contains `needle`
pub fn buffer_contains(buf: &Buffer, needle: &str) -> bool {
    buffer_lines(buf).iter().any(|line| line.contains(needle))
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_is_deterministic() {
        let month = test_month();
        assert_eq!(month.len(), 30);
        assert_eq!(month.first_weekday(), 6);
        assert!(month.day(1).is_some_and(|d| d.has_record()));
        assert!(month.day(3).is_some_and(|d| !d.has_record()));
        assert_eq!(month.record_count(), 20);
    }

    #[test]
    fn test_buffer_lines_and_contains() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        buf.set_string(0, 1, "ab", ratatui::style::Style::default());

        assert_eq!(buffer_lines(&buf), vec!["    ", "ab  "]);
        assert!(buffer_contains(&buf, "ab"));
        assert_buffer(&buf, &["", "ab"]);
    }
}
