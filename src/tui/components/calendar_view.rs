use std::sync::Arc;

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
};

use crate::calendar::{ArtRef, CalendarDay, CalendarMonth, FIXED_ART_SET};
use crate::config::DisplayConfig;
use crate::layout_constants::{
    CALENDAR_CELL_HEIGHT, CALENDAR_CELL_WIDTH, CALENDAR_HEADER_LINES, CALENDAR_LEFT_MARGIN,
};
use crate::tui::component::{Component, Element, ElementWidget};

const DAYS_PER_WEEK: u32 = 7;
const WEEKDAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
const ART_GLYPHS_UNICODE: [&str; 4] = ["◆", "●", "■", "▲"];
const ART_GLYPHS_ASCII: [&str; 4] = ["#", "@", "%", "&"];

#[derive(Clone)]
pub struct CalendarViewProps {
    pub month: Arc<CalendarMonth>,
    pub cursor_day: u32,
    /// Day currently shown in the overlay, highlighted in the grid
    pub selected_day: Option<u32>,
}

/// "Memories" month grid
pub struct CalendarView;

impl Component for CalendarView {
    type Props = CalendarViewProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        Element::Widget(Box::new(CalendarWidget { props: props.clone() }))
    }
}

/// Screen rectangle of a day cell, or None when the day is out of range
/// or its cell does not fit inside `content`
pub fn cell_rect(content: Rect, month: &CalendarMonth, day: u32) -> Option<Rect> {
    if day == 0 || day > month.len() {
        return None;
    }

    let index = month.first_weekday() + day - 1;
    let column = (index % DAYS_PER_WEEK) as u16;
    let row = (index / DAYS_PER_WEEK) as u16;

    let x = content.x + CALENDAR_LEFT_MARGIN + column * CALENDAR_CELL_WIDTH;
    let y = content.y + CALENDAR_HEADER_LINES + row * CALENDAR_CELL_HEIGHT;
    // Last column of each cell is the gap between days
    let rect = Rect::new(x, y, CALENDAR_CELL_WIDTH - 1, CALENDAR_CELL_HEIGHT);

    if rect.right() > content.right() || rect.bottom() > content.bottom() {
        return None;
    }
    Some(rect)
}

/// Day whose cell contains the given screen position
pub fn day_at(content: Rect, month: &CalendarMonth, column: u16, row: u16) -> Option<u32> {
    let position = Position::new(column, row);
    (1..=month.len()).find(|&day| cell_rect(content, month, day).is_some_and(|rect| rect.contains(position)))
}

/// Lines needed to show the whole month
pub fn calendar_height(month: &CalendarMonth) -> u16 {
    let slots = month.first_weekday() + month.len();
    let weeks = slots.div_ceil(DAYS_PER_WEEK) as u16;
    CALENDAR_HEADER_LINES + weeks * CALENDAR_CELL_HEIGHT
}

/// Glyph standing in for a day's artwork
pub fn art_glyph(art: ArtRef, use_unicode: bool) -> &'static str {
    let index = FIXED_ART_SET.iter().position(|a| *a == art).unwrap_or(0);
    if use_unicode {
        ART_GLYPHS_UNICODE[index]
    } else {
        ART_GLYPHS_ASCII[index]
    }
}

#[derive(Clone)]
struct CalendarWidget {
    props: CalendarViewProps,
}

impl CalendarWidget {
    fn render_header(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let x = area.x + CALENDAR_LEFT_MARGIN;
        let width = area.width.saturating_sub(CALENDAR_LEFT_MARGIN) as usize;

        let rows = [
            ("Memories".to_string(), Style::default().add_modifier(Modifier::BOLD)),
            (self.props.month.label(), Style::default().fg(config.accent_fg)),
        ];
        for (i, (text, style)) in rows.iter().enumerate() {
            if (i as u16) < area.height {
                buf.set_stringn(x, area.y + i as u16, text, width, *style);
            }
        }

        let weekday_row = area.y + CALENDAR_HEADER_LINES - 1;
        if weekday_row >= area.bottom() {
            return;
        }
        let muted = Style::default().fg(config.muted_fg);
        for (column, initial) in WEEKDAY_INITIALS.iter().enumerate() {
            // Centered over the 5-wide cell
            let cell_x = x + column as u16 * CALENDAR_CELL_WIDTH + (CALENDAR_CELL_WIDTH - 1) / 2;
            if cell_x < area.right() {
                buf.set_string(cell_x, weekday_row, initial, muted);
            }
        }
    }

    fn render_day(&self, day: &CalendarDay, rect: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let width = rect.width as usize;
        let number = format!("{:^width$}", day.day);

        let (marker, mut number_style, mut marker_style) = match day.art {
            Some(art) => (
                art_glyph(art, config.use_unicode).repeat(3),
                Style::default().add_modifier(Modifier::BOLD),
                Style::default().fg(config.accent_fg),
            ),
            None => (
                config.box_chars.dashed_horizontal.repeat(3),
                Style::default().fg(config.muted_fg),
                Style::default().fg(config.muted_fg),
            ),
        };

        if self.props.selected_day == Some(day.day) {
            number_style = number_style.fg(config.selection_fg).add_modifier(Modifier::BOLD);
            marker_style = marker_style.fg(config.selection_fg);
        }
        if self.props.cursor_day == day.day {
            number_style = number_style.add_modifier(Modifier::REVERSED);
            marker_style = marker_style.add_modifier(Modifier::REVERSED);
        }

        buf.set_stringn(rect.x, rect.y, &number, width, number_style);
        buf.set_stringn(rect.x, rect.y + 1, format!("{:^width$}", marker), width, marker_style);
    }
}

impl ElementWidget for CalendarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        self.render_header(area, buf, config);

        for day in &self.props.month.days {
            if let Some(rect) = cell_rect(area, &self.props.month, day.day) {
                self.render_day(day, rect, buf, config);
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(calendar_height(&self.props.month))
    }
}
