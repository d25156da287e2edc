use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::layout_constants::{SIDEBAR_FIRST_ITEM_ROW, SIDEBAR_ITEM_SPACING};
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::types::View;
use crate::types::APP_NAME;

pub struct SidebarProps {
    pub active_view: View,
}

/// Navigation sidebar: logo, one entry per primary view, Log Out at the bottom
pub struct Sidebar;

impl Component for Sidebar {
    type Props = SidebarProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        Element::Widget(Box::new(SidebarWidget {
            active_view: props.active_view,
        }))
    }
}

/// Clickable row of every sidebar entry that fits in `area`
///
/// Used both to draw the entries and to map mouse clicks back to views.
pub fn sidebar_items(area: Rect) -> Vec<(View, Rect)> {
    // Right column holds the border
    let width = area.width.saturating_sub(1);
    let mut items = Vec::with_capacity(4);

    for (i, view) in View::NAV.iter().enumerate() {
        let y = area.y + SIDEBAR_FIRST_ITEM_ROW + i as u16 * SIDEBAR_ITEM_SPACING;
        if y < area.bottom() {
            items.push((*view, Rect::new(area.x, y, width, 1)));
        }
    }

    // Log Out sits one row above the bottom edge, below the last nav item
    let last_nav_row = area.y + SIDEBAR_FIRST_ITEM_ROW + (View::NAV.len() as u16 - 1) * SIDEBAR_ITEM_SPACING;
    if area.height >= 2 {
        let y = area.bottom() - 2;
        if y > last_nav_row {
            items.push((View::LoggedOut, Rect::new(area.x, y, width, 1)));
        }
    }

    items
}

#[derive(Clone)]
struct SidebarWidget {
    active_view: View,
}

impl ElementWidget for SidebarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 2 || area.height == 0 {
            return;
        }

        let logo_style = Style::default().fg(config.accent_fg).add_modifier(Modifier::BOLD);
        buf.set_stringn(area.x + 1, area.y, APP_NAME, area.width as usize - 2, logo_style);

        for (view, rect) in sidebar_items(area) {
            let active = view == self.active_view;
            let (prefix, style) = if active {
                (
                    config.box_chars.selector.as_str(),
                    Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(config.muted_fg))
            };
            let text = format!("{} {}", prefix, view.label());
            buf.set_stringn(rect.x + 1, rect.y, &text, rect.width.saturating_sub(1) as usize, style);
        }

        let border_x = area.right() - 1;
        let border_style = Style::default().fg(config.muted_fg);
        for y in area.top()..area.bottom() {
            buf[(border_x, y)]
                .set_symbol(&config.box_chars.vertical)
                .set_style(border_style);
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{buffer_lines, render_element};

    #[test]
    fn test_sidebar_items_positions() {
        let items = sidebar_items(Rect::new(0, 0, 20, 20));

        assert_eq!(
            items.iter().map(|(view, _)| *view).collect::<Vec<_>>(),
            vec![View::Feed, View::Calendar, View::Profile, View::LoggedOut]
        );
        assert_eq!(items[0].1, Rect::new(0, 3, 19, 1));
        assert_eq!(items[1].1.y, 5);
        assert_eq!(items[2].1.y, 7);
        assert_eq!(items[3].1.y, 18);
    }

    #[test]
    fn test_sidebar_items_drop_log_out_when_short() {
        let items = sidebar_items(Rect::new(0, 0, 20, 9));
        assert!(items.iter().all(|(view, _)| *view != View::LoggedOut));
    }

    #[test]
    fn test_sidebar_marks_active_view() {
        let element = Sidebar.view(&SidebarProps { active_view: View::Calendar }, &());
        let buf = render_element(element, 20, 12);
        let lines = buffer_lines(&buf);

        assert!(lines[0].contains("Replay."));
        assert!(lines[3].starts_with("   Feed"));
        assert!(lines[5].starts_with(" ► Memories"));
        assert!(lines[7].contains("Profile"));
        assert!(lines[10].contains("Log Out"));
        assert!(lines.iter().all(|line| line.ends_with('│')));
    }
}
