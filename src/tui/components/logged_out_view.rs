use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::formatting::center_offset;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::types::APP_NAME;

/// Shown after Log Out; there is no session to end, only a way back in
pub struct LoggedOutView;

impl Component for LoggedOutView {
    type Props = ();
    type State = ();

    fn view(&self, _props: &Self::Props, _state: &Self::State) -> Element {
        Element::Widget(Box::new(LoggedOutWidget))
    }
}

#[derive(Clone)]
struct LoggedOutWidget;

impl ElementWidget for LoggedOutWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let rows = [
            (APP_NAME, Style::default().fg(config.accent_fg).add_modifier(Modifier::BOLD)),
            ("", Style::default()),
            ("You are logged out.", Style::default()),
            ("Press Enter to sign back in", Style::default().fg(config.muted_fg)),
        ];

        let top = area.y + area.height.saturating_sub(rows.len() as u16) / 2;
        for (i, (text, style)) in rows.iter().enumerate() {
            let y = top + i as u16;
            if y >= area.bottom() {
                break;
            }
            let x = area.x + center_offset(text, area.width);
            buf.set_stringn(x, y, text, area.width as usize, *style);
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
    fn test_logged_out_is_centered() {
        let buf = render_element(LoggedOutView.view(&(), &()), 40, 8);
        let lines = buffer_lines(&buf);

        assert_eq!(lines[2].trim(), "Replay.");
        assert!(lines[2].starts_with("                Replay."));
        assert_eq!(lines[4].trim(), "You are logged out.");
        assert_eq!(lines[5].trim(), "Press Enter to sign back in");
    }
}
