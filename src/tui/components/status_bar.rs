use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::DisplayConfig;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::types::View;

#[derive(Clone, Default)]
pub struct StatusBarProps {
    pub active_view: View,
    pub overlay_open: bool,
    pub message: Option<String>,
    pub is_error: bool,
}

/// StatusBar component - separator line plus either the current status
/// message or the key hints for what is on screen
pub struct StatusBar;

impl Component for StatusBar {
    type Props = StatusBarProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        Element::Widget(Box::new(StatusBarWidget { props: props.clone() }))
    }
}

/// Key hints for the active view
pub fn key_hints(view: View, overlay_open: bool) -> &'static str {
    if overlay_open {
        return "Esc/x close  s share  q quit";
    }
    match view {
        View::Feed => "↑↓ focus  Enter react  Tab next view  q quit",
        View::Calendar => "←→↑↓ move  Enter open day  Tab next view  q quit",
        View::Profile => "↑↓ scroll  Tab next view  q quit",
        View::LoggedOut => "Enter sign in  q quit",
    }
}

#[derive(Clone)]
struct StatusBarWidget {
    props: StatusBarProps,
}

impl ElementWidget for StatusBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let separator = Line::styled(
            config.box_chars.horizontal.repeat(area.width as usize),
            Style::default().fg(config.muted_fg),
        );

        let content = match &self.props.message {
            Some(message) if self.props.is_error => Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("ERROR: {}", message), Style::default().fg(config.error_fg)),
            ]),
            Some(message) => Line::from(vec![Span::raw(" "), Span::raw(message.clone())]),
            None => Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    key_hints(self.props.active_view, self.props.overlay_open),
                    Style::default().fg(config.muted_fg),
                ),
            ]),
        };

        Paragraph::new(vec![separator, content]).render(area, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, render_element};

    fn render(props: StatusBarProps) -> Buffer {
        render_element(StatusBar.view(&props, &()), 20, 2)
    }

    #[test]
    fn test_status_bar_shows_error() {
        let buf = render(StatusBarProps {
            message: Some("Unknown view".to_string()),
            is_error: true,
            ..Default::default()
        });

        assert_buffer(&buf, &["────────────────────", " ERROR: Unknown view"]);
    }

    #[test]
    fn test_status_bar_shows_plain_message() {
        let buf = render(StatusBarProps {
            message: Some("Saved".to_string()),
            ..Default::default()
        });

        assert_buffer(&buf, &["────────────────────", " Saved"]);
    }

    #[test]
    fn test_status_bar_falls_back_to_hints() {
        let buf = render_element(
            StatusBar.view(
                &StatusBarProps {
                    active_view: View::LoggedOut,
                    ..Default::default()
                },
                &(),
            ),
            40,
            2,
        );

        assert_buffer(&buf, &["────────────────────────────────────────", " Enter sign in  q quit"]);
    }

    #[test]
    fn test_overlay_hints_take_priority() {
        assert_eq!(key_hints(View::Calendar, true), "Esc/x close  s share  q quit");
        assert!(key_hints(View::Calendar, false).contains("open day"));
    }
}
