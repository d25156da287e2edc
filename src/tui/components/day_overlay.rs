use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::calendar::CalendarDay;
use crate::config::DisplayConfig;
use crate::fixtures::DAY_DETAIL;
use crate::formatting::center_offset;
use crate::layout_constants::{OVERLAY_HEIGHT, OVERLAY_WIDTH};
use crate::tui::component::{Component, Element, ElementWidget};

use super::calendar_view::art_glyph;
use super::card::{card_bottom, card_row, card_top};

const CLOSE_LABEL: &str = "[x]";

#[derive(Clone)]
pub struct DayOverlayProps {
    pub day: CalendarDay,
    pub month_label: String,
}

/// Day-detail panel drawn over a dimmed backdrop
pub struct DayOverlay;

impl Component for DayOverlay {
    type Props = DayOverlayProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        Element::Widget(Box::new(DayOverlayWidget { props: props.clone() }))
    }
}

/// Where the overlay panel and its close button land inside `area`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    pub panel: Rect,
    pub close_button: Rect,
}

pub fn overlay_layout(area: Rect) -> OverlayLayout {
    let width = OVERLAY_WIDTH.min(area.width.saturating_sub(2));
    let height = OVERLAY_HEIGHT.min(area.height.saturating_sub(2));
    let panel = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    // Right-aligned on the first content row, inside border and padding
    let close_width = CLOSE_LABEL.len() as u16;
    let close_button = Rect::new(
        panel.right().saturating_sub(2 + close_width).max(panel.x),
        panel.y + 1u16.min(panel.height),
        close_width.min(panel.width),
        1u16.min(panel.height),
    );

    OverlayLayout { panel, close_button }
}

#[derive(Clone)]
struct DayOverlayWidget {
    props: DayOverlayProps,
}

impl DayOverlayWidget {
    fn lines(&self, width: u16, config: &DisplayConfig) -> Vec<Line<'static>> {
        let border = Style::default().fg(config.selection_fg);
        let muted = Style::default().fg(config.muted_fg);
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let inner = width.saturating_sub(4);
        let row = |spans: Vec<Span<'static>>| card_row(spans, width, config, border);
        let centered = |text: String, style: Style| {
            vec![
                Span::raw(" ".repeat(center_offset(&text, inner) as usize)),
                Span::styled(text, style),
            ]
        };

        let month_label = self.props.month_label.to_uppercase();
        let gap = (inner as usize).saturating_sub(month_label.width() + CLOSE_LABEL.len());
        let header = vec![
            Span::styled(month_label, Style::default().fg(config.accent_fg).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(gap)),
            Span::styled(CLOSE_LABEL, muted),
        ];

        let (glyphs, art_label) = match self.props.day.art {
            Some(art) => (
                art_glyph(art, config.use_unicode).repeat(inner.saturating_sub(2) as usize),
                format!("▶ {}", art.short_label()),
            ),
            None => (String::new(), String::new()),
        };
        let art_style = Style::default().fg(config.accent_fg);

        vec![
            card_top(width, config, border),
            row(header),
            row(vec![Span::styled(format!("Day {}", self.props.day.day), bold)]),
            row(Vec::new()),
            row(vec![Span::styled(glyphs.clone(), art_style)]),
            row(vec![Span::styled(glyphs.clone(), art_style)]),
            row(centered(art_label, muted)),
            row(vec![Span::styled(glyphs.clone(), art_style)]),
            row(vec![Span::styled(glyphs, art_style)]),
            row(Vec::new()),
            row(centered(DAY_DETAIL.headline.to_string(), bold)),
            row(centered(DAY_DETAIL.summary(&config.box_chars.bullet), muted)),
            row(Vec::new()),
            row(centered(
                format!("[ {} ]", DAY_DETAIL.action_label),
                Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD),
            )),
            card_bottom(width, config, border),
        ]
    }
}

impl ElementWidget for DayOverlayWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        // Backdrop
        buf.set_style(area, Style::default().fg(config.muted_fg).add_modifier(Modifier::DIM));

        let layout = overlay_layout(area);
        Clear.render(layout.panel, buf);
        Paragraph::new(self.lines(layout.panel.width, config)).render(layout.panel, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
