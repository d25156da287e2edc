/// Text-line card borders shared by the feed and profile views
///
/// Cards are built as lines so they scroll with the rest of a view.
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

pub fn card_top(width: u16, config: &DisplayConfig, style: Style) -> Line<'static> {
    let chars = &config.box_chars;
    let inner = width.saturating_sub(2) as usize;
    Line::styled(
        format!("{}{}{}", chars.top_left, chars.horizontal.repeat(inner), chars.top_right),
        style,
    )
}

pub fn card_bottom(width: u16, config: &DisplayConfig, style: Style) -> Line<'static> {
    let chars = &config.box_chars;
    let inner = width.saturating_sub(2) as usize;
    Line::styled(
        format!("{}{}{}", chars.bottom_left, chars.horizontal.repeat(inner), chars.bottom_right),
        style,
    )
}

/// A bordered row; content is padded with spaces to the inner width
pub fn card_row(
    content: Vec<Span<'static>>,
    width: u16,
    config: &DisplayConfig,
    border_style: Style,
) -> Line<'static> {
    let vertical = config.box_chars.vertical.clone();
    let inner = width.saturating_sub(4) as usize;
    let used: usize = content.iter().map(|span| span.content.width()).sum();

    let mut spans = Vec::with_capacity(content.len() + 4);
    spans.push(Span::styled(vertical.clone(), border_style));
    spans.push(Span::raw(" "));
    spans.extend(content);
    spans.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(vertical, border_style));
    Line::from(spans)
}
