use std::collections::HashSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::DisplayConfig;
use crate::fixtures::{POSTS, REACTION_PALETTE};
use crate::formatting::center_offset;
use crate::layout_constants::{CARD_WIDTH, POST_CARD_LINES};
use crate::tui::component::{Component, Element, ElementWidget};
use crate::types::Post;

use super::card::{card_bottom, card_row, card_top};

const FEED_HEADER_LINES: u16 = 3;
const FEED_FOOTER_LINES: u16 = 3;
const FOOTER_TEXT: &str = "ALL CAUGHT UP";

#[derive(Clone, Default)]
pub struct FeedViewProps {
    pub focused_post: usize,
    pub reacting: HashSet<usize>,
    pub scroll_offset: u16,
}

/// "Tonight" feed: one card per friend post, then the caught-up footer
pub struct FeedView;

impl Component for FeedView {
    type Props = FeedViewProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        Element::Widget(Box::new(FeedWidget { props: props.clone() }))
    }
}

/// Total lines of the feed, used to bound scrolling
pub fn feed_height() -> u16 {
    FEED_HEADER_LINES + POSTS.len() as u16 * POST_CARD_LINES + FEED_FOOTER_LINES
}

#[derive(Clone)]
struct FeedWidget {
    props: FeedViewProps,
}

impl FeedWidget {
    fn post_lines(&self, index: usize, post: &Post, width: u16, config: &DisplayConfig) -> Vec<Line<'static>> {
        let focused = index == self.props.focused_post;
        let border = if focused {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default().fg(config.muted_fg)
        };
        let muted = Style::default().fg(config.muted_fg);
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let mut header = Vec::new();
        if focused {
            header.push(Span::styled(format!("{} ", config.box_chars.selector), border));
        }
        header.push(Span::styled(format!("@{}", post.user.username), bold));
        header.push(Span::styled(format!(" {} {}", config.box_chars.bullet, post.timestamp), muted));

        let ring: Vec<Span<'static>> = if post.reactions.is_empty() {
            vec![Span::styled("no reactions yet", muted)]
        } else {
            post.visible_reactions()
                .iter()
                .map(|reaction| Span::raw(format!("{} ", reaction.emoji)))
                .collect()
        };
        let mut stats = vec![Span::styled(format!("{} plays   ", post.play_count), muted)];
        stats.extend(ring);

        let picker = if self.props.reacting.contains(&index) {
            let mut spans = vec![Span::styled("React: ", Style::default().fg(config.accent_fg))];
            spans.extend(REACTION_PALETTE.iter().map(|emoji| Span::raw(format!("{} ", emoji))));
            spans
        } else {
            Vec::new()
        };

        vec![
            card_top(width, config, border),
            card_row(header, width, config, border),
            card_row(
                vec![Span::styled(format!("♪ {}", post.song.art.short_label()), muted)],
                width,
                config,
                border,
            ),
            card_row(vec![Span::styled(post.song.name.to_string(), bold)], width, config, border),
            card_row(vec![Span::styled(post.song.artist.to_string(), muted)], width, config, border),
            card_row(stats, width, config, border),
            card_row(picker, width, config, border),
            card_bottom(width, config, border),
            Line::raw(""),
        ]
    }

    fn lines(&self, width: u16, config: &DisplayConfig) -> Vec<Line<'static>> {
        let card_width = CARD_WIDTH.min(width.saturating_sub(2));
        let mut lines = vec![
            Line::styled(" Tonight", Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(" Capture the vibe.", Style::default().fg(config.muted_fg)),
            Line::raw(""),
        ];

        for (index, post) in POSTS.iter().enumerate() {
            lines.extend(self.post_lines(index, post, card_width, config).into_iter().map(indent));
        }

        let offset = center_offset(FOOTER_TEXT, card_width + 1) as usize;
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("{}{}", " ".repeat(offset), FOOTER_TEXT),
            Style::default().fg(config.muted_fg).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(""));
        lines
    }
}

fn indent(line: Line<'static>) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    spans.extend(line.spans);
    Line::from(spans).style(line.style)
}

impl ElementWidget for FeedWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        Paragraph::new(self.lines(area.width, config))
            .scroll((self.props.scroll_offset, 0))
            .render(area, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(feed_height())
    }
}
