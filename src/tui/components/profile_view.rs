use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::DisplayConfig;
use crate::fixtures::{recent_vibe_art, CURRENT_USER, RECENT_VIBES_COUNT};
use crate::formatting::{center_offset, format_count};
use crate::layout_constants::CARD_WIDTH;
use crate::tui::component::{Component, Element, ElementWidget};

use super::card::{card_bottom, card_row, card_top};

const TILES_PER_ROW: usize = 3;
const TILE_WIDTH: u16 = 12;
const STAT_COLUMN_WIDTH: usize = 20;

#[derive(Clone, Default)]
pub struct ProfileViewProps {
    pub scroll_offset: u16,
}

/// Current user's profile card, stats and recent-vibes grid
pub struct ProfileView;

impl Component for ProfileView {
    type Props = ProfileViewProps;
    type State = ();

    fn view(&self, props: &Self::Props, _state: &Self::State) -> Element {
        Element::Widget(Box::new(ProfileWidget { props: props.clone() }))
    }
}

/// Total lines of the profile, used to bound scrolling
pub fn profile_height() -> u16 {
    profile_lines(CARD_WIDTH, &DisplayConfig::default()).len() as u16
}

fn centered(text: &str, width: u16, style: Style) -> Vec<Span<'static>> {
    let inner = width.saturating_sub(4);
    vec![
        Span::raw(" ".repeat(center_offset(text, inner) as usize)),
        Span::styled(text.to_string(), style),
    ]
}

fn profile_lines(width: u16, config: &DisplayConfig) -> Vec<Line<'static>> {
    let user = &CURRENT_USER;
    let border = Style::default().fg(config.muted_fg);
    let muted = Style::default().fg(config.muted_fg);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        card_top(width, config, border),
        card_row(centered(user.display_name, width, bold), width, config, border),
        card_row(centered(&format!("@{}", user.username), width, muted), width, config, border),
        card_row(Vec::new(), width, config, border),
        card_row(centered(user.bio, width, Style::default()), width, config, border),
        card_bottom(width, config, border),
        Line::raw(""),
    ];

    let plays = format_count(user.stats.total_plays);
    let streak = format_count(user.stats.days_tracked);
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<STAT_COLUMN_WIDTH$}", plays), bold),
        Span::styled(streak, bold.fg(config.accent_fg)),
    ]));
    lines.push(Line::styled(
        format!("  {:<STAT_COLUMN_WIDTH$}{}", "TOTAL PLAYS", "STREAK"),
        muted,
    ));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled(" ✦ ", Style::default().fg(config.selection_fg)),
        Span::styled("Recent Vibes", bold),
    ]));
    lines.push(Line::raw(""));

    let tiles: Vec<usize> = (1..=RECENT_VIBES_COUNT).collect();
    for row in tiles.chunks(TILES_PER_ROW) {
        lines.extend(tile_row(row, config));
    }

    lines
}

/// Three lines drawing one row of square-ish tiles
fn tile_row(indices: &[usize], config: &DisplayConfig) -> Vec<Line<'static>> {
    let chars = &config.box_chars;
    let inner = TILE_WIDTH.saturating_sub(2) as usize;
    let border = Style::default().fg(config.muted_fg);

    let mut top = vec![Span::raw(" ")];
    let mut middle = vec![Span::raw(" ")];
    let mut bottom = vec![Span::raw(" ")];

    for &index in indices {
        // Two artworks alternate; shade tells them apart
        let first_art = recent_vibe_art(index) == recent_vibe_art(1);
        let shade = match (config.use_unicode, first_art) {
            (true, true) => "░",
            (true, false) => "▒",
            (false, true) => ".",
            (false, false) => ":",
        };

        top.push(Span::styled(
            format!("{}{}{} ", chars.top_left, chars.horizontal.repeat(inner), chars.top_right),
            border,
        ));
        middle.push(Span::styled(chars.vertical.clone(), border));
        middle.push(Span::styled(shade.repeat(inner), Style::default().fg(config.accent_fg)));
        middle.push(Span::styled(format!("{} ", chars.vertical), border));
        bottom.push(Span::styled(
            format!("{}{}{} ", chars.bottom_left, chars.horizontal.repeat(inner), chars.bottom_right),
            border,
        ));
    }

    vec![Line::from(top), Line::from(middle), Line::from(bottom)]
}

#[derive(Clone)]
struct ProfileWidget {
    props: ProfileViewProps,
}

impl ElementWidget for ProfileWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let width = CARD_WIDTH.min(area.width);
        Paragraph::new(profile_lines(width, config))
            .scroll((self.props.scroll_offset, 0))
            .render(area, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(profile_height())
    }
}
