use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::fixtures::POSTS;
use crate::formatting::format_header;
use crate::types::Post;

const CARD_INNER_WIDTH: usize = 44;

fn format_post(post: &Post, display: &DisplayConfig) -> String {
    let chars = &display.box_chars;
    let border = chars.horizontal.repeat(CARD_INNER_WIDTH + 2);
    let mut output = String::new();

    let reactions = if post.reactions.is_empty() {
        "no reactions yet".to_string()
    } else {
        post.visible_reactions()
            .iter()
            .map(|r| format!("{} {}", r.emoji, r.user.username))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let rows = [
        format!("@{} {} {}", post.user.username, chars.bullet, post.timestamp),
        format!("{} - {}", post.song.name, post.song.artist),
        format!("{} ({})", post.song.album, post.song.duration),
        format!("{} plays", post.play_count),
        reactions,
    ];

    output.push_str(&format!("{}{}{}\n", chars.top_left, border, chars.top_right));
    for row in rows {
        // Pad by display width so emoji rows line up
        let padding = " ".repeat(CARD_INNER_WIDTH.saturating_sub(row.width()));
        output.push_str(&format!("{} {}{} {}\n", chars.vertical, row, padding, chars.vertical));
    }
    output.push_str(&format!("{}{}{}\n", chars.bottom_left, border, chars.bottom_right));
    output
}

pub fn format_feed(display: &DisplayConfig) -> String {
    let mut output = format_header("Tonight", true, display);
    output.push_str("Capture the vibe.\n\n");

    for post in POSTS.iter() {
        output.push_str(&format_post(post, display));
        output.push('\n');
    }

    output.push_str("ALL CAUGHT UP\n");
    output
}

pub fn run(display: &DisplayConfig) -> Result<()> {
    print!("{}", format_feed(display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_feed_lists_every_post() {
        let output = format_feed(&DisplayConfig::default());

        assert!(output.starts_with("Tonight\n═══════\nCapture the vibe.\n"));
        assert!(output.contains("│ @sarah_j • 2h late"));
        assert!(output.contains("Midnight City - M83"));
        assert!(output.contains("As It Was - Harry Styles"));
        assert!(output.contains("Vampire - Olivia Rodrigo"));
        assert!(output.trim_end().ends_with("ALL CAUGHT UP"));
    }

    #[test]
    fn test_format_post_reactions() {
        let display = DisplayConfig::default();

        let first = format_post(&POSTS[0], &display);
        assert!(first.contains("🔥 mike_beats, 😍 emma_w"));

        let last = format_post(&POSTS[2], &display);
        assert!(last.contains("no reactions yet"));
    }

    #[test]
    fn test_format_post_box_lines_align() {
        let output = format_post(&POSTS[0], &DisplayConfig::default());
        let widths: Vec<usize> = output.lines().map(|line| line.width()).collect();

        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
