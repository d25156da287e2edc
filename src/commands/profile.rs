use anyhow::Result;

use crate::config::DisplayConfig;
use crate::fixtures::{recent_vibe_art, CURRENT_USER, RECENT_VIBES_COUNT};
use crate::formatting::{format_count, format_header};

const STAT_LABEL_WIDTH: usize = 16;

pub fn format_profile(display: &DisplayConfig) -> String {
    let user = &CURRENT_USER;
    let stats = &user.stats;

    let mut output = format_header(&format!("{} (@{})", user.display_name, user.username), true, display);
    output.push_str(user.bio);
    output.push_str("\n\n");

    let rows = [
        ("Total plays", format_count(stats.total_plays)),
        ("Streak", format!("{} days", format_count(stats.days_tracked))),
        ("Hours listened", format_count(stats.hours_listened)),
        ("Unique artists", format_count(stats.unique_artists)),
    ];
    for (label, value) in rows {
        output.push_str(&format!("{:<STAT_LABEL_WIDTH$}{}\n", label, value));
    }

    output.push('\n');
    output.push_str(&format_header("Recent Vibes", false, display));
    for index in 1..=RECENT_VIBES_COUNT {
        output.push_str(&format!("{:>2}. {}\n", index, recent_vibe_art(index).short_label()));
    }
    output
}

pub fn run(display: &DisplayConfig) -> Result<()> {
    print!("{}", format_profile(display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_profile() {
        let output = format_profile(&DisplayConfig::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Alex (@alex_listener)");
        assert_eq!(lines[2], "Indie rock enthusiast & vinyl collector 🎧");
        assert_eq!(lines[4], "Total plays     3,429");
        assert_eq!(lines[5], "Streak          142 days");
        assert!(output.contains("Recent Vibes\n────────────\n"));
        assert!(output.contains(" 1. photo-1470225620780-dba8ba36b745"));
        assert!(output.contains(" 2. photo-1493225255756-d9584f8606e9"));
    }
}
