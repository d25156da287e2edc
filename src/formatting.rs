use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

/// Box-drawing characters for cards, grids and separators
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub dashed_horizontal: String,
    pub dashed_vertical: String,
    pub selector: String,
    pub bullet: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            dashed_horizontal: "╌".to_string(),
            dashed_vertical: "╎".to_string(),
            selector: "►".to_string(),
            bullet: "•".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            dashed_horizontal: ".".to_string(),
            dashed_vertical: ":".to_string(),
            selector: ">".to_string(),
            bullet: "*".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and an underline of the same display width
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Left padding needed to center `text` in `width` columns
pub fn center_offset(text: &str, width: u16) -> u16 {
    let text_width = text.width() as u16;
    width.saturating_sub(text_width) / 2
}

/// Thousands separator for counters ("3,429")
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header_single_line_unicode() {
        let display = DisplayConfig::default();
        let result = format_header("Memories", false, &display);
        assert_eq!(result, "Memories\n────────\n");
    }

    #[test]
    fn test_format_header_double_line_ascii() {
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        };
        let result = format_header("Memories", true, &display);
        assert_eq!(result, "Memories\n========\n");
    }

    #[test]
    fn test_format_header_counts_display_width() {
        let display = DisplayConfig::default();
        let result = format_header("Vibes 🎧", false, &display);
        assert_eq!(result, "Vibes 🎧\n────────\n");
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset("abcd", 10), 3);
        assert_eq!(center_offset("abcdefghijkl", 10), 0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(3429), "3,429");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
