use anyhow::{Context, Result};

use crate::calendar::CalendarMonth;
use crate::commands::resolve_month;
use crate::config::{Config, DisplayConfig};
use crate::formatting::format_header;
use crate::layout_constants::CLI_CALENDAR_CELL_WIDTH;

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const RECORD_MARKER: char = '*';

pub fn format_calendar(month: &CalendarMonth, display: &DisplayConfig) -> String {
    let mut output = String::new();
    let cell = CLI_CALENDAR_CELL_WIDTH - 1;

    output.push_str(&format_header(&format!("Memories - {}", month.label()), true, display));
    output.push('\n');

    for name in WEEKDAY_NAMES {
        output.push_str(&format!("{:>cell$} ", name));
    }
    output.truncate(output.trim_end().len());
    output.push('\n');

    let mut column = month.first_weekday() as usize;
    output.push_str(&" ".repeat(column * CLI_CALENDAR_CELL_WIDTH));

    for day in &month.days {
        let marker = if day.has_record() { RECORD_MARKER } else { ' ' };
        output.push_str(&format!("{:>width$}{} ", day.day, marker, width = cell - 1));

        column += 1;
        if column == WEEKDAY_NAMES.len() {
            output.truncate(output.trim_end().len());
            output.push('\n');
            column = 0;
        }
    }
    if column != 0 {
        output.truncate(output.trim_end().len());
        output.push('\n');
    }

    output.push_str(&format!(
        "\n{} of {} days with a memory ({} = memory)\n",
        month.record_count(),
        month.len(),
        RECORD_MARKER
    ));
    output
}

pub fn run(config: &Config, year: Option<i32>, month: Option<u32>, seed: Option<u64>) -> Result<()> {
    let (year, month0) = resolve_month(year, month)?;
    let generated = config
        .calendar
        .generator(seed)
        .generate(year, month0)
        .with_context(|| format!("Failed to generate memories for {}-{:02}", year, month0 + 1))?;

    print!("{}", format_calendar(&generated, &config.display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarGenerator;

    #[test]
    fn test_format_calendar_november_2025() {
        let month = CalendarGenerator::default()
            .generate_with(2025, 10, |day| if day % 3 == 0 { 0.1 } else { 0.9 })
            .unwrap();

        let output = format_calendar(&month, &DisplayConfig::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Memories - November 2025");
        assert_eq!(lines[1], "═".repeat(24));
        assert_eq!(lines[3], " Sun  Mon  Tue  Wed  Thu  Fri  Sat");
        // November 1st 2025 is a Saturday
        assert_eq!(lines[4], format!("{}  1*", " ".repeat(30)));
        assert_eq!(lines[5], "  2*   3    4*   5*   6    7*   8*");
        assert_eq!(lines[9], " 30");
        assert_eq!(lines[11], "20 of 30 days with a memory (* = memory)");
    }

    #[test]
    fn test_format_calendar_ascii_header() {
        let month = CalendarGenerator::default().generate_with(2024, 1, |_| 0.0).unwrap();
        let display = DisplayConfig {
            use_unicode: false,
            box_chars: crate::formatting::BoxChars::ascii(),
            ..Default::default()
        };

        let output = format_calendar(&month, &display);

        assert!(output.starts_with("Memories - February 2024\n========================\n"));
        assert!(output.contains("0 of 29 days with a memory"));
    }

    #[test]
    fn test_run_rejects_bad_month() {
        let err = run(&Config::default(), Some(2025), Some(13), None).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid month"));
    }
}
