pub mod calendar;
pub mod feed;
pub mod profile;

use anyhow::{bail, Result};
use chrono::{Datelike, Local};

/// Resolve optional `--year` / `--month` arguments to (year, zero-based month)
///
/// Missing values default to today's date. `month` is 1-12 as typed on the
/// command line; anything else is rejected.
pub fn resolve_month(year: Option<i32>, month: Option<u32>) -> Result<(i32, u32)> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or(today.year());

    let month0 = match month {
        Some(m) if (1..=12).contains(&m) => m - 1,
        Some(m) => bail!("Invalid month '{}'. Use a number from 1 to 12", m),
        None => today.month0(),
    };

    Ok((year, month0))
}
