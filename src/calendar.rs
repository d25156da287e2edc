/// Calendar memory generation
///
/// Enumerates the days of a month and decides, per day, whether a listening
/// record exists. Populated days carry an artwork reference cycling through
/// a fixed set of four.
use chrono::{Datelike, Local, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Chance that a day holds a record
pub const DEFAULT_PRESENCE: f64 = 0.7;

/// A draw must exceed this value for a day to hold a record
pub const DEFAULT_ABSENCE_THRESHOLD: f64 = 0.3;

/// Opaque artwork identifier, resolved by whoever renders it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtRef(pub &'static str);

impl ArtRef {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Short label for places that cannot show the image itself
    pub fn short_label(&self) -> &'static str {
        self.0
            .rsplit('/')
            .next()
            .and_then(|tail| tail.split('?').next())
            .unwrap_or(self.0)
    }
}

impl fmt::Display for ArtRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const FIXED_ART_SET: [ArtRef; 4] = [
    ArtRef("https://images.unsplash.com/photo-1619983081563-430f63602796?w=100&h=100&fit=crop"),
    ArtRef("https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=100&h=100&fit=crop"),
    ArtRef("https://images.unsplash.com/photo-1511671782779-c97d3d27a1d4?w=100&h=100&fit=crop"),
    ArtRef("https://images.unsplash.com/photo-1514525253440-b393452e3383?w=100&h=100&fit=crop"),
];

/// Artwork for a populated day
pub fn art_for_day(day: u32) -> ArtRef {
    FIXED_ART_SET[day as usize % FIXED_ART_SET.len()]
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month index {0} (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Year {0} is outside the supported date range")]
    InvalidYear(i32),
}

/// One day-slot of the displayed month
///
/// `art` is set exactly when the day has a listening record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub art: Option<ArtRef>,
}

impl CalendarDay {
    pub fn with_record(day: u32) -> Self {
        Self {
            day,
            art: Some(art_for_day(day)),
        }
    }

    pub fn empty(day: u32) -> Self {
        Self { day, art: None }
    }

    pub fn has_record(&self) -> bool {
        self.art.is_some()
    }
}

/// Generated days for a single month
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub year: i32,
    /// Zero-based month index (0 = January)
    pub month0: u32,
    pub days: Vec<CalendarDay>,
}

impl Default for CalendarMonth {
    fn default() -> Self {
        Self {
            year: 1970,
            month0: 0,
            days: Vec::new(),
        }
    }
}

impl CalendarMonth {
    /// "November 2025"
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1) {
            Some(date) => date.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month0 + 1),
        }
    }

    /// Weekday of the 1st, Sunday = 0
    pub fn first_weekday(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        day.checked_sub(1)
            .and_then(|index| self.days.get(index as usize))
    }

    pub fn len(&self) -> u32 {
        self.days.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.days.iter().filter(|d| d.has_record()).count()
    }
}

/// Number of days in a month, computed as "day 0 of the next month"
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, CalendarError> {
    if month0 > 11 {
        return Err(CalendarError::InvalidMonth(month0));
    }

    let (next_year, next_month) = if month0 == 11 {
        (year.checked_add(1).ok_or(CalendarError::InvalidYear(year))?, 1)
    } else {
        (year, month0 + 2)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .ok_or(CalendarError::InvalidYear(year))
}

/// Where presence draws come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceMode {
    /// Fresh thread-local randomness on every generation
    #[default]
    Random,
    /// Deterministic stream derived from (seed, year, month)
    Seeded(u64),
}

impl From<Option<u64>> for PresenceMode {
    fn from(seed: Option<u64>) -> Self {
        seed.map(PresenceMode::Seeded).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct CalendarGenerator {
    absence_threshold: f64,
    mode: PresenceMode,
}

impl Default for CalendarGenerator {
    fn default() -> Self {
        Self {
            absence_threshold: DEFAULT_ABSENCE_THRESHOLD,
            mode: PresenceMode::Random,
        }
    }
}

impl CalendarGenerator {
    pub fn new(mode: PresenceMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Override the chance that a day holds a record. Values outside [0, 1]
    /// are ignored.
    pub fn with_presence(mut self, presence: f64) -> Self {
        if (0.0..=1.0).contains(&presence) {
            // 1.0 - 0.7 is 0.30000000000000004, not the 0.3 cut-off
            self.absence_threshold = if presence == DEFAULT_PRESENCE {
                DEFAULT_ABSENCE_THRESHOLD
            } else {
                1.0 - presence
            };
        }
        self
    }

    pub fn mode(&self) -> PresenceMode {
        self.mode
    }

    /// Generate the month containing today's local date
    pub fn generate_current(&self) -> Result<CalendarMonth, CalendarError> {
        let today = Local::now().date_naive();
        self.generate(today.year(), today.month0())
    }

    pub fn generate(&self, year: i32, month0: u32) -> Result<CalendarMonth, CalendarError> {
        match self.mode {
            PresenceMode::Random => {
                let mut rng = rand::rng();
                self.generate_with(year, month0, |_| rng.random::<f64>())
            }
            PresenceMode::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(month_seed(seed, year, month0));
                self.generate_with(year, month0, |_| rng.random::<f64>())
            }
        }
    }

    /// Generate using `draw(day)` as the uniform [0, 1) presence draw
    pub fn generate_with<F>(&self, year: i32, month0: u32, mut draw: F) -> Result<CalendarMonth, CalendarError>
    where
        F: FnMut(u32) -> f64,
    {
        let count = days_in_month(year, month0)?;

        let days: Vec<CalendarDay> = (1..=count)
            .map(|day| {
                if draw(day) > self.absence_threshold {
                    CalendarDay::with_record(day)
                } else {
                    CalendarDay::empty(day)
                }
            })
            .collect();

        let month = CalendarMonth { year, month0, days };
        debug!(
            "CALENDAR: Generated {} ({} days, {} with records, mode={:?})",
            month.label(),
            count,
            month.record_count(),
            self.mode
        );
        Ok(month)
    }
}

fn month_seed(seed: u64, year: i32, month0: u32) -> u64 {
    let key = ((year as i64 as u64) << 8) | month0 as u64;
    seed ^ key.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
