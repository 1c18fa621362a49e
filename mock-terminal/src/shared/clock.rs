//! Header clock: time refreshed every second, date refreshed daily

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_FORMAT: &str = "%a %d %b %Y";

#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    time: String,
    date: String,
    day: NaiveDate,
}

impl Clock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            time: now.format(TIME_FORMAT).to_string(),
            date: now.format(DATE_FORMAT).to_string(),
            day: now.date(),
        }
    }

    /// One second tick. Also rolls the date over when midnight has passed
    /// since the last refresh.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.time = now.format(TIME_FORMAT).to_string();
        if now.date() != self.day {
            self.refresh_date(now);
        }
    }

    /// Daily date refresh
    pub fn refresh_date(&mut self, now: NaiveDateTime) {
        self.day = now.date();
        self.date = now.format(DATE_FORMAT).to_string();
        debug!("Clock date refreshed to {}", self.date);
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}
