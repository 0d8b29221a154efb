//! Post date parsing and formatting.
//!
//! Frontmatter dates are either plain dates (`2023-04-05`) or full
//! RFC 3339 timestamps (`2023-04-05T08:30:00Z`). Internally everything
//! is normalized to a naive UTC datetime.

use anyhow::{Result, anyhow};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Publication date of a post, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostDate(NaiveDateTime);

impl PostDate {
    /// Parse from `YYYY-MM-DD` or RFC 3339 format.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.naive_utc()));
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow!("invalid date `{s}`, expected YYYY-MM-DD or RFC 3339"))?;
        Ok(Self(date.and_time(NaiveTime::MIN)))
    }

    /// Long display form used in post lists, e.g. `April 05, 2023`.
    pub fn display_long(&self) -> String {
        self.0.format("%B %d, %Y").to_string()
    }

    /// `YYYY-MM-DD` form used in sitemap entries.
    pub fn ymd(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// RFC 2822 form used in the rss feed, e.g. `Wed, 05 Apr 2023 00:00:00 GMT`.
    pub fn to_rfc2822(&self) -> String {
        self.0.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }
}

/// Current calendar year at render time, for the footer copyright line.
pub fn current_year() -> i32 {
    Local::now().year()
}
