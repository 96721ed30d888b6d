// src/task/due_date.rs

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// A task deadline.
///
/// `At` holds milliseconds since the epoch for UTC midnight of the date.
/// `Open` means "no deadline" and orders after every concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueDate {
    At(i64),
    Open,
}

impl DueDate {
    /// Parse a `YYYY-MM-DD` calendar date at UTC midnight.
    ///
    /// Returns `None` for anything that is not a real date, including
    /// out-of-range days like `2025-02-30`.
    pub fn parse(s: &str) -> Option<Self> {
        // chrono accepts signed years and unpadded fields; the wire format
        // is exactly four, two and two digits.
        if !has_date_shape(s.as_bytes()) {
            return None;
        }
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        Some(DueDate::At(midnight.and_utc().timestamp_millis()))
    }
}

fn has_date_shape(bytes: &[u8]) -> bool {
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl Ord for DueDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (DueDate::At(a), DueDate::At(b)) => a.cmp(b),
            (DueDate::At(_), DueDate::Open) => Ordering::Less,
            (DueDate::Open, DueDate::At(_)) => Ordering::Greater,
            (DueDate::Open, DueDate::Open) => Ordering::Equal,
        }
    }
}

impl PartialOrd for DueDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueDate::At(ms) => match chrono::DateTime::from_timestamp_millis(*ms) {
                Some(dt) => write!(f, "{}", dt.date_naive().format("%Y-%m-%d")),
                None => write!(f, "{ms}ms"),
            },
            DueDate::Open => write!(f, "none"),
        }
    }
}
