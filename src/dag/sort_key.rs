// src/dag/sort_key.rs

//! Priority of a ready task: (due date, estimated hours, title).

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::task::{DueDate, Task};
use crate::types::TitleOrder;

/// Precomputed ordering value for a title.
///
/// Fields compare in declaration order. `raw` is last and titles are unique,
/// so two keys for different titles never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    /// Base characters after canonical decomposition, case-folded and
    /// tagged with their class.
    primary: Vec<(CharClass, char)>,
    /// Combining marks carried by each base character; unaccented first.
    secondary: Vec<Vec<char>>,
    /// Case of each base character; lowercase sorts first.
    tertiary: Vec<bool>,
    raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Punctuation,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Space
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Punctuation
        }
    }
}

impl CollationKey {
    pub fn new(title: &str, order: TitleOrder) -> Self {
        match order {
            TitleOrder::Ordinal => Self {
                primary: Vec::new(),
                secondary: Vec::new(),
                tertiary: Vec::new(),
                raw: title.to_string(),
            },
            TitleOrder::Locale => Self::locale(title),
        }
    }

    fn locale(title: &str) -> Self {
        let mut primary = Vec::new();
        let mut secondary: Vec<Vec<char>> = Vec::new();
        let mut tertiary = Vec::new();

        for c in title.nfd() {
            if is_combining_mark(c)
                && let Some(marks) = secondary.last_mut()
            {
                marks.push(c);
                continue;
            }
            let class = CharClass::of(c);
            primary.extend(c.to_lowercase().map(|folded| (class, folded)));
            secondary.push(Vec::new());
            tertiary.push(c.is_uppercase());
        }

        Self {
            primary,
            secondary,
            tertiary,
            raw: title.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.raw
    }
}

/// Full priority of a ready task. Smaller keys are scheduled first.
#[derive(Debug, Clone)]
pub struct SortKey {
    due: DueDate,
    hours: f64,
    title: CollationKey,
}

impl SortKey {
    pub fn for_task(task: &Task, order: TitleOrder) -> Self {
        Self {
            due: task.due,
            hours: task.estimated_hours,
            title: CollationKey::new(&task.title, order),
        }
    }

    pub fn title(&self) -> &str {
        self.title.title()
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.hours.total_cmp(&other.hours))
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}
