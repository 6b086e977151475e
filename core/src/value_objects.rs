//! # Value Objects
//!
//! Primitives that carry rules get their own type, so the rule is enforced
//! once at construction instead of at every use.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use tidy_common::error::{LessonError, Result};

/// A person's name: trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LessonError::invalid_argument("Name cannot be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An age derived from a birth date rather than stored as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    birth_date: NaiveDate,
}

impl Age {
    pub fn new(birth_date: NaiveDate) -> Self {
        Self { birth_date }
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Whole years between the birth date and `date`, as an absolute value.
    pub fn years_on(&self, date: NaiveDate) -> u32 {
        let (earlier, later) = if self.birth_date <= date {
            (self.birth_date, date)
        } else {
            (date, self.birth_date)
        };
        later.years_since(earlier).unwrap_or(0)
    }

    pub fn years(&self) -> u32 {
        self.years_on(Local::now().date_naive())
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_date.year()
    }
}
