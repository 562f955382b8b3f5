//! Student record type and input validation
//!
//! Raw prompt text is validated here, once, and turned into typed values.
//! Everything past this module works with `Student` and `StudentUpdate` only.

use crate::{
    error::{RecordsError, Result},
    utils::text::title_case,
};
use serde::{Deserialize, Serialize};

/// A single student record as stored in the data file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    /// Externally supplied identifier, unique within the collection
    pub id: String,
    /// Full name in title case
    pub name: String,
    /// Age in whole years
    pub age: i64,
    /// Course name in title case
    pub course: String,
}

impl Student {
    /// Build a record from raw prompt input.
    ///
    /// Every field is trimmed; all four must be non-empty and the age must
    /// parse as a whole number. Name and course are normalized to title case.
    pub fn from_input(id: &str, name: &str, age: &str, course: &str) -> Result<Self> {
        let id = id.trim();
        let name = title_case(name.trim());
        let age = age.trim();
        let course = title_case(course.trim());

        if id.is_empty() || name.is_empty() || age.is_empty() || course.is_empty() {
            return Err(RecordsError::validation("All fields are required!"));
        }

        Ok(Self {
            id: id.to_string(),
            name,
            age: parse_age(age)?,
            course,
        })
    }

    /// Apply a partial update in place. The id never changes.
    pub fn apply(&mut self, update: StudentUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(course) = update.course {
            self.course = course;
        }
    }
}

/// Replacement values for an update; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub course: Option<String>,
}

impl StudentUpdate {
    /// Build an update from raw prompt input.
    ///
    /// Blank input for a field means "keep". A non-blank age that is not a
    /// whole number rejects the entire update.
    pub fn from_input(name: &str, age: &str, course: &str) -> Result<Self> {
        let age = match age.trim() {
            "" => None,
            value => Some(parse_age(value)?),
        };

        Ok(Self {
            name: non_blank(name).map(title_case),
            age,
            course: non_blank(course).map(title_case),
        })
    }

    /// Whether applying this update would leave a record unchanged
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.course.is_none()
    }
}

/// Parse an age as a signed whole number
pub fn parse_age(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| RecordsError::validation("Age must be a number!"))
}

fn non_blank(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
