//! Validation of raw user input into item drafts and partial updates.
//!
//! Both the board forms and the one-shot commands go through these helpers so
//! an item is never built from unvalidated text.

use backlog_core::ValidationError;
use chrono::NaiveDate;

use crate::item::ItemStatus;

const DUE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Validated field values for a new item or a full edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub tags: Vec<String>,
}

impl ItemDraft {
    /// Trims every field, rejects an empty title or a malformed due date and
    /// splits the tag list on commas.
    pub fn parse(
        title: &str,
        description: &str,
        due_date: &str,
        tags: &str,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            due_date: validate_due_date(due_date)?,
            tags: parse_tags(tags),
        })
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<ItemStatus>,
}

impl ItemUpdate {
    /// Builds an update from command flags. Empty flag values mean "no change";
    /// a title that is blank after trimming is rejected.
    pub fn from_flags(
        title: Option<&str>,
        description: Option<&str>,
        due_date: Option<&str>,
        tags: Option<&str>,
        status: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let status = present(status)
            .map(str::parse::<ItemStatus>)
            .transpose()?;
        let due_date = present(due_date).map(validate_due_date).transpose()?;
        let title = match present(title).map(str::trim) {
            Some("") => return Err(ValidationError::EmptyTitle),
            title => title.map(str::to_string),
        };

        Ok(Self {
            title,
            description: present(description).map(str::to_string),
            due_date,
            tags: present(tags).map(parse_tags),
            status,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Returns the trimmed date, or an empty string when no date was given.
pub fn validate_due_date(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    // chrono accepts single-digit days and months; the stored format does not.
    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == 10 && bytes[2] == b'-' && bytes[5] == b'-';
    if well_formed && NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT).is_ok() {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidDateFormat(trimmed.to_string()))
    }
}

/// Splits on commas and trims each segment. Empty segments are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(',').map(|tag| tag.trim().to_string()).collect()
}
