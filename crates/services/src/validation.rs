//! # Submission Validation
//!
//! Turns a raw [`ListingSubmission`] into a storable [`NewListing`].
//!
//! Rules run in a fixed order and the first failure wins:
//! name presence, name length, note length, forbidden content, expiry format.
//! Lengths are measured on the raw input in characters, not bytes.

use chrono::NaiveDate;
use domains::models::{ListingSubmission, NewListing};
use once_cell::sync::Lazy;
use regex::RegexSet;
use thiserror::Error;

pub const NAME_MAX_CHARS: usize = 50;
pub const NOTE_MAX_CHARS: usize = 140;

/// `YYYY-MM-DD`, as produced by `<input type="date">`.
const EXPIRY_FORMAT: &str = "%Y-%m-%d";

/// Links, bare `www.` hosts, and runs with two `@` (stacked addresses).
static FORBIDDEN_CONTENT: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([r"(?i)https?://", r"(?i)www\.", r"@[a-zA-Z0-9._%+-]+@"])
        .expect("forbidden content patterns must compile")
});

/// A user-correctable problem with a submission. `Display` is the message
/// shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be {max} characters or fewer")]
    NameTooLong { max: usize },

    #[error("Note must be {max} characters or fewer")]
    NoteTooLong { max: usize },

    #[error("Inappropriate content detected")]
    InappropriateContent,

    #[error("Expiry must be a date in YYYY-MM-DD format")]
    InvalidExpiry,
}

/// Validates and normalizes a submission.
pub fn validate(submission: &ListingSubmission) -> Result<NewListing, ValidationError> {
    let raw_name = submission.name.as_deref().unwrap_or_default();
    if raw_name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if raw_name.chars().count() > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong { max: NAME_MAX_CHARS });
    }

    if let Some(note) = submission.note.as_deref() {
        if note.chars().count() > NOTE_MAX_CHARS {
            return Err(ValidationError::NoteTooLong { max: NOTE_MAX_CHARS });
        }
    }

    if contains_forbidden_content(submission) {
        return Err(ValidationError::InappropriateContent);
    }

    let expiry = match trimmed(submission.expiry.as_deref()) {
        Some(raw) => Some(
            NaiveDate::parse_from_str(&raw, EXPIRY_FORMAT)
                .map_err(|_| ValidationError::InvalidExpiry)?,
        ),
        None => None,
    };

    Ok(NewListing {
        name: raw_name.trim().to_string(),
        quantity: trimmed(submission.quantity.as_deref()),
        expiry,
        note: trimmed(submission.note.as_deref()),
        contact: trimmed(submission.contact.as_deref()),
    })
}

/// Checks all five fields in one pass over their space-joined text. The
/// separator keeps a pattern split across two fields from matching.
pub fn contains_forbidden_content(submission: &ListingSubmission) -> bool {
    FORBIDDEN_CONTENT.is_match(&submission.fields().join(" "))
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
