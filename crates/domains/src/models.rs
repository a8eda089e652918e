//! # Domain Models
//!
//! The single entity of the board plus the shapes it passes through on the
//! way in. Wire names (`qty`, `exp`) match the JSON the browser sends.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored food-sharing entry.
///
/// `id` and `created_at` are assigned by the store and never change;
/// listings have no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "qty")]
    pub quantity: Option<String>,
    #[serde(rename = "exp")]
    pub expiry: Option<NaiveDate>,
    pub note: Option<String>,
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated, trimmed listing that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub name: String,
    pub quantity: Option<String>,
    pub expiry: Option<NaiveDate>,
    pub note: Option<String>,
    pub contact: Option<String>,
}

/// Raw submission as received from the API or the HTML form.
///
/// Every field is optional at this stage; presence of `name` is a
/// validation rule, not a deserialization rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSubmission {
    pub name: Option<String>,
    #[serde(rename = "qty", alias = "quantity")]
    pub quantity: Option<String>,
    #[serde(rename = "exp", alias = "expiry")]
    pub expiry: Option<String>,
    pub note: Option<String>,
    pub contact: Option<String>,
}

impl ListingSubmission {
    /// Every field in submission order, absent ones as empty strings.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.name.as_deref().unwrap_or_default(),
            self.quantity.as_deref().unwrap_or_default(),
            self.expiry.as_deref().unwrap_or_default(),
            self.note.as_deref().unwrap_or_default(),
            self.contact.as_deref().unwrap_or_default(),
        ]
    }
}
