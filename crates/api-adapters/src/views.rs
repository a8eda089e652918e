//! # HTML views
//!
//! Askama templates for the landing page, the submission form and the
//! board, plus the flattened view models they render.

use askama::Template;
use domains::models::{Listing, ListingSubmission};
use serde::Deserialize;
use services::{NAME_MAX_CHARS, NOTE_MAX_CHARS, RECENT_LISTINGS_LIMIT};

const EXPIRY_DISPLAY_FORMAT: &str = "%b %-d, %Y";
const POSTED_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Example target for a QR code sticker on a food item.
pub const SAMPLE_LIST_PATH: &str = "/list?name=Milk&qty=1L&exp=2025-01-15";

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub sample_path: &'static str,
}

impl Default for HomeTemplate {
    fn default() -> Self {
        Self {
            sample_path: SAMPLE_LIST_PATH,
        }
    }
}

#[derive(Template)]
#[template(path = "list_form.html")]
pub struct ListFormTemplate {
    pub form: FormValues,
    pub error: Option<String>,
    pub name_max: usize,
    pub note_max: usize,
}

impl ListFormTemplate {
    pub fn new(form: FormValues, error: Option<String>) -> Self {
        Self {
            form,
            error,
            name_max: NAME_MAX_CHARS,
            note_max: NOTE_MAX_CHARS,
        }
    }
}

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub listings: Vec<ListingCard>,
    pub error: Option<String>,
    pub limit: u32,
}

impl BoardTemplate {
    pub fn with_listings(listings: &[Listing]) -> Self {
        Self {
            listings: listings.iter().map(ListingCard::from).collect(),
            error: None,
            limit: RECENT_LISTINGS_LIMIT,
        }
    }

    pub fn with_error(message: String) -> Self {
        Self {
            listings: Vec::new(),
            error: Some(message),
            limit: RECENT_LISTINGS_LIMIT,
        }
    }
}

/// Query parameters that pre-fill the form, e.g. from a QR code:
/// `/list?name=Milk&qty=1L&exp=2025-01-15`.
#[derive(Debug, Default, Deserialize)]
pub struct FormPrefill {
    pub name: Option<String>,
    pub qty: Option<String>,
    pub exp: Option<String>,
}

/// Current contents of the form inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub qty: String,
    pub exp: String,
    pub note: String,
    pub contact: String,
}

impl From<FormPrefill> for FormValues {
    fn from(prefill: FormPrefill) -> Self {
        Self {
            name: prefill.name.unwrap_or_default(),
            qty: prefill.qty.unwrap_or_default(),
            exp: prefill.exp.unwrap_or_default(),
            ..Default::default()
        }
    }
}

impl From<&ListingSubmission> for FormValues {
    fn from(submission: &ListingSubmission) -> Self {
        let [name, qty, exp, note, contact] = submission.fields().map(str::to_string);
        Self {
            name,
            qty,
            exp,
            note,
            contact,
        }
    }
}

/// One listing as shown on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub name: String,
    pub quantity: Option<String>,
    pub expiry: Option<String>,
    pub note: Option<String>,
    pub contact: Option<String>,
    pub posted_at: String,
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        Self {
            name: listing.name.clone(),
            quantity: listing.quantity.clone(),
            expiry: listing
                .expiry
                .map(|d| d.format(EXPIRY_DISPLAY_FORMAT).to_string()),
            note: listing.note.clone(),
            contact: listing.contact.clone(),
            posted_at: listing.created_at.format(POSTED_DISPLAY_FORMAT).to_string(),
        }
    }
}
