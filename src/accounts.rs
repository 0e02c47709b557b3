/// Tracked-account address book
///
/// Accounts the user follows, with a human label and free-form tags. The
/// filter evaluator only needs the `address -> {label, tags}` projection;
/// `notes` stays on the book entry and never reaches the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ActivityResult;
use crate::logger::{self, LogTag};

/// Lookup table consumed by the filter evaluator, keyed by wallet address
pub type AddressBook = HashMap<String, AddressInfo>;

/// What the pipeline knows about one address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub label: String,
    /// Free-form tags ("hot", "exchange", ...), matched case-insensitively
    #[serde(default)]
    pub tags: Vec<String>,
}

impl AddressInfo {
    /// Case-insensitive tag membership check
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// One entry of the user's account book, as stored/exchanged externally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedAccount {
    pub address: String,
    pub label: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Project book entries into the lookup table the evaluator consumes.
/// Later entries for the same address win.
pub fn address_book(accounts: &[TrackedAccount]) -> AddressBook {
    let mut book = AddressBook::new();
    for account in accounts {
        book.insert(
            account.address.clone(),
            AddressInfo {
                label: account.label.clone(),
                tags: account.tags.clone(),
            },
        );
    }

    logger::debug(
        LogTag::Accounts,
        &format!("address book built with {} entries", book.len()),
    );

    book
}

/// Decode a JSON account list
pub fn parse_tracked_accounts(json: &str) -> ActivityResult<Vec<TrackedAccount>> {
    Ok(serde_json::from_str(json)?)
}
