//! Core data model types for termquiz.
//!
//! These are the fundamental types that the rest of termquiz uses to
//! represent vocabulary terms, info items, and the dated info records
//! (decks) they are grouped into.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A vocabulary word or phrase paired with its definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermItem {
    /// The word or phrase being learned.
    pub term: String,
    /// Its definition or explanation.
    pub description: String,
}

impl TermItem {
    pub fn new(term: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            description: description.into(),
        }
    }
}

/// Which learning hub a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hub {
    Ai,
    Finance,
}

impl fmt::Display for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hub::Ai => write!(f, "ai"),
            Hub::Finance => write!(f, "finance"),
        }
    }
}

impl FromStr for Hub {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ai" => Ok(Hub::Ai),
            "finance" | "fin" => Ok(Hub::Finance),
            other => Err(format!("unknown hub: {other}")),
        }
    }
}

/// A single piece of learning content with the terms it introduces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoItem {
    /// Headline of the item.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Terms introduced by this item.
    #[serde(default)]
    pub terms: Vec<TermItem>,
}

impl InfoItem {
    /// Append parsed terms to this item and return how many were added.
    ///
    /// Terms are appended as-is; repeated terms are kept.
    pub fn merge_terms(&mut self, parsed: Vec<TermItem>) -> usize {
        let added = parsed.len();
        self.terms.extend(parsed);
        added
    }
}

/// A dated set of info items for one hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoRecord {
    /// Unique identifier for this record.
    pub id: String,
    /// Hub the record is published under.
    pub hub: Hub,
    /// Publication date.
    pub date: NaiveDate,
    /// The info items in this record.
    #[serde(default)]
    pub infos: Vec<InfoItem>,
}

impl InfoRecord {
    /// All terms of all info items, in item order.
    pub fn term_pool(&self) -> Vec<TermItem> {
        self.infos
            .iter()
            .flat_map(|info| info.terms.iter().cloned())
            .collect()
    }

    /// Total number of terms across all info items.
    pub fn term_count(&self) -> usize {
        self.infos.iter().map(|info| info.terms.len()).sum()
    }
}

/// Build a single pool from several records, in record order.
pub fn combined_pool<'a>(records: impl IntoIterator<Item = &'a InfoRecord>) -> Vec<TermItem> {
    records.into_iter().flat_map(InfoRecord::term_pool).collect()
}
