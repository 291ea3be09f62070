//! Lineup performance types.
//!
//! A `Performance` is one timed artist set on one stage. Field names in
//! JSON are camelCase to match the bundled dataset produced by the lineup
//! scraper, so the data file round-trips untouched.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timed artist set at one stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub id: String,
    pub artist: String,
    pub stage: String,
    /// Festival-day label. A day can run past midnight into the next
    /// calendar date.
    pub day: String,
    /// UTC-normalized instant. Invariant `start < end`, enforced when the
    /// dataset is loaded.
    #[serde(rename = "startTime")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endTime")]
    pub end: DateTime<Utc>,

    // Descriptive fields passed through for display, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub socials: BTreeMap<String, String>,
}

impl Performance {
    /// Half-open interval overlap test. Touching endpoints (one set ending
    /// exactly when the next starts) do not overlap.
    pub fn overlaps(&self, other: &Performance) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.artist)
    }
}
