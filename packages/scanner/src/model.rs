use serde::{Deserialize, Serialize};

/// Status of a listing.
///
/// `Full` is a synthetic marker meaning "this source was checked and reports
/// no open positions" - it is not a real opening. It is distinct from a
/// source that could not be reached at all (which yields no listing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Full,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Full => "full",
        }
    }
}

/// Extractor output before normalization: location is still raw text (or
/// absent) and no coordinates have been resolved. The link must already be
/// an absolute URL.
#[derive(Debug, Clone)]
pub struct RawListing {
    pub title: String,
    pub link: String,
    pub location: Option<String>,
    pub source: &'static str,
    pub status: ListingStatus,
}

impl RawListing {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        location: Option<String>,
        source: &'static str,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            location,
            source,
            status: ListingStatus::Active,
        }
    }

    /// Synthetic "source checked, nothing open" marker.
    pub fn fully_staffed(
        title: impl Into<String>,
        link: impl Into<String>,
        location: impl Into<String>,
        source: &'static str,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            location: Some(location.into()),
            source,
            status: ListingStatus::Full,
        }
    }
}

/// A finalized job-opening record as held in a snapshot.
///
/// Coordinates are always populated; unresolvable locations fall back to a
/// continental default. Listings are never mutated after snapshot assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub link: String,
    pub location: String,
    pub source: String,
    pub status: ListingStatus,
    pub latitude: f64,
    pub longitude: f64,
}
