//! Finalization of raw extractor output into snapshot-ready listings.
//!
//! Location text is resolved to coordinates, with an airport code embedded
//! in the title preferred when the extractor supplied no location at all.
//! Missing locations default to "N/C" (not communicated). No cross-source
//! deduplication happens here: the same opening surfacing from two sources
//! is kept twice on purpose; within-source duplicates were already dropped
//! by the extractor.

use crate::geo;
use crate::model::{Listing, RawListing};

/// Default location text when a source communicates none.
pub const LOCATION_NOT_COMMUNICATED: &str = "N/C";

pub fn normalize(raw: Vec<RawListing>) -> Vec<Listing> {
    raw.into_iter().map(finalize).collect()
}

pub fn finalize(raw: RawListing) -> Listing {
    let location = raw
        .location
        .filter(|l| !l.trim().is_empty())
        .or_else(|| geo::airport_place(&raw.title).map(str::to_string))
        .unwrap_or_else(|| LOCATION_NOT_COMMUNICATED.to_string());

    let (latitude, longitude) = geo::resolve(&location);

    Listing {
        title: raw.title,
        link: raw.link,
        location,
        source: raw.source.to_string(),
        status: raw.status,
        latitude,
        longitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListingStatus;

    #[test]
    fn test_airport_code_in_title_resolves_missing_location() {
        let raw = RawListing::new("PILOT PC12 LSGG", "https://example.com/1", None, "Jetfly");
        let listing = finalize(raw);
        assert_eq!(listing.location, "Genève");
        assert_eq!(listing.status, ListingStatus::Active);
        assert_eq!((listing.latitude, listing.longitude), (46.2044, 6.1432));
    }

    #[test]
    fn test_missing_location_defaults_to_nc() {
        let raw = RawListing::new("Captain Falcon 900", "https://example.com/2", None, "PCC");
        let listing = finalize(raw);
        assert_eq!(listing.location, "N/C");
        assert_eq!(
            (listing.latitude, listing.longitude),
            geo::DEFAULT_COORDS
        );
    }

    #[test]
    fn test_supplied_location_wins_over_title_code() {
        let raw = RawListing::new(
            "PILOT PC12 LSGG",
            "https://example.com/3",
            Some("Luxembourg".to_string()),
            "Jetfly",
        );
        let listing = finalize(raw);
        assert_eq!(listing.location, "Luxembourg");
        assert_eq!((listing.latitude, listing.longitude), (49.6117, 6.1319));
    }

    #[test]
    fn test_coordinates_always_populated() {
        let raw = RawListing::new("Some role", "https://example.com/4", Some("Atlantis".into()), "X");
        let listing = finalize(raw);
        assert_eq!((listing.latitude, listing.longitude), geo::DEFAULT_COORDS);
    }
}
