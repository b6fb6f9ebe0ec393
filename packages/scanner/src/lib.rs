// Aero Job Monitor - scanner library
//
// Everything needed to turn a set of heterogeneous career pages and ATS APIs
// into a uniform list of pilot-role listings: the per-source extractors, the
// role-keyword classification helpers, the location resolver and the
// normalization step that finalizes raw extractor output.

pub mod classify;
pub mod client;
pub mod geo;
pub mod model;
pub mod normalize;
pub mod source;
pub mod sources;

// Re-exports for clean API
pub use client::build_client;
pub use model::{Listing, ListingStatus, RawListing};
pub use normalize::normalize;
pub use source::{registry, JobSource};
