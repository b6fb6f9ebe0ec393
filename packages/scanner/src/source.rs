//! The contract every external source implements, and the static registry
//! the orchestrator iterates.

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::model::RawListing;
use crate::sources;

/// One external job source (career page, ATS API, static HTML).
///
/// `fetch` returns zero or more raw listings in source-defined order, or a
/// single fully-staffed marker when the source explicitly reports no open
/// positions. Retrieval and parse errors surface as `Err`; the caller
/// absorbs them so one source can never abort a run. Trait object so tests
/// can substitute mock sources.
#[async_trait]
pub trait JobSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<RawListing>>;
}

/// All registered sources, in the order their results are concatenated.
/// Adding a source means adding a module and a line here, never a new
/// orchestration branch.
pub fn registry() -> Vec<Box<dyn JobSource>> {
    vec![
        Box::new(sources::jetfly::Jetfly),
        Box::new(sources::oyonnair::Oyonnair),
        Box::new(sources::pan_europeenne::PanEuropeenne),
        Box::new(sources::clair_group::ClairGroup),
        Box::new(sources::chalair::Chalair),
        Box::new(sources::netjets::NetJets),
        Box::new(sources::platoon::Platoon),
        Box::new(sources::luxaviation::Luxaviation),
        Box::new(sources::la_compagnie::LaCompagnie),
        Box::new(sources::pcc::PilotCareerCenter),
    ]
}

/// Absolutize an href scraped from a page against its site base URL.
/// Already-absolute links pass through untouched.
pub fn absolutize(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    match Url::parse(base).and_then(|b| b.join(href)) {
        Ok(joined) => joined.to_string(),
        Err(_) => format!("{}{}", base.trim_end_matches('/'), href),
    }
}
