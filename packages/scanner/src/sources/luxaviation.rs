//! Luxaviation Group - largest European private jet operator (Luxembourg).
//! The careers page is a WordPress shell, offers loaded through an external
//! ATS, so the scrape looks for offer links in the page itself and falls
//! back to a "check the site" pointer when nothing is found.

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::classify;
use crate::client::fetch_text;
use crate::geo;
use crate::model::RawListing;
use crate::source::{absolutize, JobSource};

const SOURCE: &str = "Luxaviation";
const URL: &str = "https://www.luxaviation.com/careers/";
const BASE: &str = "https://www.luxaviation.com";

const PILOT_KEYWORDS: &[&str] = &["pilot", "captain", "first officer", "commandant", "f/o"];
// Training-program pages mention pilots without being openings
const EXCLUSIONS: &[&str] = &["pilot training", "pilot program", "pilot course", "cadet"];
const NO_VACANCY: &[&str] = &["no vacancies", "no current openings", "aucun poste"];

pub struct Luxaviation;

#[async_trait]
impl JobSource for Luxaviation {
    fn name(&self) -> &'static str {
        SOURCE
    }

    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<RawListing>> {
        let body = fetch_text(client, URL).await?;
        Ok(parse(&body))
    }
}

pub fn parse(html: &str) -> Vec<RawListing> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    let mut found = Vec::new();
    for element in document.select(&selector) {
        let text = element.text().collect::<String>().trim().to_string();
        let href = element.value().attr("href").unwrap_or_default();
        let href_lower = href.to_lowercase();

        let keyword_hit = classify::contains_any(&text, PILOT_KEYWORDS)
            || classify::contains_any(&href_lower, PILOT_KEYWORDS);
        if !keyword_hit || classify::contains_any(&text, EXCLUSIONS) || text.len() <= 5 {
            continue;
        }

        let location = geo::airport_place(&text)
            .unwrap_or("Luxembourg")
            .to_string();
        found.push(RawListing::new(
            text,
            absolutize(BASE, href),
            Some(location),
            SOURCE,
        ));
    }

    if found.is_empty() {
        let page_text = document.root_element().text().collect::<String>().to_lowercase();
        if NO_VACANCY.iter().any(|phrase| page_text.contains(phrase)) {
            return vec![RawListing::fully_staffed(
                "Aucune offre disponible",
                URL,
                "Luxembourg",
                SOURCE,
            )];
        }
        // The ATS widget needs JS; point at the page rather than claim "full"
        return vec![RawListing::new(
            "Consulter les offres sur le site",
            URL,
            Some("Luxembourg".to_string()),
            SOURCE,
        )];
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListingStatus;

    #[test]
    fn test_offer_link_with_airport_code_location() {
        let html = r#"<a href="/jobs/captain-gva">Captain Challenger 350 GVA</a>"#;
        let found = parse(html);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].location.as_deref(), Some("Genève"));
    }

    #[test]
    fn test_training_pages_excluded_then_spontaneous_pointer() {
        let html = r#"<html><body>
            <a href="/academy">Pilot training program</a>
        </body></html>"#;
        let found = parse(html);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, ListingStatus::Active);
        assert_eq!(found[0].title, "Consulter les offres sur le site");
    }

    #[test]
    fn test_explicit_no_vacancy_marker() {
        let html = "<html><body><p>We have no current openings.</p></body></html>";
        let found = parse(html);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, ListingStatus::Full);
    }
}
