//! Oyonnair - air-freight and medevac operator (Lyon/Rennes). Static HTML
//! recruitment page with a known "effectifs complets" phrase when nothing is
//! open.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::classify;
use crate::client::fetch_text;
use crate::model::RawListing;
use crate::source::{absolutize, JobSource};

const SOURCE: &str = "Oyonnair";
const URL: &str = "https://www.oyonnair.com/compagnie-aerienne/recrutement/";
const BASE: &str = "https://www.oyonnair.com";

const PILOT_KEYWORDS: &[&str] = &["pilote", "pnt", "commandant", "capitaine", "captain"];
// Recruitment-page boilerplate that mentions pilots without being an offer
const EXCLUSIONS: &[&str] = &[
    "régulièrement à la recherche",
    "rejoignez-nous",
    "recrutement",
    "différents domaines",
    "tels que",
    "compagnie-aerienne",
];
const NO_VACANCY: &[&str] = &["effectifs sont complets", "effectifs complets"];

pub struct Oyonnair;

#[async_trait]
impl JobSource for Oyonnair {
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
    let page_text = document.root_element().text().collect::<String>().to_lowercase();

    if NO_VACANCY.iter().any(|phrase| page_text.contains(phrase)) {
        return vec![RawListing::fully_staffed(
            "Effectifs complets",
            URL,
            "Lyon/Rennes",
            SOURCE,
        )];
    }

    let selector = Selector::parse("h2, h3, a").unwrap();
    let mut found = Vec::new();
    let mut seen = HashSet::new();

    for element in document.select(&selector) {
        let text = element.text().collect::<String>().trim().to_lowercase();
        if !classify::is_role_match(&text, PILOT_KEYWORDS, EXCLUSIONS)
            || !classify::within_bounds(&text, 0, 100)
        {
            continue;
        }
        // Only anchors pointing at an actual offer, not the landing page
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.contains("recrutement") {
            continue;
        }
        if seen.insert(text.clone()) {
            found.push(RawListing::new(
                classify::capitalize(&text),
                absolutize(BASE, href),
                Some("Lyon".to_string()),
                SOURCE,
            ));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListingStatus;

    #[test]
    fn test_no_vacancy_phrase_yields_full_marker() {
        let html = "<html><body><p>Nos effectifs sont complets pour le moment.</p></body></html>";
        let found = parse(html);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, ListingStatus::Full);
        assert_eq!(found[0].title, "Effectifs complets");
    }

    #[test]
    fn test_offer_anchor_extracted_and_deduplicated() {
        let html = r#"<html><body>
            <a href="/offres/pilote-pc12">Pilote PC-12</a>
            <a href="/offres/pilote-pc12-bis">Pilote PC-12</a>
            <a href="/compagnie-aerienne/recrutement/">Pilote - voir recrutement</a>
            <h2>Commandant de bord Beech 200</h2>
        </body></html>"#;
        let found = parse(html);
        // Duplicate title dropped, landing-page anchor dropped, h2 has no href
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Pilote pc-12");
        assert_eq!(found[0].link, "https://www.oyonnair.com/offres/pilote-pc12");
        assert_eq!(found[0].location.as_deref(), Some("Lyon"));
    }

    #[test]
    fn test_boilerplate_rejected() {
        let html = r#"<html><body>
            <a href="/x">Nous sommes régulièrement à la recherche de pilotes</a>
        </body></html>"#;
        assert!(parse(html).is_empty());
    }
}
