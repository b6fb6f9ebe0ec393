//! Clair Group - Le Bourget business aviation group. Two extraction passes:
//! job-card elements first, then a broader anchor sweep when the cards are
//! absent, then the no-vacancy phrase check.

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::classify;
use crate::client::fetch_text;
use crate::model::RawListing;
use crate::source::{absolutize, JobSource};

const SOURCE: &str = "Clair Group";
const URL: &str = "https://www.clair-group.com/fr/recrutement/";
const BASE: &str = "https://www.clair-group.com";

const PILOT_KEYWORDS: &[&str] = &["pilote", "pnt", "commandant", "officier", "captain", "f/o"];
const ANCHOR_KEYWORDS: &[&str] = &["pilote", "pnt", "captain", "candidature"];
const NO_VACANCY: &[&str] = &["effectifs complets", "pas de recrutement", "no vacancy"];

pub struct ClairGroup;

#[async_trait]
impl JobSource for ClairGroup {
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
    let mut found = job_card_pass(&document);

    if found.is_empty() {
        found = anchor_pass(&document);
    }

    if found.is_empty() {
        let page_text = document.root_element().text().collect::<String>().to_lowercase();
        if NO_VACANCY.iter().any(|phrase| page_text.contains(phrase)) {
            return vec![RawListing::fully_staffed(
                "Effectifs complets",
                URL,
                "Le Bourget",
                SOURCE,
            )];
        }
    }

    found
}

fn job_card_pass(document: &Html) -> Vec<RawListing> {
    let selector = Selector::parse(
        "h3.job, h3.offer, h3.title, a.job, a.offer, a.title, div.job, div.offer, div.title",
    )
    .unwrap();

    let mut found = Vec::new();
    for element in document.select(&selector) {
        let text = element.text().collect::<String>().trim().to_lowercase();
        if !classify::contains_any(&text, PILOT_KEYWORDS) {
            continue;
        }
        let link = match element.value().attr("href") {
            Some(href) if element.value().name() == "a" => absolutize(BASE, href),
            _ => URL.to_string(),
        };
        found.push(RawListing::new(
            classify::capitalize(&text),
            link,
            Some("Le Bourget".to_string()),
            SOURCE,
        ));
    }
    found
}

fn anchor_pass(document: &Html) -> Vec<RawListing> {
    let selector = Selector::parse("a[href]").unwrap();

    let mut found = Vec::new();
    for element in document.select(&selector) {
        let text = element.text().collect::<String>().trim().to_lowercase();
        if !classify::contains_any(&text, ANCHOR_KEYWORDS) {
            continue;
        }
        let href = element.value().attr("href").unwrap_or_default();
        found.push(RawListing::new(
            classify::capitalize(&text),
            absolutize(BASE, href),
            Some("Le Bourget".to_string()),
            SOURCE,
        ));
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListingStatus;

    #[test]
    fn test_job_card_pass_wins_over_anchor_pass() {
        let html = r#"<html><body>
            <h3 class="job">Pilote Phenom 300</h3>
            <a href="/fr/candidature">Déposer une candidature</a>
        </body></html>"#;
        let found = parse(html);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Pilote phenom 300");
        assert_eq!(found[0].link, URL);
    }

    #[test]
    fn test_anchor_fallback_when_no_cards() {
        let html = r#"<a href="/fr/candidature-pnt">Candidature PNT</a>"#;
        let found = parse(html);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].link, "https://www.clair-group.com/fr/candidature-pnt");
    }

    #[test]
    fn test_no_vacancy_marker() {
        let html = "<html><body><p>Pas de recrutement en cours.</p></body></html>";
        let found = parse(html);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, ListingStatus::Full);
    }
}
