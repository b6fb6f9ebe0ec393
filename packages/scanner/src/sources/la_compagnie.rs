//! La Compagnie - all-business-class Paris/Nice to New York. The WeRecruit
//! offers page is JS-rendered, but the spontaneous-application page carries
//! a "latest offers" section in plain HTML: offer cards are anchors holding
//! an `<h3>` title and `<li>` metadata, city last.

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::classify;
use crate::client::fetch_text;
use crate::model::RawListing;
use crate::source::{absolutize, JobSource};

const SOURCE: &str = "La Compagnie";
const URL: &str =
    "https://careers.werecruit.io/fr/la-compagnie/offres/candidature-spontanee-46d497";
const BASE: &str = "https://careers.werecruit.io";

const PILOT_KEYWORDS: &[&str] = &[
    "pilote",
    "pilot",
    "captain",
    "commandant",
    "first officer",
    "f/o",
    "pnt",
    "copilote",
];

pub struct LaCompagnie;

#[async_trait]
impl JobSource for LaCompagnie {
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
    let anchor_selector = Selector::parse("a[href]").unwrap();
    let title_selector = Selector::parse("h3").unwrap();
    let item_selector = Selector::parse("li").unwrap();

    let mut found = Vec::new();
    for anchor in document.select(&anchor_selector) {
        let Some(heading) = anchor.select(&title_selector).next() else {
            continue;
        };
        let title = heading.text().collect::<String>().trim().to_string();
        if !classify::contains_any(&title, PILOT_KEYWORDS) {
            continue;
        }
        let href = anchor.value().attr("href").unwrap_or_default();
        // Card metadata: contract, rhythm, city - the city comes last
        let location = anchor
            .select(&item_selector)
            .last()
            .map(|li| li.text().collect::<String>().trim().to_string())
            .filter(|loc| !loc.is_empty())
            .unwrap_or_else(|| "Paris".to_string());

        found.push(RawListing::new(
            title,
            absolutize(BASE, href),
            Some(location),
            SOURCE,
        ));
    }

    if found.is_empty() {
        // The airline is hiring (the page exists) but has no PNT offers
        return vec![RawListing::fully_staffed(
            "Aucune offre PNT disponible",
            URL,
            "Paris",
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
    fn test_offer_cards_parsed() {
        let html = r#"<html><body>
            <a href="/fr/la-compagnie/offres/copilote-a321neo">
                <h3>Copilote A321neo (H/F)</h3>
                <ul><li>CDI</li><li>Temps plein</li><li>Paris Orly</li></ul>
            </a>
            <a href="/fr/la-compagnie/offres/chef-de-cabine">
                <h3>Chef de cabine</h3>
                <ul><li>CDI</li><li>Paris</li></ul>
            </a>
        </body></html>"#;
        let found = parse(html);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Copilote A321neo (H/F)");
        assert_eq!(found[0].location.as_deref(), Some("Paris Orly"));
        assert_eq!(
            found[0].link,
            "https://careers.werecruit.io/fr/la-compagnie/offres/copilote-a321neo"
        );
    }

    #[test]
    fn test_no_pnt_offers_yields_full_marker() {
        let html = r#"<a href="/x"><h3>Agent d'escale</h3></a>"#;
        let found = parse(html);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, ListingStatus::Full);
        assert_eq!(found[0].title, "Aucune offre PNT disponible");
    }
}
