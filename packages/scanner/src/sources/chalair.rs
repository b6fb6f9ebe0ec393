//! Chalair Aviation - French regional airline. Offer links carry the role
//! either in the anchor text or in the href itself; the same offer is often
//! linked twice, so dedup is by URL.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::classify;
use crate::client::fetch_text;
use crate::model::RawListing;
use crate::source::{absolutize, JobSource};

const SOURCE: &str = "Chalair";
const URL: &str = "https://www.chalair.fr/offres-emplois";
const BASE: &str = "https://www.chalair.fr";

const KEYWORDS: &[&str] = &["candidature", "pnt", "pilote", "captain", "recrutement"];

pub struct Chalair;

#[async_trait]
impl JobSource for Chalair {
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
    let mut seen = HashSet::new();

    for element in document.select(&selector) {
        let text = element.text().collect::<String>().trim().to_lowercase();
        let href = element.value().attr("href").unwrap_or_default();
        let href_lower = href.to_lowercase();

        if !classify::contains_any(&text, KEYWORDS) && !classify::contains_any(&href_lower, KEYWORDS)
        {
            continue;
        }
        let link = absolutize(BASE, href);
        if text.len() > 5 && seen.insert(link.clone()) {
            found.push(RawListing::new(
                classify::capitalize(&text),
                link,
                Some("France".to_string()),
                SOURCE,
            ));
        }
    }

    found
}
