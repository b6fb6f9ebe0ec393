//! Pan Européenne Air Service - Chambéry-based charter operator. Offers are
//! announced as text fragments anywhere on the landing page, so the parse
//! scans broadly and relies on length bounds to drop page-level noise.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::classify;
use crate::client::fetch_text;
use crate::model::RawListing;
use crate::source::{absolutize, JobSource};

const SOURCE: &str = "Pan Européenne";
const URL: &str = "https://www.paneuropeenne.com/en/";
const BASE: &str = "https://www.paneuropeenne.com";

const PILOT_KEYWORDS: &[&str] = &["pilot", "captain", "first officer", "f/o", "pnt"];
const NO_VACANCY_PHRASE: &str = "no employment at the moment";
const TITLE_MIN: usize = 10;
const TITLE_MAX: usize = 200;

pub struct PanEuropeenne;

#[async_trait]
impl JobSource for PanEuropeenne {
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
    let selector = Selector::parse("h2, h3, h4, div, p, li, a").unwrap();

    let mut found = Vec::new();
    let mut seen = HashSet::new();

    for element in document.select(&selector) {
        let text = element.text().collect::<String>().trim().to_lowercase();
        if !classify::contains_any(&text, PILOT_KEYWORDS)
            || !classify::within_bounds(&text, TITLE_MIN, TITLE_MAX)
            || text.contains("no employment")
        {
            continue;
        }
        let link = match element.value().attr("href") {
            Some(href) if element.value().name() == "a" => absolutize(BASE, href),
            _ => URL.to_string(),
        };
        if seen.insert(text.clone()) {
            found.push(RawListing::new(
                classify::capitalize(&text),
                link,
                Some("Chambéry".to_string()),
                SOURCE,
            ));
        }
    }

    if found.is_empty() {
        let page_text = document.root_element().text().collect::<String>().to_lowercase();
        if page_text.contains(NO_VACANCY_PHRASE) {
            return vec![RawListing::fully_staffed(
                "Effectifs complets",
                URL,
                "Chambéry",
                SOURCE,
            )];
        }
    }

    found
}
