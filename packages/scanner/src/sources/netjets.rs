//! NetJets Europe - SAP SuccessFactors search results rendered as a plain
//! HTML table: one row per opening, link in the first cell, location in the
//! second.

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::classify;
use crate::client::fetch_text;
use crate::model::RawListing;
use crate::source::{absolutize, JobSource};

const SOURCE: &str = "NetJets Europe";
const URL: &str = "https://netjets.jobs.hr.cloud.sap/europe/search/?createNewAlert=false&q=pilot";
const BASE: &str = "https://netjets.jobs.hr.cloud.sap";

const PILOT_KEYWORDS: &[&str] = &[
    "pilot",
    "captain",
    "first officer",
    "second in command",
    "f/o",
    "pic",
    "sic",
];

pub struct NetJets;

#[async_trait]
impl JobSource for NetJets {
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
    let row_selector = Selector::parse("tr").unwrap();
    let link_selector = Selector::parse("a[href]").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut found = Vec::new();
    for row in document.select(&row_selector) {
        let Some(link) = row.select(&link_selector).next() else {
            continue;
        };
        let title = link.text().collect::<String>().trim().to_string();
        if !classify::contains_any(&title, PILOT_KEYWORDS) {
            continue;
        }
        let href = absolutize(BASE, link.value().attr("href").unwrap_or_default());
        let location = row
            .select(&cell_selector)
            .nth(1)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .filter(|loc| !loc.is_empty());
        found.push(RawListing::new(title, href, location, SOURCE));
    }
    found
}
