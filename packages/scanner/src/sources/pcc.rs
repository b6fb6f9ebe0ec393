//! Pilot Career Center - aggregator page for Europe/UK pilot jobs. Almost
//! everything on the page is an anchor, so a trash lexicon filters out the
//! site's own navigation (training, CV services, advertising).

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::classify;
use crate::client::fetch_text;
use crate::model::RawListing;
use crate::source::{absolutize, JobSource};

const SOURCE: &str = "PCC";
const URL: &str = "https://pilotcareercenter.com/PILOT-JOB-NAVIGATOR/EUROPE-UK/";
const BASE: &str = "https://pilotcareercenter.com";

const PILOT_KEYWORDS: &[&str] = &["first officer", "f/o", "pilot", "low hour"];
const TRASH: &[&str] = &[
    "add pilot",
    "training",
    "resume",
    "cv",
    "interview",
    "help",
    "post",
    "advertise",
    "payscale",
    "roadshows",
];
const TITLE_MIN: usize = 10;

pub struct PilotCareerCenter;

#[async_trait]
impl JobSource for PilotCareerCenter {
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
        if !classify::is_role_match(&text, PILOT_KEYWORDS, TRASH) || text.len() <= TITLE_MIN {
            continue;
        }
        let href = element.value().attr("href").unwrap_or_default();
        found.push(RawListing::new(
            text,
            absolutize(BASE, href),
            Some("Europe".to_string()),
            SOURCE,
        ));
    }
    found
}
