//! Platoon Aviation - Le Bourget business jets, React site with no static
//! offer markup. Retrieval strategies are tried in priority order: the
//! BambooHR API, then Workable, then a scrape of the static career page.
//! The first strategy that yields at least one listing wins.

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::debug;

use crate::classify;
use crate::client::fetch_text;
use crate::model::RawListing;
use crate::source::{absolutize, JobSource};
use crate::sources::ats;

const SOURCE: &str = "Platoon Aviation";
const BAMBOO_URL: &str = "https://platoon-aviation.bamboohr.com/careers/list";
const BAMBOO_BASE: &str = "https://platoon-aviation.bamboohr.com/careers";
const WORKABLE_URL: &str = "https://apply.workable.com/api/v3/accounts/platoon-aviation/jobs/";
const WORKABLE_ACCOUNT: &str = "platoon-aviation";
const CAREER_URL: &str = "https://www.flyplatoon.com/career";
const BASE: &str = "https://www.flyplatoon.com";

const PILOT_KEYWORDS: &[&str] = &["pilot", "captain", "first officer", "f/o"];
const PAGE_KEYWORDS: &[&str] = &["pilot", "captain", "first officer", "commandant"];
const NO_VACANCY: &[&str] = &["no position", "no opening", "pas de poste", "aucune offre"];

pub struct Platoon;

#[async_trait]
impl JobSource for Platoon {
    fn name(&self) -> &'static str {
        SOURCE
    }

    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<RawListing>> {
        // Same ATS stack as Jetfly
        match try_bamboo(client).await {
            Ok(found) if !found.is_empty() => return Ok(found),
            Ok(_) => {}
            Err(e) => debug!(source = SOURCE, error = %e, "BambooHR strategy failed"),
        }

        match try_workable(client).await {
            Ok(found) if !found.is_empty() => return Ok(found),
            Ok(_) => {}
            Err(e) => debug!(source = SOURCE, error = %e, "Workable strategy failed"),
        }

        // Last resort: the static page, which may be the JS shell only
        let body = fetch_text(client, CAREER_URL).await?;
        Ok(parse_career_page(&body))
    }
}

async fn try_bamboo(client: &reqwest::Client) -> Result<Vec<RawListing>> {
    let body = fetch_text(client, BAMBOO_URL).await?;
    ats::parse_bamboo(&body, BAMBOO_BASE, SOURCE, PILOT_KEYWORDS, &[], "Le Bourget")
}

async fn try_workable(client: &reqwest::Client) -> Result<Vec<RawListing>> {
    let body = fetch_text(client, WORKABLE_URL).await?;
    ats::parse_workable(
        &body,
        WORKABLE_ACCOUNT,
        SOURCE,
        &["pilot", "captain", "first officer"],
        "Le Bourget",
    )
}

pub fn parse_career_page(html: &str) -> Vec<RawListing> {
    let document = Html::parse_document(html);
    let page_text = document.root_element().text().collect::<String>().to_lowercase();

    if NO_VACANCY.iter().any(|phrase| page_text.contains(phrase)) {
        return vec![RawListing::fully_staffed(
            "Aucune offre disponible",
            CAREER_URL,
            "Le Bourget",
            SOURCE,
        )];
    }

    let selector = Selector::parse("a[href]").unwrap();
    let mut found = Vec::new();
    for element in document.select(&selector) {
        let text = element.text().collect::<String>().trim().to_string();
        if !classify::contains_any(&text, PAGE_KEYWORDS) {
            continue;
        }
        let href = element.value().attr("href").unwrap_or_default();
        found.push(RawListing::new(
            text,
            absolutize(BASE, href),
            Some("Le Bourget".to_string()),
            SOURCE,
        ));
    }
    found
}
