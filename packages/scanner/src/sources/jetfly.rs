//! Jetfly - Luxembourg fractional-ownership operator, hiring through a
//! BambooHR careers list.

use anyhow::Result;
use async_trait::async_trait;

use crate::client::fetch_text;
use crate::model::RawListing;
use crate::source::JobSource;
use crate::sources::ats;

const SOURCE: &str = "Jetfly";
const LIST_URL: &str = "https://jetfly.bamboohr.com/careers/list";
const CAREERS_BASE: &str = "https://jetfly.bamboohr.com/careers";

const PILOT_KEYWORDS: &[&str] = &["pilot", "captain", "first officer", "f/o"];
// Ground and back-office roles the same ATS list mixes in
const OPS_EXCLUSIONS: &[&str] = &[
    "ground",
    "dispatch",
    "ops",
    "sales",
    "back office",
    "accountant",
    "mechanic",
    "technician",
];

pub struct Jetfly;

#[async_trait]
impl JobSource for Jetfly {
    fn name(&self) -> &'static str {
        SOURCE
    }

    async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<RawListing>> {
        let body = fetch_text(client, LIST_URL).await?;
        ats::parse_bamboo(
            &body,
            CAREERS_BASE,
            SOURCE,
            PILOT_KEYWORDS,
            OPS_EXCLUSIONS,
            "Luxembourg",
        )
    }
}
