//! Shared parsing for the two ATS JSON APIs multiple operators hire through:
//! BambooHR careers lists and Workable v3 job feeds.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::classify;
use crate::geo;
use crate::model::RawListing;

#[derive(Debug, Deserialize)]
pub struct BambooCareersList {
    #[serde(default)]
    pub result: Vec<BambooOpening>,
}

#[derive(Debug, Deserialize)]
pub struct BambooOpening {
    // BambooHR serves ids as strings on some tenants and numbers on others
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(rename = "jobOpeningName", default)]
    pub job_opening_name: String,
    #[serde(default)]
    pub location: Option<BambooLocation>,
}

/// The location field is a `{city, state}` object on most tenants but plain
/// text on older ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BambooLocation {
    Structured {
        #[serde(default)]
        city: Option<String>,
        #[serde(default)]
        state: Option<String>,
    },
    Text(String),
}

impl BambooOpening {
    fn id_str(&self) -> String {
        match &self.id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    fn location_text(&self) -> Option<String> {
        match &self.location {
            Some(BambooLocation::Structured { city, state }) => city
                .clone()
                .filter(|c| !c.is_empty())
                .or_else(|| state.clone().filter(|s| !s.is_empty())),
            Some(BambooLocation::Text(t)) if !t.is_empty() => Some(t.clone()),
            _ => None,
        }
    }
}

/// Parse a BambooHR careers list, keeping pilot-role openings only.
///
/// An airport code embedded in the title (e.g. "PILOT PC12 LSGG") beats the
/// ATS location field; absent both, `default_location` applies.
pub fn parse_bamboo(
    body: &str,
    careers_base: &str,
    source: &'static str,
    positive: &[&str],
    exclusions: &[&str],
    default_location: &str,
) -> Result<Vec<RawListing>> {
    let payload: BambooCareersList =
        serde_json::from_str(body).context("Malformed BambooHR careers payload")?;

    let mut found = Vec::new();
    for opening in payload.result {
        let title = opening.job_opening_name.clone();
        if !classify::is_role_match(&title, positive, exclusions) {
            continue;
        }
        let location = geo::airport_place(&title)
            .map(str::to_string)
            .or_else(|| opening.location_text())
            .unwrap_or_else(|| default_location.to_string());
        let link = format!("{}/{}", careers_base.trim_end_matches('/'), opening.id_str());
        found.push(RawListing::new(title, link, Some(location), source));
    }
    Ok(found)
}

#[derive(Debug, Deserialize)]
pub struct WorkableJobs {
    #[serde(default)]
    pub results: Vec<WorkableJob>,
}

#[derive(Debug, Deserialize)]
pub struct WorkableJob {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub shortcode: Option<String>,
    #[serde(default)]
    pub location: Option<WorkableLocation>,
}

#[derive(Debug, Deserialize)]
pub struct WorkableLocation {
    #[serde(default)]
    pub city: Option<String>,
}

/// Parse a Workable v3 jobs feed, keeping pilot-role openings only.
pub fn parse_workable(
    body: &str,
    account: &str,
    source: &'static str,
    positive: &[&str],
    default_location: &str,
) -> Result<Vec<RawListing>> {
    let payload: WorkableJobs =
        serde_json::from_str(body).context("Malformed Workable jobs payload")?;

    let mut found = Vec::new();
    for job in payload.results {
        if !classify::contains_any(&job.title, positive) {
            continue;
        }
        let location = job
            .location
            .as_ref()
            .and_then(|l| l.city.clone())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| default_location.to_string());
        let link = format!(
            "https://apply.workable.com/{}/j/{}/",
            account,
            job.shortcode.as_deref().unwrap_or_default()
        );
        found.push(RawListing::new(job.title, link, Some(location), source));
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAMBOO_BODY: &str = r#"{
        "result": [
            {"id": 42, "jobOpeningName": "PILOT PC12 LSGG", "location": {"city": "", "state": "Canton de Vaud"}},
            {"id": "43", "jobOpeningName": "Captain PC-24", "location": {"city": "Luxembourg"}},
            {"id": 44, "jobOpeningName": "Ground Dispatch Agent", "location": {"city": "Luxembourg"}},
            {"id": 45, "jobOpeningName": "Sales Manager", "location": "Findel"}
        ]
    }"#;

    #[test]
    fn test_parse_bamboo_filters_and_resolves() {
        let found = parse_bamboo(
            BAMBOO_BODY,
            "https://jetfly.bamboohr.com/careers",
            "Jetfly",
            &["pilot", "captain"],
            &["ground", "dispatch", "sales"],
            "Luxembourg",
        )
        .unwrap();

        assert_eq!(found.len(), 2);
        // Airport code in the title beats the ATS location field
        assert_eq!(found[0].location.as_deref(), Some("Genève"));
        assert_eq!(found[0].link, "https://jetfly.bamboohr.com/careers/42");
        // No code: the ATS city applies
        assert_eq!(found[1].location.as_deref(), Some("Luxembourg"));
        assert_eq!(found[1].link, "https://jetfly.bamboohr.com/careers/43");
    }

    #[test]
    fn test_parse_bamboo_empty_result() {
        let found = parse_bamboo(r#"{"result": []}"#, "https://x/careers", "X", &["pilot"], &[], "Y").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_parse_bamboo_malformed_is_err() {
        assert!(parse_bamboo("<html>maintenance</html>", "https://x", "X", &["pilot"], &[], "Y").is_err());
    }

    #[test]
    fn test_parse_workable() {
        let body = r#"{
            "results": [
                {"title": "First Officer Phenom 300", "shortcode": "AB12CD", "location": {"city": "Le Bourget"}},
                {"title": "Crew Planner", "shortcode": "EF34GH", "location": {"city": "Paris"}}
            ]
        }"#;
        let found = parse_workable(body, "platoon-aviation", "Platoon Aviation", &["pilot", "captain", "first officer"], "Le Bourget").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].link, "https://apply.workable.com/platoon-aviation/j/AB12CD/");
        assert_eq!(found[0].location.as_deref(), Some("Le Bourget"));
    }
}
