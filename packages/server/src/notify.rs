//! Discord notification: batching a snapshot into one webhook message.
//!
//! Message building is pure and separately testable; delivery is behind the
//! [`Notifier`] trait so the orchestrator can log a failed send without it
//! ever affecting run state or snapshot persistence.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use scanner::{Listing, ListingStatus};
use serde::Serialize;

use crate::store::Snapshot;

/// Discord caps fields per embed at 25 and embeds per message at 10.
/// Truncation beyond either cap is silent.
pub const MAX_EMBED_FIELDS: usize = 25;
pub const MAX_EMBEDS: usize = 10;

const FULL_EMBED_COLOR: u32 = 0x2f3136;
const ACTIVE_EMBED_COLOR: u32 = 0xf5a623;

#[derive(Debug, Serialize)]
pub struct DiscordMessage {
    pub username: String,
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Group the snapshot by source (first-seen order) into one message: a
/// summary content line plus one embed per source - a compact
/// fully-staffed block, or up to [`MAX_EMBED_FIELDS`] individual offers.
pub fn build_message(snapshot: &Snapshot) -> DiscordMessage {
    let mut groups: Vec<(&str, Vec<&Listing>)> = Vec::new();
    for listing in &snapshot.jobs {
        match groups.iter_mut().find(|(source, _)| *source == listing.source) {
            Some((_, items)) => items.push(listing),
            None => groups.push((listing.source.as_str(), vec![listing])),
        }
    }

    let mut embeds = Vec::new();
    for (source, listings) in groups {
        if embeds.len() >= MAX_EMBEDS {
            break;
        }
        let title = format!("🏢 {}", source.to_uppercase());
        if listings[0].status == ListingStatus::Full {
            embeds.push(Embed {
                title,
                color: FULL_EMBED_COLOR,
                description: Some("🔴 **Effectifs complets.**".to_string()),
                fields: Vec::new(),
            });
        } else {
            let fields = listings
                .iter()
                .take(MAX_EMBED_FIELDS)
                .map(|listing| EmbedField {
                    name: format!("✅ {}", listing.title),
                    value: format!("📍 {}\n[Voir l'offre]({})", listing.location, listing.link),
                    inline: false,
                })
                .collect();
            embeds.push(Embed {
                title,
                color: ACTIVE_EMBED_COLOR,
                description: None,
                fields,
            });
        }
    }

    let scanned_at = snapshot.last_scan.unwrap_or_else(Utc::now);
    let next_scan = snapshot
        .next_scan
        .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "N/C".to_string());

    let content = format!(
        "📝 **VEILLE AÉRONAUTIQUE — {}**\n✅ {} offre(s) active(s) | 🔴 {} compagnie(s) complète(s)\n📅 Prochain scan : {}",
        scanned_at.format("%d/%m/%Y %H:%M"),
        snapshot.active_count(),
        snapshot.full_count(),
        next_scan,
    );

    DiscordMessage {
        username: "Aero Job Monitor".to_string(),
        content,
        embeds,
    }
}

/// Outbound notification channel. Send failures are returned, never
/// swallowed here - the caller decides to log and move on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &DiscordMessage) -> Result<()>;
}

pub struct DiscordWebhook {
    url: String,
    client: reqwest::Client,
}

impl DiscordWebhook {
    pub fn new(url: String, client: reqwest::Client) -> Self {
        Self { url, client }
    }
}

#[async_trait]
impl Notifier for DiscordWebhook {
    async fn send(&self, message: &DiscordMessage) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(message)
            .send()
            .await
            .context("Discord webhook request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Discord webhook returned HTTP {status}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanner::RawListing;

    fn snapshot_from(raw: Vec<RawListing>) -> Snapshot {
        let now = Utc::now();
        Snapshot {
            jobs: scanner::normalize(raw),
            last_scan: Some(now),
            next_scan: Some(now + chrono::Duration::hours(12)),
        }
    }

    #[test]
    fn test_three_sources_three_blocks() {
        let snapshot = snapshot_from(vec![
            RawListing::new("Captain PC-24", "https://x/1", Some("Luxembourg".into()), "Jetfly"),
            RawListing::new("First Officer PC-12", "https://x/2", Some("Genève".into()), "Jetfly"),
            RawListing::fully_staffed("Effectifs complets", "https://x/3", "Lyon", "Oyonnair"),
            RawListing::new("Captain Global 6000", "https://x/4", Some("Paris".into()), "NetJets Europe"),
        ]);

        let message = build_message(&snapshot);
        assert_eq!(message.embeds.len(), 3);

        // Active blocks carry fields, the full block carries a description
        assert_eq!(message.embeds[0].title, "🏢 JETFLY");
        assert_eq!(message.embeds[0].fields.len(), 2);
        assert!(message.embeds[0].description.is_none());

        assert_eq!(message.embeds[1].title, "🏢 OYONNAIR");
        assert!(message.embeds[1].fields.is_empty());
        assert!(message.embeds[1].description.as_deref().unwrap().contains("Effectifs complets"));

        assert_eq!(message.embeds[2].fields.len(), 1);

        assert!(message.content.contains("3 offre(s) active(s)"));
        assert!(message.content.contains("1 compagnie(s) complète(s)"));
    }

    #[test]
    fn test_field_cap_truncates_silently() {
        let raw = (0..40)
            .map(|i| RawListing::new(format!("Pilot {i}"), format!("https://x/{i}"), None, "PCC"))
            .collect();
        let message = build_message(&snapshot_from(raw));
        assert_eq!(message.embeds.len(), 1);
        assert_eq!(message.embeds[0].fields.len(), MAX_EMBED_FIELDS);
    }

    #[test]
    fn test_embed_cap_truncates_silently() {
        // 12 distinct single-listing sources, only 10 blocks survive
        let sources: &[&str] = &[
            "S0", "S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9", "S10", "S11",
        ];
        let raw = sources
            .iter()
            .map(|s| RawListing::new("Pilot", "https://x/1", None, *s))
            .collect();
        let message = build_message(&snapshot_from(raw));
        assert_eq!(message.embeds.len(), MAX_EMBEDS);
    }

    #[test]
    fn test_source_grouping_preserves_first_seen_order() {
        let snapshot = snapshot_from(vec![
            RawListing::new("Pilot A", "https://x/1", None, "B Source"),
            RawListing::new("Pilot B", "https://x/2", None, "A Source"),
            RawListing::new("Pilot C", "https://x/3", None, "B Source"),
        ]);
        let message = build_message(&snapshot);
        assert_eq!(message.embeds[0].title, "🏢 B SOURCE");
        assert_eq!(message.embeds[0].fields.len(), 2);
        assert_eq!(message.embeds[1].title, "🏢 A SOURCE");
    }
}
