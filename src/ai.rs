//! Boundary to the external AI-summarization collaborator.
//!
//! The collaborator receives a condensed project summary and returns
//! free-text fields. Every failure mode here — no endpoint configured,
//! network error, timeout, malformed body, missing keys — degrades to empty
//! strings. A snapshot is never blocked on this call.

use crate::core::ProjectSnapshot;
use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

pub const ENDPOINT_ENV: &str = "REPOLENS_AI_URL";
pub const API_KEY_ENV: &str = "REPOLENS_AI_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The condensed summary sent to the collaborator.
#[derive(Clone, Debug, Serialize)]
pub struct CondensedSummary {
    pub project_type: String,
    pub total_files: usize,
    pub total_lines_of_code: usize,
    pub technologies: Vec<String>,
    pub frameworks: Vec<String>,
    pub languages: Vec<String>,
    pub dependencies: BTreeMap<String, usize>,
}

impl CondensedSummary {
    pub fn from_snapshot(snapshot: &ProjectSnapshot) -> Self {
        Self {
            project_type: snapshot.project_type.clone(),
            total_files: snapshot.total_files,
            total_lines_of_code: snapshot.total_lines_of_code,
            technologies: snapshot.technologies.clone(),
            frameworks: snapshot.frameworks.clone(),
            languages: snapshot.languages.clone(),
            dependencies: snapshot
                .dependencies
                .iter()
                .map(|(manifest, record)| (manifest.clone(), record.total_count))
                .collect(),
        }
    }
}

/// Free-text fields returned by the collaborator; absent or malformed keys
/// stay empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AiInsights {
    pub summary: String,
    pub architecture: String,
    pub security: String,
    pub performance: String,
}

pub struct AiClient {
    endpoint: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl AiClient {
    /// Build a client from the environment; `None` when no endpoint is
    /// configured, which callers treat as "augmentation skipped".
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var(ENDPOINT_ENV).ok()?;
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let client = match reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
        {
            Ok(client) => client,
            Err(err) => {
                warn!("could not build AI client: {err}");
                return None;
            }
        };
        Some(Self {
            endpoint,
            api_key,
            client,
        })
    }

    /// Send the condensed summary and map the response into insight fields.
    /// Never fails: any problem returns empty insights.
    pub fn augment(&self, summary: &CondensedSummary) -> AiInsights {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(summary)
            .send();

        let body: serde_json::Value = match response.and_then(|r| r.json()) {
            Ok(body) => body,
            Err(err) => {
                warn!("AI augmentation failed: {err}");
                return AiInsights::default();
            }
        };

        AiInsights {
            summary: text_field(&body, "summary"),
            architecture: text_field(&body, "architecture_assessment"),
            security: text_field(&body, "security_analysis"),
            performance: text_field(&body, "performance_analysis"),
        }
    }
}

fn text_field(body: &serde_json::Value, key: &str) -> String {
    body.get(key)
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Copy insight fields onto the snapshot; empty values are written as-is so
/// the schema fields are always present.
pub fn apply(snapshot: &mut ProjectSnapshot, insights: AiInsights) {
    snapshot.ai_summary = insights.summary;
    snapshot.ai_architecture_analysis = insights.architecture;
    snapshot.ai_security_assessment = insights.security;
    snapshot.ai_performance_analysis = insights.performance;
}
