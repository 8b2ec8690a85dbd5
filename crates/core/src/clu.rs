//! CLU prediction gateway
//!
//! Builds the Conversation analysis request, posts it to the configured
//! endpoint with the subscription-key header, and parses the response into
//! a [`Prediction`]. The [`Classifier`] trait is the seam the dispatch
//! loop depends on, so tests run against canned predictions instead of a
//! live endpoint.

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;

use crate::config::Settings;
use crate::types::{Prediction, PredictionResponse};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Bound on the outbound call; one slow request must not hang the loop
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Capability interface for intent classification
pub trait Classifier {
    /// Classify one utterance into a prediction
    fn classify(&self, text: &str) -> Result<Prediction>;
}

// ============================================================================
// Request Body
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictionRequest<'a> {
    kind: &'static str,
    analysis_input: AnalysisInput<'a>,
    parameters: Parameters<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisInput<'a> {
    conversation_item: ConversationItem<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversationItem<'a> {
    id: &'static str,
    text: &'a str,
    modality: &'static str,
    language: &'static str,
    participant_id: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters<'a> {
    project_name: &'a str,
    verbose: bool,
    deployment_name: &'a str,
    string_index_type: &'static str,
}

impl<'a> PredictionRequest<'a> {
    fn new(settings: &'a Settings, text: &'a str) -> Self {
        Self {
            kind: "Conversation",
            analysis_input: AnalysisInput {
                conversation_item: ConversationItem {
                    id: "1",
                    text,
                    modality: "text",
                    language: "en",
                    participant_id: "1",
                },
            },
            parameters: Parameters {
                project_name: &settings.project_name,
                verbose: true,
                deployment_name: &settings.deployment_name,
                string_index_type: "TextElement_V8",
            },
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP-backed [`Classifier`] for the CLU prediction endpoint
pub struct CluClient {
    client: Client,
    settings: Settings,
    verbose: bool,
}

impl CluClient {
    /// Build the client; the reqwest client is reused across calls
    pub fn new(settings: Settings, verbose: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            settings,
            verbose,
        })
    }
}

impl Classifier for CluClient {
    fn classify(&self, text: &str) -> Result<Prediction> {
        let body = PredictionRequest::new(&self.settings, text);

        if self.verbose {
            eprintln!("DEBUG: POST {}", self.settings.endpoint);
        }

        let response = self
            .client
            .post(&self.settings.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, &self.settings.api_key)
            .json(&body)
            .send()
            .context("Prediction request failed")?;

        let status = response.status();
        let raw = response.text().context("Failed to read response body")?;

        if !status.is_success() {
            return Err(anyhow!("Prediction service error {}: {}", status, raw));
        }

        if self.verbose {
            eprintln!("DEBUG: API response: {}", raw);
        }

        let parsed: PredictionResponse =
            serde_json::from_str(&raw).context("Failed to parse prediction response")?;

        parsed
            .result
            .and_then(|r| r.prediction)
            .ok_or_else(|| anyhow!("Prediction unavailable in service response"))
    }
}

// ============================================================================
// Tests
// ============================================================================
