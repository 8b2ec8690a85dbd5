//! CLU response models and the intent taxonomy
//!
//! These structs mirror the JSON the conversational-language service
//! returns: a `result` wrapper around the echoed query and a `prediction`
//! carrying the top intent, the scored intent list, and extracted entities.

use serde::Deserialize;

/// Intents the dispatch loop understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    GetTime,
    GetDate,
    GetDay,
    Unknown,
}

impl Intent {
    /// Parse the service's `topIntent` string (case-insensitive)
    pub fn from_top_intent(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "gettime" => Intent::GetTime,
            "getdate" => Intent::GetDate,
            "getday" => Intent::GetDay,
            _ => Intent::Unknown,
        }
    }
}

/// Top-level body returned by the prediction endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub result: Option<PredictionResult>,
}

/// Query echo plus the prediction payload
///
/// `prediction` can be absent even on an HTTP success; callers treat that
/// as a recoverable "prediction unavailable" condition.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub prediction: Option<Prediction>,
}

/// The classification result: top intent, scored intents, entities
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(default)]
    pub top_intent: String,

    #[serde(default)]
    pub project_kind: Option<String>,

    #[serde(default)]
    pub intents: Vec<IntentScore>,

    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Prediction {
    /// The typed top intent
    pub fn intent(&self) -> Intent {
        Intent::from_top_intent(&self.top_intent)
    }

    /// First entity in response order whose category matches exactly
    /// (case-sensitive, per the service's category naming)
    pub fn first_entity(&self, category: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.category == category)
    }
}

/// One scored intent candidate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentScore {
    pub category: String,

    #[serde(default)]
    pub confidence_score: f32,
}

/// A labeled span extracted from the utterance
///
/// `offset` and `length` are character positions into the original query
/// text and are not validated further here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub category: String,

    pub text: String,

    #[serde(default)]
    pub offset: usize,

    #[serde(default)]
    pub length: usize,

    #[serde(default)]
    pub confidence_score: f32,
}
