//! Conversational clock client core library
//!
//! This crate provides the pieces behind the clockbot CLI:
//! - Settings loading (TOML file and environment)
//! - CLU prediction gateway (request building, HTTP call, response models)
//! - Calendar utilities (time by location, weekday and date arithmetic)
//! - The interactive dispatch loop

pub mod clock;
pub mod clu;
pub mod config;
pub mod repl;
pub mod types;

// Re-export commonly used types at crate root
pub use clu::{Classifier, CluClient};
pub use config::Settings;
pub use repl::{dispatch, handle_line, run, Turn, PROMPT};
pub use types::{Entity, Intent, IntentScore, Prediction, PredictionResponse, PredictionResult};
