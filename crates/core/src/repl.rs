//! Interactive dispatch loop
//!
//! Reads utterances until the "quit" sentinel, classifies each one, and
//! routes the top intent to a calendar handler. The classifier and both
//! I/O ends are injected so the loop runs against stubs in tests, and a
//! failed request only costs its own iteration.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::clock;
use crate::clu::Classifier;
use crate::types::{Intent, Prediction};

/// Prompt printed before every read
pub const PROMPT: &str = "Enter some text ('quit' to stop)";

/// Case-insensitive token that ends the loop
const SENTINEL: &str = "quit";

/// Outcome of one input line
#[derive(Debug, PartialEq, Eq)]
pub enum Turn {
    /// Print this response and keep reading
    Respond(String),
    /// Blank input; just re-prompt
    Skip,
    /// Sentinel received; stop the loop
    Quit,
}

/// Handle a single line: sentinel check, classification, dispatch.
/// Classifier errors become the response text, never a loop exit.
pub fn handle_line(classifier: &impl Classifier, line: &str) -> Turn {
    let text = line.trim();
    if text.is_empty() {
        return Turn::Skip;
    }
    if text.eq_ignore_ascii_case(SENTINEL) {
        return Turn::Quit;
    }

    match classifier.classify(text) {
        Ok(prediction) => Turn::Respond(dispatch(&prediction)),
        Err(e) => Turn::Respond(format!("Error: {:#}", e)),
    }
}

/// Route the top intent to its handler, or to a clarification prompt when
/// the required entity is missing
pub fn dispatch(prediction: &Prediction) -> String {
    match prediction.intent() {
        Intent::GetTime => match prediction.first_entity("Location") {
            Some(entity) => clock::time_in(&entity.text),
            None => "Please specify a location.".to_string(),
        },
        Intent::GetDate => match prediction.first_entity("Day") {
            Some(entity) => clock::date_for(&entity.text),
            None => "Please specify a day.".to_string(),
        },
        Intent::GetDay => match prediction.first_entity("Date") {
            Some(entity) => clock::day_of(&entity.text),
            None => "Please specify a date.".to_string(),
        },
        Intent::Unknown => "Sorry, I didn't understand that.".to_string(),
    }
}

/// Run the read-classify-dispatch loop until the sentinel or end of input
pub fn run(
    classifier: &impl Classifier,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        writeln!(output, "\n{}", PROMPT)?;

        let Some(line) = lines.next() else {
            break;
        };

        match handle_line(classifier, &line?) {
            Turn::Respond(text) => writeln!(output, "{}", text)?,
            Turn::Skip => {}
            Turn::Quit => break,
        }
    }
    Ok(())
}
