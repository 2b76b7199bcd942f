mod day;
pub mod duration;
mod training;

pub use day::StepRecordParser;
pub use training::TrainingRecordParser;

use crate::error::{ParseError, TrackerError};

pub trait RecordParser {
    type Record;

    fn parse(&self, raw: &str) -> Result<Self::Record, TrackerError>;
}

/// Splits `raw` on every comma and requires exactly `expected` fields.
/// Fields are not trimmed.
fn split_fields(raw: &str, expected: usize) -> Result<Vec<&str>, TrackerError> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != expected {
        return Err(TrackerError::Format {
            expected,
            actual: parts.len(),
        });
    }
    Ok(parts)
}

fn parse_steps(value: &str) -> Result<i64, ParseError> {
    value.parse::<i64>().map_err(|source| ParseError::Steps {
        value: value.to_string(),
        source,
    })
}

fn parse_duration_field(value: &str) -> Result<chrono::Duration, ParseError> {
    duration::parse_duration(value).map_err(|source| ParseError::Duration {
        value: value.to_string(),
        source,
    })
}
