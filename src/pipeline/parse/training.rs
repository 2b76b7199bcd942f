use chrono::Duration;

use crate::error::{TrackerError, ValidationError};
use crate::pipeline::parse::{parse_duration_field, parse_steps, split_fields, RecordParser};
use crate::types::activity::TrainingRecord;

const FIELDS: usize = 3;

/// Parses `steps,activity,duration` training records.
///
/// The step count is only checked for being an integer here.
pub struct TrainingRecordParser;

impl RecordParser for TrainingRecordParser {
    type Record = TrainingRecord;

    fn parse(&self, raw: &str) -> Result<TrainingRecord, TrackerError> {
        let fields = split_fields(raw, FIELDS)?;

        let steps = parse_steps(fields[0])?;

        let duration = parse_duration_field(fields[2])?;
        if duration <= Duration::zero() {
            return Err(ValidationError::Duration(duration).into());
        }

        let activity = fields[1];
        if activity.trim().is_empty() {
            return Err(ValidationError::EmptyActivity.into());
        }

        Ok(TrainingRecord {
            steps,
            activity: activity.to_string(),
            duration,
        })
    }
}
