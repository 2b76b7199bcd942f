use crate::error::{TrackerError, ValidationError};
use crate::pipeline::parse::{parse_duration_field, parse_steps, split_fields, RecordParser};
use crate::types::activity::StepRecord;

const FIELDS: usize = 2;

/// Parses `steps,duration` records from the daily step counter.
pub struct StepRecordParser;

impl RecordParser for StepRecordParser {
    type Record = StepRecord;

    fn parse(&self, raw: &str) -> Result<StepRecord, TrackerError> {
        let fields = split_fields(raw, FIELDS)?;

        let steps = parse_steps(fields[0])?;
        if steps <= 0 {
            return Err(ValidationError::Steps(steps).into());
        }

        let duration = parse_duration_field(fields[1])?;

        Ok(StepRecord { steps, duration })
    }
}
