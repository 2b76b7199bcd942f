use chrono::Duration;

use crate::error::TrackerError;
use crate::pipeline::metrics;
use crate::pipeline::parse::{RecordParser, StepRecordParser, TrainingRecordParser};
use crate::types::activity::{duration_hours, ActivityProfile, BodyProfile, MetricsResult};

/// Rounds half away from zero to two decimals, so values stored just below a
/// midpoint (1.575 as 1.57499…) still print rounded up.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_day_summary(steps: i64, distance_km: f64, calories_kcal: f64) -> String {
    format!(
        "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.",
        steps,
        round2(distance_km),
        round2(calories_kcal)
    )
}

pub fn format_training_report(
    profile: ActivityProfile,
    duration: Duration,
    metrics: &MetricsResult,
) -> String {
    format!(
        "Тип тренировки: {}\n\
         Длительность: {:.2} ч.\n\
         Дистанция: {:.2} км.\n\
         Скорость: {:.2} км/ч\n\
         Сожгли калорий: {:.2}",
        profile.display_name(),
        round2(duration_hours(&duration)),
        round2(metrics.distance_km),
        round2(metrics.speed_kmh),
        round2(metrics.calories_kcal)
    )
}

/// Resolves `activity`, computes its metrics and renders the five-line
/// training report. An unknown label is reported before any calorie check.
pub fn compose_report(
    activity: &str,
    steps: i64,
    body: &BodyProfile,
    duration: Duration,
) -> Result<String, TrackerError> {
    let profile = resolve_profile(activity)?;

    let result = metrics::training_metrics(profile, steps, body, duration).map_err(|err| {
        tracing::warn!(
            activity = ?profile,
            error = %err,
            "could not compute training calories"
        );
        TrackerError::from(err)
    })?;

    tracing::debug!(
        "Training summary: {:?}, {:.2} km, {:.2} km/h, {:.2} kcal",
        profile,
        result.distance_km,
        result.speed_kmh,
        result.calories_kcal
    );

    Ok(format_training_report(profile, duration, &result))
}

/// Day summary for a `steps,duration` record.
///
/// Any parse failure is logged and yields an empty string. A calorie
/// computation the formulas reject is logged and reported as zero.
pub fn day_activity_summary(record: &str, body: BodyProfile) -> String {
    let parsed = match StepRecordParser.parse(record) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(record, error = %err, "rejected day record");
            return String::new();
        }
    };

    let distance_km = metrics::distance_km(parsed.steps, metrics::DAY_STEP_LENGTH_M);
    let calories_kcal = metrics::walking_calories(parsed.steps, &body, parsed.duration)
        .unwrap_or_else(|err| {
            tracing::warn!(record, error = %err, "could not compute day calories");
            0.0
        });

    tracing::debug!(
        "Day summary: {} steps, {:.2} km, {:.2} kcal",
        parsed.steps,
        distance_km,
        calories_kcal
    );

    format_day_summary(parsed.steps, distance_km, calories_kcal)
}

/// Training report for a `steps,activity,duration` record.
///
/// Every error is logged where it is detected and returned to the caller.
pub fn training_summary(record: &str, body: BodyProfile) -> Result<String, TrackerError> {
    let parsed = TrainingRecordParser.parse(record).map_err(|err| {
        tracing::warn!(record, error = %err, "rejected training record");
        err
    })?;

    metrics::validate_body(&body).map_err(|err| {
        tracing::warn!(
            weight_kg = body.weight_kg,
            height_m = body.height_m,
            error = %err,
            "invalid body profile"
        );
        TrackerError::from(err)
    })?;

    compose_report(&parsed.activity, parsed.steps, &body, parsed.duration)
}

fn resolve_profile(activity: &str) -> Result<ActivityProfile, TrackerError> {
    ActivityProfile::from_label(activity).ok_or_else(|| {
        let err = TrackerError::UnknownActivity(activity.to_string());
        tracing::warn!(error = %err, "unrecognized activity");
        err
    })
}
