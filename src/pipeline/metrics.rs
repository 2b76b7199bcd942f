use chrono::Duration;

use crate::error::ValidationError;
use crate::types::activity::{
    duration_hours, duration_minutes, ActivityProfile, BodyProfile, MetricsResult,
};

/// Fixed stride used by the daily step summary, in metres.
pub const DAY_STEP_LENGTH_M: f64 = 0.65;
/// Stride as a fraction of body height, used by the training formulas.
pub const STEP_LENGTH_HEIGHT_COEFFICIENT: f64 = 0.45;
/// Walking burns this share of the running formula.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

pub fn stride_length(height_m: f64, coefficient: f64) -> f64 {
    height_m * coefficient
}

/// Distance covered by `steps` strides, clamped to zero for non-positive inputs.
pub fn distance_km(steps: i64, stride_length_m: f64) -> f64 {
    if steps <= 0 || stride_length_m <= 0.0 {
        return 0.0;
    }
    steps as f64 * stride_length_m / M_IN_KM
}

/// Distance with the height-proportional stride.
pub fn training_distance_km(steps: i64, height_m: f64) -> f64 {
    distance_km(steps, stride_length(height_m, STEP_LENGTH_HEIGHT_COEFFICIENT))
}

/// Mean speed over `duration`; zero whenever any input is non-positive.
pub fn mean_speed_kmh(steps: i64, height_m: f64, duration: Duration) -> f64 {
    if duration <= Duration::zero() || steps <= 0 || height_m <= 0.0 {
        return 0.0;
    }

    let distance = training_distance_km(steps, height_m);
    if distance <= 0.0 {
        return 0.0;
    }

    distance / duration_hours(&duration)
}

pub fn running_calories(
    steps: i64,
    body: &BodyProfile,
    duration: Duration,
) -> Result<f64, ValidationError> {
    validate_inputs(steps, body, duration)?;

    let speed = mean_speed_kmh(steps, body.height_m, duration);
    Ok(body.weight_kg * speed * duration_minutes(&duration) / MIN_IN_H)
}

pub fn walking_calories(
    steps: i64,
    body: &BodyProfile,
    duration: Duration,
) -> Result<f64, ValidationError> {
    Ok(running_calories(steps, body, duration)? * WALKING_CALORIES_COEFFICIENT)
}

pub fn calories(
    profile: ActivityProfile,
    steps: i64,
    body: &BodyProfile,
    duration: Duration,
) -> Result<f64, ValidationError> {
    match profile {
        ActivityProfile::Walking => walking_calories(steps, body, duration),
        ActivityProfile::Running => running_calories(steps, body, duration),
    }
}

/// Distance, speed and calories for one training session.
pub fn training_metrics(
    profile: ActivityProfile,
    steps: i64,
    body: &BodyProfile,
    duration: Duration,
) -> Result<MetricsResult, ValidationError> {
    let calories_kcal = calories(profile, steps, body, duration)?;

    Ok(MetricsResult {
        distance_km: training_distance_km(steps, body.height_m),
        speed_kmh: mean_speed_kmh(steps, body.height_m, duration),
        calories_kcal,
    })
}

/// Both values must be strictly positive; NaN is rejected.
pub fn validate_body(body: &BodyProfile) -> Result<(), ValidationError> {
    if body.weight_kg.is_nan() || body.weight_kg <= 0.0 {
        return Err(ValidationError::Weight(body.weight_kg));
    }
    if body.height_m.is_nan() || body.height_m <= 0.0 {
        return Err(ValidationError::Height(body.height_m));
    }
    Ok(())
}

fn validate_inputs(
    steps: i64,
    body: &BodyProfile,
    duration: Duration,
) -> Result<(), ValidationError> {
    if steps <= 0 {
        return Err(ValidationError::Steps(steps));
    }
    validate_body(body)?;
    if duration <= Duration::zero() {
        return Err(ValidationError::Duration(duration));
    }
    Ok(())
}
