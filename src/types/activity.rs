use chrono::Duration;

/// A `steps,duration` record from the daily step counter.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub steps: i64,
    pub duration: Duration,
}

/// A `steps,activity,duration` record describing one training session.
///
/// `steps` is not range-checked at parse time; the calorie formulas reject
/// non-positive counts.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    pub steps: i64,
    pub activity: String,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityProfile {
    Walking,
    Running,
}

impl ActivityProfile {
    /// Resolves a raw label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "ходьба" => Some(ActivityProfile::Walking),
            "бег" => Some(ActivityProfile::Running),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityProfile::Walking => "Ходьба",
            ActivityProfile::Running => "Бег",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsResult {
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

pub fn duration_hours(duration: &Duration) -> f64 {
    duration_seconds(duration) / 3600.0
}

pub fn duration_minutes(duration: &Duration) -> f64 {
    duration_seconds(duration) / 60.0
}

fn duration_seconds(duration: &Duration) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => duration.num_milliseconds() as f64 / 1e3,
    }
}
