pub mod config;
pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod types;

pub use error::TrackerError;
pub use pipeline::report::{day_activity_summary, training_summary};
pub use types::activity::BodyProfile;
