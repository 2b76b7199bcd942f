use std::sync::Arc;

use crate::config::Config;
use crate::types::activity::BodyProfile;

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Fills in whichever half of the body profile the caller left out.
    pub fn body_profile(&self, weight_kg: Option<f64>, height_m: Option<f64>) -> BodyProfile {
        let defaults = self.config.default_body;
        BodyProfile {
            weight_kg: weight_kg.unwrap_or(defaults.weight_kg),
            height_m: height_m.unwrap_or(defaults.height_m),
        }
    }
}
