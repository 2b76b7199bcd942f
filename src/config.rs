use crate::types::activity::BodyProfile;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Used when a request does not carry its own body profile.
    pub default_body: BodyProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            default_body: BodyProfile {
                weight_kg: 75.0,
                height_m: 1.75,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env_or("PORT", defaults.port);
        let weight_kg = env_or("DEFAULT_WEIGHT_KG", defaults.default_body.weight_kg);
        let height_m = env_or("DEFAULT_HEIGHT_M", defaults.default_body.height_m);

        Self {
            port,
            default_body: BodyProfile { weight_kg, height_m },
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
