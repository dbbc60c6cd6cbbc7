use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub strict_status_transitions: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or_else(|| {
                    warn!("PORT not set or invalid, defaulting to 3000");
                    3000
                }),
            strict_status_transitions: env::var("STRICT_STATUS_TRANSITIONS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(false),
        }
    }
}
