use std::env;

use tracing::{error, warn};

/// Process-wide configuration, captured once at startup and handed to the
/// request handlers through the shared app state.
#[derive(Debug, Clone)]
pub struct Config {
    // TODO: check inbound payloads against this once signature headers
    // are turned on for the webhook
    #[allow(dead_code)]
    pub signing_secret: String,
    pub api_token: String,
    pub link_field_id: String,
    pub trengo_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            signing_secret: get_env_string("WEBHOOK_SIGNING_SECRET"),
            api_token: get_env_string("TRENGO_API_TOKEN"),
            link_field_id: get_env_string("TRENGO_LINK_FIELD_ID"),
            trengo_base_url: env::var("TRENGO_BASE_URL")
                .unwrap_or_else(|_| "https://app.trengo.com".to_string()),
        }
    }
}

fn get_env_string(name: &str) -> String {
    match env::var(name) {
        Ok(value) => value,
        _ => {
            warn!("{} env var not set, using empty value", name);
            String::new()
        }
    }
}

pub fn get_port() -> u16 {
    let default_port: u16 = 8080;

    let port = match env::var("PORT") {
        Ok(port) => port,
        _ => default_port.to_string(),
    };
    let port: u16 = match port.parse::<_>() {
        Ok(port) => port,
        _ => {
            error!("Failed to parse PORT env var, using default");
            default_port
        }
    };

    port
}
