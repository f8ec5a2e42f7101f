use anyhow::Context;
use lazy_static::lazy_static;
use reqwest::header;
use tracing::{debug, error};

use crate::env_utils::Config;

lazy_static! {
    static ref HTTP_CLIENT: reqwest::Client = reqwest::Client::new();
}

/// Sets the custom fields of a ticket, swallowing any delivery failure.
///
/// The webhook response does not depend on whether Trengo accepted the
/// update, so failures are logged here and dropped.
pub async fn set_ticket_custom_fields(config: &Config, ticket_id: u64, payload: String) {
    match post_custom_fields(config, ticket_id, payload).await {
        Ok(_) => {
            debug!("Set custom fields for ticket {}", ticket_id);
        }
        Err(e) => {
            error!("Failed to set custom fields for ticket {}: {}", ticket_id, e);
        }
    }
}

async fn post_custom_fields(
    config: &Config,
    ticket_id: u64,
    payload: String,
) -> anyhow::Result<()> {
    let url = format!(
        "{}/api/v2/tickets/{}/custom_fields",
        config.trengo_base_url, ticket_id
    );

    let resp = HTTP_CLIENT
        .post(&url)
        .header(header::ACCEPT, "application/json")
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", config.api_token),
        )
        .header(header::CONTENT_TYPE, "application/json")
        .body(payload)
        .send()
        .await
        .context("Failed to send custom fields request to Trengo")?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Received a non-success status code {}: {}",
            resp.status(),
            resp.text().await.unwrap_or("Unknown error".to_string())
        ))
    }
}
