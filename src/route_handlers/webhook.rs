use anyhow::Context;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::{
    env_utils::Config, link_extractor, ticket_message, trengo_api_service, SharedAppState,
};

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    message: String,
}

pub async fn handler(
    State(state): State<SharedAppState>,
    body: String,
) -> impl axum::response::IntoResponse {
    debug!("Webhook request body: {:?}", body);

    match process_event(&state.config, &body).await {
        Ok(ticket_id) => (
            StatusCode::CREATED,
            Json(WebhookResponse {
                message: format!("Ticket's {} custom fields set", ticket_id),
            }),
        ),
        Err(e) => {
            error!("Failed to process webhook event: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(WebhookResponse {
                    message: e.to_string(),
                }),
            )
        }
    }
}

/// Runs the decode -> extract -> notify pipeline for one webhook event and
/// returns the ticket id it applied to.
///
/// A delivery failure on the notify step is contained inside
/// [`trengo_api_service`] and never surfaces here; only decoding and
/// payload serialization can fail the request.
async fn process_event(config: &Config, body: &str) -> anyhow::Result<u64> {
    let ticket = ticket_message::decode_ticket_message(body)?;

    match link_extractor::extract_link(&ticket.message, &config.link_field_id) {
        Some(update) => {
            info!("Setting link field on ticket {}", ticket.ticket_id);
            let payload = serde_json::to_string(&update)
                .context("Failed to serialize the custom field update")?;
            trengo_api_service::set_ticket_custom_fields(config, ticket.ticket_id, payload).await;
        }
        None => {
            debug!("No link found in message for ticket {}", ticket.ticket_id);
        }
    }

    Ok(ticket.ticket_id)
}
