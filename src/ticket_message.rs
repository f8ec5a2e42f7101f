use std::collections::HashMap;

use anyhow::Context;

/// A decoded webhook event: the new message text and the ticket it was
/// posted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketMessage {
    pub message: String,
    pub ticket_id: u64,
}

/// Decodes a form-urlencoded webhook body (`message=...&ticket_id=...`)
/// into a [`TicketMessage`].
///
/// Splits on `&` then `=` and percent-decodes each value, so decoded
/// values are free to contain `"`, `&` or `=`.
pub fn decode_ticket_message(body: &str) -> anyhow::Result<TicketMessage> {
    if body.is_empty() {
        anyhow::bail!("Webhook request has an empty body");
    }

    let fields: HashMap<String, String> = url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();

    let message = fields
        .get("message")
        .context("Webhook body is missing the message field")?
        .clone();
    let ticket_id = fields
        .get("ticket_id")
        .context("Webhook body is missing the ticket_id field")?
        .parse::<u64>()
        .context("Failed to parse ticket_id as an integer")?;

    Ok(TicketMessage { message, ticket_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_simple_body() {
        let ticket =
            decode_ticket_message("message=Check%20https%3A%2F%2Fexample.com&ticket_id=42")
                .unwrap();
        assert_eq!(ticket.message, "Check https://example.com");
        assert_eq!(ticket.ticket_id, 42);
    }

    #[test]
    fn decodes_plus_as_space() {
        let ticket = decode_ticket_message("message=Hello+there&ticket_id=7").unwrap();
        assert_eq!(ticket.message, "Hello there");
    }

    #[test]
    fn decodes_reserved_characters_inside_values() {
        let ticket = decode_ticket_message("message=a%22b%26c%3Dd&ticket_id=1").unwrap();
        assert_eq!(ticket.message, "a\"b&c=d");
    }

    #[test]
    fn ignores_extra_fields() {
        let ticket = decode_ticket_message("message=hi&ticket_id=5&channel=email").unwrap();
        assert_eq!(ticket.ticket_id, 5);
    }

    #[test]
    fn rejects_an_empty_body() {
        assert!(decode_ticket_message("").is_err());
    }

    #[test]
    fn rejects_a_body_without_a_message() {
        assert!(decode_ticket_message("ticket_id=42").is_err());
    }

    #[test]
    fn rejects_a_body_without_a_ticket_id() {
        assert!(decode_ticket_message("message=hi").is_err());
    }

    #[test]
    fn rejects_a_non_numeric_ticket_id() {
        assert!(decode_ticket_message("message=hi&ticket_id=abc").is_err());
    }
}
