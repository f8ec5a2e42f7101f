use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    // first https:/http:/www. token in the message, whitespace delimited
    static ref LINK_PATTERN: Regex =
        Regex::new(r"(?i)(https:|http:|www\.)\S+").expect("link pattern compiles");
}

/// One custom field value to set on a ticket, in the shape the custom
/// fields endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomFieldUpdate {
    pub custom_field_id: String,
    pub value: String,
}

/// Scans a ticket message for a link and turns the first one found into an
/// update for the configured link field. A message without a link yields
/// no update. Later links in the same message are ignored.
pub fn extract_link(message: &str, link_field_id: &str) -> Option<CustomFieldUpdate> {
    let link = LINK_PATTERN.find(message)?;

    Some(CustomFieldUpdate {
        custom_field_id: link_field_id.to_string(),
        value: link.as_str().to_string(),
    })
}
