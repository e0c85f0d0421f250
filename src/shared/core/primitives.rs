use chrono::Utc;
use uuid::Uuid;

/// Current wall clock time in epoch milliseconds. Inbound adapters stamp
/// commands with this; the core never reads the clock itself.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Identifiers are time-ordered UUID v7 strings.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{field} must not be empty")]
pub struct EmptyIdentifier {
    pub field: &'static str,
}

/// Rejects blank identifiers before they reach a store.
pub fn require_id<'a>(field: &'static str, value: &'a str) -> Result<&'a str, EmptyIdentifier> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EmptyIdentifier { field });
    }
    Ok(trimmed)
}
