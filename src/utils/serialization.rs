// JSON rendering layer shared by every entity's to_json method
use crate::error::{LedgerError, Result};
use serde::Serialize;

/// Render a value as pretty-printed JSON with every field visible
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| LedgerError::Serialization(format!("JSON rendering failed: {e}")))
}
