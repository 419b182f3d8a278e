//! Comment-tolerant JSON parsing
//!
//! tsconfig files are JSONC: line and block comments plus trailing commas
//! are allowed. Parsing is best-effort; anything unparsable degrades to an
//! empty object, matching tsc's own behavior.

use serde_json::{Map, Value};

/// Parse JSONC text into a key/value map.
///
/// Returns an empty map when the text is not valid JSONC or when its
/// top-level value is not an object. Never fails.
pub(crate) fn parse(text: &str) -> Map<String, Value> {
    match json5::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::debug!("config is not a JSON object, treating as empty");
            Map::new()
        }
        Err(err) => {
            tracing::debug!("ignoring unparsable config: {err}");
            Map::new()
        }
    }
}
