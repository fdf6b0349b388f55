//! Domain types and DTOs
//!
//! Wire types for rooms, exterior surfaces and estimate requests.

pub mod estimate;
pub mod exterior;
pub mod quantity;
pub mod rooms;
pub mod wizard;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Re-export commonly used types
pub use estimate::*;
pub use exterior::*;
pub use quantity::{Count, Measure};
pub use rooms::*;

/// Read any JSON value as a lookup key for a lenient enum.
///
/// Strings are lowercased with spaces, underscores and hyphens removed; every
/// other value yields an empty key, which matches no variant.
pub(crate) fn enum_key<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect(),
        _ => String::new(),
    })
}
