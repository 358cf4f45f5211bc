use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a server-owned record.
///
/// The backend issues integer keys; the string forms are what travel through
/// `<select>` values and URL paths.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id for use in a path segment or form value
    fn as_string(&self) -> String;

    /// Parse an id from a form value
    fn from_string(s: &str) -> Result<Self, String>;

    /// Parse an optional selection; an empty or blank value means "nothing selected"
    fn from_selection(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        Self::from_string(trimmed).ok()
    }
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>().map_err(|e| format!("Invalid i64: {}", e))
    }
}
