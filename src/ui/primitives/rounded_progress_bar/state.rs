//! Persisted progress state
//!
//! Written when the host tears the widget down and consumed when it is
//! rebuilt. `host_state` is opaque to the widget and handed back untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    /// Rendered value at save time, clamped to 0-100 on restore
    pub progress: f64,
    /// Host-owned state passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_state: Option<Value>,
}

impl SavedState {
    pub fn to_value(&self) -> Value {
        // SavedState only holds a float and a Value, serialization cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Parse a blob produced by [`SavedState::to_value`]
    ///
    /// Returns `None` for anything else, including non-finite progress.
    pub fn from_value(value: &Value) -> Option<Self> {
        let state = Self::deserialize(value).ok()?;
        state.progress.is_finite().then_some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_integer_progress() {
        let state = SavedState::from_value(&json!({ "progress": 42 })).unwrap();
        assert_eq!(state.progress, 42.0);
        assert_eq!(state.host_state, None);
    }

    #[test]
    fn test_host_state_survives() {
        let state = SavedState {
            progress: 17.25,
            host_state: Some(json!({ "scroll": 3, "focused": true })),
        };
        assert_eq!(SavedState::from_value(&state.to_value()), Some(state));
    }

    #[test]
    fn test_rejects_malformed_blobs() {
        assert_eq!(SavedState::from_value(&Value::Null), None);
        assert_eq!(SavedState::from_value(&json!({ "value": 10 })), None);
        assert_eq!(SavedState::from_value(&json!({ "progress": "ten" })), None);
    }

    #[test]
    fn test_keeps_values_beyond_f32_range() {
        let state = SavedState::from_value(&json!({ "progress": 1e39 })).unwrap();
        assert_eq!(state.progress, 1e39);
    }
}
