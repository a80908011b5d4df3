//! The produced action type.

use crate::action::Action;
use serde_json::{Map, Value};

/// Action type emitted for every synthesized notification.
pub const ADD_NOTIFICATION: &str = "ADD_NOTIFICATION";

/// Build an [`ADD_NOTIFICATION`] action carrying the given payload.
///
/// Payload keys use the wire names consumed by notification UIs: `variant`,
/// `title`, `description`, `dismissable`, `dismissDelay`.
pub fn add_notification(payload: Map<String, Value>) -> Action {
    Action {
        kind: ADD_NOTIFICATION.into(),
        payload: Value::Object(payload),
        meta: None,
    }
}
