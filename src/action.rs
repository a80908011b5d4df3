//! Action model for the dispatch pipeline.
//!
//! Actions are plain data flowing through the pipeline: a type tag, an
//! arbitrary JSON payload, and optional author-supplied metadata. Middleware
//! treats them as immutable and forwards them unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle stage of an asynchronous action, derived from its type suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The asynchronous request was started.
    Pending,
    /// The request resolved successfully.
    Fulfilled,
    /// The request was rejected; the action payload carries the reason.
    Rejected,
}

/// A single action flowing through the dispatch pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The action type tag, e.g. `"FOO_PENDING"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Arbitrary payload. For rejected lifecycle actions this is the
    /// rejection reason produced by the promise-resolution stage.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,

    /// Optional metadata attached by the action author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ActionMeta>,
}

impl Action {
    /// Create an action with the given type tag and no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Value::Null,
            meta: None,
        }
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Attach metadata.
    pub fn with_meta(mut self, meta: ActionMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// The notification configuration the author opted into for `stage`.
    ///
    /// Tolerates missing `meta` and missing `meta.notifications`; both read
    /// as "no configuration for this stage".
    pub fn notification_config(&self, stage: Stage) -> Option<&Map<String, Value>> {
        self.meta.as_ref()?.notifications.as_ref()?.stage(stage)
    }
}

/// Metadata attached to an action.
///
/// Only the `notifications` key is interpreted by this crate; any other
/// metadata round-trips through the flattened `rest` map untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionMeta {
    /// Per-stage notification opt-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationsConfig>,

    /// Metadata keys this crate does not interpret.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ActionMeta {
    /// Metadata carrying only a notification configuration.
    pub fn with_notifications(notifications: NotificationsConfig) -> Self {
        Self {
            notifications: Some(notifications),
            rest: Map::new(),
        }
    }
}

/// Declarative notification opt-in, keyed by lifecycle stage.
///
/// Each entry is an arbitrary JSON object of notification fields (`variant`,
/// `title`, `description`, ...). A stage with no entry produces no
/// notification, except for rejections when the middleware is configured to
/// synthesize a default failure notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Fields for the notification emitted when the request starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<Map<String, Value>>,

    /// Fields for the notification emitted on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfilled: Option<Map<String, Value>>,

    /// Fields for the notification emitted on rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected: Option<Map<String, Value>>,
}

impl NotificationsConfig {
    /// The configured fields for `stage`, if any.
    pub fn stage(&self, stage: Stage) -> Option<&Map<String, Value>> {
        match stage {
            Stage::Pending => self.pending.as_ref(),
            Stage::Fulfilled => self.fulfilled.as_ref(),
            Stage::Rejected => self.rejected.as_ref(),
        }
    }
}
