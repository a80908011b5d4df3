//! Middleware configuration.

use crate::action::Stage;

/// Configuration for [`NotificationMiddleware`].
///
/// Constructed once at installation and immutable thereafter. All fields have
/// defaults matching the conventional promise-resolution suffixes.
///
/// [`NotificationMiddleware`]: crate::NotificationMiddleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddlewareOptions {
    /// Written into the `dismissable` field of pending/fulfilled
    /// notifications. Rejection notifications ignore this.
    pub auto_dismiss: bool,

    /// Synthesize an error notification for rejections whose action carries
    /// no explicit `rejected` configuration.
    pub dispatch_default_failure: bool,

    /// Dot-delimited path into the rejection reason used as the
    /// default-failure notification title.
    pub error_title_key: String,

    /// Dot-delimited path used as the default-failure description.
    pub error_description_key: String,

    /// Action-type suffix identifying the pending stage.
    pub pending_suffix: String,

    /// Action-type suffix identifying the fulfilled stage.
    pub fulfilled_suffix: String,

    /// Action-type suffix identifying the rejected stage.
    pub rejected_suffix: String,
}

impl Default for MiddlewareOptions {
    fn default() -> Self {
        Self {
            auto_dismiss: true,
            dispatch_default_failure: true,
            error_title_key: "title".into(),
            error_description_key: "detail".into(),
            pending_suffix: "PENDING".into(),
            fulfilled_suffix: "FULFILLED".into(),
            rejected_suffix: "REJECTED".into(),
        }
    }
}

impl MiddlewareOptions {
    /// Classify an action type by its lifecycle suffix.
    ///
    /// Returns `None` for action types matching none of the three configured
    /// suffixes; such actions pass through with no notification logic run.
    pub fn classify(&self, action_type: &str) -> Option<Stage> {
        if action_type.ends_with(&self.pending_suffix) {
            Some(Stage::Pending)
        } else if action_type.ends_with(&self.fulfilled_suffix) {
            Some(Stage::Fulfilled)
        } else if action_type.ends_with(&self.rejected_suffix) {
            Some(Stage::Rejected)
        } else {
            None
        }
    }
}
