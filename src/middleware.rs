//! Notification dispatch middleware.
//!
//! Observes lifecycle actions produced by an upstream promise-resolution
//! stage and, based on the declarative `meta.notifications` configuration on
//! the triggering action or the installed fallback rules, synthesizes
//! [`ADD_NOTIFICATION`] actions. The synthesized action is dispatched through
//! the full chain strictly before the original action is forwarded.
//!
//! [`ADD_NOTIFICATION`]: crate::ADD_NOTIFICATION

use crate::{
    action::{Action, Stage},
    error::BoxError,
    notification::add_notification,
    options::MiddlewareOptions,
    path::lookup,
    pipeline::{Dispatch, Middleware, Next},
};
use serde_json::{Map, Value};

/// Fixed dismiss delay for custom rejection notifications, in milliseconds.
const REJECTED_DISMISS_DELAY: u64 = 5000;

/// The notification dispatch middleware.
///
/// Stateless: a pure function of the action and the installed options, plus
/// at most one extra dispatch per action. It never mutates the original
/// action and raises no errors of its own.
pub struct NotificationMiddleware {
    options: MiddlewareOptions,
}

impl NotificationMiddleware {
    /// Install with custom options.
    pub fn new(options: MiddlewareOptions) -> Self {
        Self { options }
    }

    /// Install with default options.
    pub fn with_defaults() -> Self {
        Self::new(MiddlewareOptions::default())
    }

    /// Decide whether `action` warrants a notification at `stage`, and build
    /// its payload.
    ///
    /// Merge rule throughout: configured object spread first, fixed fields
    /// applied last, so fixed fields win.
    pub fn synthesize(&self, stage: Stage, action: &Action) -> Option<Map<String, Value>> {
        let configured = action.notification_config(stage);
        match stage {
            Stage::Pending | Stage::Fulfilled => {
                let mut payload = configured?.clone();
                payload.insert(
                    "dismissable".into(),
                    Value::Bool(self.options.auto_dismiss),
                );
                Some(payload)
            }
            Stage::Rejected => match configured {
                Some(config) => {
                    // Errors warrant manual acknowledgment: custom rejection
                    // notifications never auto-dismiss, whatever `auto_dismiss`
                    // says.
                    let mut payload = config.clone();
                    payload.insert("dismissDelay".into(), Value::from(REJECTED_DISMISS_DELAY));
                    payload.insert("dismissable".into(), Value::Bool(false));
                    Some(payload)
                }
                None if self.options.dispatch_default_failure => {
                    Some(self.default_failure(&action.payload))
                }
                None => None,
            },
        }
    }

    /// The automatic error notification for rejections without custom config.
    ///
    /// Title and description are resolved from the rejection reason at the
    /// configured key paths; an absent path omits the field rather than
    /// suppressing the notification.
    fn default_failure(&self, reason: &Value) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("variant".into(), Value::from("danger"));
        payload.insert("dismissable".into(), Value::Bool(true));
        if let Some(title) = lookup(reason, &self.options.error_title_key) {
            payload.insert("title".into(), title.clone());
        }
        if let Some(description) = lookup(reason, &self.options.error_description_key) {
            payload.insert("description".into(), description.clone());
        }
        payload
    }
}

impl Middleware for NotificationMiddleware {
    async fn handle(
        &self,
        action: Action,
        dispatch: &dyn Dispatch,
        next: &Next<'_>,
    ) -> Result<Action, BoxError> {
        if let Some(stage) = self.options.classify(&action.kind) {
            if let Some(payload) = self.synthesize(stage, &action) {
                #[cfg(feature = "tracing")]
                tracing::debug!(action = %action.kind, ?stage, "synthesizing notification");
                dispatch.dispatch(add_notification(payload)).await?;
            }
        }
        next.run(action).await
    }
}
