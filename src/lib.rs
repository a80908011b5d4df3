//! # aviso
//!
//! Notification dispatch middleware for unidirectional action pipelines.
//!
//! `aviso` installs between the dispatch entry point and the rest of the
//! pipeline, downstream of the promise-resolution stage that translates an
//! asynchronous request into `PENDING` / `FULFILLED` / `REJECTED` lifecycle
//! actions. For each lifecycle action it observes, the middleware decides
//! whether to synthesize an [`ADD_NOTIFICATION`] action, dispatches it through
//! the full chain, and then forwards the original action unchanged. Actions
//! matching none of the configured suffixes pass through untouched.
//!
//! # Decision Rules
//!
//! - **Pending / fulfilled**: a notification is emitted only when the action
//!   author opted in via `meta.notifications.{pending,fulfilled}`. The
//!   configured fields are spread into the payload, then `dismissable` is set
//!   from the installed [`MiddlewareOptions::auto_dismiss`].
//! - **Rejected, custom config**: `meta.notifications.rejected` is spread into
//!   the payload, then `dismissDelay: 5000` and `dismissable: false` are
//!   applied last. Rejections never auto-dismiss.
//! - **Rejected, no config**: when
//!   [`MiddlewareOptions::dispatch_default_failure`] is set, a `danger`
//!   notification is synthesized with `title` and `description` resolved from
//!   the rejection reason at configurable dot-delimited key paths.
//!
//! # Guarantees
//!
//! - At most one notification per dispatched action, always emitted strictly
//!   before the original action reaches downstream stages.
//! - The middleware holds no state across actions and never mutates the
//!   original action; it is a pure function of `(action, options)` plus a
//!   single dispatch side effect.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use aviso::{MiddlewareOptions, NotificationMiddleware};
//! use aviso::testing::{LifecycleDriver, MockStore};
//! use std::sync::Arc;
//!
//! let store = MockStore::new(vec![Arc::new(NotificationMiddleware::with_defaults())]);
//! let driver = LifecycleDriver::default();
//! driver.resolve(&store, "FOO", None, serde_json::json!({ "ok": true })).await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod error;
mod middleware;
mod notification;
mod options;
mod path;
mod pipeline;
pub mod testing;

pub use action::{Action, ActionMeta, NotificationsConfig, Stage};
pub use error::{BoxError, DispatchError};
pub use middleware::NotificationMiddleware;
pub use notification::{ADD_NOTIFICATION, add_notification};
pub use options::MiddlewareOptions;
pub use path::lookup;
pub use pipeline::{BoxFuture, Dispatch, DynMiddleware, Middleware, Next};
