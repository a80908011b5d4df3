//! Testing utilities.
//!
//! - [`MockStore`]: stands in for the host store; applies an installed
//!   middleware chain and records every action reaching the terminal stage.
//! - [`LifecycleDriver`]: plays the external promise-resolution collaborator,
//!   emitting suffixed lifecycle actions for one asynchronous request.

use crate::{
    action::{Action, ActionMeta},
    error::{BoxError, DispatchError},
    pipeline::{BoxFuture, Dispatch, DynMiddleware, Next},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A store double that records actions reaching the end of the chain.
pub struct MockStore {
    stages: Vec<Arc<dyn DynMiddleware>>,
    recorded: Mutex<Vec<Action>>,
}

impl MockStore {
    /// Create a store with the given middleware chain, in execution order.
    pub fn new(stages: Vec<Arc<dyn DynMiddleware>>) -> Self {
        Self {
            stages,
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// Actions recorded so far, in dispatch order.
    pub fn actions(&self) -> Vec<Action> {
        self.recorded.lock().unwrap().clone()
    }

    /// Just the recorded action types, for order assertions.
    pub fn action_types(&self) -> Vec<String> {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .map(|action| action.kind.clone())
            .collect()
    }

    /// Clear the record.
    pub fn clear(&self) {
        self.recorded.lock().unwrap().clear();
    }
}

impl Dispatch for MockStore {
    fn dispatch<'a>(&'a self, action: Action) -> BoxFuture<'a, Result<Action, DispatchError>> {
        Box::pin(async move {
            let terminal = |action: Action| -> Result<Action, BoxError> {
                self.recorded.lock().unwrap().push(action.clone());
                Ok(action)
            };
            let next = Next::new(&self.stages, &terminal, self);
            next.run(action).await.map_err(DispatchError::Middleware)
        })
    }
}

/// Drives the lifecycle of one asynchronous request, standing in for the
/// external promise-resolution stage.
///
/// The driver emits `{base}_{suffix}` actions the way that stage would:
/// pending first, then either fulfilled with the resolved value or rejected
/// with the rejection reason as payload. Metadata rides along on every
/// lifecycle action.
pub struct LifecycleDriver {
    pending_suffix: String,
    fulfilled_suffix: String,
    rejected_suffix: String,
}

impl Default for LifecycleDriver {
    fn default() -> Self {
        Self::with_suffixes("PENDING", "FULFILLED", "REJECTED")
    }
}

impl LifecycleDriver {
    /// A driver emitting custom lifecycle suffixes.
    pub fn with_suffixes(
        pending: impl Into<String>,
        fulfilled: impl Into<String>,
        rejected: impl Into<String>,
    ) -> Self {
        Self {
            pending_suffix: pending.into(),
            fulfilled_suffix: fulfilled.into(),
            rejected_suffix: rejected.into(),
        }
    }

    /// Emit `{base}_{pending}`, then `{base}_{fulfilled}` carrying `value`.
    pub async fn resolve(
        &self,
        store: &MockStore,
        base: &str,
        meta: Option<ActionMeta>,
        value: Value,
    ) -> Result<(), DispatchError> {
        store
            .dispatch(Action {
                kind: format!("{base}_{}", self.pending_suffix),
                payload: Value::Null,
                meta: meta.clone(),
            })
            .await?;
        store
            .dispatch(Action {
                kind: format!("{base}_{}", self.fulfilled_suffix),
                payload: value,
                meta,
            })
            .await?;
        Ok(())
    }

    /// Emit `{base}_{pending}`, then `{base}_{rejected}` carrying `reason`.
    pub async fn reject(
        &self,
        store: &MockStore,
        base: &str,
        meta: Option<ActionMeta>,
        reason: Value,
    ) -> Result<(), DispatchError> {
        store
            .dispatch(Action {
                kind: format!("{base}_{}", self.pending_suffix),
                payload: Value::Null,
                meta: meta.clone(),
            })
            .await?;
        store
            .dispatch(Action {
                kind: format!("{base}_{}", self.rejected_suffix),
                payload: reason,
                meta,
            })
            .await?;
        Ok(())
    }
}
