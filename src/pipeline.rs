//! The host dispatch-middleware convention.
//!
//! A middleware stage receives an action together with two channels back into
//! the pipeline:
//!
//! - [`Dispatch`] feeds a fresh action through the *whole* chain from the
//!   top, exactly as if a caller had dispatched it;
//! - [`Next`] forwards the current action to the remaining stages, ending at
//!   the terminal consumer.
//!
//! Stages run in installation order, to completion, on the same logical turn
//! as the triggering dispatch call. The host serializes dispatches, so the
//! action sequence a stage emits is never interleaved with another dispatch
//! on the same pipeline turn.
//!
//! # Static vs Dynamic Dispatch
//!
//! [`Middleware`] uses native `async fn` futures for static dispatch. Chains
//! store stages as `Arc<dyn DynMiddleware>`; the blanket impl converts every
//! `Middleware` automatically.

use crate::{
    action::Action,
    error::{BoxError, DispatchError},
};
use std::{future::Future, pin::Pin, sync::Arc};

/// A boxed future, used by the object-safe traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Entry point back into the full middleware chain.
///
/// Implemented by the host store. Middleware uses it to emit secondary
/// actions; they run through every installed stage.
pub trait Dispatch: Send + Sync {
    /// Feed an action through the whole chain.
    fn dispatch<'a>(&'a self, action: Action) -> BoxFuture<'a, Result<Action, DispatchError>>;
}

/// A middleware stage.
///
/// Stages observe each dispatched action and decide what reaches the rest of
/// the pipeline: forward it with [`Next::run`], emit extra actions via
/// [`Dispatch::dispatch`], or swallow it entirely.
pub trait Middleware: Send + Sync + 'static {
    /// Process one action.
    fn handle(
        &self,
        action: Action,
        dispatch: &dyn Dispatch,
        next: &Next<'_>,
    ) -> impl Future<Output = Result<Action, BoxError>> + Send;
}

/// Object-safe version of [`Middleware`] for storing stages in a chain.
pub trait DynMiddleware: Send + Sync + 'static {
    /// Process one action (dynamic dispatch version).
    fn handle_dyn<'a>(
        &'a self,
        action: Action,
        dispatch: &'a dyn Dispatch,
        next: &'a Next<'a>,
    ) -> BoxFuture<'a, Result<Action, BoxError>>;
}

// Blanket implementation: any Middleware is usable as a DynMiddleware.
impl<T: Middleware> DynMiddleware for T {
    fn handle_dyn<'a>(
        &'a self,
        action: Action,
        dispatch: &'a dyn Dispatch,
        next: &'a Next<'a>,
    ) -> BoxFuture<'a, Result<Action, BoxError>> {
        Box::pin(self.handle(action, dispatch, next))
    }
}

/// The remainder of the middleware chain, ending at a terminal consumer.
pub struct Next<'a> {
    stages: &'a [Arc<dyn DynMiddleware>],
    terminal: &'a (dyn Fn(Action) -> Result<Action, BoxError> + Send + Sync),
    dispatch: &'a dyn Dispatch,
}

impl<'a> Next<'a> {
    /// Build the chain tail over `stages`, ending at `terminal`.
    pub fn new(
        stages: &'a [Arc<dyn DynMiddleware>],
        terminal: &'a (dyn Fn(Action) -> Result<Action, BoxError> + Send + Sync),
        dispatch: &'a dyn Dispatch,
    ) -> Self {
        Self {
            stages,
            terminal,
            dispatch,
        }
    }

    /// Forward the action to the next stage, or to the terminal consumer if
    /// no stages remain.
    pub async fn run(&self, action: Action) -> Result<Action, BoxError> {
        match self.stages.split_first() {
            Some((head, rest)) => {
                let next = Next {
                    stages: rest,
                    terminal: self.terminal,
                    dispatch: self.dispatch,
                };
                head.handle_dyn(action, self.dispatch, &next).await
            }
            None => (self.terminal)(action),
        }
    }
}
