//! End-to-end tests dispatching lifecycle actions through a mock store.
//!
//! The [`LifecycleDriver`] stands in for the promise-resolution stage: it
//! emits the suffixed lifecycle actions a resolved or rejected request would
//! produce, and the store records everything that reaches the terminal stage.

use aviso::testing::{LifecycleDriver, MockStore};
use aviso::{
    ADD_NOTIFICATION, Action, ActionMeta, Dispatch, MiddlewareOptions, NotificationMiddleware,
};
use serde_json::{Value, json};
use std::sync::Arc;

fn store_with(options: MiddlewareOptions) -> MockStore {
    MockStore::new(vec![Arc::new(NotificationMiddleware::new(options))])
}

fn default_store() -> MockStore {
    store_with(MiddlewareOptions::default())
}

/// Pending + fulfilled opt-in, as an action author would write it.
fn request_meta() -> ActionMeta {
    serde_json::from_value(json!({
        "notifications": {
            "pending": { "variant": "info", "title": "pending" },
            "fulfilled": {
                "variant": "success",
                "title": "success",
                "description": "description"
            }
        }
    }))
    .unwrap()
}

fn rejection_reason() -> Value {
    json!({
        "title": "Error title",
        "detail": "Longer detailed description of error message",
        "body": {
            "title": "Custom error title path",
            "description": "Custom error description path"
        }
    })
}

#[tokio::test]
async fn success_without_config_produces_no_notifications() {
    let store = default_store();
    let driver = LifecycleDriver::default();

    driver
        .resolve(&store, "FOO", None, json!({ "success": true }))
        .await
        .unwrap();

    let actions = store.actions();
    assert_eq!(store.action_types(), vec!["FOO_PENDING", "FOO_FULFILLED"]);
    assert_eq!(actions[1].payload, json!({ "success": true }));
}

#[tokio::test]
async fn pending_and_fulfilled_notifications_precede_lifecycle_actions() {
    let store = default_store();
    let driver = LifecycleDriver::default();

    driver
        .resolve(&store, "FOO", Some(request_meta()), json!({ "success": true }))
        .await
        .unwrap();

    assert_eq!(
        store.action_types(),
        vec![ADD_NOTIFICATION, "FOO_PENDING", ADD_NOTIFICATION, "FOO_FULFILLED"]
    );

    let actions = store.actions();
    assert_eq!(
        actions[0].payload,
        json!({ "variant": "info", "title": "pending", "dismissable": true })
    );
    assert_eq!(
        actions[2].payload,
        json!({
            "variant": "success",
            "title": "success",
            "description": "description",
            "dismissable": true
        })
    );
}

#[tokio::test]
async fn auto_dismiss_option_flows_into_dismissable() {
    let store = store_with(MiddlewareOptions {
        auto_dismiss: false,
        ..MiddlewareOptions::default()
    });
    let driver = LifecycleDriver::default();

    driver
        .resolve(&store, "FOO", Some(request_meta()), json!({ "success": true }))
        .await
        .unwrap();

    let actions = store.actions();
    assert_eq!(actions[0].payload["dismissable"], json!(false));
    assert_eq!(actions[2].payload["dismissable"], json!(false));
}

#[tokio::test]
async fn rejection_emits_default_failure_notification() {
    let store = default_store();
    let driver = LifecycleDriver::default();

    driver
        .reject(&store, "FOO", None, rejection_reason())
        .await
        .unwrap();

    assert_eq!(
        store.action_types(),
        vec!["FOO_PENDING", ADD_NOTIFICATION, "FOO_REJECTED"]
    );
    assert_eq!(
        store.actions()[1].payload,
        json!({
            "variant": "danger",
            "dismissable": true,
            "title": "Error title",
            "description": "Longer detailed description of error message"
        })
    );
}

#[tokio::test]
async fn default_failure_can_be_switched_off() {
    let store = store_with(MiddlewareOptions {
        dispatch_default_failure: false,
        ..MiddlewareOptions::default()
    });
    let driver = LifecycleDriver::default();

    driver
        .reject(&store, "FOO", None, rejection_reason())
        .await
        .unwrap();

    assert_eq!(store.action_types(), vec!["FOO_PENDING", "FOO_REJECTED"]);
}

#[tokio::test]
async fn custom_error_key_paths_resolve_nested_fields() {
    let store = store_with(MiddlewareOptions {
        error_title_key: "body.title".into(),
        error_description_key: "body.description".into(),
        ..MiddlewareOptions::default()
    });
    let driver = LifecycleDriver::default();

    driver
        .reject(&store, "FOO", None, rejection_reason())
        .await
        .unwrap();

    assert_eq!(
        store.actions()[1].payload,
        json!({
            "variant": "danger",
            "dismissable": true,
            "title": "Custom error title path",
            "description": "Custom error description path"
        })
    );
}

#[tokio::test]
async fn custom_suffixes_redirect_classification_only() {
    let store = store_with(MiddlewareOptions {
        pending_suffix: "FETCHING".into(),
        fulfilled_suffix: "SUCCESS".into(),
        rejected_suffix: "FAILED".into(),
        ..MiddlewareOptions::default()
    });
    let driver = LifecycleDriver::with_suffixes("FETCHING", "SUCCESS", "FAILED");

    driver
        .resolve(&store, "FOO", Some(request_meta()), json!({ "success": true }))
        .await
        .unwrap();

    assert_eq!(
        store.action_types(),
        vec![ADD_NOTIFICATION, "FOO_FETCHING", ADD_NOTIFICATION, "FOO_SUCCESS"]
    );

    let actions = store.actions();
    assert_eq!(actions[0].payload["title"], json!("pending"));
    assert_eq!(actions[2].payload["title"], json!("success"));
}

#[tokio::test]
async fn custom_rejected_config_never_auto_dismisses() {
    let store = default_store();
    let driver = LifecycleDriver::default();

    let meta: ActionMeta = serde_json::from_value(json!({
        "notifications": {
            "rejected": { "variant": "warning", "title": "custom error notification" }
        }
    }))
    .unwrap();

    driver
        .reject(&store, "FOO", Some(meta), rejection_reason())
        .await
        .unwrap();

    assert_eq!(
        store.action_types(),
        vec!["FOO_PENDING", ADD_NOTIFICATION, "FOO_REJECTED"]
    );
    assert_eq!(
        store.actions()[1].payload,
        json!({
            "variant": "warning",
            "title": "custom error notification",
            "dismissDelay": 5000,
            "dismissable": false
        })
    );
}

#[tokio::test]
async fn non_lifecycle_actions_pass_through_unchanged() {
    let store = default_store();

    let action = Action::new("ADD_TODO")
        .with_payload(json!({ "text": "write tests" }))
        .with_meta(request_meta());
    store.dispatch(action.clone()).await.unwrap();

    assert_eq!(store.actions(), vec![action]);
}

#[tokio::test]
async fn malformed_rejection_reason_still_notifies() {
    let store = default_store();
    let driver = LifecycleDriver::default();

    driver.reject(&store, "FOO", None, json!("boom")).await.unwrap();

    assert_eq!(
        store.action_types(),
        vec!["FOO_PENDING", ADD_NOTIFICATION, "FOO_REJECTED"]
    );
    // Blank notification rather than a suppressed one.
    assert_eq!(
        store.actions()[1].payload,
        json!({ "variant": "danger", "dismissable": true })
    );
}
