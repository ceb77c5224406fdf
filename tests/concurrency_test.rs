//! Concurrent access through the router

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::task::JoinSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_add_user_loses_no_updates() {
    let app = test_app();
    let mut tasks = JoinSet::new();
    for _ in 0..200 {
        let app = app.clone();
        tasks.spawn(async move { post(&app, "/add-user").await.0 });
    }
    while let Some(status) = tasks.join_next().await {
        assert_eq!(assert_ok!(status), StatusCode::OK);
    }

    let (_, body) = get(&app, "/user-count").await;
    assert_eq!(body, json!({ "user_count": 200 }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_stop_at_limit() {
    let app = test_app();
    let mut tasks = JoinSet::new();
    for _ in 0..1100 {
        let app = app.clone();
        tasks.spawn(async move { post(&app, "/add-user").await.0 });
    }

    let mut accepted = 0;
    let mut limited = 0;
    while let Some(status) = tasks.join_next().await {
        match assert_ok!(status) {
            StatusCode::OK => accepted += 1,
            StatusCode::TOO_MANY_REQUESTS => limited += 1,
            other => panic!("unexpected status {}", other),
        }
    }
    assert_eq!(accepted, 1000);
    assert_eq!(limited, 100);

    let (_, body) = get(&app, "/user-count").await;
    assert_eq!(body, json!({ "user_count": 1000 }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_leave_one_whole_diagram() {
    let app = test_app();
    let diagrams: Vec<String> = (0..32)
        .map(|i| {
            format!(
                "<bpmn:definitions id=\"d{i}\"><bpmn:process id=\"p{i}\"/></bpmn:definitions>"
            )
        })
        .collect();

    let mut tasks = JoinSet::new();
    for diagram in diagrams.clone() {
        let app = app.clone();
        tasks.spawn(async move { save_diagram(&app, &diagram).await.0 });
    }
    while let Some(status) = tasks.join_next().await {
        assert_eq!(assert_ok!(status), StatusCode::OK);
    }

    let (_, body) = get(&app, "/get-diagram").await;
    let stored = body["diagram"].as_str().unwrap().to_string();
    assert!(diagrams.contains(&stored));
}
