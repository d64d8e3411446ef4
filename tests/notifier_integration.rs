// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use boland_index::app::App;
use boland_index::config::Config;
use boland_index::models::AnswerChoice;
use boland_index::services::notifier::Notifier;
use boland_index::store::MemoryStore;
use common::complete_attempt;

type Received = Arc<Mutex<Vec<serde_json::Value>>>;

async fn receive(State(received): State<Received>, Json(body): Json<serde_json::Value>) -> &'static str {
    received.lock().unwrap().push(body);
    "ok"
}

/// Stand up a local webhook receiver; returns its URL and the event log.
async fn spawn_receiver() -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/hook", post(receive))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}/hook", addr), received)
}

/// Wait until `count` events arrived, or panic after a couple of seconds.
async fn wait_for_events(received: &Received, count: usize) -> Vec<serde_json::Value> {
    for _ in 0..200 {
        {
            let events = received.lock().unwrap();
            if events.len() >= count {
                return events.clone();
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Timed out waiting for {count} webhook events");
}

fn app_with_webhook(url: &str) -> App {
    let config = Config {
        webhook_url: Some(url.to_string()),
        ..Config::default()
    };
    let notifier = Notifier::spawn(&config);
    App::load(config, Box::new(MemoryStore::new()), notifier)
}

#[tokio::test]
async fn signup_then_score_update_arrive_in_order() {
    let (url, received) = spawn_receiver().await;
    let mut app = app_with_webhook(&url);

    app.open_auth();
    app.sign_in("kay@example.com").unwrap();
    complete_attempt(&mut app, AnswerChoice::Agree);

    let events = wait_for_events(&received, 2).await;

    let signup = &events[0];
    assert_eq!(signup["event_type"], "signup");
    assert_eq!(signup["email"], "kay@example.com");
    assert_eq!(signup["source"], "Boland Index Web App");
    assert_eq!(signup["environment"], "development");
    assert!(signup["timestamp"].as_str().unwrap().ends_with('Z'));

    let score = &events[1];
    assert_eq!(score["event_type"], "score_update");
    assert_eq!(score["email"], "kay@example.com");
    assert_eq!(score["total_score"], 200);
    assert_eq!(score["rank"], "Excellent");
    for field in ["nutrition", "movement", "sleep", "social", "purpose"] {
        assert_eq!(score[field], 40, "{field}");
    }
}

#[tokio::test]
async fn anonymous_completion_sends_nothing() {
    let (url, received) = spawn_receiver().await;
    let mut app = app_with_webhook(&url);

    complete_attempt(&mut app, AnswerChoice::Agree);

    // Give any stray delivery a moment to land, then confirm silence.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_leaves_the_flow_intact() {
    // Nothing listens here; every delivery fails on connect.
    let mut app = app_with_webhook("http://127.0.0.1:9/hook");

    app.open_auth();
    app.sign_in("kay@example.com").unwrap();
    complete_attempt(&mut app, AnswerChoice::StronglyAgree);

    // Scoring, persistence, and the Results transition are untouched.
    let result = app.last_result().expect("results despite dead webhook");
    assert_eq!(result.total, 250);
    assert_eq!(app.session().unwrap().history.len(), 1);
}
