// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fire-and-forget webhook notifications.
//!
//! Events are queued on a channel and delivered by a detached worker task.
//! Delivery is best-effort: no retry, no confirmation, every transport
//! error is swallowed. The quiz flow never waits on this path, and a
//! totally unreachable endpoint degrades nothing.

use serde::Serialize;
use tokio::sync::mpsc;

use crate::config::{Config, Environment};
use crate::models::{Rank, ScoreCard};
use crate::time_utils;

/// Constant `source` field on every outbound event.
pub const EVENT_SOURCE: &str = "Boland Index Web App";

/// Outbound event payloads.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum Event {
    /// Fired on every successful sign-in, existing record or not.
    Signup { email: String },
    /// Fired on every completed attempt while signed in.
    ScoreUpdate {
        email: String,
        total_score: u32,
        rank: Rank,
        nutrition: u32,
        movement: u32,
        sleep: u32,
        social: u32,
        purpose: u32,
    },
}

impl Event {
    /// Score-update event from a finished attempt.
    pub fn score_update(email: &str, scores: &ScoreCard, rank: Rank) -> Self {
        Event::ScoreUpdate {
            email: email.to_string(),
            total_score: scores.total(),
            rank,
            nutrition: scores.nutrition,
            movement: scores.movement,
            sleep: scores.sleep,
            social: scores.social_connection,
            purpose: scores.purpose,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Event::Signup { .. } => "signup",
            Event::ScoreUpdate { .. } => "score_update",
        }
    }
}

/// Full JSON body: constant envelope fields plus the event's own.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    source: &'static str,
    environment: Environment,
    timestamp: String,
    #[serde(flatten)]
    event: &'a Event,
}

/// Handle used by the app to enqueue events.
///
/// Cheap to clone. Dropping every handle stops the worker once the queue
/// drains.
#[derive(Clone)]
pub struct Notifier {
    tx: Option<mpsc::UnboundedSender<Event>>,
}

impl Notifier {
    /// Spawn the delivery worker. With no webhook URL configured the
    /// notifier is disabled and [`Notifier::dispatch`] becomes a no-op.
    ///
    /// Must be called from within a tokio runtime when a URL is set.
    pub fn spawn(config: &Config) -> Self {
        let Some(url) = config.webhook_url.clone() else {
            tracing::info!("No webhook URL configured, notifications disabled");
            return Self { tx: None };
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let worker = Worker {
            http: reqwest::Client::new(),
            url,
            environment: config.environment,
        };
        tokio::spawn(worker.run(rx));

        Self { tx: Some(tx) }
    }

    /// A notifier that drops everything (tests, webhook-less runs).
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Enqueue an event and return immediately.
    ///
    /// Events enqueued on one process go through a single worker in order,
    /// so a session's signup always precedes its score updates.
    pub fn dispatch(&self, event: Event) {
        let Some(tx) = &self.tx else {
            return;
        };
        // The worker lives as long as any sender, so this only fails during
        // shutdown; delivery is best-effort either way.
        let _ = tx.send(event);
    }
}

/// Delivery worker state.
struct Worker {
    http: reqwest::Client,
    url: String,
    environment: Environment,
}

impl Worker {
    async fn run(self, mut rx: mpsc::UnboundedReceiver<Event>) {
        while let Some(event) = rx.recv().await {
            self.deliver(&event).await;
        }
    }

    /// POST one event, swallowing any failure.
    async fn deliver(&self, event: &Event) {
        let body = Envelope {
            source: EVENT_SOURCE,
            environment: self.environment,
            timestamp: time_utils::format_utc_rfc3339(chrono::Utc::now()),
            event,
        };

        match self.http.post(&self.url).json(&body).send().await {
            Ok(response) => {
                // Write-only delivery: the status is logged, never acted on.
                tracing::debug!(
                    event_type = event.kind(),
                    status = response.status().as_u16(),
                    "Webhook event delivered"
                );
            }
            Err(e) => {
                tracing::debug!(
                    event_type = event.kind(),
                    error = %e,
                    "Webhook delivery failed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn score_update_carries_every_category_field() {
        let mut scores = ScoreCard::default();
        scores.add(Category::Nutrition, 41);
        scores.add(Category::Movement, 38);
        scores.add(Category::Sleep, 45);
        scores.add(Category::SocialConnection, 30);
        scores.add(Category::Purpose, 44);

        let event = Event::score_update("kay@example.com", &scores, Rank::Excellent);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "score_update");
        assert_eq!(json["email"], "kay@example.com");
        assert_eq!(json["total_score"], 198);
        assert_eq!(json["rank"], "Excellent");
        assert_eq!(json["nutrition"], 41);
        assert_eq!(json["movement"], 38);
        assert_eq!(json["sleep"], 45);
        assert_eq!(json["social"], 30);
        assert_eq!(json["purpose"], 44);
    }

    #[test]
    fn envelope_wraps_the_event_fields() {
        let event = Event::Signup {
            email: "kay@example.com".to_string(),
        };
        let body = Envelope {
            source: EVENT_SOURCE,
            environment: Environment::Development,
            timestamp: "2026-03-14T09:26:53Z".to_string(),
            event: &event,
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["source"], "Boland Index Web App");
        assert_eq!(json["environment"], "development");
        assert_eq!(json["event_type"], "signup");
        assert_eq!(json["email"], "kay@example.com");
        assert_eq!(json["timestamp"], "2026-03-14T09:26:53Z");
    }

    #[test]
    fn disabled_notifier_drops_events() {
        let notifier = Notifier::disabled();
        notifier.dispatch(Event::Signup {
            email: "kay@example.com".to_string(),
        });
        // No runtime, no worker, no panic.
    }
}
