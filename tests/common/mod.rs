// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use boland_index::app::{App, View};
use boland_index::config::Config;
use boland_index::models::AnswerChoice;
use boland_index::services::notifier::Notifier;
use boland_index::store::{MemoryStore, ScoreStore};

/// Create a test app over a fresh in-memory store, notifications disabled.
#[allow(dead_code)]
pub fn test_app() -> App {
    app_with_store(Box::new(MemoryStore::new()))
}

/// Create a test app over the given store.
#[allow(dead_code)]
pub fn app_with_store(store: Box<dyn ScoreStore>) -> App {
    App::load(Config::default(), store, Notifier::disabled())
}

/// Answer every question with the same choice, completing one attempt.
#[allow(dead_code)]
pub fn complete_attempt(app: &mut App, choice: AnswerChoice) {
    app.start_quiz();
    while app.view() == View::Quiz {
        app.answer(choice);
    }
}

/// Fresh scratch directory under the system temp dir.
#[allow(dead_code)]
pub fn scratch_dir(label: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("boland-index-{}-{}", label, uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}
