// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

mod common;

use boland_index::models::{AnswerChoice, User};
use boland_index::store::{JsonFileStore, MemoryStore, ScoreStore};
use common::{app_with_store, complete_attempt, scratch_dir};

#[test]
fn file_store_round_trips_user_records() {
    let dir = scratch_dir("roundtrip");
    let store = JsonFileStore::open(&dir).unwrap();

    let user = User::new("kay@example.com");
    store.put_user(&user.email, &user).unwrap();

    let loaded = store.get_user("kay@example.com").unwrap().unwrap();
    assert_eq!(loaded, user);
    assert!(store.get_user("other@example.com").unwrap().is_none());
}

#[test]
fn file_store_survives_reopen() {
    let dir = scratch_dir("reopen");
    {
        let store = JsonFileStore::open(&dir).unwrap();
        store.put_user("kay@example.com", &User::new("kay@example.com")).unwrap();
        store.save_session(&User::new("kay@example.com")).unwrap();
    }

    let store = JsonFileStore::open(&dir).unwrap();
    assert!(store.get_user("kay@example.com").unwrap().is_some());
    assert!(store.load_session().unwrap().is_some());
}

#[test]
fn session_slot_lifecycle_leaves_user_records_alone() {
    let dir = scratch_dir("session");
    let store = JsonFileStore::open(&dir).unwrap();
    let user = User::new("kay@example.com");

    store.save_session(&user).unwrap();
    store.put_user(&user.email, &user).unwrap();
    assert!(store.load_session().unwrap().is_some());

    store.clear_session().unwrap();
    assert!(store.load_session().unwrap().is_none());
    assert!(store.get_user("kay@example.com").unwrap().is_some());

    // Clearing an already-clear slot is fine.
    store.clear_session().unwrap();
}

#[test]
fn malformed_file_record_falls_back_to_absent() {
    let dir = scratch_dir("corrupt");
    let store = JsonFileStore::open(&dir).unwrap();

    // Keys are percent-encoded into file names; stage a corrupt body at
    // the exact path the store reads.
    let path = dir.join("user_record_kay%40example.com.json");
    std::fs::write(&path, "{ definitely not json").unwrap();

    assert!(store.get_user("kay@example.com").unwrap().is_none());
}

#[test]
fn full_flow_persists_through_the_file_store() {
    let dir = scratch_dir("flow");

    {
        let store = JsonFileStore::open(&dir).unwrap();
        let mut app = app_with_store(Box::new(store));
        app.open_auth();
        app.sign_in("kay@example.com").unwrap();
        complete_attempt(&mut app, AnswerChoice::Agree);
    }

    // A fresh app over the same directory restores the session and history,
    // the load-at-startup lifecycle.
    let store = JsonFileStore::open(&dir).unwrap();
    let app = app_with_store(Box::new(store));
    let session = app.session().expect("session restored from disk");
    assert_eq!(session.email, "kay@example.com");
    assert_eq!(session.history.len(), 1);
    assert_eq!(session.history[0].total, 200);
}

#[test]
fn memory_store_matches_the_contract() {
    let store = MemoryStore::new();
    let user = User::new("kay@example.com");

    store.save_session(&user).unwrap();
    store.put_user(&user.email, &user).unwrap();
    store.clear_session().unwrap();

    assert!(store.load_session().unwrap().is_none());
    assert!(store.get_user("kay@example.com").unwrap().is_some());
}
