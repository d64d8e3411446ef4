// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store backend for tests and ephemeral runs.

use dashmap::DashMap;

use super::{keys, user_record_key, ScoreStore};
use crate::error::{AppError, Result};
use crate::models::User;

/// DashMap-backed store; contents die with the process.
///
/// Records are held as raw JSON so the backend behaves exactly like the
/// file store, including the malformed-record fallback.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw record body under a key, bypassing serialization.
    /// Exists so tests can stage malformed records.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.records.insert(key.to_string(), raw.to_string());
    }

    fn read(&self, key: &str) -> Result<Option<User>> {
        let Some(raw) = self.records.get(key) else {
            return Ok(None);
        };
        match serde_json::from_str(raw.value()) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                // Malformed record: recover with a fresh one rather than
                // failing the session.
                tracing::warn!(key, error = %e, "Discarding malformed stored record");
                Ok(None)
            }
        }
    }

    fn write(&self, key: &str, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)
            .map_err(|e| AppError::Storage(format!("Failed to serialize record: {}", e)))?;
        self.records.insert(key.to_string(), raw);
        Ok(())
    }
}

impl ScoreStore for MemoryStore {
    fn load_session(&self) -> Result<Option<User>> {
        self.read(keys::CURRENT_SESSION)
    }

    fn save_session(&self, user: &User) -> Result<()> {
        self.write(keys::CURRENT_SESSION, user)
    }

    fn clear_session(&self) -> Result<()> {
        self.records.remove(keys::CURRENT_SESSION);
        Ok(())
    }

    fn get_user(&self, email: &str) -> Result<Option<User>> {
        self.read(&user_record_key(email))
    }

    fn put_user(&self, email: &str, user: &User) -> Result<()> {
        self.write(&user_record_key(email), user)
    }
}
