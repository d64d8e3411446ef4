// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local key-value persistence for user records.
//!
//! Two kinds of slot: the single `current_session` record and one durable
//! record per email. Every write is a full-record replace; there are no
//! partial updates and therefore no read-modify-write races within one
//! running instance.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::User;

/// Storage keys as constants.
pub mod keys {
    /// Active session record.
    pub const CURRENT_SESSION: &str = "current_session";
    /// Per-email record prefix; the email is appended verbatim.
    pub const USER_RECORD_PREFIX: &str = "user_record_";
}

/// Build the per-email storage key (exact, case-sensitive email match).
pub fn user_record_key(email: &str) -> String {
    format!("{}{}", keys::USER_RECORD_PREFIX, email)
}

/// Minimal repository over local key-value storage.
///
/// Backends are swappable without touching scoring logic: in-memory for
/// tests and ephemeral runs, JSON files on disk for the real app.
pub trait ScoreStore: Send + Sync {
    /// Load the active session record, if any.
    fn load_session(&self) -> Result<Option<User>>;

    /// Replace the active session record.
    fn save_session(&self, user: &User) -> Result<()>;

    /// Clear the active session record, leaving per-email records intact.
    fn clear_session(&self) -> Result<()>;

    /// Load the durable record for an email.
    fn get_user(&self, email: &str) -> Result<Option<User>>;

    /// Replace the durable record for an email.
    fn put_user(&self, email: &str, user: &User) -> Result<()>;
}
