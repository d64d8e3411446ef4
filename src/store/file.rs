// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON-file store backend: one file per key under the data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{keys, user_record_key, ScoreStore};
use crate::error::{AppError, Result};
use crate::models::User;

/// File-backed store.
///
/// Keys map to `<data_dir>/<encoded-key>.json`; writes replace the whole
/// file, so the last writer wins across concurrent instances.
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| {
            AppError::Storage(format!("Failed to create {}: {}", data_dir.display(), e))
        })?;
        Ok(Self { data_dir })
    }

    /// Keys embed an arbitrary email; percent-encode for a safe file name.
    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.json", urlencoding::encode(key)))
    }

    fn read(&self, key: &str) -> Result<Option<User>> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        match serde_json::from_str(&raw) {
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
        let path = self.path_for(key);
        let raw = serde_json::to_string_pretty(user)
            .map_err(|e| AppError::Storage(format!("Failed to serialize record: {}", e)))?;
        fs::write(&path, raw).map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn load_session(&self) -> Result<Option<User>> {
        self.read(keys::CURRENT_SESSION)
    }

    fn save_session(&self, user: &User) -> Result<()> {
        self.write(keys::CURRENT_SESSION, user)
    }

    fn clear_session(&self) -> Result<()> {
        self.remove(keys::CURRENT_SESSION)
    }

    fn get_user(&self, email: &str) -> Result<Option<User>> {
        self.read(&user_record_key(email))
    }

    fn put_user(&self, email: &str, user: &User) -> Result<()> {
        self.write(&user_record_key(email), user)
    }
}
