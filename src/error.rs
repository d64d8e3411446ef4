// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid email address: {0:?} (must contain '@')")]
    InvalidEmail(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for app operations
pub type Result<T> = std::result::Result<T, AppError>;
