// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Boland Index: a five-pillar longevity self-assessment.
//!
//! This crate provides the quiz engine, scoring and ranking, local score
//! history, and the fire-and-forget webhook notifications behind the
//! front-end.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod quiz;
pub mod services;
pub mod store;
pub mod time_utils;

pub use app::{App, View};
pub use error::{AppError, Result};
