// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Outbound collaborators: webhook notifier and share surface.

pub mod notifier;
pub mod share;

pub use notifier::{Event, Notifier};
pub use share::SharePayload;
