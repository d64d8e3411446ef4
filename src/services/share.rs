// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Share payloads for a completed attempt.

use crate::models::{Rank, TOTAL_MAX};

/// Pre-filled share content for a completed attempt.
///
/// Consumable by a native share capability where one exists; otherwise the
/// provider URLs below apply, and `url` doubles as the copy-to-clipboard
/// target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Build the share content for a total score.
    pub fn for_result(total: u32, rank: Rank, app_url: &str) -> Self {
        Self {
            title: "The Boland Index".to_string(),
            text: format!(
                "I just scored {}/{} on The Boland Index. My longevity profile is {}. Check yours!",
                total, TOTAL_MAX, rank
            ),
            url: app_url.to_string(),
        }
    }

    /// X (Twitter) intent URL with the text and link pre-filled.
    pub fn tweet_url(&self) -> String {
        format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            urlencoding::encode(&self.text),
            urlencoding::encode(&self.url)
        )
    }

    /// LinkedIn share-offsite URL for the link.
    pub fn linkedin_url(&self) -> String {
        format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            urlencoding::encode(&self.url)
        )
    }
}
