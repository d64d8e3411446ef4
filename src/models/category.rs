// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The five scored wellness dimensions.

use serde::{Deserialize, Serialize};

/// One of the five fixed wellness dimensions.
///
/// The set is closed: the question bank, the per-category ceiling, and the
/// rank thresholds are all calibrated against exactly these five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Nutrition,
    Movement,
    Sleep,
    #[serde(rename = "Social Connection")]
    SocialConnection,
    Purpose,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Nutrition,
        Category::Movement,
        Category::Sleep,
        Category::SocialConnection,
        Category::Purpose,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Nutrition => "Nutrition",
            Category::Movement => "Movement",
            Category::Sleep => "Sleep",
            Category::SocialConnection => "Social Connection",
            Category::Purpose => "Purpose",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
