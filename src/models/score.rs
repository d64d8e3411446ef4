//! Score accumulation and rank classification.

use serde::{Deserialize, Serialize};

use crate::models::question::{AnswerChoice, QUESTIONS_PER_CATEGORY, QUESTION_COUNT};
use crate::models::Category;

/// Ceiling for a single category (ten questions at the top weight).
pub const CATEGORY_MAX: u32 = QUESTIONS_PER_CATEGORY as u32 * AnswerChoice::MAX_WEIGHT;

/// Highest possible total across the full bank.
pub const TOTAL_MAX: u32 = QUESTION_COUNT as u32 * AnswerChoice::MAX_WEIGHT;

// The rank thresholds below are calibrated against this exact bank size;
// resizing the bank without revisiting them silently misclassifies.
const _: () = assert!(QUESTION_COUNT == 50);

/// Per-category accumulated scores for one attempt.
///
/// Always carries exactly the five fixed categories. Values only grow
/// (answers are additive); a reset is a whole-card replacement at quiz
/// start. Field names match the persisted wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    #[serde(rename = "Nutrition", default)]
    pub nutrition: u32,
    #[serde(rename = "Movement", default)]
    pub movement: u32,
    #[serde(rename = "Sleep", default)]
    pub sleep: u32,
    #[serde(rename = "Social Connection", default)]
    pub social_connection: u32,
    #[serde(rename = "Purpose", default)]
    pub purpose: u32,
}

impl ScoreCard {
    /// Accumulated value for one category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Nutrition => self.nutrition,
            Category::Movement => self.movement,
            Category::Sleep => self.sleep,
            Category::SocialConnection => self.social_connection,
            Category::Purpose => self.purpose,
        }
    }

    /// Add an answer's weight to one category.
    pub fn add(&mut self, category: Category, weight: u32) {
        let entry = match category {
            Category::Nutrition => &mut self.nutrition,
            Category::Movement => &mut self.movement,
            Category::Sleep => &mut self.sleep,
            Category::SocialConnection => &mut self.social_connection,
            Category::Purpose => &mut self.purpose,
        };
        *entry += weight;
    }

    /// Sum of all five categories.
    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// `(category, value, ceiling)` rows for the results breakdown.
    pub fn chart_rows(&self) -> [(Category, u32, u32); 5] {
        Category::ALL.map(|c| (c, self.get(c), CATEGORY_MAX))
    }
}

/// Qualitative tier for a total score.
///
/// The thresholds partition the full total range into four contiguous,
/// non-overlapping tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Developing,
    Solid,
    Excellent,
    Optimal,
}

impl Rank {
    const SOLID_AT: u32 = 130;
    const EXCELLENT_AT: u32 = 180;
    const OPTIMAL_AT: u32 = 225;

    /// Classify a total score.
    pub fn for_total(total: u32) -> Rank {
        if total >= Self::OPTIMAL_AT {
            Rank::Optimal
        } else if total >= Self::EXCELLENT_AT {
            Rank::Excellent
        } else if total >= Self::SOLID_AT {
            Rank::Solid
        } else {
            Rank::Developing
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Developing => "Developing",
            Rank::Solid => "Solid",
            Rank::Excellent => "Excellent",
            Rank::Optimal => "Optimal",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
