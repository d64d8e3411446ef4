// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The fixed question bank and the answer scale.
//!
//! The bank is ordered (the order drives the progress display) and fixed at
//! build time: ten questions per category, interleaved so each round of five
//! touches every category once.

use crate::models::Category;

/// Questions per category in the fixed bank.
pub const QUESTIONS_PER_CATEGORY: usize = 10;

/// Total bank size.
pub const QUESTION_COUNT: usize = Category::ALL.len() * QUESTIONS_PER_CATEGORY;

/// One assessment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// First-person statement rated on the agree/disagree scale
    pub text: &'static str,
    /// Category the answer weight accumulates into
    pub category: Category,
}

/// One of the five fixed response options, weighted 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerChoice {
    StronglyDisagree,
    Disagree,
    Neutral,
    Agree,
    StronglyAgree,
}

impl AnswerChoice {
    /// All options, in ascending weight order.
    pub const ALL: [AnswerChoice; 5] = [
        AnswerChoice::StronglyDisagree,
        AnswerChoice::Disagree,
        AnswerChoice::Neutral,
        AnswerChoice::Agree,
        AnswerChoice::StronglyAgree,
    ];

    /// Weight of the strongest option.
    pub const MAX_WEIGHT: u32 = 5;

    /// Score weight added to the current question's category.
    pub fn weight(&self) -> u32 {
        match self {
            AnswerChoice::StronglyDisagree => 1,
            AnswerChoice::Disagree => 2,
            AnswerChoice::Neutral => 3,
            AnswerChoice::Agree => 4,
            AnswerChoice::StronglyAgree => 5,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            AnswerChoice::StronglyDisagree => "Strongly Disagree",
            AnswerChoice::Disagree => "Disagree",
            AnswerChoice::Neutral => "Neutral",
            AnswerChoice::Agree => "Agree",
            AnswerChoice::StronglyAgree => "Strongly Agree (Optimal)",
        }
    }

    /// Parse a 1-5 selection as shown on the option list.
    pub fn from_weight(weight: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.weight() == weight)
    }
}

/// Fixed, ordered question bank: ten rounds of five, one question per
/// category per round.
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    // Round 1
    Question {
        text: "I eat several servings of vegetables or fruit on most days.",
        category: Category::Nutrition,
    },
    Question {
        text: "I get at least thirty minutes of moderate activity most days.",
        category: Category::Movement,
    },
    Question {
        text: "I sleep seven or more hours on a typical night.",
        category: Category::Sleep,
    },
    Question {
        text: "I have people in my life I could call in the middle of the night.",
        category: Category::SocialConnection,
    },
    Question {
        text: "I wake up with a clear sense of what matters to me that day.",
        category: Category::Purpose,
    },
    // Round 2
    Question {
        text: "I rarely drink sugar-sweetened beverages.",
        category: Category::Nutrition,
    },
    Question {
        text: "I do strength or resistance training at least twice a week.",
        category: Category::Movement,
    },
    Question {
        text: "I go to bed and wake up at roughly the same times every day.",
        category: Category::Sleep,
    },
    Question {
        text: "I talk with close friends or family several times a week.",
        category: Category::SocialConnection,
    },
    Question {
        text: "My daily work or activities feel meaningful to me.",
        category: Category::Purpose,
    },
    // Round 3
    Question {
        text: "Most of my meals are cooked from whole ingredients rather than packaged foods.",
        category: Category::Nutrition,
    },
    Question {
        text: "I rarely sit for more than an hour without standing up and moving.",
        category: Category::Movement,
    },
    Question {
        text: "I fall asleep within about twenty minutes of lying down.",
        category: Category::Sleep,
    },
    Question {
        text: "I feel part of a community, group, or team.",
        category: Category::SocialConnection,
    },
    Question {
        text: "I am learning or building something that excites me.",
        category: Category::Purpose,
    },
    // Round 4
    Question {
        text: "I eat fish, legumes, or nuts several times a week.",
        category: Category::Nutrition,
    },
    Question {
        text: "I can climb several flights of stairs without stopping to rest.",
        category: Category::Movement,
    },
    Question {
        text: "I wake up feeling rested most mornings.",
        category: Category::Sleep,
    },
    Question {
        text: "I regularly share meals with other people.",
        category: Category::SocialConnection,
    },
    Question {
        text: "I feel my life has direction, even when plans change.",
        category: Category::Purpose,
    },
    // Round 5
    Question {
        text: "I stop eating when I feel comfortably full, not stuffed.",
        category: Category::Nutrition,
    },
    Question {
        text: "I walk or cycle for everyday errands when I can.",
        category: Category::Movement,
    },
    Question {
        text: "I avoid screens in the last half hour before bed.",
        category: Category::Sleep,
    },
    Question {
        text: "I rarely feel lonely.",
        category: Category::SocialConnection,
    },
    Question {
        text: "I contribute to something larger than myself.",
        category: Category::Purpose,
    },
    // Round 6
    Question {
        text: "I keep ultra-processed snacks out of my daily routine.",
        category: Category::Nutrition,
    },
    Question {
        text: "I stretch or work on mobility during the week.",
        category: Category::Movement,
    },
    Question {
        text: "I rarely rely on caffeine late in the day to stay alert.",
        category: Category::Sleep,
    },
    Question {
        text: "I have at least one conversation that goes beyond small talk most weeks.",
        category: Category::SocialConnection,
    },
    Question {
        text: "I can name the values I try to live by.",
        category: Category::Purpose,
    },
    // Round 7
    Question {
        text: "I drink enough water through the day.",
        category: Category::Nutrition,
    },
    Question {
        text: "I feel physically energetic for most of the day.",
        category: Category::Movement,
    },
    Question {
        text: "My bedroom is dark, quiet, and cool at night.",
        category: Category::Sleep,
    },
    Question {
        text: "I keep in touch with people who knew me at earlier stages of my life.",
        category: Category::SocialConnection,
    },
    Question {
        text: "I look forward to the years ahead.",
        category: Category::Purpose,
    },
    // Round 8
    Question {
        text: "I limit alcohol to a few drinks a week or none at all.",
        category: Category::Nutrition,
    },
    Question {
        text: "I spend time outdoors being active every week.",
        category: Category::Movement,
    },
    Question {
        text: "I rarely wake in the night and struggle to fall back asleep.",
        category: Category::Sleep,
    },
    Question {
        text: "I meet someone face to face, outside work obligations, every week.",
        category: Category::SocialConnection,
    },
    Question {
        text: "I spend time each week on things I would do even if no one noticed.",
        category: Category::Purpose,
    },
    // Round 9
    Question {
        text: "I eat my meals without rushing most days.",
        category: Category::Nutrition,
    },
    Question {
        text: "My balance is good enough to stand on one leg for thirty seconds.",
        category: Category::Movement,
    },
    Question {
        text: "I wake at my usual time without needing an alarm, or just before it.",
        category: Category::Sleep,
    },
    Question {
        text: "When something good happens, I have someone to tell.",
        category: Category::SocialConnection,
    },
    Question {
        text: "I feel useful to the people around me.",
        category: Category::Purpose,
    },
    // Round 10
    Question {
        text: "My weight has been stable over the past year without extreme dieting.",
        category: Category::Nutrition,
    },
    Question {
        text: "Physical activity is a fixed part of my weekly schedule, not an afterthought.",
        category: Category::Movement,
    },
    Question {
        text: "I avoid heavy meals and alcohol close to bedtime.",
        category: Category::Sleep,
    },
    Question {
        text: "I invest time in new friendships, not only existing ones.",
        category: Category::SocialConnection,
    },
    Question {
        text: "If I stopped working tomorrow, I would still know what to get up for.",
        category: Category::Purpose,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_has_ten_questions_per_category() {
        for category in Category::ALL {
            let count = QUESTIONS.iter().filter(|q| q.category == category).count();
            assert_eq!(count, QUESTIONS_PER_CATEGORY, "{category}");
        }
    }

    #[test]
    fn every_round_covers_all_five_categories() {
        for round in QUESTIONS.chunks(Category::ALL.len()) {
            for category in Category::ALL {
                assert!(
                    round.iter().any(|q| q.category == category),
                    "round missing {category}"
                );
            }
        }
    }

    #[test]
    fn weights_are_one_through_five_in_order() {
        let weights: Vec<u32> = AnswerChoice::ALL.iter().map(|c| c.weight()).collect();
        assert_eq!(weights, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn from_weight_round_trips() {
        for choice in AnswerChoice::ALL {
            assert_eq!(AnswerChoice::from_weight(choice.weight()), Some(choice));
        }
        assert_eq!(AnswerChoice::from_weight(0), None);
        assert_eq!(AnswerChoice::from_weight(6), None);
    }

    #[test]
    fn question_texts_are_unique() {
        let mut texts: Vec<&str> = QUESTIONS.iter().map(|q| q.text).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), QUESTION_COUNT);
    }
}
