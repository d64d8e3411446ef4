// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quiz engine: fixed question sequence with additive score accumulation.

use crate::models::{AnswerChoice, Question, ScoreCard, QUESTIONS, QUESTION_COUNT};

/// One run through the question bank.
///
/// Created fresh at quiz start (all-zero scores, pointer on the first
/// question); every question is visited exactly once in fixed order. There
/// is no partial save: an attempt either completes or is abandoned.
#[derive(Debug, Clone, Default)]
pub struct QuizAttempt {
    index: usize,
    scores: ScoreCard,
}

/// What happened after recording an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// More questions remain.
    Advanced,
    /// That was the last question; the attempt is complete.
    Completed,
}

impl QuizAttempt {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question currently awaiting an answer, or `None` once complete.
    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.index)
    }

    /// Zero-based pointer into the bank.
    pub fn question_index(&self) -> usize {
        self.index
    }

    /// Percent of the bank already answered, for the progress display.
    pub fn progress_percent(&self) -> u32 {
        (self.index * 100 / QUESTION_COUNT) as u32
    }

    pub fn is_complete(&self) -> bool {
        self.index >= QUESTION_COUNT
    }

    /// Running per-category scores.
    pub fn scores(&self) -> &ScoreCard {
        &self.scores
    }

    /// Record an answer for the current question and advance the pointer.
    ///
    /// The weight lands on the current question's category; the final
    /// question's weight is applied before completion is reported. Answers
    /// after completion are ignored.
    pub fn answer(&mut self, choice: AnswerChoice) -> AnswerOutcome {
        let Some(question) = self.current_question() else {
            return AnswerOutcome::Completed;
        };

        self.scores.add(question.category, choice.weight());
        self.index += 1;

        if self.is_complete() {
            AnswerOutcome::Completed
        } else {
            AnswerOutcome::Advanced
        }
    }
}
