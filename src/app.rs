// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View controller and session context.
//!
//! Owns the current screen, the in-progress quiz attempt, and the active
//! session identity, and drives every transition between them. All mutable
//! app state lives here behind explicit operations; there are no globals.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{AnswerChoice, Question, Rank, SavedScore, ScoreCard, User};
use crate::quiz::{AnswerOutcome, QuizAttempt};
use crate::services::notifier::{Event, Notifier};
use crate::services::share::SharePayload;
use crate::store::ScoreStore;
use crate::time_utils;

/// Current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Auth,
    Quiz,
    Results,
}

/// Outcome of a completed attempt, as shown on the results screen.
#[derive(Debug, Clone)]
pub struct QuizResult {
    pub scores: ScoreCard,
    pub total: u32,
    pub rank: Rank,
}

/// Session context: configuration, storage, notifier, and view state.
pub struct App {
    config: Config,
    store: Box<dyn ScoreStore>,
    notifier: Notifier,
    view: View,
    session: Option<User>,
    attempt: QuizAttempt,
    last_result: Option<QuizResult>,
}

impl App {
    /// Build the context and restore any persisted session.
    pub fn load(config: Config, store: Box<dyn ScoreStore>, notifier: Notifier) -> Self {
        let session = match store.load_session() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "Could not restore session, starting signed out");
                None
            }
        };
        if let Some(user) = &session {
            tracing::info!(email = %user.email, history = user.history.len(), "Restored session");
        }

        Self {
            config,
            store,
            notifier,
            view: View::Landing,
            session,
            attempt: QuizAttempt::new(),
            last_result: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The signed-in user, if any.
    pub fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// The most recently completed attempt (Results view).
    pub fn last_result(&self) -> Option<&QuizResult> {
        self.last_result.as_ref()
    }

    /// Landing → Auth.
    pub fn open_auth(&mut self) {
        self.view = View::Auth;
    }

    /// Back to Landing without changing session state.
    pub fn back_to_landing(&mut self) {
        self.view = View::Landing;
    }

    /// Start (or retake) the assessment: fresh all-zero scores, pointer on
    /// the first question. Session identity is untouched.
    pub fn start_quiz(&mut self) {
        self.attempt = QuizAttempt::new();
        self.view = View::Quiz;
    }

    /// Question awaiting an answer, while in the Quiz view.
    pub fn current_question(&self) -> Option<&'static Question> {
        self.attempt.current_question()
    }

    /// The in-progress attempt (progress display).
    pub fn attempt(&self) -> &QuizAttempt {
        &self.attempt
    }

    /// Record an answer for the current question. On the final question
    /// this completes the attempt and lands on Results. Outside the Quiz
    /// view this is a no-op; the option list is only offered mid-quiz.
    pub fn answer(&mut self, choice: AnswerChoice) -> AnswerOutcome {
        if self.view != View::Quiz {
            return AnswerOutcome::Completed;
        }

        let outcome = self.attempt.answer(choice);
        if outcome == AnswerOutcome::Completed {
            self.finish();
        }
        outcome
    }

    /// Complete the attempt: score, rank, persist and notify when a session
    /// is active, then transition to Results.
    fn finish(&mut self) {
        let scores = self.attempt.scores().clone();
        let total = scores.total();
        let rank = Rank::for_total(total);

        if let Some(user) = self.session.as_mut() {
            let snapshot = SavedScore::capture(
                &scores,
                time_utils::format_local_date(chrono::Local::now()),
            );
            user.record_attempt(snapshot);
            let user = user.clone();

            // Best-effort persistence: a storage failure never blocks the
            // results screen.
            if let Err(e) = self
                .store
                .save_session(&user)
                .and_then(|_| self.store.put_user(&user.email, &user))
            {
                tracing::warn!(email = %user.email, error = %e, "Failed to persist attempt");
            }

            self.notifier
                .dispatch(Event::score_update(&user.email, &scores, rank));
        }

        tracing::info!(total, rank = %rank, "Attempt complete");
        self.last_result = Some(QuizResult {
            scores,
            total,
            rank,
        });
        self.view = View::Results;
    }

    /// Sign in with an unverified email.
    ///
    /// Input without an `@` is rejected with no state change. An existing
    /// record for the email is restored, history included; otherwise a
    /// fresh record is created. Both the session slot and the per-email
    /// record are written, and a signup event fires either way.
    pub fn sign_in(&mut self, email: &str) -> Result<()> {
        let email = email.trim();
        if !email.contains('@') {
            return Err(AppError::InvalidEmail(email.to_string()));
        }

        let user = self
            .store
            .get_user(email)?
            .unwrap_or_else(|| User::new(email));

        self.store.save_session(&user)?;
        self.store.put_user(email, &user)?;

        // Fires for existing records too: the consumer treats this as a
        // sign-in signal, not first-registration.
        self.notifier.dispatch(Event::Signup {
            email: email.to_string(),
        });

        tracing::info!(email, history = user.history.len(), "Signed in");
        self.session = Some(user);
        self.view = View::Landing;
        Ok(())
    }

    /// Clear the session only; the per-email record stays durable and is
    /// recovered by signing in again with the same email.
    pub fn sign_out(&mut self) {
        if let Err(e) = self.store.clear_session() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
        if let Some(user) = self.session.take() {
            tracing::info!(email = %user.email, "Signed out");
        }
        self.view = View::Landing;
    }

    /// Share content for the most recent result.
    pub fn share_payload(&self) -> Option<SharePayload> {
        self.last_result
            .as_ref()
            .map(|r| SharePayload::for_result(r.total, r.rank, &self.config.app_url))
    }
}
