// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Boland Index terminal front-end.
//!
//! Drives the view state machine over stdin/stdout: landing screen,
//! optional email sign-in, the fifty-question assessment, and the results
//! screen with history and share links. Presentation only; all domain
//! logic lives in the library.

use std::io::{self, BufRead, Write};

use boland_index::app::{App, View};
use boland_index::config::Config;
use boland_index::models::{AnswerChoice, QUESTION_COUNT, TOTAL_MAX};
use boland_index::services::notifier::Notifier;
use boland_index::store::JsonFileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;
    init_logging(config.environment.is_production());

    tracing::info!(
        data_dir = %config.data_dir.display(),
        environment = ?config.environment,
        "Starting Boland Index"
    );

    let store = JsonFileStore::open(&config.data_dir)?;
    let notifier = Notifier::spawn(&config);
    let mut app = App::load(config, Box::new(store), notifier);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match app.view() {
            View::Landing => {
                println!("\n=== THE BOLAND INDEX ===");
                println!("A five-pillar longevity self-assessment.\n");
                if let Some(user) = app.session() {
                    println!("Signed in as {}\n", user.email);
                }
                println!("  [1] Begin assessment");
                if app.session().is_none() {
                    println!("  [2] Sign in to save progress");
                } else {
                    println!("  [2] Sign out");
                }
                println!("  [q] Quit");

                let Some(input) = prompt(&mut lines)? else { break };
                match input.as_str() {
                    "1" => app.start_quiz(),
                    "2" if app.session().is_none() => app.open_auth(),
                    "2" => app.sign_out(),
                    "q" => break,
                    _ => {}
                }
            }

            View::Auth => {
                println!("\nEnter your email to save your scores privately, or [b] to go back.");
                let Some(input) = prompt(&mut lines)? else { break };
                if input == "b" {
                    app.back_to_landing();
                } else {
                    match app.sign_in(&input) {
                        Ok(()) => println!("Welcome back. Your history is loaded."),
                        Err(e) => println!("{}", e),
                    }
                }
            }

            View::Quiz => {
                let question = app
                    .current_question()
                    .expect("quiz view always has a question");
                let index = app.attempt().question_index();
                let percent = app.attempt().progress_percent();

                println!(
                    "\n[{:>3}%] Question {} / {} - {}",
                    percent,
                    index + 1,
                    QUESTION_COUNT,
                    question.category
                );
                println!("{}\n", question.text);
                for choice in AnswerChoice::ALL {
                    println!("  [{}] {}", choice.weight(), choice.label());
                }

                let Some(input) = prompt(&mut lines)? else { break };
                match input.parse().ok().and_then(AnswerChoice::from_weight) {
                    Some(choice) => {
                        app.answer(choice);
                    }
                    None => println!("Pick a number from 1 to 5."),
                }
            }

            View::Results => {
                let result = app
                    .last_result()
                    .expect("results view always has a result")
                    .clone();

                println!("\n=== TOTAL BOLAND INDEX: {} / {} ===", result.total, TOTAL_MAX);
                println!("Status: {}\n", result.rank);
                for (category, value, max) in result.scores.chart_rows() {
                    println!("  {:<18} {:>2} / {}", category.label(), value, max);
                }

                if let Some(user) = app.session() {
                    if user.history.len() > 1 {
                        println!("\nYour progress history:");
                        for entry in &user.history {
                            println!("  {:<12} {} / {}", entry.date, entry.total, TOTAL_MAX);
                        }
                    }
                }

                if let Some(share) = app.share_payload() {
                    println!("\nShare your profile:");
                    println!("  X:        {}", share.tweet_url());
                    println!("  LinkedIn: {}", share.linkedin_url());
                    println!("  Link:     {}", share.url);
                }

                println!("\n  [1] Retake assessment");
                if app.session().is_some() {
                    println!("  [2] Sign out");
                }
                println!("  [b] Back to start  [q] Quit");

                let Some(input) = prompt(&mut lines)? else { break };
                match input.as_str() {
                    "1" => app.start_quiz(),
                    "2" if app.session().is_some() => app.sign_out(),
                    "b" => app.back_to_landing(),
                    "q" => break,
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

/// Print the prompt and read one trimmed line; `None` on EOF.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Initialize logging: structured JSON in production, compact otherwise.
/// Webhook delivery failures only show at the development default level.
fn init_logging(production: bool) {
    let default_level = if production {
        "boland_index=info"
    } else {
        "boland_index=debug"
    };
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(default_level.parse().unwrap())
        .add_directive("info".parse().unwrap());

    if production {
        let format = tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true);
        tracing_subscriber::registry().with(filter).with(format).init();
    } else {
        let format = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false);
        tracing_subscriber::registry().with(filter).with(format).init();
    }
}
