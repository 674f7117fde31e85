//! Interactive console runner
//!
//! Drives one quiz attempt per invocation: fetch or load the questions,
//! begin a session, then walk the state machine from console input until
//! the attempt is graded or abandoned.

pub mod command;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::api::auth::AccessTokenStore;
use crate::api::client::ApiClient;
use crate::config::Config;
use crate::quiz::error::QuizError;
use crate::quiz::grading::LocalGrader;
use crate::quiz::model::{load_question_file, AttemptResult, QuizMode, QuizSelection};
use crate::quiz::session::{Advance, QuizSession, SubmitAttempt};

use command::{parse_command, Command, ParseResult};

/// The console application
pub struct App {
    /// Application configuration
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run a quiz attempt against the remote question bank
    pub async fn run_remote(&self, selection: QuizSelection) -> Result<()> {
        let user_id = self.config.require_user_id()?.to_string();
        let token = AccessTokenStore::get_token()?;
        let client = ApiClient::new(&self.config.base_url, token);
        let mode = selection.mode();

        let started = match client.start_quiz(&selection).await {
            Ok(started) => started,
            Err(err) => {
                if err.requires_reauth() {
                    println!("Your access token was rejected. Run `preceptor login <token>` and try again.");
                }
                return Err(QuizError::StartFailed(err)).context("Could not start the quiz");
            }
        };

        let mut session = QuizSession::new(client, mode, user_id);
        session
            .begin(started.questions, started.attempt_id)
            .context("The bank returned this quiz without questions")?;

        drive(&mut session).await
    }

    /// Run a practice attempt from a local question file, graded locally
    pub async fn run_practice(&self, path: &Path) -> Result<()> {
        let questions = load_question_file(path)?;
        let grader = LocalGrader::new(questions.clone());
        let user_id = self.config.user_id.clone().unwrap_or_else(|| "local".to_string());

        // The grader ignores the dialect; any mode works here.
        let mut session = QuizSession::new(grader, QuizMode::Chapter, user_id);
        session
            .begin(questions, format!("practice-{}", std::process::id()))
            .with_context(|| format!("{:?} contains no questions", path))?;

        drive(&mut session).await
    }
}

/// Walk one attempt through console input
async fn drive<S: SubmitAttempt>(session: &mut QuizSession<S>) -> Result<()> {
    println!("Attempt started. Type `help` for commands.");
    print_question(session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        // EOF abandons the attempt
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let command = match parse_command(&line) {
            ParseResult::Ok(command) => command,
            ParseResult::Unknown(word) => {
                println!("Unknown command `{word}`. Type `help` for the list.");
                continue;
            }
        };

        match command {
            Command::Answer(key) => {
                if session.select_option(&key) {
                    print_feedback(session);
                } else if session.is_current_answered() {
                    println!("Answer locked in. Type `n` for the next question.");
                } else {
                    println!("No such option here. Pick one of the listed keys.");
                }
            }
            Command::Next => match session.go_next().await {
                Ok(Some(Advance::Moved(_))) => print_question(session),
                Ok(Some(Advance::Submitted(result))) => {
                    print_result(&result);
                    return Ok(());
                }
                Ok(None) => {}
                Err(QuizError::AnswerRequired) => {
                    println!("Answer this question before moving on.");
                }
                Err(err) => print_submit_failure(&err),
            },
            Command::Previous => match session.go_previous() {
                Some(_) => print_question(session),
                None => println!("Already at the first question."),
            },
            Command::Submit => match session.submit().await {
                Ok(Some(result)) => {
                    print_result(&result);
                    return Ok(());
                }
                Ok(None) => {}
                Err(err) => print_submit_failure(&err),
            },
            Command::Help => print_help(),
            Command::Quit => {
                println!("Attempt abandoned.");
                return Ok(());
            }
            Command::Nop => {}
        }
    }
}

/// Render the current question with any restored selection
fn print_question<S: SubmitAttempt>(session: &QuizSession<S>) {
    let Some(question) = session.current_question() else {
        return;
    };

    println!();
    println!("Question {} of {}", session.current_index() + 1, session.len());
    println!("{}", question.text);

    let selected = session.current_answer().map(|r| r.selected_key.clone());
    for option in &question.options {
        let marker = if selected.as_deref() == Some(option.key.as_str()) {
            "\u{25CF}" // ●
        } else {
            "\u{25CB}" // ○
        };
        println!("  {} ({}) {}", marker, option.key, option.content);
    }

    // A restored answer re-surfaces the feedback view
    if session.is_current_answered() {
        print_feedback(session);
    }
}

/// Reveal correctness and the explanation for the locked answer
fn print_feedback<S: SubmitAttempt>(session: &QuizSession<S>) {
    let Some(question) = session.current_question() else {
        return;
    };
    let Some(record) = session.current_answer() else {
        return;
    };

    match question.is_correct(&record.selected_key) {
        Some(true) => println!("Correct."),
        Some(false) => {
            if let Some(correct) = &question.correct_answer {
                println!("Incorrect. The answer is ({correct}).");
            }
        }
        None => println!("Answer recorded."),
    }

    if let Some(explanation) = &question.explanation {
        println!("  {explanation}");
    }
}

/// Render the grading result
fn print_result(result: &AttemptResult) {
    println!();
    println!("Attempt submitted.");
    if let (Some(correct), Some(total)) = (result.correct_count, result.total_questions) {
        println!("{correct}/{total} correct");
    }
    if let Some(score) = result.score {
        println!("Score: {score:.1}%");
    }
    for (key, value) in &result.extra {
        println!("{key}: {value}");
    }
}

fn print_submit_failure(err: &QuizError) {
    println!("Submission failed: {err}");
    if err.is_recoverable() {
        println!("Your answers are safe. Type `submit` to try again, or `quit` to abandon.");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  a, b, c, ...  answer the current question");
    println!("  n, next       move forward (submits after the last question)");
    println!("  p, prev       move back");
    println!("  submit        submit the attempt now");
    println!("  q, quit       abandon the attempt");
}
