// UI layer: the interactive form. Prompting goes through `Prompter` so
// the flow can run against the terminal (`dialoguer`) or a script.
//
// Flow: name -> email (repeat until valid) -> password -> confirmation
// (repeat both until non-empty and equal) -> save.

use crate::record::UserRecord;
use crate::store;
use crate::validate::{check_password, is_blank, is_valid_email, PasswordError};
use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use crate::interrupt::CANCELLED_MESSAGE;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Source of answers for the form.
///
/// An `io::ErrorKind::Interrupted` error from any method is read as the
/// user cancelling the form.
pub trait Prompter {
    /// Ask for a visible line of text.
    fn text(&mut self, prompt: &str) -> io::Result<String>;
    /// Ask for a hidden line of text.
    fn secret(&mut self, prompt: &str) -> io::Result<String>;
    /// Show a message to the user.
    fn notice(&mut self, message: &str);
}

/// `Prompter` backed by `dialoguer` on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str) -> io::Result<String> {
        // Blank answers are let through; the form re-prompts itself.
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }

    fn secret(&mut self, prompt: &str) -> io::Result<String> {
        // `Password` hides input in terminal.
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
    }

    fn notice(&mut self, message: &str) {
        println!("{message}");
    }
}

/// How the form ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Saved(UserRecord),
    Cancelled,
}

struct Answers {
    name: String,
    email: String,
    password: String,
}

/// Run the whole form and append the resulting record to `store_path`.
///
/// Invalid answers never surface as errors; they are re-asked. Errors
/// returned here come from the prompter (other than interruption) or
/// from writing the store.
pub fn run_form<P: Prompter>(prompter: &mut P, store_path: &Path) -> Result<FormOutcome> {
    let answers = match collect(prompter) {
        Ok(answers) => answers,
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            tracing::info!("form cancelled by user");
            return Ok(FormOutcome::Cancelled);
        }
        Err(e) => return Err(e).context("Failed to read input"),
    };

    let user = UserRecord::new(answers.name, answers.email, &answers.password);
    save_with_spinner(&user, store_path)?;
    Ok(FormOutcome::Saved(user))
}

/// Write the closing message for a finished form to `out`. Failures are
/// reported here only, not logged, so the user sees them once.
pub fn report<W: Write>(result: &Result<FormOutcome>, out: &mut W) -> io::Result<()> {
    match result {
        Ok(FormOutcome::Saved(user)) => {
            writeln!(out, "User saved. (password stored as a hash)")?;
            writeln!(out, "Email: {}", user.email)
        }
        Ok(FormOutcome::Cancelled) => writeln!(out, "{CANCELLED_MESSAGE}"),
        Err(e) => writeln!(out, "Error: {e:#}"),
    }
}

fn collect<P: Prompter>(prompter: &mut P) -> io::Result<Answers> {
    let name = ask_required(prompter, "Full name")?;

    let mut email = ask_required(prompter, "Email")?;
    while !is_valid_email(&email) {
        tracing::debug!("email rejected");
        prompter.notice("Invalid email, example: user@domain.tld");
        email = ask_required(prompter, "Email")?;
    }

    let password = loop {
        let password = prompter.secret("Password")?;
        if password.is_empty() {
            prompter.notice(&PasswordError::Empty.to_string());
            continue;
        }
        let confirmation = prompter.secret("Confirm password")?;
        match check_password(&password, &confirmation) {
            Ok(()) => break password,
            Err(e) => prompter.notice(&e.to_string()),
        }
    };

    Ok(Answers {
        name,
        email,
        password,
    })
}

/// Ask until the trimmed answer is non-empty.
fn ask_required<P: Prompter>(prompter: &mut P, prompt: &str) -> io::Result<String> {
    loop {
        let value = prompter.text(prompt)?;
        if !is_blank(&value) {
            return Ok(value.trim().to_string());
        }
        prompter.notice("Value required, try again.");
    }
}

fn save_with_spinner(user: &UserRecord, store_path: &Path) -> Result<()> {
    // Read first so discard warnings are not drawn over the spinner.
    let entries = store::read_entries(store_path)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Saving...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = store::append_entry(entries, user, store_path);
    spinner.finish_and_clear();

    let count = result?;
    tracing::info!(path = %store_path.display(), count, "user appended to store");
    Ok(())
}
