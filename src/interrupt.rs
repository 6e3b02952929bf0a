// Ctrl-C handling. Prompts that read a whole line (the hidden password
// prompts) and the save step leave signal generation on, so SIGINT is
// caught here and ends the form the same way as an in-prompt cancel.

use anyhow::{Context, Result};

/// Printed whenever the user cancels the form.
pub const CANCELLED_MESSAGE: &str = "\nCancelled by user.";

/// Install the process-wide SIGINT handler: print the cancel message and
/// exit 0. Fails if a handler was already installed.
pub fn install() -> Result<()> {
    ctrlc::set_handler(|| {
        println!("{CANCELLED_MESSAGE}");
        std::process::exit(0);
    })
    .context("Failed to install Ctrl-C handler")
}
