// Entrypoint for the CLI form.
// - Keeps `main` small: resolve config, hand the terminal prompter to the form.
// - Every outcome is reported on stdout; the process always exits 0.

use userform_cli::config::Config;
use userform_cli::interrupt;
use userform_cli::logging;
use userform_cli::ui::{self, TerminalPrompter};

fn main() {
    logging::init();
    if let Err(e) = interrupt::install() {
        tracing::warn!(error = %e, "Ctrl-C will not be caught");
    }

    println!("=== User form ===");
    let result = Config::from_env().and_then(|cfg| {
        let mut prompter = TerminalPrompter::new();
        ui::run_form(&mut prompter, &cfg.users_file)
    });

    let _ = ui::report(&result, &mut std::io::stdout());
}
