// Separate test binary: the handler is process-wide.

use userform_cli::interrupt;

#[test]
fn handler_installs_once() {
    interrupt::install().unwrap();
    let err = interrupt::install().unwrap_err();
    assert!(err.to_string().contains("Ctrl-C handler"));
}

#[test]
fn cancel_message_matches_form_output() {
    assert_eq!(interrupt::CANCELLED_MESSAGE.trim(), "Cancelled by user.");
}
