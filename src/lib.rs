// Library root
// -----------
// The binary (`main.rs`) wires these modules into the interactive form.
//
// Module responsibilities:
// - `validate`: email shape and password acceptance rules.
// - `hash`: password digest stored in place of the plaintext.
// - `record`: the user record written to the store file.
// - `store`: append-only JSON array file holding all records.
// - `config`: resolves where the store file lives.
// - `interrupt`: Ctrl-C handler that cancels the form cleanly.
// - `ui`: the prompt loop, behind a `Prompter` so it can be scripted.
// - `logging`: tracing subscriber setup for the binary.
pub mod config;
pub mod hash;
pub mod interrupt;
pub mod logging;
pub mod record;
pub mod store;
pub mod ui;
pub mod validate;
