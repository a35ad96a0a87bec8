//! CLI-facing helpers
//!
//! Name resolution for the invoked binary and rewriting of suggested
//! shell commands so help text always shows the name the user ran.

pub mod name;

pub use name::{cli_name, replace_cli_name, resolve_cli_name, DEFAULT_CLI_NAME};
