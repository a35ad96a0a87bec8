//! CLI name resolution
//!
//! The binary may be invoked as `tessa` or under one of its former names
//! via compatibility symlinks. Help text and suggested commands should
//! echo whichever name the user actually typed.

use std::path::Path;

use crate::compat::{ENV_GENERATIONS, KNOWN_CLI_NAMES, PROJECT_NAME};
use crate::env::{first_override, EnvSource, ProcessEnv};

/// Name used when nothing else matches
pub const DEFAULT_CLI_NAME: &str = PROJECT_NAME;

/// Package-runner tokens that may precede the CLI name in a command line
const RUNNER_TOKENS: [&str; 4] = ["pnpm", "npm", "bunx", "npx"];

/// Resolve the display name of the CLI.
///
/// Precedence: `TESSA_CLI_NAME` / `MOLTBOT_CLI_NAME` / `CLAWDBOT_CLI_NAME`
/// (first trimmed non-empty wins, returned as-is), then the basename of the
/// invoked script in `argv[1]` when it exactly matches a known name, then
/// [`DEFAULT_CLI_NAME`].
pub fn resolve_cli_name(argv: &[String], env: &dyn EnvSource) -> String {
    if let Some(name) = first_override(env, &ENV_GENERATIONS, "CLI_NAME") {
        return name;
    }
    let Some(argv1) = argv.get(1) else {
        return DEFAULT_CLI_NAME.to_string();
    };
    let base = Path::new(argv1)
        .file_name()
        .map(|s| s.to_string_lossy().trim().to_string())
        .unwrap_or_default();
    if KNOWN_CLI_NAMES.contains(&base.as_str()) {
        base
    } else {
        DEFAULT_CLI_NAME.to_string()
    }
}

/// Resolve the CLI name from the live process arguments and environment.
pub fn cli_name() -> String {
    // Runner-style argv carries the invoked script in slot 1; mirror that
    // shape with the current executable path.
    let exe = std::env::args().next().unwrap_or_default();
    resolve_cli_name(&[exe.clone(), exe], &ProcessEnv)
}

/// Rewrite the leading CLI name in a suggested shell command.
///
/// Matches only at the start of the string: an optional package-runner
/// token (`pnpm`, `npm`, `bunx`, `npx`) with its trailing whitespace, then
/// a known CLI name as a whole word. The name token is replaced with
/// `cli_name`; the runner prefix and everything after the name are kept
/// verbatim. Blank or non-matching commands come back unchanged.
pub fn replace_cli_name(command: &str, cli_name: &str) -> String {
    if command.trim().is_empty() {
        return command.to_string();
    }
    let (prefix, rest) = split_runner_prefix(command);
    match leading_cli_name(rest) {
        Some(name_len) => format!("{}{}{}", prefix, cli_name, &rest[name_len..]),
        None => command.to_string(),
    }
}

/// Split off a leading runner token plus at least one whitespace character.
/// Returns an empty prefix when no runner leads the command.
fn split_runner_prefix(command: &str) -> (&str, &str) {
    for runner in RUNNER_TOKENS {
        if let Some(rest) = command.strip_prefix(runner) {
            let after_ws = rest.trim_start();
            let ws = rest.len() - after_ws.len();
            if ws > 0 {
                return command.split_at(runner.len() + ws);
            }
        }
    }
    ("", command)
}

/// Length of a known CLI name at the start of `input`, provided it ends on
/// a word boundary (end of string or a non `[A-Za-z0-9_]` character).
fn leading_cli_name(input: &str) -> Option<usize> {
    for name in KNOWN_CLI_NAMES {
        if let Some(rest) = input.strip_prefix(name) {
            let at_boundary = match rest.chars().next() {
                None => true,
                Some(c) => !(c.is_ascii_alphanumeric() || c == '_'),
            };
            if at_boundary {
                return Some(name.len());
            }
        }
    }
    None
}
