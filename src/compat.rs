//! Product name compatibility table
//!
//! The gateway has shipped under three names: `clawdbot`, then `moltbot`,
//! then `tessa`. A fourth name, `moldbot`, briefly left state directories
//! and config files behind without ever shipping environment variables.
//! Every resolver in this crate walks these generations in a fixed order,
//! so the table lives here rather than being duplicated per lookup.

/// Current product name
pub const PROJECT_NAME: &str = "tessa";

/// First legacy product name (the rename immediately before `tessa`)
pub const LEGACY_PROJECT_NAME_1: &str = "moltbot";

/// Second legacy product name (the original name)
pub const LEGACY_PROJECT_NAME_2: &str = "clawdbot";

/// Historical name variant; never a primary name, probed on disk only
pub const HISTORICAL_PROJECT_NAME: &str = "moldbot";

/// One generation of the product identity: the pieces of the name that
/// surface in environment variables, dot-directories, and config filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// Product name as invoked on the command line
    pub name: &'static str,
    /// Environment variable prefix (`TESSA` in `TESSA_STATE_DIR`)
    pub env_prefix: &'static str,
    /// Dot-directory under the user's home (`.tessa`)
    pub dot_dir: &'static str,
    /// Config filename inside the state directory (`tessa.json`)
    pub config_file: &'static str,
}

impl Namespace {
    /// Build a full environment variable name for this generation,
    /// e.g. `env_key("STATE_DIR")` on the current generation is
    /// `TESSA_STATE_DIR`.
    pub fn env_key(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }
}

/// The current generation
pub const CURRENT: Namespace = Namespace {
    name: PROJECT_NAME,
    env_prefix: "TESSA",
    dot_dir: ".tessa",
    config_file: "tessa.json",
};

/// First legacy generation
pub const LEGACY_1: Namespace = Namespace {
    name: LEGACY_PROJECT_NAME_1,
    env_prefix: "MOLTBOT",
    dot_dir: ".moltbot",
    config_file: "moltbot.json",
};

/// Second legacy generation
pub const LEGACY_2: Namespace = Namespace {
    name: LEGACY_PROJECT_NAME_2,
    env_prefix: "CLAWDBOT",
    dot_dir: ".clawdbot",
    config_file: "clawdbot.json",
};

/// Historical variant. Never shipped environment overrides; its `env_prefix`
/// is present for completeness but must not appear in any override chain.
pub const HISTORICAL: Namespace = Namespace {
    name: HISTORICAL_PROJECT_NAME,
    env_prefix: "MOLDBOT",
    dot_dir: ".moldbot",
    config_file: "moldbot.json",
};

/// All generations that honor environment overrides, highest precedence
/// first. Most override chains iterate this list.
pub const ENV_GENERATIONS: [&Namespace; 3] = [&CURRENT, &LEGACY_1, &LEGACY_2];

/// The override chain for OAuth dir, gateway port, and Nix mode. These
/// lookups skip the `MOLTBOT_*` namespace; that asymmetry is long-standing
/// observable behavior and is kept as-is.
pub const OVERRIDE_PAIR: [&Namespace; 2] = [&CURRENT, &LEGACY_2];

/// CLI names accepted when matching the invoked script's basename
pub const KNOWN_CLI_NAMES: [&str; 3] = [
    PROJECT_NAME,
    LEGACY_PROJECT_NAME_1,
    LEGACY_PROJECT_NAME_2,
];

/// Legacy config filenames in probe order
pub const LEGACY_CONFIG_FILENAMES: [&str; 3] = [
    LEGACY_1.config_file,
    LEGACY_2.config_file,
    HISTORICAL.config_file,
];

/// Legacy state dot-directories in probe order. Note this order differs
/// from [`LEGACY_CONFIG_FILENAMES`]: the original `.clawdbot` installs
/// vastly outnumber `.moltbot` ones, so it is scanned first.
pub const LEGACY_STATE_DIRNAMES: [&str; 3] = [
    LEGACY_2.dot_dir,
    LEGACY_1.dot_dir,
    HISTORICAL.dot_dir,
];

/// Plugin manifest filename (current); consumed by the plugin loader
pub const PLUGIN_MANIFEST_FILENAME: &str = "tessa.plugin.json";

/// Legacy plugin manifest filenames the loader still accepts
pub const LEGACY_PLUGIN_MANIFEST_FILENAMES: [&str; 2] =
    ["moltbot.plugin.json", "clawdbot.plugin.json"];
