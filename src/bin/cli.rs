//! Tessa CLI
//!
//! Inspection commands for the resolved filesystem locations, names, and
//! ports. Useful when debugging why the gateway picked up a particular
//! config file after a rename migration.

use clap::{Parser, Subcommand};
use console::style;
use tessa::cli::{cli_name, replace_cli_name};
use tessa::config::{
    self, gateway_port, is_nix_mode, load_config, resolve_default_config_candidates,
    ResolvedPaths,
};
use tessa::env::ProcessEnv;
use tessa::{Result, VERSION};

#[derive(Parser)]
#[command(
    name = "tessa",
    author = "Tessa Contributors",
    version = VERSION,
    about = "Tessa - path and name resolution for the agent gateway",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every resolved location (state dir, config, OAuth, lock dir)
    Paths {
        /// Also list the full config candidate chain in precedence order
        #[arg(long)]
        candidates: bool,
    },

    /// Show the active config file and its parsed contents
    Config,

    /// Show the effective gateway port
    Port,

    /// Show the resolved CLI name, optionally rewriting a command with it
    Name {
        /// Command line to rewrite, e.g. "npx clawdbot start"
        #[arg(long)]
        rewrite: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tessa=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Paths { candidates } => show_paths(candidates),
        Commands::Config => show_config(),
        Commands::Port => show_port(),
        Commands::Name { rewrite } => show_name(rewrite),
    }
}

fn show_paths(candidates: bool) -> Result<()> {
    let paths = ResolvedPaths::capture();

    println!("{}", style("Resolved locations").cyan().bold());
    print_row("state dir", &paths.state_dir.display().to_string());
    print_row("config path", &paths.config_path.display().to_string());
    print_row("oauth dir", &paths.oauth_dir.display().to_string());
    print_row("oauth path", &paths.oauth_path.display().to_string());
    print_row(
        "gateway lock dir",
        &paths.gateway_lock_dir.display().to_string(),
    );
    print_row("nix mode", if is_nix_mode() { "yes" } else { "no" });

    if candidates {
        let home = dirs::home_dir().unwrap_or_else(|| ".".into());
        println!("\n{}", style("Config candidates (first existing wins)").cyan().bold());
        for candidate in resolve_default_config_candidates(&ProcessEnv, &home) {
            let marker = if candidate.exists() {
                style("*").green()
            } else {
                style(" ").dim()
            };
            println!("  {} {}", marker, candidate.display());
        }
    }

    Ok(())
}

fn show_config() -> Result<()> {
    let path = config::config_path();
    let config = load_config()?;

    print_row("config path", &path.display().to_string());
    if !path.exists() {
        println!("{}", style("  (file does not exist, showing defaults)").dim());
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn show_port() -> Result<()> {
    let config = load_config()?;
    println!("{}", gateway_port(Some(&config)));
    Ok(())
}

fn show_name(rewrite: Option<String>) -> Result<()> {
    let name = cli_name();
    match rewrite {
        Some(command) => println!("{}", replace_cli_name(&command, &name)),
        None => println!("{name}"),
    }
    Ok(())
}

fn print_row(label: &str, value: &str) {
    println!("  {} {}", style(format!("{label:>18}")).dim(), value);
}
