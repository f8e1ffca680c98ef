//! gamesdb CLI
//!
//! Command-line interface for querying TheGamesDB.

mod commands;
mod error;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use gamesdb_client::{GamesDbClient, Settings};

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "gamesdb")]
#[command(about = "Query TheGamesDB for game, platform and artwork metadata", long_about = None)]
struct Cli {
    /// Print results as JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    /// Settings file to use instead of ~/.config/gamesdb/settings.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search games by name, platform and/or genre
    Games {
        #[arg(long)]
        name: Option<String>,

        /// Platform name, e.g. "Sony Playstation"
        #[arg(long)]
        platform: Option<String>,

        #[arg(long)]
        genre: Option<String>,
    },

    /// Show everything about one game
    Game {
        #[arg(long, default_value_t = 0)]
        id: u32,

        #[arg(long)]
        name: Option<String>,

        /// Only match this exact title
        #[arg(long)]
        exact_name: Option<String>,

        #[arg(long)]
        platform: Option<String>,
    },

    /// List artwork for a game
    Art {
        /// Game id
        id: u32,
    },

    /// List all platforms
    Platforms,

    /// Show everything about one platform
    Platform {
        /// Platform id
        id: u32,
    },

    /// List games for a platform
    PlatformGames {
        /// Platform id
        id: u32,
    },

    /// List games updated recently
    Updates {
        /// Look back this many seconds
        #[arg(long, default_value_t = 0)]
        since: u64,
    },

    /// Show an account's rating for a game
    Rating {
        game_id: u32,

        /// Account identifier (defaults to the configured account_id)
        #[arg(long)]
        account: Option<String>,
    },

    /// List an account's favourite games
    Favourites {
        /// Account identifier (defaults to the configured account_id)
        #[arg(long)]
        account: Option<String>,
    },

    /// Inspect client settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show resolved settings and where each value came from
    Show,

    /// Print the settings file path
    Path,

    /// Save an account identifier for the rating and favourites commands
    SetAccount { account_id: String },
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let json = cli.json;
    let config_file = cli.config.or_else(gamesdb_client::config_path);
    let config_file = config_file.as_deref();

    match cli.command {
        Commands::Games {
            name,
            platform,
            genre,
        } => commands::games::run_games(
            &connect(config_file)?,
            json,
            name.as_deref().unwrap_or_default(),
            platform.as_deref().unwrap_or_default(),
            genre.as_deref().unwrap_or_default(),
        ),
        Commands::Game {
            id,
            name,
            exact_name,
            platform,
        } => commands::games::run_game(
            &connect(config_file)?,
            json,
            id,
            name.as_deref().unwrap_or_default(),
            exact_name.as_deref().unwrap_or_default(),
            platform.as_deref().unwrap_or_default(),
        ),
        Commands::Art { id } => commands::games::run_art(&connect(config_file)?, json, id),
        Commands::Platforms => commands::platforms::run_platforms(&connect(config_file)?, json),
        Commands::Platform { id } => {
            commands::platforms::run_platform(&connect(config_file)?, json, id)
        }
        Commands::PlatformGames { id } => {
            commands::platforms::run_platform_games(&connect(config_file)?, json, id)
        }
        Commands::Updates { since } => {
            commands::games::run_updates(&connect(config_file)?, json, since)
        }
        Commands::Rating { game_id, account } => {
            let settings = load_settings(config_file)?;
            let client = GamesDbClient::from_settings(&settings)?;
            let account = resolve_account(&settings, account);
            commands::user::run_rating(&client, json, game_id, &account)
        }
        Commands::Favourites { account } => {
            let settings = load_settings(config_file)?;
            let client = GamesDbClient::from_settings(&settings)?;
            let account = resolve_account(&settings, account);
            commands::user::run_favourites(&client, json, &account)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(config_file),
            ConfigAction::Path => commands::config::run_config_path(config_file),
            ConfigAction::SetAccount { account_id } => {
                commands::config::run_config_set_account(config_file, &account_id)
            }
        },
    }
}

/// Resolve settings from the environment and the config file in use.
pub(crate) fn load_settings(config_file: Option<&Path>) -> Result<Settings, CliError> {
    let settings = match config_file {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    Ok(settings)
}

fn connect(config_file: Option<&Path>) -> Result<GamesDbClient, CliError> {
    let settings = load_settings(config_file)?;
    Ok(GamesDbClient::from_settings(&settings)?)
}

/// Account id from the command line, falling back to settings.
///
/// An empty result is passed through so the client reports the missing id.
fn resolve_account(settings: &Settings, cli_value: Option<String>) -> String {
    settings
        .clone()
        .with_account_id(cli_value)
        .account_id
        .unwrap_or_default()
}

/// Plain `info` output to stdout; `RUST_LOG` overrides the filter.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        })
        .target(env_logger::Target::Stdout)
        .init();
}

/// Log an empty line.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Print `value` as pretty JSON to stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    Ok(())
}
