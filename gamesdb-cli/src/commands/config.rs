use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamesdb_client::{SettingSource, Settings};

use crate::CliError;

fn mask_value(s: &str) -> String {
    if s.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", s.chars().take(4).collect::<String>())
    }
}

/// Show resolved settings and their sources.
pub(crate) fn run_config_show(path: Option<&Path>) -> Result<(), CliError> {
    let sources = gamesdb_client::settings_sources(path);
    let settings = crate::load_settings(path)?;

    log::info!(
        "{}",
        "TheGamesDB Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let account = settings.account_id.as_deref().map(mask_value);
    let timeout = settings.timeout_secs.to_string();
    let strict = settings.strict_dates.to_string();
    let fields: &[(&str, &SettingSource, Option<&str>)] = &[
        ("base_url", &sources.base_url, Some(settings.base_url.as_str())),
        ("account_id", &sources.account_id, account.as_deref()),
        ("timeout_secs", &sources.timeout_secs, Some(timeout.as_str())),
        ("strict_dates", &sources.strict_dates, Some(strict.as_str())),
    ];

    for (name, source, value) in fields {
        match value {
            Some(v) => log::info!(
                "  {:<13} {} {}",
                name,
                v,
                format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "  {:<13} {}",
                name,
                "not set".if_supports_color(Stdout, |t| t.yellow()),
            ),
        }
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(path: Option<&Path>) -> Result<(), CliError> {
    let path = path.ok_or_else(|| CliError::config("Could not determine config directory"))?;
    log::info!("{}", path.display());
    Ok(())
}

/// Store an account id in the settings file.
pub(crate) fn run_config_set_account(path: Option<&Path>, account_id: &str) -> Result<(), CliError> {
    if account_id.is_empty() {
        return Err(CliError::config("Account id must not be empty"));
    }
    let path = path.ok_or_else(|| CliError::config("Could not determine config directory"))?;
    save_account(path, account_id)?;
    log::info!(
        "Saved account id to {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Rewrite the file with a new account id. Environment overrides are not
/// carried into the file.
fn save_account(path: &Path, account_id: &str) -> Result<(), CliError> {
    let settings = Settings::from_file(path)?.with_account_id(Some(account_id.to_string()));
    gamesdb_client::save_to_path(&settings, path)?;
    Ok(())
}
