use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamesdb_client::{GamesDbClient, Platform};

use crate::CliError;
use crate::commands::games::{print_game_list, print_images};

pub(crate) fn run_platforms(client: &GamesDbClient, json: bool) -> Result<(), CliError> {
    let platforms = client.get_platforms_list()?;
    if json {
        return crate::print_json(&platforms);
    }
    for platform in &platforms {
        log::info!(
            "  {:>5}  {} {}",
            platform.id.if_supports_color(Stdout, |t| t.dimmed()),
            platform.name.if_supports_color(Stdout, |t| t.bold()),
            format!("({})", platform.alias).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("{} platform(s)", platforms.len());
    Ok(())
}

pub(crate) fn run_platform(client: &GamesDbClient, json: bool, id: u32) -> Result<(), CliError> {
    let platform = client.get_platform(id)?;
    if json {
        return crate::print_json(&platform);
    }
    print_platform(&platform);
    Ok(())
}

pub(crate) fn run_platform_games(
    client: &GamesDbClient,
    json: bool,
    id: u32,
) -> Result<(), CliError> {
    let games = client.get_platform_games(id)?;
    if json {
        return crate::print_json(&games);
    }
    print_game_list(&games);
    Ok(())
}

fn print_platform(platform: &Platform) {
    log::info!(
        "{} {}",
        platform.name.if_supports_color(Stdout, |t| t.bold()),
        format!("#{}", platform.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();

    let max_controllers = if platform.max_controllers > 0 {
        platform.max_controllers.to_string()
    } else {
        String::new()
    };
    let rating = if platform.rating > 0.0 {
        format!("{:.1}", platform.rating)
    } else {
        String::new()
    };
    let fields: &[(&str, &str)] = &[
        ("Developer", platform.developer.as_str()),
        ("Manufacturer", platform.manufacturer.as_str()),
        ("CPU", platform.cpu.as_str()),
        ("Memory", platform.memory.as_str()),
        ("Graphics", platform.graphics.as_str()),
        ("Sound", platform.sound.as_str()),
        ("Display", platform.display.as_str()),
        ("Media", platform.media.as_str()),
        ("Controllers", max_controllers.as_str()),
        ("Rating", rating.as_str()),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            log::info!(
                "  {:<13} {}",
                format!("{label}:").if_supports_color(Stdout, |t| t.cyan()),
                value
            );
        }
    }

    if !platform.overview.is_empty() {
        crate::log_blank();
        log::info!("  {}", platform.overview);
    }

    if !platform.images.is_empty() {
        crate::log_blank();
        print_images(&platform.images);
    }
}
