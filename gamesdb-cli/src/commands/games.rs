use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamesdb_client::{Game, GamesDbClient, Images};

use crate::CliError;

pub(crate) fn run_games(
    client: &GamesDbClient,
    json: bool,
    name: &str,
    platform: &str,
    genre: &str,
) -> Result<(), CliError> {
    let games = client.get_games_list(name, platform, genre)?;
    if json {
        return crate::print_json(&games);
    }
    print_game_list(&games);
    Ok(())
}

pub(crate) fn run_game(
    client: &GamesDbClient,
    json: bool,
    id: u32,
    name: &str,
    exact_name: &str,
    platform: &str,
) -> Result<(), CliError> {
    let game = client.get_game(id, name, exact_name, platform)?;
    if json {
        return crate::print_json(&game);
    }
    print_game(&game);
    Ok(())
}

pub(crate) fn run_art(client: &GamesDbClient, json: bool, id: u32) -> Result<(), CliError> {
    let images = client.get_art(id)?;
    if json {
        return crate::print_json(&images);
    }
    print_images(&images);
    Ok(())
}

pub(crate) fn run_updates(client: &GamesDbClient, json: bool, since: u64) -> Result<(), CliError> {
    let games = client.get_updates(since)?;
    if json {
        return crate::print_json(&games);
    }
    print_id_list("Updated games", &games);
    Ok(())
}

/// One line per game: id, title, platform and release date where known.
pub(crate) fn print_game_list(games: &[Game]) {
    if games.is_empty() {
        log::info!("{}", "No games found".if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }
    for game in games {
        let mut line = format!(
            "  {:>6}  {}",
            game.id.if_supports_color(Stdout, |t| t.dimmed()),
            game.title.if_supports_color(Stdout, |t| t.bold()),
        );
        if !game.platform.is_empty() {
            line.push_str(&format!(
                " [{}]",
                game.platform.if_supports_color(Stdout, |t| t.cyan())
            ));
        }
        if let Some(date) = game.release_date {
            line.push_str(&format!(" ({})", date.format("%Y-%m-%d")));
        }
        log::info!("{line}");
    }
    log::info!("{} game(s)", games.len());
}

/// Games where only the id is known (update feed, favourites).
pub(crate) fn print_id_list(heading: &str, games: &[Game]) {
    log::info!(
        "{} ({})",
        heading.if_supports_color(Stdout, |t| t.bold()),
        games.len()
    );
    let ids: Vec<String> = games.iter().map(|g| g.id.to_string()).collect();
    for chunk in ids.chunks(10) {
        log::info!("  {}", chunk.join(", "));
    }
}

fn print_game(game: &Game) {
    log::info!(
        "{} {}",
        game.title.if_supports_color(Stdout, |t| t.bold()),
        format!("#{}", game.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();

    let date = game
        .release_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let genres = game.genres.join(", ");
    let rating = if game.rating > 0.0 {
        format!("{:.1}", game.rating)
    } else {
        String::new()
    };
    let fields: &[(&str, &str)] = &[
        ("Platform", game.platform.as_str()),
        ("Released", date.as_str()),
        ("Genres", genres.as_str()),
        ("ESRB", game.esrb.as_str()),
        ("Players", game.players.as_str()),
        ("Co-op", game.co_op.as_str()),
        ("Publisher", game.publisher.as_str()),
        ("Developer", game.developer.as_str()),
        ("Rating", rating.as_str()),
        ("Video", game.youtube.as_str()),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            log::info!(
                "  {:<10} {}",
                format!("{label}:").if_supports_color(Stdout, |t| t.cyan()),
                value
            );
        }
    }

    if !game.overview.is_empty() {
        crate::log_blank();
        log::info!("  {}", game.overview);
    }

    if !game.similar.is_empty() {
        crate::log_blank();
        let ids: Vec<String> = game.similar.iter().map(|g| g.id.to_string()).collect();
        log::info!("  Similar games: {}", ids.join(", "));
    }

    if !game.images.is_empty() {
        crate::log_blank();
        print_images(&game.images);
    }
}

/// Every image URL, grouped by kind.
pub(crate) fn print_images(images: &Images) {
    if images.is_empty() {
        log::info!("{}", "No artwork".if_supports_color(Stdout, |t| t.dimmed()));
        return;
    }

    let section = |name: &str, count: usize| {
        if count > 0 {
            log::info!("{} ({count})", name.if_supports_color(Stdout, |t| t.bold()));
        }
    };

    section("Fan art", images.fan_art.len());
    for art in &images.fan_art {
        log::info!("  {}x{}  {}", art.width, art.height, art.url);
    }
    section("Box art", images.box_art.len());
    for art in &images.box_art {
        log::info!(
            "  {:<5} {}x{}  {}",
            art.side,
            art.width,
            art.height,
            art.url
        );
    }
    section("Banners", images.banners.len());
    for banner in &images.banners {
        log::info!("  {}x{}  {}", banner.width, banner.height, banner.url);
    }
    section("Screenshots", images.screenshots.len());
    for shot in &images.screenshots {
        log::info!("  {}x{}  {}", shot.width, shot.height, shot.url);
    }
    section("Clear logos", images.clear_logos.len());
    for logo in &images.clear_logos {
        log::info!("  {}x{}  {}", logo.width, logo.height, logo.url);
    }
}
