use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamesdb_client::GamesDbClient;

use crate::CliError;
use crate::commands::games::print_id_list;

pub(crate) fn run_rating(
    client: &GamesDbClient,
    json: bool,
    game_id: u32,
    account: &str,
) -> Result<(), CliError> {
    let rating = client.get_user_rating(game_id, account)?;
    if json {
        return crate::print_json(&rating);
    }
    if rating > 0.0 {
        log::info!(
            "Game #{game_id}: {}",
            format!("{rating:.1}").if_supports_color(Stdout, |t| t.green())
        );
    } else {
        log::info!(
            "Game #{game_id}: {}",
            "not rated".if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    Ok(())
}

pub(crate) fn run_favourites(
    client: &GamesDbClient,
    json: bool,
    account: &str,
) -> Result<(), CliError> {
    let games = client.get_user_favourites(account)?;
    if json {
        return crate::print_json(&games);
    }
    print_id_list("Favourite games", &games);
    Ok(())
}
