//! Request parameters, validation and URL construction for each endpoint.
//!
//! Validation happens here, before a [`Transport`](crate::transport::Transport)
//! is ever touched. Empty strings and zero ids count as "not given" and are
//! left out of the query string.

use reqwest::Url;

use crate::error::GamesDbError;

/// The nine TheGamesDB API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    GamesList,
    Game,
    Art,
    PlatformsList,
    Platform,
    PlatformGames,
    Updates,
    UserRating,
    UserFavourites,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::GamesList => "GetGamesList.php",
            Endpoint::Game => "GetGame.php",
            Endpoint::Art => "GetArt.php",
            Endpoint::PlatformsList => "GetPlatformsList.php",
            Endpoint::Platform => "GetPlatform.php",
            Endpoint::PlatformGames => "GetPlatformGames.php",
            Endpoint::Updates => "Updates.php",
            Endpoint::UserRating => "User_Rating.php",
            Endpoint::UserFavourites => "User_Favorites.php",
        }
    }
}

/// A validated request: endpoint plus the parameters that were actually given.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Request {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl Request {
    fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    fn text(mut self, key: &'static str, value: &str) -> Self {
        if !value.is_empty() {
            self.params.push((key, value.to_string()));
        }
        self
    }

    fn id(mut self, key: &'static str, value: u32) -> Self {
        if value != 0 {
            self.params.push((key, value.to_string()));
        }
        self
    }

    fn always(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Full request URL: `base` + endpoint path + form-encoded query string.
    pub fn url(&self, base: &Url) -> Result<Url, GamesDbError> {
        let mut url = base.join(self.endpoint.path()).map_err(|e| {
            GamesDbError::config(format!("Invalid API base URL '{base}': {e}"))
        })?;
        if !self.params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

pub(crate) fn games_list(name: &str, platform: &str, genre: &str) -> Result<Request, GamesDbError> {
    if name.is_empty() && platform.is_empty() && genre.is_empty() {
        return Err(GamesDbError::validation("No valid parameters specified"));
    }
    Ok(Request::new(Endpoint::GamesList)
        .text("name", name)
        .text("platform", platform)
        .text("genre", genre))
}

pub(crate) fn game(
    id: u32,
    name: &str,
    exact_name: &str,
    platform: &str,
) -> Result<Request, GamesDbError> {
    if id == 0 && name.is_empty() {
        return Err(GamesDbError::validation(
            "No valid id or name parameter specified",
        ));
    }
    Ok(Request::new(Endpoint::Game)
        .id("id", id)
        .text("name", name)
        .text("exactname", exact_name)
        .text("platform", platform))
}

pub(crate) fn art(id: u32) -> Result<Request, GamesDbError> {
    require_id(id)?;
    Ok(Request::new(Endpoint::Art).id("id", id))
}

pub(crate) fn platforms_list() -> Request {
    Request::new(Endpoint::PlatformsList)
}

pub(crate) fn platform(id: u32) -> Result<Request, GamesDbError> {
    require_id(id)?;
    Ok(Request::new(Endpoint::Platform).id("id", id))
}

pub(crate) fn platform_games(id: u32) -> Result<Request, GamesDbError> {
    require_id(id)?;
    Ok(Request::new(Endpoint::PlatformGames).id("platform", id))
}

/// `since` is sent even when zero.
pub(crate) fn updates(since: u64) -> Request {
    Request::new(Endpoint::Updates).always("time", since)
}

pub(crate) fn user_rating(game_id: u32, account_id: &str) -> Result<Request, GamesDbError> {
    if game_id == 0 {
        return Err(GamesDbError::validation(
            "No valid gameID parameter specified",
        ));
    }
    require_account(account_id)?;
    Ok(Request::new(Endpoint::UserRating)
        .id("itemid", game_id)
        .text("accountid", account_id))
}

pub(crate) fn user_favourites(account_id: &str) -> Result<Request, GamesDbError> {
    require_account(account_id)?;
    Ok(Request::new(Endpoint::UserFavourites).text("accountid", account_id))
}

fn require_id(id: u32) -> Result<(), GamesDbError> {
    if id == 0 {
        return Err(GamesDbError::validation("No valid id parameter specified"));
    }
    Ok(())
}

fn require_account(account_id: &str) -> Result<(), GamesDbError> {
    if account_id.is_empty() {
        return Err(GamesDbError::validation(
            "No valid apiID parameter specified",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
