use std::time::Duration;

use reqwest::Url;

use crate::date::DatePolicy;
use crate::envelope::{
    self, ArtEnvelope, Envelope, FavouritesEnvelope, GameEnvelope, GameListEnvelope,
    PlatformEnvelope, PlatformListEnvelope, UpdatesEnvelope, UserRatingEnvelope,
};
use crate::error::GamesDbError;
use crate::images::Images;
use crate::query::{self, Request};
use crate::settings::Settings;
use crate::transport::{HttpTransport, Transport};
use crate::types::{Game, Platform};
use crate::xml::DecodeOptions;

/// Client for the TheGamesDB XML API.
///
/// Every call validates its parameters, performs one GET through the
/// transport and decodes the response. Nothing is cached or retried, and
/// the client holds no mutable state.
pub struct GamesDbClient<T = HttpTransport> {
    transport: T,
    base_url: Url,
    options: DecodeOptions,
}

impl GamesDbClient<HttpTransport> {
    /// Client with default settings.
    pub fn new() -> Result<Self, GamesDbError> {
        Self::from_settings(&Settings::default())
    }

    /// Client over a reqwest transport configured from `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, GamesDbError> {
        let transport = HttpTransport::new(Duration::from_secs(settings.timeout_secs))?;
        Self::with_transport(transport, settings)
    }
}

impl<T: Transport> GamesDbClient<T> {
    /// Client over a caller-supplied transport.
    pub fn with_transport(transport: T, settings: &Settings) -> Result<Self, GamesDbError> {
        let mut base_url = Url::parse(&settings.base_url).map_err(|e| {
            GamesDbError::config(format!("Invalid API base URL '{}': {e}", settings.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GamesDbError::config(format!(
                "Invalid API base URL '{}': not a hierarchical URL",
                settings.base_url
            )));
        }
        // Endpoint paths are joined onto the base; without a trailing slash
        // the last segment would be replaced.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let dates = if settings.strict_dates {
            DatePolicy::Strict
        } else {
            DatePolicy::Lenient
        };
        Ok(Self {
            transport,
            base_url,
            options: DecodeOptions { dates },
        })
    }

    /// Base every endpoint path is joined onto. Always ends in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Search games by name, platform name and/or genre. At least one is required.
    pub fn get_games_list(
        &self,
        name: &str,
        platform: &str,
        genre: &str,
    ) -> Result<Vec<Game>, GamesDbError> {
        let request = query::games_list(name, platform, genre)?;
        self.fetch::<GameListEnvelope>(&request)
    }

    /// Full record for one game, by id or name, with absolute image URLs.
    ///
    /// `exact_name` and `platform` only narrow a name search. When the
    /// service returns several matches, the first one is used.
    pub fn get_game(
        &self,
        id: u32,
        name: &str,
        exact_name: &str,
        platform: &str,
    ) -> Result<Game, GamesDbError> {
        let request = query::game(id, name, exact_name, platform)?;
        self.fetch::<GameEnvelope>(&request)
    }

    /// All artwork for a game, with absolute image URLs.
    pub fn get_art(&self, id: u32) -> Result<Images, GamesDbError> {
        let request = query::art(id)?;
        self.fetch::<ArtEnvelope>(&request)
    }

    /// Every platform known to the service (id, name and alias only).
    pub fn get_platforms_list(&self) -> Result<Vec<Platform>, GamesDbError> {
        self.fetch::<PlatformListEnvelope>(&query::platforms_list())
    }

    /// Full record for one platform, with absolute image URLs.
    pub fn get_platform(&self, id: u32) -> Result<Platform, GamesDbError> {
        let request = query::platform(id)?;
        self.fetch::<PlatformEnvelope>(&request)
    }

    /// Games released on a platform.
    pub fn get_platform_games(&self, id: u32) -> Result<Vec<Game>, GamesDbError> {
        let request = query::platform_games(id)?;
        self.fetch::<GameListEnvelope>(&request)
    }

    /// Games changed within the last `since` seconds.
    ///
    /// The feed only lists ids, so each returned [`Game`] has only `id` set.
    pub fn get_updates(&self, since: u64) -> Result<Vec<Game>, GamesDbError> {
        self.fetch::<UpdatesEnvelope>(&query::updates(since))
    }

    /// The given account's rating for a game (0 when unrated).
    pub fn get_user_rating(&self, game_id: u32, account_id: &str) -> Result<f32, GamesDbError> {
        let request = query::user_rating(game_id, account_id)?;
        self.fetch::<UserRatingEnvelope>(&request)
    }

    /// The given account's favourite games.
    ///
    /// Like [`get_updates`](Self::get_updates), only `id` is set on each game.
    pub fn get_user_favourites(&self, account_id: &str) -> Result<Vec<Game>, GamesDbError> {
        let request = query::user_favourites(account_id)?;
        self.fetch::<FavouritesEnvelope>(&request)
    }

    fn fetch<E: Envelope>(&self, request: &Request) -> Result<E::Output, GamesDbError> {
        let url = request.url(&self.base_url)?;
        log::debug!("GET {url}");
        let body = self.transport.get(&url)?;
        Ok(envelope::extract::<E>(&body, &self.options)?)
    }
}
