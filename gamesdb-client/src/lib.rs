//! Client for the TheGamesDB XML API.
//!
//! Maps the service's game, artwork, platform, update feed, rating and
//! favourites endpoints onto typed records. Image paths in responses are
//! relative to a per-response base URL; the client rewrites them to
//! absolute URLs before returning.

pub mod client;
pub mod date;
mod envelope;
pub mod error;
pub mod images;
mod query;
pub mod settings;
pub mod transport;
pub mod types;
mod xml;

pub use client::GamesDbClient;
pub use date::{DatePolicy, parse_release_date};
pub use error::{DateError, DecodeError, GamesDbError};
pub use images::{Banner, BoxArt, ClearLogo, FanArt, Images, Screenshot};
pub use settings::{
    DEFAULT_BASE_URL, SettingSource, SettingSources, Settings, config_path, save_to_path,
    settings_sources,
};
pub use reqwest::Url;
pub use transport::{HttpTransport, Transport};
pub use types::{Game, Platform};
