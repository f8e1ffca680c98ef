//! Per-endpoint response envelopes.
//!
//! Each endpoint wraps its payload in its own root element, sometimes next to
//! auxiliary data such as the base URL image paths are relative to. These
//! types exist only between decoding and handing the payload to the caller.

use crate::error::DecodeError;
use crate::images::Images;
use crate::types::{Game, Platform};
use crate::xml::{DecodeOptions, Element, FromXml, decode_children, parse_document, parse_number};

/// A response root that maps onto a public result.
pub(crate) trait Envelope: FromXml {
    type Output;

    fn into_output(self) -> Self::Output;
}

/// Decode a response body through envelope `E` and extract its payload.
pub(crate) fn extract<E: Envelope>(
    body: &[u8],
    options: &DecodeOptions,
) -> Result<E::Output, DecodeError> {
    let root = parse_document(body)?;
    if root.name != E::TAG {
        log::debug!("Expected <{}> response root, got <{}>", E::TAG, root.name);
    }
    let envelope = E::from_xml(&root, options)?;
    Ok(envelope.into_output())
}

/// `GetGamesList.php` and `GetPlatformGames.php`.
pub(crate) struct GameListEnvelope {
    games: Vec<Game>,
}

impl FromXml for GameListEnvelope {
    const TAG: &'static str = "Data";

    fn from_xml(element: &Element, options: &DecodeOptions) -> Result<Self, DecodeError> {
        Ok(Self {
            games: decode_children(element, options)?,
        })
    }
}

impl Envelope for GameListEnvelope {
    type Output = Vec<Game>;

    fn into_output(self) -> Vec<Game> {
        self.games
    }
}

/// `GetGame.php`.
pub(crate) struct GameEnvelope {
    base_img_url: String,
    game: Game,
}

impl FromXml for GameEnvelope {
    const TAG: &'static str = "Data";

    fn from_xml(element: &Element, options: &DecodeOptions) -> Result<Self, DecodeError> {
        let game = element
            .child(Game::TAG)
            .ok_or(DecodeError::MissingElement(Game::TAG))?;
        Ok(Self {
            base_img_url: element.child_text("baseImgUrl").to_string(),
            game: Game::from_xml(game, options)?,
        })
    }
}

impl Envelope for GameEnvelope {
    type Output = Game;

    fn into_output(mut self) -> Game {
        self.game.images.apply_base_url(&self.base_img_url);
        self.game
    }
}

/// `GetArt.php`.
pub(crate) struct ArtEnvelope {
    base_img_url: String,
    images: Images,
}

impl FromXml for ArtEnvelope {
    const TAG: &'static str = "Data";

    fn from_xml(element: &Element, options: &DecodeOptions) -> Result<Self, DecodeError> {
        let images = match element.child(Images::TAG) {
            Some(images) => Images::from_xml(images, options)?,
            None => Images::default(),
        };
        Ok(Self {
            base_img_url: element.child_text("baseImgUrl").to_string(),
            images,
        })
    }
}

impl Envelope for ArtEnvelope {
    type Output = Images;

    fn into_output(mut self) -> Images {
        self.images.apply_base_url(&self.base_img_url);
        self.images
    }
}

/// `GetPlatformsList.php`.
pub(crate) struct PlatformListEnvelope {
    base_platform_url: String,
    platforms: Vec<Platform>,
}

impl FromXml for PlatformListEnvelope {
    const TAG: &'static str = "Data";

    fn from_xml(element: &Element, options: &DecodeOptions) -> Result<Self, DecodeError> {
        let platforms = match element.child("Platforms") {
            Some(list) => decode_children(list, options)?,
            None => Vec::new(),
        };
        Ok(Self {
            base_platform_url: element.child_text("basePlatformUrl").to_string(),
            platforms,
        })
    }
}

impl Envelope for PlatformListEnvelope {
    type Output = Vec<Platform>;

    fn into_output(self) -> Vec<Platform> {
        log::debug!(
            "Platform list: {} entries, base platform URL {:?}",
            self.platforms.len(),
            self.base_platform_url
        );
        self.platforms
    }
}

/// `GetPlatform.php`.
///
/// The platform's display name is carried in a `<Platform>` child rather
/// than the `<name>` element used by the list endpoint.
pub(crate) struct PlatformEnvelope {
    base_img_url: String,
    platform: Platform,
}

impl FromXml for PlatformEnvelope {
    const TAG: &'static str = "Data";

    fn from_xml(element: &Element, options: &DecodeOptions) -> Result<Self, DecodeError> {
        let node = element
            .child(Platform::TAG)
            .ok_or(DecodeError::MissingElement(Platform::TAG))?;
        let mut platform = Platform::from_xml(node, options)?;
        if let Some(name) = node.child("Platform") {
            platform.name = name.text.clone();
        }
        Ok(Self {
            base_img_url: element.child_text("baseImgUrl").to_string(),
            platform,
        })
    }
}

impl Envelope for PlatformEnvelope {
    type Output = Platform;

    fn into_output(mut self) -> Platform {
        self.platform.images.apply_base_url(&self.base_img_url);
        self.platform
    }
}

/// `Updates.php`. The feed only lists ids of changed games.
pub(crate) struct UpdatesEnvelope {
    time: i64,
    ids: Vec<u32>,
}

impl FromXml for UpdatesEnvelope {
    const TAG: &'static str = "Items";

    fn from_xml(element: &Element, _options: &DecodeOptions) -> Result<Self, DecodeError> {
        Ok(Self {
            time: parse_number(Some(element.child_text("Time")), Self::TAG, "Time")?,
            ids: decode_ids(element)?,
        })
    }
}

impl Envelope for UpdatesEnvelope {
    type Output = Vec<Game>;

    fn into_output(self) -> Vec<Game> {
        log::debug!("Update feed: {} games, server time {}", self.ids.len(), self.time);
        self.ids.into_iter().map(Game::placeholder).collect()
    }
}

/// `User_Rating.php`.
pub(crate) struct UserRatingEnvelope {
    rating: f32,
}

impl FromXml for UserRatingEnvelope {
    const TAG: &'static str = "Data";

    fn from_xml(element: &Element, _options: &DecodeOptions) -> Result<Self, DecodeError> {
        let raw = element.child("game").map_or("", |g| g.child_text("Rating"));
        Ok(Self {
            rating: parse_number(Some(raw), "game", "Rating")?,
        })
    }
}

impl Envelope for UserRatingEnvelope {
    type Output = f32;

    fn into_output(self) -> f32 {
        self.rating
    }
}

/// `User_Favorites.php`. Only ids, like the update feed.
pub(crate) struct FavouritesEnvelope {
    ids: Vec<u32>,
}

impl FromXml for FavouritesEnvelope {
    const TAG: &'static str = "Favorites";

    fn from_xml(element: &Element, _options: &DecodeOptions) -> Result<Self, DecodeError> {
        Ok(Self {
            ids: decode_ids(element)?,
        })
    }
}

impl Envelope for FavouritesEnvelope {
    type Output = Vec<Game>;

    fn into_output(self) -> Vec<Game> {
        self.ids.into_iter().map(Game::placeholder).collect()
    }
}

/// `<Game>` children holding nothing but a numeric id.
fn decode_ids(element: &Element) -> Result<Vec<u32>, DecodeError> {
    element
        .children_named(Game::TAG)
        .map(|g| parse_number(Some(g.text.as_str()), Game::TAG, "id"))
        .collect()
}

#[cfg(test)]
#[path = "tests/envelope_tests.rs"]
mod tests;
