use chrono::NaiveDate;
use serde::Serialize;

use crate::date::decode_release_date;
use crate::error::DecodeError;
use crate::images::Images;
use crate::xml::{DecodeOptions, Element, FromXml, decode_children, parse_number};

/// A game record from TheGamesDB.
///
/// Which fields are populated depends on the endpoint: list endpoints only
/// send id, title, platform and release date, while the update feed and
/// favourites list carry nothing but the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Game {
    pub id: u32,
    pub title: String,
    pub platform_id: String,
    pub platform: String,
    pub release_date: Option<NaiveDate>,
    pub overview: String,
    /// ESRB content rating, e.g. `M - Mature`.
    pub esrb: String,
    pub genres: Vec<String>,
    pub players: String,
    pub co_op: String,
    pub youtube: String,
    pub publisher: String,
    pub developer: String,
    pub rating: f32,
    /// Shallow references to related games (usually id and platform id only).
    pub similar: Vec<Game>,
    pub images: Images,
}

impl Game {
    /// A game with only its id set, used where the service returns bare ids.
    pub fn placeholder(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

impl FromXml for Game {
    const TAG: &'static str = "Game";

    fn from_xml(element: &Element, options: &DecodeOptions) -> Result<Self, DecodeError> {
        let genres = element
            .child("Genres")
            .map(|g| g.children_named("genre").map(|e| e.text.clone()).collect())
            .unwrap_or_default();
        let similar = match element.child("Similar") {
            Some(similar) => decode_children(similar, options)?,
            None => Vec::new(),
        };
        let images = match element.child(Images::TAG) {
            Some(images) => Images::from_xml(images, options)?,
            None => Images::default(),
        };

        Ok(Self {
            id: parse_number(Some(element.child_text("id")), Self::TAG, "id")?,
            title: element.child_text("GameTitle").to_string(),
            platform_id: element.child_text("PlatformId").to_string(),
            platform: element.child_text("Platform").to_string(),
            release_date: decode_release_date(element.child_text("ReleaseDate"), options.dates)?,
            overview: element.child_text("Overview").to_string(),
            esrb: element.child_text("ESRB").to_string(),
            genres,
            players: element.child_text("Players").to_string(),
            co_op: element.child_text("Co-op").to_string(),
            youtube: element.child_text("Youtube").to_string(),
            publisher: element.child_text("Publisher").to_string(),
            developer: element.child_text("Developer").to_string(),
            rating: parse_number(Some(element.child_text("Rating")), Self::TAG, "Rating")?,
            similar,
            images,
        })
    }
}

/// A platform (console, handheld, computer) record from TheGamesDB.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Platform {
    pub id: u32,
    pub name: String,
    /// URL slug, e.g. `microsoft-xbox-360`.
    pub alias: String,
    pub console: String,
    pub controller: String,
    pub overview: String,
    pub developer: String,
    pub manufacturer: String,
    pub cpu: String,
    pub memory: String,
    pub graphics: String,
    pub sound: String,
    pub display: String,
    pub media: String,
    pub max_controllers: i32,
    pub rating: f32,
    pub images: Images,
}

impl FromXml for Platform {
    const TAG: &'static str = "Platform";

    fn from_xml(element: &Element, options: &DecodeOptions) -> Result<Self, DecodeError> {
        let images = match element.child(Images::TAG) {
            Some(images) => Images::from_xml(images, options)?,
            None => Images::default(),
        };

        Ok(Self {
            id: parse_number(Some(element.child_text("id")), Self::TAG, "id")?,
            name: element.child_text("name").to_string(),
            alias: element.child_text("alias").to_string(),
            console: element.child_text("console").to_string(),
            controller: element.child_text("controller").to_string(),
            overview: element.child_text("overview").to_string(),
            developer: element.child_text("developer").to_string(),
            manufacturer: element.child_text("manufacturer").to_string(),
            cpu: element.child_text("cpu").to_string(),
            memory: element.child_text("memory").to_string(),
            graphics: element.child_text("graphics").to_string(),
            sound: element.child_text("sound").to_string(),
            display: element.child_text("display").to_string(),
            media: element.child_text("media").to_string(),
            max_controllers: parse_number(
                Some(element.child_text("maxcontrollers")),
                Self::TAG,
                "maxcontrollers",
            )?,
            rating: parse_number(Some(element.child_text("Rating")), Self::TAG, "Rating")?,
            images,
        })
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
