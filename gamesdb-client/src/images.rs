//! Image assets attached to games and platforms.
//!
//! The service ships two XML layouts for image entries. Box art, banners and
//! clear logos are flat: the element text is the path and everything else is
//! an attribute. Fan art and screenshots nest an `<original>` element
//! (path + dimensions) next to a `<thumb>` element. Both decode into flat
//! records.
//!
//! Paths arrive relative to a per-response base URL and are made absolute
//! by [`Images::apply_base_url`].

use serde::Serialize;

use crate::error::DecodeError;
use crate::xml::{DecodeOptions, Element, FromXml, decode_children, parse_number};

/// All image assets for one game or platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Images {
    pub fan_art: Vec<FanArt>,
    pub box_art: Vec<BoxArt>,
    pub banners: Vec<Banner>,
    pub screenshots: Vec<Screenshot>,
    pub clear_logos: Vec<ClearLogo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FanArt {
    pub url: String,
    pub width: i32,
    pub height: i32,
    pub thumbnail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoxArt {
    pub url: String,
    pub width: i32,
    pub height: i32,
    pub thumbnail: String,
    /// Which face of the box, usually `front` or `back`.
    pub side: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Banner {
    pub url: String,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Screenshot {
    pub url: String,
    pub width: i32,
    pub height: i32,
    pub thumbnail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClearLogo {
    pub url: String,
    pub width: i32,
    pub height: i32,
}

impl Images {
    pub fn is_empty(&self) -> bool {
        self.fan_art.is_empty()
            && self.box_art.is_empty()
            && self.banners.is_empty()
            && self.screenshots.is_empty()
            && self.clear_logos.is_empty()
    }

    /// Total number of image entries across all five collections.
    pub fn len(&self) -> usize {
        self.fan_art.len()
            + self.box_art.len()
            + self.banners.len()
            + self.screenshots.len()
            + self.clear_logos.len()
    }

    /// Prefix every non-empty URL and thumbnail with `base`.
    ///
    /// This is plain concatenation with no check for an existing prefix:
    /// calling it twice with the same base prefixes twice.
    pub fn apply_base_url(&mut self, base: &str) {
        rebase_all(&mut self.fan_art, base);
        rebase_all(&mut self.box_art, base);
        rebase_all(&mut self.banners, base);
        rebase_all(&mut self.screenshots, base);
        rebase_all(&mut self.clear_logos, base);
    }
}

/// An image record whose path fields can be made absolute.
trait Rebase {
    fn rebase(&mut self, base: &str);
}

fn rebase_all<T: Rebase>(items: &mut [T], base: &str) {
    for item in items {
        item.rebase(base);
    }
}

fn prefix(field: &mut String, base: &str) {
    if !field.is_empty() {
        field.insert_str(0, base);
    }
}

impl Rebase for FanArt {
    fn rebase(&mut self, base: &str) {
        prefix(&mut self.url, base);
        prefix(&mut self.thumbnail, base);
    }
}

impl Rebase for BoxArt {
    fn rebase(&mut self, base: &str) {
        prefix(&mut self.url, base);
        prefix(&mut self.thumbnail, base);
    }
}

impl Rebase for Banner {
    fn rebase(&mut self, base: &str) {
        prefix(&mut self.url, base);
    }
}

impl Rebase for Screenshot {
    fn rebase(&mut self, base: &str) {
        prefix(&mut self.url, base);
        prefix(&mut self.thumbnail, base);
    }
}

impl Rebase for ClearLogo {
    fn rebase(&mut self, base: &str) {
        prefix(&mut self.url, base);
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

impl FromXml for Images {
    const TAG: &'static str = "Images";

    fn from_xml(element: &Element, options: &DecodeOptions) -> Result<Self, DecodeError> {
        Ok(Self {
            fan_art: decode_children(element, options)?,
            box_art: decode_children(element, options)?,
            banners: decode_children(element, options)?,
            screenshots: decode_children(element, options)?,
            clear_logos: decode_children(element, options)?,
        })
    }
}

/// Path and dimensions carried by an `<original>` child (nested layout).
struct Original {
    url: String,
    width: i32,
    height: i32,
}

fn decode_original(element: &Element, tag: &'static str) -> Result<Original, DecodeError> {
    let Some(original) = element.child("original") else {
        return Ok(Original {
            url: String::new(),
            width: 0,
            height: 0,
        });
    };
    Ok(Original {
        url: original.text.clone(),
        width: parse_number(original.attr("width"), tag, "width")?,
        height: parse_number(original.attr("height"), tag, "height")?,
    })
}

impl FromXml for FanArt {
    const TAG: &'static str = "fanart";

    fn from_xml(element: &Element, _options: &DecodeOptions) -> Result<Self, DecodeError> {
        let original = decode_original(element, Self::TAG)?;
        Ok(Self {
            url: original.url,
            width: original.width,
            height: original.height,
            thumbnail: element.child_text("thumb").to_string(),
        })
    }
}

impl FromXml for Screenshot {
    const TAG: &'static str = "screenshot";

    fn from_xml(element: &Element, _options: &DecodeOptions) -> Result<Self, DecodeError> {
        let original = decode_original(element, Self::TAG)?;
        Ok(Self {
            url: original.url,
            width: original.width,
            height: original.height,
            thumbnail: element.child_text("thumb").to_string(),
        })
    }
}

impl FromXml for BoxArt {
    const TAG: &'static str = "boxart";

    fn from_xml(element: &Element, _options: &DecodeOptions) -> Result<Self, DecodeError> {
        Ok(Self {
            url: element.text.clone(),
            width: parse_number(element.attr("width"), Self::TAG, "width")?,
            height: parse_number(element.attr("height"), Self::TAG, "height")?,
            thumbnail: element.attr("thumb").unwrap_or_default().to_string(),
            side: element.attr("side").unwrap_or_default().to_string(),
        })
    }
}

impl FromXml for Banner {
    const TAG: &'static str = "banner";

    fn from_xml(element: &Element, _options: &DecodeOptions) -> Result<Self, DecodeError> {
        Ok(Self {
            url: element.text.clone(),
            width: parse_number(element.attr("width"), Self::TAG, "width")?,
            height: parse_number(element.attr("height"), Self::TAG, "height")?,
        })
    }
}

impl FromXml for ClearLogo {
    const TAG: &'static str = "clearlogo";

    fn from_xml(element: &Element, _options: &DecodeOptions) -> Result<Self, DecodeError> {
        Ok(Self {
            url: element.text.clone(),
            width: parse_number(element.attr("width"), Self::TAG, "width")?,
            height: parse_number(element.attr("height"), Self::TAG, "height")?,
        })
    }
}

#[cfg(test)]
#[path = "tests/images_tests.rs"]
mod tests;
