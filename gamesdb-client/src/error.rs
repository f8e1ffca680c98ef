/// Errors returned by every TheGamesDB operation.
#[derive(Debug, thiserror::Error)]
pub enum GamesDbError {
    /// A required request parameter was missing. Raised before any network access.
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status}) for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(DecodeError),

    #[error("{0}")]
    Date(#[from] DateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GamesDbError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<DecodeError> for GamesDbError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Date(e) => Self::Date(e),
            other => Self::Decode(other),
        }
    }
}

/// Errors raised while mapping an XML response body onto typed records.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Malformed XML document: {0}")]
    Malformed(String),

    #[error("Invalid {field} in <{element}>: {value:?}")]
    InvalidField {
        element: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Missing <{0}> element in response")]
    MissingElement(&'static str),

    #[error("{0}")]
    Date(#[from] DateError),
}

impl DecodeError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn invalid_field(
        element: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            element,
            field,
            value: value.into(),
        }
    }
}

/// A release date matched neither `MM/DD/YYYY` nor a bare `YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognised release date: {value:?}")]
pub struct DateError {
    pub value: String,
}
