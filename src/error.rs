// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(ContentError),
    Image(String),
}

/// Problems found while reading or validating the portfolio content file.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    /// The TOML document could not be parsed into the content model.
    Parse(String),

    /// The embedded content asset is missing from the binary.
    MissingAsset(String),

    /// The profile has no display name.
    EmptyName,

    /// Two tab filters of the same listing share an id.
    DuplicateTab(String),

    /// A tab filter lists no categories, so it can never show anything.
    EmptyTab(String),
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::Parse(_) | ContentError::MissingAsset(_) => "error-content-parse",
            ContentError::EmptyName => "error-content-empty-name",
            ContentError::DuplicateTab(_) => "error-content-duplicate-tab",
            ContentError::EmptyTab(_) => "error-content-empty-tab",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Parse(msg) => write!(f, "Invalid content file: {}", msg),
            ContentError::MissingAsset(name) => write!(f, "Missing content asset: {}", name),
            ContentError::EmptyName => write!(f, "Profile name is empty"),
            ContentError::DuplicateTab(id) => write!(f, "Duplicate tab id: {}", id),
            ContentError::EmptyTab(id) => write!(f, "Tab '{}' lists no categories", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn content_error_wraps_into_error() {
        let err: Error = ContentError::DuplicateTab("nlp".into()).into();
        assert!(matches!(err, Error::Content(ContentError::DuplicateTab(ref id)) if id == "nlp"));
        assert_eq!(format!("{}", err), "Content Error: Duplicate tab id: nlp");
    }

    #[test]
    fn content_error_i18n_keys() {
        assert_eq!(
            ContentError::Parse("x".into()).i18n_key(),
            "error-content-parse"
        );
        assert_eq!(ContentError::EmptyName.i18n_key(), "error-content-empty-name");
        assert_eq!(
            ContentError::EmptyTab("nlp".into()).i18n_key(),
            "error-content-empty-tab"
        );
    }

    #[test]
    fn empty_tab_display_names_the_tab() {
        let text = format!("{}", ContentError::EmptyTab("technical".into()));
        assert_eq!(text, "Tab 'technical' lists no categories");
    }
}
