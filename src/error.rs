/// Error types for the catalog browser
///
/// Each concern gets its own enum so callers can match on exactly the
/// failures they can produce:
/// - `CatalogError` for navigation, gallery and catalog construction
/// - `GeoError` for the best-effort country lookup (always swallowed)
/// - `ConfigError` for loading `config.toml`

use std::path::PathBuf;

use thiserror::Error;

/// Contract violations against the catalog state machines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A transition was requested from a level that does not allow it,
    /// or the selected model does not belong to the selected brand
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// A product with no images was handed to the gallery
    #[error("product `{0}` has no images")]
    InvalidProduct(String),

    /// A thumbnail index outside the open product's image list
    #[error("image index {index} out of range (product has {len} images)")]
    ImageOutOfRange { index: usize, len: usize },

    /// Unknown brand id
    #[error("unknown brand `{0}`")]
    UnknownBrand(String),

    /// Catalog table failed validation at construction
    #[error("malformed catalog: {0}")]
    Malformed(String),
}

/// Failures of the geolocation lookup.
/// Carries messages rather than sources so it can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("geolocation request failed: {0}")]
    Transport(String),

    #[error("geolocation service answered {0}")]
    Status(u16),

    #[error("geolocation response is not valid JSON: {0}")]
    Decode(String),

    #[error("geolocation response has no country code")]
    MissingCountry,
}

impl From<reqwest::Error> for GeoError {
    fn from(err: reqwest::Error) -> Self {
        GeoError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(err: serde_json::Error) -> Self {
        GeoError::Decode(err.to_string())
    }
}

/// Failures loading the site configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
