//! Content loading errors.

use thiserror::Error;

use crate::content::source::ContentSource;

/// Failure fetching or parsing a single document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Local document could not be read.
    #[error("Failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// Transport error talking to a remote source.
    #[error("Request to {location} failed: {source}")]
    Http {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote source answered with a non-success status.
    #[error("Request to {location} returned status {status}")]
    Status { location: String, status: u16 },

    /// Document is not valid JSON for the expected shape.
    #[error("Failed to parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors surfaced by the content loader.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A file-source document failed; no partial content is returned.
    #[error("Failed to load band content for {band_id}")]
    Load {
        band_id: String,
        #[source]
        source: FetchError,
    },

    /// An api/cms fetch failed and fallback to files is disabled.
    #[error("Failed to load band content for {band_id} from {source_kind}")]
    Remote {
        source_kind: ContentSource,
        band_id: String,
        #[source]
        source: FetchError,
    },

    /// Band id would escape the content root or the `/bands/` URL path.
    #[error("Invalid band id '{0}'")]
    InvalidBandId(String),

    #[error("API URL not configured")]
    ApiUrlMissing,

    #[error("Invalid content URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ContentError {
    /// Band identifier named by the error, if any.
    pub fn band_id(&self) -> Option<&str> {
        match self {
            ContentError::Load { band_id, .. } | ContentError::Remote { band_id, .. } => Some(band_id),
            ContentError::InvalidBandId(band_id) => Some(band_id),
            _ => None,
        }
    }
}

pub type ContentResult<T> = Result<T, ContentError>;
