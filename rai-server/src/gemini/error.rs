use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY not configured {location}")]
    ApiKeyMissing { location: ErrorLocation },

    #[error("Upstream request timed out {location}")]
    Timeout { location: ErrorLocation },

    #[error("Upstream request failed: {source} {location}")]
    Request {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, GeminiError>;
