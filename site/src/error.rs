//! Library error type. Almost every failure in the site is absorbed and
//! logged at the call site; this enum only gives those logs a shape.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no translation table embedded for `{0}`")]
    MissingTable(String),

    #[error("translation table for `{lang}` is malformed: {reason}")]
    Translations { lang: String, reason: String },

    #[error("preference storage is unavailable")]
    StorageUnavailable,

    #[error("preference storage failed: {0}")]
    Storage(String),

    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("dom: {0}")]
    Dom(String),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
