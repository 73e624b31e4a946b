use thiserror::Error;

/// Errors that can occur across the models and their collaborators
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure talking to the recipe source
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The recipe source answered with a non-success status
    #[error("Recipe source returned HTTP {status}")]
    Api { status: u16 },

    /// A referenced entry does not exist
    #[error("No {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },

    /// Reading or writing the likes store failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The persisted likes set could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }
}
