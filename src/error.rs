use thiserror::Error;

#[derive(Debug, Error)]
pub enum BomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error in {collection}: {source}")]
    Json {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Recipe data unavailable: {0}")]
    DataUnavailable(String),
}

impl BomError {
    /// Wrap a decode failure with the collection it came from.
    pub fn json(collection: &'static str, source: serde_json::Error) -> Self {
        BomError::Json { collection, source }
    }
}

pub type Result<T> = std::result::Result<T, BomError>;
