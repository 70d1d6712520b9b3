use thiserror::Error;

#[derive(Error, Debug)]
pub enum StylernizerError {
    #[error("No plot found in registry for {query}! Available are {}", available.join(", "))]
    NotFound {
        query: String,
        available: Vec<String>,
    },

    #[error("Invalid plot target: {0}")]
    InvalidTarget(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Could not import module {module}: {reason}")]
    Import { module: String, reason: String },

    #[error("Artifact error: {0}")]
    Artifact(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StylernizerError {
    pub fn not_found(query: impl Into<String>, available: Vec<String>) -> Self {
        StylernizerError::NotFound {
            query: query.into(),
            available,
        }
    }

    pub fn import(module: impl Into<String>, reason: impl Into<String>) -> Self {
        StylernizerError::Import {
            module: module.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StylernizerError>;
