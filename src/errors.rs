use std::path::PathBuf;

/// The room-data source could not be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read room catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed room catalog {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("room catalog unavailable: {0}")]
    CatalogRead(#[from] CatalogError),

    #[error("unexpected error: {0}")]
    Unhandled(String),
}

impl AppError {
    /// The prompt the caller hears instead of the error itself.
    pub fn caller_prompt(&self) -> &'static str {
        match self {
            AppError::CatalogRead(_) => "Sorry, we encountered an error. Please try again later.",
            AppError::Unhandled(_) => {
                "Sorry, we encountered an unexpected error. Please try again later."
            }
        }
    }
}
