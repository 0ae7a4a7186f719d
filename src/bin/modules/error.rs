use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the core slater library.
    #[error("Calculation error: {0}")]
    Calculation(#[from] slater::SlaterError),

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// An element argument that is neither a symbol, a number nor a range of them.
    #[error("Invalid element '{spec}': {details}")]
    ElementSpec { spec: String, details: String },

    /// Arguments that are individually valid but cannot be combined.
    #[error("Invalid usage: {0}")]
    Usage(String),

    /// Errors serializing the JSON report.
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The global logger could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
