//! Error types for the shell.

/// Result alias used throughout the shell.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host refused to create a window. Fatal at startup: no window
    /// exists yet to show anything in.
    #[error("failed to create window `{label}`: {source}")]
    WindowCreation {
        label: String,
        #[source]
        source: tauri::Error,
    },

    /// The host runtime failed to build or run the application.
    #[error(transparent)]
    Runtime(#[from] tauri::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
