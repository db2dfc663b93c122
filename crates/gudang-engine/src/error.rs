//! Error types for the service binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup, providing a single error type that
//! `main` can propagate with `?`.

/// Top-level error for the service binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: gudang_sim::ConfigError,
    },

    /// Storage initialization failed.
    #[error("storage error: {source}")]
    Storage {
        /// The underlying storage error.
        #[from]
        source: gudang_store::StoreError,
    },

    /// The dashboard server failed.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: gudang_observer::ServerError,
    },
}
