use thiserror::Error;

/// Failures the modal controller cannot degrade from.
#[derive(Debug, Error)]
pub enum ModalError {
    /// The fallback body controller is not registered. A correctly
    /// initialised app always registers it.
    #[error("fallback modal controller '{0}' is not registered")]
    MissingFallback(String),

    #[error("invalid modal config: {0}")]
    Config(#[from] toml::de::Error),
}
