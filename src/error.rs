use thiserror::Error;

/// Errors raised by the configuration and CLI surfaces.
///
/// Filter providers themselves never fail: unrecognized input degrades to
/// the dimension default instead.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown filter mode '{0}': expected one of and|or|replace")]
    UnknownMode(String),
}
