/// Result alias for the fallible parts of the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading sorter options from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid null placement `{0}`, expected one of: disabled, first, last")]
    InvalidNullPlacement(String),
}
