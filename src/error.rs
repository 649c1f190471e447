use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapError>;

/// Caller misuse detected before any map was touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("cannot update an absent map")]
    AbsentDestination,
    #[error("size must be >= 0, got {0}")]
    NegativeSize(isize),
    #[error("no key function given")]
    MissingKeyFn,
}
