use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// The pattern name matched none of the known starting configurations.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}
