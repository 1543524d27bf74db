use thiserror::Error;

/// The scoring computations themselves are total functions and never fail;
/// the only fallible surface is parsing loosely-typed configuration strings
/// into their closed enums at the engine boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("unknown scoring format: {0}")]
    UnknownFormat(String),
    #[error("unknown skins type: {0}")]
    UnknownSkinsType(String),
}
