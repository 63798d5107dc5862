use std::fmt;

use thiserror::Error;

/// What kind of Trello entity a name lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Board,
    List,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Board => f.write_str("board"),
            EntityKind::List => f.write_str("list"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TrudError {
    #[error("{kind} not found: {name}")]
    NotFound { kind: EntityKind, name: String },

    #[error("API request failed for {path}: {cause}")]
    ApiRequest { path: String, cause: String },

    #[error("malformed API response for {path}: {cause}")]
    MalformedResponse { path: String, cause: String },
}

pub type Result<T> = std::result::Result<T, TrudError>;
