//! Error types
//!
//! None of these cross the host boundary: the plugin logs them and carries on.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while handling a shrine or stage event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShrineError {
    /// The activating player is not part of the party
    #[error("participant {index} is not in a party of {participants}")]
    UnknownParticipant { index: usize, participants: usize },

    #[error("no participants to redistribute between")]
    EmptyParty,

    /// A director card category the shrine relies on is missing
    #[error("could not find '{0}' category")]
    CategoryNotFound(String),

    /// A shrine was activated before the run supplied its drop lists
    #[error("item catalog not loaded; no run in progress")]
    CatalogNotLoaded,
}

/// Failures while reading or writing a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}
