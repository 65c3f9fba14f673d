use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown risk `{0}` (expected one of stable, candidate, beta, edge)")]
pub struct ParseRiskError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseChannelError {
    #[error("channel `{0}` is not of the form track/risk")]
    MissingSeparator(String),

    #[error("channel `{0}` has an empty track")]
    EmptyTrack(String),

    #[error("channel `{channel}`: {source}")]
    Risk {
        channel: String,
        #[source]
        source: ParseRiskError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCellError {
    #[error("cell `{0}` is not of the form track/risk:arch")]
    MissingArch(String),

    #[error(transparent)]
    Channel(#[from] ParseChannelError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    #[error("unknown action `{0}` (expected promote:CELL, undo:CELL or revert)")]
    UnknownVerb(String),

    #[error("action `{0}` is missing its cell")]
    MissingCell(String),

    #[error(transparent)]
    Cell(#[from] ParseCellError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown track `{track}` (available: {available})")]
    UnknownTrack { track: String, available: String },

    #[error("no tracks available")]
    NoTracks,
}
