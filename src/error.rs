//! Error types for fifty-fifty

use thiserror::Error;

/// Failure to turn one free-text line into a participant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No `$12.34`-style amount anywhere on the line
    #[error("No valid amount found")]
    NoAmount,

    /// Amount matched but was zero
    #[error("Amount must be greater than zero")]
    ZeroAmount,

    /// Amount matched but does not fit a currency value
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Nothing left for the name once email, phone and amount were removed
    #[error("No valid name found")]
    NoName,
}

/// Rejected manual entry or field edit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("Amount has more than two decimal places: {0}")]
    TooManyDecimals(String),

    #[error("Amount is larger than the 1,000,000,000,000 limit: {0}")]
    AmountTooLarge(String),

    #[error("Unknown field: {0} (expected name, email, phone or amount)")]
    UnknownField(String),
}

/// Draw could not produce a winner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Draw attempted with zero participants
    #[error("Cannot draw a winner with no participants")]
    EmptyPool,

    /// Contributions too large to weigh or sum
    #[error("Contribution total is too large to draw from")]
    AmountOverflow,

    /// Every participant has zero weight under the chosen selection model
    #[error("No participant holds a ticket (every contribution is under one unit)")]
    NoEligibleTickets,
}

/// Main error type for fifty-fifty operations
#[derive(Error, Debug)]
pub enum RaffleError {
    /// A bulk-import line failed to parse
    #[error("Error on line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Draw(#[from] DrawError),

    /// Index outside the roster; `index` is 0-based, the message 1-based
    #[error("No participant #{} (roster holds {len})", .index + 1)]
    NoSuchParticipant { index: usize, len: usize },

    /// A record read back from the store breaks participant rules
    #[error("Stored participant #{} is invalid: {source}", .index + 1)]
    InvalidRecord {
        index: usize,
        #[source]
        source: FieldError,
    },

    /// Unrecognised selection model name
    #[error("Unknown selection model: {0} (expected proportional or tickets)")]
    UnknownModel(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored roster could not be read or written as JSON
    #[error("Store format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for raffle operations
pub type RaffleOutcome<T> = Result<T, RaffleError>;
