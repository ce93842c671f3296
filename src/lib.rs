//! fifty-fifty library
//!
//! Core of a 50/50 fundraising raffle: participants contribute money, half
//! the pool goes to charity, and one participant wins the other half with
//! odds proportional to their contribution.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌─────────────────┐
//! │  free text      │────▶│  parser / batch  │────▶│     roster      │
//! │  (lines, file)  │     │  (Participant)   │     │  (edit, remove) │
//! └─────────────────┘     └──────────────────┘     └─────────────────┘
//!                                                      │        │
//!                                            draw ◀────┘        └────▶ store
//!                                      (RaffleResult)           (JSON file)
//! ```
//!
//! # Modules
//!
//! - [`parser`] - Free-text line to participant
//! - [`batch`] - All-or-nothing bulk import
//! - [`draw`] - Pool split and weighted winner selection
//! - [`roster`] - Participant list and draw counter
//! - [`store`] - Load/save of the roster
//! - [`report`] - Text rendering for the CLI
//! - [`error`] - Error types

pub mod batch;
pub mod draw;
pub mod error;
pub mod parser;
pub mod participant;
pub mod report;
pub mod roster;
pub mod store;

pub use batch::{import_file, import_reader, import_text, ImportOutcome, ImportStats};
pub use draw::{draw, split_pool, PoolSplit, RaffleResult, SelectionModel, WinnerSummary};
pub use error::{DrawError, FieldError, ParseError, RaffleError, RaffleOutcome};
pub use parser::parse_line;
pub use participant::{format_money, parse_amount, Participant, ParticipantField};
pub use roster::Roster;
pub use store::{JsonFileStore, MemoryStore, RaffleState, RaffleStore};
