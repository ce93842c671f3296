//! Persistence for the roster and draw counter
//!
//! The parser and draw never touch storage; the CLI loads a [`RaffleState`]
//! through a [`RaffleStore`], mutates it via [`crate::roster::Roster`], and
//! saves it back.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::{RaffleError, RaffleOutcome};
use crate::participant::Participant;
use serde::{Deserialize, Serialize};

/// Everything that survives between sessions
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaffleState {
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub draw_count: u64,
}

impl RaffleState {
    /// Apply the manual-entry rules to every stored participant
    pub fn validate(&self) -> RaffleOutcome<()> {
        for (index, participant) in self.participants.iter().enumerate() {
            participant
                .validate()
                .map_err(|source| RaffleError::InvalidRecord { index, source })?;
        }
        Ok(())
    }
}

/// Durable storage for a [`RaffleState`]
///
/// `load` on a store that has never been saved returns the empty state.
pub trait RaffleStore {
    /// Read the last saved state.
    fn load(&self) -> RaffleOutcome<RaffleState>;

    /// Replace the stored state.
    fn save(&self, state: &RaffleState) -> RaffleOutcome<()>;

    /// Forget everything; the next `load` returns the empty state.
    fn clear(&self) -> RaffleOutcome<()>;
}
