//! In-memory backend for tests and dry runs

use super::{RaffleState, RaffleStore};
use crate::error::RaffleOutcome;
use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Option<RaffleState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `state`
    pub fn with_state(state: RaffleState) -> Self {
        Self {
            state: RefCell::new(Some(state)),
        }
    }
}

impl RaffleStore for MemoryStore {
    fn load(&self) -> RaffleOutcome<RaffleState> {
        Ok(self.state.borrow().clone().unwrap_or_default())
    }

    fn save(&self, state: &RaffleState) -> RaffleOutcome<()> {
        *self.state.borrow_mut() = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> RaffleOutcome<()> {
        *self.state.borrow_mut() = None;
        Ok(())
    }
}
