//! The participant list and draw counter for one raffle

use crate::draw::{self, pool_total, RaffleResult, SelectionModel};
use crate::error::{RaffleError, RaffleOutcome};
use crate::participant::{Participant, ParticipantField};
use crate::store::RaffleState;
use log::{debug, info};
use rand::Rng;
use rust_decimal::Decimal;

/// Ordered participants plus the number of draws run so far
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Roster {
    state: RaffleState,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: RaffleState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &RaffleState {
        &self.state
    }

    pub fn into_state(self) -> RaffleState {
        self.state
    }

    pub fn participants(&self) -> &[Participant] {
        &self.state.participants
    }

    pub fn len(&self) -> usize {
        self.state.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.participants.is_empty()
    }

    pub fn draw_count(&self) -> u64 {
        self.state.draw_count
    }

    pub fn total(&self) -> RaffleOutcome<Decimal> {
        Ok(pool_total(&self.state.participants)?)
    }

    pub fn add(&mut self, participant: Participant) {
        debug!("Adding {} ({})", participant.name, participant.amount);
        self.state.participants.push(participant);
    }

    /// Append a whole parsed batch
    pub fn extend(&mut self, batch: Vec<Participant>) {
        info!("Adding {} participants", batch.len());
        self.state.participants.extend(batch);
    }

    /// Apply a typed patch to the participant at `index` (0-based)
    pub fn edit(&mut self, index: usize, field: ParticipantField, value: &str) -> RaffleOutcome<()> {
        let len = self.len();
        let participant = self
            .state
            .participants
            .get_mut(index)
            .ok_or(RaffleError::NoSuchParticipant { index, len })?;

        participant.patch(field, value)?;
        debug!("Updated {} of entry {}", field, index);
        Ok(())
    }

    /// Remove and return the participant at `index` (0-based)
    pub fn remove(&mut self, index: usize) -> RaffleOutcome<Participant> {
        let len = self.len();
        if index >= len {
            return Err(RaffleError::NoSuchParticipant { index, len });
        }
        Ok(self.state.participants.remove(index))
    }

    /// Drop every participant and reset the draw counter
    pub fn clear(&mut self) {
        self.state = RaffleState::default();
    }

    /// Draw a winner; the counter only advances when a winner is found
    pub fn run_draw<R: Rng + ?Sized>(
        &mut self,
        model: SelectionModel,
        rng: &mut R,
    ) -> RaffleOutcome<RaffleResult> {
        let result = draw::draw(&self.state.participants, model, rng)?;
        self.state.draw_count += 1;
        Ok(result)
    }
}
