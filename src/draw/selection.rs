//! Winner selection models
//!
//! A model turns each contribution into an integer weight; the winner is the
//! owner of one weight unit drawn uniformly from the whole pool.

use crate::error::{DrawError, RaffleError};
use crate::participant::Participant;
use log::warn;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// How contributions translate into winning odds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionModel {
    /// One weight unit per cent contributed. Draw odds match the displayed
    /// winning chance exactly and sub-dollar contributions can win.
    #[default]
    Proportional,

    /// One ticket per whole currency unit (floor of the amount).
    /// Contributions under one unit hold no ticket and cannot win.
    WholeUnitTickets,
}

impl SelectionModel {
    /// Weight of a single contribution under this model
    ///
    /// Non-positive amounts weigh nothing. Amounts whose weight does not fit
    /// a `u64` fail with [`DrawError::AmountOverflow`].
    pub fn weight(self, amount: Decimal) -> Result<u64, DrawError> {
        if amount <= Decimal::ZERO {
            return Ok(0);
        }
        let units = match self {
            Self::Proportional => amount
                .checked_mul(Decimal::ONE_HUNDRED)
                .ok_or(DrawError::AmountOverflow)?
                .round(),
            Self::WholeUnitTickets => amount.floor(),
        };
        units.to_u64().ok_or(DrawError::AmountOverflow)
    }

    /// Weights for the whole roster, in roster order
    ///
    /// The sum of all weights must also fit a `u64`.
    pub fn weights(self, participants: &[Participant]) -> Result<Vec<u64>, DrawError> {
        let mut total: u64 = 0;
        let mut weights = Vec::with_capacity(participants.len());

        for p in participants {
            let weight = self.weight(p.amount)?;
            if weight == 0 {
                warn!(
                    "{} ({}) holds no {} and cannot win",
                    p.name,
                    p.amount,
                    self.unit_name()
                );
            }
            total = total.checked_add(weight).ok_or(DrawError::AmountOverflow)?;
            weights.push(weight);
        }

        Ok(weights)
    }

    fn unit_name(self) -> &'static str {
        match self {
            Self::Proportional => "weight",
            Self::WholeUnitTickets => "tickets",
        }
    }
}

impl FromStr for SelectionModel {
    type Err = RaffleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "proportional" | "cents" => Ok(Self::Proportional),
            "tickets" | "whole-unit-tickets" => Ok(Self::WholeUnitTickets),
            _ => Err(RaffleError::UnknownModel(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proportional => f.write_str("proportional"),
            Self::WholeUnitTickets => f.write_str("tickets"),
        }
    }
}

/// Pick one index with probability proportional to its weight
pub fn pick_weighted<R: Rng + ?Sized>(weights: &[u64], rng: &mut R) -> Result<usize, DrawError> {
    if weights.is_empty() {
        return Err(DrawError::EmptyPool);
    }
    let index = WeightedIndex::new(weights).map_err(|_| DrawError::NoEligibleTickets)?;
    Ok(index.sample(rng))
}
