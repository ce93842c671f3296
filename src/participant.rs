//! Participant records and the typed field patch used for manual entry and edits.

use crate::error::FieldError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest accepted contribution (one trillion)
///
/// Keeps cent weights and pool sums well inside `u64` and `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// One raffle entry
///
/// Participants have no identity beyond their position in the roster, so
/// duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub amount: Decimal,
}

impl Participant {
    /// Build a participant from manual-entry fields
    ///
    /// The name is trimmed and must be non-empty; the amount must be positive,
    /// at most two decimals and no larger than [`MAX_AMOUNT`].
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self, FieldError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(FieldError::EmptyName);
        }
        check_amount(amount, &amount.to_string())?;

        Ok(Self {
            name,
            email: email.into().trim().to_string(),
            phone: phone.into().trim().to_string(),
            amount,
        })
    }

    /// Replace one field, validating the value for that field's type.
    ///
    /// On error the record is left untouched.
    pub fn patch(&mut self, field: ParticipantField, value: &str) -> Result<(), FieldError> {
        match field {
            ParticipantField::Name => {
                let name = value.trim();
                if name.is_empty() {
                    return Err(FieldError::EmptyName);
                }
                self.name = name.to_string();
            }
            ParticipantField::Email => self.email = value.trim().to_string(),
            ParticipantField::Phone => self.phone = value.trim().to_string(),
            ParticipantField::Amount => self.amount = parse_amount(value)?,
        }
        Ok(())
    }

    /// Re-check a record that did not come through [`Participant::new`],
    /// such as one read back from a store file.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.trim().is_empty() {
            return Err(FieldError::EmptyName);
        }
        check_amount(self.amount, &self.amount.to_string())
    }
}

/// Editable participant fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantField {
    Name,
    Email,
    Phone,
    Amount,
}

impl FromStr for ParticipantField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "amount" => Ok(Self::Amount),
            _ => Err(FieldError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for ParticipantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Amount => "amount",
        };
        f.write_str(name)
    }
}

/// Parse a typed-in contribution such as `25`, `$25.50` or `0.75`
pub fn parse_amount(input: &str) -> Result<Decimal, FieldError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();

    let amount = Decimal::from_str(digits)
        .map_err(|_| FieldError::InvalidAmount(trimmed.to_string()))?;
    check_amount(amount, trimmed)?;

    Ok(amount)
}

fn check_amount(amount: Decimal, raw: &str) -> Result<(), FieldError> {
    if amount.normalize().scale() > 2 {
        return Err(FieldError::TooManyDecimals(raw.to_string()));
    }
    if amount <= Decimal::ZERO {
        return Err(FieldError::NonPositiveAmount);
    }
    if amount > MAX_AMOUNT {
        return Err(FieldError::AmountTooLarge(raw.to_string()));
    }
    Ok(())
}

/// Render a currency value with exactly two decimals (no symbol)
pub fn format_money(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
