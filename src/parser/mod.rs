//! Free-text participant line parser
//!
//! Lines such as `jane@email.com Jane Smith; 100` are split into fields by an
//! ordered pipeline: email, then phone, then amount, then whatever is left
//! becomes the name. Each stage removes its match before the next one runs,
//! so phone digits are never read as an amount and an amount is never read
//! as part of a phone number.

mod matchers;

pub use matchers::{clean_name, extract_amount, extract_email, extract_phone};

use crate::error::ParseError;
use crate::participant::{Participant, MAX_AMOUNT};
use log::trace;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse one line of free text into a participant
///
/// # Errors
///
/// * [`ParseError::NoAmount`] - no amount on the line
/// * [`ParseError::ZeroAmount`] - the amount is zero
/// * [`ParseError::InvalidAmount`] - the digits exceed [`MAX_AMOUNT`]
/// * [`ParseError::NoName`] - nothing remains for the name
pub fn parse_line(line: &str) -> Result<Participant, ParseError> {
    let (email, rest) = extract_email(line);
    let (phone, rest) = extract_phone(&rest);
    let (amount, rest) = extract_amount(&rest);

    let digits = amount.ok_or(ParseError::NoAmount)?;
    let amount = Decimal::from_str(&digits)
        .ok()
        .filter(|amount| *amount <= MAX_AMOUNT)
        .ok_or_else(|| ParseError::InvalidAmount(digits.clone()))?;
    if amount.is_zero() {
        return Err(ParseError::ZeroAmount);
    }

    let name = clean_name(&rest);
    if name.is_empty() {
        return Err(ParseError::NoName);
    }

    trace!(
        "Parsed {:?}: name={:?} email={:?} phone={:?} amount={}",
        line,
        name,
        email,
        phone,
        amount
    );

    Ok(Participant {
        name,
        email: email.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        amount,
    })
}
