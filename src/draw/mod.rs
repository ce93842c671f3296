//! Raffle draw
//!
//! Sums the pool, splits it between charity and the winner, and picks one
//! winner with odds proportional to their contribution.

mod selection;

pub use selection::{pick_weighted, SelectionModel};

use crate::error::DrawError;
use crate::participant::{format_money, Participant};
use log::{debug, info};
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// How the pool is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSplit {
    pub total: Decimal,
    pub charity: Decimal,
    pub winner_prize: Decimal,
}

/// Split a pool in half, in cents
///
/// Charity receives the half rounded down to the cent; the winner receives
/// the remainder, so the two parts always add back to `total`.
pub fn split_pool(total: Decimal) -> PoolSplit {
    let charity = (total / Decimal::TWO).round_dp_with_strategy(2, RoundingStrategy::ToZero);
    PoolSplit {
        total,
        charity,
        winner_prize: total - charity,
    }
}

/// Sum of all contributions
pub fn pool_total(participants: &[Participant]) -> Result<Decimal, DrawError> {
    participants.iter().try_fold(Decimal::ZERO, |total, p| {
        total.checked_add(p.amount).ok_or(DrawError::AmountOverflow)
    })
}

/// The drawn winner, with display-ready figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerSummary {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub original_contribution: String,
    pub winning_chance_percentage: String,
}

/// Outcome of one draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaffleResult {
    pub total_amount: String,
    pub charity_amount: String,
    pub winner_amount: String,
    pub winner: WinnerSummary,
    /// Roster position of the winner (0-based)
    #[serde(skip)]
    pub winner_index: usize,
}

/// Draw one winner from `participants`
///
/// Fails with [`DrawError::EmptyPool`] for an empty roster and with
/// [`DrawError::NoEligibleTickets`] when nobody carries any weight under
/// `model`.
pub fn draw<R: Rng + ?Sized>(
    participants: &[Participant],
    model: SelectionModel,
    rng: &mut R,
) -> Result<RaffleResult, DrawError> {
    if participants.is_empty() {
        return Err(DrawError::EmptyPool);
    }

    let split = split_pool(pool_total(participants)?);
    let weights = model.weights(participants)?;
    debug!(
        "Drawing from {} participants ({} model, {} weight units)",
        participants.len(),
        model,
        weights.iter().sum::<u64>()
    );

    let winner_index = pick_weighted(&weights, rng)?;
    let winner = &participants[winner_index];
    let chance = winning_chance(winner.amount, split.total);

    info!(
        "Winner: {} (contributed {}, {}% chance)",
        winner.name,
        format_money(winner.amount),
        format_money(chance)
    );

    Ok(RaffleResult {
        total_amount: format_money(split.total),
        charity_amount: format_money(split.charity),
        winner_amount: format_money(split.winner_prize),
        winner: WinnerSummary {
            name: winner.name.clone(),
            email: winner.email.clone(),
            phone: winner.phone.clone(),
            original_contribution: format_money(winner.amount),
            winning_chance_percentage: format_money(chance),
        },
        winner_index,
    })
}

/// Percentage of the pool contributed by `amount`
fn winning_chance(amount: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    amount * Decimal::ONE_HUNDRED / total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::str::FromStr;

    fn entry(name: &str, amount: &str) -> Participant {
        Participant::new(name, "", "", Decimal::from_str(amount).unwrap()).unwrap()
    }

    #[test]
    fn test_single_participant_always_wins() {
        let roster = vec![entry("Solo", "12.34")];
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let result = draw(&roster, SelectionModel::Proportional, &mut rng).unwrap();
            assert_eq!(result.winner.name, "Solo");
            assert_eq!(result.winner.winning_chance_percentage, "100.00");
            assert_eq!(result.winner.original_contribution, "12.34");
            assert_eq!(result.winner_index, 0);
        }
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            draw(&[], SelectionModel::Proportional, &mut rng),
            Err(DrawError::EmptyPool)
        );
        assert_eq!(
            draw(&[], SelectionModel::WholeUnitTickets, &mut rng),
            Err(DrawError::EmptyPool)
        );
    }

    #[test]
    fn test_totals_and_split() {
        let roster = vec![entry("A", "50"), entry("B", "25.50"), entry("C", "0.01")];
        let mut rng = StdRng::seed_from_u64(3);
        let result = draw(&roster, SelectionModel::Proportional, &mut rng).unwrap();

        assert_eq!(result.total_amount, "75.51");
        assert_eq!(result.charity_amount, "37.75");
        assert_eq!(result.winner_amount, "37.76");
    }

    #[test]
    fn test_split_always_adds_up() {
        for cents in [0i64, 1, 2, 99, 101, 12345, 99999] {
            let total = Decimal::new(cents, 2);
            let split = split_pool(total);
            assert_eq!(split.charity + split.winner_prize, total);
            let diff = split.winner_prize - split.charity;
            assert!(diff >= Decimal::ZERO && diff <= Decimal::new(1, 2));
        }
    }

    #[test]
    fn test_oversized_contributions_fail_instead_of_panicking() {
        let unchecked = |name: &str, amount: Decimal| Participant {
            name: name.to_string(),
            email: String::new(),
            phone: String::new(),
            amount,
        };
        let mut rng = StdRng::seed_from_u64(1);

        let rich = Decimal::from_str("1000000000000000000000000000").unwrap();
        let roster = vec![unchecked("Rich", rich)];
        assert_eq!(
            draw(&roster, SelectionModel::Proportional, &mut rng),
            Err(DrawError::AmountOverflow)
        );

        // Largest contributor must not silently fall out of the pool
        let roster = vec![
            unchecked("Big", Decimal::from(200_000_000_000_000_000u64)),
            unchecked("Small", Decimal::ONE),
        ];
        assert_eq!(
            draw(&roster, SelectionModel::Proportional, &mut rng),
            Err(DrawError::AmountOverflow)
        );

        let roster = vec![unchecked("Max", Decimal::MAX), unchecked("One", Decimal::ONE)];
        assert_eq!(pool_total(&roster), Err(DrawError::AmountOverflow));
    }

    #[test]
    fn test_largest_allowed_contribution_can_win() {
        let roster = vec![entry("Big", "1000000000000"), entry("Small", "1")];
        let mut rng = StdRng::seed_from_u64(8);
        let big_wins = (0..100)
            .filter(|_| {
                draw(&roster, SelectionModel::Proportional, &mut rng)
                    .unwrap()
                    .winner
                    .name
                    == "Big"
            })
            .count();
        assert_eq!(big_wins, 100);
    }

    #[test]
    fn test_winning_chance_uses_exact_ratio() {
        let roster = vec![entry("A", "1"), entry("B", "2")];
        let mut rng = StdRng::seed_from_u64(11);
        let result = draw(&roster, SelectionModel::Proportional, &mut rng).unwrap();

        let expected = if result.winner.name == "A" { "33.33" } else { "66.67" };
        assert_eq!(result.winner.winning_chance_percentage, expected);
    }

    #[test]
    fn test_ticket_model_excludes_sub_unit_contributions() {
        let roster = vec![entry("Penny", "0.50"), entry("Dollar", "1.99")];
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let result = draw(&roster, SelectionModel::WholeUnitTickets, &mut rng).unwrap();
            assert_eq!(result.winner.name, "Dollar");
        }
    }

    #[test]
    fn test_ticket_model_with_no_tickets() {
        let roster = vec![entry("Penny", "0.50"), entry("Dime", "0.10")];
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            draw(&roster, SelectionModel::WholeUnitTickets, &mut rng),
            Err(DrawError::NoEligibleTickets)
        );

        // Proportional weighting still lets them win
        let result = draw(&roster, SelectionModel::Proportional, &mut rng).unwrap();
        assert_eq!(result.total_amount, "0.60");
    }

    #[test]
    fn test_long_run_frequency_matches_contribution_share() {
        let roster = vec![entry("A", "10"), entry("B", "30"), entry("C", "60")];
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 20_000;
        let mut wins = [0usize; 3];

        for _ in 0..draws {
            let result = draw(&roster, SelectionModel::Proportional, &mut rng).unwrap();
            wins[result.winner_index] += 1;
        }

        for (i, expected) in [0.10, 0.30, 0.60].iter().enumerate() {
            let observed = wins[i] as f64 / draws as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "participant {} won {:.3} of draws, expected {:.2}",
                i,
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let roster = vec![entry("Solo", "10")];
        let mut rng = StdRng::seed_from_u64(1);
        let result = draw(&roster, SelectionModel::Proportional, &mut rng).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["totalAmount"], "10.00");
        assert_eq!(json["charityAmount"], "5.00");
        assert_eq!(json["winnerAmount"], "5.00");
        assert_eq!(json["winner"]["winningChancePercentage"], "100.00");
        assert_eq!(json["winner"]["originalContribution"], "10.00");
        assert!(json.get("winnerIndex").is_none());
    }
}
