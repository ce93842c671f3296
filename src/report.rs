//! Plain-text rendering of the roster and draw results

use crate::draw::{pool_total, RaffleResult};
use crate::participant::{format_money, Participant};

pub const HOW_IT_WORKS: &str = "\
How the 50/50 Raffle Works

1. Entry & Contributions
   Participants enter by contributing any amount. Each contribution counts
   toward the draw in proportion to its size.

2. Prize Pool
   The total amount collected is split 50/50:
     - 50% goes to the winning participant
     - 50% goes to the designated charity or cause

3. Winner Selection
   Winners are selected randomly, but fairly. Your chance of winning is
   proportional to your contribution: contribute 20% of the pool and you
   have a 20% chance of winning.

4. Transparency
   Every entry is listed with `list`. Results show the winner's original
   contribution and winning chance.
";

/// Participant table with 1-based positions and the pool total
pub fn render_roster(participants: &[Participant], draw_count: u64) -> String {
    let mut out = String::new();

    if participants.is_empty() {
        out.push_str("No participants yet.\n");
        out.push_str(&format!("Total Draws: {}\n", draw_count));
        return out;
    }

    let name_width = column_width("Name", participants.iter().map(|p| p.name.as_str()));
    let email_width = column_width("Email", participants.iter().map(|p| p.email.as_str()));
    let phone_width = column_width("Phone", participants.iter().map(|p| p.phone.as_str()));

    out.push_str(&format!(
        "{:>3}  {:<nw$}  {:<ew$}  {:<pw$}  {:>10}\n",
        "#",
        "Name",
        "Email",
        "Phone",
        "Amount",
        nw = name_width,
        ew = email_width,
        pw = phone_width,
    ));

    for (idx, p) in participants.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<nw$}  {:<ew$}  {:<pw$}  {:>10}\n",
            idx + 1,
            p.name,
            p.email,
            p.phone,
            format!("${}", format_money(p.amount)),
            nw = name_width,
            ew = email_width,
            pw = phone_width,
        ));
    }

    let raised = match pool_total(participants) {
        Ok(total) => format!("${}", format_money(total)),
        Err(e) => e.to_string(),
    };
    out.push_str(&format!(
        "\n{} participants, {} raised\n",
        participants.len(),
        raised
    ));
    out.push_str(&format!("Total Draws: {}\n", draw_count));
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

/// Human-readable draw result
pub fn render_result(result: &RaffleResult, draw_count: u64) -> String {
    let winner = &result.winner;
    let mut out = String::from("Raffle Results\n");

    out.push_str(&format!("  Total Amount Raised: ${}\n", result.total_amount));
    out.push_str(&format!("  Amount to Charity:   ${}\n", result.charity_amount));
    out.push_str(&format!("  Prize Amount:        ${}\n", result.winner_amount));
    out.push_str("Winner\n");
    out.push_str(&format!("  Name: {}\n", winner.name));
    if !winner.email.is_empty() {
        out.push_str(&format!("  Email: {}\n", winner.email));
    }
    if !winner.phone.is_empty() {
        out.push_str(&format!("  Phone: {}\n", winner.phone));
    }
    out.push_str(&format!(
        "  Original Contribution: ${}\n",
        winner.original_contribution
    ));
    out.push_str(&format!(
        "  Winning Chance: {}%\n",
        winner.winning_chance_percentage
    ));
    out.push_str(&format!("Total Draws: {}\n", draw_count));
    out
}
