//! Winner selection
//!
//! Winners are collected in traversal order into a container of the same
//! family as the ticket container, so a stack yields winners from the highest
//! number down while the other families yield them ascending.
//!
//! Stack and forward list insert at the front, so their winners are pushed
//! in reverse scan order to come back out in traversal order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use lt_core::{Container, LtError, LtResult, Ticket};

/// How the sold-ticket budget is spent while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Blank tickets are skipped without touching the budget; only winning
    /// tickets consume it. The scan therefore stops after `sold` winners,
    /// however many blank tickets it had to walk past.
    #[default]
    WinnersOnly,
    /// Every visited ticket consumes the budget: exactly the first `sold`
    /// tickets in traversal order are examined.
    FirstSold,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WinnersOnly => "winners-only",
            Self::FirstSold => "first-sold",
        })
    }
}

impl FromStr for SelectionMode {
    type Err = LtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "winners-only" => Ok(Self::WinnersOnly),
            "first-sold" => Ok(Self::FirstSold),
            other => Err(LtError::invalid(format!("unknown selection mode '{other}'"))),
        }
    }
}

/// Collect winners among the sold tickets, [`SelectionMode::WinnersOnly`].
///
/// Fails with an invalid argument error when `sold_tickets <= 0` or the
/// ticket container is empty.
pub fn select_winners<C>(sold_tickets: i64, tickets: &C) -> LtResult<C>
where
    C: Container<Ticket>,
{
    select_winners_with(SelectionMode::WinnersOnly, sold_tickets, tickets)
}

/// Collect winners with an explicit budget mode
pub fn select_winners_with<C>(mode: SelectionMode, sold_tickets: i64, tickets: &C) -> LtResult<C>
where
    C: Container<Ticket>,
{
    if sold_tickets <= 0 {
        return Err(LtError::invalid(format!(
            "sold_tickets must be positive, got {sold_tickets}"
        )));
    }
    if tickets.is_empty() {
        return Err(LtError::invalid("no tickets to select winners from"));
    }

    let mut selected = Vec::new();
    let mut remaining = sold_tickets;
    let mut scanned = 0usize;

    for ticket in tickets.iter() {
        if remaining == 0 {
            break;
        }
        scanned += 1;

        if !ticket.is_winning() {
            if mode == SelectionMode::FirstSold {
                remaining -= 1;
            }
            continue;
        }

        selected.push(*ticket);
        remaining -= 1;
    }

    let mut winners = tickets.empty_like();
    if winners.kind().is_reversed() {
        selected.into_iter().rev().for_each(|t| winners.push(t));
    } else {
        selected.into_iter().for_each(|t| winners.push(t));
    }

    log::debug!(
        "Selected {} winners from {} scanned {} tickets ({:?})",
        winners.len(),
        scanned,
        tickets.kind(),
        mode
    );

    Ok(winners)
}
