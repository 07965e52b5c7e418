//! Draw statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use lt_core::{Container, ContainerKind, Ticket};

use crate::edition::Edition;

/// Aggregate numbers for one draw
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawSummary {
    pub container: ContainerKind,
    pub total_tickets: i64,
    pub sold_tickets: i64,
    /// Tickets issued with a nonzero prize
    pub prizes_issued: u64,
    /// Sum of all prizes issued
    pub prize_pool: u64,
    /// Winning tickets among the sold ones
    pub winners: u64,
    /// Sum of prizes won by sold tickets
    pub total_payout: u64,
    /// Winner count per prize value
    pub winners_by_prize: BTreeMap<u64, u64>,
}

impl DrawSummary {
    /// Build from the full ticket set and the selected winners.
    ///
    /// Prize sums saturate at `u64::MAX`.
    pub fn new<C: Container<Ticket>>(edition: &Edition, tickets: &C, winners: &C) -> Self {
        let mut summary = Self {
            container: tickets.kind(),
            total_tickets: edition.total_tickets(),
            sold_tickets: edition.sold_tickets(),
            ..Default::default()
        };

        for ticket in tickets.iter().filter(|t| t.is_winning()) {
            summary.prizes_issued += 1;
            summary.prize_pool = summary.prize_pool.saturating_add(ticket.prize());
        }

        for ticket in winners.iter() {
            summary.winners += 1;
            summary.total_payout = summary.total_payout.saturating_add(ticket.prize());
            *summary.winners_by_prize.entry(ticket.prize()).or_default() += 1;
        }

        summary
    }

    /// Share of the prize pool actually paid out (percent)
    pub fn payout_rate(&self) -> f64 {
        if self.prize_pool > 0 {
            (self.total_payout as f64 / self.prize_pool as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Winners per sold ticket (percent)
    pub fn hit_rate(&self) -> f64 {
        if self.sold_tickets > 0 {
            (self.winners as f64 / self.sold_tickets as f64) * 100.0
        } else {
            0.0
        }
    }
}
