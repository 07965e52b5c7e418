//! Edition (tickets issued vs. sold) and draw results

use serde::{Deserialize, Serialize};

use lt_core::{Container, LtError, LtResult, Ticket};

/// Tickets issued and tickets sold for one lottery edition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    total_tickets: i64,
    sold_tickets: i64,
}

impl Edition {
    /// Validated edition: `total > 0`, `0 <= sold <= total`
    pub fn new(total_tickets: i64, sold_tickets: i64) -> LtResult<Self> {
        let edition = Self {
            total_tickets,
            sold_tickets,
        };
        edition.validate()?;
        Ok(edition)
    }

    /// Built-in editions; callers go through [`Edition::new`]
    pub(crate) const fn preset(total_tickets: i64, sold_tickets: i64) -> Self {
        Self {
            total_tickets,
            sold_tickets,
        }
    }

    pub fn validate(&self) -> LtResult<()> {
        if self.total_tickets <= 0 {
            return Err(LtError::invalid(format!(
                "total_tickets must be positive, got {}",
                self.total_tickets
            )));
        }
        if self.total_tickets > u32::MAX as i64 {
            return Err(LtError::invalid(format!(
                "total_tickets {} exceeds the ticket number range",
                self.total_tickets
            )));
        }
        if self.sold_tickets < 0 || self.sold_tickets > self.total_tickets {
            return Err(LtError::invalid(format!(
                "sold_tickets must be within 0..={}, got {}",
                self.total_tickets, self.sold_tickets
            )));
        }
        Ok(())
    }

    pub fn total_tickets(&self) -> i64 {
        self.total_tickets
    }

    pub fn sold_tickets(&self) -> i64 {
        self.sold_tickets
    }

    /// Share of issued tickets that were sold (0.0 - 1.0)
    pub fn sell_through(&self) -> f64 {
        self.sold_tickets as f64 / self.total_tickets as f64
    }
}

/// An edition together with its winners
#[derive(Debug, Clone)]
pub struct Results<C> {
    pub edition: Edition,
    pub winners: C,
}

impl<C: Container<Ticket>> Results<C> {
    pub fn new(edition: Edition, winners: C) -> Self {
        Self { edition, winners }
    }

    pub fn winner_count(&self) -> usize {
        self.winners.len()
    }

    /// Sum of all prizes won, saturating at `u64::MAX`
    pub fn total_payout(&self) -> u64 {
        self.winners
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.prize()))
    }

    pub fn into_winners(self) -> C {
        self.winners
    }
}

#[cfg(test)]
mod tests {
    use lt_core::LinkedQueue;

    use super::*;

    #[test]
    fn test_valid_edition() {
        let edition = Edition::new(100, 80).unwrap();
        assert_eq!(edition.total_tickets(), 100);
        assert_eq!(edition.sold_tickets(), 80);
        assert!((edition.sell_through() - 0.8).abs() < 1e-12);
        assert!(Edition::new(1, 0).is_ok());
        assert!(Edition::new(5, 5).is_ok());
    }

    #[test]
    fn test_invalid_edition() {
        assert!(Edition::new(0, 0).unwrap_err().is_invalid_argument());
        assert!(Edition::new(-5, 0).unwrap_err().is_invalid_argument());
        assert!(Edition::new(10, 11).unwrap_err().is_invalid_argument());
        assert!(Edition::new(10, -1).unwrap_err().is_invalid_argument());
        assert!(Edition::new(u32::MAX as i64 + 1, 1).is_err());
    }

    #[test]
    fn test_deserialized_edition_is_revalidated() {
        let edition: Edition =
            serde_json::from_str(r#"{"total_tickets": 3, "sold_tickets": 9}"#).unwrap();
        assert!(edition.validate().is_err());
    }

    #[test]
    fn test_results_payout() {
        let winners: LinkedQueue<_> = vec![Ticket::new(2, 4), Ticket::new(7, 3)]
            .into_iter()
            .collect();
        let results = Results::new(Edition::new(10, 10).unwrap(), winners);
        assert_eq!(results.winner_count(), 2);
        assert_eq!(results.total_payout(), 7);
    }

    #[test]
    fn test_results_payout_saturates() {
        let winners: LinkedQueue<_> = vec![Ticket::new(1, u64::MAX), Ticket::new(2, 1)]
            .into_iter()
            .collect();
        let results = Results::new(Edition::new(2, 2).unwrap(), winners);
        assert_eq!(results.total_payout(), u64::MAX);
    }
}
