//! Lottery ticket value type

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single lottery ticket: its number and the prize it carries.
///
/// Ordered by number first, then by prize. Fields are read-only once the
/// ticket is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket {
    number: u32,
    prize: u64,
}

impl Ticket {
    /// Create a ticket (prize 0 = no prize)
    pub const fn new(number: u32, prize: u64) -> Self {
        Self { number, prize }
    }

    /// Ticket without a prize
    pub const fn blank(number: u32) -> Self {
        Self::new(number, 0)
    }

    pub const fn number(&self) -> u32 {
        self.number
    }

    pub const fn prize(&self) -> u64 {
        self.prize
    }

    /// Does this ticket carry a prize?
    pub const fn is_winning(&self) -> bool {
        self.prize != 0
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.number, self.prize)
    }
}

impl From<(u32, u64)> for Ticket {
    fn from((number, prize): (u32, u64)) -> Self {
        Self::new(number, prize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_number_then_prize() {
        let mut tickets = vec![
            Ticket::new(3, 0),
            Ticket::new(1, 50),
            Ticket::new(1, 10),
            Ticket::new(2, 0),
        ];
        tickets.sort();
        assert_eq!(
            tickets,
            vec![
                Ticket::new(1, 10),
                Ticket::new(1, 50),
                Ticket::new(2, 0),
                Ticket::new(3, 0),
            ]
        );
    }

    #[test]
    fn test_winning() {
        assert!(Ticket::new(7, 4).is_winning());
        assert!(!Ticket::blank(7).is_winning());
        assert_eq!(Ticket::from((9, 2)), Ticket::new(9, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Ticket::new(5, 100).to_string(), "#5 (100)");
    }
}
