//! Prize tiers — how many tickets share each prize amount

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use lt_core::{LtError, LtResult};

/// `count` tickets each win `value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrizeTier {
    pub count: u32,
    pub value: u64,
}

impl PrizeTier {
    pub const fn new(count: u32, value: u64) -> Self {
        Self { count, value }
    }

    /// Total paid out by this tier, `None` on overflow
    pub fn payout(&self) -> Option<u64> {
        (self.count as u64).checked_mul(self.value)
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.count, self.value)
    }
}

/// Parses `COUNT:VALUE`, e.g. `3:2` = three tickets winning 2 each
impl FromStr for PrizeTier {
    type Err = LtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, value) = s
            .split_once(':')
            .ok_or_else(|| LtError::invalid(format!("tier '{s}' is not COUNT:VALUE")))?;

        let count = count
            .trim()
            .parse()
            .map_err(|_| LtError::invalid(format!("tier '{s}': bad count")))?;
        let value = value
            .trim()
            .parse()
            .map_err(|_| LtError::invalid(format!("tier '{s}': bad value")))?;

        Ok(Self::new(count, value))
    }
}

/// Check a tier list against the number of tickets in the edition.
///
/// Returns the size of the prize pool (sum of all counts). The combined
/// payout of all tiers must fit in a `u64`.
pub fn validate_tiers(tiers: &[PrizeTier], total_tickets: u32) -> LtResult<usize> {
    if tiers.is_empty() {
        return Err(LtError::invalid("at least one prize tier is required"));
    }

    let mut pool: u64 = 0;
    let mut payout: u64 = 0;
    for (i, tier) in tiers.iter().enumerate() {
        if tier.count == 0 {
            return Err(LtError::invalid(format!("tier {i}: count must be positive")));
        }
        if tier.value == 0 {
            return Err(LtError::invalid(format!("tier {i}: value must be positive")));
        }
        pool += tier.count as u64;
        payout = tier
            .payout()
            .and_then(|p| payout.checked_add(p))
            .ok_or_else(|| LtError::invalid(format!("tier {i}: total payout overflows")))?;
    }

    if pool > total_tickets as u64 {
        return Err(LtError::invalid(format!(
            "{pool} prizes do not fit into {total_tickets} tickets"
        )));
    }

    Ok(pool as usize)
}

/// Expand tiers into one prize value per winning ticket, in tier order.
///
/// The k-th value goes to the k-th smallest winning number.
pub fn prize_values(tiers: &[PrizeTier]) -> Vec<u64> {
    tiers
        .iter()
        .flat_map(|tier| std::iter::repeat_n(tier.value, tier.count as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prize_values_follow_tier_order() {
        let tiers = [PrizeTier::new(1, 4), PrizeTier::new(2, 3), PrizeTier::new(3, 2)];
        assert_eq!(prize_values(&tiers), vec![4, 3, 3, 2, 2, 2]);
    }

    #[test]
    fn test_validate() {
        let tiers = [PrizeTier::new(2, 100), PrizeTier::new(3, 5)];
        assert_eq!(validate_tiers(&tiers, 10).unwrap(), 5);
        assert_eq!(validate_tiers(&tiers, 5).unwrap(), 5);
        assert!(validate_tiers(&tiers, 4).unwrap_err().is_invalid_argument());
        assert!(validate_tiers(&[], 10).unwrap_err().is_invalid_argument());
        assert!(validate_tiers(&[PrizeTier::new(0, 1)], 10).is_err());
        assert!(validate_tiers(&[PrizeTier::new(1, 0)], 10).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("4:1".parse::<PrizeTier>().unwrap(), PrizeTier::new(4, 1));
        assert_eq!(" 2 : 300 ".parse::<PrizeTier>().unwrap(), PrizeTier::new(2, 300));
        assert!("4".parse::<PrizeTier>().is_err());
        assert!("a:1".parse::<PrizeTier>().is_err());
        assert!("1:-3".parse::<PrizeTier>().is_err());
        assert_eq!(PrizeTier::new(3, 2).to_string(), "3:2");
    }

    #[test]
    fn test_payout() {
        assert_eq!(PrizeTier::new(3, 7).payout(), Some(21));
        assert_eq!(PrizeTier::new(2, u64::MAX).payout(), None);
    }

    #[test]
    fn test_validate_rejects_payout_overflow() {
        let err = validate_tiers(&[PrizeTier::new(2, u64::MAX)], 10).unwrap_err();
        assert!(err.is_invalid_argument());

        let tiers = [PrizeTier::new(1, u64::MAX), PrizeTier::new(1, 1)];
        assert!(validate_tiers(&tiers, 10).unwrap_err().is_invalid_argument());

        assert_eq!(validate_tiers(&[PrizeTier::new(1, u64::MAX)], 10).unwrap(), 1);
    }
}
