//! Ticket generation
//!
//! Issues tickets `1..=total` in ascending order. A prize pool of
//! `sum(tier.count)` distinct winning numbers is drawn uniformly without
//! replacement; walking the numbers upward, the k-th winning number receives
//! the k-th value of the flattened tier list and every other ticket gets 0.

use std::collections::HashSet;

use rand::Rng;

use lt_core::{Container, LtError, LtResult, Ticket};

use crate::tier::{PrizeTier, prize_values, validate_tiers};

/// Generate `total_tickets` tickets into a fresh container.
///
/// Fails with an invalid argument error before touching the container when
/// `total_tickets <= 0`, the tier list is empty or malformed, or the tiers
/// ask for more prizes than there are tickets. Advances `rng`.
pub fn generate_tickets<C, R>(rng: &mut R, total_tickets: i64, tiers: &[PrizeTier]) -> LtResult<C>
where
    C: Container<Ticket>,
    R: Rng + ?Sized,
{
    let mut tickets = C::default();
    generate_into(rng, total_tickets, tiers, &mut tickets)?;
    Ok(tickets)
}

/// Same as [`generate_tickets`], pushing into an existing container.
///
/// Useful when the family is chosen at run time (`AnyContainer`).
pub fn generate_into<C, R>(
    rng: &mut R,
    total_tickets: i64,
    tiers: &[PrizeTier],
    tickets: &mut C,
) -> LtResult<()>
where
    C: Container<Ticket>,
    R: Rng + ?Sized,
{
    let total = ticket_count(total_tickets)?;
    let pool = validate_tiers(tiers, total)?;
    let prizes = prize_values(tiers);

    log::debug!(
        "Generating {} tickets ({} winning) into {}",
        total,
        pool,
        tickets.kind()
    );

    let winning = draw_winning_numbers(rng, total, pool);

    let mut next_prize = 0;
    for number in 1..=total {
        let prize = if winning.contains(&number) {
            let prize = prizes[next_prize];
            next_prize += 1;
            prize
        } else {
            0
        };
        tickets.push(Ticket::new(number, prize));
    }

    debug_assert_eq!(next_prize, prizes.len());
    Ok(())
}

/// Draw `count` distinct numbers uniformly from `1..=total`.
///
/// Rejection sampling into a hash set: a repeated number is simply drawn
/// again. `count` is capped at `total`.
pub fn draw_winning_numbers<R>(rng: &mut R, total: u32, count: usize) -> HashSet<u32>
where
    R: Rng + ?Sized,
{
    let count = count.min(total as usize);
    let mut winning = HashSet::with_capacity(count);
    while winning.len() < count {
        winning.insert(rng.random_range(1..=total));
    }
    winning
}

fn ticket_count(total_tickets: i64) -> LtResult<u32> {
    if total_tickets <= 0 {
        return Err(LtError::invalid(format!(
            "total_tickets must be positive, got {total_tickets}"
        )));
    }
    u32::try_from(total_tickets).map_err(|_| {
        LtError::invalid(format!(
            "total_tickets {total_tickets} exceeds the ticket number range"
        ))
    })
}

#[cfg(test)]
mod tests {
    use lt_core::{ForwardList, LinkedQueue, LinkedStack, Vector};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_single_ticket_single_prize() {
        let tickets: Vector<Ticket> =
            generate_tickets(&mut rng(), 1, &[PrizeTier::new(1, 5)]).unwrap();
        assert_eq!(tickets.as_slice(), &[Ticket::new(1, 5)]);
    }

    #[test]
    fn test_two_prizes_in_ten() {
        let tickets: Vector<Ticket> =
            generate_tickets(&mut rng(), 10, &[PrizeTier::new(2, 100)]).unwrap();
        assert_eq!(tickets.len(), 10);

        let winners: Vec<_> = tickets.iter().filter(|t| t.is_winning()).collect();
        assert_eq!(winners.len(), 2);
        assert!(winners.iter().all(|t| t.prize() == 100));
        assert_ne!(winners[0].number(), winners[1].number());
        assert!(winners.iter().all(|t| (1..=10).contains(&t.number())));
    }

    #[test]
    fn test_numbers_ascending_in_push_order() {
        let tickets: LinkedQueue<Ticket> =
            generate_tickets(&mut rng(), 50, &[PrizeTier::new(5, 1)]).unwrap();
        let numbers: Vec<_> = tickets.iter().map(Ticket::number).collect();
        assert_eq!(numbers, (1..=50).collect::<Vec<_>>());
    }

    #[test]
    fn test_prize_values_assigned_by_ascending_winning_number() {
        let tiers = [PrizeTier::new(1, 4), PrizeTier::new(2, 3), PrizeTier::new(3, 2)];
        let tickets: Vector<Ticket> = generate_tickets(&mut rng(), 40, &tiers).unwrap();
        let prizes: Vec<_> = tickets
            .iter()
            .filter(|t| t.is_winning())
            .map(Ticket::prize)
            .collect();
        assert_eq!(prizes, prize_values(&tiers));
    }

    #[test]
    fn test_all_tickets_win() {
        let tickets: LinkedStack<Ticket> =
            generate_tickets(&mut rng(), 6, &[PrizeTier::new(6, 9)]).unwrap();
        assert!(tickets.iter().all(|t| t.prize() == 9));
    }

    #[test]
    fn test_invalid_arguments() {
        let tiers = [PrizeTier::new(1, 1)];
        let err = generate_tickets::<Vector<Ticket>, _>(&mut rng(), -5, &tiers).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(generate_tickets::<Vector<Ticket>, _>(&mut rng(), 0, &tiers).is_err());
        assert!(generate_tickets::<Vector<Ticket>, _>(&mut rng(), 10, &[]).is_err());
        assert!(
            generate_tickets::<Vector<Ticket>, _>(&mut rng(), 3, &[PrizeTier::new(4, 1)]).is_err()
        );
        assert!(
            generate_tickets::<Vector<Ticket>, _>(&mut rng(), u32::MAX as i64 + 1, &tiers)
                .is_err()
        );
    }

    #[test]
    fn test_failed_generation_leaves_container_untouched() {
        let mut tickets = ForwardList::new();
        tickets.push_front(Ticket::new(99, 1));
        let err = generate_into(&mut rng(), 5, &[], &mut tickets).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(tickets.len(), 1);
    }

    #[test]
    fn test_draw_winning_numbers_distinct_and_in_range() {
        let mut rng = rng();
        let winning = draw_winning_numbers(&mut rng, 20, 20);
        assert_eq!(winning.len(), 20);
        assert!(winning.iter().all(|n| (1..=20).contains(n)));

        assert!(draw_winning_numbers(&mut rng, 20, 0).is_empty());
    }

    #[test]
    fn test_advances_caller_rng() {
        let tiers = [PrizeTier::new(3, 1)];
        let mut rng = rng();
        let first: Vector<Ticket> = generate_tickets(&mut rng, 1000, &tiers).unwrap();
        let second: Vector<Ticket> = generate_tickets(&mut rng, 1000, &tiers).unwrap();
        // Same seed reused without reseeding gives a fresh draw
        assert_ne!(first, second);
    }
}
