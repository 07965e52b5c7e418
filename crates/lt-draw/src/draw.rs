//! Lottery draw engine — generation plus selection with an owned RNG

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lt_core::{AnyContainer, Container, LtResult, Ticket};

use crate::config::DrawConfig;
use crate::edition::Results;
use crate::generator::generate_into;
use crate::selector::select_winners_with;
use crate::summary::DrawSummary;

/// Everything one draw produced
#[derive(Debug, Clone)]
pub struct DrawOutcome<C> {
    /// Every issued ticket, in the container's natural order
    pub tickets: C,
    /// Edition and selected winners
    pub results: Results<C>,
    pub summary: DrawSummary,
}

impl<C: Container<Ticket>> DrawOutcome<C> {
    pub fn winners(&self) -> &C {
        &self.results.winners
    }
}

/// Lottery draw engine
///
/// Owns its configuration and a ChaCha RNG. With a seed set, repeated runs
/// from the same state reproduce the same ticket-to-prize assignment.
#[derive(Debug)]
pub struct LotteryDraw {
    config: DrawConfig,
    rng: ChaCha8Rng,
    draws: u64,
}

impl LotteryDraw {
    /// Validate `config` and set up the RNG
    pub fn new(config: DrawConfig) -> LtResult<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => {
                log::warn!("No seed configured, draws will not be reproducible");
                ChaCha8Rng::from_os_rng()
            }
        };

        Ok(Self {
            config,
            rng,
            draws: 0,
        })
    }

    /// Reseed the RNG
    pub fn seed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.config.seed = Some(seed);
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Number of completed draws
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Issue the edition's tickets into a fresh `C`
    pub fn generate<C: Container<Ticket>>(&mut self) -> LtResult<C> {
        let mut tickets = C::default();
        self.generate_into(&mut tickets)?;
        Ok(tickets)
    }

    /// Issue the edition's tickets into `tickets`
    pub fn generate_into<C: Container<Ticket>>(&mut self, tickets: &mut C) -> LtResult<()> {
        generate_into(
            &mut self.rng,
            self.config.edition.total_tickets(),
            &self.config.tiers,
            tickets,
        )
    }

    /// Generate and select winners with a compile-time container family
    pub fn run<C: Container<Ticket>>(&mut self) -> LtResult<DrawOutcome<C>> {
        let tickets = self.generate::<C>()?;
        self.finish(tickets)
    }

    /// Generate and select winners with the configured container family
    pub fn run_any(&mut self) -> LtResult<DrawOutcome<AnyContainer<Ticket>>> {
        let mut tickets = AnyContainer::new(self.config.container);
        self.generate_into(&mut tickets)?;
        self.finish(tickets)
    }

    fn finish<C: Container<Ticket>>(&mut self, tickets: C) -> LtResult<DrawOutcome<C>> {
        let edition = self.config.edition;
        let winners = select_winners_with(self.config.selection, edition.sold_tickets(), &tickets)?;
        let summary = DrawSummary::new(&edition, &tickets, &winners);

        self.draws += 1;
        log::info!(
            "Draw #{} over {}: {} winners, payout {}",
            self.draws,
            summary.container,
            summary.winners,
            summary.total_payout
        );

        Ok(DrawOutcome {
            tickets,
            results: Results::new(edition, winners),
            summary,
        })
    }
}
