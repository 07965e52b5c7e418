//! # lt-draw — Lottery ticket generation and winner selection
//!
//! Issues a full edition of numbered tickets, assigns prizes to a uniformly
//! drawn set of distinct winning numbers, then scans the sold tickets for
//! winners. Every algorithm is written once against [`lt_core::Container`]
//! and works with any container family.
//!
//! ## Architecture
//!
//! ```text
//! LotteryDraw (DrawConfig + ChaCha8Rng)
//!     │
//!     ├── generate_tickets  (Edition.total, PrizeTier[]) → C
//!     ├── select_winners    (Edition.sold, &C)           → C
//!     └── DrawSummary
//!           │
//!           v
//!     DrawOutcome { tickets, Results { edition, winners }, summary }
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use lt_core::{LinkedQueue, Ticket};
//! use lt_draw::{DrawConfig, LotteryDraw};
//!
//! let mut draw = LotteryDraw::new(DrawConfig::small().with_seed(42))?;
//! let outcome = draw.run::<LinkedQueue<Ticket>>()?;
//! for ticket in outcome.winners() {
//!     println!("{ticket}");
//! }
//! ```

pub mod config;
pub mod draw;
pub mod edition;
pub mod generator;
pub mod selector;
pub mod summary;
pub mod tier;

pub use config::DrawConfig;
pub use draw::{DrawOutcome, LotteryDraw};
pub use edition::{Edition, Results};
pub use generator::{draw_winning_numbers, generate_into, generate_tickets};
pub use selector::{SelectionMode, select_winners, select_winners_with};
pub use summary::DrawSummary;
pub use tier::{PrizeTier, prize_values, validate_tiers};
