//! Ticket Draw command line
//!
//! Usage:
//!   ticket-draw                              - small edition, vector container
//!   ticket-draw --preset classic --container stack
//!   ticket-draw --total 10 --sold 10 --tier 2:100 --seed 7
//!   ticket-draw --config draw.json --json
//!   ticket-draw --all --seed 42             - same draw over every family

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use lt_core::{AnyContainer, Container, ContainerKind, Ticket};
use lt_draw::{DrawConfig, DrawSummary, Edition, LotteryDraw, PrizeTier, SelectionMode};

#[derive(Parser, Debug)]
#[command(name = "ticket-draw", about = "Generate lottery tickets and pick the winners")]
struct Cli {
    /// Container family: queue, stack, forward-list, vector
    #[arg(short, long)]
    container: Option<ContainerKind>,

    /// Run the draw over every container family with the same seed
    #[arg(long, conflicts_with = "container")]
    all: bool,

    /// Built-in edition to start from
    #[arg(long, value_enum, conflicts_with = "config")]
    preset: Option<Preset>,

    /// JSON draw config to start from
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tickets issued
    #[arg(long, allow_hyphen_values = true)]
    total: Option<i64>,

    /// Tickets sold
    #[arg(long, allow_hyphen_values = true)]
    sold: Option<i64>,

    /// Prize tier, repeatable (e.g. --tier 1:4 --tier 2:3)
    #[arg(long = "tier", value_name = "COUNT:VALUE")]
    tiers: Vec<PrizeTier>,

    /// Random seed for a reproducible draw
    #[arg(short, long)]
    seed: Option<u64>,

    /// Budget mode: winners-only, first-sold
    #[arg(long)]
    selection: Option<SelectionMode>,

    /// Print summary and winners as JSON
    #[arg(long)]
    json: bool,

    /// Write the effective config to this file
    #[arg(long)]
    save_config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Small,
    Classic,
}

/// JSON output of one draw
#[derive(Serialize)]
struct Report {
    summary: DrawSummary,
    winners: Vec<Ticket>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    log::info!(
        "Starting ticket-draw: {} tickets, {} sold, {} tiers",
        config.edition.total_tickets(),
        config.edition.sold_tickets(),
        config.tiers.len()
    );

    if let Some(path) = &cli.save_config {
        config
            .save(path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
    }

    let stdout = io::stdout();
    run(&cli, &config, &mut stdout.lock())
}

/// Run the requested draws and write them to `out`.
///
/// With `--json` the output is a single JSON document: one report, or an
/// array of reports under `--all`.
fn run(cli: &Cli, config: &DrawConfig, out: &mut impl Write) -> Result<()> {
    let kinds: Vec<ContainerKind> = if cli.all {
        ContainerKind::ALL.to_vec()
    } else {
        vec![config.container]
    };

    let mut reports = Vec::new();
    for kind in kinds {
        let mut draw = LotteryDraw::new(config.clone().with_container(kind))?;
        log::info!("Drawing over {kind}, please wait a little bit");

        let outcome = draw.run_any().context("draw failed")?;

        if cli.json {
            reports.push(Report {
                winners: outcome.winners().iter().copied().collect(),
                summary: outcome.summary,
            });
        } else {
            if cli.all {
                writeln!(out, "== {kind} ==")?;
            }
            render_winners(out, outcome.winners())?;
        }
    }

    if cli.json {
        match reports.as_slice() {
            [single] if !cli.all => serde_json::to_writer_pretty(&mut *out, single)?,
            all => serde_json::to_writer_pretty(&mut *out, all)?,
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Layer command-line overrides on top of a file or preset
fn build_config(cli: &Cli) -> Result<DrawConfig> {
    let mut config = match (&cli.config, cli.preset) {
        (Some(path), _) => DrawConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        (None, Some(Preset::Classic)) => DrawConfig::classic(),
        (None, _) => DrawConfig::small(),
    };

    if cli.total.is_some() || cli.sold.is_some() {
        let total = cli.total.unwrap_or(config.edition.total_tickets());
        let sold = cli
            .sold
            .unwrap_or_else(|| config.edition.sold_tickets().min(total));
        config = config.with_edition(Edition::new(total, sold)?);
    }

    if !cli.tiers.is_empty() {
        config = config.with_tiers(cli.tiers.clone());
    }
    if let Some(container) = cli.container {
        config = config.with_container(container);
    }
    if let Some(selection) = cli.selection {
        config = config.with_selection(selection);
    }

    config.seed = cli.seed.or(config.seed);
    // Every family in --all must see the same tickets
    if cli.all && config.seed.is_none() {
        config.seed = Some(rand::random());
    }

    config.validate()?;
    Ok(config)
}

/// One line per winner, in container order
fn render_winners(out: &mut impl Write, winners: &AnyContainer<Ticket>) -> io::Result<()> {
    for ticket in winners.iter() {
        writeln!(
            out,
            "Ticket:{} -- Prize is {} BTC",
            ticket.number(),
            ticket.prize()
        )?;
    }
    Ok(())
}
