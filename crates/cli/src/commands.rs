// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command line commands.
use anyhow::{Context, Result};
use log::{debug, info};
use rand::prelude::*;
use std::{cmp::Ordering, io::Write, time::Instant};

use pokerhands_eval::{Category, Deck, HandRank, classify, parse_cards};

/// The hand size for the count and sample commands.
const HAND_SIZE: usize = 5;

/// The command to run.
#[derive(Debug)]
pub enum Command {
    /// Classify each hand.
    Rank {
        /// The hands cards lists.
        hands: Vec<String>,
    },
    /// Compare two hands.
    Compare {
        /// The first hand cards list.
        first: String,
        /// The second hand cards list.
        second: String,
    },
    /// Count categories for all hands.
    Count,
    /// Count categories for random hands.
    Sample {
        /// The number of hands.
        hands: usize,
        /// Optional random seed.
        seed: Option<u64>,
    },
}

/// Command line config.
#[derive(Debug)]
pub struct Config {
    /// The command to run.
    pub command: Command,
}

/// Runs the configured command writing results to `out`.
pub fn run<W: Write>(config: Config, out: &mut W) -> Result<()> {
    match config.command {
        Command::Rank { hands } => rank(out, &hands),
        Command::Compare { first, second } => compare(out, &first, &second),
        Command::Count => count(out),
        Command::Sample { hands, seed } => sample(out, hands, seed),
    }
}

/// Parses and classifies a hand.
fn classify_hand(hand: &str) -> Result<HandRank> {
    let cards = parse_cards(hand).with_context(|| format!("Invalid hand '{hand}'"))?;
    let rank = classify(&cards);
    debug!("Classified {hand} as {rank:?}");
    Ok(rank)
}

fn rank<W: Write>(out: &mut W, hands: &[String]) -> Result<()> {
    for hand in hands {
        let rank = classify_hand(hand)?;
        writeln!(out, "{hand}: {rank}")?;
    }

    Ok(())
}

fn compare<W: Write>(out: &mut W, first: &str, second: &str) -> Result<()> {
    let r1 = classify_hand(first)?;
    let r2 = classify_hand(second)?;

    let ordering = r1
        .try_cmp(&r2)
        .with_context(|| format!("Cannot compare '{first}' with '{second}'"))?;

    match ordering {
        Ordering::Greater => writeln!(out, "{first} wins: {r1} beats {r2}")?,
        Ordering::Less => writeln!(out, "{second} wins: {r2} beats {r1}")?,
        Ordering::Equal => writeln!(out, "Tie: {r1} ties {r2}")?,
    }

    Ok(())
}

/// Counts hands by category strength.
#[derive(Debug, Default)]
struct Counts([usize; Category::RANKABLE.len()]);

impl Counts {
    fn add(&mut self, rank: &HandRank) {
        if let Some(ordinal) = rank.category().ordinal() {
            self.0[ordinal as usize] += 1;
        }
    }

    fn total(&self) -> usize {
        self.0.iter().sum()
    }

    fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Total hands      {}", self.total())?;

        // Strongest first.
        for (category, count) in Category::RANKABLE.iter().zip(self.0).rev() {
            writeln!(out, "{:<17}{count}", format!("{category}:"))?;
        }

        Ok(())
    }
}

fn count<W: Write>(out: &mut W) -> Result<()> {
    info!("Classifying all {HAND_SIZE} cards hands...");

    let now = Instant::now();
    let mut counts = Counts::default();
    Deck::default().for_each(HAND_SIZE, |hand| counts.add(&classify(hand)));

    let elapsed = now.elapsed().as_secs_f64();
    info!(
        "Classified {} hands in {elapsed:.3}s ({:.0} hands/sec)",
        counts.total(),
        counts.total() as f64 / elapsed
    );

    counts.write(out)
}

fn sample<W: Write>(out: &mut W, hands: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    info!("Classifying {hands} random hands...");

    let mut counts = Counts::default();
    Deck::default().sample(hands, HAND_SIZE, &mut rng, |hand| {
        counts.add(&classify(hand))
    });

    counts.write(out)
}
