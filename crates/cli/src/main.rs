// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands command line classifier.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand};
use log::error;
use std::process::ExitCode;

pub mod commands;
use commands::{Command, Config};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Classify hands given as cards lists, e.g. "AS KS QS JS TS".
    Rank {
        /// The hands to classify.
        #[clap(required = true)]
        hands: Vec<String>,
    },
    /// Compare the strength of two hands.
    Compare {
        /// The first hand.
        first: String,
        /// The second hand.
        second: String,
    },
    /// Classify all the 5 cards hands and count each category.
    Count,
    /// Classify random 5 cards hands and count each category.
    Sample {
        /// Number of hands to sample.
        #[clap(long, default_value_t = 100_000, value_parser = clap::value_parser!(u64).range(1..))]
        hands: u64,
        /// Seed for a reproducible sample.
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let command = match cli.command {
        CliCommand::Rank { hands } => Command::Rank { hands },
        CliCommand::Compare { first, second } => Command::Compare { first, second },
        CliCommand::Count => Command::Count,
        CliCommand::Sample { hands, seed } => Command::Sample {
            hands: hands as usize,
            seed,
        },
    };

    let config = Config { command };
    if let Err(e) = commands::run(config, &mut std::io::stdout().lock()) {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
