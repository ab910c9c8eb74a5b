//! The `wordseek` binary: telemetry in, puzzles and a run log out.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use wordseek_generator::PuzzleSeed;

use crate::{config::RunConfig, sink::DirectorySink, word_source::FileWordSource};

mod config;
mod run;
mod sink;
mod telemetry;
mod word_source;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Telemetry counts file; omit to assume an empty inventory.
    #[arg(long, value_name = "FILE")]
    telemetry: Option<PathBuf>,

    /// Word bank file with per-theme word/hint entries.
    #[arg(long, value_name = "FILE")]
    word_bank: PathBuf,

    /// Directory generated puzzles are written to.
    #[arg(long, value_name = "DIR", default_value = "puzzles")]
    out: PathBuf,

    /// Where to write the run log.
    #[arg(long, value_name = "FILE", default_value = "generation-log.json")]
    log_file: PathBuf,

    /// Generate even when the inventory checks say not to.
    #[arg(long)]
    force: bool,

    /// Run-wide cap on generated puzzles.
    #[arg(long, value_name = "COUNT")]
    count: Option<usize>,

    /// Generate for a single theme only.
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,

    /// Restrict generation to a level or range, e.g. `7` or `1-5`.
    #[arg(long, value_name = "LEVELS")]
    levels: Option<String>,

    /// Seed for a reproducible run (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = RunConfig::from_env();

    if cli.force {
        config.force = true;
    }
    if let Some(count) = cli.count {
        config.max_puzzles_per_run = count;
    }
    if let Some(theme) = cli.theme.clone() {
        config.themes = vec![theme];
    }
    if let Some(levels) = &cli.levels {
        match levels.parse() {
            Ok(filter) => config.level_filter = Some(filter),
            Err(err) => {
                log::error!("{err}");
                return ExitCode::from(2);
            }
        }
    }

    let seed = cli.seed.unwrap_or_else(PuzzleSeed::random);
    log::info!("run seed: {seed}");
    let mut rng = seed.rng();

    let mut word_source = match FileWordSource::load(&cli.word_bank, Pcg64::from_rng(&mut rng)) {
        Ok(source) => source,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::from(2);
        }
    };
    let mut sink = match DirectorySink::create(&cli.out) {
        Ok(sink) => sink,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::from(2);
        }
    };

    let telemetry = telemetry::load(cli.telemetry.as_deref());
    let report = run::run(&config, &telemetry, &mut word_source, &mut sink, &mut rng);

    if report.skipped {
        log::info!("skipped: {}", report.reason);
    } else {
        log::info!(
            "done: {} generated, {} failed in {:.1}s",
            report.success_count,
            report.error_count,
            report.duration_seconds
        );
    }

    if let Err(err) = run::write_report(&cli.log_file, &report) {
        log::error!("writing run log: {err}");
        return ExitCode::FAILURE;
    }

    if report.error_count > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
