//! Crab Beach entry point
//!
//! Native headless host: runs the simulation at a fixed tick count with the
//! autopilot at the controls and reports what happened.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crab_beach::render::build_frame;
use crab_beach::sim::{GameEvent, GameState, TickOutcome, autopilot, tick};
use crab_beach::{AssetBundle, AssetError, Tuning, TuningError};

const USAGE: &str = "usage: crab-beach [--seed N] [--ticks N] [--tuning PATH] [--dump-frame]";

/// One minute of play at the reference tick rate
const DEFAULT_TICKS: u64 = 3600;

#[derive(Debug, Error)]
enum HostError {
    #[error("{0}")]
    Args(String),
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error(transparent)]
    Assets(#[from] AssetError),
    #[error("failed to encode frame")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug)]
struct Options {
    seed: Option<u64>,
    ticks: u64,
    tuning: Option<PathBuf>,
    dump_frame: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, HostError> {
    let mut options = Options {
        seed: None,
        ticks: DEFAULT_TICKS,
        tuning: None,
        dump_frame: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => options.seed = Some(parse_number(&arg, args.next())?),
            "--ticks" => options.ticks = parse_number(&arg, args.next())?,
            "--tuning" => {
                let path = args
                    .next()
                    .ok_or_else(|| HostError::Args("--tuning needs a path".to_string()))?;
                options.tuning = Some(PathBuf::from(path));
            }
            "--dump-frame" => options.dump_frame = true,
            other => return Err(HostError::Args(format!("unknown argument: {other}"))),
        }
    }

    Ok(options)
}

fn parse_number(flag: &str, value: Option<String>) -> Result<u64, HostError> {
    let value = value.ok_or_else(|| HostError::Args(format!("{flag} needs a value")))?;
    value
        .parse()
        .map_err(|_| HostError::Args(format!("{flag} expects a number, got {value}")))
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Default)]
struct Summary {
    ticks: u64,
    restarts: u32,
    best_score: u32,
}

fn run(options: Options) -> Result<(), HostError> {
    let tuning = match &options.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let assets = AssetBundle::from_tuning(&tuning)?;

    let seed = options.seed.unwrap_or_else(time_seed);
    let mut state = GameState::new(&tuning, &assets, seed);
    log::info!("Game initialized with seed: {}", seed);

    let mut summary = Summary::default();
    while summary.ticks < options.ticks {
        let input = autopilot::steer(&state);
        let outcome = tick(&mut state, &input);
        summary.ticks += 1;

        for event in state.drain_events() {
            match event {
                GameEvent::GameOver { score, level } => {
                    summary.best_score = summary.best_score.max(score);
                    log::info!(
                        "Round over at tick {}: score {}, level {}",
                        summary.ticks,
                        score,
                        level
                    );
                }
                GameEvent::Restarted => summary.restarts += 1,
                other => log::trace!("{:?}", other),
            }
        }

        if outcome == TickOutcome::Terminate {
            break;
        }
    }
    summary.best_score = summary.best_score.max(state.score);

    log::info!("Stopped after {} ticks", summary.ticks);
    println!(
        "seed {} | ticks {} | score {} | level {}/{} | birds {} | restarts {} | best {}",
        seed,
        summary.ticks,
        state.score,
        state.level,
        tuning.max_level(),
        state.birds.len(),
        summary.restarts,
        summary.best_score,
    );

    if options.dump_frame {
        println!("{}", serde_json::to_string_pretty(&build_frame(&state))?);
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Crab Beach (native) starting...");

    match parse_args(std::env::args().skip(1)).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {err}");
            if matches!(err, HostError::Args(_)) {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}
