//! Spike Dash headless runner
//!
//! Plays the levels with the autopilot at a fixed tick rate and records the
//! result on the high score board. Useful for balancing tuning files.

use std::time::{SystemTime, UNIX_EPOCH};

use spike_dash::sim::{GameEvent, GamePhase, LevelTemplate, builtin_levels};
use spike_dash::{Difficulty, HighScores, Simulation, Tuning};

const USAGE: &str = "usage: spike-dash [--ticks N] [--tuning PATH] [--levels PATH] \
                     [--difficulty easy|normal|hard] [--scores PATH]";

struct Args {
    ticks: u32,
    tuning: Option<String>,
    levels: Option<String>,
    difficulty: Difficulty,
    scores: String,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        ticks: 3600,
        tuning: None,
        levels: None,
        difficulty: Difficulty::Normal,
        scores: "spike-dash-scores.json".to_string(),
    };

    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().ok_or_else(|| format!("{} needs a value", flag));
        match flag.as_str() {
            "--ticks" => {
                let v = value()?;
                args.ticks = v.parse().map_err(|_| format!("bad tick count: {}", v))?;
            }
            "--tuning" => args.tuning = Some(value()?),
            "--levels" => args.levels = Some(value()?),
            "--difficulty" => {
                let v = value()?;
                args.difficulty =
                    Difficulty::from_str(&v).ok_or_else(|| format!("unknown difficulty: {}", v))?;
            }
            "--scores" => args.scores = value()?,
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument: {}\n{}", other, USAGE)),
        }
    }
    Ok(args)
}

fn load_levels(path: Option<&str>, tuning: &Tuning) -> Vec<LevelTemplate> {
    let Some(path) = path else {
        return builtin_levels(tuning);
    };
    match std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| LevelTemplate::list_from_json(&json).map_err(|e| e.to_string()))
    {
        Ok(levels) => {
            log::info!("Loaded {} levels from {}", levels.len(), path);
            levels
        }
        Err(e) => {
            log::warn!("Could not load levels from {} ({}), using built-in levels", path, e);
            builtin_levels(tuning)
        }
    }
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(2);
        }
    };

    let mut tuning = match &args.tuning {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    tuning.apply_difficulty(args.difficulty);
    log::info!("Spike Dash starting ({} difficulty)", args.difficulty.as_str());

    let levels = load_levels(args.levels.as_deref(), &tuning);
    let mut sim = Simulation::new(tuning, levels);
    sim.set_autopilot(true);

    let mut ticks_run = 0;
    for _ in 0..args.ticks {
        sim.update(1);
        ticks_run += 1;

        for event in sim.drain_events() {
            match event {
                GameEvent::Died { at_x, respawn_x } => {
                    log::info!("Died at x={:.0}, back to x={:.0}", at_x, respawn_x)
                }
                GameEvent::CheckpointReached { x } => log::info!("Checkpoint x={:.0}", x),
                GameEvent::LevelCleared { index } => log::info!("Level {} cleared", index + 1),
                other => log::debug!("{:?}", other),
            }
        }

        if sim.state().phase == GamePhase::AllLevelsCleared {
            break;
        }
    }

    let state = sim.state();
    println!(
        "ticks={} score={} level={} deaths={} finished={}",
        ticks_run,
        state.score,
        state.level_index + 1,
        state.deaths,
        state.phase == GamePhase::AllLevelsCleared
    );

    let mut scores = HighScores::load(&args.scores);
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    if let Some(rank) = scores.add_score(state.score, state.level_index, state.deaths, timestamp) {
        println!("New high score! Rank #{} (best: {})", rank, scores.best());
        if let Err(e) = scores.save(&args.scores) {
            log::warn!("Could not save high scores: {}", e);
        }
    }
}
