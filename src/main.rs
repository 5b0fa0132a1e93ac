//! Headless demo runner.
//!
//! Plays a scripted match between two archetypes and logs the events,
//! ending with a JSON snapshot of the final state. Useful for smoke
//! testing the simulation and for eyeballing balance changes without a
//! frontend.

use anyhow::Result;
use tracing::{info, Level};

use stage_brawl::core::DeterministicRng;
use stage_brawl::game::{tick, InputFrame, MatchConfig, MatchState, Stage};
use stage_brawl::Archetype;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let mut args = std::env::args().skip(1);
    let left = Archetype::from_name(&args.next().unwrap_or_else(|| "warrior".into()))?;
    let right = Archetype::from_name(&args.next().unwrap_or_else(|| "duelist".into()))?;
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 2024,
    };

    let config = MatchConfig::default();
    config.validate()?;

    let stage = Stage::battlefield(config.stage_width, config.stage_height);
    let mut state = MatchState::new(seed, [left, right], stage);
    info!(left = left.name(), right = right.name(), seed, "match start");

    // Script both fighters from the match RNG seed: walk toward each
    // other, mash attacks, jump now and then.
    let mut script = DeterministicRng::new(seed ^ 0xD1CE);
    let max_ticks = 60 * 120; // two minutes of simulated time

    for _ in 0..max_ticks {
        let inputs = [scripted_input(&mut script, true), scripted_input(&mut script, false)];
        let result = tick(&mut state, &inputs, &config);

        for event in &result.events {
            info!(tick = event.tick, event = ?event.data, "event");
        }
        if result.match_ended {
            break;
        }
    }

    match state.status {
        stage_brawl::MatchStatus::Winner(winner) => {
            info!(winner = winner.0, tick = state.tick, "winner decided")
        }
        stage_brawl::MatchStatus::Ongoing => info!(tick = state.tick, "time out, no winner"),
    }

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

/// Roll a plausible input frame: mostly walking inward, occasional jump,
/// frequent attack presses.
fn scripted_input(rng: &mut DeterministicRng, leftward_player: bool) -> InputFrame {
    let mut frame = InputFrame::new();

    let roll = rng.next_int(100);
    if roll < 60 {
        frame.set(
            if leftward_player {
                InputFrame::RIGHT
            } else {
                InputFrame::LEFT
            },
            true,
        );
    } else if roll < 70 {
        frame.set(
            if leftward_player {
                InputFrame::LEFT
            } else {
                InputFrame::RIGHT
            },
            true,
        );
    }

    if rng.next_int(100) < 5 {
        frame.set(InputFrame::JUMP, true);
    }
    match rng.next_int(100) {
        0..=14 => frame.set(InputFrame::PRIMARY, true),
        15..=22 => frame.set(InputFrame::SECONDARY, true),
        23..=27 => frame.set(InputFrame::SPECIAL, true),
        _ => {}
    }

    frame
}
