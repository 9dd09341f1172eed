//! Skycrane replay viewer — play a recorded flight in the terminal.
//!
//! Demonstrates:
//!   1. Loading and validating a replay JSON file
//!   2. Driving the playback scheduler at a fixed 60 Hz frame rate
//!   3. Observing exact turns and the terminal outcome through a FrameSink
//!
//! Run with:
//!   cargo run --example replay_viewer -- path/to/replay.json

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use skycrane_core::{FrameSink, Turn};
use skycrane_playback::{Playback, ReplaySource, TickStatus};
use skycrane_replay::Replay;

const FRAME_DT: f64 = 1.0 / 60.0;

/// Prints each exact turn; blended frames go to the trace log.
struct ConsoleSink;

impl FrameSink for ConsoleSink {
    fn frame(&mut self, turn: &Turn) {
        log::trace!(
            "frame: pos={} vel=({:.2}, {:.2}) tilt={}",
            turn.position,
            turn.velocity.x,
            turn.velocity.y,
            turn.tilt
        );
    }

    fn boundary(&mut self, turn: &Turn) {
        println!(
            "turn: fuel={:4}  thrust={}  tilt={:+3}  pos={}  vel=({:+7.2}, {:+7.2})",
            turn.fuel, turn.thrust, turn.tilt, turn.position, turn.velocity.x, turn.velocity.y
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let arg = std::env::args()
        .nth(1)
        .ok_or("usage: replay_viewer <replay.json>")?;
    let replay = Arc::new(Replay::from_path(Path::new(&arg))?);

    println!(
        "case {} (gene {}): {} turns over {} surface points",
        replay.case_id,
        replay.gene_id,
        replay.turn_count(),
        replay.surface.points.len()
    );

    let mut playback = Playback::new(Box::new(ConsoleSink));
    playback.start(Box::new(ReplaySource::new(replay)));

    loop {
        match playback.tick(FRAME_DT) {
            TickStatus::Finished(outcome) => {
                println!("outcome: {outcome}");
                break;
            }
            TickStatus::Idle => break,
            _ => {}
        }
    }

    Ok(())
}
