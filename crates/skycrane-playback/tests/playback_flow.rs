//! Integration tests: full playback sessions over replay and live sources.
//!
//! Drives the scheduler the way a host frame loop would — repeated
//! `tick(dt)` calls — and asserts the emission and lifecycle contracts:
//! one exact turn per boundary, termination after exactly `N - 1` time
//! units for a replay of length `N`, exactly-once outcome notification,
//! and idempotent stop/release behavior.

use std::sync::Arc;

use skycrane_core::{Control, FPoint, IPoint, Outcome, Span, Turn};
use skycrane_playback::{blend, LiveSource, Phase, Playback, ReplaySource, TickStatus};
use skycrane_replay::{Replay, ReplayRecorder, SurfaceDef};
use skycrane_test_utils::{FixedControl, RecordingListener, RecordingSink, ScriptedSimulation};

// ── Helpers ─────────────────────────────────────────────────────

fn surface() -> SurfaceDef {
    SurfaceDef {
        points: vec![
            IPoint::new(0, 1500),
            IPoint::new(2500, 200),
            IPoint::new(4200, 200),
            IPoint::new(6999, 1900),
        ],
        safe_area: Span { start: 1, end: 3 },
    }
}

/// A replay whose turns are identified by descending fuel.
fn replay_of(len: usize, outcome: Outcome) -> Arc<Replay> {
    let turns = (0..len)
        .map(|i| Turn {
            fuel: 1000 - 10 * i as i32,
            thrust: (i as i32).min(4),
            tilt: ((i as i32) * 10).min(90),
            position: IPoint::new(2500 + 100 * i as i32, 2500 - 200 * i as i32),
            velocity: FPoint::new(1.0, -2.0 * i as f64),
        })
        .collect();
    let replay = Replay {
        case_id: 1,
        gene_id: 1,
        outcome,
        surface: surface(),
        turns,
        state: String::new(),
    };
    replay.validate().unwrap();
    Arc::new(replay)
}

fn scripted_turn(fuel: i32) -> Turn {
    Turn {
        fuel,
        ..Turn::default()
    }
}

fn playback_with(sink: &RecordingSink, listener: &RecordingListener) -> Playback {
    let mut playback = Playback::new(Box::new(sink.clone()));
    playback.set_listener(Box::new(listener.clone()));
    playback
}

/// Run ticks until the session finishes; returns the outcome and the
/// number of ticks it took.
fn run_to_completion(playback: &mut Playback, dt: f64, max_ticks: usize) -> (Outcome, usize) {
    for n in 1..=max_ticks {
        if let TickStatus::Finished(outcome) = playback.tick(dt) {
            return (outcome, n);
        }
    }
    panic!("session did not finish within {max_ticks} ticks");
}

// ── Replay playback ─────────────────────────────────────────────

#[test]
fn replay_of_length_n_stops_after_n_minus_one_units() {
    let sink = RecordingSink::new();
    let listener = RecordingListener::new();
    let mut playback = playback_with(&sink, &listener);

    let replay = replay_of(4, Outcome::Landed);
    playback.start(Box::new(ReplaySource::new(Arc::clone(&replay))));
    assert_eq!(playback.phase(), Phase::Running);
    assert_eq!(playback.duration(), Some(3.0));

    let (outcome, ticks) = run_to_completion(&mut playback, 0.25, 100);
    assert_eq!(outcome, Outcome::Landed);
    // Three one-second windows at 0.25s per tick.
    assert_eq!(ticks, 12);
    assert_eq!(playback.phase(), Phase::Stopped);

    // One exact emission per turn: the initial turn plus each boundary.
    let fuels: Vec<i32> = sink.boundaries().iter().map(|t| t.fuel).collect();
    assert_eq!(fuels, [1000, 990, 980, 970]);
    assert_eq!(sink.last_boundary().unwrap(), replay.turns[3]);

    assert_eq!(listener.resets(), 1);
    assert_eq!(listener.starts(), 1);
    assert_eq!(listener.outcomes(), [Outcome::Landed]);
}

#[test]
fn two_turn_replay_ends_on_its_final_turn() {
    let sink = RecordingSink::new();
    let listener = RecordingListener::new();
    let mut playback = playback_with(&sink, &listener);

    let replay = replay_of(2, Outcome::Landed);
    playback.start(Box::new(ReplaySource::new(Arc::clone(&replay))));

    let (outcome, ticks) = run_to_completion(&mut playback, 0.25, 100);
    assert_eq!(outcome, Outcome::Landed);
    assert_eq!(ticks, 4);
    assert_eq!(sink.last_boundary().unwrap(), replay.turns[1]);
    assert_eq!(listener.outcomes(), [Outcome::Landed]);
}

#[test]
fn single_turn_replay_is_immediately_terminal() {
    let sink = RecordingSink::new();
    let listener = RecordingListener::new();
    let mut playback = playback_with(&sink, &listener);

    let replay = replay_of(1, Outcome::Crashed);
    playback.start(Box::new(ReplaySource::new(replay)));

    assert_eq!(playback.phase(), Phase::Stopped);
    assert_eq!(sink.boundary_count(), 1);
    assert_eq!(listener.outcomes(), [Outcome::Crashed]);

    // A stray tick after completion stays suppressed.
    assert_eq!(playback.tick(0.25), TickStatus::Idle);
    assert_eq!(listener.outcomes(), [Outcome::Crashed]);
}

#[test]
fn blended_frames_interpolate_inside_the_window() {
    let sink = RecordingSink::new();
    let mut playback = Playback::new(Box::new(sink.clone()));

    let replay = replay_of(3, Outcome::Lost);
    playback.start(Box::new(ReplaySource::new(Arc::clone(&replay))));

    // start() emitted blend(t0, t1, 0); the next tick blends at t = 0.5.
    assert_eq!(playback.tick(0.5), TickStatus::Frame);
    let frames = sink.frames();
    assert_eq!(frames[0], blend(&replay.turns[0], &replay.turns[1], 0.0));
    assert_eq!(frames[1], blend(&replay.turns[0], &replay.turns[1], 0.5));
}

#[test]
fn frame_hitch_catches_up_without_emitting_skipped_turns() {
    let sink = RecordingSink::new();
    let listener = RecordingListener::new();
    let mut playback = playback_with(&sink, &listener);

    let replay = replay_of(5, Outcome::Landed);
    playback.start(Box::new(ReplaySource::new(Arc::clone(&replay))));

    // One giant frame: 2.5 windows elapse at once.
    assert_eq!(playback.tick(2.5), TickStatus::Boundary);
    // Only the first boundary of the hitch is emitted; turn 2 is stepped
    // through silently.
    let fuels: Vec<i32> = sink.boundaries().iter().map(|t| t.fuel).collect();
    assert_eq!(fuels, [1000, 990]);

    assert_eq!(playback.tick(0.5), TickStatus::Boundary);
    let (outcome, _) = run_to_completion(&mut playback, 1.0, 10);
    assert_eq!(outcome, Outcome::Landed);

    // 2.5 + 0.5 + 1.0 = 4 windows = the replay's full duration.
    let fuels: Vec<i32> = sink.boundaries().iter().map(|t| t.fuel).collect();
    assert_eq!(fuels, [1000, 990, 970, 960]);
    assert_eq!(listener.outcomes(), [Outcome::Landed]);
}

#[test]
fn seek_repositions_inside_the_replay() {
    let sink = RecordingSink::new();
    let mut playback = Playback::new(Box::new(sink.clone()));

    let replay = replay_of(5, Outcome::Landed);
    playback.start(Box::new(ReplaySource::new(Arc::clone(&replay))));

    assert!(playback.seek(2.5));
    let last = *sink.frames().last().unwrap();
    assert_eq!(last, blend(&replay.turns[2], &replay.turns[3], 0.5));

    // Half a window to the next boundary.
    assert_eq!(playback.tick(0.5), TickStatus::Boundary);
    assert_eq!(sink.last_boundary().unwrap(), replay.turns[3]);
}

#[test]
fn seek_to_the_end_completes_the_session() {
    let sink = RecordingSink::new();
    let listener = RecordingListener::new();
    let mut playback = playback_with(&sink, &listener);

    let replay = replay_of(5, Outcome::Crashed);
    playback.start(Box::new(ReplaySource::new(Arc::clone(&replay))));

    assert!(playback.seek(99.0));
    assert_eq!(playback.phase(), Phase::Stopped);
    assert_eq!(sink.last_boundary().unwrap(), replay.turns[4]);
    assert_eq!(listener.outcomes(), [Outcome::Crashed]);

    // Seeking a stopped session is refused.
    assert!(!playback.seek(1.0));
}

// ── Live playback ───────────────────────────────────────────────

#[test]
fn live_session_warms_up_then_advances_each_window() {
    let sink = RecordingSink::new();
    let listener = RecordingListener::new();
    let mut playback = playback_with(&sink, &listener);

    let sim = ScriptedSimulation::new(
        scripted_turn(100),
        vec![
            (scripted_turn(95), Outcome::Aerial),
            (scripted_turn(90), Outcome::Aerial),
            (scripted_turn(85), Outcome::Aerial),
            (scripted_turn(80), Outcome::Landed),
        ],
    );
    let probe = sim.probe();
    let control = FixedControl(Control { thrust: 2, tilt: -10 });
    playback.start(Box::new(LiveSource::new(Box::new(sim), Box::new(control))));

    // Warm-up second: armed, initial turn shown, no stepping yet.
    assert_eq!(playback.phase(), Phase::Armed);
    assert_eq!(sink.boundary_count(), 1);
    assert_eq!(playback.tick(0.4), TickStatus::Warmup);
    assert_eq!(playback.tick(0.4), TickStatus::Warmup);
    assert_eq!(probe.steps(), 0);
    assert_eq!(listener.starts(), 0);

    // Warm-up expires: the first advance happens.
    assert_eq!(playback.tick(0.4), TickStatus::Frame);
    assert_eq!(playback.phase(), Phase::Running);
    assert_eq!(probe.steps(), 1);
    assert_eq!(listener.starts(), 1);

    let (outcome, _) = run_to_completion(&mut playback, 0.25, 100);
    assert_eq!(outcome, Outcome::Landed);

    // Three in-progress advances plus the terminating one, then silence.
    assert_eq!(probe.steps(), 4);
    assert!(probe.dropped(), "live resource must be released on finish");
    playback.tick(0.25);
    assert_eq!(probe.steps(), 4);

    // The terminal state is never interpolated into; the last exact turn
    // is the final in-progress one.
    assert_eq!(sink.last_boundary().unwrap().fuel, 85);
    assert_eq!(listener.outcomes(), [Outcome::Landed]);
}

#[test]
fn control_output_is_read_at_each_advance() {
    let sink = RecordingSink::new();
    let mut playback = Playback::new(Box::new(sink.clone()));

    let sim = ScriptedSimulation::new(
        scripted_turn(50),
        vec![
            (scripted_turn(45), Outcome::Aerial),
            (scripted_turn(40), Outcome::Crashed),
        ],
    );
    let probe = sim.probe();
    let control = Control { thrust: 4, tilt: 15 };
    playback.start(Box::new(LiveSource::new(
        Box::new(sim),
        Box::new(FixedControl(control)),
    )));

    playback.tick(1.0); // warm-up expiry, first advance
    run_to_completion(&mut playback, 0.5, 20);

    assert_eq!(probe.controls(), vec![control; 2]);
}

#[test]
fn stop_is_idempotent_and_releases_the_live_resource() {
    let sink = RecordingSink::new();
    let listener = RecordingListener::new();
    let mut playback = playback_with(&sink, &listener);

    let sim = ScriptedSimulation::new(
        scripted_turn(100),
        vec![(scripted_turn(95), Outcome::Aerial)],
    );
    let probe = sim.probe();
    playback.start(Box::new(LiveSource::new(
        Box::new(sim),
        Box::new(FixedControl::default()),
    )));

    playback.stop();
    assert!(probe.dropped(), "stop must release the session resource");
    assert_eq!(playback.phase(), Phase::Stopped);

    // Stopping again is a no-op, and no outcome is ever reported.
    playback.stop();
    assert!(listener.outcomes().is_empty());
    assert_eq!(playback.tick(0.25), TickStatus::Idle);
}

#[test]
fn restart_while_running_stops_the_previous_session_first() {
    let sink = RecordingSink::new();
    let listener = RecordingListener::new();
    let mut playback = playback_with(&sink, &listener);

    let sim = ScriptedSimulation::new(
        scripted_turn(100),
        vec![(scripted_turn(95), Outcome::Aerial)],
    );
    let probe = sim.probe();
    playback.start(Box::new(LiveSource::new(
        Box::new(sim),
        Box::new(FixedControl::default()),
    )));
    assert!(playback.is_playing());

    // Re-arming against a replay releases the live session on the way in.
    playback.start(Box::new(ReplaySource::new(replay_of(2, Outcome::Landed))));
    assert!(probe.dropped());
    assert_eq!(listener.resets(), 2);

    let (outcome, _) = run_to_completion(&mut playback, 0.25, 20);
    assert_eq!(outcome, Outcome::Landed);
    assert_eq!(listener.outcomes(), [Outcome::Landed]);
}

// ── Combined: record a live run, replay it ──────────────────────

#[test]
fn recorded_live_run_replays_identically() {
    let live_sink = RecordingSink::new();
    let mut playback = Playback::new(Box::new(live_sink.clone()));

    let script: Vec<(Turn, Outcome)> = (1..=3)
        .map(|i| {
            (
                Turn {
                    fuel: 100 - 5 * i,
                    thrust: i,
                    tilt: -5 * i,
                    position: IPoint::new(2500 + 10 * i, 2500 - 100 * i),
                    velocity: FPoint::new(0.5, -3.0 * f64::from(i)),
                },
                if i == 3 {
                    Outcome::Landed
                } else {
                    Outcome::Aerial
                },
            )
        })
        .collect();
    let sim = ScriptedSimulation::new(
        Turn {
            fuel: 100,
            position: IPoint::new(2500, 2500),
            ..Turn::default()
        },
        script,
    );
    playback.start(Box::new(LiveSource::new(
        Box::new(sim),
        Box::new(FixedControl::default()),
    )));
    playback.tick(1.0); // warm-up
    let (outcome, _) = run_to_completion(&mut playback, 0.5, 50);
    assert_eq!(outcome, Outcome::Landed);

    // Package the emitted exact turns as a replay.
    let exacts = live_sink.boundaries();
    let mut recorder = ReplayRecorder::new(surface(), "seed".into());
    recorder.reset(exacts[0]);
    for turn in &exacts[1..] {
        recorder.push(*turn);
    }
    let recorded = Arc::new(recorder.finish(1, 1, outcome));
    recorded.validate().unwrap();

    // Replaying the recording emits the same exact turn sequence.
    let replay_sink = RecordingSink::new();
    let mut viewer = Playback::new(Box::new(replay_sink.clone()));
    viewer.start(Box::new(ReplaySource::new(recorded)));
    let (replayed_outcome, _) = run_to_completion(&mut viewer, 0.5, 50);

    assert_eq!(replayed_outcome, Outcome::Landed);
    assert_eq!(replay_sink.boundaries(), exacts);
}
