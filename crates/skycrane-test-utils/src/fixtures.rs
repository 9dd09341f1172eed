//! Deterministic replay fixtures.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use skycrane_core::constants::{
    FUEL_AMOUNT_MAX, MARS_GRAVITY_ACC, THRUST_POWER_MAX, TILT_ANGLE_MAX, TILT_DELTA_ABS,
    ZONE_HEIGHT, ZONE_WIDTH,
};
use skycrane_core::{FPoint, IPoint, Outcome, Span, Turn};
use skycrane_replay::{Replay, SurfaceDef};

/// A tiny hand-built descent: four turns straight down onto the safe
/// segment, outcome `Landed`.
pub fn hop_replay() -> Replay {
    let surface = SurfaceDef {
        points: vec![
            IPoint::new(0, 1800),
            IPoint::new(2000, 150),
            IPoint::new(3600, 150),
            IPoint::new(6999, 2400),
        ],
        safe_area: Span { start: 1, end: 3 },
    };

    let mut turns = Vec::new();
    for (i, y) in [2600, 2300, 2000, 1700].into_iter().enumerate() {
        turns.push(Turn {
            fuel: 900 - 40 * i as i32,
            thrust: (i as i32).min(THRUST_POWER_MAX),
            tilt: 0,
            position: IPoint::new(2800, y),
            velocity: FPoint::new(0.0, -30.0),
        });
    }

    let replay = Replay {
        case_id: 101,
        gene_id: 7,
        outcome: Outcome::Landed,
        surface,
        turns,
        state: "c2t5Y3JhbmU=".into(),
    };
    debug_assert!(replay.validate().is_ok());
    replay
}

/// A pseudo-random but structurally valid replay.
///
/// Deterministic for a given `seed`: the same seed always yields the same
/// surface and turn sequence. `turns` must be at least 1.
pub fn random_replay(seed: u64, turns: usize) -> Replay {
    assert!(turns >= 1, "a replay needs at least one turn");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // Jagged surface with one flat safe segment.
    let segments = 8;
    let safe_start = rng.random_range(1..segments - 2);
    let mut points = Vec::with_capacity(segments + 1);
    let mut safe_height = 0;
    for i in 0..=segments {
        let x = (i as i32 * (ZONE_WIDTH - 1)) / segments as i32;
        let y = if i == safe_start + 1 {
            // Repeat the previous height to flatten the safe segment.
            safe_height
        } else {
            rng.random_range(100..ZONE_HEIGHT / 2)
        };
        if i == safe_start {
            safe_height = y;
        }
        points.push(IPoint::new(x, y));
    }
    let surface = SurfaceDef {
        points,
        safe_area: Span {
            start: safe_start,
            end: safe_start + 2,
        },
    };

    // Descent: a drifting random walk inside the control limits.
    let mut sequence = Vec::with_capacity(turns);
    let mut fuel = rng.random_range(FUEL_AMOUNT_MAX / 2..=FUEL_AMOUNT_MAX);
    let mut thrust = 0;
    let mut tilt: i32 = 0;
    let mut position = FPoint::new(
        f64::from(rng.random_range(500..ZONE_WIDTH - 500)),
        f64::from(rng.random_range(2 * ZONE_HEIGHT / 3..ZONE_HEIGHT - 100)),
    );
    let mut velocity = FPoint::new(rng.random_range(-20.0..20.0), 0.0);

    for _ in 0..turns {
        sequence.push(Turn {
            fuel,
            thrust,
            tilt,
            position: position.round_to_i(),
            velocity,
        });

        thrust = (thrust + rng.random_range(-1..=1)).clamp(0, THRUST_POWER_MAX);
        tilt = (tilt + rng.random_range(-TILT_DELTA_ABS..=TILT_DELTA_ABS))
            .clamp(-TILT_ANGLE_MAX, TILT_ANGLE_MAX);
        fuel = (fuel - thrust).max(0);
        velocity.y += f64::from(thrust) + MARS_GRAVITY_ACC;
        velocity.x += f64::from(tilt) * 0.05;
        position = FPoint::new(
            (position.x + velocity.x).clamp(0.0, f64::from(ZONE_WIDTH - 1)),
            (position.y + velocity.y).clamp(0.0, f64::from(ZONE_HEIGHT - 1)),
        );
    }

    let outcome = match rng.random_range(0..3) {
        0 => Outcome::Landed,
        1 => Outcome::Crashed,
        _ => Outcome::Lost,
    };

    let replay = Replay {
        case_id: rng.random_range(1..10_000),
        gene_id: rng.random_range(1..10_000),
        outcome,
        surface,
        turns: sequence,
        state: String::new(),
    };
    debug_assert!(replay.validate().is_ok());
    replay
}
