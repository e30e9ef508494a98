// Host-side tests for motion constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    assert!(BASE_SPEED_PX_PER_FRAME > 0.0);
    assert!(COAST_DECAY_PER_FRAME > DECAY_MIN && COAST_DECAY_PER_FRAME < DECAY_MAX_EXCLUSIVE);
    assert!(COAST_REST_EPSILON > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_drift_is_not_mistaken_for_rest() {
    // A release at autoscroll speed must still coast.
    assert!(BASE_SPEED_PX_PER_FRAME > COAST_REST_EPSILON);
}

#[test]
fn coasting_from_a_fling_settles_within_a_few_seconds() {
    // 60 px/frame fling at 60 fps
    let mut v = 60.0_f64;
    let mut frames = 0;
    while v.abs() >= COAST_REST_EPSILON {
        v *= COAST_DECAY_PER_FRAME;
        frames += 1;
    }
    assert!(frames < 60 * 5, "took {frames} frames");
}
