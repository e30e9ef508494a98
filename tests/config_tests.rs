// Host-side tests for data-attribute motion overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod config {
    include!("../src/core/config.rs");
}

use config::parse_motion_params;
use constants::*;
use motion::MotionParams;

#[test]
fn missing_attributes_keep_defaults() {
    let p = parse_motion_params(None, None);
    assert_eq!(p, MotionParams::default());
    assert_eq!(p.base_speed, BASE_SPEED_PX_PER_FRAME);
    assert_eq!(p.decay, COAST_DECAY_PER_FRAME);
}

#[test]
fn valid_overrides_apply() {
    let p = parse_motion_params(Some(" 1.25 "), Some("0.9"));
    assert_eq!(p.base_speed, 1.25);
    assert_eq!(p.decay, 0.9);
}

#[test]
fn negative_speed_scrolls_the_other_way() {
    let p = parse_motion_params(Some("-0.5"), None);
    assert_eq!(p.base_speed, -0.5);
}

#[test]
fn garbage_values_are_ignored() {
    let p = parse_motion_params(Some("fast"), Some("slow"));
    assert_eq!(p, MotionParams::default());

    let p = parse_motion_params(Some("NaN"), Some("inf"));
    assert_eq!(p, MotionParams::default());
}

#[test]
fn decay_must_let_coasting_settle() {
    assert_eq!(
        parse_motion_params(None, Some("1.0")).decay,
        COAST_DECAY_PER_FRAME
    );
    assert_eq!(
        parse_motion_params(None, Some("1.5")).decay,
        COAST_DECAY_PER_FRAME
    );
    assert_eq!(
        parse_motion_params(None, Some("-0.1")).decay,
        COAST_DECAY_PER_FRAME
    );
    assert_eq!(parse_motion_params(None, Some("0")).decay, 0.0);
}

#[test]
fn one_bad_value_does_not_discard_the_other() {
    let p = parse_motion_params(Some("2"), Some("oops"));
    assert_eq!(p.base_speed, 2.0);
    assert_eq!(p.decay, COAST_DECAY_PER_FRAME);
}
