use super::constants::{DECAY_MAX_EXCLUSIVE, DECAY_MIN};
use super::motion::MotionParams;

/// Builds motion parameters from the optional `data-speed` / `data-decay`
/// attribute values on the marquee root.
///
/// Missing values keep the defaults. Unparsable or out-of-range values are
/// logged and ignored rather than failing the mount.
pub fn parse_motion_params(speed: Option<&str>, decay: Option<&str>) -> MotionParams {
    let mut params = MotionParams::default();

    if let Some(raw) = speed {
        match parse_finite(raw) {
            Some(v) => params.base_speed = v,
            None => log::warn!("[config] ignoring data-speed={:?}", raw),
        }
    }

    if let Some(raw) = decay {
        match parse_finite(raw) {
            Some(v) if (DECAY_MIN..DECAY_MAX_EXCLUSIVE).contains(&v) => params.decay = v,
            _ => log::warn!("[config] ignoring data-decay={:?} (expected 0 <= d < 1)", raw),
        }
    }

    params
}

#[inline]
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
