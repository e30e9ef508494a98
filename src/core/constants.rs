// Motion tuning constants for the logo marquee.

// Autoscroll
pub const BASE_SPEED_PX_PER_FRAME: f64 = 0.75; // leftward drift while idle

// Coasting after a drag release
pub const COAST_DECAY_PER_FRAME: f64 = 0.95; // velocity multiplier per frame
pub const COAST_REST_EPSILON: f64 = 0.01; // below this |velocity| the strip is at rest

// Data-attribute overrides must keep decay inside [0, 1) so coasting settles
pub const DECAY_MIN: f64 = 0.0;
pub const DECAY_MAX_EXCLUSIVE: f64 = 1.0;
