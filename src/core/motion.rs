use super::constants::{BASE_SPEED_PX_PER_FRAME, COAST_DECAY_PER_FRAME, COAST_REST_EPSILON};

/// Tunable motion parameters for one marquee instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Pixels the strip drifts left per frame while auto-scrolling.
    pub base_speed: f64,
    /// Multiplier applied to the carried velocity on every coasting frame.
    pub decay: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED_PX_PER_FRAME,
            decay: COAST_DECAY_PER_FRAME,
        }
    }
}

/// Which term moves the offset on the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionState {
    AutoScrolling,
    Paused,
    Dragging { last_x: f64 },
    Coasting,
}

/// Input recorded by event handlers and consumed by [`MarqueeMotion::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    PointerDown { x: f64 },
    PointerMove { x: f64 },
    PointerUp,
    HoverEnter,
    HoverLeave,
    Resize { width: f64 },
}

/// Offset/velocity state machine behind the infinite logo strip.
///
/// The strip is rendered twice in a row, so an offset anywhere in
/// `(-track_width, 0]` looks identical to the same offset shifted by one
/// track width. Once the width is known every frame folds the offset back into
/// that range.
#[derive(Clone, Debug)]
pub struct MarqueeMotion {
    params: MotionParams,
    state: MotionState,
    hovered: bool,
    offset: f64,
    velocity: f64,
    track_width: Option<f64>,
    pending: Vec<Intent>,
}

impl Default for MarqueeMotion {
    fn default() -> Self {
        Self::new(MotionParams::default())
    }
}

impl MarqueeMotion {
    pub fn new(params: MotionParams) -> Self {
        Self {
            params,
            state: MotionState::AutoScrolling,
            hovered: false,
            offset: 0.0,
            velocity: 0.0,
            track_width: None,
            pending: Vec::new(),
        }
    }

    #[inline]
    pub fn params(&self) -> MotionParams {
        self.params
    }

    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn track_width(&self) -> Option<f64> {
        self.track_width
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, MotionState::Dragging { .. })
    }

    /// Intents waiting for the next [`step`](Self::step).
    #[inline]
    pub fn pending(&self) -> &[Intent] {
        &self.pending
    }

    pub fn enqueue(&mut self, intent: Intent) {
        self.pending.push(intent);
    }

    /// Stores a new width for one (non-doubled) item set.
    ///
    /// Zero, negative or non-finite widths mean "not laid out yet" and
    /// suspend wraparound. A changed width folds the offset fully into the new
    /// range; remeasuring the same width leaves the offset untouched.
    pub fn set_track_width(&mut self, width: f64) {
        let width = (width.is_finite() && width > 0.0).then_some(width);
        if width != self.track_width {
            self.track_width = width;
            self.fold_into_range();
        }
    }

    /// Places the strip at `offset`, folded into range when the width is known.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.fold_into_range();
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::PointerDown { x } => {
                self.velocity = 0.0;
                self.state = MotionState::Dragging { last_x: x };
            }
            Intent::PointerMove { x } => {
                if let MotionState::Dragging { last_x } = &mut self.state {
                    let delta = x - *last_x;
                    *last_x = x;
                    self.offset += delta;
                    self.velocity = delta;
                    self.normalize();
                }
            }
            Intent::PointerUp => {
                if self.is_dragging() {
                    if self.velocity.abs() >= COAST_REST_EPSILON {
                        self.state = MotionState::Coasting;
                    } else {
                        self.velocity = 0.0;
                        self.state = self.resting_state();
                    }
                }
            }
            Intent::HoverEnter => {
                self.hovered = true;
                if self.state == MotionState::AutoScrolling {
                    self.state = MotionState::Paused;
                }
            }
            Intent::HoverLeave => {
                self.hovered = false;
                if self.state == MotionState::Paused {
                    self.state = MotionState::AutoScrolling;
                }
            }
            Intent::Resize { width } => self.set_track_width(width),
        }
    }

    /// One animation frame: drain queued intents in arrival order, advance,
    /// then fold the offset back into range.
    pub fn step(&mut self) {
        for intent in std::mem::take(&mut self.pending) {
            self.apply(intent);
        }
        self.advance();
        self.normalize();
    }

    /// Moves the strip by one frame. A coasting strip whose velocity falls
    /// below `COAST_REST_EPSILON` snaps to zero velocity and rests.
    fn advance(&mut self) {
        match self.state {
            MotionState::Dragging { .. } | MotionState::Paused => {}
            MotionState::AutoScrolling => self.offset -= self.params.base_speed,
            MotionState::Coasting => {
                self.offset += self.velocity;
                self.velocity *= self.params.decay;
                if self.velocity.abs() < COAST_REST_EPSILON {
                    self.velocity = 0.0;
                    self.state = self.resting_state();
                }
            }
        }
    }

    // Single-step fold: per-frame movement is assumed smaller than one track.
    fn normalize(&mut self) {
        let Some(width) = self.track_width else {
            return;
        };
        if self.offset <= -width {
            self.offset += width;
        } else if self.offset > 0.0 {
            self.offset -= width;
        }
    }

    // Full fold for width changes, where the offset may sit several tracks out.
    fn fold_into_range(&mut self) {
        let Some(width) = self.track_width else {
            return;
        };
        let folded = -(-self.offset).rem_euclid(width);
        // Negated zero is -0.0, and rem_euclid may round up to exactly `width`.
        self.offset = if folded == 0.0 || folded <= -width {
            0.0
        } else {
            folded
        };
    }

    fn resting_state(&self) -> MotionState {
        if self.hovered {
            MotionState::Paused
        } else {
            MotionState::AutoScrolling
        }
    }
}
