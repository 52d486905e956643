//! Reveal animation driving the chart clip
//!
//! The host owns a [`RevealAnimation`] and advances it from its frame loop
//! with the elapsed wall-clock time. The animation only produces a progress
//! value in `[0, 1]`; it never touches chart geometry.

use core::time::Duration;

use log::debug;

/// Default reveal duration
pub const DEFAULT_REVEAL_DURATION: Duration = Duration::from_millis(3000);

/// Bisection steps used to invert the x-coordinate of a cubic easing curve
const EASING_SOLVER_ITERATIONS: usize = 24;

/// Timing curve applied to the linear time fraction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Progress grows at a constant rate
    #[default]
    Linear,
    /// Quick start, long gentle finish: cubic-bezier(0.4, 0.0, 0.2, 1.0)
    FastOutSlowIn,
    /// Custom cubic-bezier timing curve through (0, 0) and (1, 1)
    CubicBezier {
        /// First control point x
        x1: f32,
        /// First control point y
        y1: f32,
        /// Second control point x
        x2: f32,
        /// Second control point y
        y2: f32,
    },
}

impl Easing {
    /// Map a time fraction in `[0, 1]` to a progress fraction
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };

        match *self {
            Easing::Linear => fraction,
            Easing::FastOutSlowIn => cubic_bezier_easing(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                cubic_bezier_easing(x1, y1, x2, y2, fraction)
            }
        }
    }
}

/// One coordinate of a cubic Bezier anchored at 0 and 1
fn bezier_coordinate(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// Solve x(t) = fraction by bisection, then evaluate y(t)
fn cubic_bezier_easing(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    // Control x values are kept in [0, 1] so x(t) is monotonic
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);

    let mut low = 0.0_f32;
    let mut high = 1.0_f32;
    for _ in 0..EASING_SOLVER_ITERATIONS {
        let mid = (low + high) / 2.0;
        if bezier_coordinate(mid, x1, x2) < fraction {
            low = mid;
        } else {
            high = mid;
        }
    }

    bezier_coordinate((low + high) / 2.0, y1, y2)
}

/// Animation settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Time to go from 0 to 1
    pub duration: Duration,
    /// Timing curve
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_REVEAL_DURATION,
            easing: Easing::Linear,
        }
    }
}

impl AnimationConfig {
    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the timing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Lifecycle of a reveal animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Not started; progress is 0
    Idle,
    /// Advancing with every frame
    Running,
    /// Reached the end; progress is 1
    Finished,
}

/// Progress value ramping from 0 to 1 over a fixed duration
#[derive(Debug, Clone)]
pub struct RevealAnimation {
    config: AnimationConfig,
    elapsed: Duration,
    state: AnimationState,
}

impl RevealAnimation {
    /// Create an idle animation
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            elapsed: Duration::ZERO,
            state: AnimationState::Idle,
        }
    }

    /// Start running from 0
    ///
    /// Has no effect on a running or finished animation.
    pub fn start(&mut self) {
        if self.state == AnimationState::Idle {
            debug!("Reveal animation started ({:?})", self.config.duration);
            self.state = AnimationState::Running;
        }
    }

    /// Rewind to 0 and start again
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = AnimationState::Idle;
        self.start();
    }

    /// Jump straight to the end
    pub fn finish(&mut self) {
        self.elapsed = self.config.duration;
        self.state = AnimationState::Finished;
    }

    /// Change the timing curve without affecting elapsed time
    pub fn set_easing(&mut self, easing: Easing) {
        self.config.easing = easing;
    }

    /// Advance by a frame's worth of time and return the new progress
    ///
    /// Only a running animation moves; once the duration is reached the
    /// animation finishes and stays at 1.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        if self.state == AnimationState::Running {
            self.elapsed = self.elapsed.saturating_add(dt);
            if self.elapsed >= self.config.duration {
                self.elapsed = self.config.duration;
                self.state = AnimationState::Finished;
                debug!("Reveal animation finished");
            }
        }

        self.progress()
    }

    /// Current progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        match self.state {
            AnimationState::Idle => 0.0,
            AnimationState::Finished => 1.0,
            AnimationState::Running => {
                let duration = self.config.duration.as_secs_f32();
                let fraction = if duration > 0.0 {
                    self.elapsed.as_secs_f32() / duration
                } else {
                    1.0
                };
                self.config.easing.transform(fraction)
            }
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Animation settings
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Whether the animation is advancing
    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// Whether the animation has reached the end
    pub fn is_finished(&self) -> bool {
        self.state == AnimationState::Finished
    }
}

impl Default for RevealAnimation {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}
