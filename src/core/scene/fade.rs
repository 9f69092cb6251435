//=========================================================================
// Fade State Machine
//=========================================================================
//
// Two-phase fade-to-black used to bridge scene swaps.
//
// States:
// ```text
//            begin_fade_out()           level >= 255
//   Stable ───────────────────► FadingOut ───────────► FadingIn
//     ▲                                                  │
//     └──────────────────── level <= 0 ──────────────────┘
// ```
//
// The level is integrated by `± rate * dt` and clamped to [0, 255] on
// every step, so arbitrarily large frame hitches cannot push it out of
// range. Reaching full black does not carry leftover time into the
// fade-in: the fade-in starts on the next step.
//
//=========================================================================

//=== Constants ===========================================================

/// Fade level at full black (overlay fully opaque).
pub const FADE_MAX: f32 = 255.0;

//=== FadePhase ===========================================================

/// Transition phase of the fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// No transition in flight.
    Stable,

    /// Level rising toward full black.
    FadingOut,

    /// Level falling toward zero.
    FadingIn,
}

//=== FadeEvent ===========================================================

/// Threshold crossed during a single [`Fade::advance`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeEvent {
    /// No threshold crossed.
    None,

    /// Fade-out reached full black; the phase is now `FadingIn`.
    ReachedBlack,

    /// Fade-in reached zero; the phase is now `Stable`.
    Cleared,
}

//=== Fade ================================================================

/// Fade level and phase.
#[derive(Debug, Clone)]
pub struct Fade {
    level: f32,
    rate: f32,
    phase: FadePhase,
}

impl Fade {
    //--- Construction -----------------------------------------------------

    /// Creates a stable fade with the given rate (alpha units per second).
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not a positive finite number.
    pub fn new(rate: f32) -> Self {
        assert!(
            rate.is_finite() && rate > 0.0,
            "Fade rate must be positive, got {}",
            rate
        );
        Self {
            level: 0.0,
            rate,
            phase: FadePhase::Stable,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    pub fn is_stable(&self) -> bool {
        self.phase == FadePhase::Stable
    }

    /// Overlay alpha for the current level: rounded, 0 at rest, 255 at black.
    pub fn overlay_alpha(&self) -> u8 {
        self.level.round().clamp(0.0, FADE_MAX) as u8
    }

    //--- Control ----------------------------------------------------------

    /// Starts fading out.
    ///
    /// Returns `false` (and changes nothing) if a fade is already in flight.
    pub fn begin_fade_out(&mut self) -> bool {
        if self.phase != FadePhase::Stable {
            return false;
        }
        self.phase = FadePhase::FadingOut;
        true
    }

    /// Returns `true` if advancing by `dt` will reach full black.
    ///
    /// The controller uses this to skip the outgoing scene's update on
    /// the tick it is replaced.
    pub fn will_reach_black(&self, dt: f32) -> bool {
        self.phase == FadePhase::FadingOut && self.level + self.rate * sanitize(dt) >= FADE_MAX
    }

    /// Integrates the level by `dt` seconds and applies phase changes.
    pub fn advance(&mut self, dt: f32) -> FadeEvent {
        let step = self.rate * sanitize(dt);

        match self.phase {
            FadePhase::Stable => FadeEvent::None,
            FadePhase::FadingOut => {
                self.level = (self.level + step).min(FADE_MAX);
                if self.level >= FADE_MAX {
                    self.level = FADE_MAX;
                    self.phase = FadePhase::FadingIn;
                    FadeEvent::ReachedBlack
                } else {
                    FadeEvent::None
                }
            }
            FadePhase::FadingIn => {
                self.level = (self.level - step).max(0.0);
                if self.level <= 0.0 {
                    self.level = 0.0;
                    self.phase = FadePhase::Stable;
                    FadeEvent::Cleared
                } else {
                    FadeEvent::None
                }
            }
        }
    }
}

/// Negative and NaN frame times integrate as zero.
fn sanitize(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.max(0.0)
    } else if dt == f32::INFINITY {
        f32::MAX
    } else {
        0.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
