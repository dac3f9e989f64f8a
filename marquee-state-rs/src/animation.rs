//! Animation clock for scrolling and blinking text.
//!
//! The clock is advanced once per display period. It never touches the
//! display content; renderers sample the current [`AnimationPhase`].

/// Blank gap, in pixels, between the end of a scrolling line and its
/// next repetition.
pub const SCROLL_GAP: i32 = 100;

/// Snapshot of the animation state passed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationPhase {
    /// Horizontal scroll offset in pixels, in `0..canvas_width + SCROLL_GAP`.
    pub scroll_offset: i32,
    /// `false` on the ticks where blinking text is hidden.
    pub blink_on: bool,
}

impl Default for AnimationPhase {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            blink_on: true,
        }
    }
}

/// Advances the [`AnimationPhase`] on every tick.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    phase: AnimationPhase,
    step: i32,
    span: i32,
}

impl AnimationClock {
    /// Create a clock for a canvas `canvas_width` pixels wide that scrolls
    /// `step` pixels per tick.
    pub fn new(canvas_width: u32, step: u32) -> Self {
        Self {
            phase: AnimationPhase::default(),
            step: step as i32,
            span: (canvas_width as i32 + SCROLL_GAP).max(1),
        }
    }

    /// The current phase.
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Advance the scroll offset by one step (modulo `canvas_width + SCROLL_GAP`)
    /// and toggle the blink phase. Returns the new phase.
    pub fn tick(&mut self) -> AnimationPhase {
        self.phase.scroll_offset = (self.phase.scroll_offset + self.step) % self.span;
        self.phase.blink_on = !self.phase.blink_on;
        self.phase
    }
}
