//! Display geometry and timing.
//!
//! [`DisplayConfig`] is the single source of panel geometry and animation
//! timing. Render regions are derived from it per frame and never stored.

use embedded_graphics::{prelude::*, primitives::Rectangle};
use marquee::animation::AnimationClock;

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for the panel layout and the display loop.
///
/// [`DisplayConfig::default()`] matches a 128×64 two-tone SSD1306 whose top
/// 16 rows are yellow and the rest blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Animation tick period in milliseconds. Default: 200.
    pub animation_period_ms: u64,
    /// Pixels the scroll offset advances per tick. Default: 4.
    pub scroll_step: u32,

    // ── Layout geometry ──────────────────────────────────────────────
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 64.
    pub display_height: u32,
    /// Height of the title region at the top in dual-colour mode.
    /// Default: 16.
    pub title_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animation_period_ms: 200,
            scroll_step: 4,
            display_width: 128,
            display_height: 64,
            title_height: 16,
        }
    }
}

impl DisplayConfig {
    /// The whole panel, used for single-region text.
    pub fn full_region(&self) -> Rectangle {
        Rectangle::new(
            Point::zero(),
            Size::new(self.display_width, self.display_height),
        )
    }

    /// Top region holding the title in dual-colour mode.
    pub fn title_region(&self) -> Rectangle {
        let height = self.title_height.min(self.display_height);
        Rectangle::new(Point::zero(), Size::new(self.display_width, height))
    }

    /// Everything below the title region.
    pub fn body_region(&self) -> Rectangle {
        let top = self.title_height.min(self.display_height);
        Rectangle::new(
            Point::new(0, top as i32),
            Size::new(self.display_width, self.display_height - top),
        )
    }

    /// A fresh animation clock matching this panel's width and step.
    pub fn animation_clock(&self) -> AnimationClock {
        AnimationClock::new(self.display_width, self.scroll_step)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
