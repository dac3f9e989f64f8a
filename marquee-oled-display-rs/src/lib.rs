//! Markup text renderer and async SSD1306 (128×64) display loop.
//!
//! This crate turns the content held in a
//! [`DisplayStateStore`](marquee::display_state::DisplayStateStore) into
//! pixels:
//!
//! - [`markup`]: lexer and tag table for the inline formatting language.
//! - [`render`]: single-pass layout of marked-up text into a region.
//! - [`compositor`]: single-region, title + body, or bitmap frames.
//! - [`canvas`]: the drawing primitives, implemented over
//!   `embedded-graphics`.
//! - [`OledDriver`]: the SSD1306 panel and its frame buffer.
//! - [`display_loop`] *(feature `task`)*: re-renders on updates and on
//!   animation ticks.
//!
//! # Markup
//!
//! | Tag | Effect |
//! |-----|--------|
//! | `<s1>` `<s2>` `<s3>` | text size |
//! | `<b>` `</b>` | bold |
//! | `<i>` `</i>` | italic |
//! | `<inv>`, `<n>` or `</inv>` | inverted on / off |
//! | `<scroll>` `</scroll>` | horizontal scroll |
//! | `<blink>` `</blink>` | blink |
//! | `<br>` or newline | line break |
//!
//! Unknown tags are dropped silently.
//!
//! # Quick Start
//!
//! ```ignore
//! use marquee_oled_display_rs::{
//!     display_loop, ContentSignal, DisplayConfig, OledDriver, SharedStore,
//! };
//!
//! // In your Embassy main:
//! let oled = OledDriver::new(i2c_oled, 0x3C);
//! spawner.spawn(oled_task(oled, store, &CONTENT_CHANGED, DisplayConfig::default())).unwrap();
//!
//! // Request side, after decoding an update:
//! store.lock().await.apply(&request)?;
//! CONTENT_CHANGED.signal(());
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`].
//! - **`task`**: the Embassy display loop.

#![cfg_attr(not(test), no_std)]

pub mod bitmap;
pub mod canvas;
pub mod compositor;
#[cfg(feature = "task")]
pub mod display_task;
pub mod driver;
pub mod error;
pub mod layout;
pub mod markup;
pub mod render;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use canvas::{Canvas, GlyphStyle, GraphicsCanvas};
pub use compositor::{render_dual, render_frame, should_render, RenderTrigger};
#[cfg(feature = "task")]
pub use display_task::{display_loop, ContentSignal, SharedStore};
pub use driver::OledDriver;
pub use error::OledError;
pub use layout::DisplayConfig;
pub use render::{render_markup, FormatState};
