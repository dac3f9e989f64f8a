//! Display content model and update handling.
//!
//! This module provides the [`DisplayStateStore`] that holds whatever the
//! panel is currently showing. It is the central shared state between the
//! request side (which applies [`UpdateRequest`]s) and the display loop
//! (which renders [`ActiveContent`] on change and on animation ticks).
//!
//! # Content
//!
//! Exactly one of two variants is active at a time:
//!
//! ```text
//! Text   { title, body, dual_color, large_title }   markup, rendered by the OLED crate
//! Bitmap { [u8; BITMAP_LEN] }                        1-bit pixels, row-major, MSB first
//! ```
//!
//! Updates replace the active content wholesale; there is no merging and
//! no history.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. Text lives in fixed-capacity [`heapless::String`]s
//! sized by [`MAX_TITLE_LEN`] and [`MAX_TEXT_LEN`]. The optional `defmt`
//! feature enables structured logging for embedded targets.

mod content;
mod error;
mod hex;
mod request;
mod snapshot;
mod store;
mod upload;

pub use content::{ActiveContent, ContentMode, TextContent};
pub use error::UpdateError;
pub use hex::{bytes_to_hex, hex_to_bytes};
pub use request::{UpdateRequest, UpdateStatus};
pub use snapshot::{StateSnapshot, SNAPSHOT_JSON_LEN};
pub use store::DisplayStateStore;
pub use upload::UploadBuffer;

/// Panel width in pixels.
pub const PANEL_WIDTH: usize = 128;

/// Panel height in pixels.
pub const PANEL_HEIGHT: usize = 64;

/// Size of a full-panel 1-bit bitmap (`128 * 64 / 8`).
pub const BITMAP_LEN: usize = PANEL_WIDTH * PANEL_HEIGHT / 8;

/// Capacity of the stored title in bytes.
pub const MAX_TITLE_LEN: usize = 128;

/// Capacity of the stored body text in bytes.
pub const MAX_TEXT_LEN: usize = 512;

/// Shown in place of an empty text update.
pub const EMPTY_PLACEHOLDER: &str = "(empty)";
