//! Shared display state for the marquee OLED board.
//!
//! - [`display_state`]: the content store, update requests, hex bitmap
//!   codec, upload accumulator and state query.
//! - [`animation`]: the clock that drives scrolling and blinking text.
//! - [`link`]: network join with unbounded retry.
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`].

#![cfg_attr(not(test), no_std)]

pub mod animation;
pub mod display_state;
pub mod link;
