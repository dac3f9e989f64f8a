use core::fmt;

use super::content::ContentMode;

/// A content update as decoded by the request layer.
///
/// All fields borrow from the request; the store copies what it keeps.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateRequest<'a> {
    /// Text or bitmap.
    pub mode: ContentMode,
    /// Split the panel into title and body regions (text mode only).
    pub dual_color: bool,
    /// Use a size-2 title when it fits (text mode only).
    pub large_title: bool,
    /// Title for dual-colour mode.
    pub title: Option<&'a str>,
    /// Body text, or the whole screen outside dual-colour mode.
    pub text: &'a str,
    /// Bitmap as hex digits, separators allowed.
    pub hex_bitmap: Option<&'a str>,
    /// Bitmap as raw bytes from a file upload.
    pub uploaded: Option<&'a [u8]>,
}

impl<'a> UpdateRequest<'a> {
    /// Text update filling the whole panel.
    pub fn text(text: &'a str) -> Self {
        Self {
            mode: ContentMode::Text,
            text,
            ..Self::default()
        }
    }

    /// Text update with a separate title region.
    pub fn dual(title: &'a str, body: &'a str, large_title: bool) -> Self {
        Self {
            mode: ContentMode::Text,
            dual_color: true,
            large_title,
            title: Some(title),
            text: body,
            ..Self::default()
        }
    }

    /// Bitmap update from hex text.
    pub fn hex_bitmap(hex: &'a str) -> Self {
        Self {
            mode: ContentMode::Bitmap,
            hex_bitmap: Some(hex),
            ..Self::default()
        }
    }

    /// Bitmap update from an uploaded buffer.
    pub fn uploaded_bitmap(bytes: &'a [u8]) -> Self {
        Self {
            mode: ContentMode::Bitmap,
            uploaded: Some(bytes),
            ..Self::default()
        }
    }
}

/// Outcome of a successful update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateStatus {
    /// Text content replaced.
    TextUpdated {
        /// `true` if the title or body was cut to fit the store.
        truncated: bool,
    },
    /// Bitmap replaced; `bytes` is how many were parsed before zero padding.
    BitmapUpdated { bytes: usize },
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UpdateStatus::TextUpdated { truncated: false } => write!(f, "text updated"),
            UpdateStatus::TextUpdated { truncated: true } => {
                write!(f, "text updated (truncated)")
            }
            UpdateStatus::BitmapUpdated { bytes } => {
                write!(f, "bitmap updated ({} bytes)", bytes)
            }
        }
    }
}
