use heapless::String;
use serde::Serialize;

use super::{BITMAP_LEN, MAX_TEXT_LEN, MAX_TITLE_LEN};

/// Markup tags whose presence makes text content animated.
const ANIMATED_TAGS: [&str; 2] = ["<scroll>", "<blink>"];

/// Which kind of content the display is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Markup text, optionally split into title and body regions.
    #[default]
    Text,
    /// Raw 1-bit bitmap covering the whole panel.
    Bitmap,
}

impl ContentMode {
    /// Name used by the request layer and the state query.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentMode::Text => "text",
            ContentMode::Bitmap => "bitmap",
        }
    }
}

/// Stored text content. Title and body keep their markup verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextContent {
    /// Title shown in the top region when `dual_color` is set.
    pub title: String<MAX_TITLE_LEN>,
    /// Body text, or the whole screen when `dual_color` is clear.
    pub body: String<MAX_TEXT_LEN>,
    /// Split the panel into a title region and a body region.
    pub dual_color: bool,
    /// Draw the title at text size 2 when it fits.
    pub large_title: bool,
}

impl TextContent {
    /// Returns `true` if the title or body contains `<scroll>` or `<blink>`.
    ///
    /// A plain substring scan, not a tag parse: the animation clock only
    /// needs to know whether re-rendering could change anything.
    pub fn is_animated(&self) -> bool {
        ANIMATED_TAGS
            .iter()
            .any(|tag| self.title.contains(tag) || self.body.contains(tag))
    }
}

/// Borrowed view of whichever content is active.
#[derive(Debug, Clone, Copy)]
pub enum ActiveContent<'a> {
    /// Markup text.
    Text(&'a TextContent),
    /// Raw bitmap, always exactly [`BITMAP_LEN`] bytes.
    Bitmap(&'a [u8; BITMAP_LEN]),
}

impl ActiveContent<'_> {
    /// Returns `true` if the animation clock should trigger a re-render.
    ///
    /// Bitmaps are static and never animate.
    pub fn is_animated(&self) -> bool {
        match self {
            ActiveContent::Text(text) => text.is_animated(),
            ActiveContent::Bitmap(_) => false,
        }
    }
}

/// Copy `src` into a fixed-capacity string, truncating at a character
/// boundary if it does not fit.
///
/// Returns `true` if the text was truncated.
pub(crate) fn copy_truncated<const N: usize>(dst: &mut String<N>, src: &str) -> bool {
    dst.clear();
    let mut end = src.len().min(N);
    while !src.is_char_boundary(end) {
        end -= 1;
    }
    // `end <= N` and lies on a char boundary, so this cannot fail.
    let _ = dst.push_str(&src[..end]);
    end < src.len()
}
