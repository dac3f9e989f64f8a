//! Markup text renderer.
//!
//! [`render_markup`] walks a source string once, applying tags to a
//! [`FormatState`] and laying glyphs out into a region of the canvas:
//!
//! - character-granular wrapping at the region's right edge,
//! - a hard stop once the next line would cross the region's bottom edge,
//! - horizontal scrolling driven by [`AnimationPhase::scroll_offset`],
//! - blinking driven by [`AnimationPhase::blink_on`].
//!
//! All layout is in region-local coordinates; the region's origin is only
//! added when a glyph is handed to the canvas.

use embedded_graphics::{prelude::*, primitives::Rectangle};
use marquee::animation::{AnimationPhase, SCROLL_GAP};

use crate::canvas::{Canvas, GlyphStyle, CELL_HEIGHT, CELL_WIDTH};
use crate::markup::{tokenize, Tag, Token};

/// Formatting mode and cursor for one render pass over one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormatState {
    /// Text size, 1 to 3.
    pub size: u8,
    pub bold: bool,
    pub italic: bool,
    pub inverted: bool,
    pub scroll: bool,
    pub blink: bool,
    /// Region-local x of the next glyph cell.
    pub cursor_x: i32,
    /// Region-local y of the current line.
    pub cursor_y: i32,
}

impl FormatState {
    /// Fresh state: everything off, cursor at the region origin.
    pub fn new(size: u8) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
            inverted: false,
            scroll: false,
            blink: false,
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    /// Horizontal advance per character at the current size.
    pub fn cell_width(&self) -> i32 {
        (CELL_WIDTH * u32::from(self.size)) as i32
    }

    /// Line height at the current size.
    pub fn line_height(&self) -> i32 {
        (CELL_HEIGHT * u32::from(self.size)) as i32
    }

    /// Move to the start of the next line.
    pub fn line_break(&mut self) {
        self.cursor_x = 0;
        self.cursor_y += self.line_height();
    }

    /// Apply a formatting tag.
    pub fn apply(&mut self, tag: Tag) {
        match tag {
            Tag::Size(size) => self.size = size,
            Tag::Bold(on) => self.bold = on,
            Tag::Italic(on) => self.italic = on,
            Tag::Inverted(on) => self.inverted = on,
            Tag::Scroll(on) => self.scroll = on,
            Tag::Blink(on) => self.blink = on,
            Tag::Break => self.line_break(),
        }
    }

    fn glyph_style(&self) -> GlyphStyle {
        GlyphStyle {
            size: self.size,
            inverted: self.inverted,
        }
    }
}

impl Default for FormatState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Render marked-up `source` into `region`.
///
/// Never fails: unknown tags are consumed and dropped, an unterminated `<`
/// is drawn as a character, and text that runs past the bottom of the
/// region is cut off.
pub fn render_markup<C>(
    canvas: &mut C,
    source: &str,
    region: Rectangle,
    phase: AnimationPhase,
) where
    C: Canvas + ?Sized,
{
    let width = region.size.width as i32;
    let height = region.size.height as i32;
    let mut state = FormatState::default();

    for token in tokenize(source) {
        let c = match token {
            Token::Tag(body) => {
                if let Some(tag) = Tag::parse(body) {
                    state.apply(tag);
                }
                continue;
            }
            Token::Literal('\n') => {
                state.line_break();
                continue;
            }
            Token::Literal('\r') => continue,
            Token::Literal(c) => c,
        };

        if state.blink && !phase.blink_on {
            continue;
        }

        let cell_width = state.cell_width();
        if state.cursor_x + cell_width > width {
            state.line_break();
        }
        if state.cursor_y + state.line_height() > height {
            break;
        }

        let x = draw_x(state.cursor_x, cell_width, width, state.scroll, phase);
        if is_visible(x, cell_width, width) {
            let top_left = region.top_left + Point::new(x, state.cursor_y);
            draw_styled(canvas, top_left, c, &state);
        }

        state.cursor_x += cell_width;
    }
}

/// Render one line of plain text (no tags, no wrapping) at `text_size`,
/// vertically centred in `region`.
///
/// Used for the title, where the only formatting is whole-line scrolling
/// and blinking.
pub fn render_line<C>(
    canvas: &mut C,
    text: &str,
    region: Rectangle,
    text_size: u8,
    scroll: bool,
    blink: bool,
    phase: AnimationPhase,
) where
    C: Canvas + ?Sized,
{
    if blink && !phase.blink_on {
        return;
    }

    let width = region.size.width as i32;
    let mut state = FormatState::new(text_size);
    state.scroll = scroll;
    state.cursor_y = (region.size.height as i32 - state.line_height()) / 2;
    let cell_width = state.cell_width();

    for c in text.chars() {
        if !scroll && state.cursor_x >= width {
            break;
        }
        let x = draw_x(state.cursor_x, cell_width, width, scroll, phase);
        if is_visible(x, cell_width, width) {
            let top_left = region.top_left + Point::new(x, state.cursor_y);
            draw_styled(canvas, top_left, c, &state);
        }
        state.cursor_x += cell_width;
    }
}

/// Region-local x at which the glyph at `cursor_x` is drawn.
///
/// Scrolling shifts text left by the scroll offset; a glyph that has moved
/// fully off the left edge re-enters after a gap of [`SCROLL_GAP`] pixels
/// past the right edge.
fn draw_x(cursor_x: i32, cell_width: i32, width: i32, scroll: bool, phase: AnimationPhase) -> i32 {
    if !scroll {
        return cursor_x;
    }
    let x = cursor_x - phase.scroll_offset;
    if x < -cell_width {
        x + width + SCROLL_GAP
    } else {
        x
    }
}

fn is_visible(x: i32, cell_width: i32, width: i32) -> bool {
    x >= -cell_width && x < width
}

/// Draw `c` with the bold or italic effect of `state`.
///
/// Bold overstrikes one pixel to the right. Italic overstrikes `size + 1`
/// copies, each one pixel further right and one pixel higher, and wins
/// over bold.
fn draw_styled<C>(canvas: &mut C, top_left: Point, c: char, state: &FormatState)
where
    C: Canvas + ?Sized,
{
    let style = state.glyph_style();
    let size = i32::from(state.size);

    if state.italic {
        for i in 0..=size {
            canvas.draw_glyph(top_left + Point::new(i, size - i), c, style);
        }
    } else if state.bold {
        canvas.draw_glyph(top_left, c, style);
        canvas.draw_glyph(top_left + Point::new(1, 0), c, style);
    } else {
        canvas.draw_glyph(top_left, c, style);
    }
}
