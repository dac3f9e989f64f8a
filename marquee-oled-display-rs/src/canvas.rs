//! Pixel canvas abstraction used by the renderers.
//!
//! Renderers only ever talk to a [`Canvas`]. [`GraphicsCanvas`] implements
//! it for any `embedded-graphics` [`DrawTarget`] with [`BinaryColor`] pixels,
//! including the SSD1306 frame buffer owned by
//! [`OledDriver`](crate::OledDriver).
//!
//! Glyphs come from the 5×7 ASCII font in a 6×8 cell, scaled by an integer
//! text size. Coordinates outside the target are silently ignored, which the
//! text renderer relies on for glyphs that straddle a region edge.

use embedded_graphics::{
    image::{Image, ImageRaw},
    mono_font::{ascii::FONT_5X7, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, Text},
};

/// Glyph cell width at text size 1, including one column of spacing.
pub const CELL_WIDTH: u32 = 6;

/// Glyph cell height (line height) at text size 1.
pub const CELL_HEIGHT: u32 = 8;

/// How a single glyph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphStyle {
    /// Integer scale factor, 1 to 3.
    pub size: u8,
    /// Dark strokes on an opaque lit cell instead of lit strokes on a
    /// transparent background.
    pub inverted: bool,
}

/// Drawing primitives needed by the renderers.
pub trait Canvas {
    /// Canvas dimensions. A zero width or height means there is no usable
    /// display and all rendering is skipped.
    fn size(&self) -> Size;

    /// Turn every pixel off.
    fn clear(&mut self);

    /// Draw one character with its cell's top-left corner at `top_left`.
    fn draw_glyph(&mut self, top_left: Point, c: char, style: GlyphStyle);

    /// Blit a 1-bit bitmap (row-major, MSB first) covering `size` pixels.
    fn draw_bitmap(&mut self, top_left: Point, size: Size, bytes: &[u8]);
}

/// [`Canvas`] over an `embedded-graphics` draw target.
///
/// Draw errors are discarded: a failed pixel write must not abort a render
/// pass, and the SSD1306 frame buffer never fails anyway.
pub struct GraphicsCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> GraphicsCanvas<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D> Canvas for GraphicsCanvas<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn size(&self) -> Size {
        self.target.bounding_box().size
    }

    fn clear(&mut self) {
        let _ = self.target.clear(BinaryColor::Off);
    }

    fn draw_glyph(&mut self, top_left: Point, c: char, style: GlyphStyle) {
        let scale = u32::from(style.size.max(1));
        let stroke = if style.inverted {
            let cell = Rectangle::new(
                top_left,
                Size::new(CELL_WIDTH * scale, CELL_HEIGHT * scale),
            );
            let _ = self.target.fill_solid(&cell, BinaryColor::On);
            BinaryColor::Off
        } else {
            BinaryColor::On
        };

        let mut utf8 = [0u8; 4];
        let text = c.encode_utf8(&mut utf8);
        let mut scaled = Scaled {
            target: &mut *self.target,
            origin: top_left,
            scale,
        };
        let _ = Text::with_baseline(
            text,
            Point::zero(),
            MonoTextStyle::new(&FONT_5X7, stroke),
            Baseline::Top,
        )
        .draw(&mut scaled);
    }

    fn draw_bitmap(&mut self, top_left: Point, size: Size, bytes: &[u8]) {
        let row_bytes = size.width.div_ceil(8) as usize;
        let len = (row_bytes * size.height as usize).min(bytes.len());
        let raw = ImageRaw::<BinaryColor>::new(&bytes[..len], size.width);
        let _ = Image::new(&raw, top_left).draw(&mut *self.target);
    }
}

/// Draw target adapter that magnifies every pixel into a `scale`×`scale`
/// block, offset by `origin`.
struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<D> Dimensions for Scaled<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(CELL_WIDTH, CELL_HEIGHT))
    }
}

impl<D> DrawTarget for Scaled<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let block = Rectangle::new(
                self.origin + point * self.scale as i32,
                Size::new_equal(self.scale),
            );
            self.target.fill_solid(&block, color)?;
        }
        Ok(())
    }
}

// ── Test support ─────────────────────────────────────────────────────────
