//! Raw bitmap presenter.

use embedded_graphics::prelude::*;
use marquee::display_state::BITMAP_LEN;

use crate::canvas::Canvas;

/// Clear the canvas and blit a full-panel 1-bit bitmap at the origin.
///
/// The buffer is row-major, most significant bit first, one bit per pixel.
/// No markup and no animation apply.
pub fn present<C>(canvas: &mut C, pixels: &[u8; BITMAP_LEN])
where
    C: Canvas + ?Sized,
{
    let size = canvas.size();
    canvas.clear();
    canvas.draw_bitmap(Point::zero(), size, pixels);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::RecordingCanvas;

    #[test]
    fn clears_then_blits_full_panel() {
        let mut canvas = RecordingCanvas::new(128, 64);
        let mut pixels = [0u8; BITMAP_LEN];
        pixels[0] = 0xFF;
        pixels[BITMAP_LEN - 1] = 0x01;

        present(&mut canvas, &pixels);

        assert_eq!(canvas.clears, 1);
        assert!(canvas.glyphs.is_empty());
        assert_eq!(canvas.bitmaps.len(), 1);

        let (at, size, bytes) = &canvas.bitmaps[0];
        assert_eq!(*at, Point::zero());
        assert_eq!(*size, Size::new(128, 64));
        assert_eq!(bytes.as_slice(), &pixels[..]);
    }
}
