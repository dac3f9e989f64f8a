//! Frame composition: single-region text, title + body, or bitmap.
//!
//! # Dual-colour layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ TITLE (one line, vertically centred)         │  ← title_height (yellow)
//! ├──────────────────────────────────────────────┤
//! │ body text with full markup, wrapped          │
//! │ ...                                          │  ← remainder (blue)
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Title and body are laid out independently, each from a fresh
//! [`FormatState`](crate::render::FormatState).

use heapless::String;
use marquee::animation::AnimationPhase;
use marquee::display_state::{ActiveContent, TextContent, MAX_TITLE_LEN};

use crate::bitmap::present;
use crate::canvas::{Canvas, CELL_HEIGHT};
use crate::layout::DisplayConfig;
use crate::render::{render_line, render_markup};

/// Marker strings removed from the displayed title.
const TITLE_MARKERS: [&str; 4] = ["<scroll>", "</scroll>", "<blink>", "</blink>"];

/// A title prepared for display.
///
/// Titles do not run the tag grammar. They are only scanned for the
/// literal `<scroll>` and `<blink>` markers, which switch the effect on for
/// the whole line and are removed from the displayed text. Any other tag
/// is shown as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLine {
    pub text: String<MAX_TITLE_LEN>,
    pub scroll: bool,
    pub blink: bool,
}

impl TitleLine {
    pub fn parse(title: &str) -> Self {
        let mut text = String::new();
        let mut rest = title;

        'scan: while let Some(c) = rest.chars().next() {
            for marker in TITLE_MARKERS {
                if rest.starts_with(marker) {
                    rest = &rest[marker.len()..];
                    continue 'scan;
                }
            }
            // The stripped title is never longer than the stored one.
            let _ = text.push(c);
            rest = &rest[c.len_utf8()..];
        }

        Self {
            text,
            scroll: title.contains("<scroll>"),
            blink: title.contains("<blink>"),
        }
    }
}

/// What woke the display loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderTrigger {
    /// The request side replaced the content.
    ContentChanged,
    /// The animation clock advanced.
    AnimationTick,
}

/// Whether `content` needs a new frame for `trigger`.
///
/// A content change always redraws. A tick only redraws text whose title
/// or body contains `<scroll>` or `<blink>`; bitmaps and static text stay
/// as they are.
pub fn should_render(content: ActiveContent<'_>, trigger: RenderTrigger) -> bool {
    match trigger {
        RenderTrigger::ContentChanged => true,
        RenderTrigger::AnimationTick => content.is_animated(),
    }
}

/// Text size for the title: 2 for a large title, unless a size-2 line is
/// taller than the title region.
pub fn title_size(large_title: bool, title_height: u32) -> u8 {
    let size: u8 = if large_title { 2 } else { 1 };
    if CELL_HEIGHT * u32::from(size) > title_height {
        1
    } else {
        size
    }
}

/// Render a title in the top region and marked-up body text below it.
///
/// An empty title leaves the title region blank.
pub fn render_dual<C>(
    canvas: &mut C,
    text: &TextContent,
    config: &DisplayConfig,
    phase: AnimationPhase,
) where
    C: Canvas + ?Sized,
{
    let title = TitleLine::parse(&text.title);
    if !title.text.is_empty() {
        render_line(
            canvas,
            &title.text,
            config.title_region(),
            title_size(text.large_title, config.title_height),
            title.scroll,
            title.blink,
            phase,
        );
    }

    render_markup(canvas, &text.body, config.body_region(), phase);
}

/// Render one complete frame of `content` into the canvas.
///
/// The canvas is cleared first. Nothing happens on a zero-sized canvas,
/// which is how an absent display is represented.
pub fn render_frame<C>(
    canvas: &mut C,
    content: ActiveContent<'_>,
    phase: AnimationPhase,
    config: &DisplayConfig,
) where
    C: Canvas + ?Sized,
{
    let size = canvas.size();
    if size.width == 0 || size.height == 0 {
        #[cfg(feature = "defmt")]
        defmt::debug!("no display, frame skipped");
        return;
    }

    match content {
        ActiveContent::Text(text) => {
            canvas.clear();
            if text.dual_color {
                render_dual(canvas, text, config, phase);
            } else {
                render_markup(canvas, &text.body, config.full_region(), phase);
            }
        }
        ActiveContent::Bitmap(pixels) => present(canvas, pixels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::RecordingCanvas;
    use embedded_graphics::prelude::*;
    use marquee::display_state::{DisplayStateStore, UpdateRequest, BITMAP_LEN};

    const STILL: AnimationPhase = AnimationPhase {
        scroll_offset: 0,
        blink_on: true,
    };

    fn store_with(request: UpdateRequest<'_>) -> DisplayStateStore {
        let mut store = DisplayStateStore::new();
        store.apply(&request).unwrap();
        store
    }

    fn frame(store: &DisplayStateStore, phase: AnimationPhase) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new(128, 64);
        render_frame(&mut canvas, store.active(), phase, &DisplayConfig::default());
        canvas
    }

    // ── Title preparation ────────────────────────────────────────────

    #[test]
    fn title_markers_stripped_and_flags_set() {
        let title = TitleLine::parse("<scroll>ALERT</scroll>");
        assert_eq!(title.text.as_str(), "ALERT");
        assert!(title.scroll);
        assert!(!title.blink);

        let title = TitleLine::parse("<blink>Hot");
        assert_eq!(title.text.as_str(), "Hot");
        assert!(title.blink);
    }

    #[test]
    fn title_other_tags_shown_as_typed() {
        let title = TitleLine::parse("<b>Bold?</b>");
        assert_eq!(title.text.as_str(), "<b>Bold?</b>");
        assert!(!title.scroll && !title.blink);
    }

    #[test]
    fn closing_marker_alone_does_not_enable_effect() {
        let title = TitleLine::parse("x</scroll>");
        assert_eq!(title.text.as_str(), "x");
        assert!(!title.scroll);
    }

    #[test]
    fn title_size_boundary() {
        assert_eq!(title_size(false, 16), 1);
        // 16 px line in a 16 px region fits exactly.
        assert_eq!(title_size(true, 16), 2);
        assert_eq!(title_size(true, 15), 1);
        assert_eq!(title_size(true, 8), 1);
    }

    // ── Redraw decision ──────────────────────────────────────────────

    #[test]
    fn content_change_always_redraws() {
        let text = store_with(UpdateRequest::text("static"));
        let bitmap = store_with(UpdateRequest::uploaded_bitmap(&[0; BITMAP_LEN]));
        assert!(should_render(text.active(), RenderTrigger::ContentChanged));
        assert!(should_render(bitmap.active(), RenderTrigger::ContentChanged));
    }

    #[test]
    fn tick_redraws_only_animated_text() {
        let tick = RenderTrigger::AnimationTick;

        let scrolling = store_with(UpdateRequest::text("<scroll>news"));
        assert!(should_render(scrolling.active(), tick));

        let blinking_title = store_with(UpdateRequest::dual("<blink>Hot", "body", false));
        assert!(should_render(blinking_title.active(), tick));

        let plain = store_with(UpdateRequest::text("<b>still</b>"));
        assert!(!should_render(plain.active(), tick));

        // A bitmap made of the bytes of "<scroll>" is still just pixels.
        let mut pixels = [0u8; BITMAP_LEN];
        pixels[..8].copy_from_slice(b"<scroll>");
        let bitmap = store_with(UpdateRequest::uploaded_bitmap(&pixels));
        assert!(!should_render(bitmap.active(), tick));
    }

    #[test]
    fn tick_ignores_stale_animated_text_behind_a_bitmap() {
        let mut store = store_with(UpdateRequest::text("<scroll>old"));
        store
            .apply(&UpdateRequest::uploaded_bitmap(&[0xFF; BITMAP_LEN]))
            .unwrap();
        assert!(!should_render(store.active(), RenderTrigger::AnimationTick));
    }

    // ── Frames ───────────────────────────────────────────────────────

    #[test]
    fn single_region_uses_whole_panel() {
        let store = store_with(UpdateRequest::text("Hi"));
        let canvas = frame(&store, STILL);
        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.text(), "Hi");
        assert_eq!(canvas.glyphs[0].at, Point::zero());
    }

    #[test]
    fn single_region_ignores_stored_title() {
        let mut store = DisplayStateStore::new();
        let request = UpdateRequest {
            title: Some("ignored"),
            ..UpdateRequest::text("body")
        };
        store.apply(&request).unwrap();
        assert_eq!(frame(&store, STILL).text(), "body");
    }

    #[test]
    fn dual_alert_scenario() {
        let store = store_with(UpdateRequest::dual("<scroll>ALERT", "Normal body text", true));
        let canvas = frame(&store, STILL);

        let title: Vec<_> = canvas.glyphs.iter().filter(|g| g.at.y < 16).collect();
        let title_text: std::string::String = title.iter().map(|g| g.c).collect();
        assert_eq!(title_text, "ALERT");
        // Large title fits the 16 px region at size 2, centred at y = 0.
        assert!(title.iter().all(|g| g.style.size == 2 && g.at.y == 0));
        assert_eq!(title[1].at.x, 12);

        let body: std::string::String = canvas
            .glyphs
            .iter()
            .filter(|g| g.at.y >= 16)
            .map(|g| g.c)
            .collect();
        assert_eq!(body, "Normal body text");
        assert_eq!(canvas.glyphs[5].at, Point::new(0, 16));
    }

    #[test]
    fn dual_title_scrolls_with_phase() {
        let store = store_with(UpdateRequest::dual("<scroll>AB", "", false));
        let phase = AnimationPhase {
            scroll_offset: 4,
            blink_on: true,
        };
        let canvas = frame(&store, phase);
        let title: Vec<_> = canvas.glyphs.iter().filter(|g| g.at.y < 16).collect();
        assert_eq!(title[0].at, Point::new(-4, 4));
        assert_eq!(title[1].at, Point::new(2, 4));
    }

    #[test]
    fn small_title_is_centred() {
        let store = store_with(UpdateRequest::dual("T", "", false));
        let canvas = frame(&store, STILL);
        assert_eq!(canvas.glyphs[0].at, Point::new(0, 4));
        assert_eq!(canvas.glyphs[0].style.size, 1);
    }

    #[test]
    fn empty_title_leaves_region_blank() {
        let store = store_with(UpdateRequest::dual("", "body", true));
        let canvas = frame(&store, STILL);
        assert!(canvas.glyphs.iter().all(|g| g.at.y >= 16));
        assert_eq!(canvas.text(), "body");
    }

    #[test]
    fn title_and_body_state_are_independent() {
        // Body formatting never leaks into the title and vice versa.
        let store = store_with(UpdateRequest::dual("<blink>T", "<inv>b", false));
        let hidden = AnimationPhase {
            scroll_offset: 0,
            blink_on: false,
        };
        let canvas = frame(&store, hidden);
        assert_eq!(canvas.text(), "b");
        assert!(canvas.glyphs[0].style.inverted);
    }

    #[test]
    fn body_clipped_to_its_region() {
        // 48 px body holds 6 lines of size-1 text.
        let store = store_with(UpdateRequest::dual("", "1\n2\n3\n4\n5\n6\n7\n8", false));
        assert_eq!(frame(&store, STILL).text(), "123456");
    }

    #[test]
    fn bitmap_content_is_presented() {
        let store = store_with(UpdateRequest::uploaded_bitmap(&[0xAA; BITMAP_LEN]));
        let canvas = frame(&store, STILL);
        assert_eq!(canvas.clears, 1);
        assert!(canvas.glyphs.is_empty());
        assert_eq!(canvas.bitmaps[0].2, vec![0xAA; BITMAP_LEN]);
    }

    #[test]
    fn zero_sized_canvas_is_a_no_op() {
        let store = store_with(UpdateRequest::text("Hi"));
        let mut canvas = RecordingCanvas::new(0, 0);
        render_frame(&mut canvas, store.active(), STILL, &DisplayConfig::default());
        assert_eq!(canvas.clears, 0);
        assert!(canvas.glyphs.is_empty());
    }
}
