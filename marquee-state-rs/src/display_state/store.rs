use super::content::{copy_truncated, ActiveContent, ContentMode, TextContent};
use super::error::UpdateError;
use super::hex::hex_to_bytes;
use super::request::{UpdateRequest, UpdateStatus};
use super::snapshot::StateSnapshot;
use super::{BITMAP_LEN, EMPTY_PLACEHOLDER};

/// The content currently on display.
///
/// Written by the request side through [`apply()`](Self::apply), read by the
/// display loop on every render. Text and bitmap storage are kept side by
/// side so the last bitmap can still be exported while text is showing, but
/// only the variant named by [`mode()`](Self::mode) is ever rendered.
///
/// # Examples
///
/// ```
/// use marquee::display_state::{ActiveContent, DisplayStateStore, UpdateRequest};
///
/// let mut store = DisplayStateStore::new();
/// store.apply(&UpdateRequest::text("<b>Hello</b>")).unwrap();
///
/// match store.active() {
///     ActiveContent::Text(text) => assert_eq!(text.body.as_str(), "<b>Hello</b>"),
///     ActiveContent::Bitmap(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DisplayStateStore {
    mode: ContentMode,
    text: TextContent,
    bitmap: [u8; BITMAP_LEN],
}

impl Default for DisplayStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayStateStore {
    /// Empty text content and an all-dark bitmap.
    pub fn new() -> Self {
        Self {
            mode: ContentMode::Text,
            text: TextContent::default(),
            bitmap: [0; BITMAP_LEN],
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Which content variant is active.
    pub fn mode(&self) -> ContentMode {
        self.mode
    }

    /// Stored text content, whether or not it is active.
    pub fn text(&self) -> &TextContent {
        &self.text
    }

    /// Raw bitmap export: always exactly [`BITMAP_LEN`] bytes, regardless of
    /// the active mode.
    pub fn bitmap(&self) -> &[u8; BITMAP_LEN] {
        &self.bitmap
    }

    /// The content that should be rendered.
    pub fn active(&self) -> ActiveContent<'_> {
        match self.mode {
            ContentMode::Text => ActiveContent::Text(&self.text),
            ContentMode::Bitmap => ActiveContent::Bitmap(&self.bitmap),
        }
    }

    /// Read-only state query; [`StateSnapshot::to_json`] renders it.
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            mode: self.mode,
            dual_color: self.text.dual_color,
            text: &self.text.body,
            title: &self.text.title,
        }
    }

    // ── Updates ──────────────────────────────────────────────────────

    /// Apply an update request. Last write wins.
    ///
    /// On error the store is unchanged and the error's `Display` text is
    /// the status to report back.
    ///
    /// # Errors
    ///
    /// * [`UpdateError::UploadSize`]: bitmap mode, the upload is not exactly
    ///   [`BITMAP_LEN`] bytes and there is no usable hex fallback.
    /// * [`UpdateError::NoValidData`]: bitmap mode with no upload and no hex
    ///   digits.
    pub fn apply(&mut self, request: &UpdateRequest<'_>) -> Result<UpdateStatus, UpdateError> {
        match request.mode {
            ContentMode::Text => Ok(self.apply_text(request)),
            ContentMode::Bitmap => self.apply_bitmap(request),
        }
    }

    fn apply_text(&mut self, request: &UpdateRequest<'_>) -> UpdateStatus {
        let body = if request.text.is_empty() {
            EMPTY_PLACEHOLDER
        } else {
            request.text
        };

        let body_cut = copy_truncated(&mut self.text.body, body);
        let title = match request.title {
            Some(title) if request.dual_color => title,
            _ => "",
        };
        let title_cut = copy_truncated(&mut self.text.title, title);
        self.text.dual_color = request.dual_color;
        self.text.large_title = request.large_title;
        self.mode = ContentMode::Text;

        let truncated = body_cut || title_cut;
        if truncated {
            #[cfg(feature = "defmt")]
            defmt::warn!("text update truncated to fit");
        }
        UpdateStatus::TextUpdated { truncated }
    }

    fn apply_bitmap(&mut self, request: &UpdateRequest<'_>) -> Result<UpdateStatus, UpdateError> {
        if let Some(bytes) = request.uploaded {
            if bytes.len() == BITMAP_LEN {
                self.bitmap.copy_from_slice(bytes);
                self.mode = ContentMode::Bitmap;
                return Ok(UpdateStatus::BitmapUpdated { bytes: BITMAP_LEN });
            }
        }

        if let Some(hex) = request.hex_bitmap {
            let mut parsed = [0u8; BITMAP_LEN];
            let n = hex_to_bytes(hex, &mut parsed);
            if n > 0 {
                if n != BITMAP_LEN {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("hex bitmap short: {} of {} bytes", n, BITMAP_LEN);
                }
                self.bitmap = parsed;
                self.mode = ContentMode::Bitmap;
                return Ok(UpdateStatus::BitmapUpdated { bytes: n });
            }
        }

        match request.uploaded {
            Some(bytes) => Err(UpdateError::UploadSize {
                received: bytes.len(),
            }),
            None => Err(UpdateError::NoValidData),
        }
    }
}
