use super::error::UpdateError;
use super::BITMAP_LEN;

/// Accumulates a chunked bitmap upload.
///
/// The request layer calls [`begin()`](Self::begin) when an upload starts,
/// [`push()`](Self::push) for every chunk, and [`finish()`](Self::finish)
/// once the body is complete. Every byte is counted, including bytes that
/// arrive after the buffer is full, so an oversize upload is reported as
/// such rather than silently truncated.
pub struct UploadBuffer {
    buf: [u8; BITMAP_LEN],
    received: usize,
}

impl Default for UploadBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadBuffer {
    /// Create an empty accumulator.
    pub const fn new() -> Self {
        Self {
            buf: [0; BITMAP_LEN],
            received: 0,
        }
    }

    /// Reset the byte count for a new upload.
    pub fn begin(&mut self) {
        self.received = 0;
    }

    /// Append a chunk. Bytes beyond [`BITMAP_LEN`] are counted but dropped.
    pub fn push(&mut self, chunk: &[u8]) {
        if self.received < BITMAP_LEN {
            let n = chunk.len().min(BITMAP_LEN - self.received);
            self.buf[self.received..self.received + n].copy_from_slice(&chunk[..n]);
        }
        self.received = self.received.saturating_add(chunk.len());
    }

    /// Number of bytes received since [`begin()`](Self::begin).
    pub fn received(&self) -> usize {
        self.received
    }

    /// Complete the upload and reset the byte count.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::UploadSize`] unless exactly [`BITMAP_LEN`]
    /// bytes were received.
    pub fn finish(&mut self) -> Result<[u8; BITMAP_LEN], UpdateError> {
        let received = self.received;
        self.received = 0;

        if received != BITMAP_LEN {
            #[cfg(feature = "defmt")]
            defmt::warn!("upload rejected: {} bytes", received);
            return Err(UpdateError::UploadSize { received });
        }
        Ok(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_upload_in_chunks() {
        let mut upload = UploadBuffer::new();
        upload.begin();
        for chunk in [[0x0Fu8; 256]; 4] {
            upload.push(&chunk);
        }
        assert_eq!(upload.received(), BITMAP_LEN);

        let bytes = upload.finish().unwrap();
        assert!(bytes.iter().all(|&b| b == 0x0F));
        assert_eq!(upload.received(), 0);
    }

    #[test]
    fn undersize_upload_rejected() {
        let mut upload = UploadBuffer::new();
        upload.begin();
        upload.push(&[1, 2, 3]);
        assert_eq!(upload.finish(), Err(UpdateError::UploadSize { received: 3 }));
    }

    #[test]
    fn oversize_upload_counts_overflow() {
        let mut upload = UploadBuffer::new();
        upload.begin();
        upload.push(&[0u8; BITMAP_LEN]);
        upload.push(&[0u8; 10]);
        assert_eq!(upload.received(), BITMAP_LEN + 10);
        assert_eq!(
            upload.finish(),
            Err(UpdateError::UploadSize { received: BITMAP_LEN + 10 })
        );
    }

    #[test]
    fn begin_discards_previous_progress() {
        let mut upload = UploadBuffer::new();
        upload.push(&[0u8; 100]);
        upload.begin();
        upload.push(&[0xEEu8; BITMAP_LEN]);
        assert_eq!(upload.finish().map(|b| b[0]), Ok(0xEE));
    }
}
