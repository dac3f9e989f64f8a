use core::fmt;

use super::BITMAP_LEN;

/// Errors that can occur when applying an update to the display state.
///
/// None of these are fatal: the store is left exactly as it was and the
/// `Display` text is the status message handed back to the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateError {
    /// A bitmap update carried neither a correctly sized upload nor any
    /// hex digits.
    NoValidData,
    /// A bitmap upload did not contain exactly [`BITMAP_LEN`] bytes.
    UploadSize {
        /// Total bytes received, including any overflow.
        received: usize,
    },
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UpdateError::NoValidData => write!(f, "no valid data"),
            UpdateError::UploadSize { received } => write!(
                f,
                "upload size mismatch: got {} bytes, expected {}",
                received, BITMAP_LEN
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;
    use core::fmt::Write;

    #[test]
    fn status_strings() {
        let mut s: String<64> = String::new();
        write!(s, "{}", UpdateError::NoValidData).unwrap();
        assert_eq!(s.as_str(), "no valid data");

        s.clear();
        write!(s, "{}", UpdateError::UploadSize { received: 1030 }).unwrap();
        assert_eq!(s.as_str(), "upload size mismatch: got 1030 bytes, expected 1024");
    }
}
