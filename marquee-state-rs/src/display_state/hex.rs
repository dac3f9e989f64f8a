//! Hex text ⇄ bitmap byte conversion.
//!
//! Bitmaps submitted through a text form arrive as hex strings, usually
//! with separators or line breaks mixed in (`"ff 00\n3c"`, `"FF,00"`).
//! Parsing is deliberately lenient: every non-hex character is discarded and
//! the remaining digits are read pairwise.

use core::fmt;

/// Parse hex digits from `hex` into `out`, left to right.
///
/// Non-hex characters are skipped. Digits are consumed in pairs; a trailing
/// unpaired digit is ignored. Parsing stops once `out` is full, so oversize
/// input is truncated. Any bytes of `out` not written are zero-filled.
///
/// Returns the number of bytes parsed from the input (before padding).
///
/// # Examples
///
/// ```
/// use marquee::display_state::hex_to_bytes;
///
/// let mut buf = [0xAAu8; 4];
/// assert_eq!(hex_to_bytes("FF:00:1", &mut buf), 2);
/// assert_eq!(buf, [0xFF, 0x00, 0x00, 0x00]);
/// ```
pub fn hex_to_bytes(hex: &str, out: &mut [u8]) -> usize {
    let mut filled = 0;
    let mut high: Option<u8> = None;

    for nibble in hex.chars().filter_map(|c| c.to_digit(16)) {
        if filled == out.len() {
            break;
        }
        let nibble = nibble as u8;
        match high.take() {
            Some(h) => {
                out[filled] = (h << 4) | nibble;
                filled += 1;
            }
            None => high = Some(nibble),
        }
    }

    for byte in &mut out[filled..] {
        *byte = 0;
    }

    filled
}

/// Write `bytes` as lower-case hex with no separators.
pub fn bytes_to_hex<W: fmt::Write>(bytes: &[u8], out: &mut W) -> fmt::Result {
    for byte in bytes {
        write!(out, "{:02x}", byte)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_state::BITMAP_LEN;
    use proptest::prelude::*;

    #[test]
    fn full_length_repeated_pattern() {
        let hex = "ff00".repeat(BITMAP_LEN / 2);
        assert_eq!(hex.len(), 2 * BITMAP_LEN);

        let mut buf = [0x55u8; BITMAP_LEN];
        assert_eq!(hex_to_bytes(&hex, &mut buf), BITMAP_LEN);
        for pair in buf.chunks(2) {
            assert_eq!(pair, [0xFF, 0x00]);
        }
    }

    #[test]
    fn short_input_zero_pads() {
        let mut buf = [0x55u8; BITMAP_LEN];
        assert_eq!(hex_to_bytes("ff00", &mut buf), 2);
        assert_eq!(buf[0], 0xFF);
        assert_eq!(buf[1], 0x00);
        assert!(buf[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn oversize_input_truncates() {
        let hex = "ab".repeat(BITMAP_LEN + 10);
        let mut buf = [0u8; BITMAP_LEN];
        assert_eq!(hex_to_bytes(&hex, &mut buf), BITMAP_LEN);
        assert!(buf.iter().all(|&b| b == 0xAB));
    }

    #[test]
    fn separators_and_case_are_ignored() {
        let mut buf = [0u8; 4];
        assert_eq!(hex_to_bytes("De, aD\nbE-eF", &mut buf), 4);
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn no_digits_parses_nothing() {
        let mut buf = [0x11u8; 8];
        assert_eq!(hex_to_bytes("zz -- ??", &mut buf), 0);
        assert_eq!(buf, [0u8; 8]);
    }

    #[test]
    fn trailing_odd_digit_ignored() {
        let mut buf = [0u8; 2];
        assert_eq!(hex_to_bytes("abc", &mut buf), 1);
        assert_eq!(buf, [0xAB, 0x00]);
    }

    #[test]
    fn bytes_to_hex_lowercase() {
        let mut s = String::new();
        bytes_to_hex(&[0x00, 0x0F, 0xA5, 0xFF], &mut s).unwrap();
        assert_eq!(s, "000fa5ff");
    }

    proptest! {
        #[test]
        fn hex_round_trip(bytes in proptest::collection::vec(any::<u8>(), BITMAP_LEN)) {
            let mut hex = String::new();
            bytes_to_hex(&bytes, &mut hex).unwrap();

            let mut parsed = [0u8; BITMAP_LEN];
            prop_assert_eq!(hex_to_bytes(&hex, &mut parsed), BITMAP_LEN);
            prop_assert_eq!(&parsed[..], &bytes[..]);
        }

        #[test]
        fn round_trip_ignores_separators(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
            let mut hex = String::new();
            for b in &bytes {
                bytes_to_hex(&[*b], &mut hex).unwrap();
                hex.push(' ');
            }

            let mut parsed = [0u8; 64];
            prop_assert_eq!(hex_to_bytes(&hex, &mut parsed), bytes.len());
            prop_assert_eq!(&parsed[..bytes.len()], &bytes[..]);
        }
    }
}
