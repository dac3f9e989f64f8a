use heapless::String;
use serde::Serialize;

use super::content::ContentMode;
use super::{MAX_TEXT_LEN, MAX_TITLE_LEN};

/// Capacity of a serialized [`StateSnapshot`].
///
/// Every stored byte can expand to a six-byte `\u00XX` escape at worst, plus
/// the fixed keys and punctuation.
pub const SNAPSHOT_JSON_LEN: usize = 6 * (MAX_TEXT_LEN + MAX_TITLE_LEN) + 128;

/// Read-only view of the store for the state query endpoint.
///
/// Serializes as a single-line JSON object:
///
/// ```text
/// {"mode":"text","dualColorMode":true,"text":"...","title":"..."}
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StateSnapshot<'a> {
    pub mode: ContentMode,
    #[serde(rename = "dualColorMode")]
    pub dual_color: bool,
    pub text: &'a str,
    pub title: &'a str,
}

impl StateSnapshot<'_> {
    /// Serialize to JSON. Quotes, backslashes and control characters in
    /// `text` and `title` are escaped.
    ///
    /// # Errors
    ///
    /// Only if the output outgrows [`SNAPSHOT_JSON_LEN`], which stored
    /// content cannot reach.
    pub fn to_json(&self) -> Result<String<SNAPSHOT_JSON_LEN>, serde_json_core::ser::Error> {
        serde_json_core::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::display_state::{DisplayStateStore, UpdateRequest};

    fn json(store: &DisplayStateStore) -> std::string::String {
        store.snapshot().to_json().unwrap().as_str().into()
    }

    #[test]
    fn initial_state() {
        let store = DisplayStateStore::new();
        assert_eq!(
            json(&store),
            r#"{"mode":"text","dualColorMode":false,"text":"","title":""}"#
        );
    }

    #[test]
    fn quotes_and_backslashes_escaped() {
        let mut store = DisplayStateStore::new();
        store
            .apply(&UpdateRequest::dual(r#"say "hi""#, r"C:\temp <b>x</b>", false))
            .unwrap();
        assert_eq!(
            json(&store),
            r#"{"mode":"text","dualColorMode":true,"text":"C:\\temp <b>x</b>","title":"say \"hi\""}"#
        );
    }

    #[test]
    fn multi_line_text_stays_valid_json() {
        let mut store = DisplayStateStore::new();
        store.apply(&UpdateRequest::text("line1\nline2\r\n\tend")).unwrap();

        let out = json(&store);
        assert!(out.contains(r#""text":"line1\nline2\r\n\tend""#));
        assert!(!out.chars().any(|c| c.is_control()));
    }

    #[test]
    fn other_control_characters_escaped() {
        let mut store = DisplayStateStore::new();
        store.apply(&UpdateRequest::text("a\u{1}b")).unwrap();

        let out = json(&store);
        assert!(!out.chars().any(|c| c.is_control()));
        assert!(out.contains(r#""text":"a\u"#));
    }

    #[test]
    fn worst_case_content_fits() {
        let mut store = DisplayStateStore::new();
        let body = "\u{1}".repeat(crate::display_state::MAX_TEXT_LEN);
        let title = "\u{1}".repeat(crate::display_state::MAX_TITLE_LEN);
        store.apply(&UpdateRequest::dual(&title, &body, false)).unwrap();
        assert!(store.snapshot().to_json().is_ok());
    }

    #[test]
    fn bitmap_mode_still_reports_text() {
        let mut store = DisplayStateStore::new();
        store.apply(&UpdateRequest::text("before")).unwrap();
        store.apply(&UpdateRequest::hex_bitmap("ff")).unwrap();
        assert_eq!(
            json(&store),
            r#"{"mode":"bitmap","dualColorMode":false,"text":"before","title":""}"#
        );
    }
}
