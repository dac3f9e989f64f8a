//! Inline markup lexer.
//!
//! Splits a source string into literal characters and tag bodies. A tag is
//! everything between a `<` and the next `>`; a `<` with no closing `>`
//! anywhere after it is an ordinary character.
//!
//! ```text
//! "<s2>Hi<br>x"  →  Tag("s2") 'H' 'i' Tag("br") 'x'
//! ```
//!
//! The lexer knows nothing about what tags mean; [`Tag::parse`] maps a body
//! to a formatting command, and the layout pass applies it.

/// One lexical unit of marked-up text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A character to lay out (including `\n` and `\r`).
    Literal(char),
    /// A tag body with surrounding whitespace trimmed, not yet interpreted.
    Tag(&'a str),
}

/// Iterator over the [`Token`]s of a source string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

/// Lex `source` lazily.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens { rest: source }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.rest.chars().next()?;

        if c == '<' {
            if let Some(close) = self.rest[1..].find('>') {
                let body = &self.rest[1..1 + close];
                self.rest = &self.rest[close + 2..];
                return Some(Token::Tag(body.trim()));
            }
        }

        self.rest = &self.rest[c.len_utf8()..];
        Some(Token::Literal(c))
    }
}

/// A recognised formatting tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tag {
    /// `<s1>`, `<s2>`, `<s3>`
    Size(u8),
    /// `<b>` / `</b>`
    Bold(bool),
    /// `<i>` / `</i>`
    Italic(bool),
    /// `<inv>` on; `<n>` or `</inv>` off
    Inverted(bool),
    /// `<scroll>` / `</scroll>`
    Scroll(bool),
    /// `<blink>` / `</blink>`
    Blink(bool),
    /// `<br>`
    Break,
}

const TAGS: [(&str, Tag); 14] = [
    ("s1", Tag::Size(1)),
    ("s2", Tag::Size(2)),
    ("s3", Tag::Size(3)),
    ("b", Tag::Bold(true)),
    ("/b", Tag::Bold(false)),
    ("i", Tag::Italic(true)),
    ("/i", Tag::Italic(false)),
    ("inv", Tag::Inverted(true)),
    ("n", Tag::Inverted(false)),
    ("/inv", Tag::Inverted(false)),
    ("scroll", Tag::Scroll(true)),
    ("/scroll", Tag::Scroll(false)),
    ("blink", Tag::Blink(true)),
    ("/blink", Tag::Blink(false)),
];

impl Tag {
    /// Interpret a tag body, case-insensitively. Returns `None` for tags
    /// with no meaning; the caller still consumes them.
    pub fn parse(body: &str) -> Option<Tag> {
        let body = body.trim();
        if body.eq_ignore_ascii_case("br") {
            return Some(Tag::Break);
        }
        TAGS.iter()
            .find(|(name, _)| body.eq_ignore_ascii_case(name))
            .map(|&(_, tag)| tag)
    }
}
