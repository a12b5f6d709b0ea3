//! Stripping leading and trailing characters from composed contents

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::{builder::ContentBuilder, fragment::Fragment};

/// A set of characters to trim
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharacterSet {
    /// Line breaks: U+000A..=U+000D, U+0085, U+2028 and U+2029
    #[default]
    Newlines,
    /// Whitespace that is not a line break
    Whitespace,
    /// Whitespace and line breaks
    WhitespaceAndNewlines,
    /// Unicode decimal digits (general category Nd)
    DecimalDigits,
    /// An explicit set of characters
    Chars(Vec<char>),
}

impl CharacterSet {
    /// Literal set built from the characters of `chars`
    pub fn from_chars(chars: &str) -> Self {
        CharacterSet::Chars(chars.chars().collect())
    }

    /// Whether `c` belongs to the set
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharacterSet::Newlines => is_newline(c),
            CharacterSet::Whitespace => c.is_whitespace() && !is_newline(c),
            CharacterSet::WhitespaceAndNewlines => c.is_whitespace() || is_newline(c),
            CharacterSet::DecimalDigits => {
                c.general_category() == GeneralCategory::DecimalNumber
            }
            CharacterSet::Chars(chars) => chars.contains(&c),
        }
    }

    /// Strip the leading and trailing runs of members of this set
    pub fn trim<'a>(&self, text: &'a str) -> &'a str {
        text.trim_matches(|c: char| self.contains(c))
    }
}

fn is_newline(c: char) -> bool {
    matches!(c, '\u{000A}'..='\u{000D}' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// Builder-composed contents with the ends trimmed
///
/// Only the leading run and the trailing run are removed; interior
/// characters, including blank lines between content, are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trim {
    character_set: CharacterSet,
    contents: String,
}

impl Trim {
    /// Trim line breaks from the composed contents
    pub fn new(contents: impl FnOnce(&mut ContentBuilder)) -> Self {
        Self::with_set(CharacterSet::Newlines, contents)
    }

    /// Trim members of `character_set` from the composed contents
    pub fn with_set(character_set: CharacterSet, contents: impl FnOnce(&mut ContentBuilder)) -> Self {
        let mut builder = ContentBuilder::new();
        contents(&mut builder);
        Self::from_fragment(character_set, builder)
    }

    /// Trim the literal characters in `chars` from the composed contents
    pub fn with_chars(chars: &str, contents: impl FnOnce(&mut ContentBuilder)) -> Self {
        Self::with_set(CharacterSet::from_chars(chars), contents)
    }

    /// Trim members of `character_set` from an existing fragment
    pub fn from_fragment(character_set: CharacterSet, fragment: impl Fragment) -> Self {
        let contents = character_set.trim(&fragment.contents()).to_string();
        Self {
            character_set,
            contents,
        }
    }

    /// The set this block was trimmed with
    pub fn character_set(&self) -> &CharacterSet {
        &self.character_set
    }
}

impl Fragment for Trim {
    fn contents(&self) -> String {
        self.contents.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_newlines_before_and_after() {
        let trim = Trim::new(|b| {
            b.push("").push("Test").push("");
        });
        assert_eq!(trim.contents(), "Test");
    }

    #[test]
    fn test_trim_newlines_just_before() {
        let trim = Trim::new(|b| {
            b.push("").push("Test");
        });
        assert_eq!(trim.contents(), "Test");
    }

    #[test]
    fn test_trim_newlines_just_after() {
        let trim = Trim::new(|b| {
            b.push("Test").push("");
        });
        assert_eq!(trim.contents(), "Test");
    }

    #[test]
    fn test_trim_keeps_interior() {
        let trim = Trim::new(|b| {
            b.push("\n\nfirst\n\nsecond\n\n\n");
        });
        assert_eq!(trim.contents(), "first\n\nsecond");
    }

    #[test]
    fn test_default_set_keeps_spaces() {
        let trim = Trim::new(|b| {
            b.push(" \nX\n\n");
        });
        assert_eq!(trim.contents(), " \nX");
        assert_eq!(trim.character_set(), &CharacterSet::Newlines);
    }

    #[test]
    fn test_whitespace_and_newlines() {
        let trim = Trim::with_set(CharacterSet::WhitespaceAndNewlines, |b| {
            b.push(" \nX\n\n");
        });
        assert_eq!(trim.contents(), "X");
    }

    #[test]
    fn test_whitespace_only() {
        let trim = Trim::from_fragment(CharacterSet::Whitespace, "\t  X \n");
        assert_eq!(trim.contents(), "X \n");
    }

    #[test]
    fn test_decimal_digits() {
        let trim = Trim::with_set(CharacterSet::DecimalDigits, |b| {
            b.push("123Test456");
        });
        assert_eq!(trim.contents(), "Test");
    }

    #[test]
    fn test_non_ascii_decimal_digits() {
        let trim = Trim::from_fragment(CharacterSet::DecimalDigits, "\u{0663}Test\u{0664}");
        assert_eq!(trim.contents(), "Test");

        let fullwidth = Trim::from_fragment(CharacterSet::DecimalDigits, "\u{FF11}\u{FF12}X");
        assert_eq!(fullwidth.contents(), "X");
    }

    #[test]
    fn test_non_decimal_numerals_kept() {
        // Roman numerals and superscripts are numbers but not decimal digits
        let trim = Trim::from_fragment(CharacterSet::DecimalDigits, "\u{2167}X\u{00B2}");
        assert_eq!(trim.contents(), "\u{2167}X\u{00B2}");
    }

    #[test]
    fn test_literal_characters() {
        let trim = Trim::with_chars("123456", |b| {
            b.push("123Test456");
        });
        assert_eq!(trim.contents(), "Test");
    }

    #[test]
    fn test_unicode_line_separators() {
        let trim = Trim::from_fragment(CharacterSet::Newlines, "\u{2028}\r\nX\u{0085}");
        assert_eq!(trim.contents(), "X");
    }

    #[test]
    fn test_trim_is_idempotent() {
        let once = Trim::new(|b| {
            b.push("\nX\n");
        });
        let twice = Trim::from_fragment(CharacterSet::Newlines, &once);
        assert_eq!(once.contents(), twice.contents());
    }

    #[test]
    fn test_everything_trimmed() {
        let trim = Trim::from_fragment(CharacterSet::Newlines, "\n\n\n");
        assert_eq!(trim.contents(), "");
    }
}
