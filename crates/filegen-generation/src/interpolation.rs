//! Deferred placeholder substitution
//!
//! An interpolation key is a zero-sized marker type with a unique name.
//! While composing a document the key is embedded as its token; a later
//! `value_for` call replaces every occurrence of the token with content
//! that may span several lines. The text preceding the token on its line
//! is taken as the indentation: it is removed, and every non-empty inserted
//! line (the first included) is prefixed with it, so a placeholder indented
//! inside a block stays indented. Empty lines stay empty, which means an
//! empty first line drops the inline prefix:
//!
//! ```
//! use filegen_generation::{interpolation_key, Document};
//!
//! interpolation_key! {
//!     struct Cases;
//! }
//!
//! let document = Document::build("X.swift", |b| {
//!     b.push("enum X {").push(format!("    {}", Cases)).push("}");
//! })
//! .value_for(Cases, "case a\ncase b");
//!
//! assert_eq!(document.contents(), "enum X {\n    case a\n    case b\n}\n");
//! ```

use tracing::debug;

use crate::fragment::Fragment;

/// Opening delimiter of every key token
pub const TOKEN_PREFIX: &str = "<#InterpolationKey:";

/// Closing delimiter of every key token
pub const TOKEN_SUFFIX: &str = "#>";

/// Identifies one placeholder
///
/// Usually declared with [`interpolation_key!`](crate::interpolation_key),
/// which derives `NAME` from the module path, the type name and the
/// declaration site, so same-named keys declared in different scopes get
/// different tokens.
pub trait InterpolationKey {
    /// Unique name of this key
    const NAME: &'static str;

    /// The reserved token standing in for this key
    fn token(&self) -> String {
        key_token(Self::NAME)
    }
}

/// Token embedded into contents for the key called `name`
pub fn key_token(name: &str) -> String {
    format!("{}{}{}", TOKEN_PREFIX, name, TOKEN_SUFFIX)
}

/// Declare one or more interpolation keys
///
/// Each key is a unit struct that implements [`InterpolationKey`],
/// [`Display`](std::fmt::Display) (printing its token) and
/// [`Fragment`](crate::Fragment), so it can be written with `format!` or
/// pushed onto a builder directly.
///
/// ```
/// use filegen_generation::{interpolation_key, InterpolationKey};
///
/// interpolation_key! {
///     /// Body of the generated enum
///     pub struct EnumCases;
///     struct Joined;
/// }
///
/// assert_ne!(EnumCases.token(), Joined.token());
/// assert_eq!(format!("{}", EnumCases), EnumCases.token());
/// ```
#[macro_export]
macro_rules! interpolation_key {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $crate::InterpolationKey for $name {
                const NAME: &'static str = concat!(
                    module_path!(),
                    "::",
                    stringify!($name),
                    "@",
                    file!(),
                    ":",
                    line!(),
                    ":",
                    column!()
                );
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&$crate::InterpolationKey::token(self))
                }
            }

            impl $crate::Fragment for $name {
                fn contents(&self) -> ::std::string::String {
                    $crate::InterpolationKey::token(self)
                }
            }
        )+
    };
}

/// Contents produced by substituting a key inside an arbitrary fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolated {
    contents: String,
}

impl Interpolated {
    pub(crate) fn new(contents: String) -> Self {
        Self { contents }
    }

    /// Substitute another key, continuing the chain
    pub fn value_for<K: InterpolationKey>(&self, key: K, value: impl Fragment) -> Interpolated {
        Interpolated::new(replace_indented(
            &self.contents,
            &key.token(),
            &value.contents(),
        ))
    }
}

impl Fragment for Interpolated {
    fn contents(&self) -> String {
        self.contents.clone()
    }
}

/// Replace every occurrence of `token` with `replacement`, re-indenting it
///
/// For each occurrence, the text between the start of its line and the
/// token is the indentation prefix. The span from the line start through the
/// end of the token is replaced by the lines of `replacement`, each non-empty
/// line prefixed with that indentation; empty lines stay empty. Text after the
/// token on the same line is kept.
///
/// Scanning resumes after the inserted text, so a replacement containing the
/// token itself is never substituted again by the same call. Contents without
/// the token are returned unchanged.
pub fn replace_indented(contents: &str, token: &str, replacement: &str) -> String {
    if token.is_empty() {
        return contents.to_string();
    }

    let mut result = contents.to_string();
    let mut search_from = 0;
    let mut occurrences = 0usize;

    while let Some(offset) = result[search_from..].find(token) {
        let start = search_from + offset;
        let end = start + token.len();
        let line_start = result[..start].rfind('\n').map_or(0, |index| index + 1);

        let indented = indent_lines(replacement, &result[line_start..start]);
        result.replace_range(line_start..end, &indented);

        search_from = line_start + indented.len();
        occurrences += 1;

        if search_from >= result.len() {
            break;
        }
    }

    if occurrences > 0 {
        debug!(token, occurrences, "Substituted interpolation key");
    }

    result
}

fn indent_lines(text: &str, indentation: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indentation, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::interpolation_key! {
        struct First;
        struct FirstCases;
    }

    #[test]
    fn test_token_is_namespaced() {
        let token = First.token();
        assert!(token.starts_with(TOKEN_PREFIX));
        assert!(token.ends_with(TOKEN_SUFFIX));
        assert!(token.contains("::First"));
    }

    #[test]
    fn test_tokens_never_prefix_each_other() {
        assert!(!FirstCases.token().starts_with(&First.token()));
        assert!(!First.token().starts_with(&FirstCases.token()));
    }

    fn outer_scope_token() -> String {
        crate::interpolation_key! {
            struct Scoped;
        }
        Scoped.token()
    }

    fn inner_scope_document() -> (String, String) {
        crate::interpolation_key! {
            struct Scoped;
        }
        (Scoped.token(), format!("  {}", Scoped))
    }

    #[test]
    fn test_same_name_in_different_scopes_does_not_collide() {
        let (inner_token, contents) = inner_scope_document();
        assert_ne!(outer_scope_token(), inner_token);
        assert_eq!(outer_scope_token(), outer_scope_token());
        assert_eq!(
            replace_indented(&contents, &outer_scope_token(), "from-other-key"),
            contents
        );
        assert_eq!(
            replace_indented(&contents, &inner_token, "from-this-key"),
            "  from-this-key"
        );
    }

    #[test]
    fn test_same_key_same_token() {
        assert_eq!(First.token(), First.token());
        assert_eq!(First.to_string(), First.token());
        assert_eq!(First.contents(), First.token());
    }

    #[test]
    fn test_missing_token_is_noop() {
        let contents = "line one\n    line two\n";
        assert_eq!(replace_indented(contents, &First.token(), "x\ny"), contents);
    }

    #[test]
    fn test_empty_token_is_noop() {
        assert_eq!(replace_indented("abc", "", "x"), "abc");
    }

    #[test]
    fn test_single_line_replacement() {
        let contents = format!("enum Test {{\n    {}\n}}", First);
        assert_eq!(
            replace_indented(&contents, &First.token(), "case test"),
            "enum Test {\n    case test\n}"
        );
    }

    #[test]
    fn test_multi_line_replacement_indents_every_line() {
        let contents = format!("enum Test {{\n    {}\n}}", First);
        assert_eq!(
            replace_indented(&contents, &First.token(), "case one\ncase two\ncase three"),
            "enum Test {\n    case one\n    case two\n    case three\n}"
        );
    }

    #[test]
    fn test_empty_lines_stay_empty() {
        let contents = format!("  {}", First);
        assert_eq!(
            replace_indented(&contents, &First.token(), "a\n\nb"),
            "  a\n\n  b"
        );
    }

    #[test]
    fn test_token_at_string_start() {
        let contents = format!("{}\nrest", First);
        assert_eq!(
            replace_indented(&contents, &First.token(), "x\ny"),
            "x\ny\nrest"
        );
    }

    #[test]
    fn test_token_at_string_end() {
        let contents = format!("head\n\t{}", First);
        assert_eq!(
            replace_indented(&contents, &First.token(), "x\ny"),
            "head\n\tx\n\ty"
        );
    }

    #[test]
    fn test_inline_prefix_and_suffix_kept() {
        let contents = format!("    [{}].joined()", First);
        assert_eq!(
            replace_indented(&contents, &First.token(), "a, b"),
            "    [a, b].joined()"
        );
    }

    #[test]
    fn test_each_occurrence_uses_own_indentation() {
        let contents = format!("{}\n    {}\n        {}", First, First, First);
        assert_eq!(
            replace_indented(&contents, &First.token(), "a\nb"),
            "a\nb\n    a\n    b\n        a\n        b"
        );
    }

    #[test]
    fn test_two_occurrences_on_one_line() {
        let contents = format!("{} + {}", First, First);
        assert_eq!(replace_indented(&contents, &First.token(), "1"), "1 + 1");
    }

    #[test]
    fn test_replacement_containing_token_terminates() {
        let token = First.token();
        let contents = format!("a {}\nb {}", token, token);
        let replacement = format!("<{}>", token);
        assert_eq!(
            replace_indented(&contents, &token, &replacement),
            format!("a <{}>\nb <{}>", token, token)
        );
    }

    #[test]
    fn test_empty_replacement_removes_prefix() {
        let contents = format!("x\n    {}\ny", First);
        assert_eq!(replace_indented(&contents, &First.token(), ""), "x\n\ny");
    }

    #[test]
    fn test_empty_first_line_drops_inline_prefix() {
        let contents = format!("    {}", First);
        assert_eq!(
            replace_indented(&contents, &First.token(), "\nbody"),
            "\n    body"
        );
    }

    #[test]
    fn test_interpolated_chain() {
        let text = format!("{} and {}", First, FirstCases);
        let result = Interpolated::new(text)
            .value_for(First, "one")
            .value_for(FirstCases, "two");
        assert_eq!(result.contents(), "one and two");
    }
}
