//! Joining a sequence of items into one fragment

use crate::fragment::Fragment;

/// How list items are joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Emitted between consecutive items, never after the last
    pub separator: String,
    /// Follow each separator with a newline
    pub place_items_on_separate_lines: bool,
}

impl ListOptions {
    /// Default options: no separator, one item per line
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator
    pub fn separated_by(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set whether items go on separate lines
    pub fn on_separate_lines(mut self, place_items_on_separate_lines: bool) -> Self {
        self.place_items_on_separate_lines = place_items_on_separate_lines;
        self
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            separator: String::new(),
            place_items_on_separate_lines: true,
        }
    }
}

/// Items mapped to fragments and joined
///
/// `n` items produce `n` blocks and `n - 1` separators. An empty sequence
/// produces empty contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    contents: String,
}

impl List {
    /// Map each item to a fragment, one item per line
    pub fn new<I, F, C>(items: I, contents_of: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> C,
        C: Fragment,
    {
        Self::with_options(items, ListOptions::default(), contents_of)
    }

    /// Map each item to a fragment and join according to `options`
    pub fn with_options<I, F, C>(items: I, options: ListOptions, mut contents_of: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> C,
        C: Fragment,
    {
        let mut joiner = options.separator;
        if options.place_items_on_separate_lines {
            joiner.push('\n');
        }

        let blocks: Vec<String> = items
            .into_iter()
            .map(|item| contents_of(item).contents())
            .collect();

        Self {
            contents: blocks.join(&joiner),
        }
    }
}

impl Fragment for List {
    fn contents(&self) -> String {
        self.contents.clone()
    }
}
