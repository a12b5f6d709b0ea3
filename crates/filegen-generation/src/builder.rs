//! Ordered composition of fragments into a single string
//!
//! Every fragment pushed onto a [`ContentBuilder`] becomes one entry; the
//! finished string joins the entries with `"\n"`, with no separator before
//! the first entry or after the last.

use crate::fragment::Fragment;

/// Collects fragments in order and joins them with newlines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBuilder {
    entries: Vec<String>,
}

impl ContentBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fragment
    pub fn push(&mut self, fragment: impl Fragment) -> &mut Self {
        self.entries.push(fragment.contents());
        self
    }

    /// Append every fragment of a dynamically produced sequence
    ///
    /// The sequence is flattened in place: each item becomes its own entry,
    /// exactly as if it had been pushed individually. An empty sequence
    /// contributes nothing.
    pub fn extend<I>(&mut self, fragments: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Fragment,
    {
        self.entries
            .extend(fragments.into_iter().map(|fragment| fragment.contents()));
        self
    }

    /// Fluent form of [`push`](Self::push)
    pub fn with(mut self, fragment: impl Fragment) -> Self {
        self.push(fragment);
        self
    }

    /// Fluent form of [`extend`](Self::extend) mapping each item to a fragment
    pub fn with_each<I, F, C>(mut self, items: I, mut contents_of: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> C,
        C: Fragment,
    {
        self.extend(items.into_iter().map(|item| contents_of(item)));
        self
    }

    /// Number of entries collected so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were collected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join the collected entries with `"\n"`
    pub fn build(&self) -> String {
        self.entries.join("\n")
    }
}

impl Fragment for ContentBuilder {
    fn contents(&self) -> String {
        self.build()
    }
}

/// Run `f` against a fresh builder and return the joined contents
pub fn compose(f: impl FnOnce(&mut ContentBuilder)) -> String {
    let mut builder = ContentBuilder::new();
    f(&mut builder);
    builder.build()
}
