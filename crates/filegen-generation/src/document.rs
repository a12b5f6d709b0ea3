//! Named top-level artifacts produced by composition

use std::fmt;

use filegen_config::DocumentConfig;
use tracing::trace;

use crate::{
    builder::ContentBuilder,
    fragment::Fragment,
    interpolation::{replace_indented, InterpolationKey},
};

/// Options applied when a document's contents are composed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Append one `"\n"` to non-empty contents that do not already end in one
    pub end_with_newline: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            end_with_newline: true,
        }
    }
}

impl From<&DocumentConfig> for DocumentOptions {
    fn from(config: &DocumentConfig) -> Self {
        Self {
            end_with_newline: config.end_with_newline,
        }
    }
}

/// A generated file: a name and its composed contents
///
/// The name is fixed at construction. Contents can be replaced wholesale,
/// and substitutions return a new document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    name: String,
    contents: String,
}

impl Document {
    /// Create a document with verbatim contents
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Compose the contents with a builder, ending with a newline
    pub fn build(name: impl Into<String>, contents: impl FnOnce(&mut ContentBuilder)) -> Self {
        Self::build_with_options(name, DocumentOptions::default(), contents)
    }

    /// Compose the contents with a builder using explicit options
    pub fn build_with_options(
        name: impl Into<String>,
        options: DocumentOptions,
        contents: impl FnOnce(&mut ContentBuilder),
    ) -> Self {
        let mut builder = ContentBuilder::new();
        contents(&mut builder);
        Self::from_fragment(name, options, builder)
    }

    /// Create a document from any fragment, applying `options`
    pub fn from_fragment(
        name: impl Into<String>,
        options: DocumentOptions,
        fragment: impl Fragment,
    ) -> Self {
        let mut contents = fragment.contents();
        if options.end_with_newline && !contents.is_empty() && !contents.ends_with('\n') {
            contents.push('\n');
        }

        let name = name.into();
        trace!(document = %name, bytes = contents.len(), "Composed document");
        Self { name, contents }
    }

    /// Name the write sink uses for this document
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current contents
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Replace the contents
    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.contents = contents.into();
    }

    /// Consume the document, keeping only its contents
    pub fn into_contents(self) -> String {
        self.contents
    }

    /// Return a copy with every occurrence of `key` substituted by `value`
    ///
    /// Multi-line values are indented to match each occurrence's line. A
    /// key that does not occur leaves the contents untouched.
    pub fn value_for<K: InterpolationKey>(&self, key: K, value: impl Fragment) -> Document {
        Document {
            name: self.name.clone(),
            contents: replace_indented(&self.contents, &key.token(), &value.contents()),
        }
    }

    /// In-place form of [`value_for`](Self::value_for)
    pub fn set_value_for<K: InterpolationKey>(&mut self, key: K, value: impl Fragment) {
        self.contents = replace_indented(&self.contents, &key.token(), &value.contents());
    }
}

impl Fragment for Document {
    fn contents(&self) -> String {
        self.contents.clone()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents)
    }
}
