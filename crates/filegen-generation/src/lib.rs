#![warn(missing_docs)]

//! Text generation module for filegen
//!
//! Builds the contents of generated files out of composable fragments:
//! plain strings, nested builders, lists and trimmed blocks. Placeholders
//! declared with [`interpolation_key!`] can be embedded while composing and
//! filled in later, with multi-line values re-indented to match the line the
//! placeholder sat on.

pub mod builder;
pub mod document;
pub mod fragment;
pub mod interpolation;
pub mod list;
pub mod trim;

// Re-export public API
pub use builder::{compose, ContentBuilder};
pub use document::{Document, DocumentOptions};
pub use fragment::{Fragment, FragmentExt};
pub use interpolation::{
    key_token, replace_indented, Interpolated, InterpolationKey, TOKEN_PREFIX, TOKEN_SUFFIX,
};
pub use list::{List, ListOptions};
pub use trim::{CharacterSet, Trim};
