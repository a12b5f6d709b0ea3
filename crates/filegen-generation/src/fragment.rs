//! The fragment abstraction shared by every composable piece of text

use std::borrow::Cow;

use crate::interpolation::{replace_indented, Interpolated, InterpolationKey};

/// A composable piece of generated text
///
/// Strings are fragments as-is, so literals and composite fragments can be
/// mixed freely in a [`ContentBuilder`](crate::ContentBuilder).
pub trait Fragment {
    /// Derive the text of this fragment
    fn contents(&self) -> String;
}

impl Fragment for str {
    fn contents(&self) -> String {
        self.to_string()
    }
}

impl Fragment for String {
    fn contents(&self) -> String {
        self.clone()
    }
}

impl Fragment for Cow<'_, str> {
    fn contents(&self) -> String {
        self.to_string()
    }
}

impl<T: Fragment + ?Sized> Fragment for &T {
    fn contents(&self) -> String {
        (**self).contents()
    }
}

impl<T: Fragment + ?Sized> Fragment for Box<T> {
    fn contents(&self) -> String {
        (**self).contents()
    }
}

/// Operations available on every fragment
pub trait FragmentExt: Fragment {
    /// Substitute every occurrence of `key` in this fragment's contents
    ///
    /// See [`replace_indented`] for how multi-line values are indented.
    fn value_for<K: InterpolationKey>(&self, key: K, value: impl Fragment) -> Interpolated {
        Interpolated::new(replace_indented(
            &self.contents(),
            &key.token(),
            &value.contents(),
        ))
    }
}

impl<T: Fragment + ?Sized> FragmentExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_are_fragments() {
        assert_eq!("Hello".contents(), "Hello");
        assert_eq!(String::from("World").contents(), "World");
        assert_eq!(Cow::Borrowed("cow").contents(), "cow");
    }

    #[test]
    fn test_boxed_fragments() {
        let fragments: Vec<Box<dyn Fragment>> = vec![Box::new("one"), Box::new(String::from("two"))];
        let contents: Vec<String> = fragments.iter().map(|f| f.contents()).collect();
        assert_eq!(contents, vec!["one", "two"]);
    }

    #[test]
    fn test_value_for_on_plain_text() {
        crate::interpolation_key! {
            struct Name;
        }

        let text = format!("Hello, {}!", Name);
        let result = text.value_for(Name, "World");
        assert_eq!(result.contents(), "Hello, World!");
    }
}
