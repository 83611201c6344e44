//! Ordered, key-unique MIME type parameters.

use std::collections::HashMap;
use std::slice;

/// The parameters of a [`MimeType`](crate::MimeType), in first-insertion order.
///
/// Names are stored lower-cased. A value of `None` means the parameter was
/// given without a value (`a/b;charset`), which serializes as `charset=""`.
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    entries: Vec<(String, Option<String>)>,
    index: HashMap<String, usize>,
}

impl Parameters {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reports whether a parameter with this (lower-case) name exists.
    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a parameter by its lower-case name.
    ///
    /// Returns `None` if the parameter is absent and `Some(None)` if it is
    /// present without a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use whatwg_mime::MimeType;
    ///
    /// let mime = MimeType::parse("text/plain;flowed;Charset=UTF-8").unwrap();
    /// assert_eq!(mime.parameters().get("charset"), Some(Some("UTF-8")));
    /// assert_eq!(mime.parameters().get("flowed"), Some(None));
    /// assert_eq!(mime.parameters().get("format"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].1.as_deref())
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Inserts a parameter, replacing the value in place if the name exists.
    ///
    /// A replaced entry keeps its original position.
    pub(crate) fn set(&mut self, name: String, value: Option<String>) {
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }
}

impl PartialEq for Parameters {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Parameters {}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a str, Option<&'a str>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the parameters of a MIME type.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, Option<String>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_insertion_order() {
        let mut params = Parameters::new();
        params.set("b".to_string(), Some("1".to_string()));
        params.set("a".to_string(), None);
        params.set("c".to_string(), Some("3".to_string()));

        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = Parameters::new();
        params.set("a".to_string(), Some("1".to_string()));
        params.set("b".to_string(), Some("2".to_string()));
        params.set("a".to_string(), None);

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, [("a", None), ("b", Some("2"))]);
    }

    #[test]
    fn test_get_and_contains_key() {
        let mut params = Parameters::new();
        params.set("charset".to_string(), Some("utf-8".to_string()));
        params.set("flowed".to_string(), None);

        assert_eq!(params.get("charset"), Some(Some("utf-8")));
        assert_eq!(params.get("flowed"), Some(None));
        assert_eq!(params.get("missing"), None);
        assert!(params.contains_key("flowed"));
        assert!(!params.contains_key("Charset"));
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let mut first = Parameters::new();
        first.set("a".to_string(), None);
        first.set("b".to_string(), None);

        let mut second = Parameters::new();
        second.set("b".to_string(), None);
        second.set("a".to_string(), None);

        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }

    #[test]
    fn test_empty() {
        let params = Parameters::new();
        assert!(params.is_empty());
        assert_eq!(params.iter().len(), 0);
    }
}
