//! Import collection utilities.

use std::collections::BTreeSet;

/// Tracks fully-qualified import names and deduplicates them.
///
/// Names are kept in lexicographic order so that equal inputs always
/// produce the same output, whatever order they were added in.
///
/// # Example
///
/// ```
/// use jgencode_codegen::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.add("java.util.List");
/// imports.add("java.time.LocalDate");
/// imports.add("java.util.List");
///
/// let names: Vec<&str> = imports.iter().collect();
/// assert_eq!(names, vec!["java.time.LocalDate", "java.util.List"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    names: BTreeSet<String>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully-qualified name. Blank names are ignored.
    pub fn add(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.names.insert(name.to_string());
        }
    }

    /// Keep only the names matching the predicate.
    pub fn retain(&mut self, keep: impl FnMut(&String) -> bool) {
        self.names.retain(keep);
    }

    /// Check if a name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over all names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get the number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<'a> Extend<&'a str> for ImportSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for name in iter {
            self.add(name);
        }
    }
}

impl<'a> FromIterator<&'a str> for ImportSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_set_sorted_and_deduplicated() {
        let mut imports = ImportSet::new();
        imports.add("java.util.Set");
        imports.add("com.acme.Widget");
        imports.add("java.util.Set");
        imports.add("  ");

        assert_eq!(imports.len(), 2);
        let names: Vec<_> = imports.iter().collect();
        assert_eq!(names, vec!["com.acme.Widget", "java.util.Set"]);
    }

    #[test]
    fn test_import_set_order_independent() {
        let a: ImportSet = ["b.B", "a.A", "c.C"].into_iter().collect();
        let b: ImportSet = ["c.C", "b.B", "a.A"].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_import_set_extend_and_retain() {
        let mut a: ImportSet = ["java.util.List"].into_iter().collect();

        a.extend(["com.acme.Widget", "Override"]);
        a.retain(|name| name.contains('.'));

        assert!(a.contains("java.util.List"));
        assert!(a.contains("com.acme.Widget"));
        assert!(!a.contains("Override"));
    }
}
