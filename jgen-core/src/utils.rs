//! Shared string helpers for the renderers.

use std::path::PathBuf;

/// Upper-case the first character, leaving the rest untouched
/// (e.g., "firstName" -> "FirstName", "_id" -> "_id").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// True when the string is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Convert a dotted package name to a relative directory path
/// (e.g., "com.acme.model" -> "com/acme/model").
///
/// A blank package maps to an empty path.
pub fn package_path(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Split a dotted name at its last dot into `(package, simple_name)`.
///
/// Names without a dot have an empty package.
pub fn split_qualified(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => ("", name),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("age"), "Age");
        assert_eq!(capitalize("firstName"), "FirstName");
        assert_eq!(capitalize("_id"), "_id");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_package_path() {
        assert_eq!(
            package_path("com.acme.model"),
            Path::new("com").join("acme").join("model")
        );
        assert_eq!(package_path("single"), Path::new("single"));
        assert_eq!(package_path(""), PathBuf::new());
    }

    #[test]
    fn test_split_qualified() {
        assert_eq!(split_qualified("java.util.List"), ("java.util", "List"));
        assert_eq!(split_qualified("List"), ("", "List"));
    }
}
