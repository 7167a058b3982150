//! Dataset naming for the staging convention.

use std::fmt;

/// Name of a dataset in the staging convention.
///
/// The name is interpolated verbatim into both conventional paths: the
/// source archive `<landing_root>/<name>.zip` and the destination directory
/// `<raw_root>/<name>/`. Names are operator-supplied and not validated; a
/// name containing path separators derives correspondingly nested paths.
///
/// # Examples
///
/// ```
/// use destage_core::DatasetName;
///
/// let name = DatasetName::from("HHP_release3");
/// assert_eq!(name.as_str(), "HHP_release3");
/// assert_eq!(name.to_string(), "HHP_release3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetName(String);

impl DatasetName {
    /// Creates a dataset name from anything string-like.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DatasetName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for DatasetName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_str() {
        let name = DatasetName::new("HHP_release3");
        assert_eq!(name.as_str(), "HHP_release3");
    }

    #[test]
    fn test_from_str_and_from_string() {
        let from_slice = DatasetName::from("claims_2024");
        let from_owned = DatasetName::from(String::from("claims_2024"));
        assert_eq!(from_slice, from_owned);
    }

    #[test]
    fn test_display_is_verbatim() {
        let name = DatasetName::from("members v2");
        assert_eq!(name.to_string(), "members v2");
    }

    #[test]
    fn test_usable_as_hash_key() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(DatasetName::from("a"));
        seen.insert(DatasetName::from("a"));
        seen.insert(DatasetName::from("b"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_clone_equality() {
        let name = DatasetName::from("HHP_release3");
        assert_eq!(name.clone(), name);
    }
}
