//! The vocabulary record and its tag set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{btree_set, BTreeSet};

/// A single vocabulary entry as held in the local snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// The natural key of the record.
    pub word: String,
    pub translation_english: String,
    pub translation_farsi: String,
    /// Set by the store.
    pub added_at: Option<DateTime<Utc>>,
    /// Set by the store.
    pub last_edited_at: Option<DateTime<Utc>>,
    pub tags: Tags,
}

impl Vocabulary {
    /// Creates a record without store-assigned timestamps.
    pub fn new(
        word: impl Into<String>,
        translation_english: impl Into<String>,
        translation_farsi: impl Into<String>,
        tags: Tags,
    ) -> Self {
        Self {
            word: word.into(),
            translation_english: translation_english.into(),
            translation_farsi: translation_farsi.into(),
            added_at: None,
            last_edited_at: None,
            tags,
        }
    }
}

/// A set of tags, iterated in a stable (lexicographic) order.
///
/// Tags are trimmed on insertion and blank tags are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct Tags(BTreeSet<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma separated list such as `"nature, object"`.
    pub fn parse_list(list: &str) -> Self {
        list.split(',').collect()
    }

    /// Returns `false` if the tag was blank or already present.
    pub fn insert(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            return false;
        }
        self.0.insert(tag.to_string())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Joins the tags for display, `"nature, object"`.
    pub fn join(&self, separator: &str) -> String {
        self.iter().collect::<Vec<_>>().join(separator)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Tags::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl IntoIterator for Tags {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_tag_list() {
        let tags = Tags::parse_list(" nature,object , nature,, ");
        assert_eq!(tags.iter().collect::<Vec<_>>(), ["nature", "object"]);
    }

    #[test]
    fn parses_empty_list() {
        assert!(Tags::parse_list("").is_empty());
        assert!(Tags::parse_list(" , ").is_empty());
    }

    #[test]
    fn drops_duplicates_and_blanks() {
        let mut tags = Tags::new();
        assert!(tags.insert("sky"));
        assert!(!tags.insert(" sky "));
        assert!(!tags.insert("   "));
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("sky"));
    }

    #[test]
    fn deserializes_through_insert() {
        let tags = serde_json::from_str::<Tags>(r#"["", " sky ", "sky", "  "]"#).unwrap();
        assert_eq!(tags.iter().collect::<Vec<_>>(), ["sky"]);

        let record = serde_json::from_str::<Vocabulary>(
            r#"{"word":"sky","translation_english":"sky","translation_farsi":"آسمان",
                "added_at":null,"last_edited_at":null,"tags":[" nature",""]}"#,
        )
        .unwrap();
        assert_eq!(record.tags.join(","), "nature");
    }

    #[test]
    fn iterates_in_stable_order() {
        let tags = ["verb", "animal", "colour"].into_iter().collect::<Tags>();
        assert_eq!(tags.join(", "), "animal, colour, verb");
    }
}
