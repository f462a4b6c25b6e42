//! Case-insensitive search over the collection.

use crate::vocabulary::Vocabulary;

/// Checks whether the word, either translation or any tag contains `query`, ignoring case.
pub fn matches(record: &Vocabulary, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    matches_lowercase(record, &query)
}

// expects an already lowercased query
fn matches_lowercase(record: &Vocabulary, query: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(query);
    contains(&record.word)
        || contains(&record.translation_english)
        || contains(&record.translation_farsi)
        || record.tags.iter().any(contains)
}

/// Returns the matching records in collection order. An empty query matches everything.
pub fn search<'a>(records: &'a [Vocabulary], query: &str) -> Vec<&'a Vocabulary> {
    let query = query.trim().to_lowercase();
    records
        .iter()
        .filter(|r| matches_lowercase(r, &query))
        .collect()
}
