//! Tag index derivations over a collection of records.

use crate::vocabulary::Vocabulary;
use serde::Serialize;
use std::collections::BTreeSet;

/// A tag and the number of records carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagUsage<'a> {
    pub tag: &'a str,
    pub count: usize,
}

/// The union of every record's tags.
pub fn unique_tags(records: &[Vocabulary]) -> BTreeSet<&str> {
    records.iter().flat_map(|r| r.tags.iter()).collect()
}

/// The number of records whose tag set contains `tag`.
pub fn tag_usage_count(records: &[Vocabulary], tag: &str) -> usize {
    records.iter().filter(|r| r.tags.contains(tag)).count()
}

/// Every unique tag with its usage count, in tag order.
pub fn tag_summary(records: &[Vocabulary]) -> Vec<TagUsage<'_>> {
    unique_tags(records)
        .into_iter()
        .map(|tag| TagUsage {
            tag,
            count: tag_usage_count(records, tag),
        })
        .collect()
}
