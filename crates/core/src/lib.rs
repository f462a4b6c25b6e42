//! vocab core types and functions.
//!
//! Everything here is pure: the derivations are recomputed from a slice of records
//! whenever they are needed and never cached.

pub mod input;
pub mod search;
pub mod tags;
pub mod vocabulary;

pub use input::{
    BulkImport, Confirm, Confirmed, NewVocabulary, TagDeletion, TagRename, ValidationError,
    VocabularyEdit,
};
pub use search::{matches, search};
pub use tags::{tag_summary, tag_usage_count, unique_tags, TagUsage};
pub use vocabulary::{Tags, Vocabulary};
