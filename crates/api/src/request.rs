//! Request parameters for each store command.
//!
//! All of these are serialized into the query string next to the `command` parameter,
//! except [`ImportVocabs`] whose CSV is sent as the request body.

use serde::Serialize;
use std::borrow::Cow;
use vocab_core::{BulkImport, NewVocabulary, TagDeletion, TagRename, Tags};

/// Associates a request with the value of its `command` parameter.
pub trait Command {
    const NAME: &'static str;
}

/// Lists every vocabulary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetAllVocabs {}

impl Command for GetAllVocabs {
    const NAME: &'static str = "getAllVocabs";
}

#[derive(Debug, Clone, Serialize)]
pub struct AddVocab<'a> {
    pub word: Cow<'a, str>,
    pub eng: Cow<'a, str>,
    pub fa: Cow<'a, str>,
    /// JSON-encoded array of strings.
    pub tags: String,
}

impl Command for AddVocab<'_> {
    const NAME: &'static str = "addVocab";
}

impl<'a> From<&'a NewVocabulary> for AddVocab<'a> {
    fn from(new: &'a NewVocabulary) -> Self {
        Self {
            word: new.word().into(),
            eng: new.english().into(),
            fa: new.farsi().into(),
            tags: encode_tags(new.tags()),
        }
    }
}

/// Replaces every field of the vocabulary identified by `word`.
#[derive(Debug, Clone, Serialize)]
pub struct EditVocab<'a> {
    pub word: Cow<'a, str>,
    pub eng: Cow<'a, str>,
    pub fa: Cow<'a, str>,
    /// JSON-encoded array of strings.
    pub tags: String,
}

impl Command for EditVocab<'_> {
    const NAME: &'static str = "editVocab";
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteVocab<'a> {
    pub word: Cow<'a, str>,
}

impl Command for DeleteVocab<'_> {
    const NAME: &'static str = "deleteVocab";
}

/// CSV with the columns `word,eng,fa,tags`, sent as the body.
#[derive(Debug, Clone)]
pub struct ImportVocabs<'a> {
    pub csv: Cow<'a, str>,
}

impl Command for ImportVocabs<'_> {
    const NAME: &'static str = "importVocabs";
}

impl<'a> From<&'a BulkImport> for ImportVocabs<'a> {
    fn from(import: &'a BulkImport) -> Self {
        Self {
            csv: import.csv().into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameTag<'a> {
    pub old_tag: Cow<'a, str>,
    pub new_tag: Cow<'a, str>,
}

impl Command for RenameTag<'_> {
    const NAME: &'static str = "renameTag";
}

impl<'a> From<&'a TagRename> for RenameTag<'a> {
    fn from(rename: &'a TagRename) -> Self {
        Self {
            old_tag: rename.old().into(),
            new_tag: rename.new_name().into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteTag<'a> {
    pub tag: Cow<'a, str>,
}

impl Command for DeleteTag<'_> {
    const NAME: &'static str = "deleteTag";
}

impl<'a> From<&'a TagDeletion> for DeleteTag<'a> {
    fn from(deletion: &'a TagDeletion) -> Self {
        Self {
            tag: deletion.tag().into(),
        }
    }
}

/// Encodes tags the way the store expects them, `["nature","object"]`.
pub fn encode_tags(tags: &Tags) -> String {
    let tags = tags.iter().map(String::from).collect::<Vec<_>>();
    serde_json::Value::from(tags).to_string()
}
