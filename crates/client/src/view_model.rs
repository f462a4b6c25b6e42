//! The vocabulary view model.
//!
//! Owns the local snapshot of the store's records. The snapshot is only ever replaced
//! wholesale by a successful [`VocabularyViewModel::load`] or adjusted after the store
//! has confirmed a mutation, so a failed operation always leaves it as it was.

use crate::{error::ClientResult, store::VocabStore};
use std::collections::BTreeSet;
use vocab_api::request::{self as req, encode_tags};
use vocab_core::{
    BulkImport, Confirmed, NewVocabulary, TagDeletion, TagRename, TagUsage, ValidationError,
    Vocabulary, VocabularyEdit,
};

/// What the presentation layer should do after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    CloseAddForm,
    CloseEditForm,
    Removed,
    ClearImport,
    Refreshed,
}

pub struct VocabularyViewModel<S> {
    store: S,
    snapshot: Vec<Vocabulary>,
    loaded: bool,
    staged_import: String,
}

/// Lifecycle and reads
impl<S> VocabularyViewModel<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            snapshot: Vec::new(),
            loaded: false,
            staged_import: String::new(),
        }
    }

    /// Drops the snapshot and hands the store back.
    pub fn dispose(self) -> S {
        self.store
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn vocabulary(&self) -> &[Vocabulary] {
        &self.snapshot
    }

    pub fn get(&self, word: &str) -> Option<&Vocabulary> {
        self.snapshot.iter().find(|v| v.word == word)
    }

    /// Whether a load has succeeded at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn search(&self, query: &str) -> Vec<&Vocabulary> {
        vocab_core::search(&self.snapshot, query)
    }

    pub fn unique_tags(&self) -> BTreeSet<&str> {
        vocab_core::unique_tags(&self.snapshot)
    }

    pub fn tag_usage_count(&self, tag: &str) -> usize {
        vocab_core::tag_usage_count(&self.snapshot, tag)
    }

    pub fn tag_summary(&self) -> Vec<TagUsage<'_>> {
        vocab_core::tag_summary(&self.snapshot)
    }

    /// Keeps CSV text around until an import with it succeeds.
    pub fn stage_import(&mut self, csv: impl Into<String>) {
        self.staged_import = csv.into();
    }

    pub fn staged_import(&self) -> &str {
        &self.staged_import
    }

    fn upsert(&mut self, record: Vocabulary) {
        match self.snapshot.iter_mut().find(|v| v.word == record.word) {
            Some(existing) => *existing = record,
            None => self.snapshot.push(record),
        }
    }
}

/// Store operations
impl<S: VocabStore> VocabularyViewModel<S> {
    /// Replaces the snapshot with the store's current records.
    pub async fn load(&mut self) -> ClientResult<()> {
        let records = self.store.list().await?;
        tracing::debug!("Replacing snapshot of {} with {}", self.snapshot.len(), records.len());
        self.snapshot = records;
        self.loaded = true;
        Ok(())
    }

    pub async fn add(&mut self, new: NewVocabulary) -> ClientResult<Signal> {
        let created = self.store.add(&req::AddVocab::from(&new)).await?;
        match created {
            Some(record) => {
                tracing::debug!("Appending {} from the store's response", record.word);
                self.upsert(record);
            }
            None => self.load().await?,
        }
        Ok(Signal::CloseAddForm)
    }

    /// Fields left unset in `edit` are sent with their current values.
    pub async fn edit(&mut self, edit: VocabularyEdit) -> ClientResult<Signal> {
        edit.validate()?;
        {
            let current = self
                .get(edit.word())
                .ok_or_else(|| ValidationError::UnknownWord(edit.word().to_string()))?;
            let request = req::EditVocab {
                word: edit.word().into(),
                eng: edit
                    .new_english()
                    .unwrap_or(&current.translation_english)
                    .into(),
                fa: edit.new_farsi().unwrap_or(&current.translation_farsi).into(),
                tags: encode_tags(edit.new_tags().unwrap_or(&current.tags)),
            };
            self.store.edit(&request).await?;
        }
        self.load().await?;
        Ok(Signal::CloseEditForm)
    }

    pub async fn remove(&mut self, word: &str) -> ClientResult<Signal> {
        let word = word.trim();
        if word.is_empty() {
            return Err(ValidationError::Empty { field: "word" }.into());
        }
        self.store
            .delete(&req::DeleteVocab { word: word.into() })
            .await?;
        self.snapshot.retain(|v| v.word != word);
        Ok(Signal::Removed)
    }

    /// Stages `csv` and imports it.
    pub async fn import_bulk(&mut self, csv: impl Into<String>) -> ClientResult<Signal> {
        self.stage_import(csv);
        self.import_staged().await
    }

    /// Imports the staged CSV. The staged text is only cleared once the store accepts it.
    pub async fn import_staged(&mut self) -> ClientResult<Signal> {
        let import = BulkImport::new(self.staged_import.as_str())?;
        self.store.import(&req::ImportVocabs::from(&import)).await?;
        self.staged_import.clear();
        self.load().await?;
        Ok(Signal::ClearImport)
    }

    pub async fn rename_tag(&mut self, rename: Confirmed<TagRename>) -> ClientResult<Signal> {
        self.store.rename_tag(&req::RenameTag::from(&*rename)).await?;
        self.load().await?;
        Ok(Signal::Refreshed)
    }

    pub async fn delete_tag(&mut self, deletion: Confirmed<TagDeletion>) -> ClientResult<Signal> {
        self.store
            .delete_tag(&req::DeleteTag::from(&*deletion))
            .await?;
        self.load().await?;
        Ok(Signal::Refreshed)
    }
}
