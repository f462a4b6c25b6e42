//! The boundary to the remote vocabulary store.

use crate::error::ClientResult;
use async_trait::async_trait;
use vocab_api::request as req;
use vocab_core::Vocabulary;

/// Operations offered by the store. Each call is a single attempt.
#[async_trait]
pub trait VocabStore {
    async fn list(&self) -> ClientResult<Vec<Vocabulary>>;

    /// Returns the created record if the store sent one back.
    async fn add(&self, add: &req::AddVocab<'_>) -> ClientResult<Option<Vocabulary>>;

    async fn edit(&self, edit: &req::EditVocab<'_>) -> ClientResult<()>;

    async fn delete(&self, delete: &req::DeleteVocab<'_>) -> ClientResult<()>;

    async fn import(&self, import: &req::ImportVocabs<'_>) -> ClientResult<()>;

    async fn rename_tag(&self, rename: &req::RenameTag<'_>) -> ClientResult<()>;

    async fn delete_tag(&self, delete: &req::DeleteTag<'_>) -> ClientResult<()>;
}
