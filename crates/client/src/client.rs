//! HTTP client for communicating with the store.

use crate::{
    error::{ClientError, ClientResult},
    store::VocabStore,
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, RequestBuilder, Response, Url};
use serde::Serialize;
use vocab_api::{
    request::{self as req, Command},
    response as res, COMMAND_PARAM,
};
use vocab_core::Vocabulary;

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

/// Non-API methods
impl Client {
    pub fn new(base_url: Url) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn get<C>(&self, params: &C) -> RequestBuilder
    where
        C: Command + Serialize,
    {
        self.http
            .get(self.base_url.clone())
            .query(&[(COMMAND_PARAM, C::NAME)])
            .query(params)
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let res = request.send().await.map_err(|err| {
            tracing::warn!("Failed to reach the store: {err}");
            ClientError::from(err)
        })?;
        assert_success(res).await
    }
}

async fn assert_success(res: Response) -> ClientResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let bytes = res.bytes().await.unwrap_or_default();
    let message = res::Error::message_from_body(&bytes);
    tracing::warn!("Store returned HTTP {status}: {message:?}");
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

fn decode_records(bytes: &[u8]) -> ClientResult<Vec<Vocabulary>> {
    let records = serde_json::from_slice::<Vec<res::Vocabulary>>(bytes)?;
    let records = records
        .into_iter()
        .map(Vocabulary::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// API methods
#[async_trait]
impl VocabStore for Client {
    async fn list(&self) -> ClientResult<Vec<Vocabulary>> {
        tracing::info!("Fetching vocabulary");

        let res = self.send(self.get(&req::GetAllVocabs {})).await?;
        let bytes = res.bytes().await?;
        let records = decode_records(&bytes)?;

        tracing::info!("Fetched {} vocabulary", records.len());
        Ok(records)
    }

    async fn add(&self, add: &req::AddVocab<'_>) -> ClientResult<Option<Vocabulary>> {
        tracing::info!("Adding new word {}", add.word);

        let res = self.send(self.get(add)).await?;
        let bytes = res.bytes().await?;
        // the word is stored by now, so a body that doesn't decode only means a reload
        let created = match serde_json::from_slice::<res::Vocabulary>(&bytes) {
            Ok(created) => match Vocabulary::try_from(created) {
                Ok(created) => Some(created),
                Err(err) => {
                    tracing::warn!("Ignoring malformed record in add response: {err}");
                    None
                }
            },
            Err(err) => {
                tracing::debug!("No record in add response: {err}");
                None
            }
        };

        tracing::info!("Added {}", add.word);
        Ok(created)
    }

    async fn edit(&self, edit: &req::EditVocab<'_>) -> ClientResult<()> {
        tracing::info!("Updating {}", edit.word);

        self.send(self.get(edit)).await?;

        tracing::info!("Updated {}", edit.word);
        Ok(())
    }

    async fn delete(&self, delete: &req::DeleteVocab<'_>) -> ClientResult<()> {
        tracing::info!("Deleting {}", delete.word);

        self.send(self.get(delete)).await?;

        tracing::info!("Deleted {}", delete.word);
        Ok(())
    }

    async fn import(&self, import: &req::ImportVocabs<'_>) -> ClientResult<()> {
        tracing::info!("Importing {} bytes of CSV", import.csv.len());

        let request = self
            .http
            .post(self.base_url.clone())
            .query(&[(COMMAND_PARAM, <req::ImportVocabs<'_> as Command>::NAME)])
            .header(CONTENT_TYPE, "text/csv")
            .body(import.csv.to_string());
        self.send(request).await?;

        tracing::info!("Imported CSV");
        Ok(())
    }

    async fn rename_tag(&self, rename: &req::RenameTag<'_>) -> ClientResult<()> {
        tracing::info!("Renaming tag {} to {}", rename.old_tag, rename.new_tag);

        self.send(self.get(rename)).await?;

        tracing::info!("Renamed tag {} to {}", rename.old_tag, rename.new_tag);
        Ok(())
    }

    async fn delete_tag(&self, delete: &req::DeleteTag<'_>) -> ClientResult<()> {
        tracing::info!("Deleting tag {}", delete.tag);

        self.send(self.get(delete)).await?;

        tracing::info!("Deleted tag {}", delete.tag);
        Ok(())
    }
}
