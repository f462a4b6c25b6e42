//! Client side of vocab: the store boundary, its HTTP implementation and the view model.

pub mod client;
pub mod error;
pub mod store;
pub mod view_model;

pub use client::Client;
pub use error::{ClientError, ClientResult};
pub use reqwest::Url;
pub use store::VocabStore;
pub use view_model::{Signal, VocabularyViewModel};
