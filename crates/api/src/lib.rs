//! Types for communication between the client and the remote vocabulary store.
//!
//! The store is addressed through a single URL, the operation is selected with the
//! `command` query parameter and its inputs are passed as further query parameters.

pub mod request;
pub mod response;

/// Public instance of the store.
pub const DEFAULT_API_URL: &str = "https://farskid-vocabapi.web.val.run";

/// Name of the query parameter selecting the operation.
pub const COMMAND_PARAM: &str = "command";

/// Shown when a failure carries no usable reason.
pub const UNKNOWN_FAILURE: &str = "Failed with unknown reason";
