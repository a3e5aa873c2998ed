use thiserror::Error;

/// Errors surfaced by paged replies and emoji operations.
///
/// Caller-contract violations (`EmptyPages`, `StartIndexOutOfBounds`,
/// `SessionActive`) are reported before any network call is made. Platform
/// failures are wrapped unchanged; no retry is performed anywhere.
#[derive(Debug, Error)]
pub enum PagedEmbedError {
    /// The page list passed to `send` was empty.
    #[error("page list must contain at least one page")]
    EmptyPages,

    /// The requested start index does not address a page.
    #[error("start index {start_index} is out of bounds for {page_count} pages")]
    StartIndexOutOfBounds {
        start_index: usize,
        page_count: usize,
    },

    /// `send` was called while a previous session is still collecting events.
    #[error("a paging session is already active for this navigator")]
    SessionActive,

    /// A Discord API request failed for a reason other than the target
    /// having vanished.
    #[error("discord api request failed")]
    Http(#[from] twilight_http::Error),

    /// A Discord API response body could not be deserialized.
    #[error("failed to deserialize discord api response")]
    Deserialize(#[from] twilight_http::response::DeserializeBodyError),
}
