//! Paged-embed navigation and emoji helpers for twilight-based Discord bots.
//!
//! The host application owns the gateway connection and feeds events into a
//! shared [`twilight_standby::Standby`]; this crate scopes a component
//! collector to each paged reply it sends.

/// Cache-backed emoji lookup, formatting, and ordered reactions.
pub mod emoji;
/// Typed errors for paged replies and emoji operations.
pub mod error;
/// Button-paged embed navigation.
pub mod paging;
/// Failure-tolerant message mutation helpers.
pub mod safe;

pub use error::PagedEmbedError;
pub use paging::{
    BACK_ID, FORWARD_ID, NavButtonStyle, PagedEmbed, PagedEmbedConfig, PagingContext, ReplyTarget,
};
