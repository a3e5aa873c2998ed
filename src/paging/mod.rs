//! Button-paged embed navigation.
//!
//! A [`PagedEmbed`] sends a list of pre-built embeds as one reply with
//! back/forward buttons, then collects button presses scoped to that reply
//! until an inactivity window elapses or the caller expires the session.

use std::time::Duration;

/// Inactivity window after which a paging session expires.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(120_000);

mod components;
mod config;
mod navigator;
mod page;
mod state;

pub use components::{BACK_ID, FORWARD_ID};
pub use config::{NavButtonStyle, PagedEmbedConfig};
pub use navigator::{PagedEmbed, PagingContext, ReplyTarget};
