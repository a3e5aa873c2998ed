//! Cache-backed emoji lookup, formatting, and ordered reactions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use twilight_http::Client;
use twilight_http::request::channel::reaction::RequestReactionType;
use twilight_model::channel::message::EmojiReactionType;
use twilight_model::guild::Emoji;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, MessageMarker};

use crate::error::PagedEmbedError;

/// Access to the emoji rosters of a possibly sharded bot.
///
/// Implementations search every shard partition and return at most one
/// candidate per partition that has a match, in partition order. An unsharded
/// bot is a single partition. [`find_in_roster`] is the matching rule each
/// partition is expected to apply.
#[async_trait]
pub trait EmojiLookup: Send + Sync {
    async fn search(&self, identifier: &str) -> Vec<Emoji>;
}

/// Match an identifier against one partition's emoji roster.
///
/// Exact match on the emoji snowflake first, else a case-insensitive match
/// on the display name.
pub fn find_in_roster(roster: &[Emoji], identifier: &str) -> Option<Emoji> {
    if let Ok(id) = identifier.parse::<u64>() {
        if let Some(emoji) = roster.iter().find(|emoji| emoji.id.get() == id) {
            return Some(emoji.clone());
        }
    }

    let lowered = identifier.to_lowercase();
    roster
        .iter()
        .find(|emoji| emoji.name.to_lowercase() == lowered)
        .cloned()
}

/// Emoji resolver with a process-lifetime cache.
///
/// The cache is append-only with no invalidation, which is acceptable only
/// because emoji rosters change rarely relative to process lifetime. Create
/// one resolver per process and share it; drop it to discard the cache.
#[derive(Default)]
pub struct EmojiResolver {
    cache: Mutex<HashMap<String, Emoji>>,
}

impl EmojiResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an emoji by ID or name, memoizing the result.
    ///
    /// When several partitions match, the first wins. Returns `None` when no
    /// partition has the identifier; absence is not an error and is not
    /// cached.
    pub async fn resolve(&self, lookup: &dyn EmojiLookup, identifier: &str) -> Option<Emoji> {
        if let Some(hit) = self.cache.lock().await.get(identifier) {
            return Some(hit.clone());
        }

        let found = lookup.search(identifier).await.into_iter().next()?;
        debug!(identifier, emoji_id = found.id.get(), "emoji resolved");

        self.cache
            .lock()
            .await
            .insert(identifier.to_owned(), found.clone());
        Some(found)
    }
}

/// Format an emoji as an inline chat token.
///
/// Animated emojis use the `<a:name:id>` variant. Returns an empty string
/// for an absent emoji; `pad_with_space` wraps the token in single spaces.
pub fn format_emoji(emoji: Option<&Emoji>, pad_with_space: bool) -> String {
    let Some(emoji) = emoji else {
        return String::new();
    };

    let token = if emoji.animated {
        format!("<a:{}:{}>", emoji.name, emoji.id)
    } else {
        format!("<:{}:{}>", emoji.name, emoji.id)
    };

    if pad_with_space {
        format!(" {token} ")
    } else {
        token
    }
}

/// Convert a resolved guild emoji into a component/reaction descriptor.
pub fn reaction_from_emoji(emoji: &Emoji) -> EmojiReactionType {
    EmojiReactionType::Custom {
        animated: emoji.animated,
        id: emoji.id,
        name: Some(emoji.name.clone()),
    }
}

/// Borrow a reaction descriptor as an HTTP reaction request.
pub fn request_reaction(emoji: &EmojiReactionType) -> RequestReactionType<'_> {
    match emoji {
        EmojiReactionType::Custom { id, name, .. } => RequestReactionType::Custom {
            id: *id,
            name: name.as_deref(),
        },
        EmojiReactionType::Unicode { name } => RequestReactionType::Unicode { name },
    }
}

/// React to a message with each emoji in order.
///
/// Each reaction is awaited before the next is issued so the client UI
/// displays them in the given order.
pub async fn react_in_order(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    emojis: &[EmojiReactionType],
) -> Result<(), PagedEmbedError> {
    for emoji in emojis {
        http.create_reaction(channel_id, message_id, &request_reaction(emoji))
            .await?;
    }
    Ok(())
}
