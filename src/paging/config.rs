//! Paging session configuration.

use std::time::Duration;

use twilight_model::channel::message::EmojiReactionType;
use twilight_model::channel::message::component::ButtonStyle;

use super::DEFAULT_TIMEOUT;

/// Visual style for a navigation button.
///
/// Navigation buttons carry a custom ID, not a URL, so the link style is
/// unrepresentable here by construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
}

impl From<NavButtonStyle> for ButtonStyle {
    fn from(style: NavButtonStyle) -> Self {
        match style {
            NavButtonStyle::Primary => ButtonStyle::Primary,
            NavButtonStyle::Secondary => ButtonStyle::Secondary,
            NavButtonStyle::Success => ButtonStyle::Success,
            NavButtonStyle::Danger => ButtonStyle::Danger,
        }
    }
}

/// Configuration for a [`PagedEmbed`](super::PagedEmbed).
///
/// Plain value with consuming fluent setters; fix it up before handing it to
/// the navigator.
#[derive(Clone, Debug)]
pub struct PagedEmbedConfig {
    /// Inactivity window after which the buttons stop working.
    pub timeout: Duration,
    /// Emoji shown on the back button.
    pub left_emoji: EmojiReactionType,
    /// Emoji shown on the forward button.
    pub right_emoji: EmojiReactionType,
    /// Style of the back button.
    pub left_style: NavButtonStyle,
    /// Style of the forward button.
    pub right_style: NavButtonStyle,
    /// Whether to append a `Page i / N` line to every page footer.
    pub show_page_numbers: bool,
    /// Whether navigating past an end cycles to the opposite end.
    pub wrap_around: bool,
    /// Whether each button press restarts the inactivity window.
    pub reset_timer_on_navigate: bool,
}

impl Default for PagedEmbedConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            left_emoji: EmojiReactionType::Unicode {
                name: "◀".to_owned(),
            },
            right_emoji: EmojiReactionType::Unicode {
                name: "▶".to_owned(),
            },
            left_style: NavButtonStyle::Secondary,
            right_style: NavButtonStyle::Secondary,
            show_page_numbers: true,
            wrap_around: false,
            reset_timer_on_navigate: true,
        }
    }
}

impl PagedEmbedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_left_emoji(mut self, emoji: EmojiReactionType) -> Self {
        self.left_emoji = emoji;
        self
    }

    pub fn with_right_emoji(mut self, emoji: EmojiReactionType) -> Self {
        self.right_emoji = emoji;
        self
    }

    pub fn with_left_style(mut self, style: NavButtonStyle) -> Self {
        self.left_style = style;
        self
    }

    pub fn with_right_style(mut self, style: NavButtonStyle) -> Self {
        self.right_style = style;
        self
    }

    pub fn with_show_page_numbers(mut self, show: bool) -> Self {
        self.show_page_numbers = show;
        self
    }

    pub fn with_wrap_around(mut self, wrap: bool) -> Self {
        self.wrap_around = wrap;
        self
    }

    pub fn with_reset_timer_on_navigate(mut self, reset: bool) -> Self {
        self.reset_timer_on_navigate = reset;
        self
    }
}
