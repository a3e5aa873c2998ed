//! The paged-embed navigator and its session task.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};
use twilight_http::Client;
use twilight_model::application::interaction::{Interaction, InteractionData};
use twilight_model::channel::message::embed::Embed;
use twilight_model::http::attachment::Attachment;
use twilight_model::http::interaction::{InteractionResponse, InteractionResponseType};
use twilight_model::id::Id;
use twilight_model::id::marker::{ApplicationMarker, InteractionMarker};
use twilight_standby::Standby;
use twilight_util::builder::InteractionResponseDataBuilder;

use crate::error::PagedEmbedError;
use crate::safe::{edit_reply_components, update_component_message};

use super::components::{BACK_ID, FORWARD_ID, nav_button_row};
use super::config::PagedEmbedConfig;
use super::page::hydrate_page_numbers;
use super::state::{NavDirection, NavState};

/// Shared handles a paged reply needs from the host bot.
///
/// Cheap to clone; the host feeds its gateway events into the same
/// [`Standby`] so component presses reach the session collector.
#[derive(Clone)]
pub struct PagingContext {
    pub http: Arc<Client>,
    pub standby: Arc<Standby>,
}

impl PagingContext {
    pub fn new(http: Arc<Client>, standby: Arc<Standby>) -> Self {
        Self { http, standby }
    }
}

/// The command interaction a paged reply responds to.
#[derive(Clone, Debug)]
pub struct ReplyTarget {
    pub application_id: Id<ApplicationMarker>,
    pub interaction_id: Id<InteractionMarker>,
    pub token: String,
}

impl From<&Interaction> for ReplyTarget {
    fn from(interaction: &Interaction) -> Self {
        Self {
            application_id: interaction.application_id,
            interaction_id: interaction.id,
            token: interaction.token.clone(),
        }
    }
}

struct SessionHandle {
    cancel: CancellationToken,
    reset: mpsc::UnboundedSender<Duration>,
}

/// Sends a list of embeds as one reply with back/forward buttons.
///
/// At most one session is active per navigator; a second `send` while the
/// first is still collecting is rejected. Once a session ends, the same
/// navigator can send again.
pub struct PagedEmbed {
    config: PagedEmbedConfig,
    session: Mutex<Option<SessionHandle>>,
}

impl Default for PagedEmbed {
    fn default() -> Self {
        Self::new()
    }
}

impl PagedEmbed {
    pub fn new() -> Self {
        Self::with_config(PagedEmbedConfig::default())
    }

    pub fn with_config(config: PagedEmbedConfig) -> Self {
        Self {
            config,
            session: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &PagedEmbedConfig {
        &self.config
    }

    /// Send the paged reply and start collecting button presses.
    ///
    /// Fails with [`PagedEmbedError::EmptyPages`] or
    /// [`PagedEmbedError::StartIndexOutOfBounds`] before any network call. A
    /// single page is sent as a static reply with no buttons and no
    /// collector. Otherwise the session runs until the inactivity window
    /// elapses or [`expire`](Self::expire) is called, then renders the
    /// buttons disabled one final time.
    pub async fn send(
        &self,
        ctx: &PagingContext,
        target: &ReplyTarget,
        mut pages: Vec<Embed>,
        attachments: Vec<Attachment>,
        start_index: usize,
    ) -> Result<(), PagedEmbedError> {
        if pages.is_empty() {
            return Err(PagedEmbedError::EmptyPages);
        }
        if start_index >= pages.len() {
            return Err(PagedEmbedError::StartIndexOutOfBounds {
                start_index,
                page_count: pages.len(),
            });
        }

        if self.config.show_page_numbers {
            hydrate_page_numbers(&mut pages);
        }

        if pages.len() == 1 {
            let mut data = InteractionResponseDataBuilder::new().embeds(pages);
            if !attachments.is_empty() {
                data = data.attachments(attachments);
            }
            let response = InteractionResponse {
                kind: InteractionResponseType::ChannelMessageWithSource,
                data: Some(data.build()),
            };
            ctx.http
                .interaction(target.application_id)
                .create_response(target.interaction_id, &target.token, &response)
                .await?;
            return Ok(());
        }

        // Reserve the session slot before touching the network so a
        // concurrent send cannot end up with two collectors.
        let cancel = CancellationToken::new();
        let (reset_tx, reset_rx) = mpsc::unbounded_channel();
        {
            let mut guard = self.lock_session();
            if guard
                .as_ref()
                .is_some_and(|handle| !handle.cancel.is_cancelled())
            {
                return Err(PagedEmbedError::SessionActive);
            }
            *guard = Some(SessionHandle {
                cancel: cancel.clone(),
                reset: reset_tx,
            });
        }

        let state = NavState::new(start_index, pages.len(), self.config.wrap_around);
        let row = nav_button_row(&state, &self.config, false);

        let mut data = InteractionResponseDataBuilder::new()
            .embeds([pages[start_index].clone()])
            .components([row]);
        if !attachments.is_empty() {
            data = data.attachments(attachments);
        }
        let response = InteractionResponse {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(data.build()),
        };

        let initial = async {
            ctx.http
                .interaction(target.application_id)
                .create_response(target.interaction_id, &target.token, &response)
                .await?;
            let message = ctx
                .http
                .interaction(target.application_id)
                .response(&target.token)
                .await?
                .model()
                .await?;
            Ok::<_, PagedEmbedError>(message)
        };

        let message = match initial.await {
            Ok(message) => message,
            Err(source) => {
                cancel.cancel();
                *self.lock_session() = None;
                return Err(source);
            }
        };

        let events = ctx
            .standby
            .wait_for_component_stream(message.id, |interaction: &Interaction| {
                matches!(
                    interaction.data.as_ref(),
                    Some(InteractionData::MessageComponent(data))
                        if data.custom_id == BACK_ID || data.custom_id == FORWARD_ID
                )
            });

        let session = Session {
            http: Arc::clone(&ctx.http),
            config: self.config.clone(),
            pages,
            state,
            cancel,
            reset_rx,
            application_id: target.application_id,
            reply_token: target.token.clone(),
        };
        tokio::spawn(session.run(events));

        Ok(())
    }

    /// Stop the active session, disabling its buttons.
    ///
    /// Idempotent; a no-op when no session is active.
    pub fn expire(&self) {
        if let Some(handle) = self.lock_session().as_ref() {
            handle.cancel.cancel();
        }
    }

    /// Restart the active session's inactivity window.
    ///
    /// Uses `new_timeout` when given, else the configured timeout. A no-op
    /// when no session is active.
    pub fn reset_timer(&self, new_timeout: Option<Duration>) {
        if let Some(handle) = self.lock_session().as_ref() {
            if !handle.cancel.is_cancelled() {
                let _ = handle
                    .reset
                    .send(new_timeout.unwrap_or(self.config.timeout));
            }
        }
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, Option<SessionHandle>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct Session {
    http: Arc<Client>,
    config: PagedEmbedConfig,
    pages: Vec<Embed>,
    state: NavState,
    cancel: CancellationToken,
    reset_rx: mpsc::UnboundedReceiver<Duration>,
    application_id: Id<ApplicationMarker>,
    reply_token: String,
}

impl Session {
    async fn run(mut self, events: impl futures_util::Stream<Item = Interaction>) {
        debug!(
            pages = self.pages.len(),
            timeout_ms = self.config.timeout.as_millis() as u64,
            "paging session started"
        );

        tokio::pin!(events);
        let timer = sleep(self.config.timeout);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                () = self.cancel.cancelled() => break,
                () = &mut timer => break,
                Some(window) = self.reset_rx.recv() => {
                    timer.as_mut().reset(Instant::now() + window);
                }
                event = events.next() => {
                    let Some(interaction) = event else { break };
                    if self.config.reset_timer_on_navigate {
                        timer.as_mut().reset(Instant::now() + self.config.timeout);
                    }

                    let Some(direction) = nav_direction(&interaction) else {
                        continue;
                    };
                    self.state.apply(direction);

                    let row = nav_button_row(&self.state, &self.config, false);
                    let page = self.pages[self.state.index()].clone();
                    if let Err(source) =
                        update_component_message(&self.http, &interaction, &[page], &[row]).await
                    {
                        error!(?source, "paged embed update failed");
                        break;
                    }
                }
            }
        }

        let row = nav_button_row(&self.state, &self.config, true);
        if let Err(source) =
            edit_reply_components(&self.http, self.application_id, &self.reply_token, &[row]).await
        {
            error!(?source, "failed to disable paging buttons");
        }

        // Marks the session finished so the navigator can send again.
        self.cancel.cancel();
        debug!(index = self.state.index(), "paging session ended");
    }
}

fn nav_direction(interaction: &Interaction) -> Option<NavDirection> {
    let InteractionData::MessageComponent(data) = interaction.data.as_ref()? else {
        return None;
    };
    match data.custom_id.as_str() {
        BACK_ID => Some(NavDirection::Back),
        FORWARD_ID => Some(NavDirection::Forward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use futures_util::stream;
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;
    use twilight_http::Client;
    use twilight_model::channel::message::embed::Embed;
    use twilight_model::id::Id;
    use twilight_standby::Standby;

    use super::super::config::PagedEmbedConfig;
    use super::super::state::NavState;
    use super::{PagedEmbed, PagingContext, ReplyTarget, Session, SessionHandle};
    use crate::error::PagedEmbedError;

    // Short request timeout keeps tests that reach the network bounded.
    fn offline_client() -> Arc<Client> {
        Arc::new(
            Client::builder()
                .token("token".to_owned())
                .timeout(Duration::from_millis(250))
                .build(),
        )
    }

    fn offline_context() -> PagingContext {
        PagingContext::new(offline_client(), Arc::new(Standby::new()))
    }

    fn target() -> ReplyTarget {
        ReplyTarget {
            application_id: Id::new(1),
            interaction_id: Id::new(2),
            token: "interaction-token".to_owned(),
        }
    }

    fn page() -> Embed {
        Embed {
            author: None,
            color: None,
            description: Some("content".to_owned()),
            fields: Vec::new(),
            footer: None,
            image: None,
            kind: "rich".to_owned(),
            provider: None,
            thumbnail: None,
            timestamp: None,
            title: None,
            url: None,
            video: None,
        }
    }

    #[tokio::test]
    async fn empty_page_list_is_rejected_before_any_request() {
        let paged = PagedEmbed::new();

        let result = paged
            .send(&offline_context(), &target(), Vec::new(), Vec::new(), 0)
            .await;

        assert!(matches!(result, Err(PagedEmbedError::EmptyPages)));
    }

    #[tokio::test]
    async fn out_of_bounds_start_index_is_rejected() {
        let paged = PagedEmbed::new();

        let result = paged
            .send(
                &offline_context(),
                &target(),
                vec![page(), page()],
                Vec::new(),
                2,
            )
            .await;

        assert!(matches!(
            result,
            Err(PagedEmbedError::StartIndexOutOfBounds {
                start_index: 2,
                page_count: 2,
            })
        ));
    }

    #[tokio::test]
    async fn send_is_rejected_while_a_session_is_active() {
        let paged = PagedEmbed::new();
        let (reset_tx, _reset_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        *paged.lock_session() = Some(SessionHandle {
            cancel: cancel.clone(),
            reset: reset_tx,
        });

        let result = paged
            .send(
                &offline_context(),
                &target(),
                vec![page(), page()],
                Vec::new(),
                0,
            )
            .await;
        assert!(matches!(result, Err(PagedEmbedError::SessionActive)));

        // A finished session no longer blocks the navigator.
        cancel.cancel();
        let result = paged
            .send(
                &offline_context(),
                &target(),
                vec![page(), page()],
                Vec::new(),
                0,
            )
            .await;
        assert!(!matches!(result, Err(PagedEmbedError::SessionActive)));
    }

    #[tokio::test]
    async fn timeout_with_no_events_ends_the_session() {
        let (_reset_tx, reset_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let session = Session {
            http: offline_client(),
            config: PagedEmbedConfig::default().with_timeout(Duration::from_millis(5)),
            pages: vec![page(), page()],
            state: NavState::new(1, 2, false),
            cancel: cancel.clone(),
            reset_rx,
            application_id: Id::new(1),
            reply_token: "interaction-token".to_owned(),
        };

        // No events ever arrive; the inactivity window alone must end the
        // session, after which the token reads cancelled so the navigator
        // can send again. The final disabling edit failing against the
        // offline client is tolerated.
        tokio::time::timeout(Duration::from_secs(5), session.run(stream::pending()))
            .await
            .expect("session should end once the inactivity window elapses");
        assert!(cancel.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_token_ends_the_session_before_the_window() {
        let (_reset_tx, reset_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let session = Session {
            http: offline_client(),
            config: PagedEmbedConfig::default(),
            pages: vec![page(), page()],
            state: NavState::new(0, 2, false),
            cancel: cancel.clone(),
            reset_rx,
            application_id: Id::new(1),
            reply_token: "interaction-token".to_owned(),
        };

        cancel.cancel();

        // The configured window is two minutes; completing well inside five
        // seconds proves cancellation tore the collector down.
        tokio::time::timeout(Duration::from_secs(5), session.run(stream::pending()))
            .await
            .expect("cancelled session should end immediately");
        assert!(cancel.is_cancelled());
    }

    #[test]
    fn expire_without_a_session_is_a_no_op() {
        let paged = PagedEmbed::new();
        paged.expire();
        paged.expire();
    }

    #[test]
    fn reset_timer_without_a_session_is_a_no_op() {
        let paged = PagedEmbed::new();
        paged.reset_timer(None);
        paged.reset_timer(Some(Duration::from_secs(30)));
    }
}
