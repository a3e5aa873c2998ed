//! Mutation helpers that tolerate the target having vanished.
//!
//! Editing a paged reply races with message deletion and interaction expiry.
//! The two helpers here swallow exactly the Discord error codes meaning "the
//! target no longer exists" and re-raise everything else unchanged.

use tracing::debug;
use twilight_http::Client;
use twilight_http::api_error::ApiError;
use twilight_http::error::ErrorType;
use twilight_model::application::interaction::Interaction;
use twilight_model::channel::message::Component;
use twilight_model::channel::message::embed::Embed;
use twilight_model::http::interaction::{InteractionResponse, InteractionResponseType};
use twilight_model::id::Id;
use twilight_model::id::marker::ApplicationMarker;
use twilight_util::builder::InteractionResponseDataBuilder;

use crate::error::PagedEmbedError;

/// Discord API error code for editing a message that no longer exists.
pub const UNKNOWN_MESSAGE: u64 = 10008;
/// Discord API error code for responding to an expired interaction.
pub const UNKNOWN_INTERACTION: u64 = 10062;

/// Error codes meaning the mutation target vanished out from under us.
pub const TARGET_VANISHED: [u64; 2] = [UNKNOWN_MESSAGE, UNKNOWN_INTERACTION];

/// Extract the Discord API error code from an HTTP error, if it carries one.
fn api_error_code(error: &twilight_http::Error) -> Option<u64> {
    match error.kind() {
        ErrorType::Response {
            error: ApiError::General(general),
            ..
        } => Some(general.code),
        _ => None,
    }
}

/// Whether an API error code is in the ignorable set.
pub fn is_ignorable(code: Option<u64>, ignorable: &[u64]) -> bool {
    code.is_some_and(|code| ignorable.contains(&code))
}

/// Swallow a vanished-target error, re-raising anything else.
fn filter_vanished(error: twilight_http::Error) -> Result<(), PagedEmbedError> {
    if is_ignorable(api_error_code(&error), &TARGET_VANISHED) {
        debug!(?error, "mutation target vanished, ignoring");
        Ok(())
    } else {
        Err(error.into())
    }
}

/// Update the message a component interaction was fired on.
///
/// Swallows the error if the interaction or message vanished first.
pub async fn update_component_message(
    http: &Client,
    interaction: &Interaction,
    embeds: &[Embed],
    components: &[Component],
) -> Result<(), PagedEmbedError> {
    let response = InteractionResponse {
        kind: InteractionResponseType::UpdateMessage,
        data: Some(
            InteractionResponseDataBuilder::new()
                .embeds(embeds.to_vec())
                .components(components.to_vec())
                .build(),
        ),
    };

    let result = http
        .interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(source) => filter_vanished(source),
    }
}

/// Edit the components of a previously sent interaction reply.
///
/// Swallows the error if the reply vanished first.
pub async fn edit_reply_components(
    http: &Client,
    application_id: Id<ApplicationMarker>,
    interaction_token: &str,
    components: &[Component],
) -> Result<(), PagedEmbedError> {
    let result = http
        .interaction(application_id)
        .update_response(interaction_token)
        .components(Some(components))
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(source) => filter_vanished(source),
    }
}
