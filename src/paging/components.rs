//! Navigation button row construction.

use twilight_model::channel::message::component::{ActionRow, Button, Component};

use super::config::PagedEmbedConfig;
use super::state::NavState;

/// Custom ID carried by the back button.
pub const BACK_ID: &str = "back";
/// Custom ID carried by the forward button.
pub const FORWARD_ID: &str = "forward";

/// Build the navigation row for the current cursor position.
///
/// Buttons follow the visibility rule in [`NavState`]; a row with zero
/// buttons is valid. `disabled` renders the visible buttons unclickable,
/// used for the final update when a session expires.
pub(crate) fn nav_button_row(
    state: &NavState,
    config: &PagedEmbedConfig,
    disabled: bool,
) -> Component {
    let mut buttons = Vec::with_capacity(2);

    if state.shows_back() {
        buttons.push(Component::Button(Button {
            id: None,
            custom_id: Some(BACK_ID.to_owned()),
            disabled,
            emoji: Some(config.left_emoji.clone()),
            label: None,
            style: config.left_style.into(),
            url: None,
            sku_id: None,
        }));
    }

    if state.shows_forward() {
        buttons.push(Component::Button(Button {
            id: None,
            custom_id: Some(FORWARD_ID.to_owned()),
            disabled,
            emoji: Some(config.right_emoji.clone()),
            label: None,
            style: config.right_style.into(),
            url: None,
            sku_id: None,
        }));
    }

    Component::ActionRow(ActionRow {
        id: None,
        components: buttons,
    })
}

#[cfg(test)]
mod tests {
    use twilight_model::channel::message::component::{Button, ButtonStyle, Component};

    use super::super::config::{NavButtonStyle, PagedEmbedConfig};
    use super::super::state::NavState;
    use super::{BACK_ID, FORWARD_ID, nav_button_row};

    fn row_buttons(row: Component) -> Vec<Button> {
        let Component::ActionRow(row) = row else {
            panic!("expected an action row");
        };
        row.components
            .into_iter()
            .map(|component| {
                let Component::Button(button) = component else {
                    panic!("expected a button");
                };
                button
            })
            .collect()
    }

    #[test]
    fn first_page_shows_only_forward() {
        let config = PagedEmbedConfig::default();
        let state = NavState::new(0, 3, false);

        let buttons = row_buttons(nav_button_row(&state, &config, false));
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].custom_id.as_deref(), Some(FORWARD_ID));
        assert!(!buttons[0].disabled);
    }

    #[test]
    fn last_page_shows_only_back() {
        let config = PagedEmbedConfig::default();
        let state = NavState::new(2, 3, false);

        let buttons = row_buttons(nav_button_row(&state, &config, false));
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].custom_id.as_deref(), Some(BACK_ID));
    }

    #[test]
    fn wraparound_shows_both_in_order() {
        let config = PagedEmbedConfig::default().with_wrap_around(true);
        let state = NavState::new(0, 2, true);

        let buttons = row_buttons(nav_button_row(&state, &config, false));
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].custom_id.as_deref(), Some(BACK_ID));
        assert_eq!(buttons[1].custom_id.as_deref(), Some(FORWARD_ID));
    }

    #[test]
    fn disabled_row_keeps_visibility_rule() {
        let config = PagedEmbedConfig::default();
        let state = NavState::new(1, 3, false);

        let buttons = row_buttons(nav_button_row(&state, &config, true));
        assert_eq!(buttons.len(), 2);
        assert!(buttons.iter().all(|button| button.disabled));
    }

    #[test]
    fn buttons_carry_configured_styles() {
        let config = PagedEmbedConfig::default()
            .with_left_style(NavButtonStyle::Primary)
            .with_right_style(NavButtonStyle::Danger);
        let state = NavState::new(1, 3, false);

        let buttons = row_buttons(nav_button_row(&state, &config, false));
        assert_eq!(buttons[0].style, ButtonStyle::Primary);
        assert_eq!(buttons[1].style, ButtonStyle::Danger);
    }
}
