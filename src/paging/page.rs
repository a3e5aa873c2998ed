//! Page footer hydration.

use twilight_model::channel::message::embed::{Embed, EmbedFooter};

/// Rewrite every page footer to lead with its position in the list.
///
/// Runs exactly once per send. The marker line is separated from the embed
/// body by a zero-width space; pre-existing footer text follows it and the
/// footer icon is preserved.
pub(crate) fn hydrate_page_numbers(pages: &mut [Embed]) {
    let total = pages.len();

    for (position, page) in pages.iter_mut().enumerate() {
        let existing = page.footer.take();
        let existing_text = existing
            .as_ref()
            .map(|footer| footer.text.as_str())
            .unwrap_or_default();

        let text = format!(
            "\u{200b}\nPage {} / {}{}",
            position + 1,
            total,
            existing_text
        );

        page.footer = Some(EmbedFooter {
            icon_url: existing.as_ref().and_then(|footer| footer.icon_url.clone()),
            proxy_icon_url: existing.and_then(|footer| footer.proxy_icon_url),
            text,
        });
    }
}

#[cfg(test)]
mod tests {
    use twilight_model::channel::message::embed::{Embed, EmbedFooter};

    use super::hydrate_page_numbers;

    fn bare_embed() -> Embed {
        Embed {
            author: None,
            color: None,
            description: None,
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

    #[test]
    fn every_page_gets_its_position_marker() {
        let mut pages = vec![bare_embed(), bare_embed(), bare_embed()];

        hydrate_page_numbers(&mut pages);

        for (position, page) in pages.iter().enumerate() {
            let footer = page.footer.as_ref().expect("footer should be set");
            assert_eq!(
                footer.text,
                format!("\u{200b}\nPage {} / 3", position + 1)
            );
        }
    }

    #[test]
    fn existing_footer_text_and_icon_survive() {
        let mut page = bare_embed();
        page.footer = Some(EmbedFooter {
            icon_url: Some("https://cdn.example/icon.png".to_owned()),
            proxy_icon_url: None,
            text: "requested by zoe".to_owned(),
        });
        let mut pages = vec![page, bare_embed()];

        hydrate_page_numbers(&mut pages);

        let footer = pages[0].footer.as_ref().expect("footer should be set");
        assert_eq!(footer.text, "\u{200b}\nPage 1 / 2requested by zoe");
        assert_eq!(footer.icon_url.as_deref(), Some("https://cdn.example/icon.png"));
    }
}
