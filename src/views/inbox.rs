use dioxus::prelude::*;
use crate::contexts::use_theme;
use crate::fixtures::{ InboxItem, INBOX_ITEMS };
use crate::utils::palette::{ radius, spacing, typography };

#[component]
fn InboxRow(item: InboxItem) -> Element {
    let colors = use_theme().palette();
    let row_style = format!(
        "display: flex; gap: {}px; padding: {}px; border-radius: {}px; background-color: {};",
        spacing::MD,
        spacing::LG,
        radius::LG,
        colors.background_secondary
    );
    let icon_style = format!(
        "width: 44px; height: 44px; flex-shrink: 0; border-radius: {}px; display: flex; align-items: center; justify-content: center; color: #FFFFFF; background-color: {};",
        radius::MD,
        item.kind.color()
    );
    let title_style = format!("color: {}; {}", colors.text, typography::TITLE_MEDIUM.css());
    let meta_style = format!("color: {}; {}", colors.text_secondary, typography::BODY_SMALL.css());
    let length_style = format!("color: {}; {}", colors.text_tertiary, typography::BODY_SMALL.css());
    let save_style = format!(
        "padding: {}px {}px; border: none; border-radius: {}px; background-color: {}; color: #FFFFFF; {}",
        spacing::XS,
        spacing::MD,
        radius::SM,
        colors.primary,
        typography::LABEL_MEDIUM.css()
    );
    let skip_style = format!(
        "padding: {}px {}px; border: 1px solid {}; border-radius: {}px; background: transparent; color: {}; {}",
        spacing::XS,
        spacing::MD,
        colors.border,
        radius::SM,
        colors.text_secondary,
        typography::LABEL_MEDIUM.css()
    );

    rsx! {
        div {
            style: "{row_style}",
            div { style: "{icon_style}", "{item.kind.initial()}" }
            div {
                style: "flex: 1;",
                div { style: "{title_style}", "{item.title}" }
                div { style: "{meta_style}", "{item.creator} · {item.provider.name()}" }
                div { style: "{length_style}", "{item.length.as_str()}" }
            }
            // Triage buttons are not wired to any state yet.
            div {
                style: "display: flex; flex-direction: column; gap: {spacing::XS}px;",
                button { style: "{save_style}", "Save" }
                button { style: "{skip_style}", "Skip" }
            }
        }
    }
}

#[component]
pub fn Inbox() -> Element {
    let colors = use_theme().palette();
    let title_style = format!("color: {}; {}", colors.text, typography::HEADLINE_LARGE.css());
    let subtitle_style = format!("color: {}; {}", colors.text_secondary, typography::BODY_MEDIUM.css());

    rsx! {
        div {
            style: "min-height: 100vh; background-color: {colors.background};",
            div {
                style: "padding: {spacing::LG}px {spacing::XL}px;",
                div { style: "{title_style}", "Inbox" }
                div { style: "{subtitle_style}", "{INBOX_ITEMS.len()} items to triage" }
            }
            div {
                style: "display: flex; flex-direction: column; gap: {spacing::MD}px; padding: 0 {spacing::XL}px;",
                for item in INBOX_ITEMS {
                    InboxRow { key: "{item.id}", item }
                }
            }
        }
    }
}
