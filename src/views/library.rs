use dioxus::prelude::*;
use crate::contexts::use_theme;
use crate::fixtures::{ LibraryFilter, LibraryItem, LIBRARY_ITEMS };
use crate::utils::palette::{ radius, spacing, typography };

#[component]
fn FilterChip(filter: LibraryFilter, selected: bool, onselect: EventHandler<LibraryFilter>) -> Element {
    let colors = use_theme().palette();
    let chip_style = format!(
        "display: flex; align-items: center; gap: {}px; padding: {}px {}px; border-radius: {}px; border: 1px solid {}; background-color: {}; color: {}; {}",
        spacing::XS,
        spacing::SM,
        spacing::LG,
        radius::FULL,
        if selected { colors.primary } else { colors.border },
        if selected { colors.primary } else { colors.background_secondary },
        if selected { "#FFFFFF" } else { colors.text },
        typography::LABEL_LARGE.css()
    );
    let dot = filter.color().filter(|_| !selected);

    rsx! {
        button {
            style: "{chip_style}",
            onclick: move |_| onselect.call(filter),
            if let Some(color) = dot {
                span { style: "width: 8px; height: 8px; border-radius: 4px; background-color: {color};" }
            }
            "{filter.label()}"
        }
    }
}

#[component]
fn LibraryRow(item: LibraryItem) -> Element {
    let colors = use_theme().palette();
    let row_style = format!(
        "display: flex; gap: {}px; padding: {}px; border-radius: {}px; background-color: {};",
        spacing::MD,
        spacing::LG,
        radius::LG,
        colors.background_secondary
    );
    let stripe_style = format!("width: 4px; border-radius: 2px; background-color: {};", item.kind.color());
    let title_style = format!("color: {}; {}", colors.text, typography::TITLE_MEDIUM.css());
    let meta_style = format!("color: {}; {}", colors.text_secondary, typography::BODY_SMALL.css());
    let track_style = format!(
        "height: 4px; margin-top: {}px; border-radius: 2px; background-color: {};",
        spacing::SM,
        colors.border
    );
    let fill_color = if item.progress >= 100 { colors.success } else { colors.primary };
    let fill_style = format!(
        "height: 4px; border-radius: 2px; width: {}%; background-color: {};",
        item.progress.min(100),
        fill_color
    );

    rsx! {
        div {
            style: "{row_style}",
            div { style: "{stripe_style}" }
            div {
                style: "flex: 1;",
                div { style: "{title_style}", "{item.title}" }
                div { style: "{meta_style}", "{item.creator} · {item.kind.label()} · {item.saved_at}" }
                div {
                    style: "{track_style}",
                    div { style: "{fill_style}" }
                }
            }
        }
    }
}

#[component]
pub fn Library() -> Element {
    let colors = use_theme().palette();
    let mut selected = use_signal(LibraryFilter::default);
    let items = selected().apply(&LIBRARY_ITEMS);

    let title_style = format!("color: {}; {}", colors.text, typography::HEADLINE_LARGE.css());
    let subtitle_style = format!("color: {}; {}", colors.text_secondary, typography::BODY_MEDIUM.css());
    let search_style = format!(
        "width: 100%; box-sizing: border-box; padding: {}px {}px; border-radius: {}px; border: 1px solid {}; background-color: {}; color: {}; {}",
        spacing::MD,
        spacing::LG,
        radius::MD,
        colors.border,
        colors.background_secondary,
        colors.text,
        typography::BODY_LARGE.css()
    );

    rsx! {
        div {
            style: "min-height: 100vh; background-color: {colors.background};",
            div {
                style: "padding: {spacing::LG}px {spacing::XL}px;",
                div { style: "{title_style}", "Library" }
                div { style: "{subtitle_style}", "{items.len()} saved items" }
            }
            div {
                style: "padding: 0 {spacing::XL}px;",
                input { style: "{search_style}", r#type: "search", placeholder: "Search your library..." }
            }
            div {
                style: "display: flex; gap: {spacing::SM}px; overflow-x: auto; padding: {spacing::MD}px {spacing::XL}px;",
                for filter in LibraryFilter::OPTIONS {
                    FilterChip {
                        key: "{filter.label()}",
                        filter,
                        selected: selected() == filter,
                        onselect: move |filter| selected.set(filter),
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: {spacing::MD}px; padding: 0 {spacing::XL}px;",
                for item in items {
                    LibraryRow { key: "{item.id}", item: *item }
                }
            }
        }
    }
}
