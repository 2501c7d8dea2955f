use dioxus::prelude::*;
use crate::contexts::use_theme;
use crate::fixtures::{ find_show, ContentType, Provider, Show };
use crate::utils::palette::{ radius, spacing, typography, Palette };

#[component]
fn Badge(label: &'static str, color: &'static str) -> Element {
    let badge_style = format!(
        "padding: {}px {}px; border-radius: {}px; background-color: {}; color: #FFFFFF; {}",
        spacing::XS,
        spacing::SM,
        radius::XS,
        color,
        typography::LABEL_SMALL.css()
    );
    rsx! {
        span { style: "{badge_style}", "{label}" }
    }
}

fn action_button_style(colors: &Palette, primary: bool) -> String {
    let (background, text) = if primary {
        (colors.button_primary, colors.button_primary_text)
    } else {
        (colors.background_secondary, colors.text)
    };
    format!(
        "flex: 1; padding: {}px; border: none; border-radius: {}px; background-color: {}; color: {}; {}",
        spacing::MD,
        radius::MD,
        background,
        text,
        typography::LABEL_LARGE.css()
    )
}

#[component]
fn EpisodeDetail(show: Show) -> Element {
    let colors = use_theme().palette();
    let Some(episode) = show.first_episode() else {
        return rsx! {
            div { style: "padding: {spacing::XL}px; color: {colors.text_secondary};", "No episodes available" }
        };
    };

    let cover = episode.cover_url(&show).unwrap_or_default().to_string();
    let thumbnail = show.image_url().unwrap_or_default().to_string();
    let description = episode.cleaned_html_description();
    let meta = format!(
        "{} · {} · {}",
        show.publisher,
        episode.formatted_release_date(),
        episode.formatted_duration()
    );

    let cover_style = format!(
        "width: 100%; height: 33vh; object-fit: cover; background-color: {};",
        colors.background_secondary
    );
    let title_style = format!("color: {}; {}", colors.text, typography::HEADLINE_MEDIUM.css());
    let show_style = format!("color: {}; {}", colors.text_secondary, typography::TITLE_SMALL.css());
    let meta_style = format!("color: {}; {}", colors.text_tertiary, typography::BODY_SMALL.css());
    let section_style = format!("color: {}; {}", colors.text, typography::TITLE_LARGE.css());
    let description_style = format!(
        "color: {}; {} line-height: 24px;",
        colors.text_secondary,
        typography::BODY_MEDIUM.css()
    );
    let card_style = format!(
        "margin: {}px {}px; padding: {}px; border-radius: {}px; background-color: {};",
        spacing::XXL,
        spacing::XL,
        spacing::LG,
        radius::LG,
        colors.background_secondary
    );
    let remove_style = format!(
        "width: 100%; margin-top: {}px; padding: {}px; border-radius: {}px; border: 1px solid {}; background: transparent; color: {}; {}",
        spacing::MD,
        spacing::SM,
        radius::SM,
        colors.border,
        colors.error,
        typography::LABEL_LARGE.css()
    );
    let card_title_style = format!("color: {}; {}", colors.text, typography::TITLE_MEDIUM.css());
    let primary_action = action_button_style(colors, true);
    let secondary_action = action_button_style(colors, false);

    rsx! {
        img { style: "{cover_style}", src: "{cover}", alt: "{episode.name}" }
        div {
            style: "padding: {spacing::XL}px;",
            div {
                style: "display: flex; gap: {spacing::SM}px; margin-bottom: {spacing::MD}px;",
                Badge { label: Provider::Spotify.name(), color: Provider::Spotify.color() }
                Badge { label: ContentType::Podcast.label(), color: ContentType::Podcast.color() }
            }
            div { style: "{title_style}", "{episode.name}" }
            div {
                style: "display: flex; align-items: center; gap: {spacing::SM}px; margin-top: {spacing::SM}px;",
                img { style: "width: 24px; height: 24px; border-radius: 4px;", src: "{thumbnail}" }
                span { style: "{show_style}", "{show.name}" }
            }
            div { style: "{meta_style}", "{meta}" }
        }
        div {
            style: "display: flex; gap: {spacing::MD}px; padding: 0 {spacing::XL}px;",
            a {
                style: "{primary_action} text-align: center; text-decoration: none;",
                href: "{episode.external_urls.spotify}",
                target: "_blank",
                "Play Episode"
            }
            button { style: "{secondary_action}", "Add to Queue" }
        }
        div {
            style: "padding: {spacing::XXL}px {spacing::XL}px 0;",
            div { style: "{section_style}", "About this episode" }
            div { style: "{description_style}", dangerous_inner_html: "{description}" }
        }
        div {
            style: "{card_style}",
            div { style: "{card_title_style}", "Saved to your library" }
            div { style: "{meta_style}", "Bookmarked just now" }
            // Visual only, bookmarks are fixtures.
            button { style: "{remove_style}", "Remove Bookmark" }
        }
    }
}

#[component]
pub fn Bookmark(fixture_id: String) -> Element {
    let colors = use_theme().palette();
    let navigator = use_navigator();

    let back_style = format!(
        "position: fixed; top: {}px; left: {}px; width: 40px; height: 40px; border: none; border-radius: {}px; background-color: {}; color: {}; font-size: 20px;",
        spacing::LG,
        spacing::LG,
        radius::FULL,
        colors.background_secondary,
        colors.text
    );

    let content = match find_show(Some(&fixture_id)) {
        Ok(show) => rsx! { EpisodeDetail { show } },
        Err(e) => {
            log::error!("Failed to load show fixture: {}", e);
            rsx! {
                div { style: "padding: {spacing::XL}px; color: {colors.error};", "Unable to load this bookmark" }
            }
        }
    };

    rsx! {
        div {
            style: "min-height: 100vh; padding-bottom: {spacing::XXXL}px; background-color: {colors.background};",
            {content}
            button {
                style: "{back_style}",
                onclick: move |_| navigator.go_back(),
                "‹"
            }
        }
    }
}
