use chrono::{ Local, NaiveDate, Timelike };
use dioxus::prelude::*;
use crate::contexts::use_theme;
use crate::fixtures::{ FEATURED, RECENT_ITEMS, STATS };
use crate::routes::Route;
use crate::utils::palette::{ radius, spacing, typography };
use crate::utils::ThemeMode;

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        h if h < 12 => "Good morning",
        h if h < 17 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

#[component]
fn QuickStats() -> Element {
    let colors = use_theme().palette();
    let card_style = format!(
        "flex: 1; padding: {}px; border-radius: {}px; background-color: {}; text-align: center;",
        spacing::LG,
        radius::MD,
        colors.background_secondary
    );
    let number_style = format!("color: {}; {}", colors.primary, typography::HEADLINE_MEDIUM.css());
    let label_style = format!("color: {}; {}", colors.text_secondary, typography::LABEL_MEDIUM.css());
    let stats = [
        (STATS.saved, "Saved"),
        (STATS.in_progress, "In Progress"),
        (STATS.this_week, "This Week"),
    ];

    rsx! {
        div {
            style: "display: flex; gap: {spacing::MD}px; padding: 0 {spacing::XL}px;",
            for (count, label) in stats {
                div {
                    key: "{label}",
                    style: "{card_style}",
                    div { style: "{number_style}", "{count}" }
                    div { style: "{label_style}", "{label}" }
                }
            }
        }
    }
}

#[component]
fn FeaturedCard() -> Element {
    let colors = use_theme().palette();
    let card_style = format!(
        "margin: {}px {}px 0; padding: {}px; border-radius: {}px; background-color: {}; color: #FFFFFF;",
        spacing::XXL,
        spacing::XL,
        spacing::XL,
        radius::LG,
        colors.primary
    );
    let source_style = format!("opacity: 0.8; {}", typography::LABEL_SMALL.css());
    let title_style = typography::HEADLINE_SMALL.css();
    let subtitle_style = format!("opacity: 0.9; {}", typography::BODY_MEDIUM.css());

    rsx! {
        div {
            id: "{FEATURED.id}",
            style: "{card_style}",
            div { style: "{source_style}", "{FEATURED.provider.name()}" }
            div { style: "{title_style}", "{FEATURED.title}" }
            div { style: "{subtitle_style}", "{FEATURED.subtitle}" }
        }
    }
}

#[component]
fn RecentItems() -> Element {
    let colors = use_theme().palette();
    let row_style = format!(
        "display: flex; align-items: center; gap: {}px; padding: {}px; margin-bottom: {}px; border-radius: {}px; background-color: {};",
        spacing::MD,
        spacing::MD,
        spacing::SM,
        radius::MD,
        colors.background_secondary
    );
    let title_style = format!("color: {}; {}", colors.text, typography::TITLE_SMALL.css());
    let source_style = format!("color: {}; {}", colors.text_secondary, typography::BODY_SMALL.css());
    let section_style = format!("color: {}; {}", colors.text, typography::TITLE_LARGE.css());

    let rows = RECENT_ITEMS.iter().map(|item| {
        let icon_style = format!(
            "width: 40px; height: 40px; border-radius: {}px; display: flex; align-items: center; justify-content: center; color: #FFFFFF; background-color: {};",
            radius::SM,
            colors.primary
        );
        rsx! {
            div {
                key: "{item.id}",
                style: "{row_style}",
                div { style: "{icon_style}", "{item.kind.initial()}" }
                div {
                    div { style: "{title_style}", "{item.title}" }
                    div { style: "{source_style}", "{item.provider.name()}" }
                }
            }
        }
    });

    rsx! {
        div {
            style: "padding: {spacing::XXL}px {spacing::XL}px 0;",
            div { style: "{section_style}", "Recent" }
            {rows}
        }
    }
}

#[component]
fn AppearancePicker() -> Element {
    let theme = use_theme();
    let colors = theme.palette();
    let snapshot = theme.snapshot();
    let section_style = format!("color: {}; {}", colors.text, typography::TITLE_LARGE.css());
    let caption_style = format!("color: {}; {}", colors.text_tertiary, typography::BODY_SMALL.css());
    let caption = match snapshot.mode {
        ThemeMode::System => format!("Following system appearance ({})", snapshot.resolved_theme),
        mode => format!("Always {}", mode),
    };

    let options = ThemeMode::ALL.into_iter().map(|mode| {
        let selected = snapshot.mode == mode;
        let option_style = format!(
            "flex: 1; padding: {}px; border-radius: {}px; border: 1px solid {}; background-color: {}; color: {}; {}",
            spacing::SM,
            radius::SM,
            if selected { colors.primary } else { colors.border },
            if selected { colors.primary } else { colors.background_secondary },
            if selected { "#FFFFFF" } else { colors.text },
            typography::LABEL_LARGE.css()
        );
        rsx! {
            button {
                key: "{mode}",
                style: "{option_style}",
                onclick: move |_| theme.set_mode(mode),
                "{mode.label()}"
            }
        }
    });

    rsx! {
        div {
            id: "appearance",
            style: "padding: {spacing::XXL}px {spacing::XL}px 0;",
            div { style: "{section_style}", "Appearance" }
            div { style: "display: flex; gap: {spacing::SM}px; margin: {spacing::SM}px 0;", {options} }
            div { style: "{caption_style}", "{caption}" }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let colors = use_theme().palette();
    let now = use_hook(Local::now);
    let greeting = greeting(now.hour());
    let date = long_date(now.date_naive());

    let greeting_style = format!("color: {}; {}", colors.text_secondary, typography::LABEL_MEDIUM.css());
    let title_style = format!("color: {}; {}", colors.text, typography::DISPLAY_MEDIUM.css());
    let date_style = format!("color: {}; {}", colors.text_tertiary, typography::BODY_MEDIUM.css());

    rsx! {
        div {
            style: "min-height: 100vh; padding-bottom: {spacing::XXXL}px; background-color: {colors.background};",
            div {
                style: "padding: {spacing::LG}px {spacing::XL}px {spacing::XL}px;",
                div { style: "{greeting_style}", "{greeting}" }
                div { style: "{title_style}", "Your Library" }
                div { style: "{date_style}", "{date}" }
            }
            QuickStats {}
            FeaturedCard {}
            RecentItems {}
            AppearancePicker {}
            div {
                style: "padding: {spacing::XL}px;",
                Link {
                    to: Route::Bookmark { fixture_id: "sharp-tech".to_string() },
                    style: "color: {colors.link};",
                    "Open latest bookmark"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(16), "Good afternoon");
        assert_eq!(greeting(17), "Good evening");
        assert_eq!(greeting(23), "Good evening");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert_eq!(long_date(date), "Monday, January 6");
    }
}
