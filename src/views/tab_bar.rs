use dioxus::prelude::*;
use crate::contexts::use_theme;
use crate::routes::Route;
use crate::utils::palette::{ spacing, typography };

struct Tab {
    label: &'static str,
    icon: &'static str,
    to: Route,
}

fn tabs() -> [Tab; 3] {
    [
        Tab { label: "Home", icon: "⌂", to: Route::Home },
        Tab { label: "Inbox", icon: "▤", to: Route::Inbox },
        Tab { label: "Library", icon: "▥", to: Route::Library },
    ]
}

#[component]
pub fn TabBar() -> Element {
    let theme = use_theme();
    let colors = theme.palette();
    let current = use_route::<Route>();

    let bar_style = format!(
        "position: fixed; bottom: 0; left: 0; right: 0; display: flex; justify-content: space-around; padding: {}px 0; background-color: {}; border-top: 1px solid {};",
        spacing::SM,
        colors.card,
        colors.border
    );

    let links = tabs().into_iter().map(|tab| {
        let color = if tab.to == current { colors.tab_icon_selected } else { colors.tab_icon_default };
        let tab_style = format!(
            "display: flex; flex-direction: column; align-items: center; text-decoration: none; color: {}; {}",
            color,
            typography::LABEL_MEDIUM.css()
        );
        rsx! {
            Link {
                key: "{tab.label}",
                style: "{tab_style}",
                to: tab.to,
                span { style: "font-size: 22px;", "{tab.icon}" }
                span { "{tab.label}" }
            }
        }
    });

    rsx! {
        div {
            style: "padding-bottom: 72px;",
            Outlet::<Route> {}
        }
        nav {
            id: "tab-bar",
            style: "{bar_style}",
            {links}
        }
    }
}
