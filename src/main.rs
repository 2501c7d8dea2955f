use dioxus::prelude::*;
use zine::{ open_preference_store, use_theme, Route, ThemeProvider };

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let store = use_hook(open_preference_store);

    rsx! {
        ThemeProvider {
            store,
            ThemedRoot {}
        }
    }
}

#[component]
fn ThemedRoot() -> Element {
    let theme = use_theme();
    let colors = theme.palette();
    let resolved = theme.resolved_theme();

    rsx! {
        div {
            class: if resolved.is_dark() { "dark" } else { "" },
            "data-theme": "{resolved}",
            style: "min-height: 100vh; margin: 0; font-family: system-ui, -apple-system, sans-serif; background-color: {colors.background}; color: {colors.text};",
            Router::<Route> {}
        }
    }
}
