//! The host platform's light/dark preference.

use dioxus::prelude::*;
use futures::StreamExt;
use crate::contexts::ThemeContext;
use crate::utils::ResolvedTheme;

#[cfg(not(target_arch = "wasm32"))]
pub fn detect_system_appearance() -> Option<ResolvedTheme> {
    native::appearance_from(dark_light::detect())
}

#[cfg(target_arch = "wasm32")]
pub fn detect_system_appearance() -> Option<ResolvedTheme> {
    web::prefers_dark_query().map(|query| web::appearance_for(query.matches()))
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::use_system_appearance_watcher;
#[cfg(target_arch = "wasm32")]
pub use web::use_system_appearance_watcher;

/// Platform callbacks fire outside the component tree, so changes are
/// relayed through a coroutine that owns the signal write.
fn use_appearance_relay(context: ThemeContext) -> Coroutine<Option<ResolvedTheme>> {
    use_coroutine(move |mut rx: UnboundedReceiver<Option<ResolvedTheme>>| async move {
        while let Some(appearance) = rx.next().await {
            log::debug!("System appearance changed to {:?}", appearance);
            context.set_system_appearance(appearance);
        }
    })
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::thread;
    use std::time::Duration;
    use dioxus::prelude::*;
    use crate::contexts::ThemeContext;
    use crate::utils::ResolvedTheme;
    use super::detect_system_appearance;

    /// dark-light has no change notification, so the setting is re-read.
    const POLL_INTERVAL: Duration = Duration::from_secs(2);

    pub(super) fn appearance_from(mode: dark_light::Mode) -> Option<ResolvedTheme> {
        match mode {
            dark_light::Mode::Dark => Some(ResolvedTheme::Dark),
            dark_light::Mode::Light => Some(ResolvedTheme::Light),
            dark_light::Mode::Default => None,
        }
    }

    /// Remembers the last sample so only changes are reported.
    #[derive(Debug)]
    pub(super) struct AppearanceSampler {
        last: Option<ResolvedTheme>,
    }

    impl AppearanceSampler {
        pub(super) fn new(initial: Option<ResolvedTheme>) -> Self {
            Self { last: initial }
        }

        pub(super) fn observe(
            &mut self,
            sample: Option<ResolvedTheme>
        ) -> Option<Option<ResolvedTheme>> {
            if sample == self.last {
                return None;
            }
            self.last = sample;
            Some(sample)
        }
    }

    pub fn use_system_appearance_watcher(context: ThemeContext) {
        let relay = super::use_appearance_relay(context);

        use_hook(move || {
            let tx = relay.tx();
            let initial = context.system_appearance();
            let spawned = thread::Builder::new()
                .name("appearance-watcher".to_string())
                .spawn(move || {
                    let mut sampler = AppearanceSampler::new(initial);
                    loop {
                        thread::sleep(POLL_INTERVAL);
                        let Some(changed) = sampler.observe(detect_system_appearance()) else {
                            continue;
                        };
                        // Receiver is gone once the provider unmounts.
                        if tx.unbounded_send(changed).is_err() {
                            break;
                        }
                    }
                });
            if let Err(e) = spawned {
                log::warn!("Failed to watch system appearance: {}", e);
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use dioxus::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{ MediaQueryList, MediaQueryListEvent };
    use crate::contexts::ThemeContext;
    use crate::utils::ResolvedTheme;

    const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

    pub(super) fn prefers_dark_query() -> Option<MediaQueryList> {
        web_sys::window()?.match_media(PREFERS_DARK).ok().flatten()
    }

    pub(super) fn appearance_for(prefers_dark: bool) -> ResolvedTheme {
        if prefers_dark { ResolvedTheme::Dark } else { ResolvedTheme::Light }
    }

    /// Forwards `prefers-color-scheme` changes into the resolver.
    pub fn use_system_appearance_watcher(context: ThemeContext) {
        let relay = super::use_appearance_relay(context);

        use_hook(move || {
            let Some(query) = prefers_dark_query() else {
                log::debug!("matchMedia unavailable, system appearance will not be tracked");
                return;
            };

            let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
                move |event: MediaQueryListEvent| {
                    relay.send(Some(appearance_for(event.matches())));
                }
            );
            if
                let Err(e) = query.add_event_listener_with_callback(
                    "change",
                    listener.as_ref().unchecked_ref()
                )
            {
                log::warn!("Failed to watch system appearance: {:?}", e);
            }
            // Lives as long as the page; the provider is never unmounted.
            listener.forget();
        });
    }
}
