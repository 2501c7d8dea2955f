use dioxus::prelude::*;
use futures::future::{ FutureExt, LocalBoxFuture };
use log::{ debug, warn };
use crate::contexts::appearance::{ detect_system_appearance, use_system_appearance_watcher };
use crate::storage::{ SharedStore, StorageResult, THEME_STORAGE_KEY };
use crate::utils::{ palette, Palette, ResolvedTheme, ThemeMode, ThemeSnapshot, ThemeState };

/// Detached write of a new preference. Completion and failure have no
/// effect on the in-memory mode.
pub type PersistTask = LocalBoxFuture<'static, ()>;

/// Owns the theme preference for the whole UI tree. Built once at startup
/// and handed down through `ThemeProvider`.
#[derive(Debug)]
pub struct ThemeResolver {
    state: ThemeState,
    system: Option<ResolvedTheme>,
    store: SharedStore,
}

impl ThemeResolver {
    pub fn new(store: SharedStore) -> Self {
        Self {
            state: ThemeState::loading(),
            system: None,
            store,
        }
    }

    /// Read of the saved preference, detached from `self` so it can be
    /// awaited without holding the resolver.
    pub fn load_request(&self) -> LocalBoxFuture<'static, StorageResult<Option<String>>> {
        self.store.get_item(THEME_STORAGE_KEY)
    }

    pub fn finish_loading(&mut self, saved: StorageResult<Option<String>>) {
        self.state.finish_loading(saved);
    }

    pub async fn initialize(&mut self) {
        let saved = self.load_request().await;
        self.finish_loading(saved);
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.mode()
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        ResolvedTheme::resolve(self.state.mode(), self.system)
    }

    pub fn system_appearance(&self) -> Option<ResolvedTheme> {
        self.system
    }

    /// `None` while the saved preference is still loading.
    pub fn current(&self) -> Option<ThemeSnapshot> {
        self.state.snapshot(self.system)
    }

    #[must_use = "the returned task performs the write and must be spawned"]
    pub fn set_mode(&mut self, mode: ThemeMode) -> PersistTask {
        self.state.set_mode(mode);

        let write = self.store.set_item(THEME_STORAGE_KEY, mode.as_str());
        (async move {
            match write.await {
                Ok(()) => debug!("Persisted theme mode {}", mode),
                Err(e) => warn!("Failed to persist theme mode {}: {}", mode, e),
            }
        }).boxed_local()
    }

    pub fn set_system_appearance(&mut self, system: Option<ResolvedTheme>) {
        self.system = system;
    }
}

/// Handle to the provider's resolver. Only obtainable through `use_theme`.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    resolver: Signal<ThemeResolver>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.resolver.read().mode()
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.resolver.read().resolved_theme()
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        let resolver = self.resolver.read();
        ThemeSnapshot {
            mode: resolver.mode(),
            resolved_theme: resolver.resolved_theme(),
        }
    }

    /// Read without subscribing the caller.
    pub fn system_appearance(&self) -> Option<ResolvedTheme> {
        self.resolver.peek().system_appearance()
    }

    pub fn palette(&self) -> &'static Palette {
        palette(self.resolved_theme())
    }

    /// Visible to the next read immediately; the write runs in the background.
    pub fn set_mode(&self, mode: ThemeMode) {
        let mut resolver = self.resolver;
        let persist = resolver.write().set_mode(mode);
        spawn(persist);
    }

    pub fn set_system_appearance(&self, system: Option<ResolvedTheme>) {
        let mut resolver = self.resolver;
        if resolver.peek().system_appearance() != system {
            resolver.write().set_system_appearance(system);
        }
    }
}

/// Renders nothing until the saved preference has been read, so the first
/// visible frame already uses the right theme.
#[component]
pub fn ThemeProvider(store: SharedStore, children: Element) -> Element {
    let mut resolver = use_signal(move || {
        let mut resolver = ThemeResolver::new(store);
        resolver.set_system_appearance(detect_system_appearance());
        resolver
    });
    use_context_provider(|| ThemeContext { resolver });

    use_system_appearance_watcher(ThemeContext { resolver });

    use_hook(move || {
        let request = resolver.peek().load_request();
        spawn(async move {
            let saved = request.await;
            resolver.write().finish_loading(saved);
        });
    });

    if !resolver.read().is_ready() {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

pub fn use_theme() -> ThemeContext {
    require_provider(try_use_context::<ThemeContext>())
}

/// Just the effective light/dark value.
pub fn use_color_scheme() -> ResolvedTheme {
    use_theme().resolved_theme()
}

#[track_caller]
fn require_provider<T>(context: Option<T>) -> T {
    match context {
        Some(context) => context,
        None => panic!("use_theme must be used within a ThemeProvider"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::storage::MemoryStore;
    use futures::executor::block_on;

    thread_local! {
        static RENDERED_MODE: Cell<Option<ThemeMode>> = const { Cell::new(None) };
    }

    #[component]
    fn ModeReader() -> Element {
        let mode = use_theme().mode();
        RENDERED_MODE.with(|rendered| rendered.set(Some(mode)));
        rsx! { "{mode}" }
    }

    #[component]
    fn SavedDarkApp() -> Element {
        let store = use_hook(|| SharedStore::new(MemoryStore::with_entry(THEME_STORAGE_KEY, "dark")));
        rsx! {
            ThemeProvider { store, ModeReader {} }
        }
    }

    #[component]
    fn UnprovidedReader() -> Element {
        use_theme();
        rsx! {}
    }

    #[test]
    fn test_provider_withholds_children_until_loaded() {
        RENDERED_MODE.with(|rendered| rendered.set(None));
        let mut dom = VirtualDom::new(SavedDarkApp);
        dom.rebuild_in_place();
        assert_eq!(RENDERED_MODE.with(Cell::get), None);

        block_on(dom.wait_for_work());
        dom.render_immediate_to_vec();
        assert_eq!(RENDERED_MODE.with(Cell::get), Some(ThemeMode::Dark));
    }

    #[test]
    #[should_panic(expected = "use_theme must be used within a ThemeProvider")]
    fn test_use_theme_without_provider_panics_in_tree() {
        VirtualDom::new(UnprovidedReader).rebuild_in_place();
    }

    #[test]
    #[should_panic(expected = "use_theme must be used within a ThemeProvider")]
    fn test_missing_provider_panics() {
        require_provider::<ThemeContext>(None);
    }

    #[test]
    fn test_missing_provider_panics_every_time() {
        for _ in 0..2 {
            let result = std::panic::catch_unwind(|| require_provider::<u8>(None));
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_present_provider_is_returned() {
        assert_eq!(require_provider(Some(7u8)), 7);
    }

    #[test]
    fn test_resolver_starts_loading_in_system_mode() {
        let resolver = ThemeResolver::new(SharedStore::new(MemoryStore::new()));
        assert!(!resolver.is_ready());
        assert_eq!(resolver.mode(), ThemeMode::System);
        assert_eq!(resolver.current(), None);
    }

    #[test]
    fn test_system_appearance_updates_resolution() {
        let mut resolver = ThemeResolver::new(SharedStore::new(MemoryStore::new()));
        block_on(resolver.initialize());

        resolver.set_system_appearance(Some(ResolvedTheme::Dark));
        assert_eq!(resolver.resolved_theme(), ResolvedTheme::Dark);
        resolver.set_system_appearance(None);
        assert_eq!(resolver.resolved_theme(), ResolvedTheme::Light);
    }
}
