use futures::executor::{ block_on, LocalPool };
use futures::task::LocalSpawnExt;
use crate::contexts::ThemeResolver;
use crate::storage::{ MemoryStore, SharedStore, THEME_STORAGE_KEY };
use crate::tests::common::{ mocks::RecordingStore, setup };
use crate::utils::{ ResolvedTheme, ThemeMode, ThemeSnapshot };

fn ready_resolver(store: SharedStore) -> ThemeResolver {
    let mut resolver = ThemeResolver::new(store);
    block_on(resolver.initialize());
    resolver
}

#[test]
fn test_first_run_defaults_to_system() {
    setup();
    let resolver = ready_resolver(SharedStore::new(MemoryStore::new()));
    assert!(resolver.is_ready());
    assert_eq!(
        resolver.current(),
        Some(ThemeSnapshot { mode: ThemeMode::System, resolved_theme: ResolvedTheme::Light })
    );
}

#[test]
fn test_saved_preference_is_restored() {
    setup();
    let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "light");
    let mut resolver = ready_resolver(SharedStore::new(store));
    resolver.set_system_appearance(Some(ResolvedTheme::Dark));
    assert_eq!(resolver.mode(), ThemeMode::Light);
    assert_eq!(resolver.resolved_theme(), ResolvedTheme::Light);
}

#[test]
fn test_malformed_value_is_ignored() {
    setup();
    let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "blue");
    let resolver = ready_resolver(SharedStore::new(store));
    assert!(resolver.is_ready());
    assert_eq!(resolver.mode(), ThemeMode::System);
}

#[test]
fn test_unavailable_storage_still_becomes_ready() {
    setup();
    let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "dark");
    store.set_failing(true);
    let resolver = ready_resolver(SharedStore::new(store));
    assert!(resolver.is_ready());
    assert_eq!(resolver.mode(), ThemeMode::System);
}

#[test]
fn test_nothing_visible_before_load_completes() {
    setup();
    let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "dark");
    let mut resolver = ThemeResolver::new(SharedStore::new(store));
    let request = resolver.load_request();
    assert_eq!(resolver.current(), None);

    let saved = block_on(request);
    resolver.finish_loading(saved);
    assert_eq!(resolver.current().map(|s| s.mode), Some(ThemeMode::Dark));
}

#[test]
fn test_set_mode_is_visible_before_write_completes() {
    setup();
    let store = MemoryStore::new();
    let mut resolver = ready_resolver(SharedStore::new(store.clone()));
    let mut pool = LocalPool::new();

    pool.spawner().spawn_local(resolver.set_mode(ThemeMode::Dark)).unwrap();
    assert_eq!(resolver.mode(), ThemeMode::Dark);
    assert_eq!(resolver.resolved_theme(), ResolvedTheme::Dark);
    assert_eq!(store.entry(THEME_STORAGE_KEY), None);

    pool.run_until_stalled();
    assert_eq!(store.entry(THEME_STORAGE_KEY), Some("dark".to_string()));
}

#[test]
fn test_failed_write_keeps_in_memory_mode() {
    setup();
    let store = MemoryStore::new();
    let mut resolver = ready_resolver(SharedStore::new(store.clone()));
    store.set_failing(true);

    block_on(resolver.set_mode(ThemeMode::Light));
    assert_eq!(resolver.mode(), ThemeMode::Light);
    store.set_failing(false);
    assert_eq!(store.entry(THEME_STORAGE_KEY), None);
}

#[test]
fn test_set_mode_twice_is_idempotent() {
    setup();
    let recorder = RecordingStore::new();
    let mut resolver = ready_resolver(SharedStore::new(recorder.clone()));
    resolver.set_system_appearance(Some(ResolvedTheme::Dark));

    block_on(resolver.set_mode(ThemeMode::System));
    let first = resolver.current();
    block_on(resolver.set_mode(ThemeMode::System));
    assert_eq!(resolver.current(), first);
    assert_eq!(first.map(|s| s.resolved_theme), Some(ResolvedTheme::Dark));

    assert_eq!(recorder.write_count(), 2);
    assert_eq!(
        recorder.last_write(),
        Some((THEME_STORAGE_KEY.to_string(), "system".to_string()))
    );
}

#[test]
fn test_choice_survives_restart() {
    setup();
    let store = MemoryStore::new();
    let mut pool = LocalPool::new();

    let mut first_run = ready_resolver(SharedStore::new(store.clone()));
    pool.spawner().spawn_local(first_run.set_mode(ThemeMode::Dark)).unwrap();
    pool.run_until_stalled();
    drop(first_run);

    let restarted = ready_resolver(SharedStore::new(store));
    assert_eq!(restarted.mode(), ThemeMode::Dark);
    assert_eq!(restarted.resolved_theme(), ResolvedTheme::Dark);
}

#[test]
fn test_system_mode_tracks_platform_changes() {
    setup();
    let mut resolver = ready_resolver(SharedStore::new(MemoryStore::new()));
    for system in [Some(ResolvedTheme::Dark), None, Some(ResolvedTheme::Light)] {
        resolver.set_system_appearance(system);
        assert_eq!(resolver.resolved_theme(), system.unwrap_or(ResolvedTheme::Light));
    }

    block_on(resolver.set_mode(ThemeMode::Dark));
    resolver.set_system_appearance(Some(ResolvedTheme::Light));
    assert_eq!(resolver.resolved_theme(), ResolvedTheme::Dark);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_choice_is_saved_over_corrupt_preference_file() {
    use crate::storage::FileStore;

    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut first_run = ready_resolver(SharedStore::new(FileStore::new(&path)));
    assert_eq!(first_run.mode(), ThemeMode::System);
    block_on(first_run.set_mode(ThemeMode::Dark));

    let restarted = ready_resolver(SharedStore::new(FileStore::new(&path)));
    assert_eq!(restarted.mode(), ThemeMode::Dark);
}
