use anyhow::Result;
use pawtrack::{
    JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore, RootMarkers,
    StaticSystemSignal, ThemeCapabilities, ThemeError, ThemeMode, ThemeOptions,
    ThemePreferenceManager, ThemeScope, ThemeSource, THEME_STORAGE_KEY,
};
use proptest::prelude::*;

fn start(
    store: MemoryPreferenceStore,
    signal: Option<bool>,
) -> (ThemePreferenceManager, RootMarkers) {
    let markers = RootMarkers::new();
    let capabilities = ThemeCapabilities::new(markers.clone())
        .with_store(store)
        .with_system_signal(StaticSystemSignal(signal));
    let manager = ThemePreferenceManager::initialize(ThemeOptions::default(), capabilities);
    (manager, markers)
}

#[test]
fn test_set_then_get_for_each_mode() {
    let (mut manager, _) = start(MemoryPreferenceStore::new(), None);
    for mode in ThemeMode::ALL {
        manager.set_theme(mode);
        assert_eq!(manager.get_theme(), mode);
    }
}

#[test]
fn test_root_and_store_mirror_every_mutation() {
    let store = MemoryPreferenceStore::new();
    let (mut manager, markers) = start(store.clone(), None);

    for mode in [ThemeMode::Dark, ThemeMode::Dark, ThemeMode::Light] {
        manager.set_theme(mode);
        assert_eq!(markers.len(), 1);
        assert!(markers.contains(mode));
        assert_eq!(store.peek(THEME_STORAGE_KEY).as_deref(), Some(mode.as_str()));
    }

    let toggled = manager.toggle_theme();
    assert_eq!(markers.active(), vec![toggled]);
    assert_eq!(store.peek(THEME_STORAGE_KEY).as_deref(), Some(toggled.as_str()));
}

#[test]
fn test_dark_survives_restart() {
    let store = MemoryPreferenceStore::new();
    {
        let (mut manager, _) = start(store.clone(), None);
        manager.set_theme(ThemeMode::Dark);
    }

    // A light system signal must not override what the user chose.
    let (manager, markers) = start(store, Some(false));
    assert_eq!(manager.get_theme(), ThemeMode::Dark);
    assert_eq!(manager.resolved_from(), ThemeSource::Persisted);
    assert_eq!(markers.active(), vec![ThemeMode::Dark]);
}

#[test]
fn test_file_store_survives_restart() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("preferences.json");

    let open = || {
        let capabilities = ThemeCapabilities::new(RootMarkers::new())
            .with_store(JsonFilePreferenceStore::new(&path));
        ThemePreferenceManager::initialize(ThemeOptions::default(), capabilities)
    };

    let mut first = open();
    assert_eq!(first.get_theme(), ThemeMode::Light);
    first.toggle_theme();
    drop(first);

    let second = open();
    assert_eq!(second.get_theme(), ThemeMode::Dark);
    assert!(second.is_persistent());

    let store = JsonFilePreferenceStore::new(&path);
    assert_eq!(store.get(THEME_STORAGE_KEY)?.as_deref(), Some("dark"));
    Ok(())
}

#[test]
fn test_unavailable_store_with_dark_signal() {
    let (mut manager, markers) = start(MemoryPreferenceStore::unavailable(), Some(true));
    assert_eq!(manager.get_theme(), ThemeMode::Dark);
    assert_eq!(manager.resolved_from(), ThemeSource::System);
    assert_eq!(markers.active(), vec![ThemeMode::Dark]);

    assert_eq!(manager.toggle_theme(), ThemeMode::Light);
    assert_eq!(markers.active(), vec![ThemeMode::Light]);
}

#[test]
fn test_empty_store_without_signal_uses_default() {
    let store = MemoryPreferenceStore::new();
    let (manager, markers) = start(store.clone(), None);
    assert_eq!(manager.get_theme(), ThemeMode::Light);
    assert_eq!(manager.resolved_from(), ThemeSource::Default);
    assert_eq!(markers.active(), vec![ThemeMode::Light]);
    assert_eq!(store.peek(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn test_truncated_file_store_recovers() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, r#"{"theme": "da"#)?;

    let open = || {
        let capabilities = ThemeCapabilities::new(RootMarkers::new())
            .with_store(JsonFilePreferenceStore::new(&path))
            .with_system_signal(StaticSystemSignal(Some(true)));
        ThemePreferenceManager::initialize(ThemeOptions::default(), capabilities)
    };

    let mut first = open();
    assert_eq!(first.get_theme(), ThemeMode::Dark);
    assert_eq!(first.resolved_from(), ThemeSource::System);
    assert!(first.is_persistent());

    assert_eq!(first.toggle_theme(), ThemeMode::Light);
    drop(first);

    let store = JsonFilePreferenceStore::new(&path);
    assert_eq!(store.get(THEME_STORAGE_KEY)?.as_deref(), Some("light"));

    // The dark system signal no longer wins once a value is stored again.
    let second = open();
    assert_eq!(second.get_theme(), ThemeMode::Light);
    assert_eq!(second.resolved_from(), ThemeSource::Persisted);
    Ok(())
}

#[test]
fn test_empty_scope_is_never_mutated() {
    let mut scope = ThemeScope::new();
    assert_eq!(scope.toggle_theme(), Err(ThemeError::OutsideScope));
    assert_eq!(scope.set_theme(ThemeMode::Dark), Err(ThemeError::OutsideScope));
    assert_eq!(scope.theme(), Err(ThemeError::OutsideScope));
    assert!(!scope.is_active());
}

#[test]
fn test_scope_forwards_to_manager() {
    let store = MemoryPreferenceStore::new();
    let (manager, markers) = start(store.clone(), None);
    let mut scope = ThemeScope::new();
    scope.provide(manager);

    assert_eq!(scope.toggle_theme(), Ok(ThemeMode::Dark));
    assert_eq!(scope.palette().map(|p| p.mode), Ok(ThemeMode::Dark));
    assert_eq!(markers.active(), vec![ThemeMode::Dark]);
    assert_eq!(store.peek(THEME_STORAGE_KEY).as_deref(), Some("dark"));
}

proptest! {
    #[test]
    fn toggle_parity(start_dark in any::<bool>(), toggles in 0usize..40) {
        let initial = if start_dark { ThemeMode::Dark } else { ThemeMode::Light };
        let store = MemoryPreferenceStore::new().with_value(THEME_STORAGE_KEY, initial.as_str());
        let (mut manager, markers) = start(store.clone(), None);
        prop_assert_eq!(manager.get_theme(), initial);

        for _ in 0..toggles {
            manager.toggle_theme();
        }

        let expected = if toggles % 2 == 0 { initial } else { initial.opposite() };
        prop_assert_eq!(manager.get_theme(), expected);
        prop_assert_eq!(markers.active(), vec![expected]);
        prop_assert_eq!(store.peek(THEME_STORAGE_KEY), Some(expected.as_str().to_string()));
    }

    #[test]
    fn unknown_names_are_rejected(name in "[a-zA-Z]{0,8}") {
        prop_assume!(name != "light" && name != "dark");
        let (mut manager, markers) = start(MemoryPreferenceStore::new(), None);
        prop_assert_eq!(
            manager.set_theme_named(&name),
            Err(ThemeError::InvalidArgument(name.clone()))
        );
        prop_assert_eq!(manager.get_theme(), ThemeMode::Light);
        prop_assert_eq!(markers.active(), vec![ThemeMode::Light]);
    }
}
