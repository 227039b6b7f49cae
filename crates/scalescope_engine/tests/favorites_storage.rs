use std::fs;

use pretty_assertions::assert_eq;
use scalescope_core::{update, AppState, Effect, Msg, StartupEntry};
use scalescope_engine::{
    load_favorites, save_favorites, FavoritesStorage, JsonFileStorage, MemoryStorage,
    FAVORITES_FILENAME,
};
use tempfile::TempDir;

fn b() -> StartupEntry {
    StartupEntry::new("B", "Dev", 20)
        .with_tagline("Second")
        .with_product_url("https://b.example")
}

#[test]
fn missing_file_loads_as_empty() {
    let temp = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(temp.path().to_path_buf());

    assert!(storage.load().unwrap().is_empty());
    assert!(load_favorites(&storage).is_empty());
}

#[test]
fn malformed_file_degrades_to_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(FAVORITES_FILENAME), "{not json").unwrap();
    let storage = JsonFileStorage::new(temp.path().to_path_buf());

    assert!(storage.load().is_err());
    assert!(load_favorites(&storage).is_empty());
}

#[test]
fn wrong_shape_degrades_to_empty() {
    let storage = MemoryStorage::with_raw(r#"{"name":"B"}"#);
    assert!(load_favorites(&storage).is_empty());

    let storage = MemoryStorage::with_raw("null");
    assert!(load_favorites(&storage).is_empty());
}

#[test]
fn file_round_trip_preserves_every_field() {
    let temp = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(temp.path().join("state"));
    let favorites = vec![b(), StartupEntry::new("C", "AI", 5)];

    assert!(save_favorites(&storage, &favorites));
    assert!(storage.path().is_file());

    let reloaded = JsonFileStorage::new(temp.path().join("state"));
    assert_eq!(load_favorites(&reloaded), favorites);
}

#[test]
fn stored_form_is_a_json_array() {
    let storage = MemoryStorage::new();
    save_favorites(&storage, &[StartupEntry::new("A", "Dev", 1)]);

    let raw = storage.raw().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["name"], "A");
}

#[test]
fn save_failure_is_reported_without_panicking() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "x").unwrap();
    let storage = JsonFileStorage::new(blocker);

    assert!(!save_favorites(&storage, &[b()]));
}

#[test]
fn storage_reflects_each_toggle_after_dispatch() {
    let storage = MemoryStorage::new();
    let (state, _) = update(AppState::new(), Msg::FavoritesRestored(load_favorites(&storage)));

    let mut state = state;
    for expected in [vec![b()], Vec::new()] {
        let (next, effects) = update(state, Msg::FavoriteToggled(b()));
        for effect in effects {
            if let Effect::PersistFavorites(snapshot) = effect {
                assert!(save_favorites(&storage, &snapshot));
            }
        }
        assert_eq!(storage.load().unwrap(), expected);
        state = next;
    }
}
