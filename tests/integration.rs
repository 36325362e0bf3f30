// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config, DETAIL_SIZE, THUMBNAIL_SIZE};
use iced_gallery::gallery::{GalleryClient, PhotoRecord};
use iced_gallery::ui::state::{FetchOutcome, State};
use iced_gallery::ui::theme::Preset;
use tempfile::tempdir;

/// A listing response in the exact shape the upstream endpoint returns.
const LISTING_FIXTURE: &str = r#"[
    {
        "id": "0",
        "author": "Alice",
        "width": 200,
        "height": 300,
        "url": "http://x/0",
        "download_url": "http://x/0/dl"
    },
    {
        "id": "1",
        "author": "Bob",
        "width": 4000,
        "height": 2000,
        "url": "http://x/1",
        "download_url": "http://x/1/dl"
    }
]"#;

#[test]
fn listing_fixture_flows_into_grid_state_and_urls() {
    let records: Vec<PhotoRecord> =
        serde_json::from_str(LISTING_FIXTURE).expect("fixture should parse");

    let mut state = State::new();
    let generation = state.begin_fetch();
    let outcome = state.apply_fetch(generation, Ok(records));
    assert_eq!(outcome, FetchOutcome::Replaced);
    assert_eq!(state.records().len(), 2);

    // Thumbnail and detail references are derived from the id, never stored.
    let client = GalleryClient::default();
    let first = &state.records()[0];
    assert!(client
        .image_url(&first.id, THUMBNAIL_SIZE)
        .ends_with("/id/0/400/400"));
    assert!(client
        .image_url(&first.id, DETAIL_SIZE)
        .ends_with("/id/0/800/800"));

    // Selecting the tile binds exactly that record, fields verbatim.
    assert!(state.select(0));
    let selected = state.selected_record().expect("record bound");
    assert_eq!(selected.author, "Alice");
    assert_eq!(selected.id, "0");
    assert_eq!(selected.dimensions(), "200 x 300");
    assert_eq!(selected.url, "http://x/0");
    assert_eq!(selected.download_url, "http://x/0/dl");

    state.dismiss();
    assert!(state.selected_record().is_none());
}

#[test]
fn malformed_listing_body_is_a_decode_failure_not_a_crash() {
    let parsed = serde_json::from_str::<Vec<PhotoRecord>>("{\"not\": \"an array\"}");
    assert!(parsed.is_err());

    // The screen treats it like any failed fetch: collection untouched.
    let mut state = State::new();
    let generation = state.begin_fetch();
    let outcome = state.apply_fetch(
        generation,
        Err(iced_gallery::error::FetchError::Decode(
            "expected an array".into(),
        )),
    );
    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(state.records().is_empty());
}

#[test]
fn configured_theme_round_trips_to_a_preset() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        theme: Some("sunset".to_string()),
        list_endpoint: None,
        image_endpoint: None,
    };
    config::save_to_path(&config, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let preset = loaded
        .theme
        .as_deref()
        .and_then(Preset::from_name)
        .expect("saved preset resolves");
    assert_eq!(preset, Preset::Sunset);
    assert_eq!(preset.theme().subtitle(4), "4 warm moments");
}

#[test]
fn endpoint_overrides_reach_derived_urls() {
    let config = Config {
        theme: None,
        list_endpoint: Some("http://localhost:9000/list".to_string()),
        image_endpoint: Some("http://localhost:9000".to_string()),
    };

    let client = GalleryClient::new(
        config.list_endpoint.clone().expect("set above"),
        config.image_endpoint.clone().expect("set above"),
    );
    assert_eq!(
        client.image_url("42", THUMBNAIL_SIZE),
        "http://localhost:9000/id/42/400/400"
    );
}
