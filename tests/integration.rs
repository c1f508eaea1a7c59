// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Size};
use service_deck::catalog::fetch::parse_services;
use service_deck::config::{self, Config, DEFAULT_API_BASE_URL};
use service_deck::error::FetchError;
use service_deck::ui::icons::ServiceIcon;
use service_deck::ui::tilt::TiltState;
use tempfile::tempdir;

#[test]
fn test_config_round_trip_controls_endpoint() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Default config resolves the development endpoint
    let default_config = Config::default();
    assert_eq!(default_config.api_base(), DEFAULT_API_BASE_URL);

    // 2. A configured base URL survives a save/load cycle
    let configured = Config {
        api_base_url: Some("https://api.example.com".to_string()),
    };
    config::save_to_path(&configured, &temp_config_file_path)
        .expect("Failed to write config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load config from path");
    assert_eq!(loaded.api_base(), "https://api.example.com");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_payload_flows_from_wire_to_icons() {
    let body = r#"[
        {"_id": "1", "title": "SAP Consulting", "description": "ERP"},
        {"_id": "2", "title": "Cloud Migration", "description": "AWS"},
        {"_id": "3", "title": "Custom Development", "description": "Web"}
    ]"#;

    let items = parse_services(body).expect("array body should parse");
    assert_eq!(items.len(), 3);

    let icons: Vec<ServiceIcon> = items
        .iter()
        .map(|item| ServiceIcon::for_title(&item.title))
        .collect();

    assert_eq!(
        icons,
        vec![ServiceIcon::Gears, ServiceIcon::Cloud, ServiceIcon::Code]
    );
}

#[test]
fn test_malformed_payload_is_rejected_whole() {
    let err = parse_services(r#"{"services": []}"#).expect_err("object must not parse");
    assert_eq!(err.user_message(), "Invalid data format.");
    assert!(matches!(err, FetchError::Format(_)));
}

#[test]
fn test_tilt_follows_pointer_and_resets() {
    let surface = Size::new(280.0, 200.0);
    let mut tilt = TiltState::default();

    tilt.track(Point::new(280.0, 0.0), surface);
    assert_eq!(tilt.rotate_x, 12.5);
    assert_eq!(tilt.rotate_y, 12.5);

    tilt.track(Point::new(140.0, 100.0), surface);
    assert!(tilt.is_neutral());

    tilt.track(Point::new(0.0, 200.0), surface);
    tilt.reset();
    assert!(tilt.is_neutral());
}
