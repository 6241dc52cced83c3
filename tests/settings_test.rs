// Settings file loading and environment override tests
use ridebook::settings::RidebookSettings;
use serial_test::serial;
use std::io::Write;

const ENV_VARS: &[&str] = &[
    "API_BASE_URL",
    "API_AUTH_TOKEN",
    "API_REQUEST_TIMEOUT_SECS",
    "CONFIRMATION_ROUTE",
    "PREVENT_DUPLICATE_SUBMISSIONS",
    "RUST_LOG",
    "RIDEBOOK_SECRETS_DIR",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

#[test]
fn test_settings_defaults() {
    let settings = RidebookSettings::default();

    assert_eq!(settings.api.base_url, "http://localhost:3000/api");
    assert!(settings.api.auth_token.is_none());
    assert!(settings.api.request_timeout_secs.is_none());
    assert!(settings.api.user_agent.starts_with("ridebook/"));
    assert_eq!(settings.routes.confirmation, "/ride/{ride_id}/confirmed");
    assert_eq!(settings.messages.booking_successful, "Booking successful!");
    assert!(!settings.booking.prevent_duplicate_submissions);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[api]
base_url = "https://rides.example.com/api"
request_timeout_secs = 15

[routes]
confirmation = "/bookings/{{ride_id}}/done"

[booking]
prevent_duplicate_submissions = true
"#
    )
    .unwrap();

    let settings = RidebookSettings::from_file(file.path()).unwrap();

    assert_eq!(settings.api.base_url, "https://rides.example.com/api");
    assert_eq!(settings.api.request_timeout_secs, Some(15));
    assert_eq!(settings.routes.confirmation_for("r1"), "/bookings/r1/done");
    assert!(settings.booking.prevent_duplicate_submissions);
    assert_eq!(settings.messages.ride_full, "Sorry, this ride is full");
}

#[test]
fn test_invalid_settings_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[api\nbase_url = ").unwrap();

    assert!(RidebookSettings::from_file(file.path()).is_err());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    std::env::set_var("API_BASE_URL", "https://override.example.com/api");
    std::env::set_var("API_AUTH_TOKEN", "secret-token");
    std::env::set_var("API_REQUEST_TIMEOUT_SECS", "30");
    std::env::set_var("CONFIRMATION_ROUTE", "/trips/{ride_id}");
    std::env::set_var("PREVENT_DUPLICATE_SUBMISSIONS", "true");

    let mut settings = RidebookSettings::default();
    RidebookSettings::apply_env_overrides(&mut settings);

    assert_eq!(settings.api.base_url, "https://override.example.com/api");
    assert_eq!(settings.api.auth_token.as_deref(), Some("secret-token"));
    assert_eq!(settings.api.request_timeout_secs, Some(30));
    assert_eq!(settings.routes.confirmation_for("r2"), "/trips/r2");
    assert!(settings.booking.prevent_duplicate_submissions);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_env();
    std::env::set_var("API_REQUEST_TIMEOUT_SECS", "soon");
    std::env::set_var("PREVENT_DUPLICATE_SUBMISSIONS", "maybe");
    std::env::set_var("API_AUTH_TOKEN", "");

    let mut settings = RidebookSettings::default();
    RidebookSettings::apply_env_overrides(&mut settings);

    assert!(settings.api.request_timeout_secs.is_none());
    assert!(!settings.booking.prevent_duplicate_submissions);
    assert!(settings.api.auth_token.is_none());

    clear_env();
}

#[test]
#[serial]
fn test_load_prefers_secrets_dir_then_env() {
    clear_env();
    let secrets = tempfile::tempdir().unwrap();
    std::fs::write(
        secrets.path().join("Settings.toml"),
        "[api]\nbase_url = \"https://secrets.example.com/api\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();
    std::env::set_var("RIDEBOOK_SECRETS_DIR", secrets.path());
    std::env::set_var("CONFIRMATION_ROUTE", "/done/{ride_id}");

    // Only call in this test: it installs the global logger
    let settings = RidebookSettings::load().unwrap();

    assert_eq!(settings.api.base_url, "https://secrets.example.com/api");
    assert_eq!(settings.logging.level, "warn");
    assert_eq!(settings.routes.confirmation, "/done/{ride_id}");

    clear_env();
}
