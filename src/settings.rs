use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RidebookSettings {
    pub api: ApiSettings,
    pub routes: RouteSettings,
    pub messages: MessageSettings,
    pub booking: BookingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the ride service, e.g. `https://rides.example.com/api`
    pub base_url: String,
    /// Bearer token attached to every request, on top of the cookie store
    pub auth_token: Option<String>,
    /// Whole-request timeout. Unset means the HTTP client's defaults apply.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSettings {
    /// Confirmation view; `{ride_id}` is replaced with the ride identifier
    pub confirmation: String,
}

/// User-facing notification texts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageSettings {
    pub login_required: String,
    pub already_joined: String,
    pub own_ride: String,
    pub ride_full: String,
    pub booking_successful: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BookingSettings {
    /// Reject a confirmation while a previous one is still in flight
    pub prevent_duplicate_submissions: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            auth_token: None,
            request_timeout_secs: None,
            user_agent: format!("ridebook/{}", crate::VERSION),
        }
    }
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            confirmation: "/ride/{ride_id}/confirmed".to_string(),
        }
    }
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            login_required: "Please log in to join a ride".to_string(),
            already_joined: "You have already joined this ride".to_string(),
            own_ride: "You cannot join your own ride".to_string(),
            ride_full: "Sorry, this ride is full".to_string(),
            booking_successful: "Booking successful!".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl RouteSettings {
    /// Confirmation route for a specific ride
    #[must_use]
    pub fn confirmation_for(&self, ride_id: &str) -> String {
        self.confirmation.replace("{ride_id}", ride_id)
    }
}

impl RidebookSettings {
    /// Load settings from configuration files and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Logger initialization fails
    /// - Settings file cannot be read or parsed
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_env_file();

        let (mut settings, sources) = Self::load_base_settings()?;
        Self::apply_env_overrides(&mut settings);

        Self::initialize_logging(&settings.logging)?;
        for source in &sources {
            log::info!("Loaded settings from {}", source.display());
        }
        Ok(settings)
    }

    /// Initialize `env_logger` at the configured level
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger is already installed
    fn initialize_logging(logging: &LoggingSettings) -> Result<(), Box<dyn std::error::Error>> {
        env_logger::Builder::new()
            .parse_filters(&logging.level)
            .try_init()?;
        Ok(())
    }

    /// Load base settings from TOML file(s) or use defaults
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables (applied separately after loading base settings)
    /// 2. Settings.toml in `RIDEBOOK_SECRETS_DIR` (if specified and exists)
    /// 3. Settings.toml in current directory (if exists)
    /// 4. Default settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Settings file cannot be read
    /// - TOML parsing fails
    fn load_base_settings() -> Result<(Self, Vec<PathBuf>), Box<dyn std::error::Error>> {
        let mut settings = Self::default();
        let mut sources = Vec::new();

        let default_config_path = PathBuf::from("Settings.toml");
        if default_config_path.exists() {
            settings = Self::from_file(&default_config_path)?;
            sources.push(default_config_path);
        }

        // Secrets directory replaces, rather than merges with, the local file
        if let Ok(secrets_dir) = std::env::var("RIDEBOOK_SECRETS_DIR") {
            let secrets_path = Path::new(&secrets_dir).join("Settings.toml");
            if secrets_path.exists() {
                settings = Self::from_file(&secrets_path)?;
                sources.push(secrets_path);
            }
        }

        Ok((settings, sources))
    }

    /// Parse a settings file; missing sections and keys fall back to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let toml_content = fs::read_to_string(path)?;
        Ok(basic_toml::from_str(&toml_content)?)
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides(settings: &mut Self) {
        Self::apply_api_env_overrides(&mut settings.api);
        Self::apply_route_env_overrides(&mut settings.routes);
        Self::apply_booking_env_overrides(&mut settings.booking);
        Self::apply_logging_env_overrides(&mut settings.logging);
    }

    fn apply_api_env_overrides(api_settings: &mut ApiSettings) {
        if let Ok(base_url) = std::env::var("API_BASE_URL") {
            api_settings.base_url = base_url;
        }
        if let Ok(token) = std::env::var("API_AUTH_TOKEN") {
            api_settings.auth_token = Some(token).filter(|t| !t.is_empty());
        }
        if let Ok(timeout_str) = std::env::var("API_REQUEST_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                api_settings.request_timeout_secs = Some(timeout).filter(|t| *t > 0);
            }
        }
    }

    fn apply_route_env_overrides(route_settings: &mut RouteSettings) {
        if let Ok(confirmation) = std::env::var("CONFIRMATION_ROUTE") {
            route_settings.confirmation = confirmation;
        }
    }

    fn apply_booking_env_overrides(booking_settings: &mut BookingSettings) {
        if let Ok(prevent_str) = std::env::var("PREVENT_DUPLICATE_SUBMISSIONS") {
            if let Ok(prevent) = prevent_str.parse::<bool>() {
                booking_settings.prevent_duplicate_submissions = prevent;
            }
        }
    }

    fn apply_logging_env_overrides(logging_settings: &mut LoggingSettings) {
        if let Ok(log_level) = std::env::var("RUST_LOG") {
            logging_settings.level = log_level;
        }
    }

    /// Load environment variables from .env file
    fn load_env_file() {
        if let Ok(contents) = std::fs::read_to_string(".env") {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    std::env::set_var(key.trim(), value.trim());
                }
            }
        }
    }
}
