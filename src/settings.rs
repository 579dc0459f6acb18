//! Application settings resolved from the environment.
//!
//! Values come from three layers, highest precedence first:
//!
//! 1. process environment variables
//! 2. the local override file (`.env` in the working directory)
//! 3. built-in defaults
//!
//! Keys are matched case-insensitively and unknown keys are ignored.
//! [`get_settings`] resolves the layers once per process and hands out the
//! cached value from then on. There is no reset: code that needs different
//! settings should build them with [`Settings::from_sources`] instead.

use std::path::Path;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

pub mod error;
pub mod log_level;
pub mod sources;

pub use error::SettingsError;
pub use log_level::LogLevel;
pub use sources::DEFAULT_ENV_FILE;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 1883;

/// Typed application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Log severity.
    pub log_level: LogLevel,
    /// Network bind address.
    pub host: String,
    /// Network bind port.
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Recognised keys, as they appear upper-cased in a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    LogLevel,
    Host,
    Port,
}

impl Key {
    fn lookup(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "LOG_LEVEL" => Some(Self::LogLevel),
            "HOST" => Some(Self::Host),
            "PORT" => Some(Self::Port),
            _ => None,
        }
    }
}

/// Uncoerced values collected from the sources.
#[derive(Debug, Default)]
struct RawSettings {
    log_level: Option<String>,
    host: Option<String>,
    port: Option<String>,
}

impl RawSettings {
    /// Applies a source on top of what has been collected so far.
    fn overlay<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in pairs {
            match Key::lookup(&name) {
                Some(Key::LogLevel) => self.log_level = Some(value),
                Some(Key::Host) => self.host = Some(value),
                Some(Key::Port) => self.port = Some(value),
                None => {}
            }
        }
    }

    fn coerce(self) -> Result<Settings, SettingsError> {
        let defaults = Settings::default();

        let log_level = match self.log_level {
            Some(value) => value.parse()?,
            None => defaults.log_level,
        };

        let port = match self.port {
            Some(value) => {
                value
                    .trim()
                    .parse()
                    .map_err(|source| SettingsError::InvalidInteger {
                        field: "port",
                        value,
                        source,
                    })?
            }
            None => defaults.port,
        };

        Ok(Settings {
            log_level,
            host: self.host.unwrap_or(defaults.host),
            port,
        })
    }
}

impl Settings {
    /// Resolves settings from `.env` and the process environment, uncached.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_with_env_file(DEFAULT_ENV_FILE)
    }

    /// Resolves settings using a specific override file, uncached.
    ///
    /// A missing override file is treated as empty.
    pub fn load_with_env_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let file = sources::read_env_file(path)?;
        Self::from_sources(file, sources::environment())
    }

    /// Resolves settings from explicit sources.
    ///
    /// `environment` pairs take precedence over `file` pairs, which take
    /// precedence over the defaults. Within one source the last occurrence
    /// of a key wins.
    pub fn from_sources<F, E>(file: F, environment: E) -> Result<Self, SettingsError>
    where
        F: IntoIterator<Item = (String, String)>,
        E: IntoIterator<Item = (String, String)>,
    {
        let mut raw = RawSettings::default();
        raw.overlay(file);
        raw.overlay(environment);
        raw.coerce()
    }

    /// Returns the `host:port` pair to bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Returns the process-wide settings, resolving them on first use.
///
/// Later calls return the same instance without re-reading the environment.
/// A failed resolution caches nothing, so the next call tries again. If two
/// threads race the first call, both resolve and the first stored value is
/// returned to everyone.
pub fn get_settings() -> Result<&'static Settings, SettingsError> {
    if let Some(settings) = SETTINGS.get() {
        return Ok(settings);
    }

    let settings = Settings::load()?;
    debug!(
        log_level = %settings.log_level,
        host = %settings.host,
        port = settings.port,
        "Resolved application settings"
    );

    Ok(SETTINGS.get_or_init(|| settings))
}
