//! Configuration for the availability view.

use crate::error::ConfigError;

/// Environment variable toggling staff (admin) selection rules
pub const ADMIN_ENV_VAR: &str = "VARAAMO_ADMIN";

/// Settings that change how selections are validated
///
/// # Example
///
/// ```
/// use varaamo_availability::AvailabilityConfig;
///
/// let config = AvailabilityConfig::default().with_admin(true);
/// assert!(config.is_admin);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityConfig {
    /// Staff users may pick any forward interval, ignoring the resource's
    /// minimum and maximum reservation length
    pub is_admin: bool,
}

impl AvailabilityConfig {
    /// Create a configuration
    #[must_use]
    pub const fn new(is_admin: bool) -> Self {
        Self { is_admin }
    }

    /// Set whether the user is staff
    #[must_use]
    pub const fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Load configuration from the process environment
    ///
    /// Reads [`ADMIN_ENV_VAR`]; an unset variable means a regular user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFlag`] if the variable is set to
    /// something other than `true`, `false`, `1` or `0`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFlag`] on an unrecognized flag value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_admin = match lookup(ADMIN_ENV_VAR) {
            None => false,
            Some(value) => parse_flag(ADMIN_ENV_VAR, &value)?,
        };
        Ok(Self { is_admin })
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}
