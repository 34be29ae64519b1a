//! Drive-profile configuration loading.
//!
//! A drive profile stores the physical parameters of one drive so the shell
//! does not need them on the command line every time.
//!
//! # Usage
//!
//! ```rust,no_run
//! use safety_calc::config::{ConfigError, ConfigLoader, ProfileConfig};
//! use std::path::{Path, PathBuf};
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = ProfileConfig::load(Path::new("axis_x.toml"))?;
//!     config.validate()?;
//!     println!("Profile: {}", config.shared.service_name);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::increment::SafetyFunction;
use crate::request::{CalculationRequest, RatioInput};

/// Why a drive profile could not be used.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// No file at the given path.
    #[error("Profile not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Unreadable file or malformed TOML.
    #[error("Invalid profile TOML: {0}")]
    Parse(String),

    /// Well-formed, but a value is out of range.
    #[error("Profile value out of range: {0}")]
    Invalid(String),
}

/// Default log verbosity stored in a profile (`"trace"` .. `"error"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    /// Also logs every computed threshold.
    Debug,
    #[default]
    Info,
    /// Also logs the reason an input was rejected.
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// `[shared]` section: profile name and log level.
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "axis-x"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    #[serde(default)]
    pub log_level: LogLevel,

    /// Name shown in logs, usually the axis.
    pub service_name: String,
}

impl SharedConfig {
    /// Rejects an empty `service_name`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::Invalid("service_name is empty".into()));
        }
        Ok(())
    }
}

/// Physical drive parameters.
///
/// # TOML Example
///
/// ```toml
/// [drive]
/// function = "scw"
/// pole_pairs = 4.0
/// max_value = 100.0
///
/// [drive.ratio]
/// mode = "fraction"
/// numerator = 10.0
/// denominator = 65536.0
/// encoder_bits = 16.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriveProfile {
    /// Default safety function (default: SSR).
    #[serde(default)]
    pub function: SafetyFunction,

    /// Motor pole-pair count.
    pub pole_pairs: f64,

    /// Max speed [mm/s] or max displacement [mm], if stored.
    #[serde(default)]
    pub max_value: Option<f64>,

    /// Transmission ratio source.
    pub ratio: RatioInput,
}

impl DriveProfile {
    /// Validate parameter bounds.
    ///
    /// Fraction ratios are checked at evaluation time, where the zero
    /// denominator and non-positive result are reported by the calculator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pole_pairs.is_finite() && self.pole_pairs > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pole_pairs {} must be positive",
                self.pole_pairs
            )));
        }
        if let Some(v) = self.max_value {
            if !(v.is_finite() && v >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "max_value {v} must be finite and non-negative"
                )));
            }
        }
        if let RatioInput::Direct { ratio } = self.ratio {
            if !(ratio.is_finite() && ratio > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "ratio {ratio} must be positive"
                )));
            }
        }
        Ok(())
    }

    /// Build a request for `max_value`, or the stored value when `None`.
    ///
    /// Returns `None` if neither is available.
    pub fn to_request(&self, max_value: Option<f64>) -> Option<CalculationRequest> {
        Some(CalculationRequest {
            function: self.function,
            pole_pairs: self.pole_pairs,
            max_value: max_value.or(self.max_value)?,
            ratio: self.ratio,
        })
    }
}

/// A complete profile file: `[shared]` plus `[drive]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Common fields.
    pub shared: SharedConfig,
    /// Drive parameters.
    pub drive: DriveProfile,
}

impl ProfileConfig {
    /// Validate both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.drive.validate()
    }
}

/// TOML loading for any deserializable profile type.
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Read and parse `path`. A missing file is [`ConfigError::NotFound`].
    fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ConfigError::NotFound(path.to_path_buf()))
            }
            Err(e) => Err(ConfigError::Parse(format!("{}: {e}", path.display()))),
        }
    }

    /// Parse TOML text.
    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
