//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use aureole::{AureoleError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for AureoleError {
    fn from(err: ConfigError) -> Self {
        AureoleError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (aureole/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, AureoleError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("aureole/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "aureole", "aureole") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, AureoleError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config)?;
    Ok(config)
}

/// Reject settings the layout engines cannot work with.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let rings = config.layout().rings();
    if rings.search_step == 0 {
        return Err(ConfigError::Validation(
            "layout.rings.search_step must be at least 1".to_string(),
        ));
    }
    if rings.min_size == 0 || rings.fallback_size == 0 {
        return Err(ConfigError::Validation(
            "layout.rings sizes must be positive".to_string(),
        ));
    }
    if rings.angular_spacing.is_nan() || rings.angular_spacing <= 0.0 {
        return Err(ConfigError::Validation(
            "layout.rings.angular_spacing must be positive".to_string(),
        ));
    }
    // Ring radii must start above zero and grow strictly outward.
    if rings.min_ring_gap.is_nan() || rings.min_ring_gap <= 0.0 {
        return Err(ConfigError::Validation(
            "layout.rings.min_ring_gap must be positive".to_string(),
        ));
    }
    if rings.ring_spacing.is_nan() || rings.ring_spacing < 0.0 {
        return Err(ConfigError::Validation(
            "layout.rings.ring_spacing must not be negative".to_string(),
        ));
    }
    if rings.inner_gap.is_nan() || rings.inner_gap < 0.0 {
        return Err(ConfigError::Validation(
            "layout.rings.inner_gap must not be negative".to_string(),
        ));
    }
    if rings.max_iterations == 0 {
        return Err(ConfigError::Validation(
            "layout.rings.max_iterations must be at least 1".to_string(),
        ));
    }
    if rings.min_size > rings.min_upper_size {
        return Err(ConfigError::Validation(format!(
            "layout.rings.min_size ({}) exceeds min_upper_size ({})",
            rings.min_size, rings.min_upper_size
        )));
    }

    let spiral = config.layout().spiral();
    if spiral.jitter_min > spiral.jitter_max {
        return Err(ConfigError::Validation(format!(
            "layout.spiral.jitter_min ({}) exceeds jitter_max ({})",
            spiral.jitter_min, spiral.jitter_max
        )));
    }

    config
        .style()
        .background_color()
        .map_err(ConfigError::Validation)?;

    Ok(())
}
