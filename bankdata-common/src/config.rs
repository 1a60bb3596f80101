//! Configuration loading and root folder resolution
//!
//! The root folder holds everything the application writes: the SQLite
//! database file and the uploaded documents directory.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the root folder
pub const ROOT_ENV_VAR: &str = "BANKDATA_ROOT";

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `BANKDATA_ROOT` environment variable
/// 3. TOML config file (`root_folder` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Ok(PathBuf::from(path));
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_ENV_VAR) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return Ok(PathBuf::from(root_folder));
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    Ok(default_root_folder())
}

/// Get default configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/bankdata/config.toml first, then /etc/bankdata/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("bankdata").join("config.toml"));
        let system_config = PathBuf::from("/etc/bankdata/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    }

    let config_path = dirs::config_dir()
        .map(|d| d.join("bankdata").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {:?}",
            config_path
        )))
    }
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/bankdata (or /var/lib/bankdata for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("bankdata"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/bankdata"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("bankdata"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/bankdata"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("bankdata"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\bankdata"))
    } else {
        PathBuf::from("./bankdata_data")
    }
}

/// Path of the SQLite database inside the root folder
pub fn database_path(root_folder: &Path) -> PathBuf {
    root_folder.join("bankdata.db")
}

/// Path of the uploaded documents directory inside the root folder
pub fn uploads_dir(root_folder: &Path) -> PathBuf {
    root_folder.join("uploads")
}

/// Create the root folder and uploads directory if missing
pub fn ensure_directories(root_folder: &Path) -> Result<()> {
    std::fs::create_dir_all(root_folder)?;
    std::fs::create_dir_all(uploads_dir(root_folder))?;
    Ok(())
}
