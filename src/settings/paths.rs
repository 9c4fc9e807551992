use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Utility struct for resolving the editor's own file locations.
///
/// Follows the XDG Base Directory specification for configuration and keeps
/// mutable application data (session, logs) under a dedicated home
/// directory.
pub struct AppPaths;

impl AppPaths {
    /// Returns the editor's configuration directory.
    ///
    /// Checks `XDG_CONFIG_HOME` first, then falls back to `$HOME/.config`,
    /// appending `barforge`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set.
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join("barforge"))
    }

    /// Returns the application data directory, creating it if needed.
    ///
    /// # Errors
    /// Returns an error if HOME is not set or the directory cannot be created.
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        let data_dir = env::var("HOME")
            .map(|home| format!("{home}/.barforge"))
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        let app_dir = PathBuf::from(data_dir);
        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir)
    }

    /// Returns the log directory, creating it if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::app_data_dir()?.join("logs");
        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }

        Ok(log_dir)
    }

    /// Returns the path to the editor settings file.
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be resolved.
    pub fn settings_file() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path of the persisted session document.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved.
    pub fn session_file() -> Result<PathBuf, Error> {
        Ok(Self::app_data_dir()?.join("session.json"))
    }
}
