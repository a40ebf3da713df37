//! Default values for configuration options.

/// Service name of the virtual wireless miniport adapter that backs the
/// hosted network.
pub const MINIPORT_SERVICE: &str = "vwifimp";

/// Directory name under the user config directory.
pub const CONFIG_DIR_NAME: &str = "hotshare";

/// Configuration file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration file path, if the platform has a config directory.
#[must_use]
pub fn config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
