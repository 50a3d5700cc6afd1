use std::path::PathBuf;

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "KIOSKFLOW_CONFIG";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Config directory (~/.config/kioskflow, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join("kioskflow")
}

/// Config file path, honouring `KIOSKFLOW_CONFIG` when set
pub fn get_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => get_config_dir().join("config.toml"),
    }
}

/// Log directory (the platform cache dir, or home as a fallback)
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("kioskflow")
}
