//! System-wide constants and default paths.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used in CLI output and config files.
pub const APP_NAME: &str = "analyzer";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "anlz";

/// Maximum samples retained per metric before FIFO eviction.
pub const DEFAULT_CAPACITY: usize = 120;

/// Temperature at or above which a reading is classified as a warning.
pub const DEFAULT_WARNING_CELSIUS: f64 = 60.0;

/// Temperature at or above which a reading is classified as critical.
pub const DEFAULT_CRITICAL_CELSIUS: f64 = 80.0;

/// Interval between ingestion polls and UI refreshes.
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Rendered in place of a metric value when no samples exist yet.
pub const PLACEHOLDER: &str = "—";

/// Well-known metric name: CPU utilization percentage.
pub const METRIC_CPU: &str = "cpu_usage";

/// Well-known metric name: GPU utilization percentage.
pub const METRIC_GPU: &str = "gpu_usage";

/// Well-known metric name: temperature in degrees Celsius.
pub const METRIC_TEMPERATURE: &str = "temperature_c";

/// Resolves the data directory, preferring `$HOME/.analyzer`,
/// falling back to the current directory.
fn resolve_data_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
        let user_dir = PathBuf::from(home).join(format!(".{APP_NAME}"));
        if std::fs::create_dir_all(&user_dir).is_ok() {
            return user_dir;
        }
    }
    PathBuf::from(".")
}

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Returns the resolved data directory for this session.
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(resolve_data_dir)
}

/// Returns the default config file path.
pub fn default_config_file() -> PathBuf {
    data_dir().join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_created_on_first_access() {
        assert!(data_dir().exists());
    }

    #[test]
    fn default_config_file_lives_in_the_data_dir() {
        let path = default_config_file();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.json"));
        assert!(path.starts_with(data_dir()));
    }
}
