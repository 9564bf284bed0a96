//! Path helpers for the Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`.

use std::path::PathBuf;

/// Name of the log file inside [`get_data_dir`].
pub const LOG_FILE_NAME: &str = "hirepoint.log";

/// Returns the data directory for HirePoint files.
///
/// The directory is located at `/host/.local/share/zellij/hirepoint` in the
/// Zellij sandbox. `/host` points to the cwd of the last focused terminal, or
/// the folder where Zellij was started, which typically makes the real path
/// `~/.local/share/zellij/hirepoint`.
///
/// # Examples
///
/// ```
/// use hirepoint::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/hirepoint");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("hirepoint")
}

/// Full path of the plugin log file.
#[must_use]
pub fn log_file() -> PathBuf {
    get_data_dir().join(LOG_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// Used for the `theme_file` option, which users write relative to `~`.
///
/// # Examples
///
/// ```
/// use hirepoint::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/mine.toml"), "/host/themes/mine.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_in_data_dir() {
        assert_eq!(
            log_file(),
            PathBuf::from("/host/.local/share/zellij/hirepoint/hirepoint.log")
        );
    }

    #[test]
    fn tilde_only_expands_at_start() {
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }
}
