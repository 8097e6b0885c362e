//! Platform path helpers.
//!
//! Bookshelf keeps no data of its own; the only file it looks for is the
//! optional configuration file.

use std::path::PathBuf;

/// Application directory name under the platform config directory.
const APP_DIR: &str = "bookshelf";

/// Configuration file name inside [`APP_DIR`].
const CONFIG_FILE: &str = "config.toml";

/// Returns the directory Bookshelf reads its configuration from.
///
/// Resolves to `$XDG_CONFIG_HOME/bookshelf` on Linux,
/// `~/Library/Application Support/bookshelf` on macOS and
/// `%APPDATA%\bookshelf` on Windows. Returns `None` when the platform has no
/// config directory (e.g. no home directory).
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Returns the default configuration file path, if a config directory exists.
///
/// # Examples
///
/// ```
/// use bookshelf::infrastructure::default_config_path;
///
/// if let Some(path) = default_config_path() {
///     assert!(path.ends_with("bookshelf/config.toml"));
/// }
/// ```
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and tildes when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use bookshelf::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/bookshelf.toml").to_str(), Some("/etc/bookshelf.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();

    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/config.toml"), PathBuf::from("/tmp/config.toml"));
        assert_eq!(expand_tilde("relative/config.toml"), PathBuf::from("relative/config.toml"));
    }

    #[test]
    fn tilde_expands_to_home_when_known() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/books.toml"), home.join("books.toml"));
        }
    }

    #[test]
    fn config_path_lives_in_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("bookshelf/config.toml"));
        }
    }
}
