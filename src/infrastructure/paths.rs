//! Data directory resolution and tilde expansion.
//!
//! The cache file and the log file live in one data directory. It defaults to
//! `~/.local/share/coinlist` and can be overridden through
//! [`Config::data_dir`](crate::Config::data_dir).

use std::path::{Path, PathBuf};

/// Data directory used when none is configured.
pub const DEFAULT_DATA_DIR: &str = "~/.local/share/coinlist";

/// File name of the JSON cache inside the data directory.
pub const CACHE_FILE_NAME: &str = "cache.json";

/// Resolves the data directory from an optional configured value.
///
/// Empty values count as unset.
///
/// # Examples
///
/// ```
/// use coinlist::infrastructure::data_dir;
/// use std::path::PathBuf;
///
/// assert_eq!(data_dir(Some("/srv/coinlist")), PathBuf::from("/srv/coinlist"));
/// ```
#[must_use]
pub fn data_dir(configured: Option<&str>) -> PathBuf {
    let raw = configured
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_DATA_DIR);

    expand_tilde(raw)
}

/// Expands a leading `~` to the current user's home directory.
///
/// Without a known home directory the `~/` prefix is dropped and the path
/// stays relative.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, home_dir().as_deref())
}

/// Expands a leading `~` against the given home directory.
///
/// Only `~` and `~/...` are expanded; `~user` forms are left alone.
///
/// # Examples
///
/// ```
/// use coinlist::infrastructure::paths::expand_tilde_with;
/// use std::path::{Path, PathBuf};
///
/// let home = Path::new("/home/ana");
/// assert_eq!(expand_tilde_with("~/coins", Some(home)), PathBuf::from("/home/ana/coins"));
/// assert_eq!(expand_tilde_with("~", Some(home)), PathBuf::from("/home/ana"));
/// assert_eq!(expand_tilde_with("/abs", Some(home)), PathBuf::from("/abs"));
/// ```
#[must_use]
pub fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    if path == "~" {
        return home.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    }

    match path.strip_prefix("~/") {
        Some(rest) => home.map_or_else(|| PathBuf::from(rest), |h| h.join(rest)),
        None => PathBuf::from(path),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_only_leading_tilde() {
        let home = Path::new("/home/test");

        assert_eq!(expand_tilde_with("~/a/b", Some(home)), PathBuf::from("/home/test/a/b"));
        assert_eq!(expand_tilde_with("a/~/b", Some(home)), PathBuf::from("a/~/b"));
        assert_eq!(expand_tilde_with("~other/x", Some(home)), PathBuf::from("~other/x"));
    }

    #[test]
    fn missing_home_leaves_relative_path() {
        assert_eq!(expand_tilde_with("~/coins", None), PathBuf::from("coins"));
        assert_eq!(expand_tilde_with("~", None), PathBuf::from("."));
    }

    #[test]
    fn blank_configuration_uses_default() {
        assert_eq!(data_dir(Some("   ")), data_dir(None));
        assert!(data_dir(None).ends_with(".local/share/coinlist"));
    }
}
