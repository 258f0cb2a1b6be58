//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "fleetdesk";
const APPLICATION: &str = "fleetdesk";

const LATEST_LOG: &str = "latest.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/fleetdesk` or `~/.config/fleetdesk`
/// - macOS: `~/Library/Application Support/dev.fleetdesk.fleetdesk`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/fleetdesk` or `~/.cache/fleetdesk`
/// - macOS: `~/Library/Caches/dev.fleetdesk.fleetdesk`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the table view config.
pub fn view_config() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("view.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Keep one previous run: move an existing log at `path` to `<name>.1`,
/// replacing the older copy. A missing log is not an error.
pub fn rotate_log(path: &Path) -> io::Result<()> {
    match fs::rename(path, previous_log(path)) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        result => result,
    }
}

fn previous_log(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".1");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_keeps_one_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join(LATEST_LOG);

        rotate_log(&log).unwrap();
        fs::write(&log, "first").unwrap();
        rotate_log(&log).unwrap();
        fs::write(&log, "second").unwrap();
        rotate_log(&log).unwrap();

        assert!(!log.exists());
        let previous = dir.path().join("latest.log.1");
        assert_eq!(fs::read_to_string(previous).unwrap(), "second");
    }
}
