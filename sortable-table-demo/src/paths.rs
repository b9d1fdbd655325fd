use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const LOG_FILE: &str = "sortable-table-demo.log";

/// Log file in the platform cache directory, e.g.
/// `~/.cache/sortable-table-demo/` on Linux. Falls back to the working
/// directory when there is no home or the directory cannot be created.
pub fn log_file() -> PathBuf {
    ProjectDirs::from("dev", "sortable-table", "sortable-table-demo")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map_or_else(|| PathBuf::from(LOG_FILE), |dir| dir.join(LOG_FILE))
}
