use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".budget_report";
const SNAPSHOT_FILE: &str = "budget_data.json";

/// Returns the application-specific data directory, defaulting to `~/.budget_report`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGET_REPORT_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Resolves the snapshot file inside a data directory.
pub fn snapshot_file_in(base: &Path) -> PathBuf {
    base.join(SNAPSHOT_FILE)
}

/// Creates the directory (and parents) when missing.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_file_lives_under_base() {
        let base = PathBuf::from("/tmp/reports");
        assert_eq!(
            snapshot_file_in(&base),
            PathBuf::from("/tmp/reports/budget_data.json")
        );
    }
}
