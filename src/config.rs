//! App Configuration
//!
//! Where the inventory file and the logs live.

use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "PicoleNaPraia";
pub const DATA_FILE_NAME: &str = "picoles.txt";
const APP_DIR_NAME: &str = "picole-na-praia";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub data_file_name: String,
    /// Used for the log file name and the Android log tag
    pub app_name: String,
}

impl AppConfig {
    /// Everything under one directory, logs in `<dir>/logs`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            data_dir: dir.to_path_buf(),
            log_dir: dir.join("logs"),
            data_file_name: DATA_FILE_NAME.to_string(),
            app_name: APP_NAME.to_string(),
        }
    }

    /// Full path of the inventory file
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(&self.data_file_name)
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::in_dir(base.join(APP_DIR_NAME))
    }
}
