//! Rolling File Writer
//!
//! Size-bounded log file with numbered backups (`app.log.1`, `app.log.2`, ...)
//! and an in-memory circular buffer of the most recent lines.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

/// Rotation and buffer limits
#[derive(Debug, Clone)]
pub struct RollingConfig {
    /// Directory holding the log files
    pub log_dir: PathBuf,
    /// Base file name without extension
    pub app_name: String,
    /// Rotate once the active file would exceed this many bytes
    pub max_bytes: u64,
    /// Number of rotated backups kept next to the active file
    pub max_files: usize,
    /// Lines kept in memory for `recent_lines`
    pub buffer_lines: usize,
}

impl RollingConfig {
    pub fn new(log_dir: impl Into<PathBuf>, app_name: &str) -> Self {
        Self {
            log_dir: log_dir.into(),
            app_name: app_name.to_string(),
            max_bytes: 1024 * 1024,
            max_files: 3,
            buffer_lines: 200,
        }
    }

    /// Path of the active log file
    pub fn file_path(&self) -> PathBuf {
        self.log_dir.join(format!("{}.log", self.app_name))
    }
}

struct Inner {
    file: File,
    written: u64,
    recent: VecDeque<String>,
    partial: String,
}

/// Shared rolling file. Clones write to the same file and buffer.
#[derive(Clone)]
pub struct RollingFile {
    config: Arc<RollingConfig>,
    inner: Arc<Mutex<Inner>>,
}

impl RollingFile {
    /// Open (append) the active log file, creating the directory if needed
    pub fn open(config: RollingConfig) -> io::Result<Self> {
        fs::create_dir_all(&config.log_dir)?;
        let path = config.file_path();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                file,
                written,
                recent: VecDeque::with_capacity(config.buffer_lines),
                partial: String::new(),
            })),
            config: Arc::new(config),
        })
    }

    pub fn path(&self) -> PathBuf {
        self.config.file_path()
    }

    /// Most recent complete lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.lock() {
            Ok(inner) => inner.recent.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer lock poisoned"))
    }

    fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut inner = self.lock()?;

        if inner.written > 0 && inner.written + buf.len() as u64 > self.config.max_bytes {
            self.rotate(&mut inner)?;
        }

        inner.file.write_all(buf)?;
        inner.written += buf.len() as u64;
        self.remember(&mut inner, buf);
        Ok(())
    }

    fn remember(&self, inner: &mut Inner, buf: &[u8]) {
        if self.config.buffer_lines == 0 {
            return;
        }
        inner.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = inner.partial.find('\n') {
            let line: String = inner.partial.drain(..=pos).collect();
            let line = line.trim_end().to_string();
            if line.is_empty() {
                continue;
            }
            if inner.recent.len() == self.config.buffer_lines {
                inner.recent.pop_front();
            }
            inner.recent.push_back(line);
        }
    }

    fn rotate(&self, inner: &mut Inner) -> io::Result<()> {
        inner.file.flush()?;
        let base = self.config.file_path();

        if self.config.max_files == 0 {
            inner.file = File::create(&base)?;
            inner.written = 0;
            return Ok(());
        }

        let oldest = backup_path(&base, self.config.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.config.max_files).rev() {
            let from = backup_path(&base, index);
            if from.exists() {
                fs::rename(&from, backup_path(&base, index + 1))?;
            }
        }
        fs::rename(&base, backup_path(&base, 1))?;

        inner.file = OpenOptions::new().create(true).append(true).open(&base)?;
        inner.written = 0;
        Ok(())
    }
}

fn backup_path(base: &Path, index: usize) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

/// `io::Write` handle handed out to the fmt subscriber
pub struct RollingWriter(RollingFile);

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.lock()?.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFile {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        RollingWriter(self.clone())
    }
}
