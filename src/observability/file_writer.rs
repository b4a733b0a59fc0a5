//! Append-only trace file with size-based rotation.
//!
//! When the file grows past its limit it is renamed to
//! `<stem>.<YYYYmmdd-HHMMSS>.json` and a fresh file is started. Only the newest
//! backups are kept.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
const DEFAULT_BACKUPS: usize = 3;

/// Line-oriented writer that rotates its file once it exceeds `max_bytes`.
///
/// The handle is opened lazily on the first append and shared behind a
/// `Mutex`, since the SDK requires exporters to be `Sync`.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if rotation, opening or writing fails,
    /// or an `Other` error if the lock is poisoned.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Local::now().format("%Y%m%d-%H%M%S%.3f");
        let stem = file_stem(&self.path);
        let backup = self.path.with_file_name(format!("{stem}.{stamp}.json"));

        fs::rename(&self.path, backup)?;
        self.prune_backups()
    }

    /// Deletes all but the newest `backups` rotated files.
    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        let prefix = format!("{}.", file_stem(&self.path));
        let current = self.path.file_name();

        let mut rotated: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.file_name() != current)
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".json"))
            })
            .collect();

        // Timestamps sort lexically, newest last.
        rotated.sort();
        let excess = rotated.len().saturating_sub(self.backups);
        for old in rotated.iter().take(excess) {
            let _ = fs::remove_file(old);
        }

        Ok(())
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "trace".to_string(), |s| s.to_string_lossy().into_owned())
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}
