//! Append-only line file with size-based rotation.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
const DEFAULT_BACKUPS: usize = 3;

/// Line-oriented file that rotates once it grows past a size limit.
///
/// On rotation `name.{n}` moves to `name.{n+1}` (the oldest is dropped), the
/// live file becomes `name.1`, and writing continues in a fresh file. The file
/// is opened lazily on the first write.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// 10 MiB limit, three backups.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub fn with_limits(path: impl Into<PathBuf>, max_bytes: u64, backups: usize) -> Self {
        Self {
            path: path.into(),
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `index`-th backup (1 is the newest).
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Appends `line` and a newline, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file, or an
    /// error if the lock is poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("lock poisoned: {e}")))?;

        if fs::metadata(&self.path).map(|m| m.len() > self.max_bytes).unwrap_or(false) {
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

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::new(dir.path().join("trace.json"));

        file.write_line("one").unwrap();
        file.write_line("two").unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_rotates_past_limit() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::with_limits(dir.path().join("trace.json"), 4, 3);

        file.write_line("first").unwrap();
        file.write_line("second").unwrap();

        assert_eq!(fs::read_to_string(file.backup_path(1)).unwrap(), "first\n");
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "second\n");
    }

    #[test]
    fn test_keeps_at_most_configured_backups() {
        let dir = tempfile::tempdir().unwrap();
        let file = RotatingFile::with_limits(dir.path().join("trace.json"), 1, 2);

        for line in ["a", "b", "c", "d"] {
            file.write_line(line).unwrap();
        }

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "d\n");
        assert_eq!(fs::read_to_string(file.backup_path(1)).unwrap(), "c\n");
        assert_eq!(fs::read_to_string(file.backup_path(2)).unwrap(), "b\n");
        assert!(!file.backup_path(3).exists());
    }

    #[test]
    fn test_backup_path_appends_index() {
        let file = RotatingFile::new("/tmp/reelbox-otlp.json");
        assert_eq!(file.backup_path(2), PathBuf::from("/tmp/reelbox-otlp.json.2"));
    }
}
