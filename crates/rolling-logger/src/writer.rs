//! Size-based rolling log files
//!
//! `{app}.log` is the active file; older files are shifted to
//! `{app}.1.log`, `{app}.2.log`, ... and the oldest is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Limits for the file set and the in-memory buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    pub max_file_bytes: u64,
    pub max_files: usize,
    pub buffer_lines: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
            max_files: 5,
            buffer_lines: 500,
        }
    }
}

pub struct RollingFileWriter {
    dir: PathBuf,
    app_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFileWriter {
    pub fn new(dir: impl AsRef<Path>, app_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let path = file_path(&dir, app_name, 0);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            dir,
            app_name: app_name.to_string(),
            max_bytes: max_bytes.max(1),
            max_files: max_files.max(1),
            file,
            written,
        })
    }

    /// Path of the file currently written to
    pub fn current_path(&self) -> PathBuf {
        file_path(&self.dir, &self.app_name, 0)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let oldest = file_path(&self.dir, &self.app_name, self.max_files - 1);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (0..self.max_files - 1).rev() {
            let from = file_path(&self.dir, &self.app_name, index);
            if from.exists() {
                fs::rename(&from, file_path(&self.dir, &self.app_name, index + 1))?;
            }
        }

        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.current_path())?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn file_path(dir: &Path, app_name: &str, index: usize) -> PathBuf {
    if index == 0 {
        dir.join(format!("{}.log", app_name))
    } else {
        dir.join(format!("{}.{}.log", app_name, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_rotates_at_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::new(dir.path(), "Test", 32, 3).unwrap();

        for i in 0..10 {
            writer.write_all(format!("line number {:04}\n", i).as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        assert_eq!(log_files(dir.path()), vec!["Test.1.log", "Test.2.log", "Test.log"]);
        let current = fs::read_to_string(writer.current_path()).unwrap();
        assert!(current.contains("line number 0009"));
        assert!(current.len() as u64 <= 32);
    }

    #[test]
    fn test_single_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RollingFileWriter::new(dir.path(), "Solo", 16, 1).unwrap();

        writer.write_all(b"0123456789\n").unwrap();
        writer.write_all(b"abcdefghij\n").unwrap();

        assert_eq!(log_files(dir.path()), vec!["Solo.log"]);
        assert_eq!(fs::read_to_string(writer.current_path()).unwrap(), "abcdefghij\n");
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut writer = RollingFileWriter::new(dir.path(), "App", 1024, 2).unwrap();
            writer.write_all(b"before restart\n").unwrap();
        }
        let mut writer = RollingFileWriter::new(dir.path(), "App", 1024, 2).unwrap();
        writer.write_all(b"after restart\n").unwrap();

        let content = fs::read_to_string(writer.current_path()).unwrap();
        assert_eq!(content, "before restart\nafter restart\n");
    }
}
