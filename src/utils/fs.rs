//! File system utility functions
//!
//! Provides the whole-file read and write operations the store is built on.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug, Clone, Copy)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Create directories recursively
    #[instrument(skip(self))]
    pub fn create_dir_all<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)
    }

    /// Write content to a file, replacing it, and creating parent directories if needed
    #[instrument(skip(self, contents))]
    pub fn write_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();
        let contents = contents.as_ref();

        debug!("Writing {} bytes to {}", contents.len(), path.display());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
        debug!("File written successfully");
        Ok(())
    }

    /// Read raw file contents, returning `None` when the file does not exist.
    /// No text decoding happens here.
    #[instrument(skip(self))]
    pub fn read_file_if_exists<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<Option<Vec<u8>>> {
        let path = path.as_ref();

        match fs::read(path) {
            Ok(content) => {
                debug!("Read {} bytes from {}", content.len(), path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("File does not exist: {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Check if a path exists and is a directory
    pub fn is_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_dir()
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("a").join("b").join("students.json");
        fs_utils.write_file(&file_path, "[]").unwrap();

        assert!(file_path.exists());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[]");
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("students.json");
        fs_utils.write_file(&file_path, "a much longer first payload").unwrap();
        fs_utils.write_file(&file_path, "short").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "short");
    }

    #[test]
    fn test_read_file_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("test.txt");
        assert_eq!(fs_utils.read_file_if_exists(&file_path).unwrap(), None);

        fs::write(&file_path, "Hello, world!").unwrap();
        assert_eq!(
            fs_utils.read_file_if_exists(&file_path).unwrap().as_deref(),
            Some(b"Hello, world!".as_slice())
        );
    }

    #[test]
    fn test_read_file_if_exists_keeps_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("binary.bin");
        fs::write(&file_path, [0xff, 0xfe, b'[', b']']).unwrap();

        assert_eq!(
            fs_utils.read_file_if_exists(&file_path).unwrap(),
            Some(vec![0xff, 0xfe, b'[', b']'])
        );
    }

    #[test]
    fn test_is_dir() {
        let temp_dir = TempDir::new().unwrap();
        let fs_utils = FileSystemUtils::new();

        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "content").unwrap();

        assert!(fs_utils.is_dir(temp_dir.path()));
        assert!(!fs_utils.is_dir(&file_path));
        assert!(!fs_utils.is_dir("nonexistent"));
    }
}
