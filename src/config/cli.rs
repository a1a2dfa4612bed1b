use crate::domain::ports::ExportSink;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Export sink writing files under a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl ExportSink for LocalStorage {
    fn open(&self, file_name: &str) -> Result<(Box<dyn Write>, PathBuf)> {
        let full_path = Path::new(&self.base_path).join(file_name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&full_path)?;
        Ok((Box::new(BufWriter::new(file)), full_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let (mut writer, path) = storage.open("nested/dir/out.txt").unwrap();
        writer.write_all(b"hello").unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(path, temp_dir.path().join("nested/dir/out.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_open_fails_when_base_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let storage = LocalStorage::new(blocker.to_str().unwrap().to_string());
        assert!(storage.open("out.txt").is_err());
    }
}
