use std::fs;
use std::path::Path;

use crate::utils::error::BoxResult;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a UTF-8 file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    Ok(fs::read_to_string(path.as_ref())?)
}

/// Write a string to a file, creating parent directories as needed.
/// An existing file is overwritten.
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents.as_bytes())?;
    Ok(())
}

/// Remove a file if it exists, returning whether anything was removed
pub fn remove_file_if_exists<P: AsRef<Path>>(path: P) -> BoxResult<bool> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(false);
    }

    fs::remove_file(path)?;
    Ok(true)
}

/// Remove a directory only if it is empty
pub fn remove_dir_if_empty<P: AsRef<Path>>(path: P) -> BoxResult<bool> {
    let path = path.as_ref();
    if !path.is_dir() || fs::read_dir(path)?.next().is_some() {
        return Ok(false);
    }

    fs::remove_dir(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("a/b/index.html");

        write_file(&target, "hello").unwrap();
        assert_eq!(read_file(&target).unwrap(), "hello");

        write_file(&target, "again").unwrap();
        assert_eq!(read_file(&target).unwrap(), "again");
    }

    #[test]
    fn test_remove_helpers() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("guide");
        let file = dir.join("index.html");
        write_file(&file, "x").unwrap();

        assert!(!remove_dir_if_empty(&dir).unwrap());
        assert!(remove_file_if_exists(&file).unwrap());
        assert!(!remove_file_if_exists(&file).unwrap());
        assert!(remove_dir_if_empty(&dir).unwrap());
        assert!(!dir.exists());
    }
}
