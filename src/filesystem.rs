//! Filesystem access used by the materializer.
//! `LocalFilesystem` writes to disk, `DryRunFilesystem` only records the plan.

use crate::error::{Error, Result};
use log::debug;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Operations the materializer needs from a filesystem.
pub trait Filesystem {
    /// Returns true if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Creates a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Writes a new file. Fails if the file already exists.
    fn write_new(&self, path: &Path, content: &str) -> Result<()>;
}

/// Filesystem backed by `std::fs`.
#[derive(Debug, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(Error::IoError)
    }

    fn write_new(&self, path: &Path, content: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create_new(true).open(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// A planned entry recorded by [`DryRunFilesystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedEntry {
    Directory,
    File(String),
}

/// Filesystem that reads existence from disk but never writes to it.
/// Created entries are kept in memory so later checks see them.
#[derive(Debug, Default)]
pub struct DryRunFilesystem {
    planned: RefCell<BTreeMap<PathBuf, PlannedEntry>>,
}

impl DryRunFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything that would have been created, ordered by path.
    pub fn planned(&self) -> BTreeMap<PathBuf, PlannedEntry> {
        self.planned.borrow().clone()
    }
}

impl Filesystem for DryRunFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.planned.borrow().contains_key(path) || path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        debug!("Dry run: would create directory {}", path.display());
        let mut planned = self.planned.borrow_mut();
        for ancestor in path.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            if ancestor.exists() {
                break;
            }
            planned.entry(ancestor.to_path_buf()).or_insert(PlannedEntry::Directory);
        }
        Ok(())
    }

    fn write_new(&self, path: &Path, content: &str) -> Result<()> {
        if self.exists(path) {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            )));
        }
        debug!("Dry run: would write {}", path.display());
        self.planned
            .borrow_mut()
            .insert(path.to_path_buf(), PlannedEntry::File(content.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_write_new_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.txt");
        let fs = LocalFilesystem::new();

        fs.write_new(&path, "first").unwrap();
        assert!(fs.write_new(&path, "second").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("project");
        let fs = DryRunFilesystem::new();

        fs.create_dir_all(&root.join("routes")).unwrap();
        fs.write_new(&root.join("routes/router.js"), "content").unwrap();

        assert!(!root.exists());
        assert!(fs.exists(&root));
        assert!(fs.write_new(&root.join("routes/router.js"), "again").is_err());

        let planned = fs.planned();
        assert_eq!(planned.get(&root), Some(&PlannedEntry::Directory));
        assert_eq!(
            planned.get(&root.join("routes/router.js")),
            Some(&PlannedEntry::File("content".to_string()))
        );
    }
}
