//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use wsa_core::{
    application::{ApplicationError, ports::Filesystem},
    error::WsaResult,
};

/// In-memory filesystem for testing.
///
/// Mirrors `std::fs` semantics for the operations the port exposes: creating
/// a directory needs an existing parent, writing a file needs an existing
/// directory, and a path is either a file or a directory. Paths with no
/// parent (or an empty one) count as existing roots.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            None => true,
            Some(parent) if parent.as_os_str().is_empty() => true,
            Some(parent) => self.directories.contains(parent),
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory and all its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in path.as_ref().components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn fs_error(path: &Path, reason: &str) -> wsa_core::error::WsaError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir(&self, path: &Path) -> WsaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterLockError { name: "memory filesystem" })?;

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(fs_error(path, "File exists"));
        }
        if !inner.parent_exists(path) {
            return Err(fs_error(path, "Parent directory does not exist"));
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> WsaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterLockError { name: "memory filesystem" })?;

        if inner.directories.contains(path) {
            return Err(fs_error(path, "Is a directory"));
        }
        if !inner.parent_exists(path) {
            return Err(fs_error(path, "Parent directory does not exist"));
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_dir_seeds_ancestors() {
        let fs = MemoryFilesystem::new().with_dir("/tmp/x");
        assert!(fs.is_dir(Path::new("/tmp")));
        assert!(fs.is_dir(Path::new("/tmp/x")));
    }

    #[test]
    fn create_dir_requires_parent() {
        let fs = MemoryFilesystem::new().with_dir("/tmp");
        assert!(fs.create_dir(Path::new("/tmp/a/b")).is_err());
        fs.create_dir(Path::new("/tmp/a")).unwrap();
        fs.create_dir(Path::new("/tmp/a/b")).unwrap();
    }

    #[test]
    fn create_dir_twice_fails() {
        let fs = MemoryFilesystem::new().with_dir("/tmp");
        fs.create_dir(Path::new("/tmp/a")).unwrap();
        assert!(fs.create_dir(Path::new("/tmp/a")).is_err());
    }

    #[test]
    fn write_file_overwrites() {
        let fs = MemoryFilesystem::new().with_dir("/tmp");
        fs.write_file(Path::new("/tmp/f"), "one").unwrap();
        fs.write_file(Path::new("/tmp/f"), "two").unwrap();
        assert_eq!(fs.read_file("/tmp/f").as_deref(), Some("two"));
        assert_eq!(fs.list_files(), vec![PathBuf::from("/tmp/f")]);
    }

    #[test]
    fn relative_top_level_paths_have_an_implicit_root() {
        let fs = MemoryFilesystem::new();
        fs.create_dir(Path::new("module")).unwrap();
        assert!(fs.is_dir(Path::new("module")));
    }
}
