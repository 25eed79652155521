//! Driven (output) ports - implemented by infrastructure.
//!
//! - `Filesystem`: directory and file operations
//!   (`wsa_adapters::LocalFilesystem`, `wsa_adapters::MemoryFilesystem`)
//! - `ProgressReporter`: human-readable status lines (implemented by the CLI)

use std::path::Path;

use crate::domain::ModuleName;
use crate::error::WsaResult;

/// Port for filesystem operations.
///
/// Directories are created one level at a time, parents first. A missing
/// `--dir` root is an error; it is never created.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must exist.
    fn create_dir(&self, path: &Path) -> WsaResult<()>;

    /// Create or truncate a file and write `content` to it.
    fn write_file(&self, path: &Path, content: &str) -> WsaResult<()>;
}

/// A step of a scaffold run, emitted in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldEvent<'a> {
    /// The run is starting.
    Started { name: &'a ModuleName, root: &'a Path },
    /// The module directory exists and `force` was not set; nothing was touched.
    AlreadyExists { module_dir: &'a Path },
    /// A directory already exists and is left alone.
    DirectoryFound(&'a Path),
    /// A directory is about to be created.
    CreatingDirectory(&'a Path),
    /// A file is about to be written into `dir`.
    WritingFile { file: &'a Path, dir: &'a Path },
    /// Every step succeeded.
    Finished { module_dir: &'a Path },
}

/// Port for progress output.
pub trait ProgressReporter {
    fn report(&self, event: &ScaffoldEvent<'_>);
}

/// Reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn report(&self, _event: &ScaffoldEvent<'_>) {}
}
