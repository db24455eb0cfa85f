// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub mod mock;

/// Abstract filesystem interface.
///
/// Everything returns plain `io::Result` so callers can tell filesystem
/// trouble apart from other failures.
pub trait FileSystem: Send + Sync + Debug {
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;
    fn is_file(&self, path: &Path) -> bool;

    /// Return a list of entries in a directory.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let file = fs::File::open(path)?;
        Ok(Box::new(file))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            entries.push(entry.path());
        }
        Ok(entries)
    }
}
