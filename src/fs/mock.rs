// src/fs/mock.rs

use super::FileSystem;
use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir(Vec<String>), // List of child names
}

#[derive(Debug, Default)]
struct MockState {
    entries: HashMap<PathBuf, MockEntry>,
    /// Paths whose reads/listings fail with the given error kind.
    failures: HashMap<PathBuf, io::ErrorKind>,
}

/// In-memory filesystem for tests.
///
/// Clones share the same state, so a test can keep a handle and mutate the
/// tree while the watch core holds another one.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.add_dir("/");
        fs
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        ensure_dir_entry(&mut state.entries, path.as_ref());
    }

    /// Create or overwrite a file.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        let mut state = self.state.lock().unwrap();
        state
            .entries
            .insert(path.clone(), MockEntry::File(content.into()));

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir_entry(&mut state.entries, parent);
            link_child(&mut state.entries, parent, &path);
        }
    }

    /// Append bytes to an existing file (creates it if missing).
    pub fn append(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let existing = {
            let state = self.state.lock().unwrap();
            match state.entries.get(path) {
                Some(MockEntry::File(bytes)) => bytes.clone(),
                _ => Vec::new(),
            }
        };
        let mut bytes = existing;
        bytes.extend_from_slice(content.as_ref());
        self.add_file(path, bytes);
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        state.entries.remove(path);
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            if let Some(MockEntry::Dir(children)) = state.entries.get_mut(parent) {
                let name = name.to_string_lossy();
                children.retain(|c| *c != name);
            }
        }
    }

    /// Make every operation on `path` fail with `kind` until cleared.
    pub fn fail_with(&self, path: impl AsRef<Path>, kind: io::ErrorKind) {
        let mut state = self.state.lock().unwrap();
        state.failures.insert(path.as_ref().to_path_buf(), kind);
    }

    pub fn clear_failure(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        state.failures.remove(path.as_ref());
    }
}

fn ensure_dir_entry(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
    if entries.contains_key(path) {
        return;
    }
    entries.insert(path.to_path_buf(), MockEntry::Dir(Vec::new()));
    if let Some(parent) = path.parent() {
        // Avoid infinite loop at root
        if parent != path && !parent.as_os_str().is_empty() {
            ensure_dir_entry(entries, parent);
            link_child(entries, parent, path);
        }
    }
}

fn link_child(entries: &mut HashMap<PathBuf, MockEntry>, parent: &Path, child: &Path) {
    if let Some(MockEntry::Dir(children)) = entries.get_mut(parent) {
        if let Some(name) = child.file_name().and_then(|n| n.to_str()) {
            if !children.iter().any(|c| c == name) {
                children.push(name.to_string());
            }
        }
    }
}

fn injected(state: &MockState, path: &Path) -> io::Result<()> {
    match state.failures.get(path) {
        Some(kind) => Err(io::Error::new(*kind, format!("injected failure: {:?}", path))),
        None => Ok(()),
    }
}

impl FileSystem for MockFileSystem {
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let state = self.state.lock().unwrap();
        injected(&state, path)?;
        match state.entries.get(path) {
            Some(MockEntry::File(content)) => Ok(Box::new(Cursor::new(content.clone()))),
            Some(MockEntry::Dir(_)) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {:?}", path),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {:?}", path),
            )),
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        matches!(state.entries.get(path), Some(MockEntry::File(_)))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let state = self.state.lock().unwrap();
        injected(&state, path)?;
        match state.entries.get(path) {
            Some(MockEntry::Dir(children)) => {
                Ok(children.iter().map(|name| path.join(name)).collect())
            }
            _ => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Not a directory or not found: {:?}", path),
            )),
        }
    }
}
