#![allow(dead_code)]

use fishtree::error::DiagramError;
use fishtree::tree::{DirEntry, DirSource, EntryKind, TreeConfig};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .with_target(false)
        .try_init();
}

/// TreeConfig with the given depth and no workspace root.
pub fn config_with_depth(max_depth: usize) -> TreeConfig {
    TreeConfig {
        max_depth,
        ..TreeConfig::default()
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// In-memory filesystem whose listings come back in insertion order.
#[derive(Default)]
pub struct MemoryDirSource {
    listings: HashMap<PathBuf, Vec<DirEntry>>,
    kinds: HashMap<PathBuf, EntryKind>,
    links: HashMap<PathBuf, PathBuf>,
    unreadable: HashSet<PathBuf>,
    listed: RefCell<Vec<PathBuf>>,
}

impl MemoryDirSource {
    /// Start with an empty directory at `root`.
    pub fn new(root: &str) -> Self {
        let mut source = Self::default();
        source.listings.insert(PathBuf::from(root), Vec::new());
        source.kinds.insert(PathBuf::from(root), EntryKind::Directory);
        source
    }

    /// Append `path` to its parent's listing.
    pub fn add(mut self, path: &str, kind: EntryKind) -> Self {
        let path = PathBuf::from(path);
        let parent = path.parent().expect("path has a parent").to_path_buf();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        self.listings
            .entry(parent)
            .or_default()
            .push(DirEntry::new(name, kind));
        if kind == EntryKind::Directory {
            self.listings.entry(path.clone()).or_default();
        }
        self.kinds.insert(path, kind);
        self
    }

    pub fn dir(self, path: &str) -> Self {
        self.add(path, EntryKind::Directory)
    }

    pub fn file(self, path: &str) -> Self {
        self.add(path, EntryKind::File)
    }

    pub fn symlink(mut self, path: &str, target: &str) -> Self {
        self.links.insert(PathBuf::from(path), PathBuf::from(target));
        self.add(path, EntryKind::Symlink)
    }

    /// Make listing `path` fail with permission denied.
    pub fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    /// Every directory listed so far, in call order.
    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }

    pub fn was_listed(&self, path: &str) -> bool {
        self.listed.borrow().iter().any(|p| p == Path::new(path))
    }
}

impl DirSource for MemoryDirSource {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.listed.borrow_mut().push(path.to_path_buf());
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("open {}: permission denied", path.display()),
            ));
        }
        self.listings
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<EntryKind> {
        self.kinds
            .get(path)
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such entry"))
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        self.links
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "not a symlink"))
    }
}

/// Run `diagram` into a buffer and return its result and the written lines.
pub fn run_diagram<S: DirSource>(
    source: &S,
    config: &TreeConfig,
    root: &Path,
) -> (Result<(), DiagramError>, Vec<String>) {
    let mut buf = Vec::new();
    let result = fishtree::diagram(source, config, root, &mut buf);
    let text = String::from_utf8(buf).unwrap();
    (result, text.lines().map(str::to_string).collect())
}
