//! Directory listing, filtering, and recursive tree rendering.

mod layout;
pub(crate) mod walk;

use std::io;
use std::path::{Path, PathBuf};

pub use layout::{is_last_child, Glyphs, RenderContext};
pub use walk::{OsDirSource, TreeRenderer};

/// Default recursion ceiling when no depth is given.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Environment variable whose value is collapsed in symlink targets.
pub const WORKSPACE_VAR: &str = "GOPATH";

/// Link-aware kind of a filesystem entry (symlinks are never followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

impl From<std::fs::FileType> for EntryKind {
    fn from(ft: std::fs::FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Filename component only.
    pub name: String,
    /// Kind as reported by the listing.
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Abstraction over the filesystem so listings can be mocked with a fixed order.
pub trait DirSource {
    /// Immediate children of `path`, in listing order, unfiltered.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
    /// Children of the diagram root; also rejects a root that is not a directory.
    fn read_root(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.read_dir(path)
    }
    /// Kind of `path` without following a final symlink.
    fn symlink_metadata(&self, path: &Path) -> io::Result<EntryKind>;
    /// Target of the symlink at `path`.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Immutable settings for one rendering run.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Inclusive recursion ceiling; children of entries at this depth are not listed.
    pub max_depth: usize,
    /// Branch and continuation glyphs.
    pub glyphs: Glyphs,
    /// Entries whose name starts with this character are skipped entirely.
    pub hidden_marker: char,
    /// The single file extension (with leading dot) that is displayed.
    pub extension: &'static str,
    /// Value collapsed to `workspace_token` in symlink targets, if set.
    pub workspace_root: Option<String>,
    /// Placeholder written in place of `workspace_root`.
    pub workspace_token: &'static str,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            glyphs: Glyphs::BOX_DRAWING,
            hidden_marker: '.',
            extension: ".fish",
            workspace_root: None,
            workspace_token: "$GOPATH",
        }
    }
}

impl TreeConfig {
    /// Default config with the given depth and the workspace root read from the environment.
    pub fn from_env(max_depth: usize) -> Self {
        Self {
            max_depth,
            workspace_root: std::env::var(WORKSPACE_VAR).ok(),
            ..Self::default()
        }
    }
}
