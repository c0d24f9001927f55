use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use super::layout::{is_last_child, RenderContext};
use super::{DirEntry, DirSource, EntryKind, TreeConfig};
use crate::render::{
    entry_line, has_extension, is_hidden, substitute_workspace_root, symlink_line,
};

/// `DirSource` backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirSource;

impl DirSource for OsDirSource {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        // One level only, sorted by byte-wise file name.
        WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                let entry = entry.map_err(io::Error::from)?;
                Ok(DirEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind: EntryKind::from(entry.file_type()),
                })
            })
            .collect()
    }

    fn read_root(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        // walkdir yields nothing for a non-directory root; report it instead.
        if !fs::metadata(path)?.is_dir() {
            return Err(io::Error::other(format!(
                "{}: not a directory",
                path.display()
            )));
        }
        self.read_dir(path)
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<EntryKind> {
        fs::symlink_metadata(path).map(|m| EntryKind::from(m.file_type()))
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }
}

/// Depth-first renderer writing one line per displayed entry.
pub struct TreeRenderer<'a, S: DirSource + ?Sized> {
    source: &'a S,
    config: &'a TreeConfig,
}

impl<'a, S: DirSource + ?Sized> TreeRenderer<'a, S> {
    pub fn new(source: &'a S, config: &'a TreeConfig) -> Self {
        Self { source, config }
    }

    /// Render the root's direct children at depth 1.
    pub fn render_top_level<W: Write + ?Sized>(
        &self,
        root: &Path,
        entries: &[DirEntry],
        out: &mut W,
    ) -> io::Result<()> {
        for (i, entry) in entries.iter().enumerate() {
            let ctx = RenderContext::top_level(is_last_child(i, entries.len()));
            self.render(root, entry, &ctx, out)?;
        }
        Ok(())
    }

    /// Render `entry` (a child of `parent`) and, for directories below the
    /// depth ceiling, everything beneath it. The first I/O error aborts.
    pub fn render<W: Write + ?Sized>(
        &self,
        parent: &Path,
        entry: &DirEntry,
        ctx: &RenderContext,
        out: &mut W,
    ) -> io::Result<()> {
        let config = self.config;

        if is_hidden(&entry.name, config.hidden_marker) {
            trace!(name = %entry.name, "skipping hidden entry");
            return Ok(());
        }

        let path = parent.join(&entry.name);
        let kind = self.source.symlink_metadata(&path)?;
        let prefix = ctx.prefix(&config.glyphs);

        match kind {
            EntryKind::Symlink => {
                let target = self.source.read_link(&path)?;
                let target = substitute_workspace_root(
                    &target.to_string_lossy(),
                    config.workspace_root.as_deref(),
                    config.workspace_token,
                );
                writeln!(out, "{}", symlink_line(&prefix, &entry.name, &target))?;
                // Never descend through a link, whatever it points at.
                return Ok(());
            }
            EntryKind::Directory => {
                writeln!(out, "{}", entry_line(&prefix, &entry.name))?;
            }
            EntryKind::File | EntryKind::Other => {
                if has_extension(&entry.name, config.extension) {
                    writeln!(out, "{}", entry_line(&prefix, &entry.name))?;
                } else {
                    trace!(name = %entry.name, "skipping file without matching extension");
                }
            }
        }

        if kind == EntryKind::Directory && ctx.depth < config.max_depth {
            debug!(path = %path.display(), depth = ctx.depth, "descending");
            let children = self.source.read_dir(&path)?;
            self.render_children(&path, &children, ctx, out)?;
        }
        Ok(())
    }

    /// Render every child of `dir`, deriving each child's context from `parent`.
    pub fn render_children<W: Write + ?Sized>(
        &self,
        dir: &Path,
        children: &[DirEntry],
        parent: &RenderContext,
        out: &mut W,
    ) -> io::Result<()> {
        for (i, child) in children.iter().enumerate() {
            let ctx = parent.child(&self.config.glyphs, is_last_child(i, children.len()));
            self.render(dir, child, &ctx, out)?;
        }
        Ok(())
    }
}
