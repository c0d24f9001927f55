#![forbid(unsafe_code)]
//! fishtree — draw a directory tree of folders and `.fish` files.

pub mod assets;
pub mod cli;
pub mod error;
pub mod render;
pub mod tree;

use std::io::Write;
use std::path::Path;

use error::{DiagramError, Result};
use tree::{DirSource, TreeConfig, TreeRenderer};

/// Line written after a successful run.
pub const COMPLETED_LINE: &str = "Diagram generation completed.";

/// Draw the tree rooted at `root` (already absolute) into `out`.
///
/// Lines written before a failure are left in place.
pub fn diagram<S, W>(source: &S, config: &TreeConfig, root: &Path, out: &mut W) -> Result<()>
where
    S: DirSource + ?Sized,
    W: Write + ?Sized,
{
    let entries = source.read_root(root).map_err(DiagramError::ReadRoot)?;
    writeln!(out, "{}", root_name(root)).map_err(DiagramError::Render)?;

    TreeRenderer::new(source, config)
        .render_top_level(root, &entries, out)
        .map_err(DiagramError::Render)?;

    writeln!(out, "{COMPLETED_LINE}").map_err(DiagramError::Render)?;
    Ok(())
}

/// Final path component of `root`, or the whole path when there is none (e.g. `/`).
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
