use clap::error::ErrorKind;
use clap::Parser;
use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{DiagramError, Result};
use crate::tree::DEFAULT_MAX_DEPTH;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "fishtree",
    version,
    about = "Draw a directory tree of folders and .fish files"
)]
pub struct Args {
    /// Directory to diagram
    #[arg(allow_hyphen_values = true)]
    pub path: Option<PathBuf>,

    /// Maximum recursion depth (default: 3)
    #[arg(allow_hyphen_values = true)]
    pub max_depth: Option<String>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Args {
    /// Parse `argv`, exiting for `--help`/`--version` and turning any other
    /// clap failure into a `DiagramError`.
    pub fn try_parse_args<I, T>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(argv).or_else(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => Err(DiagramError::Usage(e)),
        })
    }

    /// The root directory argument.
    pub fn root(&self) -> Result<&Path> {
        self.path.as_deref().ok_or(DiagramError::MissingRoot)
    }

    /// Parsed depth ceiling, falling back to the default when omitted.
    ///
    /// Any integer is accepted; negative values behave like 0.
    pub fn max_depth(&self) -> Result<usize> {
        let Some(raw) = &self.max_depth else {
            return Ok(DEFAULT_MAX_DEPTH);
        };
        let depth: i64 = raw.parse().map_err(DiagramError::InvalidDepth)?;
        Ok(usize::try_from(depth.max(0)).unwrap_or(usize::MAX))
    }
}

/// Make `path` absolute against the working directory and clean it lexically.
///
/// `.` components are dropped and `..` pops one level; symlinks are not
/// resolved and the path need not exist.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map_err(DiagramError::InvalidRoot)?
            .join(path)
    };

    let mut cleaned = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    Ok(cleaned)
}
