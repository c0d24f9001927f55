//! Shell completion scripts and the man page for the `fishtree` command.

use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cli::Args;

const BIN_NAME: &str = "fishtree";

/// Shells a completion script is written for.
pub const SHELLS: [Shell; 4] = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

/// Write one completion script per shell into `dir`, creating it if needed.
pub fn write_completions(dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    SHELLS
        .iter()
        .map(|&shell| generate_to(shell, &mut Args::command(), BIN_NAME, dir))
        .collect()
}

/// Render `fishtree.1` into `dir`, creating it if needed.
pub fn write_man_page(dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    let path = dir.join(format!("{BIN_NAME}.1"));
    fs::write(&path, buffer)?;
    Ok(path)
}

/// Write completions under `out_dir/completions` and the man page under `out_dir/man`.
pub fn write_all(out_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut written = write_completions(&out_dir.join("completions"))?;
    written.push(write_man_page(&out_dir.join("man"))?);
    Ok(written)
}
