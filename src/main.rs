#![forbid(unsafe_code)]

use fishtree::cli::{absolutize, Args};
use fishtree::error::Result;
use fishtree::tree::{OsDirSource, TreeConfig};
use std::{env, io};
use tracing_subscriber::EnvFilter;

/// Environment variable controlling diagnostic output on stderr.
const LOG_ENV: &str = "FISHTREE_LOG";

fn main() {
    init_tracing();
    if let Err(e) = run_app() {
        // User-facing errors go to stdout alongside the diagram.
        println!("{e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_app() -> Result<()> {
    let args = Args::try_parse_args(env::args_os())?;

    let root = args.root()?;
    let max_depth = args.max_depth()?;
    let root = absolutize(root)?;

    let config = TreeConfig::from_env(max_depth);
    tracing::debug!(
        root = %root.display(),
        max_depth,
        workspace_root = ?config.workspace_root,
        "rendering diagram"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    fishtree::diagram(&OsDirSource, &config, &root, &mut out)
}
