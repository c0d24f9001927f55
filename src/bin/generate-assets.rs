#![forbid(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use fishtree::assets;
use std::path::PathBuf;

/// Write fishtree shell completions and man page.
#[derive(Parser, Debug)]
#[command(name = "generate-assets")]
struct AssetArgs {
    /// Output directory
    #[arg(default_value = "dist")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = AssetArgs::parse();
    let written = assets::write_all(&args.out_dir)
        .with_context(|| format!("{}: failed to write assets", args.out_dir.display()))?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
