use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Path to the configuration file
    #[clap(name = "config")]
    pub config: PathBuf,

    /// Export the rendered calendar to PDF after loading
    #[clap(long)]
    pub export: bool,
}
