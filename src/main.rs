#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]
use app::App;
use clap::Parser;

use logger::LogExt as _;

mod app;
pub mod calendar;
mod cli;
pub mod config;
mod export;
mod logger;
pub mod render;

/// The single user-facing failure message; causes go to the log.
const LOAD_FAILED_ALERT: &str = "No se pudo cargar el archivo Excel.";

fn main() -> anyhow::Result<()> {
    env_logger::builder().init();

    let cli = cli::Cli::parse();
    let config = config::init(cli.config).log_error("Could not load the configuration file")?;

    let mut app = App::new(config);

    if let Err(error) = app.run() {
        log::error!("{error:?}");
        eprintln!("{LOAD_FAILED_ALERT}");

        std::process::exit(1);
    }

    if cli.export {
        let pdf = export::download_pdf(app.target().path())?;

        log::info!("Exported {}", pdf.display());
    }

    Ok(())
}
