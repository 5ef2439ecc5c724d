use std::path::{Path, PathBuf};

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::Browser;

use crate::logger::LogExt as _;

/// Fixed name of the exported document, written next to the page.
pub const PDF_FILENAME: &str = "calendario_eventos.pdf";

/// Letter sheet, printed landscape.
const PAPER_WIDTH_IN: f64 = 8.5;
const PAPER_HEIGHT_IN: f64 = 11.0;
const PAPER_MARGIN_IN: f64 = 0.0;

/// Capture scale of the rendered page.
const PAGE_SCALE: f64 = 1.5;

/// Print the rendered page through the browser collaborator.
/// Collaborator failures bubble up untouched.
pub fn download_pdf(page: &Path) -> anyhow::Result<PathBuf> {
    let page = page
        .canonicalize()
        .log_error("Rendered page is not on disk")?;
    let url = format!("file://{}", page.display());

    let browser = Browser::default()?;
    let tab = browser.new_tab()?;

    let pdf = tab
        .navigate_to(&url)?
        .wait_until_navigated()?
        .print_to_pdf(Some(PrintToPdfOptions {
            landscape: Some(true),
            print_background: Some(true),
            scale: Some(PAGE_SCALE),
            paper_width: Some(PAPER_WIDTH_IN),
            paper_height: Some(PAPER_HEIGHT_IN),
            margin_top: Some(PAPER_MARGIN_IN),
            margin_bottom: Some(PAPER_MARGIN_IN),
            margin_left: Some(PAPER_MARGIN_IN),
            margin_right: Some(PAPER_MARGIN_IN),
            ..Default::default()
        }))?;

    let out = page.with_file_name(PDF_FILENAME);
    std::fs::write(&out, pdf)?;

    Ok(out)
}
