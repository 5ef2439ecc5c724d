use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub const CALENDAR_TITLE: &str = "Calendario de Eventos Competencias";

const STYLESHEET: &str = r#"
body { font-family: sans-serif; margin: 16px; }
h1 { text-align: center; }
.calendar-month { margin-bottom: 24px; page-break-inside: avoid; }
.calendar-container { display: grid; grid-template-columns: repeat(7, 1fr); }
.calendar-day { border: 1px solid #ccc; min-height: 64px; padding: 4px; font-size: 12px; }
.calendar-container:first-of-type .calendar-day { min-height: 0; font-weight: bold; text-align: center; }
.calendar-day.weekend { background-color: #f2f2f2; }
.day-number { font-weight: bold; }
.event-point { display: inline-block; width: 6px; height: 6px; margin-right: 4px; border-radius: 50%; background-color: #deb887; }
"#;

/// Rendering surface for the calendar, an explicit handle instead of a
/// container looked up by name. Owns the month markup accumulated so
/// far and the path the finished page is written to.
#[derive(Debug)]
pub struct RenderTarget {
  path: PathBuf,
  body: String,
}

impl RenderTarget {
  pub const fn new(path: PathBuf) -> Self {
    Self {
      path,
      body: String::new(),
    }
  }

  /// Drop everything rendered so far.
  pub fn clear(&mut self) {
    self.body.clear();
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn is_empty(&self) -> bool {
    self.body.is_empty()
  }

  pub(crate) fn body_mut(&mut self) -> &mut String {
    &mut self.body
  }

  /// Wrap the accumulated month blocks into the final page and write
  /// it out.
  pub fn save(&self, title: &str) -> std::io::Result<()> {
    std::fs::write(&self.path, self.document(title))
  }

  fn document(&self, title: &str) -> String {
    let mut html = String::new();

    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, r#"<html lang="es">"#);
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, r#"<meta charset="utf-8">"#);
    let _ = writeln!(html, "<title>{title}</title>");
    let _ = writeln!(html, "<style>{STYLESHEET}</style>");
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, r#"<h1 id="calendarTitle">{title}</h1>"#);
    let _ = writeln!(html, r#"<div id="calendarContainer">"#);
    html.push_str(&self.body);
    let _ = writeln!(html, "</div>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");

    html
  }
}
