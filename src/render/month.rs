use std::fmt::Write as _;

use chrono::{Locale, NaiveDate};

use crate::calendar::{is_weekend, DayEvents, MonthGrid, GRID_COLS};

use super::RenderTarget;

const WEEKDAY_NAMES: [&str; GRID_COLS] = [
  "Lunes",
  "Martes",
  "Miércoles",
  "Jueves",
  "Viernes",
  "Sábado",
  "Domingo",
];

/// Append one month block to the target: heading, weekday header row,
/// then six week rows. Cells outside the month stay empty but keep
/// their weekend styling.
pub fn render_month(
  target: &mut RenderTarget,
  grid: &MonthGrid,
  days: Option<&DayEvents>,
) -> core::fmt::Result {
  let html = target.body_mut();

  writeln!(html, r#"<div class="calendar-month">"#)?;
  writeln!(html, "<h2>{}</h2>", month_heading(grid))?;

  writeln!(html, r#"<div class="calendar-container">"#)?;
  for name in WEEKDAY_NAMES {
    writeln!(html, r#"<div class="calendar-day">{name}</div>"#)?;
  }
  writeln!(html, "</div>")?;

  for row in grid.rows() {
    writeln!(html, r#"<div class="calendar-container">"#)?;

    for (col, day) in row.into_iter().enumerate() {
      let class = if is_weekend(col) {
        "calendar-day weekend"
      } else {
        "calendar-day"
      };

      let Some(day) = day else {
        writeln!(html, r#"<div class="{class}"></div>"#)?;
        continue;
      };

      write!(html, r#"<div class="{class}">"#)?;
      write!(html, r#"<div class="day-number">{day}</div>"#)?;
      write!(html, r#"<div class="events">"#)?;

      for entry in days.and_then(|days| days.get(&day)).into_iter().flatten() {
        write!(html, r#"<span class="event-point"></span>{entry}<br>"#)?;
      }

      writeln!(html, "</div></div>")?;
    }

    writeln!(html, "</div>")?;
  }

  writeln!(html, "</div>")?;

  Ok(())
}

/// Localized heading in the "Enero 2025" form.
fn month_heading(grid: &MonthGrid) -> String {
  let heading = NaiveDate::from_ymd_opt(grid.year(), grid.month0() + 1, 1)
    .map_or_else(String::new, |first| {
      first.format_localized("%B %Y", Locale::es_ES).to_string()
    });

  capitalized(&heading)
}

fn capitalized(text: &str) -> String {
  let mut chars = text.chars();

  chars.next().map_or_else(String::new, |first| {
    first.to_uppercase().collect::<String>() + chars.as_str()
  })
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;
  use crate::calendar::{EventMap, SerialDate, GRID_ROWS};

  fn target() -> RenderTarget {
    RenderTarget::new(PathBuf::from("calendar.html"))
  }

  fn rendered(grid: &MonthGrid, days: Option<&DayEvents>) -> String {
    let mut target = target();
    render_month(&mut target, grid, days).unwrap();

    target.body_mut().clone()
  }

  #[test]
  fn june_2025_pads_six_leading_blanks() {
    let grid = MonthGrid::new(2025, 5).unwrap();
    let html = rendered(&grid, None);

    // header row + 6 week rows
    assert_eq!(html.matches(r#"<div class="calendar-container">"#).count(), GRID_ROWS + 1);

    // five plain blanks, the Saturday blank, then day 1 on Sunday
    let first_week = html
      .split(r#"<div class="calendar-container">"#)
      .nth(2)
      .unwrap();
    assert_eq!(first_week.matches(r#""calendar-day"></div>"#).count(), 5);
    assert_eq!(first_week.matches(r#""calendar-day weekend"></div>"#).count(), 1);
    assert!(first_week.contains(r#"<div class="day-number">1</div>"#));
  }

  #[test]
  fn events_render_in_input_order_with_markers() {
    let mut map = EventMap::default();
    let date = SerialDate { year: 25, month: 6, day: 14 };
    map.add_event(&date, "Centro (18:00)".into());
    map.add_event(&date, "Norte (06:00)".into());

    let grid = MonthGrid::new(2025, 5).unwrap();
    let html = rendered(&grid, map.days(2025, 5));

    let centro = html.find("Centro (18:00)").unwrap();
    let norte = html.find("Norte (06:00)").unwrap();
    assert!(centro < norte);
    assert_eq!(html.matches(r#"<span class="event-point"></span>"#).count(), 2);
  }

  #[test]
  fn weekend_columns_are_flagged_every_row() {
    let grid = MonthGrid::new(2025, 5).unwrap();
    let html = rendered(&grid, None);

    // two weekend cells per week row, none in the header row
    assert_eq!(html.matches("weekend").count(), GRID_ROWS * 2);
  }

  #[test]
  fn heading_is_the_capitalized_spanish_month() {
    let grid = MonthGrid::new(2025, 0).unwrap();
    let html = rendered(&grid, None);

    assert!(html.contains("<h2>Enero 2025</h2>"));
  }

  #[test]
  fn day_numbers_cover_the_whole_month() {
    let grid = MonthGrid::new(2025, 5).unwrap();
    let html = rendered(&grid, None);

    assert_eq!(html.matches(r#"<div class="day-number">"#).count(), 30);
  }
}
