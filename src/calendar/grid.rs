use chrono::{Datelike as _, NaiveDate};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;
pub const GRID_LENGTH: usize = GRID_ROWS * GRID_COLS;

/// Saturday and Sunday columns under the Monday-first ordering.
pub const WEEKEND_COLS: [usize; 2] = [5, 6];

/// Fixed 6x7 layout of a single month. Cells before the first and
/// after the last day of the month stay empty, trailing rows included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
  year: i32,
  month0: u32,
  first_weekday: usize,
  days_in_month: u32,
}

impl MonthGrid {
  pub fn new(year: i32, month0: u32) -> Option<Self> {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;

    Some(Self {
      year,
      month0,
      first_weekday: first.weekday().num_days_from_monday() as usize,
      days_in_month: days_in_month(first),
    })
  }

  pub const fn year(&self) -> i32 {
    self.year
  }

  pub const fn month0(&self) -> u32 {
    self.month0
  }

  /// Column of the first day of the month, Monday = 0 .. Sunday = 6.
  pub const fn first_weekday(&self) -> usize {
    self.first_weekday
  }

  pub const fn days_in_month(&self) -> u32 {
    self.days_in_month
  }

  /// Day of month shown in the given cell, cells counted row by row.
  pub const fn day(&self, idx: usize) -> Option<u32> {
    if idx < self.first_weekday || idx >= GRID_LENGTH {
      return None;
    }

    let day = (idx - self.first_weekday + 1) as u32;

    if day > self.days_in_month {
      None
    } else {
      Some(day)
    }
  }

  pub fn rows(&self) -> impl Iterator<Item = [Option<u32>; GRID_COLS]> + '_ {
    (0..GRID_ROWS)
      .map(|row| core::array::from_fn(|col| self.day(row * GRID_COLS + col)))
  }
}

pub const fn is_weekend(col: usize) -> bool {
  col == WEEKEND_COLS[0] || col == WEEKEND_COLS[1]
}

/// Length of the month via day zero of the following month.
fn days_in_month(first: NaiveDate) -> u32 {
  let next = first
    .checked_add_months(chrono::Months::new(1))
    .unwrap_or(first);

  next.pred_opt().map_or(31, |last| last.day())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn june_2025_starts_in_the_sunday_column() {
    // 30 days, first day a Sunday
    let grid = MonthGrid::new(2025, 5).unwrap();

    assert_eq!(grid.first_weekday(), 6);
    assert_eq!(grid.days_in_month(), 30);

    // every cell before the 1st is blank
    for idx in 0..6 {
      assert_eq!(grid.day(idx), None);
    }

    assert_eq!(grid.day(6), Some(1));
    // last populated cell opens the sixth row
    assert_eq!(grid.day(35), Some(30));
    assert_eq!(grid.day(36), None);
    assert_eq!(grid.day(GRID_LENGTH - 1), None);
  }

  #[test]
  fn grid_is_always_six_by_seven() {
    // February 2027 fits four rows but still renders six
    let grid = MonthGrid::new(2027, 1).unwrap();

    assert_eq!(grid.first_weekday(), 0);
    assert_eq!(grid.days_in_month(), 28);
    assert_eq!(grid.rows().count(), GRID_ROWS);

    let days: usize = grid
      .rows()
      .map(|row| row.iter().flatten().count())
      .sum();
    assert_eq!(days, 28);
  }

  #[test]
  fn leap_february_has_29_days() {
    assert_eq!(MonthGrid::new(2024, 1).unwrap().days_in_month(), 29);
    assert_eq!(MonthGrid::new(2025, 1).unwrap().days_in_month(), 28);
  }

  #[test]
  fn weekend_columns_are_saturday_and_sunday() {
    assert!(!is_weekend(0));
    assert!(!is_weekend(4));
    assert!(is_weekend(5));
    assert!(is_weekend(6));
  }

  #[test]
  fn out_of_range_months_do_not_build() {
    assert_eq!(MonthGrid::new(2025, 12), None);
  }
}
