use chrono::{DateTime, Datelike as _};

/// Days between the spreadsheet epoch (1899-12-30) and the Unix epoch.
pub const EPOCH_OFFSET_DAYS: f64 = 25569.0;
pub const SECS_PER_DAY: f64 = 86400.0;
pub const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Two-digit years are anchored to this century.
/// Dates before 2000 or after 2099 do not survive the round trip.
pub const CENTURY_BASE: i32 = 2000;

/// Calendar day decoded from a date serial. The year keeps only its
/// last two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SerialDate {
  pub year: i32,
  pub month: u32,
  pub day: u32,
}

impl SerialDate {
  pub const fn full_year(&self) -> i32 {
    CENTURY_BASE + self.year
  }

  /// Zero-based month index.
  pub const fn month0(&self) -> u32 {
    self.month - 1
  }
}

impl core::fmt::Display for SerialDate {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:02}-{:02}-{:02}", self.day, self.month, self.year)
  }
}

/// Decode a spreadsheet date serial, a count of whole days since the
/// spreadsheet epoch, into its calendar day read in UTC.
pub fn decode_date(serial: f64) -> Option<SerialDate> {
  if !serial.is_finite() {
    return None;
  }

  let secs = (serial - EPOCH_OFFSET_DAYS) * SECS_PER_DAY;
  let date = DateTime::from_timestamp(secs as i64, 0)?;

  Some(SerialDate {
    year: date.year().rem_euclid(100),
    month: date.month(),
    day: date.day(),
  })
}

/// Decode a fraction of a day into a wall clock string.
///
/// Fractions close enough to a whole day round past midnight and come
/// out as "24:00". That is left as is instead of wrapping.
pub fn decode_time(fraction: f64) -> Option<String> {
  if !fraction.is_finite() {
    return None;
  }

  let total_minutes = (fraction * MINUTES_PER_DAY).round() as i64;
  let hours = total_minutes / 60;
  let minutes = total_minutes % 60;

  Some(format!("{hours:02}:{minutes:02}"))
}
