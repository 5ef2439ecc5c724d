use std::collections::{BTreeMap, BTreeSet};

use calamine::Data;

use super::extract;
use super::serial::{self, SerialDate};

/// Formatted event strings of one month, keyed by day of month.
pub type DayEvents = BTreeMap<u32, Vec<String>>;

/// Events bucketed by year, zero-based month and day of month.
///
/// Entries within a day keep their input row order. The whole map is
/// rebuilt on every load and replaces the previous one.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EventMap {
    // year -> month0 -> day -> display strings
    events: BTreeMap<i32, BTreeMap<u32, DayEvents>>,
    // distinct (year, month0) pairs, ascending
    months: BTreeSet<(i32, u32)>,
}

impl EventMap {
    /// Bucket a row table. The first row is the header and is always
    /// skipped; rows that do not decode are warned about and dropped.
    pub fn from_rows<'a>(rows: impl Iterator<Item = &'a [Data]>) -> Self {
        let mut map = Self::default();

        for row in rows.skip(1) {
            let (Some(date), Some(clock)) = (
                extract::date_serial(row).and_then(serial::decode_date),
                extract::time_serial(row).and_then(serial::decode_time),
            ) else {
                log::warn!("Row with incomplete data: {row:?}");
                continue;
            };

            // Same rejections as re-parsing the formatted date string:
            // a zero component drops the row, year 2000 included.
            if date.day == 0 || date.month == 0 || date.year == 0 {
                log::warn!("Invalid date in row: {row:?}");
                continue;
            }

            let label = extract::label(row).unwrap_or_default();

            map.add_event(&date, format!("{label} ({clock})"));
        }

        map
    }

    pub fn add_event(&mut self, date: &SerialDate, entry: String) {
        self.events
            .entry(date.full_year())
            .or_default()
            .entry(date.month0())
            .or_default()
            .entry(date.day)
            .or_default()
            .push(entry);

        self.months.insert((date.full_year(), date.month0()));
    }

    /// Distinct (year, month0) pairs in chronological order.
    pub fn months(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.months.iter().copied()
    }

    pub fn days(&self, year: i32, month0: u32) -> Option<&DayEvents> {
        self.events.get(&year)?.get(&month0)
    }

    pub fn len_events(&self) -> usize {
        self.events
            .values()
            .flat_map(BTreeMap::values)
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn len_months(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}
