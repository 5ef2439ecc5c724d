use std::io::{Cursor, Read as _};

use calamine::{Reader as _, Xlsx};

use crate::calendar::{EventMap, MonthGrid};
use crate::config::{Config, Source};
use crate::logger::LogExt as _;
use crate::render::{self, RenderTarget};

/// Pipeline progress. `Failed` is terminal and reachable from any
/// stage before `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Fetching,
    Parsing,
    Grouping,
    Rendering,
    Ready,
    Failed,
}

pub struct App {
    config: Config,
    state: State,
    target: RenderTarget,
}

impl App {
    pub fn new(config: Config) -> Self {
        let target = RenderTarget::new(config.output.page.clone());

        Self {
            config,
            state: State::Idle,
            target,
        }
    }

    pub const fn state(&self) -> State {
        self.state
    }

    pub const fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// Run the pipeline once. Whatever an earlier run rendered is
    /// discarded first; on failure nothing is written out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.target.clear();

        match self.load() {
            Ok(months) => {
                self.state = State::Ready;

                log::info!(
                    "Rendered {months} months to {}; export with --export",
                    self.target.path().display()
                );

                Ok(())
            }
            Err(error) => {
                self.state = State::Failed;

                Err(error)
            }
        }
    }

    fn load(&mut self) -> anyhow::Result<usize> {
        self.state = State::Fetching;
        let bytes = fetch(&self.config.source)?;

        self.state = State::Parsing;
        let mut workbook = Xlsx::new(Cursor::new(bytes))?;
        let range = workbook
            .worksheet_range_at(0)
            .log_error("Workbook has no readable sheet")??;

        self.state = State::Grouping;
        let events = EventMap::from_rows(range.rows());

        if events.is_empty() {
            log::warn!("No valid rows, rendering an empty calendar");
        } else {
            log::debug!(
                "Grouped {} events across {} months",
                events.len_events(),
                events.len_months()
            );
        }

        self.state = State::Rendering;
        let mut months = 0;

        for (year, month0) in events.months() {
            let Ok(grid) = MonthGrid::new(year, month0)
                .log_warn("Month outside the representable range")
            else {
                continue;
            };

            render::render_month(&mut self.target, &grid, events.days(year, month0))?;
            months += 1;
        }

        self.target.save(render::CALENDAR_TITLE)?;

        Ok(months)
    }
}

fn fetch(source: &Source) -> anyhow::Result<Vec<u8>> {
    match source {
        Source::Url(url) => {
            // non-2xx statuses surface as ureq::Error::Status
            let response = ureq::get(url.as_str()).call()?;

            let mut bytes = Vec::new();
            response.into_reader().read_to_end(&mut bytes)?;

            Ok(bytes)
        }
        Source::Path(path) => {
            std::fs::read(path).log_error("Could not read the spreadsheet")
        }
    }
}
