use std::path::PathBuf;

use url::Url;

#[derive(Debug, serde::Deserialize)]
pub struct Config {
    pub source: Source,
    #[serde(default)]
    pub output: Output,
}

/// Where the spreadsheet comes from. Exactly one fetch per run.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Url(Url),
    Path(PathBuf),
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Output {
    /// Path the rendered calendar page is written to.
    #[serde(default = "default_page")]
    pub page: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            page: default_page(),
        }
    }
}

pub fn init(path: PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
    let string = std::fs::read_to_string(path)?;
    let config = toml::from_str(&string)?;

    Ok(config)
}

fn default_page() -> PathBuf {
    PathBuf::from("calendar.html")
}
