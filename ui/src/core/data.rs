//! Loading the season dataset.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use super::driver::DriverRecord;

/// Compiled-in copy of the default dataset.
pub const BUNDLED_DRIVERS: &str = include_str!("../../assets/data/f1_drivers_2024.json");

/// Where the chart reads its driver records from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", content = "location", rename_all = "snake_case")]
pub enum DataSource {
    /// HTTP(S) resource, fetched once (web builds).
    Url(String),
    /// Local JSON file (desktop builds).
    File(PathBuf),
    #[default]
    Bundled,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Bundled => f.write_str("bundled dataset"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("couldn't fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("couldn't read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("driver data is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("driver data contains no drivers")]
    Empty,

    /// Bars, segments and labels are keyed by driver name.
    #[error("driver {0:?} appears more than once")]
    DuplicateDriver(String),

    #[error("{0} can only be fetched from a web build")]
    UnsupportedSource(String),
}

pub fn parse_drivers(raw: &str) -> Result<Vec<DriverRecord>, LoadError> {
    let records: Vec<DriverRecord> = serde_json::from_str(raw)?;
    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    let mut seen = HashSet::with_capacity(records.len());
    if let Some(dup) = records.iter().find(|r| !seen.insert(r.driver.as_str())) {
        return Err(LoadError::DuplicateDriver(dup.driver.clone()));
    }
    Ok(records)
}

pub async fn load_drivers(source: &DataSource) -> Result<Vec<DriverRecord>, LoadError> {
    let raw = match source {
        DataSource::Bundled => BUNDLED_DRIVERS.to_string(),
        DataSource::File(path) => std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?,
        DataSource::Url(url) => fetch_text(url).await?,
    };

    let records = parse_drivers(&raw)?;
    info!(%source, drivers = records.len(), "driver data loaded");
    Ok(records)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, LoadError> {
    use gloo_net::http::Request;

    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| LoadError::Fetch {
            url: url.to_string(),
            reason: err.to_string(),
        })?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.text().await.map_err(|err| LoadError::Fetch {
        url: url.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(url: &str) -> Result<String, LoadError> {
    Err(LoadError::UnsupportedSource(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn bundled_dataset_loads() {
        let records = block_on(load_drivers(&DataSource::Bundled)).expect("bundled data parses");
        assert!(records.len() >= 10);
        assert!(records.iter().all(|r| !r.driver.trim().is_empty()));
    }

    #[test]
    fn parses_the_documented_schema() {
        let records = parse_drivers(
            r#"[{"driver":"Max Verstappen","total_points":575,"races_finished":22,
                 "positions_gained":10,"podiums":19,"avg_speed":215.4}]"#,
        )
        .expect("valid record");
        assert_eq!(records[0].driver, "Max Verstappen");
        assert_eq!(records[0].total_points, 575.0);
        assert_eq!(records[0].avg_speed, 215.4);
    }

    #[test]
    fn empty_array_is_an_error() {
        assert!(matches!(parse_drivers("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn repeated_driver_name_is_rejected() {
        let row = |driver: &str| {
            format!(
                r#"{{"driver":"{driver}","total_points":1,"races_finished":1,
                    "positions_gained":0,"podiums":0,"avg_speed":200}}"#
            )
        };
        let raw = format!(
            "[{},{},{}]",
            row("Lewis Hamilton"),
            row("George Russell"),
            row("Lewis Hamilton")
        );
        let err = parse_drivers(&raw).expect_err("duplicate name");
        assert!(matches!(&err, LoadError::DuplicateDriver(name) if name == "Lewis Hamilton"));
        assert_eq!(err.to_string(), r#"driver "Lewis Hamilton" appears more than once"#);
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = parse_drivers(r#"[{"driver":"Lando Norris","total_points":374}]"#)
            .expect_err("incomplete record");
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().starts_with("driver data is malformed"));
    }

    #[test]
    fn missing_file_reports_path() {
        let source = DataSource::File(PathBuf::from("/definitely/not/here/drivers.json"));
        let err = block_on(load_drivers(&source)).expect_err("file is missing");
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here/drivers.json"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn urls_need_a_web_build() {
        let source = DataSource::Url("https://example.com/drivers.json".into());
        let err = block_on(load_drivers(&source)).expect_err("no fetch on native");
        assert!(matches!(err, LoadError::UnsupportedSource(_)));
    }
}
