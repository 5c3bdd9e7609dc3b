//! Snapshot Client
//!
//! Fetches the per-metric JSON documents that the data pipeline publishes as
//! static files next to the page. One GET per call, no retries: snapshots
//! either exist or they don't, and a failed panel reports itself.

use std::fmt;

use gloo_net::http::Request;
use thiserror::Error;

/// Relative directory holding the per-metric JSON snapshots.
pub const DATA_BASE: &str = "data/v1";

/// Path of the JSON snapshot for a metric slug.
pub fn snapshot_path(slug: &str) -> String {
    format!("{}/{}.json", DATA_BASE, slug)
}

/// Path of the flattened CSV export for a metric slug.
///
/// The CSV is referenced by URL only (download link); this client never
/// fetches it.
pub fn csv_path(slug: &str) -> String {
    format!("{}/csv/{}.csv", DATA_BASE, slug)
}

/// Errors surfaced by [`fetch_metric`].
///
/// Callers treat both variants as "metric unavailable"; the split exists so
/// the console diagnostic says whether the file was missing or malformed.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The request could not be sent or came back with a non-success status.
    #[error("fetching {path} failed: {detail}")]
    Load { path: String, detail: String },
    /// The response body is not a well-formed metric snapshot.
    #[error("snapshot {path} is malformed: {detail}")]
    Parse { path: String, detail: String },
}

/// Attribution for the dataset behind a snapshot.
///
/// The pipeline writes anything from `{}` to `{name, url}` here.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct SourceInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A period label on the shared x-axis.
///
/// Snapshots carry calendar years as JSON numbers today; string labels pass
/// through untouched if the pipeline ever emits them.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum YearLabel {
    Year(i64),
    Text(String),
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearLabel::Year(y) => write!(f, "{}", y),
            YearLabel::Text(t) => f.write_str(t),
        }
    }
}

/// One metric snapshot as the data pipeline publishes it.
///
/// Immutable after load; the renderer only derives from it. Unknown fields
/// are ignored so newer pipeline output keeps loading on older pages.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MetricDocument {
    /// Stable identifier, assigned by the pipeline. Also keys the snapshot
    /// path and the download links.
    #[serde(rename = "metric_id")]
    pub slug: String,
    /// Display label for the chart.
    pub title: String,
    /// Display unit. The pipeline writes `""` for unitless metrics.
    #[serde(default)]
    pub unit: Option<String>,
    /// Ordered period labels; the shared x-axis for both series.
    pub years: Vec<YearLabel>,
    /// Hawaiʻi values, one per year. `null` means no data for that year.
    pub hawaii: Vec<Option<f64>>,
    /// Simple average of the other states, aligned with `hawaii`.
    pub other_states_avg: Vec<Option<f64>>,
    #[serde(default)]
    pub source: SourceInfo,
    /// When the snapshot was produced (ISO 8601).
    pub last_updated_utc: String,
    /// Methodology caveats, rendered verbatim in order.
    #[serde(default)]
    pub notes: Vec<String>,
}

impl MetricDocument {
    /// Check the cross-field shape the renderer relies on: both series must
    /// align one-to-one with the year labels.
    pub fn validate(&self) -> Result<(), String> {
        if self.hawaii.len() != self.years.len() || self.other_states_avg.len() != self.years.len()
        {
            return Err(format!(
                "series lengths {}/{} do not match {} year labels",
                self.hawaii.len(),
                self.other_states_avg.len(),
                self.years.len()
            ));
        }
        Ok(())
    }

    /// Unit for display, treating the pipeline's `""` as absent.
    pub fn unit_label(&self) -> Option<&str> {
        self.unit.as_deref().filter(|u| !u.is_empty())
    }
}

/// Fetch one metric snapshot.
///
/// Bypasses the HTTP cache so a freshly regenerated snapshot is picked up on
/// the next page load instead of a stale copy silently misleading readers.
pub async fn fetch_metric(slug: &str) -> Result<MetricDocument, SnapshotError> {
    let path = snapshot_path(slug);

    let response = Request::get(&path)
        .cache(web_sys::RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| SnapshotError::Load {
            path: path.clone(),
            detail: e.to_string(),
        })?;

    if !response.ok() {
        return Err(SnapshotError::Load {
            detail: format!("status {}", response.status()),
            path,
        });
    }

    let body = response.text().await.map_err(|e| SnapshotError::Parse {
        path: path.clone(),
        detail: e.to_string(),
    })?;

    let document: MetricDocument =
        serde_json::from_str(&body).map_err(|e| SnapshotError::Parse {
            path: path.clone(),
            detail: e.to_string(),
        })?;

    document
        .validate()
        .map_err(|detail| SnapshotError::Parse { path, detail })?;

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENEWABLES_SNAPSHOT: &str = r#"{
        "metric_id": "energy_renewables_share_generation",
        "title": "Renewables share of electricity generation",
        "unit": "percent",
        "years": [2019, 2020, 2021],
        "hawaii": [14.9, null, 17.7],
        "other_states_avg": [18.2, 19.6, 20.4],
        "notes": ["Utility-scale generation only."],
        "source": {
            "name": "EIA",
            "url": "https://api.eia.gov/v2/electricity"
        },
        "last_updated_utc": "2024-03-01T06:00:00Z"
    }"#;

    #[test]
    fn parses_pipeline_snapshot() {
        let doc: MetricDocument = serde_json::from_str(RENEWABLES_SNAPSHOT).unwrap();
        assert_eq!(doc.slug, "energy_renewables_share_generation");
        assert_eq!(doc.years.len(), 3);
        assert_eq!(doc.hawaii, vec![Some(14.9), None, Some(17.7)]);
        assert_eq!(doc.other_states_avg[2], Some(20.4));
        assert_eq!(doc.source.url.as_deref(), Some("https://api.eia.gov/v2/electricity"));
        assert_eq!(doc.notes.len(), 1);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn optional_fields_default() {
        let doc: MetricDocument = serde_json::from_str(
            r#"{
                "metric_id": "m",
                "title": "T",
                "years": [],
                "hawaii": [],
                "other_states_avg": [],
                "last_updated_utc": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(doc.unit, None);
        assert_eq!(doc.source, SourceInfo::default());
        assert!(doc.notes.is_empty());
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn empty_source_object_is_accepted() {
        let doc: MetricDocument = serde_json::from_str(
            r#"{
                "metric_id": "m",
                "title": "T",
                "years": [2020],
                "hawaii": [1.0],
                "other_states_avg": [2.0],
                "source": {},
                "last_updated_utc": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(doc.source.name, None);
        assert_eq!(doc.source.url, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let doc: MetricDocument = serde_json::from_str(
            r#"{
                "metric_id": "m",
                "title": "T",
                "years": [2020],
                "hawaii": [1.0],
                "other_states_avg": [2.0],
                "last_updated_utc": "2024-01-01T00:00:00Z",
                "schema_version": 2,
                "responsibility": "DBEDT"
            }"#,
        )
        .unwrap();
        assert_eq!(doc.title, "T");
    }

    #[test]
    fn missing_title_is_a_parse_failure() {
        let result: Result<MetricDocument, _> = serde_json::from_str(
            r#"{
                "metric_id": "m",
                "years": [2020],
                "hawaii": [1.0],
                "other_states_avg": [2.0],
                "last_updated_utc": "2024-01-01T00:00:00Z"
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn mismatched_series_lengths_fail_validation() {
        let doc: MetricDocument = serde_json::from_str(
            r#"{
                "metric_id": "m",
                "title": "T",
                "years": [2019, 2020],
                "hawaii": [1.0],
                "other_states_avg": [2.0, 2.5],
                "last_updated_utc": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(doc.validate().is_err());
    }

    #[test]
    fn empty_unit_reads_as_absent() {
        let doc: MetricDocument = serde_json::from_str(
            r#"{
                "metric_id": "m",
                "title": "T",
                "unit": "",
                "years": [],
                "hawaii": [],
                "other_states_avg": [],
                "last_updated_utc": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(doc.unit_label(), None);
    }

    #[test]
    fn year_labels_display_numbers_and_text() {
        assert_eq!(YearLabel::Year(2023).to_string(), "2023");
        assert_eq!(YearLabel::Text("2023 (prelim)".into()).to_string(), "2023 (prelim)");
    }

    #[test]
    fn derived_paths_are_stable_in_slug() {
        assert_eq!(snapshot_path("x"), "data/v1/x.json");
        assert_eq!(csv_path("x"), "data/v1/csv/x.csv");
        assert_eq!(snapshot_path("x"), snapshot_path("x"));
        assert_eq!(csv_path("x"), csv_path("x"));
    }
}
