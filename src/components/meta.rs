//! Panel Caption
//!
//! Source attribution, update stamp, notes, and download links for one panel,
//! derived from the loaded snapshot. The derivation is a plain value so the
//! view layer stays a dumb projection of it.

use leptos::*;

use crate::api::{csv_path, snapshot_path, MetricDocument};

/// Shown when a snapshot carries no usable source link or name.
const SOURCE_FALLBACK: &str = "Official public datasets";

/// Caption content for one panel.
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataFragment {
    pub source: SourceLine,
    pub updated: String,
    pub notes: Vec<String>,
    pub downloads: Downloads,
}

/// Attribution line: a hyperlink when the snapshot names a URL, otherwise a
/// plain label. Never both.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceLine {
    Linked { label: String, url: String },
    Plain(String),
}

/// Download targets for the metric, derived purely from its slug.
#[derive(Clone, Debug, PartialEq)]
pub struct Downloads {
    pub json_href: String,
    pub csv_href: String,
}

impl MetadataFragment {
    pub fn from_document(document: &MetricDocument) -> Self {
        let label = document
            .source
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| SOURCE_FALLBACK.to_string());

        let source = match document.source.url.clone().filter(|u| !u.is_empty()) {
            Some(url) => SourceLine::Linked { label, url },
            None => SourceLine::Plain(label),
        };

        Self {
            source,
            updated: format_updated(&document.last_updated_utc),
            notes: document.notes.clone(),
            downloads: Downloads {
                json_href: snapshot_path(&document.slug),
                csv_href: csv_path(&document.slug),
            },
        }
    }
}

/// Render the snapshot timestamp in the viewer's time zone. An unparseable
/// stamp is passed through untouched rather than dropped.
fn format_updated(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%b %-d, %Y, %-I:%M %p")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

/// Caption block component. Replaces its container's content wholesale.
#[component]
pub fn PanelMeta(document: MetricDocument) -> impl IntoView {
    let meta = MetadataFragment::from_document(&document);
    let notes = meta.notes;

    view! {
        <div class="mt-4 text-sm text-gray-400 space-y-2">
            <div class="flex items-center justify-between">
                <span>
                    "Source: "
                    {match meta.source {
                        SourceLine::Linked { label, url } => view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener"
                                class="text-primary-400 hover:text-primary-300 underline"
                            >
                                {label}
                            </a>
                        }
                        .into_view(),
                        SourceLine::Plain(label) => view! { <span>{label}</span> }.into_view(),
                    }}
                </span>
                <span class="text-gray-500">{format!("Updated {}", meta.updated)}</span>
            </div>

            {(!notes.is_empty()).then(|| view! {
                <ul class="list-disc list-inside space-y-1 text-gray-500">
                    {notes
                        .into_iter()
                        .map(|note| view! { <li>{note}</li> })
                        .collect_view()}
                </ul>
            })}

            <div class="flex items-center space-x-3 text-xs">
                <span class="text-gray-500">"Download:"</span>
                <a href=meta.downloads.json_href download="" class="text-primary-400 hover:text-primary-300">
                    "JSON"
                </a>
                <a href=meta.downloads.csv_href download="" class="text-primary-400 hover:text-primary-300">
                    "CSV"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SourceInfo;

    fn document(source: SourceInfo, notes: Vec<String>) -> MetricDocument {
        MetricDocument {
            slug: "x".into(),
            title: "T".into(),
            unit: None,
            years: Vec::new(),
            hawaii: Vec::new(),
            other_states_avg: Vec::new(),
            source,
            last_updated_utc: "2024-03-01T06:00:00Z".into(),
            notes,
        }
    }

    #[test]
    fn source_with_url_becomes_a_link() {
        let doc = document(
            SourceInfo {
                name: Some("Census ACS".into()),
                url: Some("https://api.census.gov/data".into()),
            },
            Vec::new(),
        );
        let meta = MetadataFragment::from_document(&doc);
        assert_eq!(
            meta.source,
            SourceLine::Linked {
                label: "Census ACS".into(),
                url: "https://api.census.gov/data".into(),
            }
        );
    }

    #[test]
    fn source_without_url_falls_back_to_plain_text() {
        let named = document(
            SourceInfo {
                name: Some("CDC WISQARS".into()),
                url: None,
            },
            Vec::new(),
        );
        assert_eq!(
            MetadataFragment::from_document(&named).source,
            SourceLine::Plain("CDC WISQARS".into())
        );

        let empty = document(SourceInfo::default(), Vec::new());
        assert_eq!(
            MetadataFragment::from_document(&empty).source,
            SourceLine::Plain(SOURCE_FALLBACK.into())
        );
    }

    #[test]
    fn blank_url_is_not_a_link() {
        let doc = document(
            SourceInfo {
                name: Some("EIA".into()),
                url: Some(String::new()),
            },
            Vec::new(),
        );
        assert_eq!(
            MetadataFragment::from_document(&doc).source,
            SourceLine::Plain("EIA".into())
        );
    }

    #[test]
    fn notes_keep_their_order() {
        let doc = document(
            SourceInfo::default(),
            vec!["first".into(), "second".into(), "third".into()],
        );
        let meta = MetadataFragment::from_document(&doc);
        assert_eq!(meta.notes, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_notes_stay_empty() {
        let meta = MetadataFragment::from_document(&document(SourceInfo::default(), Vec::new()));
        assert!(meta.notes.is_empty());
    }

    #[test]
    fn downloads_derive_from_the_slug() {
        let meta = MetadataFragment::from_document(&document(SourceInfo::default(), Vec::new()));
        assert_eq!(meta.downloads.json_href, "data/v1/x.json");
        assert_eq!(meta.downloads.csv_href, "data/v1/csv/x.csv");

        // Pure in the slug: a second derivation is identical
        let again = MetadataFragment::from_document(&document(SourceInfo::default(), Vec::new()));
        assert_eq!(meta.downloads, again.downloads);
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        assert_eq!(format_updated("soon"), "soon");
    }

    #[test]
    fn rfc3339_timestamp_is_reformatted() {
        let formatted = format_updated("2024-03-01T06:00:00Z");
        assert_ne!(formatted, "2024-03-01T06:00:00Z");
        assert!(formatted.contains("2024"));
    }
}
