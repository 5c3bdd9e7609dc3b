//! Dashboard Panel
//!
//! One chart plus its caption, bound to exactly one metric. The panel owns
//! its whole load-then-render pipeline, so a missing or malformed snapshot
//! takes down this panel and nothing else.

use leptos::*;

use crate::api::{self, MetricDocument, SnapshotError};
use crate::components::chart::ComparisonChart;
use crate::components::loading::ChartSkeleton;
use crate::components::meta::PanelMeta;

/// A metric the page knows how to display: the snapshot slug plus the label
/// shown before the snapshot arrives and in the failure caption.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelDef {
    pub slug: &'static str,
    pub title: &'static str,
}

/// Pipeline state for one panel. Each panel runs the pipeline exactly once
/// per page life; both end states are terminal.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelPhase {
    Loading,
    Ready(MetricDocument),
    Failed,
}

impl PanelPhase {
    /// Fold a load outcome into the terminal phase.
    pub fn from_result(result: Result<MetricDocument, SnapshotError>) -> Self {
        match result {
            Ok(document) => PanelPhase::Ready(document),
            Err(_) => PanelPhase::Failed,
        }
    }
}

/// Caption text for a panel whose snapshot could not be loaded.
pub fn unavailable_text(title: &str) -> String {
    format!("{} data unavailable.", title)
}

/// Panel component: load the snapshot, then chart + caption, or the
/// unavailable notice.
#[component]
pub fn Panel(def: PanelDef) -> impl IntoView {
    let phase = create_rw_signal(PanelPhase::Loading);

    // Kick off this panel's own load; sibling panels overlap theirs freely.
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_metric(def.slug).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("panel {}: {}", def.slug, e).into());
            }
            phase.set(PanelPhase::from_result(result));
        });
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">
                {move || match phase.get() {
                    PanelPhase::Ready(document) => document.title,
                    _ => def.title.to_string(),
                }}
            </h2>

            {move || match phase.get() {
                PanelPhase::Loading => view! { <ChartSkeleton /> }.into_view(),
                PanelPhase::Ready(document) => view! {
                    <ComparisonChart document=document.clone() />
                    <PanelMeta document=document />
                }
                .into_view(),
                PanelPhase::Failed => view! {
                    <div class="mt-4 text-sm text-gray-400">
                        {unavailable_text(def.title)}
                    </div>
                }
                .into_view(),
            }}
        </section>
    }
}
