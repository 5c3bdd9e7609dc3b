//! Dashboard Page
//!
//! The whole page: a fixed set of comparison panels, one per published
//! snapshot, each loading and rendering independently of its siblings.

use leptos::*;

use crate::components::panel::PanelDef;
use crate::components::Panel;

/// The metrics the data pipeline publishes, in display order. Slugs are the
/// snapshot file names under `data/v1/`.
const PANELS: &[PanelDef] = &[
    PanelDef {
        slug: "broadband_adoption_households_share",
        title: "Broadband adoption (share of households)",
    },
    PanelDef {
        slug: "energy_renewables_share_generation",
        title: "Renewables share of electricity generation",
    },
    PanelDef {
        slug: "public_health_uninsured_share",
        title: "Uninsured share of population",
    },
    PanelDef {
        slug: "higher_ed_ba_plus_share",
        title: "Adults 25+ with a bachelor's degree or higher",
    },
    PanelDef {
        slug: "public_health_ypll75_rate_per_100k",
        title: "Premature deaths, YPLL before 75 (per 100,000)",
    },
];

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Hawaiʻi vs. Other States"</h1>
                <p class="text-gray-400 mt-1">
                    "How Hawaiʻi compares with the average of the other U.S. states"
                </p>
            </div>

            // One independent panel per metric
            <div class="grid md:grid-cols-2 gap-8">
                {PANELS
                    .iter()
                    .map(|def| view! { <Panel def=*def /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_slugs_are_unique() {
        let mut slugs: Vec<_> = PANELS.iter().map(|d| d.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), PANELS.len());
    }

    #[test]
    fn panel_slugs_are_nonempty() {
        assert!(PANELS.iter().all(|d| !d.slug.is_empty()));
    }
}
