//! App Root Component
//!
//! Provides the shared chart theme and hosts the dashboard.

use leptos::*;

use crate::pages::Dashboard;
use crate::theme::ChartTheme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Shared read-only theme, constructed once at startup
    provide_context(ChartTheme::default());

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <main class="flex-1 container mx-auto px-4 py-8">
                <Dashboard />
            </main>

            <footer class="border-t border-gray-700 py-4 px-4">
                <div class="container mx-auto text-sm text-gray-500">
                    "Snapshots are regenerated periodically from public federal datasets. "
                    "Each panel loads on its own; a missing dataset only affects its own chart."
                </div>
            </footer>
        </div>
    }
}
