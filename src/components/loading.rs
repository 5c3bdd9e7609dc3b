//! Loading Component
//!
//! Skeleton placeholder shown while a panel's snapshot is in flight.

use leptos::*;

/// Skeleton for a panel body: chart area plus caption lines.
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="animate-pulse">
            <div class="h-64 bg-gray-700 rounded" />
            <div class="h-4 bg-gray-700 rounded w-2/3 mt-4" />
            <div class="h-4 bg-gray-700 rounded w-1/3 mt-2" />
        </div>
    }
}
