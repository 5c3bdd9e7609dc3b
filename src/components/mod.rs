//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod meta;
pub mod panel;

pub use chart::ComparisonChart;
pub use loading::ChartSkeleton;
pub use meta::PanelMeta;
pub use panel::Panel;
