//! Chart Theme
//!
//! The original page pulled its palette out of ambient CSS at load time; here
//! the palette is an explicit value constructed once at startup and handed to
//! every panel read-only through context.

/// Colors and stroke styling shared by every comparison chart on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
    /// Canvas background fill.
    pub background: &'static str,
    /// Grid line stroke.
    pub grid: &'static str,
    /// Axis label fill.
    pub axis_text: &'static str,
    /// Fill for the "no data" notice on an empty chart.
    pub muted_text: &'static str,
    /// Stroke for the Hawaiʻi series.
    pub hawaii: &'static str,
    /// Stroke for the other-states average series.
    pub average: &'static str,
    /// Dash pattern for the average series, so the two lines stay apart
    /// without relying on color alone.
    pub average_dash: [f64; 2],
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: "#1f2937", // gray-800
            grid: "#374151",       // gray-700
            axis_text: "#9ca3af",  // gray-400
            muted_text: "#6b7280", // gray-500
            hawaii: "#FF9800",     // orange
            average: "#2196F3",    // blue
            average_dash: [6.0, 4.0],
        }
    }
}
