//! Comparison Chart
//!
//! Dual-series time-series chart on an HTML5 Canvas: Hawaiʻi as a solid line
//! against the other-states average as a dashed one. Missing years render as
//! gaps in the line, never as zero.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::api::MetricDocument;
use crate::theme::ChartTheme;

/// Display label for the regional series.
pub const HAWAII_LABEL: &str = "Hawaiʻi";
/// Display label for the comparison series.
pub const AVERAGE_LABEL: &str = "Other U.S. States (avg)";

/// Most x-axis labels drawn on any chart; longer series are thinned.
pub const MAX_X_TICKS: usize = 12;

/// Placeholder shown wherever a value is absent.
pub const NO_DATA_GLYPH: &str = "—";

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 400;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// One drawable series over the shared category axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub points: Vec<Option<f64>>,
    pub dashed: bool,
}

/// Declarative chart configuration derived from one snapshot.
///
/// A value object: building one never fails for a shape-valid document, and
/// painting consumes it without touching the document again.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub x_labels: Vec<String>,
    pub hawaii: Series,
    pub average: Series,
    pub unit: Option<String>,
}

impl ChartSpec {
    /// Build the dual-series configuration for one snapshot.
    pub fn from_document(document: &MetricDocument) -> Self {
        Self {
            x_labels: document.years.iter().map(|y| y.to_string()).collect(),
            hawaii: Series {
                label: HAWAII_LABEL,
                points: document.hawaii.clone(),
                dashed: false,
            },
            average: Series {
                label: AVERAGE_LABEL,
                points: document.other_states_avg.clone(),
                dashed: true,
            },
            unit: document.unit_label().map(str::to_owned),
        }
    }

    /// Number of periods on the x-axis.
    pub fn len(&self) -> usize {
        self.x_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_labels.is_empty()
    }

    /// Indices of the x labels that receive a drawn tick.
    pub fn tick_indices(&self) -> Vec<usize> {
        thinned_indices(self.len(), MAX_X_TICKS)
    }

    /// Min and max over every present value in both series.
    fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for series in [&self.hawaii, &self.average] {
            for value in series.points.iter().flatten() {
                bounds = Some(match bounds {
                    Some((lo, hi)) => (lo.min(*value), hi.max(*value)),
                    None => (*value, *value),
                });
            }
        }
        bounds
    }
}

/// Pick at most `max_ticks` evenly stepped indices out of `len` labels.
fn thinned_indices(len: usize, max_ticks: usize) -> Vec<usize> {
    if len == 0 || max_ticks == 0 {
        return Vec::new();
    }
    let step = if len <= max_ticks {
        1
    } else {
        (len + max_ticks - 1) / max_ticks
    };
    (0..len).step_by(step).collect()
}

/// Horizontal fraction of the plot area for category index `i` of `n`.
fn x_fraction(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.5
    } else {
        i as f64 / (n - 1) as f64
    }
}

/// Format a value with grouped thousands and at most two fraction digits.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let mut int_part = abs.trunc() as u64;
    let mut frac = ((abs - abs.trunc()) * 100.0).round() as u64;
    if frac >= 100 {
        int_part += 1;
        frac = 0;
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    let digits = int_part.to_string();
    let bytes = digits.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    if frac > 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{:02}", frac));
        }
    }
    out
}

/// Suffix appended to displayed values when the metric carries a unit.
fn unit_suffix(unit: Option<&str>) -> String {
    match unit {
        None => String::new(),
        Some("%") => "%".to_string(),
        Some(u) => format!(" {}", u),
    }
}

/// Format one data cell for the tooltip: value with unit, or the explicit
/// placeholder so "no data" reads differently from zero.
pub fn format_value(value: Option<f64>, unit: Option<&str>) -> String {
    match value {
        Some(v) => format!("{}{}", format_number(v), unit_suffix(unit)),
        None => NO_DATA_GLYPH.to_string(),
    }
}

/// Tooltip rows for the hovered period, one per series, in legend order.
pub fn tooltip_rows(spec: &ChartSpec, index: usize) -> Vec<(&'static str, String)> {
    let unit = spec.unit.as_deref();
    [&spec.hawaii, &spec.average]
        .into_iter()
        .map(|series| {
            let value = series.points.get(index).copied().flatten();
            (series.label, format_value(value, unit))
        })
        .collect()
}

/// Nearest category index for a mouse position over the canvas, or `None`
/// when the chart has no periods.
fn hover_index(css_x: f64, css_width: f64, n: usize) -> Option<usize> {
    if n == 0 || css_width <= 0.0 {
        return None;
    }
    let scale = CANVAS_WIDTH as f64 / css_width;
    let x = css_x * scale;
    let plot_width = CANVAS_WIDTH as f64 - MARGIN_LEFT - MARGIN_RIGHT;
    let fraction = ((x - MARGIN_LEFT) / plot_width).clamp(0.0, 1.0);
    if n == 1 {
        return Some(0);
    }
    Some((fraction * (n - 1) as f64).round() as usize)
}

/// Comparison chart component: canvas, hover tooltip, legend.
#[component]
pub fn ComparisonChart(document: MetricDocument) -> impl IntoView {
    let theme = use_context::<ChartTheme>().unwrap_or_default();
    let spec = store_value(ChartSpec::from_document(&document));
    let canvas_ref = create_node_ref::<html::Canvas>();
    let hover = create_rw_signal(None::<usize>);

    // Paint once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            spec.with_value(|s| draw_chart(&canvas, s, &theme));
        }
    });

    let on_move = move |ev: MouseEvent| {
        if let Some(canvas) = canvas_ref.get() {
            let css_width = canvas.client_width() as f64;
            let index =
                spec.with_value(|s| hover_index(ev.offset_x() as f64, css_width, s.len()));
            hover.set(index);
        }
    };

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH.to_string()
                height=CANVAS_HEIGHT.to_string()
                class="w-full h-64 md:h-96 rounded-lg"
                on:mousemove=on_move
                on:mouseleave=move |_| hover.set(None)
            />

            // Tooltip for the hovered period
            {move || {
                hover.get().map(|index| {
                    let (period, rows) = spec.with_value(|s| {
                        (s.x_labels[index].clone(), tooltip_rows(s, index))
                    });
                    let left = x_fraction(index, spec.with_value(ChartSpec::len)) * 100.0;
                    view! {
                        <div
                            class="absolute top-2 bg-gray-900/90 border border-gray-700 rounded-lg px-3 py-2 text-sm pointer-events-none"
                            style=format!("left: {:.1}%; transform: translateX(-50%);", left)
                        >
                            <div class="font-semibold mb-1">{period}</div>
                            {rows
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <div class="flex justify-between gap-4">
                                        <span class="text-gray-400">{label}</span>
                                        <span>{value}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }
                })
            }}

            <ChartLegend />
        </div>
    }
}

/// Legend for the two fixed series. The comparison swatch repeats the dashed
/// stroke so the pairing survives without color.
#[component]
fn ChartLegend() -> impl IntoView {
    let theme = use_context::<ChartTheme>().unwrap_or_default();

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            <LegendEntry label=HAWAII_LABEL color=theme.hawaii dashed=false />
            <LegendEntry label=AVERAGE_LABEL color=theme.average dashed=true />
        </div>
    }
}

#[component]
fn LegendEntry(label: &'static str, color: &'static str, dashed: bool) -> impl IntoView {
    let swatch_style = if dashed {
        format!("width: 18px; border-top: 3px dashed {};", color)
    } else {
        format!("width: 18px; border-top: 3px solid {};", color)
    };

    view! {
        <div class="flex items-center space-x-2">
            <div style=swatch_style />
            <span class="text-sm text-gray-300">{label}</span>
        </div>
    }
}

/// Draw the full chart on the canvas.
fn draw_chart(canvas: &HtmlCanvasElement, spec: &ChartSpec, theme: &ChartTheme) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Clear canvas
    ctx.set_fill_style_str(theme.background);
    ctx.fill_rect(0.0, 0.0, width, height);

    let Some((mut min, mut max)) = spec.value_bounds() else {
        ctx.set_fill_style_str(theme.muted_text);
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data available", width / 2.0 - 60.0, height / 2.0);
        return;
    };

    // Pad the y range so lines stay off the chart edges
    let y_range = max - min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    min -= y_padding;
    max += y_padding;

    // Horizontal grid lines with value labels
    ctx.set_stroke_style_str(theme.grid);
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * plot_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style_str(theme.axis_text);
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format_number(value), 5.0, y + 4.0);
    }

    // Axis title: the unit, when there is one
    if let Some(unit) = &spec.unit {
        ctx.set_fill_style_str(theme.axis_text);
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(unit, 5.0, 12.0);
    }

    for (series, color) in [(&spec.hawaii, theme.hawaii), (&spec.average, theme.average)] {
        let dash = series.dashed.then_some(theme.average_dash);
        draw_series(&ctx, series, color, dash, spec.len(), min, max, plot_width, plot_height);
    }

    // X-axis labels at thinned tick positions
    ctx.set_fill_style_str(theme.axis_text);
    ctx.set_font("12px sans-serif");
    for i in spec.tick_indices() {
        let x = MARGIN_LEFT + x_fraction(i, spec.len()) * plot_width;
        let _ = ctx.fill_text(&spec.x_labels[i], x - 15.0, height - 10.0);
    }
}

/// Draw one series as a polyline with pen-up at gaps, plus point markers on
/// present values.
#[allow(clippy::too_many_arguments)]
fn draw_series(
    ctx: &CanvasRenderingContext2d,
    series: &Series,
    color: &str,
    dash: Option<[f64; 2]>,
    n: usize,
    min: f64,
    max: f64,
    plot_width: f64,
    plot_height: f64,
) {
    let to_xy = |i: usize, value: f64| {
        let x = MARGIN_LEFT + x_fraction(i, n) * plot_width;
        let y = MARGIN_TOP + ((max - value) / (max - min)) * plot_height;
        (x, y)
    };

    ctx.set_stroke_style_str(color);
    ctx.set_line_width(2.0);
    if let Some([on, off]) = dash {
        let _ = ctx.set_line_dash(&js_sys::Array::of2(&on.into(), &off.into()));
    }

    ctx.begin_path();
    let mut pen_down = false;
    for (i, value) in series.points.iter().enumerate() {
        match value {
            Some(v) => {
                let (x, y) = to_xy(i, *v);
                if pen_down {
                    ctx.line_to(x, y);
                } else {
                    ctx.move_to(x, y);
                    pen_down = true;
                }
            }
            None => pen_down = false,
        }
    }
    ctx.stroke();

    if dash.is_some() {
        let _ = ctx.set_line_dash(&js_sys::Array::new());
    }

    ctx.set_fill_style_str(color);
    for (i, value) in series.points.iter().enumerate() {
        if let Some(v) = value {
            let (x, y) = to_xy(i, *v);
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }
}
