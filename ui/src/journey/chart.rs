use dioxus::prelude::*;

use crate::core::trend::{line_path, ChartFrame};

/// Background grid drawn behind a [`FlowChart`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub cell_width: u32,
    pub cell_height: u32,
    pub color: &'static str,
}

pub const PANEL_GRID: GridSpec = GridSpec {
    cell_width: 20,
    cell_height: 20,
    color: "#e5e7eb",
};

pub const FOOTER_GRID: GridSpec = GridSpec {
    cell_width: 40,
    cell_height: 10,
    color: "#1e293b",
};

/// Area-and-line trace of reading progress inside `frame`. `id_prefix` names
/// the SVG `defs` and must be unique on the page.
#[component]
pub fn FlowChart(
    values: Vec<f64>,
    frame: ChartFrame,
    stroke: String,
    id_prefix: String,
    grid: GridSpec,
    area_opacity: f64,
) -> Element {
    let points = frame.points(&values);
    let line = line_path(&points);
    let area = frame.area_path(&points);
    let end = points.last().copied();
    let view_box = format!("0 0 {} {}", frame.width, frame.height);
    let fill_id = format!("{id_prefix}-fill");
    let grid_id = format!("{id_prefix}-grid");
    let grid_path = format!(
        "M {w} 0 L 0 0 0 {h}",
        w = grid.cell_width,
        h = grid.cell_height
    );

    rsx! {
        svg {
            class: "flow-chart",
            view_box: "{view_box}",
            "preserveAspectRatio": "none",
            width: "100%",
            height: "100%",
            defs {
                pattern {
                    id: "{grid_id}",
                    width: "{grid.cell_width}",
                    height: "{grid.cell_height}",
                    "patternUnits": "userSpaceOnUse",
                    path {
                        d: "{grid_path}",
                        fill: "none",
                        stroke: "{grid.color}",
                        "stroke-width": "0.5",
                    }
                }
                linearGradient { id: "{fill_id}", x1: "0", y1: "0", x2: "0", y2: "1",
                    stop { offset: "0%", "stop-color": "{stroke}" }
                    stop { offset: "100%", "stop-color": "{stroke}", "stop-opacity": "0" }
                }
            }
            rect { width: "100%", height: "100%", fill: "url(#{grid_id})" }
            if !line.is_empty() {
                path { d: "{area}", fill: "url(#{fill_id})", opacity: "{area_opacity}" }
                path {
                    d: "{line}",
                    fill: "none",
                    stroke: "{stroke}",
                    "stroke-width": "2",
                    "stroke-linecap": "round",
                    "stroke-linejoin": "round",
                }
            }
            if let Some(end) = end {
                circle {
                    class: "flow-chart__dot",
                    cx: "{end.x}",
                    cy: "{end.y}",
                    r: "3",
                    fill: "{stroke}",
                }
            }
        }
    }
}
