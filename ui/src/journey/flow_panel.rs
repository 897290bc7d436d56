//! Floating, draggable "Reading Flow" panel.
//!
//! Pointer handling lives in [`PanelState`]; this component only translates
//! Dioxus mouse events into calls on it. While a drag is active a transparent
//! overlay covers the viewport so moves and releases are seen even when the
//! pointer outruns the panel.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::core::config::story;
use crate::core::format::format_percent;
use crate::core::panel::{HitTarget, PanelState, Point};
use crate::core::scroll::ScrollSeries;
use crate::core::trend::{downsample, Trend, PANEL_FRAME};
use crate::journey::chart::{FlowChart, PANEL_GRID};
use crate::t;

#[component]
pub fn ReadingFlowPanel(series: Signal<ScrollSeries>) -> Element {
    let mut panel = use_signal(PanelState::default);
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    if !panel.read().visible() {
        return rsx! {
            button {
                r#type: "button",
                class: "flow-panel__reopen",
                title: t!("flow-reopen"),
                onclick: move |_| panel.write().show(),
                "📈"
            }
        };
    }

    let (values, trend) = {
        let series = series.read();
        (
            downsample(series.as_slice(), story().chart_points),
            Trend::between(series.previous(), series.latest()),
        )
    };
    let palette = trend.palette();
    let current = format_percent(trend.current);
    let delta = format_percent(trend.delta());
    let style = panel.read().placement_style();
    let engaged = panel.read().is_engaged();

    let mut press = move |target: HitTarget, evt: MouseEvent| {
        if target == HitTarget::Body {
            // No text selection while dragging.
            evt.prevent_default();
        }
        let pointer = evt.client_coordinates();
        let pointer = Point::new(pointer.x, pointer.y);
        let position = panel.read().position();
        if let Some(origin) = position {
            panel.write().press(target, pointer, origin);
            return;
        }
        // Still anchored bottom-right; the layout box gives the origin.
        if !panel.write().hold(target, pointer) {
            return;
        }
        let element = mounted();
        spawn(async move {
            let Some(element) = element else {
                panel.write().release();
                return;
            };
            match element.get_client_rect().await {
                Ok(rect) => {
                    let origin = Point::new(rect.origin.x, rect.origin.y);
                    if !panel.write().origin_measured(origin) {
                        debug!("Press released before the panel origin was measured");
                    }
                }
                Err(err) => {
                    debug!("Panel rect unavailable: {err:?}");
                    panel.write().release();
                }
            }
        });
    };

    rsx! {
        if engaged {
            div {
                class: "flow-panel__capture",
                onmousemove: move |evt: MouseEvent| {
                    let pointer = evt.client_coordinates();
                    panel.write().pointer_moved(Point::new(pointer.x, pointer.y));
                },
                onmouseup: move |_| panel.write().release(),
                onmouseleave: move |_| panel.write().release(),
            }
        }
        aside {
            class: "flow-panel {palette.css_class()}",
            style: "{style}",
            onmounted: move |evt: MountedEvent| mounted.set(Some(evt.data())),
            onmousedown: move |evt| press(HitTarget::Body, evt),
            onmousemove: move |evt: MouseEvent| {
                if panel.read().is_dragging() {
                    let pointer = evt.client_coordinates();
                    panel.write().pointer_moved(Point::new(pointer.x, pointer.y));
                }
            },
            onmouseup: move |_| panel.write().release(),

            div { class: "flow-panel__header",
                div {
                    h3 { class: "flow-panel__title", {t!("flow-title")} }
                    p { class: "flow-panel__hint", {t!("flow-drag-hint")} }
                }
                button {
                    r#type: "button",
                    class: "flow-panel__close",
                    title: t!("flow-close"),
                    onmousedown: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        press(HitTarget::Control, evt);
                    },
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        panel.write().hide();
                    },
                    "×"
                }
            }

            div { class: "flow-panel__chart",
                FlowChart {
                    values,
                    frame: PANEL_FRAME,
                    stroke: palette.stroke().to_string(),
                    id_prefix: "flow-panel",
                    grid: PANEL_GRID,
                    area_opacity: 0.2,
                }
            }

            div { class: "flow-panel__labels",
                span { {t!("flow-start")} }
                span { class: "flow-panel__current",
                    strong { "{current}" }
                    span { class: "flow-panel__trend", " {trend.arrow()} {delta}" }
                }
                span { {t!("flow-end")} }
            }
        }
    }
}
