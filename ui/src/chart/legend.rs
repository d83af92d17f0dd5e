use dioxus::prelude::*;

use crate::core::config::LegendGeometry;
use crate::core::metrics::Metric;
use crate::core::scene::LegendNode;
use crate::core::state::ChartState;

/// Clickable metric key in the top-right corner of the chart.
#[component]
pub fn Legend(
    entries: Vec<LegendNode>,
    geometry: LegendGeometry,
    on_promote: EventHandler<Metric>,
) -> Element {
    let busy = try_use_context::<Signal<ChartState>>()
        .map(|state| !state.read().is_interactive())
        .unwrap_or(false);
    let class = if busy { "legend legend--busy" } else { "legend" };
    let panel_height = geometry.panel_height(entries.len());

    rsx! {
        g {
            class,
            transform: "translate({geometry.x}, {geometry.y})",
            rect {
                class: "legend-background",
                x: -10,
                y: -10,
                width: "{geometry.width}",
                height: "{panel_height}",
                rx: 5,
            }
            for entry in entries {
                LegendItem { key: "{entry.metric.key()}", entry: entry.clone(), on_promote }
            }
        }
    }
}

#[component]
fn LegendItem(entry: LegendNode, on_promote: EventHandler<Metric>) -> Element {
    let metric = entry.metric;
    let class = if entry.active {
        "legend-item legend-item--active"
    } else {
        "legend-item"
    };

    rsx! {
        g {
            class,
            transform: "translate(0, {entry.offset_y})",
            role: "button",
            tabindex: 0,
            "aria-pressed": "{entry.active}",
            "aria-label": "{entry.label}",
            onclick: move |_| on_promote.call(metric),
            onkeydown: move |evt| {
                let key = evt.key().to_string().to_lowercase();
                if key == " " || key == "enter" {
                    evt.prevent_default();
                    on_promote.call(metric);
                }
            },
            rect {
                class: "legend-hit",
                x: -5,
                y: -2,
                width: 185,
                height: 20,
                rx: 3,
            }
            rect {
                class: "legend-swatch",
                x: 0,
                y: 0,
                width: 15,
                height: 15,
                rx: 2,
                fill: entry.color,
            }
            text { class: "legend-label", x: 20, y: 12, "{entry.label}" }
        }
    }
}
