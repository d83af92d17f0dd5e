use dioxus::prelude::*;

use crate::core::metrics::Metric;
use crate::core::scene::{BarNode, SegmentNode};

use super::tooltip::TooltipState;

/// One `<g>` per driver, keyed by driver name so reorders move nodes instead
/// of recreating them.
#[component]
pub fn BarsLayer(
    bars: Vec<BarNode>,
    tooltip: Signal<TooltipState>,
    on_promote: EventHandler<Metric>,
) -> Element {
    rsx! {
        g { class: "bars",
            for bar in bars {
                g {
                    key: "{bar.key}",
                    class: "driver-bar",
                    transform: "translate({bar.x}, 0)",
                    for segment in bar.segments {
                        SegmentRect {
                            key: "{segment.key}",
                            node: segment.clone(),
                            tooltip,
                            on_promote,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SegmentRect(
    node: SegmentNode,
    tooltip: Signal<TooltipState>,
    on_promote: EventHandler<Metric>,
) -> Element {
    let mut tooltip = tooltip;
    let metric = node.metric;
    let content = node.tooltip.clone();

    rsx! {
        rect {
            class: "bar-segment",
            "data-metric": metric.key(),
            x: 0,
            y: "{node.y}",
            width: "{node.width}",
            height: "{node.height}",
            fill: node.fill,
            onclick: move |_| on_promote.call(metric),
            onmouseenter: move |evt: MouseEvent| {
                let point = evt.page_coordinates();
                tooltip.with_mut(|state| state.show(content.clone(), point.x, point.y));
            },
            onmousemove: move |evt: MouseEvent| {
                let point = evt.page_coordinates();
                tooltip.with_mut(|state| state.track(point.x, point.y));
            },
            onmouseleave: move |_| tooltip.with_mut(TooltipState::hide),
        }
    }
}
