use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use tracing::{debug, error, info};

use crate::core::animation::Transition;
use crate::core::config::ChartConfig;
use crate::core::data::load_drivers;
use crate::core::driver::{normalize, NormalizedSet};
use crate::core::layout::stack_bars;
use crate::core::metrics::Metric;
use crate::core::order::StackOrder;
use crate::core::scene::Scene;
use crate::core::state::{ChartState, PromoteOutcome};
use crate::core::platform::{self, Platform};
use crate::core::timing;
use crate::t;

use super::bars::BarsLayer;
use super::labels::DriverLabels;
use super::legend::Legend;
use super::tooltip::{Tooltip, TooltipState};
use super::ChartStatus;

type SenderSlot = Rc<RefCell<Option<UnboundedSender<ChartEvent>>>>;

#[cfg(debug_assertions)]
fn log_chart_render(status: &ChartStatus, bars: usize) {
    debug!(?status, bars, "DriverChart render");
}

/// Loads the dataset, then owns every reorder of the chart.
///
/// Promote requests from the legend and the segments are funnelled through a
/// single event loop; the animation task reports back with
/// [`ChartEvent::TransitionComplete`] to release the lock.
#[component]
pub fn DriverChart() -> Element {
    let config = try_use_context::<ChartConfig>().unwrap_or_default();
    // Re-render localized text when the platform switches language.
    let _lang_marker = try_use_context::<Signal<String>>().map(|code| code());
    let status = use_signal(ChartStatus::default);
    let chart_state = use_context_provider(|| Signal::new(ChartState::default()));
    let scene = use_signal(Scene::empty);
    let tooltip = use_signal(TooltipState::default);

    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();
    let config_for_loop = config.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<ChartEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let config = config_for_loop.clone();
        let mut status = status;
        let mut chart_state = chart_state;
        let mut tooltip = tooltip;

        async move {
            debug!(platform = Platform::current().as_str(), source = %config.data, "loading driver data");
            let data = match load_drivers(&config.data).await {
                Ok(records) => normalize(&records),
                Err(err) => {
                    error!(source = %config.data, %err, "driver data unavailable");
                    chart_state.with_mut(ChartState::disable);
                    status.set(ChartStatus::Failed(err.to_string()));
                    return;
                }
            };

            status.set(ChartStatus::Ready {
                drivers: data.records.len(),
                degenerate: data.degenerate.clone(),
            });

            if let Some(generation) = chart_state.with_mut(ChartState::begin_transition) {
                let order = *chart_state.peek().order();
                let transition =
                    Transition::new(Scene::empty(), compose(&order, &data, &config), config.timings);
                start_transition(&sender_slot, scene, transition, generation, config.frame_interval_ms);
            }

            while let Some(event) = rx.next().await {
                match event {
                    ChartEvent::Promote(metric) => {
                        let outcome = chart_state.with_mut(|state| state.request_promote(metric));
                        let PromoteOutcome::Accepted { generation } = outcome else {
                            continue;
                        };

                        tooltip.with_mut(TooltipState::hide);
                        let order = *chart_state.peek().order();
                        info!(%order, metric = metric.key(), "stack order changed");

                        let from = scene.peek().clone();
                        let transition =
                            Transition::new(from, compose(&order, &data, &config), config.timings);
                        start_transition(
                            &sender_slot,
                            scene,
                            transition,
                            generation,
                            config.frame_interval_ms,
                        );
                    }
                    ChartEvent::TransitionComplete { generation } => {
                        if chart_state.with_mut(|state| state.complete(generation)) {
                            debug!(generation, "transition finished; chart interactive");
                        }
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    let on_promote =
        EventHandler::new(move |metric: Metric| coroutine.send(ChartEvent::Promote(metric)));

    let status_snapshot = status();
    let frame = scene();

    #[cfg(debug_assertions)]
    log_chart_render(&status_snapshot, frame.bars.len());

    match status_snapshot {
        ChartStatus::Loading => rsx! {
            div { class: "chart-status chart-status--loading", {t!("chart-loading")} }
        },
        ChartStatus::Failed(message) => rsx! {
            div { class: "chart-status chart-status--error", role: "alert",
                h3 { {t!("chart-error-title")} }
                p { "{message}" }
            }
        },
        ChartStatus::Ready { drivers, degenerate } => {
            let shown = frame.bars.len();
            let degenerate_note = (!degenerate.is_empty()).then(|| {
                let metrics = degenerate
                    .iter()
                    .map(|metric| metric.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                t!("chart-degenerate", metrics = metrics)
            });

            rsx! {
                div { class: "chart",
                    p { class: "chart__hint", {t!("chart-hint")} }
                    svg {
                        class: "chart__svg",
                        width: "{config.width}",
                        height: "{config.height}",
                        view_box: "0 0 {config.width} {config.height}",
                        BarsLayer { bars: frame.bars, tooltip, on_promote }
                        DriverLabels { labels: frame.labels }
                        Legend { entries: frame.legend, geometry: config.legend, on_promote }
                    }
                    p { class: "chart__caption",
                        {t!("chart-caption", shown = shown, total = drivers)}
                    }
                    if let Some(note) = degenerate_note {
                        p { class: "chart__note", "{note}" }
                    }
                    Tooltip { state: tooltip() }
                }
            }
        }
    }
}

fn compose(order: &StackOrder, data: &NormalizedSet, config: &ChartConfig) -> Scene {
    let bars = stack_bars(order, &data.records, &config.y_scale, config.baseline);
    Scene::build(&bars, order, config)
}

/// Play `transition` into `scene` one frame at a time, then report completion.
fn start_transition(
    sender_slot: &SenderSlot,
    mut scene: Signal<Scene>,
    transition: Transition,
    generation: u64,
    frame_interval_ms: u64,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            let started = timing::now();
            loop {
                let elapsed = timing::now().elapsed_since(started);
                scene.set(transition.frame(elapsed));
                if transition.is_complete(elapsed) {
                    break;
                }
                timing::sleep_ms(frame_interval_ms.max(1)).await;
            }
            let _ = sender.unbounded_send(ChartEvent::TransitionComplete { generation });
        });
    }
}

#[derive(Debug, Clone)]
enum ChartEvent {
    Promote(Metric),
    TransitionComplete { generation: u64 },
}
