use dioxus::prelude::*;

use crate::core::scene::TooltipContent;

/// Offset of the tooltip box from the pointer, in page pixels.
const POINTER_OFFSET: (f64, f64) = (15.0, -10.0);

/// Hover state shared by every segment of the chart.
///
/// Hiding keeps the last content around so the box can fade out with its
/// text still visible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub content: Option<TooltipContent>,
    pub left: f64,
    pub top: f64,
    pub visible: bool,
}

impl TooltipState {
    pub fn show(&mut self, content: TooltipContent, page_x: f64, page_y: f64) {
        self.content = Some(content);
        self.visible = true;
        self.place(page_x, page_y);
    }

    /// Follow the pointer; ignored while hidden.
    pub fn track(&mut self, page_x: f64, page_y: f64) {
        if self.visible {
            self.place(page_x, page_y);
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    fn place(&mut self, page_x: f64, page_y: f64) {
        self.left = page_x + POINTER_OFFSET.0;
        self.top = page_y + POINTER_OFFSET.1;
    }
}

#[component]
pub fn Tooltip(state: TooltipState) -> Element {
    let class = if state.visible {
        "chart-tooltip chart-tooltip--visible"
    } else {
        "chart-tooltip"
    };

    rsx! {
        div {
            class,
            role: "tooltip",
            aria_hidden: !state.visible,
            style: "left: {state.left}px; top: {state.top}px;",
            if let Some(content) = state.content {
                strong { class: "chart-tooltip__driver", "{content.driver}" }
                br {}
                span { class: "chart-tooltip__metric", style: "color: {content.color}", "{content.label}" }
                ": "
                span { class: "chart-tooltip__value", "{content.value}" }
            }
        }
    }
}
