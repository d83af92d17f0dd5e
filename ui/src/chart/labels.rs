use dioxus::prelude::*;

use crate::core::scene::LabelNode;

#[component]
pub fn DriverLabels(labels: Vec<LabelNode>) -> Element {
    rsx! {
        g { class: "driver-labels",
            for label in labels {
                text {
                    key: "{label.key}",
                    class: "driver-label",
                    x: "{label.x}",
                    y: "{label.y}",
                    text_anchor: "middle",
                    opacity: "{label.opacity}",
                    "{label.text}"
                }
            }
        }
    }
}
