use dioxus::prelude::*;

use crate::chart::DriverChart;

#[cfg(debug_assertions)]
fn log_standings_render(lang: &str) {
    tracing::debug!(lang, "Standings render");
}

#[component]
pub fn Standings() -> Element {
    // Subscribe to the global language code (if provided) so the page
    // re-renders when the locale changes.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    log_standings_render(&_lang_current);

    rsx! {
        section { class: "page page-standings",
            h1 { {crate::t!("page-standings-title")} }
            p { class: "page-standings__intro", {crate::t!("page-standings-intro")} }
            div { id: "svg-container", class: "page-standings__chart",
                DriverChart {}
            }
        }
    }
}
