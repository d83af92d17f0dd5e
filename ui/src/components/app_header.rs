use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use tracing::warn;

/// Localized application header: brand, tagline and the locale switcher.
///
/// Platforms may provide a `Signal<String>` holding the active language code
/// through context. The header writes the selected code into it so views that
/// subscribe to the same signal re-render with the new bundle.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(language = %val, %err, "language switch failed"),
        }
    };

    let brand = t!("app-brand");
    let tagline = t!("app-tagline");

    rsx! {
        header {
            id: "app-header",
            class: "app-header",
            // Hidden marker keeps a reactive dependency on the global language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__brand-flag", aria_hidden: "true" }
                    span { class: "app-header__brand-mark", "{brand}" }
                    span { class: "app-header__brand-subtitle", "{tagline}" }
                }

                if show_switcher {
                    div { class: "app-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
