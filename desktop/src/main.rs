#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{info, warn, Level};
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::{ChartConfig, DataSource};
use ui::theme::THEME_CSS;
use ui::views::Standings;

/// Optional JSON override for [`ChartConfig`]; missing fields keep defaults.
const CONFIG_ENV: &str = "PITWALL_CONFIG";
const DATA_FILE: &str = "data/f1_drivers_2024.json";

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Pitwall – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1180.0, 1100.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code (mirrors the web launcher).
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    use_context_provider(chart_config);

    rsx! {
        // Always inline the embedded theme; no external file dependency.
        document::Style { "{THEME_CSS}" }

        AppHeader {}
        main { Standings {} }
    }
}

fn chart_config() -> ChartConfig {
    let mut config = match std::env::var(CONFIG_ENV) {
        Ok(raw) => ChartConfig::from_json(&raw).unwrap_or_else(|err| {
            warn!(%err, "ignoring malformed {CONFIG_ENV}");
            ChartConfig::default()
        }),
        Err(_) => ChartConfig::default(),
    };

    if config.data == DataSource::Bundled {
        let file = resolve_resource_dir().join(DATA_FILE);
        if file.is_file() {
            config.data = DataSource::File(file);
        }
    }

    info!(source = %config.data, "desktop chart configured");
    config
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` read straight from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
