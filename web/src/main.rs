use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::{ChartConfig, DataSource};
use ui::theme::THEME_CSS;
use ui::views::Standings;

const DRIVER_DATA: Asset = asset!("/assets/data/f1_drivers_2024.json");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppHeader writes it on locale change.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    use_context_provider(|| {
        let config = ChartConfig {
            data: DataSource::Url(DRIVER_DATA.to_string()),
            ..ChartConfig::default()
        };
        info!(source = %config.data, "web chart configured");
        config
    });

    rsx! {
        document::Title { "Pitwall" }
        document::Style { "{THEME_CSS}" }

        AppHeader {}
        main { Standings {} }
    }
}
