//! Shared stylesheet, embedded so launchers never depend on an asset path.

pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
