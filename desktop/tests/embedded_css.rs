#![cfg(test)]
//! The desktop build inlines the shared theme (`ui/assets/theme/main.css`);
//! a truncated or moved file would only show up as unstyled windows at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_matches_ui_constant() {
    assert_eq!(EMBEDDED_CSS, ui::theme::THEME_CSS);
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-accent", "body {", ".chart-tooltip"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
