#![cfg(test)]
//! The desktop build inlines the shared theme (`ui/assets/theme/main.css`).
//! A broken path or an emptied file would only show up as an unstyled window,
//! so check it here. Keep in sync with `MAIN_CSS_INLINE` in `desktop/src/main.rs`.

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
fn embedded_css_defines_theme_tokens() {
    for token in ["--color-bg", "--color-accent", "--radius", "body {"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
