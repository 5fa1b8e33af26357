#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) remains present and non-trivial.
//!
//! The desktop build inlines `ui/assets/theme/main.css`; a truncation or path
//! break would only show up as unstyled charts at runtime.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

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
fn embedded_css_defines_the_palette_variables_it_uses() {
    let defined: Vec<&str> = EMBEDDED_CSS
        .split("--")
        .skip(1)
        .filter_map(|rest| {
            let name = rest.split(|c: char| !(c.is_ascii_alphanumeric() || c == '-')).next()?;
            rest[name.len()..].trim_start().starts_with(':').then_some(name)
        })
        .collect();

    for used in EMBEDDED_CSS.split("var(--").skip(1) {
        let name = used.split(')').next().unwrap_or_default();
        assert!(
            defined.contains(&name),
            "`var(--{name})` is used but never defined"
        );
    }
}
