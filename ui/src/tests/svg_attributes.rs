use std::fs;
use std::path::{Path, PathBuf};

/// Attribute lines of every `svg { ... }` root: the lines after `svg {` up to
/// the first child element or text node.
fn svg_root_attributes(content: &str) -> Vec<Vec<String>> {
    let lines: Vec<&str> = content.lines().collect();
    let mut roots = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if line.trim() != "svg {" {
            continue;
        }
        let attrs = lines[idx + 1..]
            .iter()
            .map(|l| l.trim())
            .take_while(|l| !l.ends_with('{') && !l.starts_with('}') && !l.starts_with("for "))
            .map(str::to_string)
            .collect();
        roots.push(attrs);
    }

    roots
}

fn rust_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

// `dioxus_elements::svg` has no `aria_*` idents; ARIA goes through string keys.
#[test]
fn svg_roots_use_string_keyed_aria() {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/dashboard");
    let mut labelled = 0;

    for path in rust_files(&src) {
        let content = fs::read_to_string(&path).expect("read source file");
        for attrs in svg_root_attributes(&content) {
            for attr in &attrs {
                assert!(
                    !attr.starts_with("aria_"),
                    "{}: `{attr}` on an svg root",
                    path.display()
                );
            }
            if attrs.iter().any(|a| a.starts_with("\"aria-label\":")) {
                labelled += 1;
            }
        }
    }

    assert!(labelled >= 3, "expected labelled chart roots, found {labelled}");
}
