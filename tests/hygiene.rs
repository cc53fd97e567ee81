//! Hygiene — enforces coding standards at test time
//!
//! Scans the SPA crate's production sources for panic-capable calls.
//! Unlike the envelope crate's stricter sweep, the silent-discard
//! patterns (`let _ =`, `.ok()`) are allowed here: the hydrate glue
//! deliberately drops browser-API errors it cannot act on.

use std::fs;
use std::path::Path;

const BANNED: &[&str] = &[
    ".unwrap()",
    ".expect(",
    "panic!(",
    "unreachable!(",
    "todo!(",
    "unimplemented!(",
    "#[allow(dead_code)]",
];

fn collect_rs_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path_str, content));
        }
    }
}

#[test]
fn production_sources_never_panic() {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (path, content) in &files {
        for (number, line) in content.lines().enumerate() {
            for pattern in BANNED {
                if line.contains(pattern) {
                    violations.push(format!("  {path}:{}: `{pattern}`", number + 1));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "panic-capable patterns in production sources:\n{}",
        violations.join("\n")
    );
}
