//! Hygiene — enforces coding standards at test time
//!
//! Scans the envelope crate's production sources for antipatterns. Every
//! pattern has a budget (zero for a pure wire crate); if one must grow,
//! fix an existing hit first.

use std::fs;
use std::path::Path;

const BUDGETS: &[(&str, usize)] = &[
    // Panics — these crash the process.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss — discards errors without inspecting.
    ("let _ =", 0),
    (".ok()", 0),
    // Style / structure.
    ("#[allow(dead_code)]", 0),
];

/// Collect production `.rs` files under `src/`, excluding sibling test files.
fn source_files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

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
fn antipattern_budgets_hold() {
    let files = source_files();
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (pattern, max) in BUDGETS {
        let mut count = 0;
        let mut hits = Vec::new();
        for (path, content) in &files {
            let in_file = content.lines().filter(|l| l.contains(pattern)).count();
            if in_file > 0 {
                count += in_file;
                hits.push(format!("  {path}: {in_file}"));
            }
        }
        if count > *max {
            violations.push(format!(
                "`{pattern}` budget exceeded: found {count}, max {max}\n{}",
                hits.join("\n")
            ));
        }
    }

    assert!(violations.is_empty(), "{}", violations.join("\n"));
}
