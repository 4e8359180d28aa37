//! Every source file carries the project license header.

use std::fs;
use std::path::{Path, PathBuf};

const HEADER: &str =
    "// Copyright 2025-present The sporjeger authors\n// SPDX-License-Identifier: Apache-2.0\n";

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn test_source_files_carry_license_header() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    rust_files(&root.join("src"), &mut files);
    rust_files(&root.join("benches"), &mut files);
    assert!(!files.is_empty());

    for file in files {
        let text = fs::read_to_string(&file).unwrap();
        assert!(text.starts_with(HEADER), "missing license header: {}", file.display());
    }
}
