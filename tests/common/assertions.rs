//! Custom assertion macros for contract and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that a file exists in the artifact tree of a configuration.
///
/// # Example
/// ```ignore
/// assert_realized!(env, 1, "images/server_0/Dockerfile");
/// ```
#[macro_export]
macro_rules! assert_realized {
    ($env:expr, $index:expr, $path:expr) => {
        let root = $env.destination($index);
        assert!(
            root.join($path).is_file(),
            "Expected '{}' in {:?}, but it doesn't exist.\nFiles found:\n  {}",
            $path,
            root,
            $crate::common::list_all_files(&root).join("\n  ")
        );
    };
}

/// Assert the exact content of a file of a configuration's artifact tree.
///
/// # Example
/// ```ignore
/// assert_file_content!(env, 1, "docker-compose.yml", "mem=2\n");
/// ```
#[macro_export]
macro_rules! assert_file_content {
    ($env:expr, $index:expr, $path:expr, $expected:expr) => {
        let full_path = $env.destination($index).join($path);
        let content = std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", full_path.display(), e));
        assert_eq!(content, $expected, "unexpected content in '{}'", $path);
    };
}
