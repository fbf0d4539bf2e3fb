#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use relevance::analysis;
    use relevance::formatting::*;
    use relevance::rendering::render;

    /// Golden test for the format command
    ///
    /// Each .rel file in tests/golden/ holds an expression in its expanded
    /// form. Compacting it and expanding it again must reproduce the file
    /// exactly. If a file fails this test, either the pretty-printer is
    /// wrong (a bug that needs to be fixed!) or the example file is wrong
    /// (perhaps because of a deliberate style change, in which case it
    /// needs regenerating).

    /// Simple diff function to show line-by-line differences
    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = original_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Original");
        println!("+++ Formatted");

        for i in 0..max_lines {
            let orig_line = original_lines
                .get(i)
                .unwrap_or(&"");
            let fmt_line = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if orig_line != fmt_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", orig_line);
                println!("+ {}", fmt_line);
            }
        }
    }

    fn golden_files() -> Vec<std::path::PathBuf> {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("rel")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .rel files found in golden directory");
        files.sort();
        files
    }

    #[test]
    fn ensure_identical_output() {
        let mut failures = Vec::new();

        for file in &golden_files() {
            let original = analysis::load(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let single = compact(&original);
            assert!(!single.contains('\n'));

            let result = render(&Identity, expand_to_fragments(&single));

            if result != original {
                show_diff(&original, &result, file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!("All examples must format unchanged, but {} did not", failures.len());
        }
    }

    #[test]
    fn ensure_toggle_round_trip() {
        for file in &golden_files() {
            let original = analysis::load(file).unwrap();

            // expanded text compacts; compact text expands back
            let once = reformat(&original);
            assert!(!once.contains('\n'), "{:?} did not compact", file);

            let twice = reformat(&once);
            assert_eq!(twice, original.trim_end(), "{:?} did not expand", file);
        }
    }
}
