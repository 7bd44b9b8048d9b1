//! Checks that the unit test harness mirrors the library module tree
//!
//! Modules are discovered by following `mod` declarations from `src/lib.rs`
//! and `tests/unit/main.rs`, so a test file that exists on disk but is never
//! declared counts as missing.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    /// Leaf module paths such as `symmetry/group`, mapped to the file defining each
    fn declared_modules(root: &Path) -> io::Result<Vec<(String, PathBuf)>> {
        let mut leaves = Vec::new();
        let dir = root.parent().unwrap_or_else(|| Path::new("."));
        walk_declarations(root, dir, "", &mut leaves)?;
        Ok(leaves)
    }

    fn walk_declarations(
        file: &Path,
        dir: &Path,
        prefix: &str,
        leaves: &mut Vec<(String, PathBuf)>,
    ) -> io::Result<()> {
        for name in module_declarations(&fs::read_to_string(file)?) {
            let module_path = format!("{prefix}{name}");
            let nested = dir.join(&name).join("mod.rs");
            if nested.is_file() {
                walk_declarations(&nested, &dir.join(&name), &format!("{module_path}/"), leaves)?;
            } else {
                leaves.push((module_path, dir.join(format!("{name}.rs"))));
            }
        }
        Ok(())
    }

    /// Names of out-of-line `mod name;` items; inline `mod tests { .. }` blocks are skipped
    fn module_declarations(source: &str) -> Vec<String> {
        source
            .lines()
            .map(str::trim)
            .filter_map(|line| {
                let rest = line.strip_prefix("pub mod ").or_else(|| line.strip_prefix("mod "))?;
                rest.strip_suffix(';').map(|name| name.trim().to_string())
            })
            .collect()
    }

    fn rust_files(dir: &Path, found: &mut BTreeSet<PathBuf>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                found.insert(path);
            }
        }
        Ok(())
    }

    fn module_names(modules: &[(String, PathBuf)]) -> BTreeSet<&str> {
        modules.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[test]
    fn test_every_library_module_has_unit_tests() {
        let library = declared_modules(Path::new("src/lib.rs")).expect("readable library tree");
        let unit = declared_modules(Path::new("tests/unit/main.rs")).expect("readable unit tree");
        let unit_names = module_names(&unit);

        let missing: Vec<String> = library
            .iter()
            .filter(|(name, _)| !unit_names.contains(name.as_str()))
            .map(|(name, _)| format!("  - src/{name}.rs -> tests/unit/{name}.rs"))
            .collect();

        assert!(
            missing.is_empty(),
            "Library modules without a declared unit test module:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_module_tests_a_library_module() {
        let library = declared_modules(Path::new("src/lib.rs")).expect("readable library tree");
        let unit = declared_modules(Path::new("tests/unit/main.rs")).expect("readable unit tree");
        let library_names = module_names(&library);

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|(name, _)| !library_names.contains(name.as_str()))
            .map(|(name, _)| format!("  - tests/unit/{name}.rs -> src/{name}.rs (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test modules with no library counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_no_undeclared_unit_test_files() {
        let unit = declared_modules(Path::new("tests/unit/main.rs")).expect("readable unit tree");
        let declared: BTreeSet<PathBuf> = unit.into_iter().map(|(_, file)| file).collect();

        let mut on_disk = BTreeSet::new();
        rust_files(Path::new("tests/unit"), &mut on_disk).expect("readable unit directory");

        let undeclared: Vec<String> = on_disk
            .iter()
            .filter(|path| {
                let harness = matches!(
                    path.file_name().and_then(|name| name.to_str()),
                    Some("main.rs" | "mod.rs")
                );
                !harness && !declared.contains(*path)
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            undeclared.is_empty(),
            "Unit test files the harness never compiles:\n{}",
            undeclared.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let unit = declared_modules(Path::new("tests/unit/main.rs")).expect("readable unit tree");
        let mut files: Vec<PathBuf> = unit.into_iter().map(|(_, file)| file).collect();

        // Top-level integration targets
        for entry in fs::read_dir("tests").expect("readable tests directory") {
            let path = entry.expect("readable entry").path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                files.push(path);
            }
        }

        let empty: Vec<String> = files
            .iter()
            .filter(|path| {
                !fs::read_to_string(path).is_ok_and(|content| content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }

    // Tests the declaration scan ignores inline modules and visibility
    // Verified by accepting lines without a trailing semicolon
    #[test]
    fn test_module_declarations_parsing() {
        let source = "//! docs\npub mod grid;\nmod cli;\n#[cfg(test)]\nmod tests {\n}\npub use grid::Grid;\n";
        assert_eq!(module_declarations(source), vec!["grid", "cli"]);
    }
}
