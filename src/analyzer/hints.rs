//! Technology Hint Tables
//!
//! **Single source of truth** for the static lookup data used by selection and
//! technology detection. Every lookup expects an already lowercased key; callers
//! lowercase paths once before asking.

// =============================================================================
// Exclusion Tables
// =============================================================================

/// Extensions (without the dot) of files that are never readable text
const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "svg", "pdf", "zip", "tar", "gz", "7z", "rar",
    "jar", "class", "exe", "dll", "so", "dylib", "bin", "whl", "apk", "mp3", "mp4", "mov", "avi",
    "mkv", "wav",
];

/// Dependency, build output and tooling directories, anchored at the repo root
const SKIP_DIR_PREFIXES: &[&str] = &[
    "node_modules/",
    "dist/",
    "build/",
    "target/",
    "vendor/",
    "venv/",
    ".venv/",
    ".git/",
    ".idea/",
    ".pytest_cache/",
    "__pycache__/",
    "coverage/",
];

/// Lockfiles that carry no information about the project itself
const SKIP_FILE_NAMES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "poetry.lock",
    "pipfile.lock",
    "go.sum",
];

// =============================================================================
// Importance Table
// =============================================================================

/// Root-level files that describe a project best
const IMPORTANT_ROOT_FILES: &[&str] = &[
    "readme.md",
    "readme.rst",
    "readme.txt",
    "pyproject.toml",
    "setup.py",
    "setup.cfg",
    "requirements.txt",
    "requirements-dev.txt",
    "package.json",
    "go.mod",
    "cargo.toml",
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
    "gemfile",
    "composer.json",
    "makefile",
    "dockerfile",
    "license",
    "license.txt",
    "license.md",
];

// =============================================================================
// Technology Tables
// =============================================================================

/// Basename → technology
const FILENAME_TECH: &[(&str, &str)] = &[
    ("pyproject.toml", "Python"),
    ("setup.py", "Python"),
    ("requirements.txt", "Python"),
    ("package.json", "Node.js"),
    ("go.mod", "Go"),
    ("cargo.toml", "Rust"),
    ("pom.xml", "Java"),
    ("build.gradle", "Java"),
    ("build.gradle.kts", "Kotlin"),
    ("gemfile", "Ruby"),
    ("composer.json", "PHP"),
    ("dockerfile", "Docker"),
];

/// Extension (without the dot) → technology
const EXTENSION_TECH: &[(&str, &str)] = &[
    ("py", "Python"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("go", "Go"),
    ("rs", "Rust"),
    ("java", "Java"),
    ("kt", "Kotlin"),
    ("rb", "Ruby"),
    ("php", "PHP"),
    ("cs", ".NET"),
    ("cpp", "C++"),
    ("c", "C"),
    ("swift", "Swift"),
];

/// Package manifest inspected for dependency declarations
pub const PACKAGE_MANIFEST: &str = "package.json";

// =============================================================================
// Lookups
// =============================================================================

pub fn is_binary_extension(ext: &str) -> bool {
    BINARY_EXTENSIONS.contains(&ext)
}

pub fn is_skipped_file_name(name: &str) -> bool {
    SKIP_FILE_NAMES.contains(&name)
}

pub fn has_skipped_dir_prefix(path: &str) -> bool {
    SKIP_DIR_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

pub fn is_important_root_file(name: &str) -> bool {
    IMPORTANT_ROOT_FILES.contains(&name)
}

pub fn tech_for_filename(name: &str) -> Option<&'static str> {
    lookup(FILENAME_TECH, name)
}

pub fn tech_for_extension(ext: &str) -> Option<&'static str> {
    lookup(EXTENSION_TECH, ext)
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, tech)| *tech)
}

// =============================================================================
// Path Helpers
// =============================================================================

/// Final path segment
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Extension of the final path segment, without the dot.
///
/// Leading dots belong to the name, so `.gitignore` has no extension while
/// `archive.tar.gz` has `gz`.
pub fn extension(path: &str) -> Option<&str> {
    let name = basename(path);
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let dot = name[stem_start..].rfind('.')? + stem_start;
    Some(&name[dot + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("src/main.rs"), Some("rs"));
        assert_eq!(extension("archive.tar.gz"), Some("gz"));
        assert_eq!(extension(".gitignore"), None);
        assert_eq!(extension("..hidden"), None);
        assert_eq!(extension(".config.toml"), Some("toml"));
        assert_eq!(extension("Makefile"), None);
        assert_eq!(extension("some.dir/Makefile"), None);
        assert_eq!(extension("trailing."), Some(""));
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("a/b/c.txt"), "c.txt");
        assert_eq!(basename("c.txt"), "c.txt");
    }

    #[test]
    fn test_tech_lookups() {
        assert_eq!(tech_for_filename("dockerfile"), Some("Docker"));
        assert_eq!(tech_for_filename("build.gradle.kts"), Some("Kotlin"));
        assert_eq!(tech_for_filename("readme.md"), None);
        assert_eq!(tech_for_extension("cs"), Some(".NET"));
        assert_eq!(tech_for_extension("md"), None);
    }

    #[test]
    fn test_exclusion_tables() {
        assert!(is_binary_extension("png"));
        assert!(!is_binary_extension("rs"));
        assert!(is_skipped_file_name("go.sum"));
        assert!(has_skipped_dir_prefix("node_modules/react/index.js"));
        assert!(!has_skipped_dir_prefix("src/node_modules.rs"));
        assert!(!has_skipped_dir_prefix("packages/app/dist/x.js"));
        assert!(is_important_root_file("cargo.toml"));
    }
}
