//! File role classification and project-level detection.

pub mod archetype;
pub mod signatures;

/// Independent role tags for one file. A file can carry any combination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileRoles {
    pub is_config: bool,
    pub is_entry_point: bool,
    pub is_test: bool,
    pub is_documentation: bool,
}

/// Well-known configuration manifests and tooling files.
static CONFIG_FILES: &[&str] = &[
    "package.json",
    "requirements.txt",
    "pom.xml",
    "build.gradle",
    "Cargo.toml",
    "go.mod",
    "composer.json",
    "Gemfile",
    "setup.py",
    "pyproject.toml",
    "CMakeLists.txt",
    "Makefile",
    "Dockerfile",
    "docker-compose.yml",
    ".env",
    ".env.example",
    "tsconfig.json",
    "babel.config.js",
    "webpack.config.js",
    "vite.config.js",
    "rollup.config.js",
    "jest.config.js",
];

static ENTRY_POINTS: &[&str] = &[
    "index.js",
    "index.ts",
    "main.py",
    "app.py",
    "server.js",
    "main.js",
    "main.ts",
    "App.js",
    "App.tsx",
    "main.go",
    "main.rs",
    "Main.java",
    "Program.cs",
    "main.cpp",
    "main.c",
];

static TEST_SUFFIXES: &[&str] = &[
    ".test.js",
    ".test.ts",
    ".test.jsx",
    ".test.tsx",
    ".spec.js",
    ".spec.ts",
    "_test.go",
    "_test.py",
];

static DOC_SUFFIXES: &[&str] = &[".md", ".txt", ".rst", ".adoc"];

/// Tag a file by relative path and file name. The rules are independent:
/// membership in the config allowlist, membership in the entry-point
/// allowlist, a test-path heuristic, and a documentation suffix check.
pub fn classify(rel_path: &str, file_name: &str) -> FileRoles {
    let lower_path = rel_path.to_lowercase();
    let lower_name = file_name.to_lowercase();

    FileRoles {
        is_config: CONFIG_FILES.iter().any(|name| *name == file_name),
        is_entry_point: ENTRY_POINTS.iter().any(|name| *name == file_name),
        is_test: lower_path.contains("test")
            || TEST_SUFFIXES.iter().any(|suffix| lower_name.ends_with(suffix)),
        is_documentation: DOC_SUFFIXES.iter().any(|suffix| lower_name.ends_with(suffix)),
    }
}
