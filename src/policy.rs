use std::collections::HashSet;
use std::path::Path;

const ALLOWED_EXTENSIONS: &[&str] = &[
    // Core languages
    ".py", ".pyi", ".ipynb",
    ".js", ".mjs", ".cjs", ".jsx",
    ".ts", ".tsx",
    ".java", ".kt", ".kts",
    ".c", ".h", ".cpp", ".cc", ".hpp",
    ".cs", ".fs", ".fsx",
    ".go", ".rs", ".swift",
    ".php", ".rb", ".pl", ".pm",
    ".ex", ".exs", ".erl", ".hrl",
    ".hs", ".lhs", ".scala", ".clj", ".cljs", ".edn",
    ".lua", ".r", ".jl",
    // Web / templating
    ".html", ".htm", ".xml", ".xhtml",
    ".vue", ".svelte", ".astro",
    ".ejs", ".pug", ".jade", ".hbs", ".mustache", ".njk",
    // Styles
    ".css", ".scss", ".sass", ".less", ".styl",
    // Data & queries
    ".json", ".jsonc", ".csv", ".tsv", ".ndjson",
    ".yaml", ".yml", ".toml", ".ini", ".cfg", ".conf",
    ".sql", ".psql", ".prisma", ".graphql", ".gql",
    // Scripts & shells
    ".sh", ".bash", ".zsh", ".fish",
    ".bat", ".cmd", ".ps1",
    // Docs
    ".md", ".mdx", ".rst", ".adoc", ".txt", ".log",
];

const SPECIAL_FILENAMES: &[&str] = &[
    "Dockerfile", "dockerfile",
    "docker-compose.yml", "docker-compose.yaml",
    "Makefile", "CMakeLists.txt",
    ".gitignore", ".gitkeep", ".gitattributes",
    ".npmrc", ".nvmrc", ".editorconfig",
    ".prettierrc", ".prettierignore",
    ".eslintrc", ".eslintrc.json", ".eslintignore",
    ".stylelintrc", ".stylelintignore",
    "Procfile", "Justfile",
];

const IGNORED_FOLDERS: &[&str] = &[
    // VCS & IDE
    ".git", ".svn", ".hg", ".idea", ".vscode",
    // Node / web
    "node_modules", "bower_components", "jspm_packages",
    // Python
    "__pycache__", ".pytest_cache", ".mypy_cache", ".ruff_cache",
    ".tox", ".venv", "venv", "env", ".pdm-build", ".pdm-cache",
    // Java / Kotlin / Android
    ".gradle", "build", ".build", "out", "bin", "obj",
    // iOS / CocoaPods
    "Pods", "DerivedData",
    // Rust / Go / PHP
    "target", ".cargo", "vendor", "composer", "composer_vendor",
    // JS/TS frameworks & tool caches
    ".next", ".nuxt", ".svelte-kit", ".parcel-cache", ".cache", ".turbo",
    ".expo", ".expo-shared",
    // Packaging & dist
    "dist", "dist-electron", "release", "releases",
    // Coverage / logs / temporary
    "coverage", "coverage-html", "logs", "log", "tmp", "temp",
    // Platform clutter
    ".DS_Store", "Thumbs.db",
];

/// Which files a run picks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Apply the [`InclusionPolicy`] allow-lists and prune ignored folders.
    #[default]
    Filtered,
    /// Take every file in every folder.
    All,
}

/// Immutable allow/ignore lists consulted by the classifier.
///
/// Extensions are stored lower-cased with a leading dot and compared
/// case-insensitively. Special filenames and folder names are exact,
/// case-sensitive matches.
#[derive(Debug, Clone)]
pub struct InclusionPolicy {
    allowed_extensions: HashSet<String>,
    special_filenames: HashSet<String>,
    ignored_folder_names: HashSet<String>,
}

impl InclusionPolicy {
    pub fn new<E, S, I>(extensions: E, special_filenames: S, ignored_folders: I) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            allowed_extensions: extensions.into_iter().map(|e| normalize_extension(e.as_ref())).collect(),
            special_filenames: special_filenames.into_iter().map(Into::into).collect(),
            ignored_folder_names: ignored_folders.into_iter().map(Into::into).collect(),
        }
    }

    /// Does the extension or bare name of `path` put it on the allow-list?
    pub fn allows_file(&self, path: &Path) -> bool {
        let by_extension = path
            .extension()
            .map(|ext| self.allowed_extensions.contains(&normalize_extension(&ext.to_string_lossy())))
            .unwrap_or(false);
        by_extension
            || path
                .file_name()
                .map(|name| self.special_filenames.contains(&*name.to_string_lossy()))
                .unwrap_or(false)
    }

    pub fn ignores_folder(&self, name: &str) -> bool {
        self.ignored_folder_names.contains(name)
    }

    pub fn allowed_extensions(&self) -> &HashSet<String> {
        &self.allowed_extensions
    }

    pub fn special_filenames(&self) -> &HashSet<String> {
        &self.special_filenames
    }

    pub fn ignored_folder_names(&self) -> &HashSet<String> {
        &self.ignored_folder_names
    }
}

impl Default for InclusionPolicy {
    fn default() -> Self {
        Self::new(
            ALLOWED_EXTENSIONS.iter().copied(),
            SPECIAL_FILENAMES.iter().copied(),
            IGNORED_FOLDERS.iter().copied(),
        )
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') { ext } else { format!(".{}", ext) }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
