//
// Adapted from Air
// https://github.com/posit-dev/air/blob/affa92cd514525c4bab6c8c2ca251ea19414b89f/crates/workspace/src/discovery.rs
//
// MIT License - Posit PBC

use ignore::DirEntry;
use std::path::{Component, Path, PathBuf};

use crate::fs;
use crate::fs::has_lintable_extension;

/// Default patterns to exclude from linting
/// These match dependencies and generated files that should not be linted
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &["node_modules/", ".git/", "*.min.js", "*.min.css"];

const GLOB_CHARS: &[char] = &['*', '?', '[', '{'];

pub type DiscoveredFiles = Vec<Result<PathBuf, ignore::Error>>;

/// Split a glob argument such as `src/**/*.css` into the directory to walk
/// (`src`) and the pattern the files below it must match (`**/*.css`).
///
/// Returns `None` for arguments without glob characters and for existing
/// paths, which are taken literally.
pub fn split_glob(arg: &str) -> Option<(PathBuf, String)> {
    if !arg.contains(GLOB_CHARS) || Path::new(arg).exists() {
        return None;
    }

    let mut root = PathBuf::new();
    let mut pattern: Vec<String> = Vec::new();

    for component in Path::new(arg).components() {
        let text = component.as_os_str().to_string_lossy();
        let is_literal = pattern.is_empty()
            && (matches!(component, Component::RootDir | Component::Prefix(_))
                || !text.contains(GLOB_CHARS));
        if is_literal {
            root.push(component);
        } else {
            pattern.push(text.into_owned());
        }
    }

    if root.as_os_str().is_empty() {
        root.push(".");
    }

    Some((root, pattern.join("/")))
}

/// For each provided argument, recursively search for the files within it
/// that some checker handles. Arguments may be files, directories or glob
/// patterns.
///
/// The returned paths are sorted and unique. Errors met during the walk are
/// returned along with them.
pub fn discover_file_paths<S: AsRef<str>>(args: &[S]) -> DiscoveredFiles {
    let mut literals = Vec::new();
    let mut files = DiscoveredFiles::new();

    for arg in args {
        let arg = arg.as_ref();
        match split_glob(arg) {
            Some((root, pattern)) => {
                tracing::debug!("Walking {} for `{pattern}`", root.display());
                files.extend(walk(&[root.clone()], &root, Some(&pattern)));
            }
            None => literals.push(PathBuf::from(arg)),
        }
    }

    files.extend(walk(&literals, Path::new("."), None));

    let (mut paths, errors): (Vec<PathBuf>, DiscoveredFiles) =
        files.into_iter().fold((Vec::new(), Vec::new()), |(mut paths, mut errors), file| {
            match file {
                Ok(path) => paths.push(path),
                Err(error) => errors.push(Err(error)),
            }
            (paths, errors)
        });

    paths.sort();
    paths.dedup();

    errors.into_iter().chain(paths.into_iter().map(Ok)).collect()
}

fn walk(paths: &[PathBuf], root: &Path, pattern: Option<&str>) -> DiscoveredFiles {
    let paths: Vec<PathBuf> = paths.iter().map(fs::normalize_path).collect();

    let Some((first_path, paths)) = paths.split_first() else {
        // No paths provided
        return Vec::new();
    };

    let mut builder = ignore::WalkBuilder::new(first_path);

    for path in paths {
        builder.add(path);
    }

    builder.hidden(true);
    builder.parents(true);
    builder.ignore(false);
    builder.git_ignore(true);
    builder.git_global(true);
    builder.git_exclude(true);
    // Honour `.gitignore` files outside of git repositories too
    builder.require_git(false);

    let mut override_builder = ignore::overrides::OverrideBuilder::new(fs::normalize_path(root));
    if let Some(pattern) = pattern {
        // Anchored so that `*.css` only matches at the root, as in a shell
        if let Err(e) = override_builder.add(&format!("/{pattern}")) {
            tracing::warn!("Invalid glob pattern '{}': {}", pattern, e);
            return Vec::new();
        }
    }
    for pattern in DEFAULT_EXCLUDE_PATTERNS {
        // Add as negation pattern (exclude)
        if let Err(e) = override_builder.add(&format!("!{pattern}")) {
            tracing::warn!("Failed to add exclude pattern '{}': {}", pattern, e);
        }
    }
    match override_builder.build() {
        Ok(overrides) => {
            builder.overrides(overrides);
        }
        Err(e) => tracing::warn!("Failed to build exclude patterns: {}", e),
    }

    // Prefer `available_parallelism()`, with a max of 12 threads
    builder.threads(
        std::thread::available_parallelism()
            .map_or(1, std::num::NonZeroUsize::get)
            .min(12),
    );

    let walker = builder.build_parallel();

    // Run the `WalkParallel` to collect all lintable files.
    let state = FilesState::new();
    let mut visitor_builder = FilesVisitorBuilder::new(&state, pattern.is_some());
    walker.visit(&mut visitor_builder);

    state.finish()
}

/// Shared state across the threads of the walker
struct FilesState {
    files: std::sync::Mutex<DiscoveredFiles>,
}

impl FilesState {
    fn new() -> Self {
        Self { files: std::sync::Mutex::new(Vec::new()) }
    }

    fn finish(self) -> DiscoveredFiles {
        self.files
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Object capable of building a [FilesVisitor]
///
/// Implements the `build()` method of [ignore::ParallelVisitorBuilder], which
/// [ignore::WalkParallel] utilizes to create one [FilesVisitor] per thread.
struct FilesVisitorBuilder<'state> {
    state: &'state FilesState,
    is_glob: bool,
}

impl<'state> FilesVisitorBuilder<'state> {
    fn new(state: &'state FilesState, is_glob: bool) -> Self {
        Self { state, is_glob }
    }
}

impl<'state> ignore::ParallelVisitorBuilder<'state> for FilesVisitorBuilder<'state> {
    /// Constructs the per-thread [FilesVisitor], called for us by `ignore`
    fn build(&mut self) -> Box<dyn ignore::ParallelVisitor + 'state> {
        Box::new(FilesVisitor { files: vec![], state: self.state, is_glob: self.is_glob })
    }
}

/// Object that implements [ignore::ParallelVisitor]'s `visit()` method
///
/// A files visitor has its `visit()` method repeatedly called. It modifies its own
/// synchronous state by pushing to its thread specific `files` while visiting. On `Drop`,
/// the collected `files` are appended to the global set of `state.files`.
struct FilesVisitor<'state> {
    files: DiscoveredFiles,
    state: &'state FilesState,
    // The root of a glob is never an explicitly provided file.
    is_glob: bool,
}

impl ignore::ParallelVisitor for FilesVisitor<'_> {
    /// Visit a file in the tree
    ///
    /// Excluded directories (`node_modules/`, ignored directories) are never
    /// entered: `ignore` skips them before they reach this visitor.
    fn visit(&mut self, result: std::result::Result<DirEntry, ignore::Error>) -> ignore::WalkState {
        // Determine if `ignore` gave us a valid `result` or not
        let entry = match result {
            Ok(entry) => entry,
            Err(error) => {
                // Store error but continue walking
                self.files.push(Err(error));
                return ignore::WalkState::Continue;
            }
        };

        let path = entry.path();

        // An entry is explicit if it was provided directly, not discovered by looking into a directory
        let is_explicit = entry.depth() == 0 && !self.is_glob;
        let is_directory = entry.file_type().is_none_or(|ft| ft.is_dir());

        if is_explicit && !is_directory {
            // Accept explicitly provided files, regardless of exclusion
            // criteria. Their extension is checked when the files are
            // partitioned between the checkers.
            tracing::trace!(
                "Included file due to explicit provision {path}",
                path = path.display()
            );
            self.files.push(Ok(entry.into_path()));
            return ignore::WalkState::Continue;
        }

        if !is_directory && has_lintable_extension(path) {
            tracing::trace!("Included file {path}", path = path.display());
            self.files.push(Ok(entry.into_path()));
            return ignore::WalkState::Continue;
        }

        // Didn't accept this file, just keep going
        tracing::trace!(
            "Excluded file due to fallthrough {path}",
            path = path.display()
        );
        ignore::WalkState::Continue
    }
}

impl Drop for FilesVisitor<'_> {
    fn drop(&mut self) {
        // Lock the global shared set of `files`
        let mut files = match self.state.files.lock() {
            Ok(files) => files,
            Err(poisoned) => poisoned.into_inner(),
        };

        // Transfer files gathered on this thread to the global set
        if files.is_empty() {
            *files = std::mem::take(&mut self.files);
        } else {
            files.append(&mut self.files);
        }
    }
}
