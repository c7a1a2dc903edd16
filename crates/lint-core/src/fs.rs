use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;

use crate::rule_set::Language;

pub const STYLE_EXTENSIONS: &[&str] = &["css"];
pub const SCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];
/// Markup files embed both stylesheets and scripts.
pub const MARKUP_EXTENSIONS: &[&str] = &["html", "htm"];

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

pub fn has_markup_extension(path: &Path) -> bool {
    extension(path).is_some_and(|ext| MARKUP_EXTENSIONS.contains(&ext.as_str()))
}

/// Languages of the checkers that handle `path`, based on its extension.
pub fn languages_for(path: &Path) -> &'static [Language] {
    let Some(ext) = extension(path) else {
        return &[];
    };

    if STYLE_EXTENSIONS.contains(&ext.as_str()) {
        &[Language::Style]
    } else if SCRIPT_EXTENSIONS.contains(&ext.as_str()) {
        &[Language::Script]
    } else if MARKUP_EXTENSIONS.contains(&ext.as_str()) {
        Language::ALL
    } else {
        &[]
    }
}

pub fn has_lintable_extension(path: &Path) -> bool {
    !languages_for(path).is_empty()
}

/// Make `path` absolute, without resolving symlinks, and collapse `.` and
/// `..` components.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match path.absolutize() {
        Ok(path) => path.into_owned(),
        Err(_) => path.to_path_buf(),
    }
}

/// Express `path` relative to the current working directory when it is
/// below it, and as it was given otherwise.
pub fn relativize_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    let Ok(cwd) = std::env::current_dir() else {
        return path.display().to_string();
    };

    let absolute = normalize_path(path);
    match absolute.strip_prefix(&cwd) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => path.display().to_string(),
    }
}
