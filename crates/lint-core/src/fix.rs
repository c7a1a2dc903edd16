use crate::diagnostic::*;

/// Apply the fixes of `diagnostics` to `contents`.
///
/// Fixes are applied from the start of the file to its end. A fix that
/// overlaps one that was already applied is skipped, and the returned flag
/// tells the caller to lint the new text again to pick it up.
pub fn apply_fixes(diagnostics: &[Diagnostic], contents: &str) -> (bool, String) {
    let mut fixes: Vec<&Fix> = diagnostics
        .iter()
        .filter_map(|diagnostic| diagnostic.fix.as_ref())
        .collect();
    fixes.sort_by_key(|fix| (fix.start, fix.end));

    let mut new_content = String::with_capacity(contents.len());
    let mut last_modified_pos = 0;
    let mut has_skipped_fixes = false;

    for fix in fixes {
        let is_valid = fix.start <= fix.end
            && fix.end <= contents.len()
            && contents.is_char_boundary(fix.start)
            && contents.is_char_boundary(fix.end);
        if !is_valid {
            tracing::debug!("Dropping invalid fix {}..{}", fix.start, fix.end);
            continue;
        }

        if fix.start < last_modified_pos {
            has_skipped_fixes = true;
            continue;
        }

        new_content.push_str(&contents[last_modified_pos..fix.start]);
        new_content.push_str(&fix.content);
        last_modified_pos = fix.end;
    }

    new_content.push_str(&contents[last_modified_pos..]);

    (has_skipped_fixes, new_content)
}
