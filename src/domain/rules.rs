//! Location rules for project paths.
//!
//! Every rule runs on every pass and the triggered reasons accumulate in a
//! fixed order: length, accents, cloud folders, documents, desktop.

use super::{CheckResult, CloudFolder, PathCandidate, SpecialFolders, ViolationReason};

/// Default ceiling on the project path length, leaving room for nested build
/// output under the 260 character Windows path limit.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 90;

/// Evaluate all location rules against `path`.
pub fn evaluate(
    path: &PathCandidate,
    special_folders: &SpecialFolders,
    max_length: usize,
) -> CheckResult {
    let mut reasons = Vec::new();
    let lowered = path.as_str().to_lowercase();

    let length = path.char_len();
    if length > max_length {
        reasons.push(ViolationReason::PathTooLong { length, max: max_length });
    }

    if has_accented_characters(path.as_str()) {
        reasons.push(ViolationReason::AccentedCharacters);
    }

    for folder in CloudFolder::ALL {
        if lowered.contains(&folder.marker().to_lowercase()) {
            reasons.push(ViolationReason::CloudFolder(folder));
        }
    }

    if let Some(documents) = special_folders.documents()
        && starts_with_ignore_case(&lowered, documents)
    {
        reasons.push(ViolationReason::DocumentsFolder);
    }

    if let Some(desktop) = special_folders.desktop()
        && starts_with_ignore_case(&lowered, desktop)
    {
        reasons.push(ViolationReason::OnDesktop);
    }

    CheckResult::new(reasons)
}

/// Latin-1 letters `à..=ÿ` and their uppercase forms. Composed forms only.
pub fn is_accented(c: char) -> bool {
    matches!(c, '\u{c0}'..='\u{d6}' | '\u{d8}'..='\u{de}' | '\u{e0}'..='\u{ff}' | '\u{178}')
}

fn has_accented_characters(path: &str) -> bool {
    path.chars().any(is_accented)
}

fn starts_with_ignore_case(lowered_path: &str, prefix: &str) -> bool {
    lowered_path.starts_with(&prefix.to_lowercase())
}
