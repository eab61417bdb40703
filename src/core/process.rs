use std::{fs, path::Path};

use super::strip::{StripMode, strip};

/// Result of processing a single file. Failures are carried as data so one
/// bad file never aborts the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Comments were removed and the file was rewritten (or would be, in a
    /// dry run).
    Cleaned,
    /// Stripping produced byte-identical content; the file was not touched.
    Unchanged,
    /// The file could not be read, decoded as UTF-8, or written back.
    Failed(String),
}

/// Read `path`, strip comments, and write the result back in place.
///
/// The write is skipped when nothing changed, and suppressed entirely in a
/// dry run. There is no atomic-write guarantee; a failed write leaves
/// whatever was flushed.
pub fn process_file(path: &Path, mode: StripMode, dry_run: bool) -> FileOutcome {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return FileOutcome::Failed(err.to_string()),
    };

    let stripped = strip(&source, mode);
    if stripped == source {
        return FileOutcome::Unchanged;
    }

    if dry_run {
        return FileOutcome::Cleaned;
    }

    match fs::write(path, &stripped) {
        Ok(()) => FileOutcome::Cleaned,
        Err(err) => FileOutcome::Failed(err.to_string()),
    }
}
