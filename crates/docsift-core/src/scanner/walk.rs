/// Serial directory walker using `jwalk`.
///
/// The walk runs on the calling thread (`Parallelism::Serial`) and yields
/// one [`ScanEntry`] per regular file or per failure. Readable directories
/// produce nothing; one that cannot be opened yields a single skip.
/// Symbolic links are never descended into, but a link to a regular file is
/// stat'ed through and counted as that file.
use crate::analysis::file_types::extension_of;
use crate::model::{FileRecord, ScanEntry, SkipReason, SkippedEntry};
use std::path::{Path, PathBuf};
use tracing::debug;

type WalkResult = Result<jwalk::DirEntry<((), ())>, jwalk::Error>;

/// Lazily walk `root`. Ordering is unspecified.
pub fn walk(root: &Path) -> impl Iterator<Item = ScanEntry> {
    let root_path = root.to_path_buf();
    jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
        .parallelism(jwalk::Parallelism::Serial)
        .into_iter()
        .filter_map(move |result| convert(result, &root_path))
}

fn convert(result: WalkResult, root_path: &Path) -> Option<ScanEntry> {
    let entry = match result {
        Ok(e) => e,
        Err(err) => {
            // jwalk errors are typically access-denied on directories.
            let reason = err
                .io_error()
                .map(SkipReason::from_io)
                .unwrap_or_else(|| SkipReason::Other(err.to_string()));
            let path = err.path().map(Path::to_path_buf);
            debug!(
                "Skipping {}: {reason}",
                path.as_deref().unwrap_or(root_path).display()
            );
            return Some(ScanEntry::Skipped(SkippedEntry { path, reason }));
        }
    };

    let path = entry.path();

    // jwalk reports a directory it could not open on the directory's own
    // entry rather than as an `Err` item.
    if entry.file_type().is_dir() {
        return entry
            .read_children_error
            .as_ref()
            .map(|err| unreadable_dir(path, err));
    }

    // When pointed at a single file, the root is not part of the folder
    // contents.
    if path == root_path {
        return None;
    }

    stat_file(path)
}

fn unreadable_dir(path: PathBuf, err: &jwalk::Error) -> ScanEntry {
    let reason = err
        .io_error()
        .map(SkipReason::from_io)
        .unwrap_or_else(|| SkipReason::Other(err.to_string()));
    debug!("Skipping unreadable directory {}: {reason}", path.display());
    ScanEntry::Skipped(SkippedEntry {
        path: Some(path),
        reason,
    })
}

/// Stat one non-directory entry, following symbolic links.
fn stat_file(path: PathBuf) -> Option<ScanEntry> {
    let skip = |path: PathBuf, err: &std::io::Error| {
        let reason = SkipReason::from_io(err);
        debug!("Skipping {}: {reason}", path.display());
        Some(ScanEntry::Skipped(SkippedEntry {
            path: Some(path),
            reason,
        }))
    };

    let meta = match std::fs::metadata(&path) {
        Ok(meta) => meta,
        Err(err) => return skip(path, &err),
    };

    // Sockets, FIFOs, device nodes and links to directories.
    if !meta.is_file() {
        return None;
    }

    let modified = match meta.modified() {
        Ok(time) => time,
        Err(err) => return skip(path, &err),
    };

    Some(ScanEntry::File(FileRecord {
        extension: extension_of(&path),
        size: meta.len(),
        modified,
        path,
    }))
}
