use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::entry::{DirItem, EntryKind, Stat};
use crate::traits::{DirHandle, Source};

/// Reads the local filesystem through `std::fs`.
///
/// Symlinks are followed for classification and metadata: a link to a
/// directory is a directory, and a dangling link fails its `stat`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSource;

impl Source for LocalSource {
    fn read_dir(&self, path: &Path) -> io::Result<DirHandle> {
        let entries = fs::read_dir(path)?;
        Ok(Box::new(entries.map(|res| res.map(to_item))))
    }

    fn stat(&self, path: &Path) -> io::Result<Stat> {
        let meta = fs::metadata(path)?;
        let modified = meta.modified()?;
        Ok(Stat {
            len: meta.len(),
            modified,
            created: creation_time(&meta).unwrap_or(modified),
        })
    }
}

fn to_item(entry: DirEntry) -> DirItem {
    let path = entry.path();
    let is_dir = match entry.file_type() {
        Ok(ft) if ft.is_symlink() => fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false),
        Ok(ft) => ft.is_dir(),
        Err(_) => false,
    };

    DirItem {
        name: entry.file_name().to_string_lossy().into_owned(),
        path,
        kind: if is_dir { EntryKind::Dir } else { EntryKind::File },
    }
}

/// Birth time where the platform has one, otherwise the Unix status-change time.
fn creation_time(meta: &Metadata) -> Option<SystemTime> {
    meta.created().ok().or_else(|| status_changed(meta))
}

#[cfg(unix)]
fn status_changed(meta: &Metadata) -> Option<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::{Duration, UNIX_EPOCH};

    let secs = u64::try_from(meta.ctime()).ok()?;
    let nanos = u32::try_from(meta.ctime_nsec()).unwrap_or(0);
    Some(UNIX_EPOCH + Duration::new(secs, nanos))
}

#[cfg(not(unix))]
fn status_changed(_meta: &Metadata) -> Option<SystemTime> {
    None
}
