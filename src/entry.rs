use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, LocalResult, TimeZone};

/// A single record produced by [`Traverse`](crate::engine::Traverse).
///
/// Built fresh for every emitted file or directory. Nothing about the walk
/// holds on to it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Base name of the entry.
    pub name: String,

    /// Full path to the entry.
    pub path: PathBuf,

    /// Whether this is a file or a directory.
    pub kind: EntryKind,

    /// Size in kibibytes (`len / 1024`).
    pub size_kb: f64,

    /// Last modification date, `dd/mm/yyyy`.
    pub modification: String,

    /// Creation date (or the closest thing the platform offers), `dd/mm/yyyy`.
    pub creation: String,

    /// Recursion level the entry was found at. Direct children of the root = 0.
    pub depth: usize,
}

impl Entry {
    /// Fails with `InvalidData` when a timestamp has no calendar date.
    pub(crate) fn new(item: &DirItem, stat: &Stat, depth: usize) -> io::Result<Self> {
        Ok(Self {
            name: item.name.clone(),
            path: item.path.clone(),
            kind: item.kind,
            size_kb: stat.len as f64 / 1024.0,
            modification: checked_date(stat.modified)?,
            creation: checked_date(stat.created)?,
            depth,
        })
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The kind of a traversed entry.
///
/// Only two kinds are modelled. Symlinks take the kind of their target, and
/// anything that is not a directory counts as a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file (or anything that isn't a directory).
    File,

    /// A directory.
    Dir,
}

/// One raw record from an open directory handle, before its metadata is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirItem {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// The metadata a [`Source`](crate::traits::Source) reports for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// Length in bytes.
    pub len: u64,
    pub modified: SystemTime,
    pub created: SystemTime,
}

/// Render a timestamp as `dd/mm/yyyy` in local time.
///
/// Returns `None` for times outside the range chrono can represent.
pub fn format_date(time: SystemTime) -> Option<String> {
    let local = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => Local.timestamp_opt(i64::try_from(after.as_secs()).ok()?, after.subsec_nanos()),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => Local.timestamp_opt(-secs, 0),
                nanos => Local.timestamp_opt(-secs - 1, 1_000_000_000 - nanos),
            }
        }
    };

    match local {
        LocalResult::Single(dt) => Some(dt.format("%d/%m/%Y").to_string()),
        _ => None,
    }
}

fn checked_date(time: SystemTime) -> io::Result<String> {
    format_date(time).ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "timestamp out of range"))
}
