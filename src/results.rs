/// Running counters for a traversal.
///
/// Updated as the [`Traverse`](crate::engine::Traverse) iterator advances, so
/// reading them mid-walk reflects only what has been scanned so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Files whose metadata was read (emitted or not).
    pub files: usize,

    /// Directories whose metadata was read (emitted or not).
    pub dirs: usize,

    /// Records handed to the consumer.
    pub emitted: usize,

    /// Directories that could not be opened. Their subtrees were skipped.
    pub skipped_dirs: usize,

    /// Entries dropped because their metadata could not be read.
    pub failed_entries: usize,
}

impl ScanStats {
    /// Total entries scanned, `files + dirs`.
    pub fn scanned(&self) -> usize {
        self.files + self.dirs
    }
}
