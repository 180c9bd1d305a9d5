use std::fmt;
use std::iter::FusedIterator;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::entry::{Entry, EntryKind};
use crate::error::HeverError;
use crate::results::ScanStats;
use crate::traits::{DirHandle, Matcher, Reporter, Source};

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to [`Traverse::new`].
pub(crate) struct EngineOptions {
    pub root:      PathBuf,
    pub max_depth: usize,
    pub source:    Box<dyn Source>,
    pub matcher:   Box<dyn Matcher>,
    pub reporter:  Box<dyn Reporter>,
}

// ---------------------------------------------------------------------------
// Traverse
// ---------------------------------------------------------------------------

/// A lazy, one-shot, depth-bounded walk below a root directory.
///
/// Created by [`WalkBuilder::build`](crate::WalkBuilder::build) or
/// [`traverse`](crate::traverse). Each call to `next()` does just enough work
/// to produce the next matching record: a subdirectory is not opened until the
/// record after its own has been requested.
///
/// The iterator keeps one open directory handle per active recursion level.
/// A handle is dropped as soon as it is exhausted or fails, and dropping the
/// `Traverse` drops whatever is still open.
///
/// Failures never reach the item stream:
///
/// - a directory that cannot be opened is skipped with its whole subtree;
/// - an error while reading a directory ends the scan of that directory;
/// - an entry whose metadata cannot be read is skipped and passed to the
///   [`Reporter`].
pub struct Traverse {
    source:    Box<dyn Source>,
    matcher:   Box<dyn Matcher>,
    reporter:  Box<dyn Reporter>,
    max_depth: usize,
    stack:     Vec<Frame>,
    pending:   Option<(PathBuf, usize)>,
    stats:     ScanStats,
}

/// One open directory on the traversal stack.
struct Frame {
    path:   PathBuf,
    handle: DirHandle,
    level:  usize,
}

impl Traverse {
    pub(crate) fn new(opts: EngineOptions) -> Self {
        Self {
            source:    opts.source,
            matcher:   opts.matcher,
            reporter:  opts.reporter,
            max_depth: opts.max_depth,
            stack:     Vec::new(),
            pending:   Some((opts.root, 0)),
            stats:     ScanStats::default(),
        }
    }

    /// Counters for everything scanned so far.
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// The depth limit this walk was built with.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of directory handles currently held open.
    pub fn open_handles(&self) -> usize {
        self.stack.len()
    }

    /// Open `path` and push it on the stack, or skip its subtree on failure.
    fn descend(&mut self, path: PathBuf, level: usize) {
        match self.source.read_dir(&path) {
            Ok(handle) => {
                trace!(path = %path.display(), level, "scanning directory");
                self.stack.push(Frame { path, handle, level });
            }
            Err(source) => {
                self.stats.skipped_dirs += 1;
                let err = HeverError::ScanOpen { path, source };
                debug!(error = %err, "skipping subtree");
            }
        }
    }
}

impl Iterator for Traverse {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            if let Some((path, level)) = self.pending.take() {
                self.descend(path, level);
            }

            let frame = self.stack.last_mut()?;
            let level = frame.level;

            let item = match frame.handle.next() {
                Some(Ok(item)) => item,
                Some(Err(source)) => {
                    let err = HeverError::ScanRead { path: frame.path.clone(), source };
                    debug!(error = %err, "abandoning directory scan");
                    self.stack.pop();
                    continue;
                }
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            // An unrepresentable timestamp counts as unreadable metadata.
            let stat = self.source.stat(&item.path);
            let entry = match stat.and_then(|stat| Entry::new(&item, &stat, level)) {
                Ok(entry) => entry,
                Err(source) => {
                    self.stats.failed_entries += 1;
                    self.reporter.report(&HeverError::Metadata { path: item.path, source });
                    continue;
                }
            };

            match entry.kind {
                EntryKind::File => self.stats.files += 1,
                EntryKind::Dir  => self.stats.dirs += 1,
            }

            // Descent depends on depth alone; the matcher only gates output.
            if entry.is_dir() && level < self.max_depth {
                self.pending = Some((entry.path.clone(), level + 1));
            }

            if self.matcher.is_match(&entry) {
                self.stats.emitted += 1;
                return Some(entry);
            }
        }
    }
}

impl FusedIterator for Traverse {}

impl fmt::Debug for Traverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traverse")
            .field("max_depth", &self.max_depth)
            .field("open", &self.stack.iter().map(|fr| &fr.path).collect::<Vec<_>>())
            .field("pending", &self.pending)
            .field("stats", &self.stats)
            .finish()
    }
}
