use std::io;
use std::path::Path;

use crate::entry::{DirItem, Entry, Stat};
use crate::error::HeverError;

/// An open directory-scan handle.
///
/// Dropping the box releases the handle. The traverser drops it as soon as
/// the iterator is exhausted or fails, or when the traversal itself is dropped.
pub type DirHandle = Box<dyn Iterator<Item = io::Result<DirItem>>>;

/// Where the traverser reads directories and metadata from.
///
/// [`LocalSource`](crate::source::LocalSource) is the `std::fs` backed default.
/// Implement this to walk something else, or to simulate storage failures.
///
/// # Object Safety
///
/// `Source` is object-safe. The builder stores sources as `Box<dyn Source>`,
/// so `read_dir()` returns a boxed iterator rather than `impl Iterator`.
///
/// # Example
///
/// ```rust
/// use std::io;
/// use std::path::Path;
/// use hever::{DirHandle, Source, Stat};
///
/// /// A source where nothing can be opened.
/// struct Locked;
///
/// impl Source for Locked {
///     fn read_dir(&self, _path: &Path) -> io::Result<DirHandle> {
///         Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"))
///     }
///
///     fn stat(&self, _path: &Path) -> io::Result<Stat> {
///         Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"))
///     }
/// }
///
/// assert_eq!(hever::walk("/anywhere").source(Locked).build().count(), 0);
/// ```
pub trait Source {
    /// Open a scan handle over the direct children of `path`.
    fn read_dir(&self, path: &Path) -> io::Result<DirHandle>;

    /// Read size and timestamps for `path`.
    fn stat(&self, path: &Path) -> io::Result<Stat>;
}

/// Decides whether an entry is emitted.
///
/// Matchers never affect which directories are descended into, only which
/// records the consumer sees.
///
/// # Example
///
/// ```rust
/// use hever::{Matcher, Entry};
///
/// struct ExtensionMatcher(String);
///
/// impl Matcher for ExtensionMatcher {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.path
///             .extension()
///             .map(|e| e.eq_ignore_ascii_case(&self.0))
///             .unwrap_or(false)
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `true` if this entry should be emitted.
    fn is_match(&self, entry: &Entry) -> bool;
}

/// Receives per-entry diagnostics (metadata read failures).
///
/// Any `Fn(&HeverError)` closure is a reporter.
pub trait Reporter {
    fn report(&self, error: &HeverError);
}

impl<F> Reporter for F
where
    F: Fn(&HeverError),
{
    fn report(&self, error: &HeverError) {
        self(error)
    }
}

/// Writes each diagnostic as one line on standard output. The default reporter.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, error: &HeverError) {
        println!("{error}");
    }
}
