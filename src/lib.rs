//! # hever
//!
//! Lazy, depth-bounded directory traversal with type and name filters.
//!
//! hever lists the entries below a root directory as an iterator of [`Entry`]
//! records (name, path, kind, size in KiB, modification and creation dates).
//! The walk is bounded by a depth, and the output can be narrowed to files or
//! directories and to names containing one of a set of patterns.
//!
//! Storage failures never abort a walk. A directory that cannot be opened is
//! skipped with its subtree; an entry whose metadata cannot be read is skipped
//! and reported through a [`Reporter`] (standard output by default).
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//! use hever::TypeFilter;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::write(dir.path().join("invoice_jan.txt"), "jan").unwrap();
//! fs::write(dir.path().join("report.txt"), "q1").unwrap();
//! fs::create_dir(dir.path().join("archive")).unwrap();
//! fs::write(dir.path().join("archive").join("invoice_dec.txt"), "dec").unwrap();
//!
//! let names: Vec<String> = hever::walk(dir.path())
//!     .depth(1)
//!     .kind(TypeFilter::FileOnly)
//!     .pattern("INVOICE")
//!     .build()
//!     .map(|e| e.name)
//!     .collect();
//!
//! assert_eq!(names.len(), 2);
//! ```
//!
//! # Custom Sources and Reporters
//!
//! Implement [`Source`] to walk something other than the local filesystem,
//! and pass any `Fn(&HeverError)` as a reporter to capture diagnostics:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let count = hever::walk("/definitely/not/here")
//!     .reporter(move |e: &hever::HeverError| sink.borrow_mut().push(e.to_string()))
//!     .build()
//!     .count();
//!
//! // A missing root is skipped like any unreadable directory.
//! assert_eq!(count, 0);
//! assert!(seen.borrow().is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod engine;

mod builder;
mod entry;
mod error;
mod results;
mod source;
mod traits;

use std::path::PathBuf;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::{TypeFilter, WalkBuilder};
pub use engine::Traverse;
pub use entry::{format_date, DirItem, Entry, EntryKind, Stat};
pub use error::HeverError;
pub use results::ScanStats;
pub use source::LocalSource;
pub use traits::{DirHandle, Matcher, Reporter, Source, StdoutReporter};

// ── Entry points ──────────────────────────────────────────────────────────────

/// Create a new [`WalkBuilder`] rooted at `root`.
///
/// Defaults: depth 0, [`TypeFilter::Any`], no patterns, [`LocalSource`],
/// [`StdoutReporter`].
pub fn walk(root: impl Into<PathBuf>) -> WalkBuilder {
    WalkBuilder::new(root)
}

/// Walk `root` down to `depth` levels below its direct children, emitting
/// entries accepted by `kind` whose names contain any of `patterns`.
///
/// Shorthand for the equivalent [`walk()`] chain.
///
/// # Example
///
/// ```rust,no_run
/// use hever::TypeFilter;
///
/// let pngs = hever::traverse("photos", 0, TypeFilter::FileOnly, ["png"]);
/// for entry in pngs {
///     println!("{} modified {}", entry.name, entry.modification);
/// }
/// ```
pub fn traverse<I, S>(root: impl Into<PathBuf>, depth: usize, kind: TypeFilter, patterns: I) -> Traverse
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    walk(root).depth(depth).kind(kind).patterns(patterns).build()
}
