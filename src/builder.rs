use std::path::PathBuf;
use std::str::FromStr;

use crate::engine::{EngineOptions, Traverse};
use crate::entry::{Entry, EntryKind};
use crate::error::HeverError;
use crate::source::LocalSource;
use crate::traits::{Matcher, Reporter, Source, StdoutReporter};

// ---------------------------------------------------------------------------
// TypeFilter
// ---------------------------------------------------------------------------

/// Which kinds of entries are emitted.
///
/// Directories are still descended into under [`TypeFilter::FileOnly`];
/// the filter only decides what the consumer sees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    #[default]
    Any,
    FileOnly,
    DirOnly,
}

impl TypeFilter {
    pub fn accepts(self, kind: EntryKind) -> bool {
        match self {
            Self::Any      => true,
            Self::FileOnly => kind == EntryKind::File,
            Self::DirOnly  => kind == EntryKind::Dir,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = HeverError;

    /// Accepts singular, plural and one-letter spellings, case-insensitively:
    /// `any`/`all`, `file`/`files`/`f`, `dir`/`dirs`/`d`/`directory`/`directories`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "all" => Ok(Self::Any),
            "file" | "files" | "f" => Ok(Self::FileOnly),
            "dir" | "dirs" | "d" | "directory" | "directories" => Ok(Self::DirOnly),
            _ => Err(HeverError::InvalidTypeFilter(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// WalkBuilder
// ---------------------------------------------------------------------------

/// Configures a traversal.
///
/// Created via [`hever::walk()`](crate::walk). Configure with chained builder
/// methods, then call [`build()`](WalkBuilder::build) or iterate it directly.
///
/// # Example
///
/// ```rust,no_run
/// use hever::TypeFilter;
///
/// for entry in hever::walk("/var/log")
///     .depth(2)
///     .kind(TypeFilter::FileOnly)
///     .pattern("error")
/// {
///     println!("{} {:.1} KiB", entry.path.display(), entry.size_kb);
/// }
/// ```
pub struct WalkBuilder {
    root:     PathBuf,
    depth:    usize,
    kind:     TypeFilter,
    patterns: Vec<String>,
    matcher:  Option<Box<dyn Matcher>>,
    source:   Option<Box<dyn Source>>,
    reporter: Option<Box<dyn Reporter>>,
}

impl WalkBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:     root.into(),
            depth:    0,
            kind:     TypeFilter::Any,
            patterns: Vec::new(),
            matcher:  None,
            source:   None,
            reporter: None,
        }
    }

    // ── Depth ─────────────────────────────────────────────────────────────

    /// How many levels below the root's direct children to descend.
    /// `0` (the default) lists only the direct children.
    pub fn depth(mut self, d: usize) -> Self {
        self.depth = d;
        self
    }

    // ── Filters ───────────────────────────────────────────────────────────

    /// Restrict emitted entries to files or directories.
    pub fn kind(mut self, kind: TypeFilter) -> Self {
        self.kind = kind;
        self
    }

    /// Add a name pattern. An entry is emitted if its name contains any of
    /// the patterns, compared case-insensitively. No patterns matches all.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into().to_lowercase());
        self
    }

    /// Add several name patterns. See [`pattern()`](WalkBuilder::pattern).
    pub fn patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns
            .extend(patterns.into_iter().map(|p| p.into().to_lowercase()));
        self
    }

    /// An extra predicate an entry must also satisfy to be emitted.
    pub fn with_matcher(mut self, m: impl Matcher + 'static) -> Self {
        self.matcher = Some(Box::new(m));
        self
    }

    // ── Collaborators ─────────────────────────────────────────────────────

    /// Read from `s` instead of the local filesystem.
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Some(Box::new(s));
        self
    }

    /// Send metadata-read diagnostics to `r` instead of standard output.
    pub fn reporter(mut self, r: impl Reporter + 'static) -> Self {
        self.reporter = Some(Box::new(r));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Create the lazy traversal. Nothing is read until it is iterated.
    pub fn build(self) -> Traverse {
        let matcher = Filter {
            kind:     self.kind,
            patterns: self.patterns,
            extra:    self.matcher,
        };

        Traverse::new(EngineOptions {
            root:      self.root,
            max_depth: self.depth,
            source:    self.source.unwrap_or_else(|| Box::new(LocalSource)),
            matcher:   Box::new(matcher),
            reporter:  self.reporter.unwrap_or_else(|| Box::new(StdoutReporter)),
        })
    }
}

impl IntoIterator for WalkBuilder {
    type Item = Entry;
    type IntoIter = Traverse;

    fn into_iter(self) -> Traverse {
        self.build()
    }
}

// ---------------------------------------------------------------------------
// Built-in matcher
// ---------------------------------------------------------------------------

/// Type filter, then pattern filter, then the caller's matcher if any.
/// `patterns` are stored lower-cased.
struct Filter {
    kind:     TypeFilter,
    patterns: Vec<String>,
    extra:    Option<Box<dyn Matcher>>,
}

impl Matcher for Filter {
    fn is_match(&self, entry: &Entry) -> bool {
        if !self.kind.accepts(entry.kind) {
            return false;
        }

        if !self.patterns.is_empty() {
            let name = entry.name.to_lowercase();
            if !self.patterns.iter().any(|p| name.contains(p.as_str())) {
                return false;
            }
        }

        self.extra.as_ref().map_or(true, |m| m.is_match(entry))
    }
}
