use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::FindError;
use crate::units::{format_size, Unit};

// ---------------------------------------------------------------------------
// NameMatcher
// ---------------------------------------------------------------------------

/// How a name rule compares against a file name.
#[derive(Debug, Clone)]
pub enum NameMatcher {
    /// Exact file-name equality.
    Literal(String),

    /// Full-string regular expression match — the whole file name must
    /// match, not a substring of it. `compiled` is the user pattern wrapped
    /// in `\A(?:…)\z` anchors at construction time.
    Regex { pattern: String, compiled: Regex },
}

impl NameMatcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            NameMatcher::Literal(expected) => name == expected,
            NameMatcher::Regex { compiled, .. } => compiled.is_match(name),
        }
    }
}

/// Two name matchers are equal when they were configured the same way —
/// regex matchers compare by pattern text, not by compiled automaton.
impl PartialEq for NameMatcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NameMatcher::Literal(a), NameMatcher::Literal(b)) => a == b,
            (NameMatcher::Regex { pattern: a, .. }, NameMatcher::Regex { pattern: b, .. }) => {
                a == b
            }
            _ => false,
        }
    }
}

impl Eq for NameMatcher {}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A single filter predicate over a filesystem path.
///
/// Rules are immutable once constructed and carry no evaluation state — a
/// verdict is a pure function of the path and its filesystem metadata at the
/// moment [`matches`](Rule::matches) is called. Two rules with the same
/// variant and configuration compare equal regardless of how they were built.
///
/// The set is closed on purpose: the executor joins whatever rules it is
/// given with logical AND, so new filter kinds are added here as variants
/// rather than through an open trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Match entries whose directory-ness equals `want_directory`.
    ///
    /// The check stats through symlinks, so a symlink pointing at a
    /// directory counts as a directory here (recursion decisions are made
    /// separately, without following links). A path that disappears or
    /// cannot be statted is a non-match for either polarity — this rule
    /// never fails.
    Type { want_directory: bool },

    /// Match file names carrying the configured extension (case-sensitive).
    Extension { extension: String },

    /// Match the file name itself, literally or by regex.
    Name { matcher: NameMatcher },

    /// Match regular files of at least `min_bytes` bytes. Directories never
    /// match, whatever the threshold.
    Size { min_bytes: u64 },
}

impl Rule {
    // ── Constructors ──────────────────────────────────────────────────────

    /// Rule matching directories only (`-type d`).
    pub fn directory() -> Rule {
        Rule::Type {
            want_directory: true,
        }
    }

    /// Rule matching non-directories only (`-type f`).
    pub fn file() -> Rule {
        Rule::Type {
            want_directory: false,
        }
    }

    /// Rule matching a file extension (`-ext`). Accepts both `jpg` and
    /// `.jpg` forms; leading/trailing whitespace is stripped.
    pub fn extension(extension: impl Into<String>) -> Rule {
        Rule::Extension {
            extension: extension.into().trim().to_string(),
        }
    }

    /// Rule matching an exact file name (`-name`).
    pub fn name(name: impl Into<String>) -> Rule {
        Rule::Name {
            matcher: NameMatcher::Literal(name.into().trim().to_string()),
        }
    }

    /// Rule matching file names against a regular expression (`-name … RE`).
    ///
    /// The pattern must match the entire file name. Compilation happens
    /// here, so an invalid pattern is rejected before any traversal starts.
    pub fn name_regex(pattern: impl Into<String>) -> Result<Rule, FindError> {
        let pattern = pattern.into().trim().to_string();
        let compiled = Regex::new(&format!(r"\A(?:{pattern})\z"))
            .map_err(|e| FindError::InvalidPattern(e.to_string()))?;
        Ok(Rule::Name {
            matcher: NameMatcher::Regex { pattern, compiled },
        })
    }

    /// Rule matching files of at least `min_bytes` bytes (`-size`).
    pub fn min_size(min_bytes: u64) -> Rule {
        Rule::Size { min_bytes }
    }

    /// Like [`min_size`](Rule::min_size), with the threshold given in a
    /// larger unit: `Rule::min_size_in(2, Unit::Megabyte)`. A product beyond
    /// `u64::MAX` saturates, yielding a threshold no file reaches.
    pub fn min_size_in(count: u64, unit: Unit) -> Rule {
        Rule::Size {
            min_bytes: count.saturating_mul(unit.bytes()),
        }
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    /// Does `path` satisfy this rule?
    ///
    /// # Errors
    ///
    /// `FindError::Io` when the metadata this rule needs cannot be read —
    /// only the size rule stats fallibly; the type rule swallows stat
    /// failures as documented on the variant, and name/extension rules need
    /// no metadata at all.
    pub fn matches(&self, path: &Path) -> Result<bool, FindError> {
        match self {
            Rule::Type { want_directory } => Ok(match fs::metadata(path) {
                Ok(meta) => meta.is_dir() == *want_directory,
                Err(_) => false,
            }),
            Rule::Extension { extension } => Ok(extension_matches(path, extension)),
            Rule::Name { matcher } => Ok(file_name(path).is_some_and(|n| matcher.matches(&n))),
            Rule::Size { min_bytes } => {
                let meta =
                    fs::metadata(path).map_err(|e| FindError::io(path.to_path_buf(), e))?;
                if meta.is_dir() {
                    return Ok(false);
                }
                Ok(meta.len() >= *min_bytes)
            }
        }
    }

    /// A reproducible, user-readable description of the rule and its
    /// configured value.
    pub fn description(&self) -> String {
        match self {
            Rule::Type { want_directory } => {
                let kind = if *want_directory { "Directory" } else { "File" };
                format!("Type of File matching {kind}")
            }
            Rule::Extension { extension } => {
                format!("Searches files by the Extension matching {extension}")
            }
            Rule::Name { matcher } => match matcher {
                NameMatcher::Literal(name) => format!("Searches files by name matching {name}"),
                NameMatcher::Regex { pattern, .. } => {
                    format!("Searches files by name matching the Regular Expression {pattern}")
                }
            },
            Rule::Size { min_bytes } => {
                format!(
                    "Find Files that match or exceeds size {}",
                    format_size(*min_bytes)
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Extension check against both suffix forms of the file name.
///
/// `archive.tar.gz` offers two candidates: the fully dotted suffix from the
/// first dot (`.tar.gz`) and the bare suffix after the last dot (`gz`). The
/// rule matches when either equals the configured value exactly, so both
/// `-ext gz` and `-ext .tar.gz` select that file. A name with no dot has no
/// extension and never matches.
fn extension_matches(path: &Path, extension: &str) -> bool {
    let Some(name) = file_name(path) else {
        return false;
    };
    let Some(first_dot) = name.find('.') else {
        return false;
    };
    if &name[first_dot..] == extension {
        return true;
    }
    let last_dot = name.rfind('.').unwrap_or(first_dot);
    &name[last_dot + 1..] == extension
}
