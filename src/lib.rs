//! # rufind
//!
//! Rule-driven recursive file finder — sequential, predictable, embeddable.
//!
//! rufind walks a directory tree depth-first and returns every path that
//! satisfies **all** of a set of filter rules: entry type, extension, name
//! (literal or regex), and minimum size. It owns the rule model ([`Rule`]),
//! the conjunction-and-traversal engine ([`RuleExecutor`]), and the builder
//! API ([`FindBuilder`]). The command-line surface lives in [`cli`] and is a
//! thin consumer of the same API.
//!
//! Traversal is single-threaded and synchronous on purpose: results come
//! back in a stable depth-first order (each entry's verdict, then its
//! subtree, then the next sibling), and error handling stays a matter of
//! plain `Result` values rather than worker coordination.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rufind::Rule;
//!
//! // Every .txt file of at least 1 KiB under ./docs, recursively.
//! let results = rufind::find()
//!     .rule(Rule::extension("txt"))
//!     .rule(Rule::min_size(1024))
//!     .run("./docs")
//!     .unwrap();
//!
//! for path in &results {
//!     println!("{}", path.display());
//! }
//! ```
//!
//! # Error policy
//!
//! Two failure classes are kept distinct. A directory that cannot be listed
//! always aborts the walk — there is no way to produce a faithful result
//! without it. A single entry whose metadata cannot be read is governed by
//! [`FindBuilder::ignore_io_errors`]: either it becomes a silent non-match,
//! or it aborts like a listing failure. The library itself never logs;
//! callers decide how loud a failed walk should be.

#![forbid(unsafe_code)]

pub mod cli;

mod builder;
mod error;
mod executor;
mod rule;
mod units;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::FindBuilder;
pub use error::FindError;
pub use executor::RuleExecutor;
pub use rule::{NameMatcher, Rule};
pub use units::{format_size, Unit};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`FindBuilder`] to configure and run a find.
///
/// # Example
///
/// ```rust,no_run
/// use rufind::Rule;
///
/// let dirs = rufind::find()
///     .rule(Rule::directory())
///     .recursive(false)
///     .run("/var/log")
///     .unwrap();
/// ```
pub fn find() -> FindBuilder {
    FindBuilder::default()
}
