use std::path::{Path, PathBuf};

use crate::error::FindError;
use crate::executor::RuleExecutor;
use crate::rule::Rule;

// ---------------------------------------------------------------------------
// FindBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a find.
///
/// Created via [`rufind::find()`](crate::find). Configure with chained
/// builder methods, then call [`run()`](FindBuilder::run) with the base
/// directory to walk.
///
/// # Example
///
/// ```rust,ignore
/// let results = rufind::find()
///     .rule(Rule::file())
///     .rule(Rule::extension("jpg"))
///     .ignore_io_errors(true)
///     .run("/home/me/pictures")?;
/// ```
pub struct FindBuilder {
    rules: Vec<Rule>,
    recursive: bool,
    ignore_io_errors: bool,
}

impl Default for FindBuilder {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            recursive: true,
            ignore_io_errors: false,
        }
    }
}

impl FindBuilder {
    // ── Rules ─────────────────────────────────────────────────────────────

    /// Append a rule. Rules are evaluated in the order they were added and
    /// a path must satisfy all of them to be reported.
    ///
    /// No rules at all means every entry under the base path is a match.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append several rules at once, preserving their order.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Descend into subdirectories. On by default; turn off to examine only
    /// the base directory's direct children.
    pub fn recursive(mut self, yes: bool) -> Self {
        self.recursive = yes;
        self
    }

    /// Treat per-entry metadata read failures as non-matches instead of
    /// aborting the whole find. Off by default.
    pub fn ignore_io_errors(mut self, yes: bool) -> Self {
        self.ignore_io_errors = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Walk `base` and return every matching path, in traversal order.
    ///
    /// Blocks until the walk completes; there is no cancellation point
    /// mid-listing, so callers wanting a deadline must impose one from
    /// outside.
    ///
    /// # Errors
    ///
    /// `FindError::NotFound` / `FindError::NotADirectory` when `base` is
    /// unusable, and `FindError::Io` for listing failures during the walk —
    /// plus per-entry metadata failures unless
    /// [`ignore_io_errors`](FindBuilder::ignore_io_errors) was set.
    pub fn run(self, base: impl AsRef<Path>) -> Result<Vec<PathBuf>, FindError> {
        let base = base.as_ref();
        if !base.exists() {
            return Err(FindError::NotFound(base.to_path_buf()));
        }
        if !base.is_dir() {
            return Err(FindError::NotADirectory(base.to_path_buf()));
        }

        let mut executor = RuleExecutor::new(self.rules);
        executor.ignore_io_errors(self.ignore_io_errors);
        executor.execute(base, self.recursive)
    }

    /// Consume the builder and hand back the configured executor, for
    /// callers that want to drive [`evaluate`](RuleExecutor::evaluate) or
    /// repeated [`execute`](RuleExecutor::execute) calls themselves.
    pub fn into_executor(self) -> RuleExecutor {
        let mut executor = RuleExecutor::new(self.rules);
        executor.ignore_io_errors(self.ignore_io_errors);
        executor
    }
}
