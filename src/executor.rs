use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FindError;
use crate::rule::Rule;

// ---------------------------------------------------------------------------
// RuleExecutor
// ---------------------------------------------------------------------------

/// Evaluates a fixed, ordered set of [`Rule`]s over a directory tree.
///
/// This is the core engine: [`evaluate`](RuleExecutor::evaluate) answers
/// "does this one path satisfy every rule" and
/// [`execute`](RuleExecutor::execute) drives the recursive walk, collecting
/// every path that does. Most callers go through
/// [`FindBuilder`](crate::FindBuilder) instead of constructing one directly.
///
/// The executor holds no per-run state — rules are read-only during
/// evaluation — so a single instance can back any number of `execute` calls.
pub struct RuleExecutor {
    rules: Vec<Rule>,
    ignore_io_errors: bool,
}

impl RuleExecutor {
    /// Build an executor over `rules`. Insertion order is evaluation order.
    ///
    /// An empty rule set matches everything.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            ignore_io_errors: false,
        }
    }

    /// Choose what happens when a rule cannot read a path's metadata
    /// mid-evaluation (permission denied, file removed between listing and
    /// stat): `true` treats that path as a non-match and moves on, `false`
    /// (the default) aborts the whole traversal with the error.
    pub fn ignore_io_errors(&mut self, ignore: bool) {
        self.ignore_io_errors = ignore;
    }

    /// The rules this executor applies, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Does `path` satisfy the conjunction of all configured rules?
    ///
    /// Rules are applied in order with short-circuit: the first rule that
    /// returns false ends the evaluation, and later rules never touch the
    /// filesystem for this path.
    ///
    /// # Errors
    ///
    /// `FindError::Io` when a rule's metadata read fails and the ignore
    /// policy is off. With the policy on, the same failure yields
    /// `Ok(false)` for this path only.
    pub fn evaluate(&self, path: &Path) -> Result<bool, FindError> {
        for rule in &self.rules {
            match rule.matches(path) {
                Ok(true) => continue,
                Ok(false) => return Ok(false),
                Err(_) if self.ignore_io_errors => return Ok(false),
                Err(e) => return Err(e),
            }
        }
        Ok(true)
    }

    /// Walk `parent` and return every path that satisfies all rules.
    ///
    /// Direct children are listed and evaluated one at a time, in whatever
    /// order the filesystem yields them. When `recursive` is set and an
    /// entry is itself a directory, its full recursive result block is
    /// appended right after that entry's own verdict, before the next
    /// sibling is considered. Symbolic links are never followed for the
    /// recursion decision, so a link back to an ancestor cannot loop the
    /// walk — though the link itself is still evaluated like any entry.
    ///
    /// The caller is expected to have checked that `parent` exists and is a
    /// readable directory; [`FindBuilder::run`](crate::FindBuilder::run)
    /// does so.
    ///
    /// # Errors
    ///
    /// `FindError::Io` when a directory listing fails — that always aborts
    /// the call, regardless of the ignore policy, which governs only
    /// per-entry metadata reads.
    pub fn execute(&self, parent: &Path, recursive: bool) -> Result<Vec<PathBuf>, FindError> {
        let mut results = Vec::new();
        // The read_dir handle closes when `entries` drops, on every exit path.
        let entries = fs::read_dir(parent).map_err(|e| FindError::io(parent, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| FindError::io(parent, e))?;
            let path = entry.path();
            if self.evaluate(&path)? {
                results.push(path.clone());
            }
            if recursive && is_directory_no_follow(&path) {
                results.extend(self.execute(&path, recursive)?);
            }
        }
        Ok(results)
    }
}

/// Directory test for recursion decisions. lstat semantics: a symlink to a
/// directory reports false. A path that cannot be statted also reports
/// false — there is nothing to descend into either way.
fn is_directory_no_follow(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}
