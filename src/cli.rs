//! Command-line surface: flag grammar and result reporting.
//!
//! The grammar predates the crate and is kept as-is: single-dash long flags
//! (`-type`, `-ext`, `-name`, `-size`), a bare `RE` token after a name
//! pattern to mark it as a regex, and first-occurrence-wins when a flag is
//! repeated. That shape doesn't fit a derive-style parser, so each flag is
//! scanned out of the raw argument vector by hand, the way the rules
//! themselves are constructed one at a time.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use regex::Regex;

use crate::rule::Rule;
use crate::units::{format_size, Unit};

/// A parsed invocation: the base directory plus the rules the flags produced.
pub struct CliArgs {
    pub base: PathBuf,
    pub rules: Vec<Rule>,
}

/// One-line usage string for the binary.
pub const USAGE: &str =
    "Usage: rufind <path> [-type d|f] [-ext <value>] [-name <pattern> [RE]] [-size <number>[GB|MB|KB]]";

/// Parse the raw argument vector (program name already stripped).
///
/// The first positional argument is the base path; returns `None` when it is
/// missing. A flag with an invalid or missing value simply produces no rule —
/// the find runs with whatever rules did parse.
pub fn parse(args: &[String]) -> Option<CliArgs> {
    let base = args.first().filter(|a| !a.starts_with('-'))?;
    let mut rules = Vec::new();
    for rule in [
        parse_type(args),
        parse_extension(args),
        parse_name(args),
        parse_size(args),
    ]
    .into_iter()
    .flatten()
    {
        rules.push(rule);
    }
    Some(CliArgs {
        base: PathBuf::from(base),
        rules,
    })
}

/// `-type d` → directories, `-type f` → files (case-insensitive value).
fn parse_type(args: &[String]) -> Option<Rule> {
    let value = flag_value(args, "-type")?;
    if value.eq_ignore_ascii_case("d") {
        Some(Rule::directory())
    } else if value.eq_ignore_ascii_case("f") {
        Some(Rule::file())
    } else {
        None
    }
}

/// `-ext <value>`, taken verbatim (with or without the leading dot).
fn parse_extension(args: &[String]) -> Option<Rule> {
    flag_value(args, "-ext").map(Rule::extension)
}

/// `-name <pattern>`, optionally followed by a bare `RE` token to treat the
/// pattern as a full-match regular expression.
fn parse_name(args: &[String]) -> Option<Rule> {
    let idx = flag_index(args, "-name")?;
    let pattern = value_at(args, idx + 1)?;
    let is_regex = value_at(args, idx + 2).is_some_and(|v| v.eq_ignore_ascii_case("RE"));
    if is_regex {
        match Rule::name_regex(pattern) {
            Ok(rule) => Some(rule),
            Err(e) => {
                log::warn!("ignoring -name: {e}");
                None
            }
        }
    } else {
        Some(Rule::name(pattern))
    }
}

/// `-size <number>[GB|MB|KB]` — suffix is case-insensitive, no suffix means
/// plain bytes.
fn parse_size(args: &[String]) -> Option<Rule> {
    let value = flag_value(args, "-size")?;
    let re = Regex::new(r"(?i)^([0-9]+)(GB|MB|KB)?$").ok()?;
    let caps = re.captures(&value)?;
    let count: u64 = caps[1].parse().ok()?;
    let unit = caps
        .get(2)
        .map_or(Some(Unit::Byte), |m| Unit::from_suffix(m.as_str()))?;
    Some(Rule::min_size_in(count, unit))
}

/// Print one line per match: `File Size <value> <unit> <path>`.
///
/// A match whose size can no longer be read (removed since the walk) is
/// still reported, with `?` standing in for the size, and a warning logged.
pub fn report(out: &mut impl Write, results: &[PathBuf]) -> io::Result<()> {
    for path in results {
        match fs::metadata(path) {
            Ok(meta) => writeln!(
                out,
                "File Size {} {}",
                format_size(meta.len()),
                path.display()
            )?,
            Err(e) => {
                log::warn!("could not size {}: {e}", path.display());
                writeln!(out, "File Size ? {}", path.display())?;
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Flag scanning
// ---------------------------------------------------------------------------

fn flag_index(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a.trim() == flag)
}

/// The token at `idx`, unless it is missing or looks like another flag.
fn value_at(args: &[String], idx: usize) -> Option<String> {
    let value = args.get(idx)?.trim();
    if value.starts_with('-') {
        return None;
    }
    Some(value.to_string())
}

/// First occurrence of `flag`, paired with its value token.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    value_at(args, flag_index(args, flag)? + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn base_path_is_first_positional() {
        let cli = parse(&args(&["/tmp", "-ext", "txt"])).unwrap();
        assert_eq!(cli.base, PathBuf::from("/tmp"));
        assert_eq!(cli.rules, vec![Rule::extension("txt")]);
    }

    #[test]
    fn missing_base_path_is_rejected() {
        assert!(parse(&args(&[])).is_none());
        assert!(parse(&args(&["-ext", "txt"])).is_none());
    }

    #[test]
    fn type_flag_accepts_d_and_f() {
        assert_eq!(parse_type(&args(&["-type", "d"])), Some(Rule::directory()));
        assert_eq!(parse_type(&args(&["-type", "F"])), Some(Rule::file()));
        assert_eq!(parse_type(&args(&["-type", "x"])), None);
        assert_eq!(parse_type(&args(&["-type"])), None);
    }

    #[test]
    fn first_occurrence_of_a_flag_wins() {
        let rule = parse_extension(&args(&["-ext", "txt", "-ext", "jpg"]));
        assert_eq!(rule, Some(Rule::extension("txt")));
    }

    #[test]
    fn name_flag_with_re_marker_builds_a_regex_rule() {
        let rule = parse_name(&args(&["-name", r"a.*\.txt", "re"])).unwrap();
        assert_eq!(rule, Rule::name_regex(r"a.*\.txt").unwrap());

        let rule = parse_name(&args(&["-name", "notes.txt"])).unwrap();
        assert_eq!(rule, Rule::name("notes.txt"));
    }

    #[test]
    fn name_flag_rejects_flaglike_values() {
        assert_eq!(parse_name(&args(&["-name", "-type"])), None);
    }

    #[test]
    fn invalid_regex_produces_no_rule() {
        assert_eq!(parse_name(&args(&["-name", "[unclosed", "RE"])), None);
    }

    #[test]
    fn size_flag_understands_unit_suffixes() {
        assert_eq!(parse_size(&args(&["-size", "1000"])), Some(Rule::min_size(1000)));
        assert_eq!(
            parse_size(&args(&["-size", "2kb"])),
            Some(Rule::min_size(2048))
        );
        assert_eq!(
            parse_size(&args(&["-size", "1MB"])),
            Some(Rule::min_size(1 << 20))
        );
        assert_eq!(
            parse_size(&args(&["-size", "3GB"])),
            Some(Rule::min_size(3 << 30))
        );
        assert_eq!(
            parse_size(&args(&["-size", "20000000000GB"])),
            Some(Rule::min_size(u64::MAX))
        );
        assert_eq!(parse_size(&args(&["-size", "10TB"])), None);
        assert_eq!(parse_size(&args(&["-size", "lots"])), None);
    }

    #[test]
    fn report_keeps_a_match_whose_size_is_gone() {
        let dir = tempfile::tempdir().unwrap();
        let vanished = dir.path().join("vanished.txt");

        let mut out = Vec::new();
        report(&mut out, &[vanished.clone()]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("File Size ? {}\n", vanished.display()));
    }

    #[test]
    fn all_four_flags_compose() {
        let cli = parse(&args(&[
            "/data", "-type", "f", "-ext", "jpg", "-name", ".*", "RE", "-size", "1MB",
        ]))
        .unwrap();
        assert_eq!(cli.rules.len(), 4);
    }
}
