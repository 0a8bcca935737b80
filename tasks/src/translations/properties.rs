//! `.properties` resource bundle parsing.
//!
//! Implements the line format read by `java.util.Properties`:
//!
//! - Lines end at `\n`, `\r\n` or a lone `\r`.
//! - `#` and `!` start comment lines; blank lines are ignored.
//! - A key ends at the first unescaped `=`, `:` or whitespace; whitespace
//!   and at most one `=`/`:` separate it from the value.
//! - A line ending in an odd number of backslashes continues on the next
//!   line, whose leading whitespace is dropped.
//! - `\t`, `\n`, `\r`, `\f` and `\uXXXX` escapes are decoded (surrogate
//!   pairs included); any other escaped character stands for itself.
//!
//! Bundles are read as UTF-8. When a key repeats, the last value wins.

use super::TranslationError;
use camino::Utf8Path;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Key/value strings loaded from one locale bundle.
///
/// Keys iterate in sorted order, which keeps reports deterministic.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::translations::LocaleResourceSet;
///
/// let set: LocaleResourceSet = [("launch", "Launch"), ("exit", "Exit")].into_iter().collect();
/// assert!(set.contains_key("launch"));
/// assert_eq!(set.keys().collect::<Vec<_>>(), ["exit", "launch"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleResourceSet {
    entries: BTreeMap<String, String>,
}

impl LocaleResourceSet {
    /// Insert an entry, replacing any previous value for the key.
    ///
    /// Empty keys are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !key.is_empty() {
            self.entries.insert(key, value.into());
        }
    }

    /// Value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleResourceSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

/// Parse `.properties` text into a resource set.
///
/// Parsing never fails: malformed `\u` escapes are kept literally.
///
/// # Examples
///
/// ```
/// use hmcl_build_tasks::translations::parse_properties;
///
/// let set = parse_properties("# comment\ngreeting = Hello, \\\n    world\nname:HMCL\n");
/// assert_eq!(set.get("greeting"), Some("Hello, world"));
/// assert_eq!(set.get("name"), Some("HMCL"));
/// ```
#[must_use]
pub fn parse_properties(source: &str) -> LocaleResourceSet {
    let mut set = LocaleResourceSet::default();
    for line in logical_lines(source.strip_prefix('\u{feff}').unwrap_or(source)) {
        let (raw_key, raw_value) = split_entry(&line);
        set.insert(unescape(raw_key), unescape(raw_value));
    }
    set
}

/// Read and parse the bundle at `path`.
///
/// # Errors
///
/// Returns [`TranslationError::Read`] if the file cannot be read as UTF-8.
pub fn load_properties(path: &Utf8Path) -> Result<LocaleResourceSet, TranslationError> {
    let source = std::fs::read_to_string(path).map_err(|source| TranslationError::Read {
        path: path.to_owned(),
        source,
    })?;
    let set = parse_properties(&source);
    log::debug!("loaded {} keys from {path}", set.len());
    Ok(set)
}

const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0c}')
}

/// Join continuation lines and drop comments and blank lines.
fn logical_lines(source: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;
    for natural in natural_lines(source) {
        let trimmed = natural.trim_start_matches(is_blank);
        let mut current = if let Some(mut joined) = pending.take() {
            joined.push_str(trimmed);
            joined
        } else {
            if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
                continue;
            }
            trimmed.to_owned()
        };
        if ends_with_continuation(&current) {
            current.pop();
            pending = Some(current);
        } else {
            lines.push(current);
        }
    }
    lines.extend(pending);
    lines
}

/// Split on `\n`, `\r\n` or a lone `\r`.
fn natural_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Whether `line` ends in an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = index;
            break;
        }
    }
    let (key, rest) = line.split_at(key_end);
    let after_blank = rest.trim_start_matches(is_blank);
    let after_separator = after_blank
        .strip_prefix(['=', ':'])
        .unwrap_or(after_blank);
    (key, after_separator.trim_start_matches(is_blank))
}

/// Decode escape sequences.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('u') => {
                    if let Some(unit) = parse_unicode_escape(chars.as_str()) {
                        units.push(unit);
                        chars.nth(3);
                        continue;
                    }
                    flush_units(&mut units, &mut out);
                    out.push('u');
                }
                Some(escaped) => {
                    flush_units(&mut units, &mut out);
                    out.push(match escaped {
                        't' => '\t',
                        'n' => '\n',
                        'r' => '\r',
                        'f' => '\u{0c}',
                        other => other,
                    });
                }
                None => flush_units(&mut units, &mut out),
            }
        } else {
            flush_units(&mut units, &mut out);
            out.push(c);
        }
    }
    flush_units(&mut units, &mut out);
    out
}

/// Parse the four hex digits following `\u`, if present.
fn parse_unicode_escape(rest: &str) -> Option<u16> {
    let digits = rest.get(..4)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if !units.is_empty() {
        out.push_str(&String::from_utf16_lossy(units));
        units.clear();
    }
}
