//! Character-level scanner for the name-path grammar.
//!
//! The same machine backs dotted property paths (`.` separator),
//! comma-separated name lists, and order expressions (comma separator plus
//! an optional case-insensitive `DESC` suffix per field).

use thiserror::Error;

use crate::types::{NamePath, OrderField};

/// Syntax errors reported by the strict parser variants.
///
/// The lenient entry points never surface these; they stop at the error
/// point and return the prefix parsed so far.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A character appeared where only whitespace or a separator is legal.
    #[error("unexpected character {0:?} at offset {1}")]
    UnexpectedChar(char, usize),
    /// Input ended inside a quoted segment.
    #[error("unclosed quote starting at offset {0}")]
    UnclosedQuote(usize),
}

/// Parses a dotted name path, e.g. `user.address.'zip.code'`.
///
/// Never fails; malformed input yields the longest cleanly parsed prefix.
///
/// # Examples
///
/// ```
/// use objkit_path::parse_path;
///
/// assert_eq!(parse_path("a.b.c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_path("a.'b.c'"), vec!["a", "b.c"]);
/// ```
pub fn parse_path(text: &str) -> NamePath {
    scan_list(text, '.').0
}

/// Strict variant of [`parse_path`].
pub fn parse_path_strict(text: &str) -> Result<NamePath, PathError> {
    let (segments, error) = scan_list(text, '.');
    match error {
        Some(err) => Err(err),
        None => Ok(segments),
    }
}

/// Parses a comma-separated list of names, e.g. `'foo', "bar'bar"`.
///
/// Each name is a single segment; quoting follows the shared grammar.
pub fn parse_names(text: &str) -> Vec<String> {
    scan_list(text, ',').0
}

/// Strict variant of [`parse_names`].
pub fn parse_names_strict(text: &str) -> Result<Vec<String>, PathError> {
    let (names, error) = scan_list(text, ',');
    match error {
        Some(err) => Err(err),
        None => Ok(names),
    }
}

/// Parses an `ORDER BY`-like expression, e.g. `"type, id DESC"`.
///
/// Fields are comma-separated; each is a dotted name path followed by an
/// optional case-insensitive `DESC` word. Path segments may be quoted at
/// any depth; a quoted segment is taken verbatim, so `user.'full name'`
/// names the segments `user` and `full name`.
///
/// # Examples
///
/// ```
/// use objkit_path::{parse_order, OrderField};
///
/// assert_eq!(
///     parse_order("name, size DESC"),
///     vec![
///         OrderField::asc(vec!["name".into()]),
///         OrderField::desc(vec!["size".into()]),
///     ]
/// );
/// ```
pub fn parse_order(text: &str) -> Vec<OrderField> {
    scan_order(text).0
}

/// Strict variant of [`parse_order`].
pub fn parse_order_strict(text: &str) -> Result<Vec<OrderField>, PathError> {
    let (fields, error) = scan_order(text);
    match error {
        Some(err) => Err(err),
        None => Ok(fields),
    }
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Scans a quoted segment body; the opening quote is already consumed.
    /// Inside `'...'` a doubled `'` is a literal `'`; inside `"..."` a `"`
    /// always closes. Returns the text and whether the quote was closed.
    fn scan_quoted(&mut self, quote: char) -> (String, bool) {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            self.advance();
            if c == quote {
                if quote == '\'' && self.peek() == Some('\'') {
                    self.advance();
                    text.push('\'');
                    continue;
                }
                return (text, true);
            }
            text.push(c);
        }
        (text, false)
    }

    /// Scans a bare segment up to (not including) `stop` characters,
    /// trimming trailing whitespace. Leading whitespace is already skipped.
    fn scan_bare(&mut self, stop: &[char]) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if stop.contains(&c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        text.trim_end().to_string()
    }
}

/// Scans a separator-delimited segment list. Returns the segments parsed
/// before any syntax error, plus the error itself for the strict callers.
fn scan_list(input: &str, separator: char) -> (Vec<String>, Option<PathError>) {
    let mut s = Scanner::new(input);
    let mut segments = Vec::new();
    s.skip_whitespace();
    if s.is_at_end() {
        return (segments, None);
    }
    loop {
        match s.peek() {
            Some(quote @ ('\'' | '"')) => {
                let start = s.pos;
                s.advance();
                let (text, closed) = s.scan_quoted(quote);
                segments.push(text);
                if !closed {
                    return (segments, Some(PathError::UnclosedQuote(start)));
                }
                s.skip_whitespace();
                match s.peek() {
                    None => return (segments, None),
                    Some(c) if c == separator => s.advance(),
                    Some(c) => {
                        // The quoted segment itself completed; keep it.
                        return (segments, Some(PathError::UnexpectedChar(c, s.pos)));
                    }
                }
            }
            _ => {
                segments.push(s.scan_bare(&[separator]));
                match s.peek() {
                    None => return (segments, None),
                    Some(_) => s.advance(),
                }
            }
        }
        // A separator was just consumed; a trailing segment is still owed
        // even at end of input.
        s.skip_whitespace();
        if s.is_at_end() {
            segments.push(String::new());
            return (segments, None);
        }
    }
}

fn scan_order(input: &str) -> (Vec<OrderField>, Option<PathError>) {
    let mut s = Scanner::new(input);
    let mut fields = Vec::new();
    s.skip_whitespace();
    if s.is_at_end() {
        return (fields, None);
    }
    loop {
        // Name portion: a dotted path whose segments may each be quoted.
        // Bare segments end at whitespace too, so a direction word can
        // follow.
        let mut path: NamePath = Vec::new();
        loop {
            match s.peek() {
                Some(quote @ ('\'' | '"')) => {
                    let start = s.pos;
                    s.advance();
                    let (text, closed) = s.scan_quoted(quote);
                    path.push(text);
                    if !closed {
                        fields.push(OrderField::asc(path));
                        return (fields, Some(PathError::UnclosedQuote(start)));
                    }
                }
                _ => path.push(s.scan_bare(&['.', ',', ' ', '\t', '\r', '\n'])),
            }
            match s.peek() {
                Some('.') => s.advance(),
                _ => break,
            }
        }
        s.skip_whitespace();
        // Optional direction word.
        let mut ascending = true;
        if !s.is_at_end() && s.peek() != Some(',') {
            let at = s.pos;
            let word = s.scan_bare(&[',', ' ', '\t', '\r', '\n']);
            if let Some(bad) = word.chars().find(|c| !"descDESC".contains(*c)) {
                return (fields, Some(PathError::UnexpectedChar(bad, at)));
            }
            ascending = !word.eq_ignore_ascii_case("desc");
            s.skip_whitespace();
            if !s.is_at_end() && s.peek() != Some(',') {
                let c = s.peek().unwrap_or('\0');
                return (fields, Some(PathError::UnexpectedChar(c, s.pos)));
            }
        }
        fields.push(OrderField { path, ascending });
        if s.is_at_end() {
            return (fields, None);
        }
        s.advance(); // the comma
        s.skip_whitespace();
        if s.is_at_end() {
            // Dangling comma still owes a trailing (empty) field.
            fields.push(OrderField::asc(vec![String::new()]));
            return (fields, None);
        }
    }
}
