use std::borrow::Cow;
use std::ops::{Add, AddAssign};

use regex::Regex;
use serde::Serialize;

use crate::language::{LanguageRegistry, LanguageRuleSet};

/// Line tallies for one file or a sum over many.
///
/// `total == code + comments + blank` holds for every record produced by
/// [`LineClassifier`] and is preserved by addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCountRecord {
    pub total: usize,
    pub code: usize,
    pub comments: usize,
    pub blank: usize,
}

impl LineCountRecord {
    #[must_use]
    pub const fn new(code: usize, comments: usize, blank: usize) -> Self {
        Self {
            total: code + comments + blank,
            code,
            comments,
            blank,
        }
    }

    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.total == self.code + self.comments + self.blank
    }
}

impl AddAssign for LineCountRecord {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.code += rhs.code;
        self.comments += rhs.comments;
        self.blank += rhs.blank;
    }
}

impl Add for LineCountRecord {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl std::iter::Sum for LineCountRecord {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Classifies every line of a file as code, comment or blank.
///
/// Multi-line comment spans are removed from the whole content first; each
/// line that disappears is a comment line, and so is a line left empty by a
/// removed span. The remaining lines are trimmed and tested against the
/// single-line rules, which only match at the start of the line. A trailing
/// comment after code leaves the line as code.
pub struct LineClassifier<'a> {
    registry: &'a LanguageRegistry,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(registry: &'a LanguageRegistry) -> Self {
        Self { registry }
    }

    /// Classify `content` using the rules registered for `tag`.
    ///
    /// Unknown tags classify with no comment rules at all.
    #[must_use]
    pub fn classify(&self, content: &str, tag: &str) -> LineCountRecord {
        classify_with(self.registry.rules_for(tag), content)
    }
}

/// Classify `content` against a single rule set.
#[must_use]
pub fn classify_with(rules: &LanguageRuleSet, content: &str) -> LineCountRecord {
    let total = content.split('\n').count();
    let (stripped, touched) = strip_multi_line(rules, content);

    let mut record = LineCountRecord {
        total,
        comments: total - touched.len(),
        ..LineCountRecord::default()
    };

    for (line, was_touched) in stripped.split('\n').zip(touched) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if was_touched {
                record.comments += 1;
            } else {
                record.blank += 1;
            }
        } else if rules.single_line_rules().any(|r| r.starts_line(trimmed)) {
            record.comments += 1;
        } else {
            record.code += 1;
        }
    }

    record
}

/// Remove multi-line spans rule by rule, returning the stripped text and,
/// per remaining line, whether a removed span touched it.
fn strip_multi_line<'c>(rules: &LanguageRuleSet, content: &'c str) -> (Cow<'c, str>, Vec<bool>) {
    let mut text = Cow::Borrowed(content);
    let mut touched = vec![false; content.split('\n').count()];

    for rule in rules.multi_line_rules() {
        let (next_text, next_touched) = remove_spans(rule.regex(), &text, &touched);
        if let Some(next_text) = next_text {
            text = Cow::Owned(next_text);
            touched = next_touched;
        }
    }

    (text, touched)
}

/// Returns `None` when the pattern matched nothing.
fn remove_spans(pattern: &Regex, content: &str, touched: &[bool]) -> (Option<String>, Vec<bool>) {
    let mut stripper = SpanStripper::new(content.len(), touched);
    let mut last = 0;
    let mut matched = false;

    for m in pattern.find_iter(content) {
        if m.is_empty() {
            continue;
        }
        matched = true;
        stripper.keep(&content[last..m.start()]);
        stripper.drop_span(m.as_str());
        last = m.end();
    }

    if !matched {
        return (None, Vec::new());
    }

    stripper.keep(&content[last..]);
    let (text, flags) = stripper.finish();
    (Some(text), flags)
}

struct SpanStripper<'t> {
    touched: &'t [bool],
    out: String,
    flags: Vec<bool>,
    line: usize,
    current: bool,
}

impl<'t> SpanStripper<'t> {
    fn new(capacity: usize, touched: &'t [bool]) -> Self {
        Self {
            touched,
            out: String::with_capacity(capacity),
            flags: Vec::with_capacity(touched.len()),
            line: 0,
            current: touched.first().copied().unwrap_or(false),
        }
    }

    fn keep(&mut self, segment: &str) {
        for (i, piece) in segment.split('\n').enumerate() {
            if i > 0 {
                self.flags.push(self.current);
                self.line += 1;
                self.current = self.touched.get(self.line).copied().unwrap_or(false);
                self.out.push('\n');
            }
            self.out.push_str(piece);
        }
    }

    fn drop_span(&mut self, span: &str) {
        self.line += span.matches('\n').count();
        self.current = true;
    }

    fn finish(mut self) -> (String, Vec<bool>) {
        self.flags.push(self.current);
        (self.out, self.flags)
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
