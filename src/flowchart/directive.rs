//! Directive vocabulary and line matching.
//!
//! Each input line starts with an upper-case keyword (`STEP:`, `IF:`,
//! `PARALLEL START:`, ...). The vocabulary is closed: anything else is not a
//! directive and the builder skips it.

use super::ast::Shape;

/// What a recognized keyword does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Mints a node of the given shape linked from the previous node.
    Node(Shape),
    /// Mints a diamond and records it as the current decision node.
    Decision,
    /// `YES:` / `NO:` branch hanging off the current decision node.
    Branch(Branch),
    /// Note linked from the previous node with a dotted edge.
    Comment,
    /// Back-reference edge to an earlier node by label.
    GoTo,
    ParallelStart,
    ParallelPath,
    ParallelEnd,
    GroupStart,
    GroupEnd,
}

impl Directive {
    /// Whether branch text starting with this directive is dispatched as that
    /// directive instead of being kept as literal text. Only a nested
    /// `YES:`/`NO:` stays literal.
    #[must_use]
    pub fn nests_in_branch(self) -> bool {
        !matches!(self, Self::Branch(_))
    }
}

/// Decision branch polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Yes,
    No,
}

impl Branch {
    /// Edge label for this branch.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// What may follow a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Keyword must be followed by `:`.
    Colon,
    /// `:`, whitespace, or end of line.
    ColonOrSpace,
}

/// One entry of the vocabulary table.
#[derive(Debug, Clone, Copy)]
pub struct Keyword {
    pub text: &'static str,
    pub directive: Directive,
    pub separator: Separator,
}

const fn kw(text: &'static str, directive: Directive) -> Keyword {
    Keyword { text, directive, separator: Separator::Colon }
}

const fn kw_loose(text: &'static str, directive: Directive) -> Keyword {
    Keyword { text, directive, separator: Separator::ColonOrSpace }
}

/// The vocabulary, ordered longest keyword first so the first hit is the
/// longest match.
pub const KEYWORDS: &[Keyword] = &[
    kw("MULTIPLE DOCUMENTS", Directive::Node(Shape::Subroutine)),
    kw("MULTIPLE DOCUMENT", Directive::Node(Shape::Subroutine)),
    kw("SUMMING JUNCTION", Directive::Node(Shape::Terminal)),
    kw("INTERNAL STORAGE", Directive::Node(Shape::Cylinder)),
    kw("MULTI DOCUMENTS", Directive::Node(Shape::Subroutine)),
    kw("PARALLEL START", Directive::ParallelStart),
    kw("MULTI DOCUMENT", Directive::Node(Shape::Subroutine)),
    kw("PARALLEL PATH", Directive::ParallelPath),
    kw("PARALLEL END", Directive::ParallelEnd),
    kw("MANUAL INPUT", Directive::Node(Shape::InputOutput)),
    kw("DATA STORAGE", Directive::Node(Shape::Cylinder)),
    kw_loose("GROUP START", Directive::GroupStart),
    kw("STORED DATA", Directive::Node(Shape::Cylinder)),
    kw("MANUAL LOOP", Directive::Node(Shape::Process)),
    kw("PREPARATION", Directive::Node(Shape::Process)),
    kw("LOOP LIMIT", Directive::Node(Shape::Process)),
    kw("SUBPROCESS", Directive::Node(Shape::Rounded)),
    kw("SUBROUTINE", Directive::Node(Shape::Subroutine)),
    kw_loose("GROUP END", Directive::GroupEnd),
    kw("CONNECTOR", Directive::Node(Shape::Terminal)),
    kw("DATABASE", Directive::Node(Shape::Cylinder)),
    kw("DECISION", Directive::Decision),
    kw("DOCUMENT", Directive::Node(Shape::Process)),
    kw("OFF PAGE", Directive::Node(Shape::Terminal)),
    kw("PROCESS", Directive::Node(Shape::Process)),
    kw("COLLATE", Directive::Node(Shape::Process)),
    kw("COMMENT", Directive::Comment),
    kw("DISPLAY", Directive::Node(Shape::Display)),
    kw("OFFPAGE", Directive::Node(Shape::Terminal)),
    kw("OUTPUT", Directive::Node(Shape::InputOutput)),
    kw("START", Directive::Node(Shape::Terminal)),
    kw("INPUT", Directive::Node(Shape::InputOutput)),
    kw("DELAY", Directive::Node(Shape::Process)),
    kw("MERGE", Directive::Node(Shape::Decision)),
    kw_loose("GO TO", Directive::GoTo),
    kw("STEP", Directive::Node(Shape::Process)),
    kw("SORT", Directive::Node(Shape::Process)),
    kw("NOTE", Directive::Comment),
    kw_loose("GOTO", Directive::GoTo),
    kw("END", Directive::Node(Shape::Terminal)),
    kw("YES", Directive::Branch(Branch::Yes)),
    kw("IF", Directive::Decision),
    kw("NO", Directive::Branch(Branch::No)),
    kw("OR", Directive::Node(Shape::Decision)),
];

/// A line resolved against the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matched<'a> {
    pub keyword: &'static str,
    pub directive: Directive,
    /// Raw text after the keyword and its separator.
    pub rest: &'a str,
}

impl Keyword {
    fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = line.strip_prefix(self.text)?;
        if let Some(after_colon) = rest.strip_prefix(':') {
            return Some(after_colon);
        }
        match self.separator {
            Separator::Colon => None,
            Separator::ColonOrSpace => (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest),
        }
    }
}

/// Resolve a line to its directive. Leading whitespace is ignored; keywords
/// are case-sensitive.
#[must_use]
pub fn match_directive(line: &str) -> Option<Matched<'_>> {
    let line = line.trim_start();
    KEYWORDS.iter().find_map(|kw| {
        kw.strip(line)
            .map(|rest| Matched { keyword: kw.text, directive: kw.directive, rest })
    })
}

/// Strip diagram-reserved bracket characters and trim.
#[must_use]
pub fn clean_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '{' | '}' | '[' | ']' | '(' | ')'))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Key used by the label index: cleaned, then lower-cased.
#[must_use]
pub fn normalize_label(raw: &str) -> String {
    clean_label(raw).to_lowercase()
}

#[cfg(test)]
#[path = "directive_test.rs"]
mod tests;
