//! Line-oriented highlighting for serialized catalog text.
//!
//! Each line falls into one of four shapes: comment, list item, `key: value`
//! or plain. Values are then classified by how they look. Multi-line
//! scalars, anchors and nested flow collections are not understood.

use colored::{ColoredString, Colorize};
use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#.*$").expect("comment regex"));
static LIST_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(-\s+)(.*)$").expect("list item regex"));
static KEY_VALUE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)([^:\n]+?)(:)(\s*)(.*)$").expect("key-value regex"));
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?$").expect("number regex"));

const NULL_WORDS: [&str; 4] = ["~", "null", "nil", "none"];
const BOOL_WORDS: [&str; 6] = ["true", "false", "yes", "no", "on", "off"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    ListItem,
    KeyValue,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Punctuation,
    Null,
    Boolean,
    Number,
    Quoted,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Whitespace,
    Comment,
    ListMarker,
    TopLevelKey,
    Key,
    Colon,
    Value(ValueKind),
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub token: Token,
    pub text: &'a str,
}

/// A line split into typed spans. Concatenating the span texts yields the
/// original line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: LineKind,
    pub spans: Vec<Span<'a>>,
}

impl<'a> ClassifiedLine<'a> {
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.spans.iter().find_map(|span| match span.token {
            Token::Value(kind) => Some(kind),
            _ => None,
        })
    }

    pub fn text_of(&self, token: Token) -> Option<&'a str> {
        self.spans
            .iter()
            .find(|span| span.token == token)
            .map(|span| span.text)
    }
}

pub fn classify_value(value: &str) -> ValueKind {
    let trimmed = value.trim();
    let lowered = trimmed.to_lowercase();
    if trimmed == "[]" || trimmed == "{}" {
        ValueKind::Punctuation
    } else if NULL_WORDS.contains(&lowered.as_str()) {
        ValueKind::Null
    } else if BOOL_WORDS.contains(&lowered.as_str()) {
        ValueKind::Boolean
    } else if NUMBER.is_match(trimmed) {
        ValueKind::Number
    } else if is_quoted(trimmed) {
        ValueKind::Quoted
    } else {
        ValueKind::Text
    }
}

fn is_quoted(value: &str) -> bool {
    (value.starts_with('\'') && value.ends_with('\''))
        || (value.starts_with('"') && value.ends_with('"'))
}

pub fn classify_line(line: &str) -> ClassifiedLine<'_> {
    if COMMENT_LINE.is_match(line) {
        return ClassifiedLine {
            kind: LineKind::Comment,
            spans: vec![Span {
                token: Token::Comment,
                text: line,
            }],
        };
    }

    if let Some(caps) = LIST_LINE.captures(line) {
        let mut spans = Vec::with_capacity(3);
        push_span(&mut spans, Token::Whitespace, caps.get(1).map_or("", |m| m.as_str()));
        push_span(&mut spans, Token::ListMarker, caps.get(2).map_or("", |m| m.as_str()));
        push_value(&mut spans, caps.get(3).map_or("", |m| m.as_str()));
        return ClassifiedLine {
            kind: LineKind::ListItem,
            spans,
        };
    }

    if let Some(caps) = KEY_VALUE_LINE.captures(line) {
        let indent = caps.get(1).map_or("", |m| m.as_str());
        let key_token = if indent.is_empty() {
            Token::TopLevelKey
        } else {
            Token::Key
        };
        let mut spans = Vec::with_capacity(5);
        push_span(&mut spans, Token::Whitespace, indent);
        push_span(&mut spans, key_token, caps.get(2).map_or("", |m| m.as_str()));
        push_span(&mut spans, Token::Colon, caps.get(3).map_or("", |m| m.as_str()));
        push_span(&mut spans, Token::Whitespace, caps.get(4).map_or("", |m| m.as_str()));
        push_value(&mut spans, caps.get(5).map_or("", |m| m.as_str()));
        return ClassifiedLine {
            kind: LineKind::KeyValue,
            spans,
        };
    }

    let mut spans = Vec::with_capacity(1);
    push_span(&mut spans, Token::Plain, line);
    ClassifiedLine {
        kind: LineKind::Plain,
        spans,
    }
}

fn push_span<'a>(spans: &mut Vec<Span<'a>>, token: Token, text: &'a str) {
    if !text.is_empty() {
        spans.push(Span { token, text });
    }
}

fn push_value<'a>(spans: &mut Vec<Span<'a>>, text: &'a str) {
    push_span(spans, Token::Value(classify_value(text)), text);
}

/// Applies terminal styling to classified text when enabled.
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    enabled: bool,
}

impl Colorizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Styles every line of `text`. Disabled colorizers return it untouched.
    pub fn colorize(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.lines()
            .map(|line| self.render_line(&classify_line(line)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_line(&self, line: &ClassifiedLine<'_>) -> String {
        if !self.enabled {
            return line.spans.iter().map(|span| span.text).collect();
        }
        line.spans
            .iter()
            .map(|span| paint(span.token, span.text).to_string())
            .collect()
    }
}

fn paint(token: Token, text: &str) -> ColoredString {
    match token {
        Token::Comment => text.blue(),
        Token::ListMarker => text.cyan(),
        Token::TopLevelKey => text.bold().magenta(),
        Token::Key => text.bold(),
        Token::Value(ValueKind::Punctuation | ValueKind::Null | ValueKind::Boolean) => {
            text.magenta()
        }
        Token::Value(ValueKind::Number) => text.yellow(),
        Token::Value(ValueKind::Quoted | ValueKind::Text) => text.green(),
        Token::Whitespace | Token::Colon | Token::Plain => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rebuild(line: &ClassifiedLine<'_>) -> String {
        line.spans.iter().map(|span| span.text).collect()
    }

    #[test]
    fn numeric_value_is_detected() {
        let line = classify_line("key: 42");
        assert_eq!(line.kind, LineKind::KeyValue);
        assert_eq!(line.value_kind(), Some(ValueKind::Number));
        assert_eq!(line.text_of(Token::Value(ValueKind::Number)), Some("42"));
        assert_eq!(line.text_of(Token::TopLevelKey), Some("key"));
    }

    #[test]
    fn quoted_value_is_a_string() {
        let line = classify_line("key: \"abc\"");
        assert_eq!(line.value_kind(), Some(ValueKind::Quoted));
        assert_eq!(classify_line("  k: 'x'").value_kind(), Some(ValueKind::Quoted));
    }

    #[test]
    fn dash_is_a_list_marker() {
        let line = classify_line("- e-laptop-w");
        assert_eq!(line.kind, LineKind::ListItem);
        assert_eq!(line.spans[0].token, Token::ListMarker);
        assert_eq!(line.spans[0].text, "- ");
        assert_eq!(line.value_kind(), Some(ValueKind::Text));
    }

    #[test]
    fn nested_keys_differ_from_top_level_keys() {
        let nested = classify_line("  e: electronics");
        assert_eq!(nested.text_of(Token::Key), Some("e"));
        assert!(nested.text_of(Token::TopLevelKey).is_none());
        let top = classify_line("categories:");
        assert_eq!(top.text_of(Token::TopLevelKey), Some("categories"));
        assert_eq!(top.value_kind(), None);
    }

    #[test]
    fn value_shapes() {
        assert_eq!(classify_value(" [] "), ValueKind::Punctuation);
        assert_eq!(classify_value("{}"), ValueKind::Punctuation);
        assert_eq!(classify_value("~"), ValueKind::Null);
        assert_eq!(classify_value("None"), ValueKind::Null);
        assert_eq!(classify_value("Yes"), ValueKind::Boolean);
        assert_eq!(classify_value("off"), ValueKind::Boolean);
        assert_eq!(classify_value("-3.5e+2"), ValueKind::Number);
        assert_eq!(classify_value("+7"), ValueKind::Number);
        assert_eq!(classify_value("1.2.3"), ValueKind::Text);
        assert_eq!(classify_value("laptop"), ValueKind::Text);
    }

    #[test]
    fn comments_and_plain_lines() {
        assert_eq!(classify_line("  # note").kind, LineKind::Comment);
        assert_eq!(classify_line("just words").kind, LineKind::Plain);
        assert!(classify_line("").spans.is_empty());
    }

    #[test]
    fn spans_rebuild_the_line() {
        for line in ["categories:", "  e: electronics", "electronics: []", "- 'x'", "  - a: b", "#c", "plain"] {
            assert_eq!(rebuild(&classify_line(line)), line);
        }
    }

    #[test]
    fn disabled_colorizer_passes_text_through() {
        let text = "categories:\n  e: electronics\nelectronics:\n- e-laptop-w\n";
        assert_eq!(Colorizer::new(false).colorize(text), text);
    }

    #[test]
    fn enabled_colorizer_styles_values() {
        colored::control::set_override(true);
        let rendered = Colorizer::new(true).colorize("count: 42\n- item");
        colored::control::unset_override();
        assert!(rendered.contains("\u{1b}[33m42"));
        assert!(rendered.contains("\u{1b}[36m- "));
        assert!(!rendered.ends_with('\n'));
    }
}
