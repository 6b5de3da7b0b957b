//! Token definitions for CRS WKT
//!
//! Tokens are defined with the logos derive macro. Whitespace, including newlines, is skipped by
//! logos itself; line numbers are recovered later from byte offsets.
//!
//! Priorities matter in three places:
//! - axis direction literals beat the generic keyword rule, so `NORTH` is a direction while
//!   `NORTHING` (longer match) is still a keyword;
//! - an all-digit quoted string is a `Code`, any other quoted string a `Name`;
//! - `#` comments are always recognized here and accepted or rejected by the lexer depending on
//!   the parsing mode.

use crate::ast::{AxisDirection, NodeKind};
use logos::Logos;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// WKT keyword table, read-only for the life of the process
static KEYWORDS: Lazy<HashMap<&'static str, NodeKind>> = Lazy::new(|| {
    NodeKind::ALL
        .iter()
        .map(|kind| (kind.as_str(), *kind))
        .collect()
});

/// An upper-case word, resolved through the keyword table
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Keyword {
    Node(NodeKind),
    /// Well-formed word that is not a WKT keyword; the grammar rejects it
    Unknown(String),
}

impl Keyword {
    pub fn lookup(word: &str) -> Self {
        match KEYWORDS.get(word) {
            Some(kind) => Keyword::Node(*kind),
            None => Keyword::Unknown(word.to_string()),
        }
    }
}

/// All tokens of the CRS WKT format
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[logos(skip r"[ \t\r\f\n]+")]
pub enum Token {
    #[regex(r"NORTH|SOUTH|EAST|WEST|UP|DOWN|OTHER", axis_direction, priority = 10)]
    AxisDirection(AxisDirection),

    #[regex(r"[A-Z][A-Z0-9_]*", |lex| Keyword::lookup(lex.slice()))]
    Keyword(Keyword),

    // Authority codes are restricted to digits, which is the established usage
    #[regex(r#""[0-9]+""#, unquote, priority = 6)]
    Code(String),

    #[regex(r#""[^"]*""#, unquote)]
    Name(String),

    /// Numeric literal, kept as text; each field decides how to coerce it
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)", |lex| lex.slice().to_string())]
    Number(String),

    // Either bracket style may open or close a group
    #[token("[")]
    #[token("(")]
    Open,

    #[token("]")]
    #[token(")")]
    Close,

    #[token(",")]
    Comma,

    #[regex(r"#[^\n]*")]
    Comment,
}

fn axis_direction(lex: &mut logos::Lexer<Token>) -> Option<AxisDirection> {
    AxisDirection::from_literal(lex.slice())
}

fn unquote(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

impl Token {
    /// Token type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::AxisDirection(_) => "AXIS_DIR",
            Token::Keyword(Keyword::Node(_)) => "KEYWORD",
            Token::Keyword(Keyword::Unknown(_)) => "unknown KEYWORD",
            Token::Code(_) => "CODE",
            Token::Name(_) => "NAME",
            Token::Number(_) => "NUMBER",
            Token::Open => "LBRACKET",
            Token::Close => "RBRACKET",
            Token::Comma => "','",
            Token::Comment => "COMMENT",
        }
    }

    pub fn is_keyword(&self, kind: NodeKind) -> bool {
        matches!(self, Token::Keyword(Keyword::Node(k)) if *k == kind)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::AxisDirection(dir) => write!(f, "{dir}"),
            Token::Keyword(Keyword::Node(kind)) => write!(f, "{kind}"),
            Token::Keyword(Keyword::Unknown(word)) => write!(f, "{word}"),
            Token::Code(code) => write!(f, "\"{code}\""),
            Token::Name(name) => write!(f, "\"{name}\""),
            Token::Number(text) => write!(f, "{text}"),
            Token::Open => write!(f, "["),
            Token::Close => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Comment => write!(f, "#"),
        }
    }
}
