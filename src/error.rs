//! Error types
//!
//! A parse fails with exactly one [`WktError`]. Syntax errors come from the lexer and the grammar
//! and always carry a position. Content errors come from the builder, once the text is known to
//! be well formed, and name the offending kind or count instead.

use crate::ast::NodeKind;
use crate::location::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WktError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Content(#[from] ContentError),
}

impl WktError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, WktError::Syntax(_))
    }

    pub fn is_content(&self) -> bool {
        matches!(self, WktError::Content(_))
    }

    /// Source position, when the error has one
    pub fn position(&self) -> Option<Position> {
        match self {
            WktError::Syntax(e) => e.position(),
            WktError::Content(_) => None,
        }
    }
}

/// The text does not match the token rules or the grammar
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("Illegal character(s) at {position}: '{text}'")]
    Lexical { text: String, position: Position },

    #[error("Syntax error at {position}: unexpected {token} '{value}'")]
    UnexpectedToken {
        token: &'static str,
        value: String,
        position: Position,
    },

    #[error("Syntax error: premature end of text at {position}")]
    UnexpectedEnd { position: Position },

    #[error("Syntax error at {position}: brackets nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize, position: Position },
}

impl SyntaxError {
    pub fn position(&self) -> Option<Position> {
        match self {
            SyntaxError::Lexical { position, .. }
            | SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::UnexpectedEnd { position }
            | SyntaxError::NestingTooDeep { position, .. } => Some(*position),
        }
    }
}

/// The text is well formed but breaks a structural rule of the CRS model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    #[error("{child} node is not valid in a {parent} definition")]
    InvalidChild { child: NodeKind, parent: NodeKind },

    #[error("{parent}: {expected} axes expected, {actual} defined")]
    AxisCount {
        parent: NodeKind,
        expected: &'static str,
        actual: usize,
    },

    #[error("Invalid {field} value '{text}'")]
    InvalidNumber { field: &'static str, text: String },

    #[error("{kind} node is incorrectly defined")]
    Malformed { kind: NodeKind },
}
